use std::sync::{mpsc, Arc};
use std::thread;

use folio_logging::folio_warn;

use crate::probe::{ImageProbe, ProbeSettings, ReqwestProbe};
use crate::{CardId, EngineEvent};

enum EngineCommand {
    Probe {
        card_id: CardId,
        epoch: u64,
        source_index: usize,
        url: String,
    },
}

/// Handle to the worker thread executing image-load attempts.
///
/// Commands are fire-and-forget; each one produces exactly one
/// `ProbeCompleted` event on the receiver obtained from [`take_events`].
///
/// [`take_events`]: EngineHandle::take_events
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Option<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: ProbeSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let probe = Arc::new(ReqwestProbe::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let probe = probe.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(probe.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Some(event_rx),
        }
    }

    pub fn probe(&self, card_id: CardId, epoch: u64, source_index: usize, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Probe {
            card_id,
            epoch,
            source_index,
            url: url.into(),
        });
    }

    /// Hands the event side to the driver. Subsequent calls return `None`.
    pub fn take_events(&mut self) -> Option<mpsc::Receiver<EngineEvent>> {
        self.event_rx.take()
    }
}

async fn handle_command(
    probe: &dyn ImageProbe,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Probe {
            card_id,
            epoch,
            source_index,
            url,
        } => {
            let result = probe.probe(card_id, &url).await;
            if let Err(err) = &result {
                folio_warn!("candidate {} failed for card {}: {}", source_index, card_id, err);
            }
            let _ = event_tx.send(EngineEvent::ProbeCompleted {
                card_id,
                epoch,
                source_index,
                result,
            });
        }
    }
}
