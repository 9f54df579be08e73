use std::sync::mpsc;
use std::thread;

use folio_core::{Effect, Msg};
use folio_engine::{EngineEvent, EngineHandle, ProbeSettings};
use folio_logging::{folio_debug, folio_info};

use super::viewport::{StaggeredViewport, Viewport};

/// Routes core effects to the engine and the viewport capability, and
/// pumps engine events back into the message channel.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    viewport: StaggeredViewport,
}

impl EffectRunner {
    pub(crate) fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let mut engine = EngineHandle::new(ProbeSettings::default());
        let events = engine.take_events().expect("engine event receiver");
        spawn_event_pump(events, msg_tx.clone());
        Self {
            engine,
            viewport: StaggeredViewport::new(msg_tx),
        }
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPreview {
                    card_id,
                    epoch,
                    source_index,
                    source,
                } => {
                    folio_info!(
                        "LoadPreview card={} attempt={} src={}",
                        card_id,
                        source_index,
                        source
                    );
                    self.engine.probe(card_id, epoch, source_index, source);
                }
                Effect::ObserveVisibility { card_id } => {
                    self.viewport.observe(card_id);
                }
                Effect::StopObserving { card_id } => {
                    folio_debug!("StopObserving card={}", card_id);
                    self.viewport.cancel(card_id);
                }
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::ProbeCompleted {
                    card_id,
                    epoch,
                    source_index,
                    result,
                } => match result {
                    Ok(_) => Msg::PreviewLoaded {
                        card_id,
                        epoch,
                        source_index,
                    },
                    Err(_) => Msg::PreviewFailed {
                        card_id,
                        epoch,
                        source_index,
                    },
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
