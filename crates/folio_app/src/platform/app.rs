use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use folio_core::{update, AppState, Msg, ProjectRef};
use folio_logging::{folio_info, folio_warn};

use super::effects::EffectRunner;
use crate::ui;

/// How long the demo waits for every card to settle before giving up.
const RUN_DEADLINE: Duration = Duration::from_secs(60);
const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub(crate) fn run(projects: Vec<ProjectRef>, contact_email: &str) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone());

    // Background tick to coalesce rendering.
    thread::spawn(move || {
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let route = ui::render::route_for_os(std::env::consts::OS);
    println!("{}", ui::render::contact_line(contact_email, route));

    let (mut state, effects) = update(AppState::new(), Msg::CatalogLoaded(projects));
    runner.run(effects);

    let started = Instant::now();
    loop {
        match msg_rx.recv_timeout(Duration::from_millis(250)) {
            Ok(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if state.consume_dirty() {
            let view = state.view();
            println!("{}", ui::render::render(&view));
            if view.settled && view.cards.iter().all(|card| card.revealed) {
                folio_info!("all previews settled");
                break;
            }
        }

        if started.elapsed() > RUN_DEADLINE {
            folio_warn!("deadline reached before every preview settled");
            println!("{}", ui::render::render(&state.view()));
            break;
        }
    }

    Ok(())
}
