use crate::{AppState, CardId, Effect, Msg, PreviewPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogLoaded(projects) => {
            let mounted = state.mount_catalog(projects);
            let mut effects = Vec::with_capacity(mounted.len() * 2);
            for card_id in mounted {
                effects.push(Effect::ObserveVisibility { card_id });
                effects.extend(load_current(&state, card_id));
            }
            effects
        }
        Msg::ProjectUrlChanged { card_id, url } => {
            if state.change_card_url(card_id, url) {
                load_current(&state, card_id).into_iter().collect()
            } else {
                Vec::new()
            }
        }
        Msg::PreviewFailed {
            card_id,
            epoch,
            source_index,
        } => {
            if state.advance_preview(card_id, epoch, source_index) {
                load_current(&state, card_id).into_iter().collect()
            } else {
                Vec::new()
            }
        }
        Msg::PreviewLoaded {
            card_id,
            epoch,
            source_index,
        } => {
            state.settle_preview(card_id, epoch, source_index);
            Vec::new()
        }
        Msg::CardShown { card_id } => {
            if state.reveal_card(card_id) {
                vec![Effect::StopObserving { card_id }]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// The one load attempt owed to the card's current `Attempting` index.
/// Exhausted cards owe nothing.
fn load_current(state: &AppState, card_id: CardId) -> Option<Effect> {
    let card = state.card(card_id)?;
    match card.phase {
        PreviewPhase::Attempting(index) => Some(Effect::LoadPreview {
            card_id,
            epoch: card.epoch,
            source_index: index,
            source: card.candidates.get(index)?.clone(),
        }),
        PreviewPhase::Exhausted => None,
    }
}
