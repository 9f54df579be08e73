use crate::state::CardState;
use crate::{CardId, PreviewPhase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub cards: Vec<CardView>,
    /// True once every card has either settled its current attempt or
    /// exhausted its candidates.
    pub settled: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub card_id: CardId,
    pub name: String,
    pub href: String,
    pub domain: String,
    pub summary: Option<String>,
    pub category: Option<String>,
    /// The candidate to render, while any remain. Rendering is optimistic:
    /// the current candidate is shown as the image regardless of whether
    /// its load already completed.
    pub image_src: Option<String>,
    pub attempt: Option<usize>,
    pub attempts_total: usize,
    pub exhausted: bool,
    /// Deterministic fallback tile shown instead of an image once every
    /// candidate has failed.
    pub placeholder: Option<PlaceholderView>,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderView {
    /// First character of the domain, upper-cased; empty when the domain
    /// itself is empty.
    pub initial: String,
    pub domain: String,
}

pub(crate) fn card_view(card_id: CardId, card: &CardState) -> CardView {
    let (image_src, attempt, exhausted) = match card.phase {
        PreviewPhase::Attempting(index) => (card.candidates.get(index).cloned(), Some(index), false),
        PreviewPhase::Exhausted => (None, None, true),
    };
    let placeholder = exhausted.then(|| PlaceholderView {
        initial: card
            .domain
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
        domain: card.domain.clone(),
    });
    CardView {
        card_id,
        name: card.project.name.clone(),
        href: card.href.clone(),
        domain: card.domain.clone(),
        summary: card.project.summary.clone(),
        category: card.project.category.clone(),
        image_src,
        attempt,
        attempts_total: card.candidates.len(),
        exhausted,
        placeholder,
        revealed: card.revealed,
    }
}
