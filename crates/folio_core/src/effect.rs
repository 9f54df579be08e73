#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start exactly one image-load attempt for the given candidate.
    LoadPreview {
        card_id: crate::CardId,
        epoch: u64,
        source_index: usize,
        source: String,
    },
    /// Ask the surface's viewport capability to watch this card.
    ObserveVisibility { card_id: crate::CardId },
    /// Fire-once unsubscribe after a card has been revealed.
    StopObserving { card_id: crate::CardId },
}
