#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Replace the catalog and mount one card per project.
    CatalogLoaded(Vec<crate::ProjectRef>),
    /// The owning URL of a card changed; resets its preview machine.
    ProjectUrlChanged { card_id: crate::CardId, url: String },
    /// The current image-load attempt failed.
    PreviewFailed {
        card_id: crate::CardId,
        epoch: u64,
        source_index: usize,
    },
    /// The current image-load attempt produced a usable image.
    PreviewLoaded {
        card_id: crate::CardId,
        epoch: u64,
        source_index: usize,
    },
    /// Viewport reported the card visible.
    CardShown { card_id: crate::CardId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
