use std::collections::BTreeMap;

use crate::link::{domain_of, normalize_href};
use crate::providers::ProviderChain;
use crate::view_model::{card_view, AppViewModel};

pub type CardId = u64;

/// One entry of the immutable project catalog.
///
/// Configuration data: never created, mutated or destroyed by the pipeline
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: String,
    pub url: String,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Where a card's preview resolution currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    /// Candidate `i` is the one currently loading or shown. Success is
    /// implicit; only a failure event moves the index forward.
    Attempting(usize),
    /// Every candidate failed. Absorbing: only a URL change leaves it.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardState {
    pub(crate) project: ProjectRef,
    pub(crate) href: String,
    pub(crate) domain: String,
    pub(crate) candidates: Vec<String>,
    pub(crate) phase: PreviewPhase,
    /// Changes with the owning URL so events from a previous URL are
    /// never observed.
    pub(crate) epoch: u64,
    pub(crate) probe_settled: bool,
    pub(crate) revealed: bool,
}

impl CardState {
    fn mount(project: ProjectRef, chain: &ProviderChain, epoch: u64) -> Self {
        let href = normalize_href(&project.url);
        let domain = domain_of(&project.url);
        let candidates = chain.candidates_for(&project.url);
        let phase = if candidates.is_empty() {
            PreviewPhase::Exhausted
        } else {
            PreviewPhase::Attempting(0)
        };
        Self {
            project,
            href,
            domain,
            candidates,
            phase,
            epoch,
            probe_settled: false,
            revealed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    chain: ProviderChain,
    cards: BTreeMap<CardId, CardState>,
    next_card_id: CardId,
    epochs: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_providers(ProviderChain::default())
    }

    pub fn with_providers(chain: ProviderChain) -> Self {
        Self {
            chain,
            cards: BTreeMap::new(),
            next_card_id: 1,
            epochs: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let cards = self
            .cards
            .iter()
            .map(|(id, card)| card_view(*id, card))
            .collect();
        let settled = self
            .cards
            .values()
            .all(|card| matches!(card.phase, PreviewPhase::Exhausted) || card.probe_settled);
        AppViewModel {
            cards,
            settled,
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    fn next_epoch(&mut self) -> u64 {
        self.epochs += 1;
        self.epochs
    }

    /// Replaces the catalog wholesale; each project mounts one card in
    /// `Attempting(0)`. Returns the mounted ids in catalog order.
    pub(crate) fn mount_catalog(&mut self, projects: Vec<ProjectRef>) -> Vec<CardId> {
        self.cards.clear();
        self.next_card_id = 1;
        let mut mounted = Vec::with_capacity(projects.len());
        for project in projects {
            let card_id = self.next_card_id;
            self.next_card_id += 1;
            let epoch = self.next_epoch();
            self.cards
                .insert(card_id, CardState::mount(project, &self.chain, epoch));
            mounted.push(card_id);
        }
        self.dirty = true;
        mounted
    }

    /// Applies a URL change. Rebuilds the candidate list and resets the
    /// machine to the first candidate under a fresh epoch. A same-string
    /// update or unknown card is a no-op.
    pub(crate) fn change_card_url(&mut self, card_id: CardId, url: String) -> bool {
        let changed = matches!(self.cards.get(&card_id), Some(card) if card.project.url != url);
        if !changed {
            return false;
        }
        let epoch = self.next_epoch();
        let chain = self.chain.clone();
        if let Some(card) = self.cards.get_mut(&card_id) {
            let mut project = card.project.clone();
            project.url = url;
            *card = CardState::mount(project, &chain, epoch);
            self.dirty = true;
        }
        true
    }

    /// Applies a load-failure event: advances to the next candidate, or to
    /// `Exhausted` past the last one. Stale epochs, mismatched indices and
    /// already-exhausted cards are all ignored, so an index is never
    /// skipped and never double-applied.
    pub(crate) fn advance_preview(&mut self, card_id: CardId, epoch: u64, source_index: usize) -> bool {
        let Some(card) = self.cards.get_mut(&card_id) else {
            return false;
        };
        if card.epoch != epoch {
            return false;
        }
        let PreviewPhase::Attempting(current) = card.phase else {
            return false;
        };
        if current != source_index {
            return false;
        }
        card.probe_settled = false;
        card.phase = if current + 1 < card.candidates.len() {
            PreviewPhase::Attempting(current + 1)
        } else {
            PreviewPhase::Exhausted
        };
        self.dirty = true;
        true
    }

    /// Applies a load-success event under the same guards as
    /// [`advance_preview`]. The phase does not change; the flag only feeds
    /// the `settled` aggregate.
    pub(crate) fn settle_preview(&mut self, card_id: CardId, epoch: u64, source_index: usize) -> bool {
        let Some(card) = self.cards.get_mut(&card_id) else {
            return false;
        };
        if card.epoch != epoch || card.phase != PreviewPhase::Attempting(source_index) {
            return false;
        }
        if card.probe_settled {
            return false;
        }
        card.probe_settled = true;
        self.dirty = true;
        true
    }

    /// One-shot reveal: the first report flips the flag, later ones are
    /// no-ops.
    pub(crate) fn reveal_card(&mut self, card_id: CardId) -> bool {
        let Some(card) = self.cards.get_mut(&card_id) else {
            return false;
        };
        if card.revealed {
            return false;
        }
        card.revealed = true;
        self.dirty = true;
        true
    }

    pub(crate) fn card(&self, card_id: CardId) -> Option<&CardState> {
        self.cards.get(&card_id)
    }
}
