//! The deck session: the ordered card list plus navigation and flip state.
//!
//! Two states only: Empty (`size() == 0`) and Populated. `import` is the
//! only edge into Populated, `clear` the only edge back. Navigation and flip
//! are no-ops while Empty. The card list persists through the snapshot port
//! after every mutation; index and flip state are session-scoped and reset
//! on the next open.

use crate::{export_csv, parse, Card, DeckError, Lexicon, SnapshotStore, StoreError};
use std::sync::Arc;

pub struct DeckSession {
    cards: Vec<Card>,
    current: usize,
    flipped: bool,
    store: Arc<dyn SnapshotStore>,
    lexicon: Lexicon,
}

#[derive(Debug)]
pub struct ImportReport {
    pub added: usize,
    /// A failed write is a warning, not a rollback: the in-memory deck keeps
    /// the new cards and may diverge from storage until the next save.
    pub persist_error: Option<StoreError>,
}

#[derive(Debug)]
pub struct ClearReport {
    pub removed: usize,
    pub persist_error: Option<StoreError>,
}

impl DeckSession {
    /// Opens a session against the given store, hydrating the card list
    /// from the snapshot if one exists. A corrupted snapshot resets the deck
    /// to empty and is overwritten on the spot.
    pub fn open(store: Arc<dyn SnapshotStore>, lexicon: Lexicon) -> Self {
        let mut session = Self {
            cards: Vec::new(),
            current: 0,
            flipped: false,
            store,
            lexicon,
        };
        session.hydrate();
        session
    }

    fn hydrate(&mut self) {
        match self.store.load() {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Card>>(&bytes) {
                Ok(cards) => self.cards = cards,
                Err(err) => {
                    log::warn!("snapshot is corrupted, starting empty: {err}");
                    if let Err(err) = self.persist() {
                        log::warn!("could not overwrite corrupted snapshot: {err}");
                    }
                }
            },
            Ok(None) => {}
            Err(err) => log::warn!("snapshot load failed, starting empty: {err}"),
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&self.cards).expect("serialize cards");
        self.store.save(&bytes)
    }

    /// Appends parsed cards to the deck (imports merge, they never replace)
    /// and jumps to the first newly-added card. Empty input mutates nothing.
    pub fn import(&mut self, parsed: Vec<Card>) -> Result<ImportReport, DeckError> {
        if parsed.is_empty() {
            return Err(DeckError::NothingImported);
        }
        let added = parsed.len();
        let first_new = self.cards.len();
        self.cards.extend(parsed);
        self.current = first_new;
        self.flipped = false;

        let persist_error = self.persist().err();
        if let Some(err) = &persist_error {
            log::warn!("deck not persisted after import: {err}");
        }
        Ok(ImportReport { added, persist_error })
    }

    /// Parses raw delimited text with the session lexicon and imports the
    /// result.
    pub fn import_text(&mut self, text: &str) -> Result<ImportReport, DeckError> {
        let parsed = parse(text, &self.lexicon);
        self.import(parsed)
    }

    /// Empties the deck. On an already-empty deck this is a no-op that stays
    /// in the Empty state. Confirmation is the caller's concern.
    pub fn clear(&mut self) -> ClearReport {
        if self.cards.is_empty() {
            return ClearReport {
                removed: 0,
                persist_error: None,
            };
        }
        let removed = self.cards.len();
        self.cards.clear();
        self.current = 0;
        self.flipped = false;

        let persist_error = self.persist().err();
        if let Some(err) = &persist_error {
            log::warn!("deck not persisted after clear: {err}");
        }
        ClearReport {
            removed,
            persist_error,
        }
    }

    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.cards.len();
        self.flipped = false;
    }

    pub fn previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.current = (self.current + self.cards.len() - 1) % self.cards.len();
        self.flipped = false;
    }

    pub fn toggle_flip(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
    }

    pub fn export_text(&self) -> Result<String, DeckError> {
        export_csv(&self.cards, &self.lexicon)
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
