use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use content::FlashcardRepository;
use study_core::model::{DeckId, Flashcard, FlashcardCursor, FlashcardDeck};

use crate::error::FlashcardServiceError;

// ─── SESSION ───────────────────────────────────────────────────────────────────

/// Study pass over one deck's sample cards.
///
/// Cards are shown through an index permutation so shuffling never touches the
/// deck itself.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    deck: FlashcardDeck,
    cards: Vec<Flashcard>,
    order: Vec<usize>,
    cursor: FlashcardCursor,
}

impl FlashcardSession {
    /// # Errors
    ///
    /// Returns `FlashcardServiceError::EmptyDeck` when `cards` is empty.
    pub fn new(deck: FlashcardDeck, cards: Vec<Flashcard>) -> Result<Self, FlashcardServiceError> {
        let cursor = FlashcardCursor::new(cards.len())
            .ok_or_else(|| FlashcardServiceError::EmptyDeck(deck.id().to_string()))?;
        let order = (0..cards.len()).collect();
        Ok(Self {
            deck,
            cards,
            order,
            cursor,
        })
    }

    #[must_use]
    pub fn deck(&self) -> &FlashcardDeck {
        &self.deck
    }

    #[must_use]
    pub fn cursor(&self) -> FlashcardCursor {
        self.cursor
    }

    #[must_use]
    pub fn current_card(&self) -> &Flashcard {
        &self.cards[self.order[self.cursor.index()]]
    }

    /// Text on the visible face of the current card.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        let card = self.current_card();
        if self.cursor.is_flipped() {
            card.answer()
        } else {
            card.question()
        }
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.cursor.is_flipped()
    }

    pub fn flip(&mut self) {
        self.cursor.flip();
    }

    pub fn next(&mut self) -> bool {
        self.cursor.next()
    }

    pub fn previous(&mut self) -> bool {
        self.cursor.previous()
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Reorder the cards and return to the first one.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.as_mut_slice().shuffle(rng);
        self.cursor.reset();
        debug!(deck = %self.deck.id(), "deck shuffled");
    }

    /// One-based position and card count, e.g. `(2, 3)` for "card 2 of 3".
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.cursor.index() + 1, self.cursor.card_count())
    }
}

// ─── SERVICE ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct FlashcardService {
    decks: Arc<dyn FlashcardRepository>,
}

impl FlashcardService {
    #[must_use]
    pub fn new(decks: Arc<dyn FlashcardRepository>) -> Self {
        Self { decks }
    }

    #[must_use]
    pub fn list_decks(&self) -> Vec<FlashcardDeck> {
        self.decks.list_decks()
    }

    /// # Errors
    ///
    /// Returns `FlashcardServiceError` for an unknown deck or one without cards.
    pub fn open_deck(&self, id: &DeckId) -> Result<FlashcardSession, FlashcardServiceError> {
        let deck = self.decks.get_deck(id)?;
        let cards = self.decks.cards(id)?;
        debug!(deck = %id, cards = cards.len(), "deck opened");
        FlashcardSession::new(deck, cards)
    }

    /// Open the first deck in the catalogue.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardServiceError::EmptyDeck` if there are no decks.
    pub fn open_first(&self) -> Result<FlashcardSession, FlashcardServiceError> {
        let first = self
            .decks
            .list_decks()
            .into_iter()
            .next()
            .ok_or_else(|| FlashcardServiceError::EmptyDeck("(none)".to_owned()))?;
        self.open_deck(first.id())
    }
}
