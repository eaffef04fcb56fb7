use thiserror::Error;

use crate::model::{DeckId, Difficulty};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard question cannot be empty")]
    EmptyQuestion,

    #[error("flashcard answer cannot be empty")]
    EmptyAnswer,

    #[error("deck name cannot be empty")]
    EmptyDeckName,

    #[error("mastered cards ({mastered}) exceed deck size ({count})")]
    MasteredExceedsCount { mastered: u32, count: u32 },
}

/// A question/answer card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    question: String,
    answer: String,
    difficulty: Difficulty,
    category: String,
}

impl Flashcard {
    /// # Errors
    ///
    /// Returns `FlashcardError` if the question or answer is blank.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Result<Self, FlashcardError> {
        let question = question.into().trim().to_owned();
        let answer = answer.into().trim().to_owned();
        if question.is_empty() {
            return Err(FlashcardError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(FlashcardError::EmptyAnswer);
        }
        Ok(Self {
            question,
            answer,
            difficulty,
            category: category.into(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Deck metadata shown in the deck picker.
///
/// `card_count` and `mastered` describe the full curriculum deck; the bundled
/// sample cards are a subset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDeck {
    id: DeckId,
    name: String,
    card_count: u32,
    mastered: u32,
}

impl FlashcardDeck {
    /// # Errors
    ///
    /// Returns `FlashcardError` for a blank name or `mastered > card_count`.
    pub fn new(
        id: DeckId,
        name: impl Into<String>,
        card_count: u32,
        mastered: u32,
    ) -> Result<Self, FlashcardError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(FlashcardError::EmptyDeckName);
        }
        if mastered > card_count {
            return Err(FlashcardError::MasteredExceedsCount {
                mastered,
                count: card_count,
            });
        }
        Ok(Self {
            id,
            name,
            card_count,
            mastered,
        })
    }

    #[must_use]
    pub fn id(&self) -> &DeckId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    #[must_use]
    pub fn mastered(&self) -> u32 {
        self.mastered
    }

    #[must_use]
    pub fn mastery_percent(&self) -> u8 {
        crate::model::percent_of(u64::from(self.mastered), u64::from(self.card_count))
    }
}

/// Position within a deck plus which face is showing.
///
/// Moving off a card always turns it back to the question side. Moves past either
/// end of the deck are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashcardCursor {
    len: usize,
    index: usize,
    flipped: bool,
}

impl FlashcardCursor {
    /// Cursor at the first card of a deck with `len` cards, or `None` for an
    /// empty deck.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            index: 0,
            flipped: false,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Returns `true` if the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        self.flipped = false;
        true
    }

    /// Returns `true` if the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        self.flipped = false;
        true
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.flipped = false;
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        crate::model::percent_of(self.index as u64 + 1, self.len as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut cursor = FlashcardCursor::new(2).unwrap();
        assert!(!cursor.previous());
        assert!(cursor.next());
        assert!(!cursor.next());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn moving_turns_card_face_down() {
        let mut cursor = FlashcardCursor::new(3).unwrap();
        cursor.flip();
        assert!(cursor.is_flipped());
        cursor.next();
        assert!(!cursor.is_flipped());
        cursor.flip();
        cursor.previous();
        assert!(!cursor.is_flipped());
    }

    #[test]
    fn blocked_move_keeps_face() {
        let mut cursor = FlashcardCursor::new(1).unwrap();
        cursor.flip();
        assert!(!cursor.next());
        assert!(cursor.is_flipped());
    }

    #[test]
    fn reset_returns_to_first_card() {
        let mut cursor = FlashcardCursor::new(3).unwrap();
        cursor.next();
        cursor.next();
        cursor.flip();
        cursor.reset();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.is_flipped());
    }

    #[test]
    fn progress_and_empty_deck() {
        let mut cursor = FlashcardCursor::new(3).unwrap();
        assert_eq!(cursor.progress_percent(), 33);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.progress_percent(), 100);
        assert!(FlashcardCursor::new(0).is_none());
    }

    #[test]
    fn deck_mastery() {
        let deck = FlashcardDeck::new(DeckId::new("cardiology").unwrap(), "Cardiology", 120, 85)
            .unwrap();
        assert_eq!(deck.mastery_percent(), 71);
        assert!(FlashcardDeck::new(DeckId::new("x").unwrap(), "X", 1, 2).is_err());
    }

    #[test]
    fn flashcard_requires_text() {
        assert_eq!(
            Flashcard::new(" ", "A", Difficulty::Easy, "Vital Signs").unwrap_err(),
            FlashcardError::EmptyQuestion
        );
        assert_eq!(
            Flashcard::new("Q", "", Difficulty::Easy, "Vital Signs").unwrap_err(),
            FlashcardError::EmptyAnswer
        );
    }
}
