use rand::Rng;

use services::{FlashcardService, FlashcardSession};
use study_core::model::{DeckId, Difficulty};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    Question,
    Answer,
}

impl CardFace {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CardFace::Question => "Question",
            CardFace::Answer => "Answer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashcardIntent {
    Flip,
    Next,
    Previous,
    Reset,
}

#[derive(Debug)]
pub struct FlashcardVm {
    session: FlashcardSession,
}

impl FlashcardVm {
    #[must_use]
    pub fn new(session: FlashcardSession) -> Self {
        Self { session }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Flashcard` for an unknown or empty deck.
    pub fn open(flashcards: &FlashcardService, deck: Option<&DeckId>) -> Result<Self, ViewError> {
        let session = match deck {
            Some(id) => flashcards.open_deck(id)?,
            None => flashcards.open_first()?,
        };
        Ok(Self::new(session))
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        self.session.deck().name()
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.session.is_flipped() {
            CardFace::Answer
        } else {
            CardFace::Question
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.session.visible_text()
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.session.current_card().category()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.session.current_card().difficulty()
    }

    /// "Card 2 of 3".
    #[must_use]
    pub fn position_label(&self) -> String {
        let (current, total) = self.session.position();
        format!("Card {current} of {total}")
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.session.cursor().progress_percent()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.session.cursor().is_first()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.session.cursor().is_last()
    }

    pub fn apply(&mut self, intent: FlashcardIntent) {
        match intent {
            FlashcardIntent::Flip => self.session.flip(),
            FlashcardIntent::Next => {
                self.session.next();
            }
            FlashcardIntent::Previous => {
                self.session.previous();
            }
            FlashcardIntent::Reset => self.session.reset(),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AppServices;
    use study_core::time::fixed_clock;

    fn vm() -> FlashcardVm {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        FlashcardVm::open(&services.flashcards(), None).unwrap()
    }

    #[test]
    fn opens_first_deck_on_question_side() {
        let vm = vm();
        assert_eq!(vm.deck_name(), "Cardiology Essentials");
        assert_eq!(vm.face(), CardFace::Question);
        assert_eq!(vm.position_label(), "Card 1 of 3");
        assert!(!vm.can_go_previous());
    }

    #[test]
    fn intents_move_and_flip() {
        let mut vm = vm();
        vm.apply(FlashcardIntent::Flip);
        assert_eq!(vm.face(), CardFace::Answer);
        assert!(vm.text().contains("60-100"));
        vm.apply(FlashcardIntent::Next);
        assert_eq!(vm.face(), CardFace::Question);
        vm.apply(FlashcardIntent::Next);
        vm.apply(FlashcardIntent::Next);
        assert_eq!(vm.position_label(), "Card 3 of 3");
        assert!(!vm.can_go_next());
        assert_eq!(vm.progress_percent(), 100);
        vm.apply(FlashcardIntent::Reset);
        assert_eq!(vm.position_label(), "Card 1 of 3");
    }
}
