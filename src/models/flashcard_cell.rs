//! Wrapper for a flashcard that tracks which side is facing the user.
use super::Flashcard;

/// Hint shown under the question side of every card.
pub const FLIP_HINT: &str = "Click to flip";

#[derive(Clone)]
pub struct FlashcardCell {
    pub flashcard: Flashcard,
    revealed: bool,
}

impl FlashcardCell {
    /// A fresh cell always starts on the question side.
    pub fn new(flashcard: Flashcard) -> Self {
        Self {
            flashcard,
            revealed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Text for the side currently facing the user.
    pub fn face_text(&self) -> &str {
        if self.revealed {
            &self.flashcard.answer
        } else {
            &self.flashcard.question
        }
    }
}
