pub mod flashcard;
pub mod flashcard_cell;
pub mod lecture;
pub mod quiz_engine;
pub mod quiz_question;

pub use flashcard::Flashcard;
pub use flashcard_cell::{FLIP_HINT, FlashcardCell};
pub use lecture::{Lecture, Topic};
pub use quiz_engine::{QuizEngine, QuizError, QuizState};
pub use quiz_question::QuizQuestion;
