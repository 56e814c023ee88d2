pub mod content;
pub mod models;

pub use content::{Catalog, CatalogError, DEFAULT_LECTURE_ID};
pub use models::{Flashcard, FlashcardCell, Lecture, QuizEngine, QuizQuestion, QuizState};
