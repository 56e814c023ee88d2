//! Lecture is the top-level content unit: topics, flashcards and a quiz
use super::{Flashcard, QuizQuestion};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A titled block of lecture notes. Purely display data.
#[derive(Clone, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub topics: Vec<Topic>,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
}

impl Lecture {
    /// Lecture records carry their date as an M/D/YYYY string.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%m/%d/%Y").ok()
    }

    /// Formats the lecture date as YYYY-MM-DD, falling back to the raw
    /// string when it does not parse.
    pub fn date_display(&self) -> String {
        match self.date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.date.clone(),
        }
    }
}
