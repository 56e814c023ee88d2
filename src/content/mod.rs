//! Lecture catalog for the learning portal
//!
//! The backing data is a JSON document embedded at build time; the catalog
//! parses it once at startup and serves read-only lookups after that. The
//! JSON shape of a lecture record is the contract a content author has to
//! satisfy, so violations are caught here, when the catalog loads.

use crate::models::Lecture;
use thiserror::Error;

/// Seeded lecture dataset, embedded into the binary.
const SEEDED_LECTURES: &str = include_str!("lectures.json");

/// Id of the lecture selected at startup. Guaranteed present in the seeded
/// dataset.
pub const DEFAULT_LECTURE_ID: u32 = 42;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse lecture data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate lecture id {0}")]
    DuplicateLectureId(u32),

    #[error("lecture {lecture_id}: correct answer {correct_answer:?} is not among the options")]
    CorrectAnswerNotInOptions {
        lecture_id: u32,
        correct_answer: String,
    },
}

/// Immutable collection of all available lectures.
pub struct Catalog {
    lectures: Vec<Lecture>,
}

impl Catalog {
    /// Loads the dataset shipped with the application.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEEDED_LECTURES)
    }

    /// Parses and validates a lecture list from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let lectures: Vec<Lecture> = serde_json::from_str(raw)?;
        let catalog = Self { lectures };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the invariants authoring discipline alone would otherwise
    /// carry: unique lecture ids, and every quiz answer present among its
    /// question's options.
    fn validate(&self) -> Result<(), CatalogError> {
        for (i, lecture) in self.lectures.iter().enumerate() {
            if self.lectures[..i].iter().any(|l| l.id == lecture.id) {
                return Err(CatalogError::DuplicateLectureId(lecture.id));
            }

            for question in &lecture.quiz {
                if !question.options.contains(&question.correct_answer) {
                    return Err(CatalogError::CorrectAnswerNotInOptions {
                        lecture_id: lecture.id,
                        correct_answer: question.correct_answer.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn find_lecture(&self, id: u32) -> Option<&Lecture> {
        self.lectures.iter().find(|l| l.id == id)
    }
}
