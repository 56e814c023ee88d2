//! Quiz progression state machine.
//! Walks an ordered question list once, accumulating a score until the
//! last answer lands the session in a terminal Finished state.

use super::QuizQuestion;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz is already finished")]
    AlreadyFinished,
}

/// Session state. Invariant: `score <= current <= total`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizState {
    InProgress { current: usize, score: usize },
    Finished { score: usize, total: usize },
}

pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    state: QuizState,
}

impl QuizEngine {
    /// Creates an engine over a fixed question list, starting at the first
    /// question. An empty list has nothing to answer, so the engine starts
    /// directly in `Finished(0, 0)`.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let state = Self::initial_state(questions.len());
        Self { questions, state }
    }

    fn initial_state(total: usize) -> QuizState {
        if total == 0 {
            QuizState::Finished { score: 0, total: 0 }
        } else {
            QuizState::InProgress {
                current: 0,
                score: 0,
            }
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished { .. })
    }

    /// The question awaiting an answer, or None once finished.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress { current, .. } => self.questions.get(current),
            QuizState::Finished { .. } => None,
        }
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::InProgress { score, .. } => score,
            QuizState::Finished { score, .. } => score,
        }
    }

    pub fn progress_message(&self) -> String {
        match self.state {
            QuizState::InProgress { current, .. } => {
                format!("Question {} / {}", current + 1, self.total())
            }
            QuizState::Finished { score, total } => {
                format!("You scored {} out of {}", score, total)
            }
        }
    }

    /// Scores `choice` against the current question and advances, moving to
    /// `Finished` after the last question. Rejected once finished; the state
    /// is left untouched in that case.
    pub fn submit_answer(&mut self, choice: &str) -> Result<&QuizState, QuizError> {
        let (current, score) = match self.state {
            QuizState::InProgress { current, score } => (current, score),
            QuizState::Finished { .. } => return Err(QuizError::AlreadyFinished),
        };

        let score = if self.questions[current].is_correct(choice) {
            score + 1
        } else {
            score
        };

        let next = current + 1;
        self.state = if next < self.questions.len() {
            QuizState::InProgress {
                current: next,
                score,
            }
        } else {
            QuizState::Finished {
                score,
                total: self.questions.len(),
            }
        };

        Ok(&self.state)
    }

    /// Returns to the initial state, from any state. For a non-empty quiz
    /// that is `InProgress(0, 0)`; an empty quiz is born finished again.
    pub fn reset(&mut self) {
        self.state = Self::initial_state(self.questions.len());
    }
}
