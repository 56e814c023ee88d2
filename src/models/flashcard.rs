//! Flashcard is a pair <question, answer>. Only text is used on both sides
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard {
            question: "What is Backpropagation?".to_string(),
            answer: "Propagating the error backward from output to input.".to_string(),
        };

        assert_eq!(card.question, "What is Backpropagation?");
        assert_eq!(
            card.answer,
            "Propagating the error backward from output to input."
        );
    }

    #[test]
    fn test_flashcard_from_json() {
        let card: Flashcard = serde_json::from_str(
            r#"{ "question": "What does Adam stand for?", "answer": "Adaptive Moment Estimation." }"#,
        )
        .unwrap();

        assert_eq!(card.question, "What does Adam stand for?");
        assert_eq!(card.answer, "Adaptive Moment Estimation.");
    }
}
