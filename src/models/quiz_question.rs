//! A multiple-choice question. Option order matters for display only;
//! `correct_answer` must match one of the options exactly.
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Exact string equality decides correctness.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answer_field_is_camel_case_in_json() {
        let question: QuizQuestion = serde_json::from_str(
            r#"{
  "question": "Which algorithm combines AdaGrad and RMSProp?",
  "options": ["SGD", "Adam"],
  "correctAnswer": "Adam"
}"#,
        )
        .unwrap();

        assert_eq!(question.correct_answer, "Adam");
        assert!(question.is_correct("Adam"));
    }

    #[test]
    fn test_is_correct_requires_exact_match() {
        let question = QuizQuestion {
            question: "q".to_string(),
            options: vec!["Adam".to_string(), "SGD".to_string()],
            correct_answer: "Adam".to_string(),
        };

        assert!(!question.is_correct("adam"));
        assert!(!question.is_correct("Adam "));
    }
}
