//! Generated main-content models (summary + quiz questions).

use serde::{Deserialize, Serialize};

/// Main content generated from uploaded study material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainContent {
    /// Concise summary of the material (2-4 sentences).
    pub summary: String,
    /// Mixed question set: written, MCQ and flashcard.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single generated question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    /// MCQ options; absent for written and flashcard questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Expected answer, present for all question kinds.
    pub answer: String,
}

/// Question flavor, matching the prompt contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Written,
    Mcq,
    Flashcard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_main_content() {
        let json = r#"{
            "summary": "Covers the chain rule.",
            "questions": [
                {"id": 1, "type": "mcq", "question": "d/dx x^2?",
                 "options": ["x", "2x"], "answer": "2x"},
                {"id": 2, "type": "flashcard", "question": "Define derivative", "answer": "Rate of change"}
            ]
        }"#;
        let content: MainContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.questions.len(), 2);
        assert_eq!(content.questions[0].kind, QuestionKind::Mcq);
        assert!(content.questions[1].options.is_none());
    }

    #[test]
    fn test_roundtrip_keeps_type_tag() {
        let q = Question {
            id: 3,
            kind: QuestionKind::Written,
            question: "Explain.".to_string(),
            options: None,
            answer: "Because.".to_string(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "written");
    }
}
