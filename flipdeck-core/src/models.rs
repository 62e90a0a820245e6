use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
    pub lesson: String,
    pub difficulty: String,
}

impl Card {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        lesson: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            lesson: lesson.into(),
            difficulty: difficulty.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

/// Collapses internal whitespace runs to single spaces and trims the ends.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
