//! Label configuration: header synonyms, default sentinels, and the
//! difficulty label sets, per working language. Core logic never hard-codes
//! a natural-language string; it all flows through a [`Lexicon`].

use crate::DifficultyLevel;

#[derive(Clone, Copy, Debug)]
pub struct Lexicon {
    pub question: &'static [&'static str],
    pub answer: &'static [&'static str],
    pub lesson: &'static [&'static str],
    pub difficulty: &'static [&'static str],

    pub default_lesson: &'static str,
    pub default_difficulty: &'static str,

    pub easy: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub hard: &'static [&'static str],

    pub export_headers: [&'static str; 4],
}

// Recognition is shared between presets; only sentinels and export headers
// differ. Synonyms are stored lowercased, headers are lowercased before
// matching.
const QUESTION_SYNONYMS: &[&str] = &["سؤال", "question", "q"];
const ANSWER_SYNONYMS: &[&str] = &["جواب", "answer", "a"];
const LESSON_SYNONYMS: &[&str] = &["درس", "lesson", "topic", "subject"];
const DIFFICULTY_SYNONYMS: &[&str] = &["صعوبة", "difficulty", "level"];

const EASY_LABELS: &[&str] = &["easy", "سهل"];
const MEDIUM_LABELS: &[&str] = &["medium", "متوسط"];
const HARD_LABELS: &[&str] = &["hard", "صعب"];

impl Lexicon {
    /// Default preset: recognizes both languages, English sentinels and
    /// export headers.
    pub fn bilingual() -> Self {
        Self {
            question: QUESTION_SYNONYMS,
            answer: ANSWER_SYNONYMS,
            lesson: LESSON_SYNONYMS,
            difficulty: DIFFICULTY_SYNONYMS,
            default_lesson: "general",
            default_difficulty: "easy",
            easy: EASY_LABELS,
            medium: MEDIUM_LABELS,
            hard: HARD_LABELS,
            export_headers: ["question", "answer", "lesson", "difficulty"],
        }
    }

    /// Arabic sentinels and export headers.
    pub fn arabic() -> Self {
        Self {
            default_lesson: "عام",
            default_difficulty: "سهل",
            export_headers: ["سؤال", "جواب", "درس", "صعوبة"],
            ..Self::bilingual()
        }
    }

    /// Maps a difficulty label onto a recognized level, across both
    /// languages. `None` means the label is outside the recognized sets.
    pub fn classify(&self, label: &str) -> Option<DifficultyLevel> {
        let needle = label.trim().to_lowercase();
        if self.easy.contains(&needle.as_str()) {
            Some(DifficultyLevel::Easy)
        } else if self.medium.contains(&needle.as_str()) {
            Some(DifficultyLevel::Medium)
        } else if self.hard.contains(&needle.as_str()) {
            Some(DifficultyLevel::Hard)
        } else {
            None
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::bilingual()
    }
}
