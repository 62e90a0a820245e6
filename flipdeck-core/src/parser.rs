//! Tolerant parser for delimited card files.
//!
//! # Format
//! ```text
//! question,answer,lesson,difficulty
//! "What is 2+2?",4,Math,easy
//! ما عاصمة فرنسا؟,باريس,جغرافيا,سهل
//! ```
//!
//! The header row is optional and its columns may appear in any order;
//! labels are matched case-insensitively against the lexicon's synonym sets
//! in both working languages. Without a recognizable header, column 0 is the
//! question and column 1 the answer. Fields may be double-quoted to protect
//! embedded commas. A line that cannot produce a card is skipped, never an
//! error.

use crate::models::normalize_text;
use crate::{Card, Lexicon};

/// Parses raw delimited text into cards. Pure; never fails. Malformed lines
/// are dropped and input order is preserved.
pub fn parse(text: &str, lexicon: &Lexicon) -> Vec<Card> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let columns = Columns::resolve(lines[0], lexicon);
    // Only treat line 0 as a header when it names both mandatory columns.
    let start = if columns.header_recognized() { 1 } else { 0 };

    lines[start..]
        .iter()
        .filter_map(|line| parse_line(line, &columns, lexicon))
        .collect()
}

#[derive(Clone, Copy, Debug, Default)]
struct Columns {
    question: Option<usize>,
    answer: Option<usize>,
    lesson: Option<usize>,
    difficulty: Option<usize>,
}

impl Columns {
    fn resolve(header_line: &str, lexicon: &Lexicon) -> Self {
        let labels: Vec<String> = header_line
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .collect();
        let find =
            |synonyms: &[&str]| labels.iter().position(|l| synonyms.contains(&l.as_str()));
        Self {
            question: find(lexicon.question),
            answer: find(lexicon.answer),
            lesson: find(lexicon.lesson),
            difficulty: find(lexicon.difficulty),
        }
    }

    fn header_recognized(&self) -> bool {
        self.question.is_some() && self.answer.is_some()
    }
}

fn parse_line(line: &str, columns: &Columns, lexicon: &Lexicon) -> Option<Card> {
    let fields = split_fields(line);

    let question = fields.get(columns.question.unwrap_or(0))?;
    let answer = fields.get(columns.answer.unwrap_or(1))?;
    if question.is_empty() || answer.is_empty() {
        return None;
    }

    let lesson = columns
        .lesson
        .and_then(|i| fields.get(i))
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .unwrap_or(lexicon.default_lesson);

    // A difficulty outside the recognized label sets falls back to the easy
    // sentinel, same as a missing column.
    let difficulty = columns
        .difficulty
        .and_then(|i| fields.get(i))
        .filter(|s| lexicon.classify(s).is_some())
        .map(String::as_str)
        .unwrap_or(lexicon.default_difficulty);

    Some(Card::new(question.clone(), answer.clone(), lesson, difficulty))
}

/// Splits one line into normalized fields. A field is either a double-quoted
/// span (quotes stripped, commas kept) or a run of non-comma, non-quote
/// characters. Nothing between two consecutive commas yields no field.
fn split_fields(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut fields = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            ',' => i += 1,
            '"' => {
                let end = match chars[i + 1..].iter().position(|&c| c == '"') {
                    Some(off) => i + 1 + off,
                    // Unterminated quote: take the rest of the line.
                    None => chars.len(),
                };
                let raw: String = chars[i + 1..end].iter().collect();
                fields.push(normalize_text(&raw));
                i = end + 1;
            }
            _ => {
                let mut j = i;
                while j < chars.len() && chars[j] != ',' && chars[j] != '"' {
                    j += 1;
                }
                let raw: String = chars[i..j].iter().collect();
                fields.push(normalize_text(&raw));
                i = j;
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::bilingual()
    }

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        let cards = parse("q,a\n\"Hello, world\",Hi there", &lex());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "Hello, world");
        assert_eq!(cards[0].answer, "Hi there");
    }

    #[test]
    fn english_headers_resolve_lesson_and_default_difficulty() {
        let cards = parse("Question,Answer,Lesson\nWhat is 2+2?,4,Math", &lex());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "What is 2+2?");
        assert_eq!(cards[0].answer, "4");
        assert_eq!(cards[0].lesson, "Math");
        assert_eq!(cards[0].difficulty, "easy");
    }

    #[test]
    fn arabic_headers_resolve_all_columns() {
        let cards = parse(
            "سؤال,جواب,درس,صعوبة\nما عاصمة فرنسا؟,باريس,جغرافيا,صعب",
            &lex(),
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "ما عاصمة فرنسا؟");
        assert_eq!(cards[0].answer, "باريس");
        assert_eq!(cards[0].lesson, "جغرافيا");
        assert_eq!(cards[0].difficulty, "صعب");
    }

    #[test]
    fn unrecognized_headers_fall_back_to_positions() {
        let cards = parse("foo,bar\nbaz,qux", &lex());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "foo");
        assert_eq!(cards[0].answer, "bar");
        assert_eq!(cards[1].question, "baz");
        assert_eq!(cards[1].answer, "qux");
    }

    #[test]
    fn headers_match_in_any_column_order() {
        let cards = parse("answer,question\nthe answer,the question", &lex());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "the question");
        assert_eq!(cards[0].answer, "the answer");
    }

    #[test]
    fn short_lines_are_skipped() {
        let cards = parse("question,answer\nonly one field\nq2,a2", &lex());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "q2");
    }

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        let cards = parse("q,a\n\n   \nreal,card\r\n", &lex());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "real");
    }

    #[test]
    fn whitespace_runs_are_collapsed() {
        let cards = parse("q,a\n  What   is\tthis ,  an   answer ", &lex());
        assert_eq!(cards[0].question, "What is this");
        assert_eq!(cards[0].answer, "an answer");
    }

    #[test]
    fn quoted_whitespace_question_is_rejected() {
        let cards = parse("q,a\n\"   \",answer", &lex());
        assert!(cards.is_empty());
    }

    #[test]
    fn empty_input_yields_no_cards() {
        assert!(parse("", &lex()).is_empty());
        assert!(parse("  \n \r\n", &lex()).is_empty());
    }

    #[test]
    fn consecutive_commas_produce_no_field() {
        // A zero-width field vanishes and later columns shift left.
        let cards = parse("x,,y", &lex());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "x");
        assert_eq!(cards[0].answer, "y");
    }

    #[test]
    fn unrecognized_difficulty_falls_back_to_easy() {
        let cards = parse("question,answer,difficulty\nQ1,A1,brutal", &lex());
        assert_eq!(cards[0].difficulty, "easy");
    }

    #[test]
    fn recognized_difficulty_is_kept_verbatim() {
        let cards = parse("question,answer,difficulty\nQ1,A1,Medium", &lex());
        assert_eq!(cards[0].difficulty, "Medium");
    }

    #[test]
    fn arabic_sentinels_apply_with_arabic_lexicon() {
        let cards = parse("q,a\nsome question,some answer", &Lexicon::arabic());
        assert_eq!(cards[0].lesson, "عام");
        assert_eq!(cards[0].difficulty, "سهل");
    }
}
