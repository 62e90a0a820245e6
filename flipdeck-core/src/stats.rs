use crate::{Card, DifficultyLevel, Lexicon};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct DeckTotals {
    pub cards: usize,
    pub lessons: BTreeMap<String, usize>,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    /// Labels outside the recognized sets (hand-edited snapshots).
    pub unrated: usize,
}

impl DeckTotals {
    fn record(&mut self, card: &Card, lexicon: &Lexicon) {
        self.cards += 1;
        *self.lessons.entry(card.lesson.clone()).or_default() += 1;
        match lexicon.classify(&card.difficulty) {
            Some(DifficultyLevel::Easy) => self.easy += 1,
            Some(DifficultyLevel::Medium) => self.medium += 1,
            Some(DifficultyLevel::Hard) => self.hard += 1,
            None => self.unrated += 1,
        }
    }
}

pub fn summarize(cards: &[Card], lexicon: &Lexicon) -> DeckTotals {
    let mut totals = DeckTotals::default();
    for card in cards {
        totals.record(card, lexicon);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_group_by_lesson_and_level() {
        let lex = Lexicon::bilingual();
        let cards = vec![
            Card::new("q1", "a1", "Math", "easy"),
            Card::new("q2", "a2", "Math", "صعب"),
            Card::new("q3", "a3", "History", "Medium"),
            Card::new("q4", "a4", "History", "whatever"),
        ];
        let t = summarize(&cards, &lex);
        assert_eq!(t.cards, 4);
        assert_eq!(t.lessons.len(), 2);
        assert_eq!(t.lessons["Math"], 2);
        assert_eq!(t.easy, 1);
        assert_eq!(t.medium, 1);
        assert_eq!(t.hard, 1);
        assert_eq!(t.unrated, 1);
    }
}
