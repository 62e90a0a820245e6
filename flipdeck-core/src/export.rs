use crate::models::normalize_text;
use crate::{Card, DeckError, Lexicon};
use csv::{QuoteStyle, WriterBuilder};

/// Serializes the deck back to delimited text: header row first, exactly
/// four columns, every field quoted with embedded quotes doubled. Fields are
/// re-normalized on the way out. Empty deck is an error for the caller to
/// surface.
pub fn export_csv(cards: &[Card], lexicon: &Lexicon) -> Result<String, DeckError> {
    if cards.is_empty() {
        return Err(DeckError::NothingToExport);
    }

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    wtr.write_record(lexicon.export_headers)
        .map_err(|e| DeckError::Export(e.to_string()))?;
    for card in cards {
        let difficulty = if card.difficulty.trim().is_empty() {
            lexicon.default_difficulty.to_string()
        } else {
            normalize_text(&card.difficulty)
        };
        wtr.write_record([
            normalize_text(&card.question),
            normalize_text(&card.answer),
            normalize_text(&card.lesson),
            difficulty,
        ])
        .map_err(|e| DeckError::Export(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| DeckError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DeckError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_an_error() {
        assert!(matches!(
            export_csv(&[], &Lexicon::bilingual()),
            Err(DeckError::NothingToExport)
        ));
    }

    #[test]
    fn every_field_is_quoted_and_headers_come_first() {
        let cards = vec![Card::new("What is 2+2?", "4", "Math", "easy")];
        let text = export_csv(&cards, &Lexicon::bilingual()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"question\",\"answer\",\"lesson\",\"difficulty\""
        );
        assert_eq!(lines.next().unwrap(), "\"What is 2+2?\",\"4\",\"Math\",\"easy\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let cards = vec![Card::new("He said \"hi\"", "greeting", "English", "easy")];
        let text = export_csv(&cards, &Lexicon::bilingual()).unwrap();
        assert!(text.contains("\"He said \"\"hi\"\"\""));
    }

    #[test]
    fn arabic_lexicon_writes_arabic_headers() {
        let cards = vec![Card::new("س", "ج", "عام", "سهل")];
        let text = export_csv(&cards, &Lexicon::arabic()).unwrap();
        assert!(text.starts_with("\"سؤال\",\"جواب\",\"درس\",\"صعوبة\""));
    }
}
