use clap::{Parser, Subcommand, ValueEnum};
use flipdeck_core::Lexicon;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum StoreKind {
    Json,
    Memory,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelSet {
    English,
    Arabic,
}

impl LabelSet {
    pub fn lexicon(self) -> Lexicon {
        match self {
            // Recognition is bilingual either way; this picks the sentinels
            // and export headers.
            LabelSet::English => Lexicon::bilingual(),
            LabelSet::Arabic => Lexicon::arabic(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "flipdeck", version, about = "Flashcard deck CLI")]
pub struct Cli {
    /// Storage backend
    #[arg(long, value_enum, default_value_t = StoreKind::Json)]
    pub store: StoreKind,

    /// Snapshot file path when --store json (defaults to the app data dir)
    #[arg(long)]
    pub data_path: Option<PathBuf>,

    /// Label language for defaults and export headers
    #[arg(long, value_enum, default_value_t = LabelSet::English)]
    pub labels: LabelSet,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import cards from a delimited text file (merges into the deck)
    Import { file: PathBuf },
    /// Export the deck to a CSV file
    Export { path: Option<PathBuf> },
    /// Remove every card from the deck
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List all cards
    List,
    /// Deck totals per lesson and difficulty
    Stats,
    /// Show the current card
    Show,
    /// Interactive study loop
    Study,
}
