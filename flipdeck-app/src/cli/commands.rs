use crate::cli::opts::{Cli, Command, StoreKind};

use anyhow::{Context, Result};
use chrono::Local;
use flipdeck_core::{summarize, DeckSession, Lexicon, MemoryStore, SnapshotStore};
use flipdeck_json::JsonVault;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn run_cli(args: Cli) -> Result<()> {
    let lexicon = args.labels.lexicon();
    let store = open_store(&args.store, args.data_path)?;
    let mut deck = DeckSession::open(store, lexicon);

    match args.cmd {
        Command::Import { file } => import_cmd(&mut deck, &file),
        Command::Export { path } => export_cmd(&deck, path),
        Command::Clear { yes } => clear_cmd(&mut deck, yes),
        Command::List => list_cmd(&deck),
        Command::Stats => stats_cmd(&deck, &lexicon),
        Command::Show => show_cmd(&deck),
        Command::Study => study_cmd(&mut deck),
    }
}

fn open_store(kind: &StoreKind, data_path: Option<PathBuf>) -> Result<Arc<dyn SnapshotStore>> {
    match kind {
        StoreKind::Json => {
            let vault = match data_path {
                Some(p) => JsonVault::open_at(p)?,
                None => JsonVault::open_default()?,
            };
            Ok(Arc::new(vault))
        }
        // A memory deck lives for one command only; handy for piping a file
        // through parse/export without touching the data dir.
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

fn import_cmd(deck: &mut DeckSession, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    match deck.import_text(&text) {
        Ok(report) => {
            println!("imported {} card(s), deck now has {}", report.added, deck.size());
            if let Some(err) = report.persist_error {
                eprintln!("warning: deck not saved: {err}");
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn export_cmd(deck: &DeckSession, path: Option<PathBuf>) -> Result<()> {
    match deck.export_text() {
        Ok(text) => {
            let path = path.unwrap_or_else(default_export_path);
            std::fs::write(&path, text)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("exported {} card(s) to {}", deck.size(), path.display());
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn clear_cmd(deck: &mut DeckSession, yes: bool) -> Result<()> {
    if deck.size() == 0 {
        println!("deck is already empty");
        return Ok(());
    }
    if !yes {
        let line = read_line(&format!("delete all {} card(s)? [y/N] ", deck.size()))?;
        if !matches!(line.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("aborted");
            return Ok(());
        }
    }
    let report = deck.clear();
    println!("cleared {} card(s)", report.removed);
    if let Some(err) = report.persist_error {
        eprintln!("warning: deck not saved: {err}");
    }
    Ok(())
}

fn list_cmd(deck: &DeckSession) -> Result<()> {
    for (i, card) in deck.cards().iter().enumerate() {
        println!(
            "{}\t{}\t{}\tlesson={}\tdifficulty={}",
            i + 1,
            card.question,
            card.answer,
            card.lesson,
            card.difficulty
        );
    }
    Ok(())
}

fn stats_cmd(deck: &DeckSession, lexicon: &Lexicon) -> Result<()> {
    let totals = summarize(deck.cards(), lexicon);
    println!("cards: {}", totals.cards);
    println!("lessons: {}", totals.lessons.len());
    for (lesson, n) in &totals.lessons {
        println!("  {lesson}\t{n}");
    }
    println!(
        "easy: {}  medium: {}  hard: {}  other: {}",
        totals.easy, totals.medium, totals.hard, totals.unrated
    );
    Ok(())
}

fn show_cmd(deck: &DeckSession) -> Result<()> {
    match deck.current_card() {
        Some(card) => {
            println!(
                "[{} / {}] {} · {}",
                deck.position() + 1,
                deck.size(),
                card.lesson,
                card.difficulty
            );
            println!("Q: {}", card.question);
        }
        None => println!("deck is empty, import a file to begin"),
    }
    Ok(())
}

fn study_cmd(deck: &mut DeckSession) -> Result<()> {
    if deck.size() == 0 {
        println!("deck is empty, import a file to begin");
        return Ok(());
    }
    println!("[enter=flip, n=next, p=previous, q=quit]");
    loop {
        let Some(card) = deck.current_card() else { break };
        println!(
            "\n[{} / {}] {} · {}",
            deck.position() + 1,
            deck.size(),
            card.lesson,
            card.difficulty
        );
        if deck.is_flipped() {
            println!("A: {}", card.answer);
        } else {
            println!("Q: {}", card.question);
        }

        let line = read_line("study> ")?;
        match line.trim().to_lowercase().as_str() {
            "" | "f" | "flip" => deck.toggle_flip(),
            "n" | "next" => deck.next(),
            "p" | "prev" | "previous" => deck.previous(),
            "q" | "quit" => break,
            _ => println!("enter, f, n, p, or q"),
        }
    }
    Ok(())
}

fn default_export_path() -> PathBuf {
    PathBuf::from(format!("flipdeck-cards-{}.csv", Local::now().format("%Y-%m-%d")))
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    stdin().read_line(&mut s)?;
    Ok(s)
}
