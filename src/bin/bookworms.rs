//! bookworms CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use bookworm_core::loader::load_bookworms;
use bookworm_core::recommend::{find_common_books, recommend};
use bookworm_core::types::{Book, Recommendation};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bookworms",
    version,
    about = "Find shared books and recommendations across bookworm shelves"
)]
struct Cli {
    /// Path to the bookworm JSON file.
    file: PathBuf,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report {
    common_books: Vec<Book>,
    recommendations: Vec<Recommendation>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let bookworms = load_bookworms(&cli.file)
        .with_context(|| format!("failed to load bookworms from {}", cli.file.display()))?;

    debug!(bookworms = bookworms.len(), json = cli.json, "input decoded");

    let report = Report {
        common_books: find_common_books(&bookworms),
        recommendations: recommend(&bookworms),
    };

    if cli.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
        println!();
    } else {
        print_report(&report);
    }

    Ok(())
}

/// RUST_LOG wins when set; otherwise -v picks the threshold.
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "error",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &Report) {
    println!("Here are the books in common:");
    print_books(&report.common_books);

    for recommendation in &report.recommendations {
        println!();
        if recommendation.books.is_empty() {
            println!("No recommendations for {}.", recommendation.name);
            continue;
        }
        println!("Recommendations for {}:", recommendation.name);
        print_books(&recommendation.books);
    }
}

fn print_books(books: &[Book]) {
    for book in books {
        println!("- {} by {}", book.title, book.author);
    }
}
