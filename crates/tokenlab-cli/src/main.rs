use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
use commands::{cost, list, tokenize};

#[derive(Parser)]
#[command(
    name = "tokenlab",
    version = "0.1.0",
    author,
    about = "Tokenize text with the tiktoken encodings and project API cost",
    long_about = r#"tokenlab encodes free text with any of the tiktoken BPE families, shows the
resulting token chunks alongside character/token counts, and projects what that
token count would cost across the published model pricing catalog.

Supported encodings: cl100k_base, o200k_base, p50k_base, p50k_edit, r50k_base

Quick start:
  tokenlab tokenize "Hello, world!"             # tokenize a sentence
  cat main.rs | tokenlab tokenize --ids         # token ids for a file on stdin
  tokenlab cost --tokens 2000000                # project a known token count
  tokenlab list models --encoding o200k_base    # pricing for one encoding
  tokenlab tokenize --format html --out t.html  # shareable HTML view"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tokenize text and show chunks, counts, and projected cost
    Tokenize(tokenize::TokenizeArgs),

    /// Project cost for a token count without tokenizing anything
    Cost(cost::CostArgs),

    /// List encodings and the model pricing catalog
    List(list::ListArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Tokenize(args) => tokenize::run(args),
        Commands::Cost(args) => cost::run(args),
        Commands::List(args) => list::run(args),
    }
}
