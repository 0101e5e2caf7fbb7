use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tokenlab_core::TokenizationReport;
use tokenlab_report::{html as html_report, json as jreport, terminal};
use tokenlab_tokenize::Tokenizer;

use super::{parse_encoding, read_text};

#[derive(Args)]
pub struct TokenizeArgs {
    /// Text to tokenize (falls back to --file, then stdin)
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Encoding family
    #[arg(long, default_value = "cl100k_base")]
    pub encoding: String,

    /// Show token ids instead of decoded text chunks
    #[arg(long)]
    pub ids: bool,

    /// Output format: table, json, html
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Output file (html defaults to tokenize.html)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: TokenizeArgs) -> Result<()> {
    let encoding = parse_encoding(&args.encoding)?;
    let text = read_text(args.text, args.file)?;

    let tokenizer = Tokenizer::for_encoding(encoding)?;
    let token_ids = tokenizer.encode(&text);
    let fragments = tokenizer.fragments(&token_ids);

    let report = TokenizationReport {
        encoding,
        characters: text.chars().count(),
        token_count: token_ids.len(),
        token_ids,
        fragments,
    };

    match args.format.as_str() {
        "json" => println!("{}", jreport::render_tokenization(&report)?),
        "html" => {
            let content = html_report::render_tokenization(&report)?;
            let path = args
                .out
                .unwrap_or_else(|| PathBuf::from("tokenize.html"));
            std::fs::write(&path, &content)?;
            eprintln!("{} Written to {}", "✓".green(), path.display());
        }
        _ => {
            terminal::print_tokenization(&report, args.ids);
            terminal::print_costs(encoding, report.token_count as u64);
            println!();
        }
    }
    Ok(())
}
