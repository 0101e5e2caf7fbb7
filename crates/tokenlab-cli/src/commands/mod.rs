pub mod cost;
pub mod list;
pub mod tokenize;

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokenlab_core::Encoding;

/// What the playground shows before the user types anything of their own.
pub const SAMPLE_TEXT: &str =
    "Welcome to tokenlab. Replace this with your text to see how tokenization works.";

/// Parse an encoding-family name (e.g. "cl100k_base").
pub fn parse_encoding(name: &str) -> Result<Encoding> {
    name.parse::<Encoding>().with_context(|| {
        let known: Vec<String> = Encoding::ALL.iter().map(|e| e.to_string()).collect();
        format!("supported encodings: {}", known.join(", "))
    })
}

/// Resolve the input text: positional argument, file, piped stdin, or the
/// sample sentence when run interactively with no input at all.
pub fn read_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(t), _) => Ok(t),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Ok(SAMPLE_TEXT.to_string());
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
