use anyhow::Result;
use clap::{Args, Subcommand};
use tokenlab_core::{catalog, ModelPricing};
use tokenlab_report::{json as jreport, terminal};

use super::parse_encoding;

#[derive(Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub subcommand: ListSubcommand,
}

#[derive(Subcommand)]
pub enum ListSubcommand {
    /// List the encoding families and how many priced models each carries
    Encodings {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List the model pricing catalog
    Models {
        /// Restrict to one encoding family (shows the deduplicated view)
        #[arg(long)]
        encoding: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

pub fn run(args: ListArgs) -> Result<()> {
    match args.subcommand {
        ListSubcommand::Encodings { format } => match format.as_str() {
            "json" => println!("{}", jreport::render_encodings()?),
            _ => terminal::print_encodings(),
        },

        ListSubcommand::Models { encoding, format } => {
            // With an encoding this is the lookup view (display-name
            // duplicates collapsed); without one it is the raw catalog in
            // authoring order.
            let entries: Vec<&ModelPricing> = match encoding.as_deref() {
                Some(name) => catalog::lookup(parse_encoding(name)?).to_vec(),
                None => catalog::CATALOG.iter().collect(),
            };

            match format.as_str() {
                "json" => println!("{}", jreport::render_models(&entries)?),
                _ => terminal::print_model_list(&entries),
            }
        }
    }
    Ok(())
}
