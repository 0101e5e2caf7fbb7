use anyhow::Result;
use clap::Args;
use tokenlab_report::{json as jreport, terminal};

use super::parse_encoding;

#[derive(Args)]
pub struct CostArgs {
    /// Token count to price
    #[arg(long)]
    pub tokens: u64,

    /// Encoding family whose models to price against
    #[arg(long, default_value = "cl100k_base")]
    pub encoding: String,

    /// Output format: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub fn run(args: CostArgs) -> Result<()> {
    let encoding = parse_encoding(&args.encoding)?;

    match args.format.as_str() {
        "json" => println!("{}", jreport::render_costs(encoding, args.tokens)?),
        _ => {
            terminal::print_costs(encoding, args.tokens);
            println!();
        }
    }
    Ok(())
}
