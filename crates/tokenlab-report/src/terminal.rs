use colored::Colorize;
use tokenlab_core::*;

// ── formatting helpers ────────────────────────────────────────────────────────

pub fn fmt_count(n: usize) -> String {
    group_thousands(n as i64)
}

/// Per-1M-token price column; absent billing modes show as "-".
pub fn fmt_per_mtok(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "-".to_string(),
    }
}

/// Make whitespace survive chunk rendering: spaces become NBSP so the
/// colored background stays visible, newlines become a literal marker.
fn visible(fragment: &str) -> String {
    fragment.replace(' ', "\u{00A0}").replace('\n', "<newline>")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ── token chunk view ──────────────────────────────────────────────────────────

/// Pastel chunk backgrounds, cycled by position so adjacent tokens stay
/// distinguishable.
const CHUNK_COLORS: [(u8, u8, u8); 5] = [
    (211, 198, 243),
    (195, 242, 202),
    (251, 222, 175),
    (249, 179, 181),
    (169, 225, 247),
];

pub fn print_chunks(chunks: &[String]) {
    for (i, chunk) in chunks.iter().enumerate() {
        let (r, g, b) = CHUNK_COLORS[i % CHUNK_COLORS.len()];
        print!("{}", visible(chunk).black().on_truecolor(r, g, b));
    }
    println!();
}

pub fn print_tokenization(report: &TokenizationReport, show_ids: bool) {
    println!("\n{}", "── Tokens ──────────────────────────────────────────────────────".bold());
    if report.token_ids.is_empty() {
        println!("{}", "(empty input)".dimmed());
    } else if show_ids {
        let ids: Vec<String> = report.token_ids.iter().map(|t| t.to_string()).collect();
        print_chunks(&ids);
    } else {
        print_chunks(&report.fragments);
    }

    println!("\n{}", "── Statistics ──────────────────────────────────────────────────".bold());
    println!("  Encoding   : {}", report.encoding.to_string().cyan());
    println!("  Characters : {}", fmt_count(report.characters));
    println!("  Tokens     : {}", fmt_count(report.token_count));
}

// ── cost projection ───────────────────────────────────────────────────────────

pub fn print_costs(encoding: Encoding, token_count: u64) {
    let models = lookup(encoding);

    println!("\n{}", "── Projected Cost ──────────────────────────────────────────────".bold());
    if models.is_empty() {
        println!("{}", format!("No priced models use {}.", encoding).yellow());
        return;
    }

    println!(
        "  {} tokens across {} models\n",
        fmt_count(token_count as usize),
        models.len()
    );
    for entry in models {
        for line in project(token_count, entry) {
            println!(
                "  {:<46}{}",
                line.label,
                format!("{:>12}", line.value).green()
            );
        }
    }
}

// ── catalog tables ────────────────────────────────────────────────────────────

pub fn print_model_list(entries: &[&ModelPricing]) {
    if entries.is_empty() {
        println!("{}", "No priced models.".yellow());
        return;
    }

    let (w_id, w_name, w_enc, w_price) = (32, 34, 12, 10);

    println!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}  {:>w3$}  {:>w3$}  {:>w3$}",
        "MODEL ID".bold(),
        "NAME".bold(),
        "ENCODING".bold(),
        "REG IN".bold(),
        "REG OUT".bold(),
        "BATCH IN".bold(),
        "BATCH OUT".bold(),
        w0 = w_id,
        w1 = w_name,
        w2 = w_enc,
        w3 = w_price,
    );
    println!("{}", "─".repeat(w_id + w_name + w_enc + 4 * w_price + 12));

    for e in entries {
        println!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}  {:>w3$}  {:>w3$}  {:>w3$}",
            truncate(e.model_id, w_id),
            truncate(e.human_name, w_name),
            e.encoding.to_string().cyan(),
            fmt_per_mtok(Some(e.regular.input)),
            fmt_per_mtok(Some(e.regular.output)),
            fmt_per_mtok(e.batch.input),
            fmt_per_mtok(e.batch.output),
            w0 = w_id,
            w1 = w_name,
            w2 = w_enc,
            w3 = w_price,
        );
    }
    println!("\n{} models (prices in USD per 1M tokens)", entries.len());
}

pub fn print_encodings() {
    println!("\n{}", "── Encodings ───────────────────────────────────────────────────".bold());
    for encoding in Encoding::ALL {
        let count = lookup(encoding).len();
        let models = match count {
            0 => "no priced models".dimmed().to_string(),
            1 => "1 priced model".to_string(),
            n => format!("{} priced models", n),
        };
        println!("  {:<14} {}", encoding.to_string().cyan(), models);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_comma_grouped() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(1_234_567), "1,234,567");
    }

    #[test]
    fn absent_prices_render_as_dash() {
        assert_eq!(fmt_per_mtok(None), "-");
        assert_eq!(fmt_per_mtok(Some(2.5)), "$2.50");
    }

    #[test]
    fn whitespace_is_made_visible() {
        assert_eq!(visible("a b"), "a\u{00A0}b");
        assert_eq!(visible("a\nb"), "a<newline>b");
    }
}
