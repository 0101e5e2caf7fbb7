//! Cost projection: token count × catalog prices → display strings.
//!
//! Formatting policy of record: costs under one dollar render in cents,
//! rounded to the nearest tenth of a cent, with anything under $0.0001
//! clamped to "< 0.01¢". Costs of a dollar or more render as en-US
//! currency with thousands grouping and two decimals.

use crate::schema::{CostLine, ModelPricing};

/// Project a token count against one catalog entry. Absent price points
/// produce no line at all; points quoted at zero do.
pub fn project(token_count: u64, entry: &ModelPricing) -> Vec<CostLine> {
    let points = [
        ("Regular Input", Some(entry.regular.input)),
        ("Regular Output", Some(entry.regular.output)),
        ("Batch Input", entry.batch.input),
        ("Batch Output", entry.batch.output),
    ];

    points
        .iter()
        .filter_map(|&(point, price)| {
            price.map(|p| CostLine {
                label: format!("{} {}", entry.human_name, point),
                value: display_price(p * token_count as f64 / 1_000_000.0),
            })
        })
        .collect()
}

pub fn display_price(cost: f64) -> String {
    if cost < 1.0 {
        display_as_cents(cost)
    } else {
        display_as_dollars(cost)
    }
}

fn display_as_cents(cost: f64) -> String {
    if cost < 0.0001 {
        return "< 0.01¢".to_string();
    }
    // Nearest tenth of a cent, rendered without a trailing ".0".
    let tenths = (cost * 1000.0).round() as i64;
    if tenths % 10 == 0 {
        format!("{}¢", tenths / 10)
    } else {
        format!("{}.{}¢", tenths / 10, tenths % 10)
    }
}

fn display_as_dollars(cost: f64) -> String {
    let total_cents = (cost * 100.0).round() as i64;
    format!(
        "${}.{:02}",
        group_thousands(total_cents / 100),
        total_cents % 100
    )
}

/// Render a non-negative integer with en-US thousands separators.
pub fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::schema::{BatchCost, CostPair, Encoding};

    fn sample_entry() -> ModelPricing {
        ModelPricing {
            model_id: "m1",
            human_name: "Model One",
            description: "test entry",
            regular: CostPair {
                input: 5.0,
                output: 15.0,
            },
            batch: BatchCost {
                input: Some(2.5),
                output: None,
            },
            encoding: Encoding::Cl100kBase,
        }
    }

    #[test]
    fn two_million_tokens_land_on_the_dollar_path() {
        let lines = project(2_000_000, &sample_entry());
        let values: Vec<&str> = lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(values, vec!["$10.00", "$30.00", "$5.00"]);
        assert_eq!(lines[0].label, "Model One Regular Input");
        assert_eq!(lines[2].label, "Model One Batch Input");
    }

    #[test]
    fn absent_batch_output_is_omitted_even_for_large_counts() {
        let lines = project(500_000_000, &sample_entry());
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.label.contains("Batch Output")));
    }

    #[test]
    fn ten_tokens_fall_below_the_cents_floor() {
        let lines = project(10, &sample_entry());
        assert_eq!(lines[0].value, "< 0.01¢");
    }

    #[test]
    fn zero_tokens_clamp_every_defined_point() {
        for line in project(0, &sample_entry()) {
            assert_eq!(line.value, "< 0.01¢");
        }
    }

    #[test]
    fn zero_price_points_still_emit_a_line() {
        // Embedding entries quote output at zero; offered-at-zero is shown,
        // unlike not-offered.
        let embedding = catalog::CATALOG
            .iter()
            .find(|e| e.model_id == "text-embedding-3-small")
            .unwrap();
        let lines = project(1_000_000, embedding);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].value, "< 0.01¢");
    }

    #[test]
    fn one_dollar_exactly_uses_the_dollar_branch() {
        assert_eq!(display_price(1.0), "$1.00");
    }

    #[test]
    fn just_under_a_dollar_uses_the_cents_branch() {
        assert_eq!(display_price(0.9999), "100¢");
    }

    #[test]
    fn cents_round_to_the_nearest_tenth() {
        assert_eq!(display_price(0.1234), "12.3¢");
        assert_eq!(display_price(0.05), "5¢");
        assert_eq!(display_price(0.00004), "< 0.01¢");
        assert_eq!(display_price(0.0004), "0¢");
    }

    #[test]
    fn dollars_group_thousands() {
        assert_eq!(display_price(1234.561), "$1,234.56");
        assert_eq!(display_price(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn grouping_helper() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
