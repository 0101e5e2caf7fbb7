//! Model pricing catalog (USD per 1M tokens, as published late 2024).
//!
//! Authoring order matters: when two entries in the same encoding family
//! share a display name, the earlier one wins in the lookup view.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::schema::{BatchCost, CostPair, Encoding, ModelPricing};

const fn entry(
    model_id: &'static str,
    human_name: &'static str,
    description: &'static str,
    regular_in: f64,
    regular_out: f64,
    batch_in: Option<f64>,
    batch_out: Option<f64>,
    encoding: Encoding,
) -> ModelPricing {
    ModelPricing {
        model_id,
        human_name,
        description,
        regular: CostPair {
            input: regular_in,
            output: regular_out,
        },
        batch: BatchCost {
            input: batch_in,
            output: batch_out,
        },
        encoding,
    }
}

pub static CATALOG: &[ModelPricing] = &[
    entry(
        "gpt-4o",
        "GPT-4o",
        "GPT-4o is an advanced multimodal model with 128K context.",
        5.0,
        15.0,
        Some(2.5),
        Some(7.5),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4o-2024-08-06",
        "GPT-4o (Aug 2024)",
        "A more recent version of GPT-4o, optimized for efficiency.",
        2.5,
        10.0,
        Some(1.25),
        Some(5.0),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4o-2024-05-13",
        "GPT-4o (May 2024)",
        "An earlier version of GPT-4o with strong capabilities.",
        5.0,
        15.0,
        Some(2.5),
        Some(7.5),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4o-mini",
        "GPT-4o Mini",
        "Cost-efficient, small version of GPT-4o optimized for simpler tasks.",
        0.15,
        0.6,
        Some(0.075),
        Some(0.3),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4o-mini-2024-07-18",
        "GPT-4o Mini (Jul 2024)",
        "A recent version of GPT-4o Mini optimized for cost-efficiency.",
        0.15,
        0.6,
        Some(0.075),
        Some(0.3),
        Encoding::O200kBase,
    ),
    entry(
        "o1-preview",
        "OpenAI o1-preview",
        "Reasoning model for complex tasks with 128K context.",
        15.0,
        60.0,
        None,
        None,
        Encoding::O200kBase,
    ),
    entry(
        "o1-mini",
        "OpenAI o1-mini",
        "Fast and cost-efficient reasoning model tailored for coding and math.",
        3.0,
        12.0,
        None,
        None,
        Encoding::O200kBase,
    ),
    entry(
        "text-embedding-3-small",
        "Text Embedding 3 Small",
        "Embedding model for small-scale applications.",
        0.02,
        0.0,
        Some(0.01),
        Some(0.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "text-embedding-3-large",
        "Text Embedding 3 Large",
        "Embedding model for large-scale applications.",
        0.13,
        0.0,
        Some(0.065),
        Some(0.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "ada-v2",
        "Ada v2",
        "A versatile model suitable for text embeddings and lightweight NLP tasks.",
        0.1,
        0.0,
        Some(0.05),
        Some(0.0),
        Encoding::R50kBase,
    ),
    entry(
        "gpt-4o-2024-08-06-finetune",
        "GPT-4o 2024-08-06 Finetuning",
        "GPT-4o finetuned for custom tasks.",
        3.75,
        15.0,
        Some(1.875),
        Some(7.5),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4o-mini-2024-07-18-finetune",
        "GPT-4o Mini 2024-07-18 Finetuning",
        "GPT-4o mini finetuned for custom tasks.",
        0.3,
        1.2,
        Some(0.15),
        Some(0.6),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4o-mini-training",
        "GPT-4o Mini Training",
        "Training GPT-4o Mini with custom datasets.",
        3.0,
        0.0,
        Some(1.5),
        Some(0.0),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-3.5-turbo-finetune",
        "GPT-3.5 Turbo Finetuning",
        "Finetuning GPT-3.5 Turbo with custom data.",
        3.0,
        6.0,
        Some(1.5),
        Some(3.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-4o-mini-training-2024-07-18",
        "GPT-4o Mini Training 2024-07-18",
        "Finetuning GPT-4o Mini with specific date.",
        3.0,
        0.0,
        Some(1.5),
        Some(0.0),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4-32k",
        "GPT-4 32k",
        "GPT-4 model with 32k token context.",
        60.0,
        120.0,
        Some(30.0),
        Some(60.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-16k",
        "GPT-3.5 Turbo 16k",
        "GPT-3.5 model with 16k token context.",
        3.0,
        4.0,
        Some(1.5),
        Some(2.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-0301",
        "GPT-3.5 Turbo 0301",
        "Earlier version of GPT-3.5 Turbo.",
        1.5,
        2.0,
        Some(0.75),
        Some(1.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-4-turbo",
        "GPT-4 Turbo",
        "Faster and more cost-efficient version of GPT-4.",
        10.0,
        30.0,
        Some(5.0),
        Some(15.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "chatgpt-4o-latest",
        "ChatGPT 4o Latest",
        "Latest version of ChatGPT 4o.",
        5.0,
        15.0,
        Some(2.5),
        Some(7.5),
        Encoding::O200kBase,
    ),
    entry(
        "gpt-4-turbo-2024-04-09",
        "GPT-4 Turbo 2024-04-09",
        "Updated version of GPT-4 Turbo.",
        10.0,
        30.0,
        Some(5.0),
        Some(15.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-4",
        "GPT-4",
        "Standard version of GPT-4.",
        30.0,
        60.0,
        Some(15.0),
        Some(30.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-4-0125-preview",
        "GPT-4 0125 Preview",
        "Preview version of GPT-4.",
        10.0,
        30.0,
        Some(5.0),
        Some(15.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-4-1106-preview",
        "GPT-4 1106 Preview",
        "Another preview version of GPT-4.",
        10.0,
        30.0,
        Some(5.0),
        Some(15.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-4-vision-preview",
        "GPT-4 Vision Preview",
        "Vision capabilities preview of GPT-4.",
        10.0,
        30.0,
        Some(5.0),
        Some(15.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-0125",
        "GPT-3.5 Turbo 0125",
        "Preview version of GPT-3.5 Turbo.",
        0.5,
        1.5,
        Some(0.25),
        Some(0.75),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-instruct",
        "GPT-3.5 Turbo Instruct",
        "Instruction-tuned version of GPT-3.5 Turbo.",
        1.5,
        2.0,
        Some(0.75),
        Some(1.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-1106",
        "GPT-3.5 Turbo 1106",
        "Another variant of GPT-3.5 Turbo.",
        1.0,
        2.0,
        Some(0.5),
        Some(1.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-0613",
        "GPT-3.5 Turbo 0613",
        "Version of GPT-3.5 Turbo from June 2023.",
        1.5,
        2.0,
        Some(0.75),
        Some(1.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "gpt-3.5-turbo-16k-0613",
        "GPT-3.5 Turbo 16k 0613",
        "16k context version from June 2023.",
        3.0,
        4.0,
        Some(1.5),
        Some(2.0),
        Encoding::Cl100kBase,
    ),
    entry(
        "davinci-002",
        "Davinci 002",
        "Legacy model with high performance.",
        2.0,
        2.0,
        Some(1.0),
        Some(1.0),
        Encoding::P50kBase,
    ),
    entry(
        "babbage-002",
        "Babbage 002",
        "A smaller model for efficient processing.",
        0.4,
        0.4,
        Some(0.2),
        Some(0.2),
        Encoding::P50kBase,
    ),
];

/// Group entries by encoding family, preserving slice order within each
/// group and keeping only the first occurrence of each display name.
pub fn index_catalog<'a>(
    entries: &'a [ModelPricing],
) -> HashMap<Encoding, Vec<&'a ModelPricing>> {
    let mut index: HashMap<Encoding, Vec<&'a ModelPricing>> = HashMap::new();
    for e in entries {
        let group = index.entry(e.encoding).or_default();
        if group.iter().any(|seen| seen.human_name == e.human_name) {
            continue;
        }
        group.push(e);
    }
    index
}

fn by_encoding() -> &'static HashMap<Encoding, Vec<&'static ModelPricing>> {
    static INDEX: OnceLock<HashMap<Encoding, Vec<&'static ModelPricing>>> = OnceLock::new();
    INDEX.get_or_init(|| index_catalog(CATALOG))
}

/// All priced models for an encoding family, deduplicated by display name,
/// in catalog order. A family with no published pricing yields an empty
/// slice rather than an error.
pub fn lookup(encoding: Encoding) -> &'static [&'static ModelPricing] {
    by_encoding()
        .get(&encoding)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for e in CATALOG {
            assert!(seen.insert(e.model_id), "duplicate model_id {}", e.model_id);
        }
    }

    #[test]
    fn all_quoted_prices_are_non_negative() {
        for e in CATALOG {
            assert!(e.regular.input >= 0.0, "{}", e.model_id);
            assert!(e.regular.output >= 0.0, "{}", e.model_id);
            if let Some(p) = e.batch.input {
                assert!(p >= 0.0, "{}", e.model_id);
            }
            if let Some(p) = e.batch.output {
                assert!(p >= 0.0, "{}", e.model_id);
            }
        }
    }

    #[test]
    fn lookup_returns_only_matching_encodings() {
        for enc in Encoding::ALL {
            for e in lookup(enc) {
                assert_eq!(e.encoding, enc);
            }
        }
    }

    #[test]
    fn lookup_never_repeats_a_display_name() {
        for enc in Encoding::ALL {
            let mut seen = std::collections::HashSet::new();
            for e in lookup(enc) {
                assert!(seen.insert(e.human_name), "duplicate name {}", e.human_name);
            }
        }
    }

    #[test]
    fn every_catalog_entry_is_covered_by_lookup() {
        let total: usize = Encoding::ALL.iter().map(|&e| lookup(e).len()).sum();
        // Nothing in the current catalog shares a display name, so no entry
        // is shadowed and the groups partition the whole table.
        assert_eq!(total, CATALOG.len());
    }

    #[test]
    fn family_without_pricing_is_empty_not_an_error() {
        assert!(lookup(Encoding::P50kEdit).is_empty());
    }

    #[test]
    fn earliest_authored_duplicate_wins() {
        static DUPES: &[ModelPricing] = &[
            entry("m1", "Model One", "first", 5.0, 15.0, Some(2.5), None, Encoding::Cl100kBase),
            entry("m2", "Model Two", "other", 1.0, 2.0, None, None, Encoding::Cl100kBase),
            entry("m3", "Model One", "later duplicate", 9.0, 9.0, None, None, Encoding::Cl100kBase),
            // Same display name in a different family is not a duplicate.
            entry("m4", "Model One", "other family", 3.0, 4.0, None, None, Encoding::O200kBase),
        ];
        let index = index_catalog(DUPES);
        let group = &index[&Encoding::Cl100kBase];
        let ids: Vec<&str> = group.iter().map(|e| e.model_id).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
        assert_eq!(index[&Encoding::O200kBase].len(), 1);
    }

    #[test]
    fn catalog_order_is_preserved_within_groups() {
        let index = index_catalog(CATALOG);
        for group in index.values() {
            let positions: Vec<usize> = group
                .iter()
                .map(|e| {
                    CATALOG
                        .iter()
                        .position(|c| c.model_id == e.model_id)
                        .unwrap()
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
