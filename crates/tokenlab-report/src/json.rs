use anyhow::Result;
use tokenlab_core::*;

pub fn render_tokenization(report: &TokenizationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_models(entries: &[&ModelPricing]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn render_costs(encoding: Encoding, token_count: u64) -> Result<String> {
    let models: Vec<serde_json::Value> = lookup(encoding)
        .iter()
        .map(|entry| {
            serde_json::json!({
                "model_id": entry.model_id,
                "human_name": entry.human_name,
                "lines": project(token_count, entry),
            })
        })
        .collect();

    let summary = serde_json::json!({
        "encoding": encoding,
        "token_count": token_count,
        "models": models,
    });

    Ok(serde_json::to_string_pretty(&summary)?)
}

pub fn render_encodings() -> Result<String> {
    let encodings: Vec<serde_json::Value> = Encoding::ALL
        .iter()
        .map(|&encoding| {
            serde_json::json!({
                "name": encoding,
                "priced_models": lookup(encoding).len(),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&encodings)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_rendering_skips_absent_points() {
        let rendered = render_costs(Encoding::O200kBase, 2_000_000).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let o1 = parsed["models"]
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["model_id"] == "o1-preview")
            .unwrap();
        // o1 has no batch pricing, so only the two regular lines appear.
        assert_eq!(o1["lines"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn encodings_rendering_covers_every_family() {
        let rendered = render_encodings().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), Encoding::ALL.len());
    }
}
