use serde::Serialize;

/// The tokenization families supported by the playground. Each billable
/// model in the catalog consumes exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Cl100kBase,
    O200kBase,
    P50kBase,
    P50kEdit,
    R50kBase,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Cl100kBase,
        Encoding::O200kBase,
        Encoding::P50kBase,
        Encoding::P50kEdit,
        Encoding::R50kBase,
    ];
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Cl100kBase => write!(f, "cl100k_base"),
            Encoding::O200kBase => write!(f, "o200k_base"),
            Encoding::P50kBase => write!(f, "p50k_base"),
            Encoding::P50kEdit => write!(f, "p50k_edit"),
            Encoding::R50kBase => write!(f, "r50k_base"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown encoding: {0}")]
pub struct UnknownEncoding(pub String);

impl std::str::FromStr for Encoding {
    type Err = UnknownEncoding;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cl100k_base" | "cl100k" => Ok(Encoding::Cl100kBase),
            "o200k_base" | "o200k" => Ok(Encoding::O200kBase),
            "p50k_base" | "p50k" => Ok(Encoding::P50kBase),
            "p50k_edit" => Ok(Encoding::P50kEdit),
            "r50k_base" | "r50k" => Ok(Encoding::R50kBase),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}

/// Input/output price pair, USD per 1M tokens. Both points are always
/// quoted for the regular billing mode.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostPair {
    pub input: f64,
    pub output: f64,
}

/// Batch-mode price pair. `None` means the billing mode is not offered for
/// the model, which is different from being offered at zero cost.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BatchCost {
    pub input: Option<f64>,
    pub output: Option<f64>,
}

/// One catalog entry: the cost structure of a single billable model variant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelPricing {
    /// Unique stable identifier.
    pub model_id: &'static str,
    /// Display label. Not unique across entries; duplicates within an
    /// encoding family are collapsed by the lookup view.
    pub human_name: &'static str,
    pub description: &'static str,
    pub regular: CostPair,
    pub batch: BatchCost,
    pub encoding: Encoding,
}

/// One formatted price figure produced by cost projection.
#[derive(Debug, Clone, Serialize)]
pub struct CostLine {
    pub label: String,
    pub value: String,
}

/// The full result of tokenizing one input: everything the report layer
/// needs to render the playground view.
#[derive(Debug, Clone, Serialize)]
pub struct TokenizationReport {
    pub encoding: Encoding,
    pub characters: usize,
    pub token_count: usize,
    pub token_ids: Vec<u32>,
    pub fragments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_roundtrips_through_display_and_parse() {
        for enc in Encoding::ALL {
            let parsed: Encoding = enc.to_string().parse().unwrap();
            assert_eq!(parsed, enc);
        }
    }

    #[test]
    fn unknown_encoding_is_a_parse_error() {
        let err = "q300k_base".parse::<Encoding>().unwrap_err();
        assert!(err.to_string().contains("q300k_base"));
    }

    #[test]
    fn encoding_serializes_to_family_name() {
        let json = serde_json::to_string(&Encoding::Cl100kBase).unwrap();
        assert_eq!(json, "\"cl100k_base\"");
    }
}
