use serde::Serialize;

use crate::analyzer::{Analyzer, ParsedWord};
use crate::features::FeatureSet;
use crate::grammeme::Grammeme;

/// Word placed before an adjective to form its superlative.
pub const SUPERLATIVE_MARKER: &str = "самый";

/// Degrees of comparison of a full adjective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparative: Option<String>,
    /// Always periphrastic: [`SUPERLATIVE_MARKER`] followed by the analyzed word.
    pub superlative: String,
}

/// Builds the comparison forms of a parsed adjective.
pub fn compare<A>(analyzer: &A, parsed: &ParsedWord) -> ComparisonTable
where
    A: Analyzer + ?Sized,
{
    ComparisonTable {
        comparative: analyzer.inflect(parsed, FeatureSet::from([Grammeme::Comp])),
        superlative: format!("{} {}", SUPERLATIVE_MARKER, parsed.word),
    }
}
