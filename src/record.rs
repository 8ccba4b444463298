use serde::Serialize;

use crate::analyzer::{Analyzer, ParsedWord};
use crate::cases::{self, CaseTable};
use crate::comparison::{self, ComparisonTable};
use crate::conjugation::{self, ConjugationTable};
use crate::error::Result;
use crate::grammeme::Grammeme;
use crate::paradigm::{self, Paradigm};

/// Everything generated for one vocabulary word.
///
/// `cases` is present for nouns, full adjectives and pronouns,
/// `conjugations` for infinitives and verbs, `comparison` for full
/// adjectives only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    /// The word as it appears in the vocabulary.
    pub word: String,
    pub normal_form: String,
    pub pos: Option<Grammeme>,
    pub gender: Option<Grammeme>,
    pub animacy: Option<Grammeme>,
    pub aspect: Option<Grammeme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<CaseTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjugations: Option<ConjugationTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonTable>,
}

impl WordRecord {
    /// Builds the record of an already parsed word.
    pub fn from_parsed<A>(analyzer: &A, word: &str, parsed: &ParsedWord) -> Self
    where
        A: Analyzer + ?Sized,
    {
        let tag = parsed.tag;
        let mut record = Self {
            word: word.to_string(),
            normal_form: parsed.normal_form.clone(),
            pos: tag.pos(),
            gender: tag.gender(),
            animacy: tag.animacy(),
            aspect: tag.aspect(),
            cases: None,
            conjugations: None,
            comparison: None,
        };

        for paradigm in paradigm::select(record.pos) {
            match paradigm {
                Paradigm::Cases => record.cases = Some(cases::decline(analyzer, parsed)),
                Paradigm::Conjugations => {
                    record.conjugations = Some(conjugation::conjugate(analyzer, parsed))
                }
                Paradigm::Comparison => {
                    record.comparison = Some(comparison::compare(analyzer, parsed))
                }
            }
        }
        record
    }

    /// Parses `word` and builds its record.
    pub fn analyze<A>(analyzer: &A, word: &str) -> Result<Self>
    where
        A: Analyzer + ?Sized,
    {
        let parsed = analyzer.parse(word)?;
        Ok(Self::from_parsed(analyzer, word, &parsed))
    }
}
