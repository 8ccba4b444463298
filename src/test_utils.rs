use crate::analyzer::{Analyzer, LexemeId, LexiconAnalyzer, ParsedWord, Tag};
use crate::error::{MorphError, Result};
use crate::features::FeatureSet;

/// Small OpenCorpora-style lexicon shared by the unit and integration tests.
pub(crate) const MINI_LEXICON: &str = include_str!("../tests/data/mini_lexicon.txt");

pub(crate) fn mini_analyzer() -> LexiconAnalyzer {
    LexiconAnalyzer::from_text(MINI_LEXICON).unwrap()
}

/// Analyzer that tags every non-empty word alike and realizes only the exact
/// feature sets it was given.
pub(crate) struct MockAnalyzer {
    tag: FeatureSet,
    forms: Vec<(FeatureSet, String)>,
}

impl MockAnalyzer {
    pub(crate) fn new(tag: FeatureSet) -> Self {
        Self {
            tag,
            forms: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, features: FeatureSet, form: &str) {
        self.forms.push((features, form.to_string()));
    }
}

impl Analyzer for MockAnalyzer {
    fn parse(&self, word: &str) -> Result<ParsedWord> {
        if word.is_empty() {
            return Err(MorphError::analysis_unavailable(word));
        }
        Ok(ParsedWord {
            word: word.to_lowercase(),
            normal_form: word.to_lowercase(),
            tag: Tag::new(self.tag),
            lexeme: LexemeId(0),
        })
    }

    fn inflect(&self, _parsed: &ParsedWord, features: FeatureSet) -> Option<String> {
        self.forms
            .iter()
            .find(|(f, _)| *f == features)
            .map(|(_, form)| form.clone())
    }
}
