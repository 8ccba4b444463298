mod lexicon;

use serde::{Deserialize, Serialize};

pub use crate::analyzer::lexicon::LexiconAnalyzer;
use crate::error::Result;
use crate::features::FeatureSet;
use crate::grammeme::{Category, Grammeme};

/// Trait for a morphological analyzer: parses a word and realizes other forms
/// of the same lexeme.
pub trait Analyzer {
    /// Parses a word, returning its highest-ranked analysis.
    ///
    /// Fails with [`MorphError::AnalysisUnavailable`] if the word is not
    /// recognized at all.
    ///
    /// [`MorphError::AnalysisUnavailable`]: crate::MorphError::AnalysisUnavailable
    fn parse(&self, word: &str) -> Result<ParsedWord>;

    /// Gets the form of the parsed word's lexeme that carries `features`, or
    /// `None` if the lexeme has no such form.
    fn inflect(&self, parsed: &ParsedWord, features: FeatureSet) -> Option<String>;
}

/// Opaque handle an [`Analyzer`] uses to find the lexeme of a parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LexemeId(pub u32);

/// Grammatical tag of a single word form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Tag {
    grammemes: FeatureSet,
}

impl Tag {
    pub const fn new(grammemes: FeatureSet) -> Self {
        Self { grammemes }
    }

    #[inline]
    pub fn grammemes(&self) -> FeatureSet {
        self.grammemes
    }

    pub fn pos(&self) -> Option<Grammeme> {
        self.grammemes.get(Category::Pos)
    }

    pub fn gender(&self) -> Option<Grammeme> {
        self.grammemes.get(Category::Gender)
    }

    pub fn animacy(&self) -> Option<Grammeme> {
        self.grammemes.get(Category::Animacy)
    }

    pub fn aspect(&self) -> Option<Grammeme> {
        self.grammemes.get(Category::Aspect)
    }
}

impl From<FeatureSet> for Tag {
    fn from(grammemes: FeatureSet) -> Self {
        Self::new(grammemes)
    }
}

/// An analyzer's interpretation of one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedWord {
    /// Surface form as analyzed (lower-cased).
    pub word: String,
    pub normal_form: String,
    pub tag: Tag,
    pub lexeme: LexemeId,
}
