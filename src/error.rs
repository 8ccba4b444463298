//! Error types shared by the analyzer, the lexicon loaders and the batch.

/// Result type defaulting to [`MorphError`].
pub type Result<T, E = MorphError> = std::result::Result<T, E>;

/// Errors raised by this crate.
///
/// A form that cannot be inflected is not an error: [`Analyzer::inflect`]
/// reports it as `None`.
///
/// [`Analyzer::inflect`]: crate::Analyzer::inflect
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    /// The analyzer has no parse at all for the word.
    #[error("no analysis available for {word:?}")]
    AnalysisUnavailable { word: String },

    /// A lexicon file could not be parsed.
    #[error("invalid lexicon at line {line}: {msg}")]
    InvalidLexicon { line: usize, msg: String },

    /// An argument was out of its valid range.
    #[error("invalid argument {arg}: {msg}")]
    InvalidArgument { arg: &'static str, msg: String },

    /// A compiled analyzer could not be (de)serialized.
    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MorphError {
    pub(crate) fn analysis_unavailable<S>(word: S) -> Self
    where
        S: Into<String>,
    {
        Self::AnalysisUnavailable { word: word.into() }
    }

    pub(crate) fn invalid_lexicon<S>(line: usize, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidLexicon {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }
}
