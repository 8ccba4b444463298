mod flate2;
mod plain;
mod zstd;

use std::path::Path;
use std::str::FromStr;

use crate::error::Result;
use crate::parser::LexemeRecord;

pub use crate::loader::flate2::LexiconGzFileLoader;
pub use crate::loader::plain::{LexiconFileLoader, LexiconTextLoader};
pub use crate::loader::zstd::LexiconZstFileLoader;

/// Loader for a lexicon file.
pub trait LexiconSource {
    type Iter: Iterator<Item = Result<LexemeRecord>>;

    /// Returns an iterator over fallible lexeme records.
    fn iter(&self) -> Result<Self::Iter>;
}

/// File formats supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexiconFileFormats {
    Plain,
    Gzip,
    Zstd,
    /// A compiled analyzer written by [`LexiconAnalyzer::write_to`](crate::LexiconAnalyzer::write_to).
    Bincode,
}

impl LexiconFileFormats {
    /// Guesses the format from the file extension, defaulting to plain text.
    pub fn from_path<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("gz") => Self::Gzip,
            Some("zst") => Self::Zstd,
            Some("bin") => Self::Bincode,
            _ => Self::Plain,
        }
    }
}

impl FromStr for LexiconFileFormats {
    type Err = &'static str;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        match fmt {
            "plain" => Ok(Self::Plain),
            "gzip" => Ok(Self::Gzip),
            "zstd" => Ok(Self::Zstd),
            "bincode" => Ok(Self::Bincode),
            _ => Err("Invalid format"),
        }
    }
}
