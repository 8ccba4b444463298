//! Builds a static table of Russian word paradigms.
//!
//! Each vocabulary word is parsed by an [`Analyzer`], expanded into the
//! paradigms its part of speech supports (case declension, verb conjugation,
//! adjective comparison), and collected into an insertion-ordered
//! [`Dictionary`] ready to be written as JSON.
//!
//! ```
//! use morphdict::{build_dictionary, LexiconAnalyzer};
//!
//! let lexicon = "1\nКОТ\tNOUN,anim,masc sing,nomn\nКОТА\tNOUN,anim,masc sing,gent\n";
//! let analyzer: LexiconAnalyzer = LexiconAnalyzer::from_text(lexicon).unwrap();
//!
//! let batch = build_dictionary(&analyzer, &["кот", "пёс"]);
//! let record = batch.dictionary.get("кот").unwrap();
//! let cases = record.cases.as_ref().unwrap();
//! assert_eq!(cases.genitive.singular.as_deref(), Some("кота"));
//! assert_eq!(cases.genitive.plural, None);
//! assert_eq!(batch.errors[0].word, "пёс");
//! ```

pub mod analyzer;
pub mod cases;
pub mod comparison;
pub mod conjugation;
pub mod dictionary;
pub mod error;
pub mod features;
pub mod form_index;
pub mod grammeme;
pub mod links;
pub mod loader;
pub mod paradigm;
pub mod parser;
pub mod record;
pub mod vocabulary;
pub mod writer;

#[cfg(test)]
mod test_utils;

pub use analyzer::{Analyzer, LexemeId, LexiconAnalyzer, ParsedWord, Tag};
pub use cases::{CaseTable, NumberForms};
pub use comparison::{ComparisonTable, SUPERLATIVE_MARKER};
pub use conjugation::ConjugationTable;
pub use dictionary::{build_dictionary, build_dictionary_par, Batch, Dictionary, ErrorLog, WordFailure};
pub use error::{MorphError, Result};
pub use features::FeatureSet;
pub use grammeme::{Category, Grammeme};
pub use links::{LemmaLink, LinkKind};
pub use loader::LexiconFileFormats;
pub use record::WordRecord;
