use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info, warn};

use crate::analyzer::Analyzer;
use crate::error::Result;
use crate::record::WordRecord;

/// Word records keyed by vocabulary word, in first-seen order.
///
/// Inserting a word again replaces its record but keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    records: Vec<WordRecord>,
    positions: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its `word`, returning the record it replaced.
    pub fn insert(&mut self, record: WordRecord) -> Option<WordRecord> {
        match self.positions.get(&record.word) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.positions.insert(record.word.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.positions.get(word).map(|&i| &self.records[i])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> + '_ {
        self.records.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.word.as_str())
    }
}

impl Serialize for Dictionary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.word, record)?;
        }
        map.end()
    }
}

/// A word that could not be analyzed and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFailure {
    pub word: String,
    pub reason: String,
}

/// Failures collected during a batch, in vocabulary order.
pub type ErrorLog = Vec<WordFailure>;

/// Outcome of one batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub dictionary: Dictionary,
    pub errors: ErrorLog,
    /// Number of vocabulary entries attempted, duplicates included.
    pub processed: usize,
}

impl Batch {
    fn push(&mut self, word: &str, result: Result<WordRecord>) {
        self.processed += 1;
        match result {
            Ok(record) => {
                self.dictionary.insert(record);
            }
            Err(e) => {
                warn!(word, error = %e, "failed to analyze word");
                self.errors.push(WordFailure {
                    word: word.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Renders the operator-facing summary.
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Display adapter returned by [`Batch::summary`].
pub struct Summary<'a>(&'a Batch);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let batch = self.0;
        writeln!(f, "Processed {} words", batch.processed)?;
        writeln!(f, "Generated dictionary with {} words", batch.dictionary.len())?;
        if batch.errors.is_empty() {
            write!(f, "No errors")
        } else {
            write!(f, "{} errors occurred:", batch.errors.len())?;
            for failure in &batch.errors {
                write!(f, "\n  - {}: {}", failure.word, failure.reason)?;
            }
            Ok(())
        }
    }
}

/// Builds the dictionary of a vocabulary, one word after another.
///
/// A word that fails to parse is logged in [`Batch::errors`] and skipped; the
/// batch itself never fails.
pub fn build_dictionary<A, S>(analyzer: &A, vocabulary: &[S]) -> Batch
where
    A: Analyzer + ?Sized,
    S: AsRef<str>,
{
    info!(words = vocabulary.len(), "building dictionary");
    let mut batch = Batch::default();
    for (i, word) in vocabulary.iter().enumerate() {
        let word = word.as_ref();
        debug!(n = i + 1, total = vocabulary.len(), word, "processing");
        batch.push(word, WordRecord::analyze(analyzer, word));
    }
    info!(
        entries = batch.dictionary.len(),
        failures = batch.errors.len(),
        "built dictionary"
    );
    batch
}

/// Same as [`build_dictionary`], analyzing words in parallel.
///
/// Results are merged in vocabulary order, so the batch is identical to the
/// sequential one.
pub fn build_dictionary_par<A, S>(analyzer: &A, vocabulary: &[S]) -> Batch
where
    A: Analyzer + Sync + ?Sized,
    S: AsRef<str> + Sync,
{
    info!(words = vocabulary.len(), "building dictionary in parallel");
    let results: Vec<_> = vocabulary
        .par_iter()
        .map(|word| WordRecord::analyze(analyzer, word.as_ref()))
        .collect();

    let mut batch = Batch::default();
    for (word, result) in vocabulary.iter().zip(results) {
        batch.push(word.as_ref(), result);
    }
    info!(
        entries = batch.dictionary.len(),
        failures = batch.errors.len(),
        "built dictionary"
    );
    batch
}
