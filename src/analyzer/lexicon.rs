use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analyzer::{Analyzer, LexemeId, ParsedWord, Tag};
use crate::error::{MorphError, Result};
use crate::features::FeatureSet;
use crate::form_index::{DoubleArrayFormIndex, FormIndex};
use crate::links::{merge_linked, LemmaLink};
use crate::loader::{
    LexiconFileFormats, LexiconFileLoader, LexiconGzFileLoader, LexiconSource, LexiconTextLoader,
    LexiconZstFileLoader,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
struct Form {
    word: String,
    tag: Tag,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct Lexeme {
    forms: Vec<Form>,
}

/// Position of a form inside the lexicon.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct FormRef {
    lexeme: u32,
    form: u32,
}

/// Dictionary-backed [`Analyzer`].
///
/// A surface form may belong to several lexemes; [`Analyzer::parse`] returns
/// the one that comes first in the lexicon. Input written with `е` also finds
/// forms spelled with `ё`, though an exact spelling wins.
///
/// ```
/// use morphdict::{Analyzer, FeatureSet, Grammeme, LexiconAnalyzer};
///
/// let lexicon = "1\nКНИГА\tNOUN,inan,femn sing,nomn\nКНИГ\tNOUN,inan,femn plur,gent\n";
/// let analyzer: LexiconAnalyzer = LexiconAnalyzer::from_text(lexicon).unwrap();
///
/// let parsed = analyzer.parse("Книга").unwrap();
/// assert_eq!(parsed.normal_form, "книга");
/// let form = analyzer.inflect(&parsed, FeatureSet::from([Grammeme::Gent, Grammeme::Plur]));
/// assert_eq!(form.as_deref(), Some("книг"));
/// ```
#[derive(Debug, Deserialize, Serialize)]
pub struct LexiconAnalyzer<I = DoubleArrayFormIndex> {
    lexemes: Vec<Lexeme>,
    index: I,
    /// Analyses of each indexed surface form, best first.
    postings: Vec<Vec<FormRef>>,
}

impl<I> LexiconAnalyzer<I>
where
    I: FormIndex,
{
    /// Builds the analyzer from a lexicon source.
    pub fn from_source<S>(source: &S) -> Result<Self>
    where
        S: LexiconSource,
    {
        Self::from_linked_source(source, &[])
    }

    /// Builds the analyzer from a lexicon source, merging linked lemmas into
    /// the lemmas they are linked from.
    pub fn from_linked_source<S>(source: &S, links: &[LemmaLink]) -> Result<Self>
    where
        S: LexiconSource,
    {
        let records = source.iter()?.collect::<Result<Vec<_>>>()?;
        let lemmas = records.len();
        let records = merge_linked(records, links);

        let mut lexemes = Vec::with_capacity(records.len());
        let mut surfaces: BTreeMap<String, Vec<FormRef>> = BTreeMap::new();
        for record in records {
            let lexeme = u32::try_from(lexemes.len())
                .map_err(|_| MorphError::invalid_argument("lexicon", "too many lexemes"))?;
            let mut forms = Vec::with_capacity(record.forms.len());
            for (i, (word, tag)) in record.forms.into_iter().enumerate() {
                let form = u32::try_from(i)
                    .map_err(|_| MorphError::invalid_argument("lexicon", "too many forms"))?;
                surfaces
                    .entry(fold_yo(&word))
                    .or_default()
                    .push(FormRef { lexeme, form });
                forms.push(Form { word, tag });
            }
            lexemes.push(Lexeme { forms });
        }

        let index = I::build(surfaces.keys().map(String::as_str))?;
        let postings: Vec<_> = surfaces.into_values().collect();
        info!(
            lemmas,
            lexemes = lexemes.len(),
            surfaces = postings.len(),
            "built lexicon analyzer"
        );
        Ok(Self {
            lexemes,
            index,
            postings,
        })
    }

    /// Builds the analyzer from a lexicon in memory.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_source(&LexiconTextLoader::new(text.as_bytes()))
    }

    /// Gets the number of lexemes.
    pub fn num_lexemes(&self) -> usize {
        self.lexemes.len()
    }

    /// Gets the number of distinct surface forms.
    pub fn num_surfaces(&self) -> usize {
        self.postings.len()
    }

    fn form(&self, r: FormRef) -> Option<&Form> {
        self.lexemes
            .get(r.lexeme as usize)?
            .forms
            .get(r.form as usize)
    }
}

impl<I> LexiconAnalyzer<I>
where
    I: FormIndex + Serialize + DeserializeOwned,
{
    /// Loads the analyzer from a lexicon file.
    ///
    /// # Arguments
    ///
    ///  - `filepath`: Path of the lexicon file.
    ///  - `fmt`: File format.
    pub fn from_file<P>(filepath: P, fmt: LexiconFileFormats) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::from_linked_file(filepath, fmt, &[])
    }

    /// Loads the analyzer from a lexicon file and its lemma links.
    ///
    /// Links are ignored for [`LexiconFileFormats::Bincode`], whose lemmas were
    /// merged when it was compiled.
    pub fn from_linked_file<P>(
        filepath: P,
        fmt: LexiconFileFormats,
        links: &[LemmaLink],
    ) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let filepath = filepath.as_ref();
        match fmt {
            LexiconFileFormats::Plain => {
                Self::from_linked_source(&LexiconFileLoader::new(filepath), links)
            }
            LexiconFileFormats::Gzip => {
                Self::from_linked_source(&LexiconGzFileLoader::new(filepath), links)
            }
            LexiconFileFormats::Zstd => {
                Self::from_linked_source(&LexiconZstFileLoader::new(filepath), links)
            }
            LexiconFileFormats::Bincode => {
                if !links.is_empty() {
                    warn!("links are ignored for a compiled analyzer");
                }
                Self::read_from(BufReader::new(File::open(filepath)?))
            }
        }
    }

    /// Serializes the compiled analyzer into the writer.
    pub fn write_to<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        let mut writer = BufWriter::new(writer);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes a compiled analyzer from the reader.
    pub fn read_from<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        let analyzer: Self = bincode::deserialize_from(reader)?;
        info!(
            lexemes = analyzer.num_lexemes(),
            surfaces = analyzer.num_surfaces(),
            "loaded compiled analyzer"
        );
        Ok(analyzer)
    }
}

impl<I> Analyzer for LexiconAnalyzer<I>
where
    I: FormIndex,
{
    fn parse(&self, word: &str) -> Result<ParsedWord> {
        let lowered = word.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(MorphError::analysis_unavailable(word));
        }
        let refs = self
            .index
            .get(&fold_yo(&lowered))
            .and_then(|id| self.postings.get(id))
            .map_or(&[][..], Vec::as_slice);
        // Exact spelling first, then entries where the input wrote е for ё.
        let best = refs
            .iter()
            .find(|&&r| self.form(r).is_some_and(|f| f.word == lowered))
            .or_else(|| {
                refs.iter()
                    .find(|&&r| self.form(r).is_some_and(|f| yo_restores(&lowered, &f.word)))
            })
            .copied()
            .ok_or_else(|| MorphError::analysis_unavailable(word))?;

        let normal = FormRef {
            lexeme: best.lexeme,
            form: 0,
        };
        match (self.form(best), self.form(normal)) {
            (Some(form), Some(normal)) => Ok(ParsedWord {
                word: form.word.clone(),
                normal_form: normal.word.clone(),
                tag: form.tag,
                lexeme: LexemeId(best.lexeme),
            }),
            _ => Err(MorphError::analysis_unavailable(word)),
        }
    }

    fn inflect(&self, parsed: &ParsedWord, features: FeatureSet) -> Option<String> {
        let lexeme = self.lexemes.get(parsed.lexeme.0 as usize)?;
        let desired = parsed.tag.grammemes().updated(&features);

        let mut best: Option<(isize, &Form)> = None;
        for form in &lexeme.forms {
            let grammemes = form.tag.grammemes();
            if !grammemes.is_superset(&features) {
                continue;
            }
            let score =
                10 * desired.common(&grammemes) as isize - desired.difference(&grammemes) as isize;
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, form));
            }
        }
        best.map(|(_, form)| form.word.clone())
    }
}

/// Index key of a surface form: `ё` is written as `е`.
fn fold_yo(word: &str) -> String {
    word.replace('ё', "е")
}

/// Whether `surface` is `input` with some `е` written as `ё`.
fn yo_restores(input: &str, surface: &str) -> bool {
    input.chars().count() == surface.chars().count()
        && input
            .chars()
            .zip(surface.chars())
            .all(|(a, b)| a == b || (a == 'е' && b == 'ё'))
}
