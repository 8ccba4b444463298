use std::io::{BufRead, BufReader, Lines, Read};

use tracing::trace;

use crate::analyzer::Tag;
use crate::error::{MorphError, Result};
use crate::features::FeatureSet;
use crate::grammeme::Grammeme;

/// One lexeme read from a lexicon: its forms with their tags. The first form
/// is the normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexemeRecord {
    /// Lemma id from the block's header line, used to resolve links.
    pub id: Option<u32>,
    pub forms: Vec<(String, Tag)>,
}

/// Parser of an OpenCorpora-style text lexicon.
///
/// ```text
/// 1
/// КНИГА	NOUN,inan,femn sing,nomn
/// КНИГИ	NOUN,inan,femn sing,gent
///
/// 2
/// ...
/// ```
///
/// Each lexeme starts with an id line and ends at a blank line. Forms are
/// lower-cased, lines starting with `#` are skipped, and grammemes outside
/// [`Grammeme`] are dropped.
pub struct LexiconParser<R> {
    lines: Lines<BufReader<R>>,
    line_no: usize,
}

impl<R> LexiconParser<R>
where
    R: Read,
{
    pub fn new(reader: BufReader<R>) -> Result<Self> {
        Ok(Self {
            lines: reader.lines(),
            line_no: 0,
        })
    }

    fn next_lexeme(&mut self) -> Result<Option<LexemeRecord>> {
        let mut forms = Vec::new();
        let mut id = None;
        let mut in_block = false;

        while let Some(line) = self.lines.next() {
            let line = line?;
            self.line_no += 1;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                if !forms.is_empty() {
                    return Ok(Some(LexemeRecord { id, forms }));
                }
                id = None;
                in_block = false;
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if !in_block {
                // Lexeme id or revision header.
                in_block = true;
                if !line.contains('\t') {
                    id = line.trim().parse().ok();
                    continue;
                }
            }
            forms.push(parse_form_line(line, self.line_no)?);
        }

        if forms.is_empty() {
            Ok(None)
        } else {
            Ok(Some(LexemeRecord { id, forms }))
        }
    }
}

impl<R> Iterator for LexiconParser<R>
where
    R: Read,
{
    type Item = Result<LexemeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme().transpose()
    }
}

fn parse_form_line(line: &str, line_no: usize) -> Result<(String, Tag)> {
    let (form, tags) = line
        .split_once('\t')
        .ok_or_else(|| MorphError::invalid_lexicon(line_no, "missing tab separator"))?;
    let form = form.trim();
    if form.is_empty() {
        return Err(MorphError::invalid_lexicon(line_no, "empty form"));
    }

    let mut grammemes = FeatureSet::new();
    for code in tags.split([',', ' ']).filter(|c| !c.is_empty()) {
        match code.parse::<Grammeme>() {
            Ok(g) => grammemes.insert(g),
            Err(_) => trace!(line = line_no, code, "ignoring grammeme"),
        }
    }
    Ok((form.to_lowercase(), Tag::new(grammemes)))
}
