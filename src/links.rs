//! Links between lemmas of an OpenCorpora lexicon.
//!
//! OpenCorpora keeps an infinitive and its finite forms (or an adjective and
//! its comparative) as separate lemmas joined by typed links. The analyzer
//! folds each linked lemma into the lemma it is linked from, so one lexeme
//! covers the whole paradigm.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{MorphError, Result};
use crate::parser::LexemeRecord;

/// Link types whose target lemma is merged into the source lemma.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    AdjfAdjs,
    AdjfComp,
    AdjfSupr,
    InfnVerb,
    InfnPrtf,
    InfnGrnd,
    PrtfPrts,
}

impl FromStr for LinkKind {
    type Err = &'static str;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ADJF-ADJS" => Ok(Self::AdjfAdjs),
            "ADJF-COMP" => Ok(Self::AdjfComp),
            "ADJF-SUPR_ejsh" | "ADJF-SUPR_ajsh" | "ADJF-SUPR_suf" | "ADJF-SUPR_nai"
            | "ADJF-SUPR_slng" => Ok(Self::AdjfSupr),
            "INFN-VERB" => Ok(Self::InfnVerb),
            "INFN-PRTF" => Ok(Self::InfnPrtf),
            "INFN-GRND" => Ok(Self::InfnGrnd),
            "PRTF-PRTS" => Ok(Self::PrtfPrts),
            _ => Err("Unmerged link type"),
        }
    }
}

/// Directed link from one lemma id to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LemmaLink {
    pub from: u32,
    pub to: u32,
    pub kind: LinkKind,
}

/// Reads a links file: one `FROM TO TYPE` line per link, whitespace
/// separated, e.g. `1 2 INFN-VERB`.
///
/// Blank and `#` lines are skipped. Links of types that are not merged
/// (`NOUN-ADJF`, `NAME-PATR`, ...) are dropped.
pub fn read_links<R>(reader: R) -> Result<Vec<LemmaLink>>
where
    R: Read,
{
    let mut links = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cols = line.split_whitespace();
        let (Some(from), Some(to), Some(kind), None) =
            (cols.next(), cols.next(), cols.next(), cols.next())
        else {
            return Err(MorphError::invalid_lexicon(
                line_no,
                "expected `FROM TO TYPE` link",
            ));
        };
        let from = parse_id(from, line_no)?;
        let to = parse_id(to, line_no)?;
        match kind.parse::<LinkKind>() {
            Ok(kind) => links.push(LemmaLink { from, to, kind }),
            Err(_) => trace!(line = line_no, kind, "ignoring link"),
        }
    }
    Ok(links)
}

/// Reads a links file from disk.
pub fn read_links_file<P>(path: P) -> Result<Vec<LemmaLink>>
where
    P: AsRef<Path>,
{
    read_links(File::open(path)?)
}

fn parse_id(col: &str, line_no: usize) -> Result<u32> {
    col.parse()
        .map_err(|_| MorphError::invalid_lexicon(line_no, format!("invalid lemma id {col:?}")))
}

/// Merges linked lemmas into their source lemmas.
///
/// Chains (`INFN-PRTF` then `PRTF-PRTS`) collapse into the first lemma of the
/// chain. The merged lexeme keeps the source's forms first, so its normal
/// form is unchanged, followed by the linked lemmas' forms in lexicon order.
/// Links to or from ids missing in the lexicon are skipped.
pub(crate) fn merge_linked(
    records: Vec<LexemeRecord>,
    links: &[LemmaLink],
) -> Vec<LexemeRecord> {
    if links.is_empty() {
        return records;
    }

    let positions: HashMap<u32, usize> = records
        .iter()
        .enumerate()
        .filter_map(|(pos, r)| r.id.map(|id| (id, pos)))
        .collect();

    let mut parent: Vec<Option<usize>> = vec![None; records.len()];
    for link in links {
        match (positions.get(&link.from), positions.get(&link.to)) {
            (Some(&from), Some(&to)) if from != to && parent[to].is_none() => {
                parent[to] = Some(from);
            }
            _ => debug!(from = link.from, to = link.to, "skipping link"),
        }
    }

    let root = |mut pos: usize| {
        // Bounded walk; a cyclic link set leaves the lemma where the cycle is cut.
        for _ in 0..parent.len() {
            match parent[pos] {
                Some(p) => pos = p,
                None => break,
            }
        }
        pos
    };
    let roots: Vec<usize> = (0..records.len()).map(root).collect();

    let mut merged: Vec<Option<LexemeRecord>> = records.into_iter().map(Some).collect();
    for pos in 0..merged.len() {
        let target = roots[pos];
        if target == pos || merged[target].is_none() {
            continue;
        }
        if let Some(record) = merged[pos].take() {
            if let Some(dest) = merged[target].as_mut() {
                dest.forms.extend(record.forms);
            }
        }
    }
    merged.into_iter().flatten().collect()
}
