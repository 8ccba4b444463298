use serde::Serialize;

use crate::analyzer::{Analyzer, ParsedWord};
use crate::features::FeatureSet;
use crate::grammeme::Grammeme;

/// Cases declined, in output order.
pub const CASES: [Grammeme; 6] = [
    Grammeme::Nomn,
    Grammeme::Gent,
    Grammeme::Datv,
    Grammeme::Accs,
    Grammeme::Ablt,
    Grammeme::Loct,
];

/// Singular and plural form of one case. A form the word does not have is
/// `None` and still serialized (as `null`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NumberForms {
    pub singular: Option<String>,
    pub plural: Option<String>,
}

/// Six-case by two-number declension table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CaseTable {
    pub nominative: NumberForms,
    pub genitive: NumberForms,
    pub dative: NumberForms,
    pub accusative: NumberForms,
    pub instrumental: NumberForms,
    pub prepositional: NumberForms,
}

impl CaseTable {
    /// Gets the forms of a case, or `None` if `case` is not one of [`CASES`].
    pub fn get(&self, case: Grammeme) -> Option<&NumberForms> {
        match case {
            Grammeme::Nomn => Some(&self.nominative),
            Grammeme::Gent => Some(&self.genitive),
            Grammeme::Datv => Some(&self.dative),
            Grammeme::Accs => Some(&self.accusative),
            Grammeme::Ablt => Some(&self.instrumental),
            Grammeme::Loct => Some(&self.prepositional),
            _ => None,
        }
    }

    fn get_mut(&mut self, case: Grammeme) -> Option<&mut NumberForms> {
        match case {
            Grammeme::Nomn => Some(&mut self.nominative),
            Grammeme::Gent => Some(&mut self.genitive),
            Grammeme::Datv => Some(&mut self.dative),
            Grammeme::Accs => Some(&mut self.accusative),
            Grammeme::Ablt => Some(&mut self.instrumental),
            Grammeme::Loct => Some(&mut self.prepositional),
            _ => None,
        }
    }

    /// Iterates `(case, forms)` in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Grammeme, &NumberForms)> + '_ {
        CASES
            .into_iter()
            .filter_map(move |case| self.get(case).map(|forms| (case, forms)))
    }
}

/// Declines a parsed word: one query per case and number.
pub fn decline<A>(analyzer: &A, parsed: &ParsedWord) -> CaseTable
where
    A: Analyzer + ?Sized,
{
    let mut table = CaseTable::default();
    for case in CASES {
        let singular = analyzer.inflect(parsed, FeatureSet::from([case, Grammeme::Sing]));
        let plural = analyzer.inflect(parsed, FeatureSet::from([case, Grammeme::Plur]));
        if let Some(slot) = table.get_mut(case) {
            *slot = NumberForms { singular, plural };
        }
    }
    table
}
