use std::collections::BTreeMap;

use serde::Serialize;

use crate::analyzer::{Analyzer, ParsedWord};
use crate::features::FeatureSet;
use crate::grammeme::Grammeme;

/// Person and number of a present (or simple future) form, keyed by the
/// pronoun it agrees with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Person {
    #[serde(rename = "я")]
    FirstSingular,
    #[serde(rename = "ты")]
    SecondSingular,
    #[serde(rename = "он_она")]
    ThirdSingular,
    #[serde(rename = "мы")]
    FirstPlural,
    #[serde(rename = "вы")]
    SecondPlural,
    #[serde(rename = "они")]
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub fn features(self) -> FeatureSet {
        use Grammeme::*;
        match self {
            Person::FirstSingular => FeatureSet::from([Per1, Sing]),
            Person::SecondSingular => FeatureSet::from([Per2, Sing]),
            Person::ThirdSingular => FeatureSet::from([Per3, Sing]),
            Person::FirstPlural => FeatureSet::from([Per1, Plur]),
            Person::SecondPlural => FeatureSet::from([Per2, Plur]),
            Person::ThirdPlural => FeatureSet::from([Per3, Plur]),
        }
    }
}

/// Gender and number of a past form, keyed by the pronoun it agrees with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PastSubject {
    #[serde(rename = "он")]
    Masculine,
    #[serde(rename = "она")]
    Feminine,
    #[serde(rename = "оно")]
    Neuter,
    #[serde(rename = "они")]
    Plural,
}

impl PastSubject {
    pub const ALL: [PastSubject; 4] = [
        PastSubject::Masculine,
        PastSubject::Feminine,
        PastSubject::Neuter,
        PastSubject::Plural,
    ];

    pub fn features(self) -> FeatureSet {
        use Grammeme::*;
        match self {
            PastSubject::Masculine => FeatureSet::from([Past, Masc, Sing]),
            PastSubject::Feminine => FeatureSet::from([Past, Femn, Sing]),
            PastSubject::Neuter => FeatureSet::from([Past, Neut, Sing]),
            PastSubject::Plural => FeatureSet::from([Past, Plur]),
        }
    }
}

/// Addressee of an imperative form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Addressee {
    #[serde(rename = "ты")]
    Singular,
    #[serde(rename = "вы")]
    Plural,
}

impl Addressee {
    pub const ALL: [Addressee; 2] = [Addressee::Singular, Addressee::Plural];

    pub fn features(self) -> FeatureSet {
        match self {
            Addressee::Singular => FeatureSet::from([Grammeme::Impr, Grammeme::Sing]),
            Addressee::Plural => FeatureSet::from([Grammeme::Impr, Grammeme::Plur]),
        }
    }
}

/// Verb conjugation table.
///
/// Unlike [`CaseTable`](crate::CaseTable), a form the verb does not have is
/// left out of its map rather than stored as empty, so consumers can branch
/// on key presence. The three maps are always serialized, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConjugationTable {
    /// Present forms, or simple future forms for verbs without a present.
    pub present: BTreeMap<Person, String>,
    pub past: BTreeMap<PastSubject, String>,
    pub imperative: BTreeMap<Addressee, String>,
}

/// Conjugates a parsed verb or infinitive.
pub fn conjugate<A>(analyzer: &A, parsed: &ParsedWord) -> ConjugationTable
where
    A: Analyzer + ?Sized,
{
    let mut table = ConjugationTable::default();

    for person in Person::ALL {
        let features = person.features();
        let form = analyzer
            .inflect(parsed, features.with(Grammeme::Pres))
            .or_else(|| analyzer.inflect(parsed, features.with(Grammeme::Futr)));
        if let Some(form) = form {
            table.present.insert(person, form);
        }
    }

    for subject in PastSubject::ALL {
        if let Some(form) = analyzer.inflect(parsed, subject.features()) {
            table.past.insert(subject, form);
        }
    }

    for addressee in Addressee::ALL {
        if let Some(form) = analyzer.inflect(parsed, addressee.features()) {
            table.imperative.insert(addressee, form);
        }
    }

    table
}
