use crate::grammeme::Grammeme;

/// Paradigm table a word can be expanded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Paradigm {
    Cases,
    Conjugations,
    Comparison,
}

/// Selects the paradigms generated for a part of speech.
///
/// Nouns, full adjectives and pronouns decline, infinitives and verbs
/// conjugate, and full adjectives also compare. Anything else (including an
/// untagged word) gets no paradigm.
pub fn select(pos: Option<Grammeme>) -> &'static [Paradigm] {
    match pos {
        Some(Grammeme::Noun | Grammeme::Npro) => &[Paradigm::Cases],
        Some(Grammeme::Adjf) => &[Paradigm::Cases, Paradigm::Comparison],
        Some(Grammeme::Infn | Grammeme::Verb) => &[Paradigm::Conjugations],
        _ => &[],
    }
}
