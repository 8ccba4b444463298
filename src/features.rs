use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grammeme::{Category, Grammeme};

/// Unordered set of grammemes, stored as a bitmask.
///
/// Used both as a word's tag and as the query key for
/// [`Analyzer::inflect`](crate::Analyzer::inflect). Two sets are equal iff
/// they hold the same grammemes.
///
/// ```
/// use morphdict::{FeatureSet, Grammeme};
///
/// let a = FeatureSet::from([Grammeme::Gent, Grammeme::Plur]);
/// let b = FeatureSet::from([Grammeme::Plur, Grammeme::Gent]);
/// assert_eq!(a, b);
/// assert!(a.contains(Grammeme::Gent));
/// assert_eq!(a.len(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(u64);

impl FeatureSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, g: Grammeme) {
        self.0 |= 1u64 << g.bit();
    }

    /// Returns a copy with `g` added.
    #[inline]
    #[must_use]
    pub fn with(mut self, g: Grammeme) -> Self {
        self.insert(g);
        self
    }

    #[inline]
    pub fn contains(&self, g: Grammeme) -> bool {
        self.0 & (1u64 << g.bit()) != 0
    }

    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Gets the grammeme of the given category, if any.
    pub fn get(&self, category: Category) -> Option<Grammeme> {
        self.iter().find(|g| g.category() == category)
    }

    /// Returns a copy where every category present in `required` is replaced
    /// by the grammemes of `required`.
    #[must_use]
    pub fn updated(&self, required: &Self) -> Self {
        let mut out = *self;
        for g in required.iter() {
            for other in self.iter().filter(|o| o.category() == g.category()) {
                out.0 &= !(1u64 << other.bit());
            }
        }
        Self(out.0 | required.0)
    }

    /// Number of grammemes shared with `other`.
    #[inline]
    pub fn common(&self, other: &Self) -> usize {
        (self.0 & other.0).count_ones() as usize
    }

    /// Number of grammemes in exactly one of the two sets.
    #[inline]
    pub fn difference(&self, other: &Self) -> usize {
        (self.0 ^ other.0).count_ones() as usize
    }

    /// Iterates grammemes in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = Grammeme> + '_ {
        Grammeme::ALL.iter().copied().filter(|g| self.contains(*g))
    }
}

impl<const N: usize> From<[Grammeme; N]> for FeatureSet {
    fn from(grammemes: [Grammeme; N]) -> Self {
        grammemes.into_iter().collect()
    }
}

impl FromIterator<Grammeme> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Grammeme>>(iter: T) -> Self {
        let mut set = Self::new();
        for g in iter {
            set.insert(g);
        }
        set
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let codes: Vec<_> = self.iter().map(Grammeme::code).collect();
        write!(f, "{}", codes.join(","))
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureSet{{{}}}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Grammeme::*;

    #[test]
    fn test_superset() {
        let tag = FeatureSet::from([Noun, Inan, Femn, Plur, Gent]);
        assert!(tag.is_superset(&FeatureSet::from([Gent, Plur])));
        assert!(!tag.is_superset(&FeatureSet::from([Gent, Sing])));
        assert!(tag.is_superset(&FeatureSet::new()));
    }

    #[test]
    fn test_updated_replaces_category() {
        let tag = FeatureSet::from([Noun, Inan, Femn, Sing, Nomn]);
        let desired = tag.updated(&FeatureSet::from([Gent, Plur]));
        assert_eq!(desired, FeatureSet::from([Noun, Inan, Femn, Plur, Gent]));
    }

    #[test]
    fn test_get_and_display() {
        let tag = FeatureSet::from([Verb, Impf, Per1, Sing, Pres]);
        assert_eq!(tag.get(Category::Aspect), Some(Impf));
        assert_eq!(tag.get(Category::Gender), None);
        assert_eq!(tag.to_string(), "VERB,sing,impf,1per,pres");
    }

    #[test]
    fn test_similarity_counts() {
        let a = FeatureSet::from([Adjf, Masc, Sing, Nomn]);
        let b = FeatureSet::from([Adjf, Masc, Sing, Gent]);
        assert_eq!(a.common(&b), 3);
        assert_eq!(a.difference(&b), 2);
    }
}
