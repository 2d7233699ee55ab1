//! # Fact List
//!
//! [`FactList`] is the in-memory collection every operation works against.
//! It is populated from disk once per load and only ever grows: there is no
//! removal and no duplicate detection.
//!
//! Lookups never panic. Out-of-range reads and random picks from an empty
//! list return `None`, and searches that match nothing return
//! [`Matches::NotFound`] rather than an empty vector, so callers can tell
//! "no hits" apart from a list they built themselves.

use crate::model::{Fact, FactField};
use rand::seq::SliceRandom;
use rand::Rng;

/// Result of a search over a [`FactList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matches<'a> {
    /// At least one fact matched, in list order.
    Found(Vec<&'a Fact>),
    NotFound,
}

impl<'a> Matches<'a> {
    fn from_vec(found: Vec<&'a Fact>) -> Self {
        if found.is_empty() {
            Matches::NotFound
        } else {
            Matches::Found(found)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matches::Found(found) => found.len(),
            Matches::NotFound => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Matches::NotFound)
    }

    /// Picks one match uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Fact> {
        match self {
            Matches::Found(found) => found.choose(rng).copied(),
            Matches::NotFound => None,
        }
    }

    pub fn into_vec(self) -> Vec<&'a Fact> {
        match self {
            Matches::Found(found) => found,
            Matches::NotFound => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactList {
    facts: Vec<Fact>,
}

impl FactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, fact: Fact) {
        self.facts.push(fact);
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Fact> {
        self.facts.choose(rng)
    }

    /// Matches `term` case-insensitively against author, type or text.
    pub fn search_all(&self, term: &str) -> Matches<'_> {
        let needle = term.to_lowercase();
        self.search(|fact| {
            FactField::ALL
                .iter()
                .any(|field| fact.field_contains(*field, &needle))
        })
    }

    pub fn search<P>(&self, mut predicate: P) -> Matches<'_>
    where
        P: FnMut(&Fact) -> bool,
    {
        Matches::from_vec(self.facts.iter().filter(|&fact| predicate(fact)).collect())
    }

    /// Appends every fact of `other`, keeping their relative order.
    pub fn add_all(&mut self, other: FactList) {
        self.facts.extend(other.facts);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.facts.iter()
    }
}

impl FromIterator<Fact> for FactList {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FactList {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}
