//! Associates a logical axiom with the ontology it was read from, for
//! reporting, diffing and indexing. The ontology side is an opaque handle:
//! this layer only ever compares, hashes and displays it.

use rustc_hash::FxBuildHasher;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash, Hasher};

/// Salt mixed into the hash of a pair with no known source ontology. A pair
/// with a present ontology hashes from the ontology itself, so the two cases
/// never collide by construction; note the asymmetry: equality ignores the
/// ontology when both sides lack one, but the salted hash is not what a
/// present ontology hashing to 37 would produce.
const NO_ONTOLOGY_SALT: u64 = 37;

/// An axiom paired with the ontology it came from, or `None` for "no known
/// source".
#[derive(Debug, Clone)]
pub struct AxiomProvenance<O, A> {
    ontology: Option<O>,
    axiom: A,
}

impl<O, A> AxiomProvenance<O, A> {
    #[inline]
    pub fn new(ontology: O, axiom: A) -> Self {
        Self {
            ontology: Some(ontology),
            axiom,
        }
    }

    #[inline]
    pub fn without_ontology(axiom: A) -> Self {
        Self {
            ontology: None,
            axiom,
        }
    }

    #[inline]
    pub fn ontology(&self) -> Option<&O> {
        self.ontology.as_ref()
    }

    #[inline]
    pub fn axiom(&self) -> &A {
        &self.axiom
    }
}

/// Both ontologies present: ontology and axiom must both match. Exactly one
/// present: never equal. Neither present: the axioms decide.
impl<O: PartialEq, A: PartialEq> PartialEq for AxiomProvenance<O, A> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.ontology, &other.ontology) {
            (Some(a), Some(b)) => a == b && self.axiom == other.axiom,
            (None, None) => self.axiom == other.axiom,
            _ => false,
        }
    }
}
impl<O: Eq, A: Eq> Eq for AxiomProvenance<O, A> {}

impl<O: Hash, A: Hash> Hash for AxiomProvenance<O, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let axiom = FxBuildHasher.hash_one(&self.axiom);
        let h = self
            .ontology
            .as_ref()
            .map_or(NO_ONTOLOGY_SALT, |o| FxBuildHasher.hash_one(o))
            .wrapping_add(axiom);
        state.write_u64(h);
    }
}

impl<O: Display, A: Display> Display for AxiomProvenance<O, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.ontology {
            Some(o) => write!(f, "{} in {o}", self.axiom),
            None => Display::fmt(&self.axiom, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iris::Iri;

    type Pair = AxiomProvenance<Iri, &'static str>;

    fn ont() -> Iri {
        Iri::new("http://example.com/onto")
    }

    #[test]
    fn equality_table() {
        let both = Pair::new(ont(), "SubClassOf(A B)");
        let same = Pair::new(ont(), "SubClassOf(A B)");
        let other_ont = Pair::new(Iri::new("http://example.com/other"), "SubClassOf(A B)");
        let none = Pair::without_ontology("SubClassOf(A B)");
        let none_too = Pair::without_ontology("SubClassOf(A B)");
        let none_other = Pair::without_ontology("SubClassOf(A C)");

        assert_eq!(both, same);
        assert_ne!(both, other_ont);
        // absent vs present never match, even with equal axioms
        assert_ne!(none, both);
        assert_ne!(both, none);
        assert_eq!(none, none_too);
        assert_ne!(none, none_other);
    }

    #[test]
    fn equal_pairs_hash_alike() {
        let h = FxBuildHasher;
        assert_eq!(
            h.hash_one(&Pair::new(ont(), "Ax")),
            h.hash_one(&Pair::new(ont(), "Ax"))
        );
        assert_eq!(
            h.hash_one(&Pair::without_ontology("Ax")),
            h.hash_one(&Pair::without_ontology("Ax"))
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(
            Pair::new(ont(), "Ax").to_string(),
            "Ax in http://example.com/onto"
        );
        assert_eq!(Pair::without_ontology("Ax").to_string(), "Ax");
    }

    #[test]
    fn accessors() {
        let p = Pair::new(ont(), "Ax");
        assert_eq!(p.ontology(), Some(&ont()));
        assert_eq!(*p.axiom(), "Ax");
        assert!(Pair::without_ontology("Ax").ontology().is_none());
    }
}
