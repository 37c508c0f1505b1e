//! The closed set of term kinds an annotation value can take. A tagged enum
//! replaces visitor double-dispatch: consumers match on the variant.

use super::Iri;
use crate::iris::macros::debugdisplay;
use oxrdf::{BlankNode, Literal};
use std::fmt::Display;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(Iri),
    Anonymous(BlankNode),
    Literal(Literal),
}

impl AnnotationValue {
    #[inline]
    #[must_use]
    pub const fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    #[must_use]
    pub const fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(i) => Some(i),
            _ => None,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Iri(_) => 0,
            Self::Anonymous(_) => 1,
            Self::Literal(_) => 2,
        }
    }
}

impl From<Iri> for AnnotationValue {
    #[inline]
    fn from(i: Iri) -> Self {
        Self::Iri(i)
    }
}
impl From<BlankNode> for AnnotationValue {
    #[inline]
    fn from(b: BlankNode) -> Self {
        Self::Anonymous(b)
    }
}
impl From<Literal> for AnnotationValue {
    #[inline]
    fn from(l: Literal) -> Self {
        Self::Literal(l)
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(i) => Display::fmt(i, f),
            Self::Anonymous(b) => Display::fmt(b, f),
            Self::Literal(l) => Display::fmt(l, f),
        }
    }
}
debugdisplay!(AnnotationValue);

// An identifier sorts strictly before any non-identifier value.
impl Ord for AnnotationValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Iri(a), Self::Iri(b)) => a.cmp(b),
            (Self::Anonymous(a), Self::Anonymous(b)) => a.as_str().cmp(b.as_str()),
            (Self::Literal(a), Self::Literal(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
impl PartialOrd for AnnotationValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_sort_first() {
        let iri = AnnotationValue::from(Iri::new("zzz://last.example/ns#Z"));
        let blank = AnnotationValue::from(BlankNode::new("a1").unwrap());
        let lit = AnnotationValue::from(Literal::new_simple_literal("aaa"));
        assert!(iri < blank);
        assert!(iri < lit);
        assert!(blank < lit);

        let mut v = vec![lit.clone(), iri.clone(), blank.clone()];
        v.sort();
        assert_eq!(v, vec![iri, blank, lit]);
    }

    #[test]
    fn within_kind_ordering() {
        let a = AnnotationValue::from(Iri::new("http://ex#a"));
        let b = AnnotationValue::from(Iri::new("http://ex#b"));
        assert!(a < b);
        assert_eq!(a.as_iri().unwrap().fragment(), Some("a"));
    }
}
