//! Property-assertion axioms and their canonical form. An assertion over an
//! inverted property has exactly one simplified equivalent: the one using the
//! non-inverted property with subject and object swapped.

use crate::iris::macros::debugdisplay;
use crate::iris::Iri;
use oxrdf::BlankNode;
use std::fmt::Display;

/// An object property, possibly inverted. OWL 2 only inverts atomic
/// properties, so both variants carry a plain identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectPropertyExpression {
    Named(Iri),
    InverseOf(Iri),
}

impl ObjectPropertyExpression {
    #[inline]
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    #[must_use]
    pub const fn iri(&self) -> &Iri {
        match self {
            Self::Named(i) | Self::InverseOf(i) => i,
        }
    }

    /// The inverse expression; an involution.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Named(i) => Self::InverseOf(i),
            Self::InverseOf(i) => Self::Named(i),
        }
    }
}

impl Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(i) => f.write_str(&i.to_quoted_string()),
            Self::InverseOf(i) => write!(f, "ObjectInverseOf({})", i.to_quoted_string()),
        }
    }
}
debugdisplay!(ObjectPropertyExpression);

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    Named(Iri),
    Anonymous(BlankNode),
}

impl Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(i) => f.write_str(&i.to_quoted_string()),
            Self::Anonymous(b) => Display::fmt(b, f),
        }
    }
}
debugdisplay!(Individual);

/// `ObjectPropertyAssertion(P S O)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ObjectPropertyAssertion {
    pub property: ObjectPropertyExpression,
    pub subject: Individual,
    pub object: Individual,
}

impl ObjectPropertyAssertion {
    /// `true` iff the property is not an inverse expression. Always holds for
    /// the result of [`Self::simplified`].
    #[inline]
    #[must_use]
    pub const fn is_in_simplified_form(&self) -> bool {
        self.property.is_named()
    }

    /// The canonical equivalent: `Assertion(InverseOf(P), S, O)` becomes
    /// `Assertion(P, O, S)`; an already-simplified assertion maps to an equal
    /// value. Never mutates `self`.
    #[must_use]
    pub fn simplified(&self) -> Self {
        match &self.property {
            ObjectPropertyExpression::Named(_) => self.clone(),
            ObjectPropertyExpression::InverseOf(p) => Self {
                property: ObjectPropertyExpression::Named(p.clone()),
                subject: self.object.clone(),
                object: self.subject.clone(),
            },
        }
    }
}

impl Display for ObjectPropertyAssertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ObjectPropertyAssertion({} {} {})",
            self.property, self.subject, self.object
        )
    }
}
debugdisplay!(ObjectPropertyAssertion);

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(n: &str) -> Iri {
        Iri::new(format!("http://ex#{n}"))
    }

    fn assertion(inverted: bool) -> ObjectPropertyAssertion {
        let p = ObjectPropertyExpression::Named(iri("hasPart"));
        ObjectPropertyAssertion {
            property: if inverted { p.inverse() } else { p },
            subject: Individual::Named(iri("s")),
            object: Individual::Named(iri("o")),
        }
    }

    #[test]
    fn simplified_is_a_fixpoint() {
        for inverted in [false, true] {
            let a = assertion(inverted);
            assert!(a.simplified().is_in_simplified_form());
            assert_eq!(a.simplified().simplified(), a.simplified());
        }
    }

    #[test]
    fn already_simple_maps_to_an_equal_value() {
        let a = assertion(false);
        assert!(a.is_in_simplified_form());
        assert_eq!(a.simplified(), a);
    }

    #[test]
    fn inverted_swaps_subject_and_object() {
        let a = assertion(true);
        assert!(!a.is_in_simplified_form());
        let s = a.simplified();
        assert_eq!(s.property, ObjectPropertyExpression::Named(iri("hasPart")));
        assert_eq!(s.subject, Individual::Named(iri("o")));
        assert_eq!(s.object, Individual::Named(iri("s")));
        // the input is untouched
        assert_eq!(a, assertion(true));
    }

    #[test]
    fn inverse_is_an_involution() {
        let p = ObjectPropertyExpression::Named(iri("p"));
        assert_eq!(p.clone().inverse().inverse(), p);
    }

    #[test]
    fn functional_syntax_display() {
        assert_eq!(
            assertion(false).to_string(),
            "ObjectPropertyAssertion(<http://ex#hasPart> <http://ex#s> <http://ex#o>)"
        );
        assert_eq!(
            assertion(true).to_string(),
            "ObjectPropertyAssertion(ObjectInverseOf(<http://ex#hasPart>) <http://ex#s> <http://ex#o>)"
        );
    }
}
