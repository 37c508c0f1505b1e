//! The immutable outcome of a document-loading pass: how many triples were
//! seen, how well-formed the ontology header was, and which triples could not
//! be mapped to ontology constructs. Built once by a parser, read-only after.

use crate::rdf::Triple;
use howlite_utils::prelude::HSet;
use std::fmt::Display;

/// How well-formed the document's top-level ontology declarations were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OntologyHeaderStatus {
    ParsedZeroHeaders,
    ParsedOneHeader,
    ParsedMultipleHeaders,
}

impl Display for OntologyHeaderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ParsedZeroHeaders => "no ontology header",
            Self::ParsedOneHeader => "one ontology header",
            Self::ParsedMultipleHeaders => "multiple ontology headers",
        })
    }
}

/// Snapshot of a completed load attempt.
#[derive(Debug, Clone)]
pub struct LoadMetaData {
    triple_count: usize,
    header_status: OntologyHeaderStatus,
    unparsed_triples: HSet<Triple>,
}

impl LoadMetaData {
    /// Takes ownership of the unparsed-triple set; whatever the caller does
    /// with its own data afterwards cannot be observed through the record.
    /// Callers must pass a subset of the counted triples.
    #[must_use]
    pub fn new(
        header_status: OntologyHeaderStatus,
        triple_count: usize,
        unparsed_triples: HSet<Triple>,
    ) -> Self {
        if unparsed_triples.len() > triple_count {
            tracing::warn!(
                unparsed = unparsed_triples.len(),
                total = triple_count,
                "more unparsed triples than triples seen"
            );
        }
        tracing::debug!(
            triples = triple_count,
            unparsed = unparsed_triples.len(),
            status = %header_status,
            "recorded load outcome"
        );
        Self {
            triple_count,
            header_status,
            unparsed_triples,
        }
    }

    #[inline]
    #[must_use]
    pub const fn triple_count(&self) -> usize {
        self.triple_count
    }

    #[inline]
    #[must_use]
    pub const fn header_status(&self) -> OntologyHeaderStatus {
        self.header_status
    }

    /// The triples that could not be mapped to ontology constructs, as an
    /// independent copy on every call.
    #[must_use]
    pub fn unparsed_triples(&self) -> HSet<Triple> {
        self.unparsed_triples.clone()
    }
}
