/*! Identifier and provenance layer of the howlite ontology toolkit.
 *
 * The universal identifier currency is [`iris::Iri`], an immutable resource
 * identifier split once at construction into an interned namespace prefix and
 * an optional name fragment. [`loading`] records the outcome of a document
 * loading pass, [`provenance`] ties axioms to the ontology they were read
 * from, and [`assertions`] carries the canonical form of property assertions.
 */

pub mod assertions;
pub mod iris;
pub mod loading;
pub mod provenance;
pub mod rdf;

pub use iris::{DocumentIriGenerator, Iri, IriError};
