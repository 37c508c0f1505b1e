/*! # Resource identifiers
 *
 * [`Iri`] is the universal identifier currency of the toolkit: ontology
 * names, entity names, document locations. An identifier is immutable and is
 * split exactly once, at construction, into a namespace-like `prefix` and an
 * optional trailing name fragment (`remainder`); its textual form is always
 * the concatenation of the two. Prefixes are shared through a process-wide
 * weakly-held pool, so ten thousand identifiers in the same namespace carry
 * one prefix allocation between them.
 */

#![allow(unused_macros)]
#![allow(unused_imports)]

mod errors;
mod ncname;
pub mod terms;

pub use errors::IriError;

use crate::rdf::ontologies::{owl, rdf, rdfs, xsd};
use const_format::concatcp;
use howlite_utils::gc::WeakInterner;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::convert::Infallible;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash, Hasher};
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

pub(crate) mod macros {
    macro_rules! debugdisplay {
        ($s:ty) => {
            impl std::fmt::Debug for $s {
                #[inline]
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(self, f)
                }
            }
        };
    }
    macro_rules! serialize {
        (DE $s:ty) => {
            serialize!($s);
            impl<'de> serde::Deserialize<'de> for $s {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        };
        ($s:ty) => {
            impl serde::Serialize for $s {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        };
    }
    pub(crate) use {debugdisplay, serialize};
}
pub(crate) use macros::debugdisplay;
#[cfg(feature = "serde")]
pub(crate) use macros::serialize;

lazy_static! {
    static ref PREFIXES: triomphe::Arc<Mutex<WeakInterner<str, 4, 10_000>>> =
        triomphe::Arc::new(Mutex::new(WeakInterner::default()));
}

/// An immutable resource identifier.
pub struct Iri {
    prefix: std::sync::Arc<str>,
    remainder: Option<Box<str>>,
    // 0 = not yet computed; recomputation is idempotent, so a racing first
    // read at worst stores the same value twice
    hash: AtomicU64,
}

impl Iri {
    fn make(prefix: &str, remainder: Option<&str>) -> Self {
        Self {
            prefix: PREFIXES.lock().get_or_intern(prefix),
            remainder: remainder.map(Into::into),
            hash: AtomicU64::new(0),
        }
    }

    /// Splits `s` at the last well-formed name-fragment boundary; if there is
    /// none, the whole string becomes the prefix.
    pub fn new(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();
        ncname::suffix_index(s).map_or_else(
            || Self::make(s, None),
            |i| Self::make(&s[..i], Some(&s[i..])),
        )
    }

    /// Builds an identifier whose text is `prefix ⧺ suffix`. Either part may
    /// be absent, in which case the other is the entire identifier; both
    /// absent is a precondition violation. A caller-supplied split is kept
    /// only when it already lies on a valid fragment boundary; otherwise the
    /// parts are concatenated and re-split from scratch.
    pub fn from_parts(prefix: Option<&str>, suffix: Option<&str>) -> Result<Self, IriError> {
        match (prefix, suffix) {
            (None, None) => Err(IriError::EmptyIri),
            (None, Some(s)) => Ok(Self::new(s)),
            (Some(p), None) => Ok(Self::new(p)),
            (Some(p), Some(s)) => {
                if ncname::boundary_index(p).is_none() && ncname::boundary_index(s) == Some(0) {
                    Ok(Self::make(p, Some(s)))
                } else {
                    let mut full = String::with_capacity(p.len() + s.len());
                    full.push_str(p);
                    full.push_str(s);
                    Ok(Self::new(full))
                }
            }
        }
    }

    /// Wraps a filesystem path as a `file:` identifier.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IriError> {
        Url::from_file_path(path)
            .map_err(|()| IriError::InvalidFilePath)
            .map(Into::into)
    }

    /// The full text reparsed as a URI; fails if it is not syntactically one.
    pub fn to_uri(&self) -> Result<Url, IriError> {
        self.remainder.as_deref().map_or_else(
            || Url::parse(&self.prefix),
            |_| Url::parse(&self.to_string()),
        )
        .map_err(IriError::from)
    }

    /// The full text as an RDF named node.
    pub fn to_named_node(&self) -> Result<oxrdf::NamedNode, IriError> {
        oxrdf::NamedNode::new(self.to_string()).map_err(IriError::from)
    }

    /// `true` iff the prefix carries a scheme: a colon preceded only by
    /// letters, digits, `.`, `+` or `-`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        let Some(colon) = self.prefix.find(':') else {
            return false;
        };
        self.prefix[..colon]
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '+' || c == '-')
    }

    /// The scheme part of the prefix, e.g. `http` or `urn`.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.prefix.find(':').map(|i| &self.prefix[..i])
    }

    /// The namespace prefix; the whole identifier if there is no remainder.
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.prefix
    }

    /// The trailing name fragment, if the identifier has one.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.remainder.as_deref()
    }

    /// Resolves `s` against this identifier: an absolute or opaque reference
    /// is wrapped directly, a relative one is resolved per RFC 3986.
    pub fn resolve(&self, s: &str) -> Result<Self, IriError> {
        match Url::parse(s) {
            Ok(url) => Ok(url.into()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.to_uri()?;
                if base.cannot_be_a_base() {
                    return Err(IriError::OpaqueBase {
                        original: s.to_string(),
                    });
                }
                Ok(base.join(s)?.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `true` iff the prefix lies in one of the rdf, rdfs, xsd or owl
    /// namespaces.
    #[must_use]
    pub fn is_reserved_vocabulary(&self) -> bool {
        self.prefix.starts_with(owl::NS)
            || self.prefix.starts_with(rdf::NS)
            || self.prefix.starts_with(rdfs::NS)
            || self.prefix.starts_with(xsd::NS)
    }

    /// `true` iff this is the identifier `owl:Thing` is named with.
    #[must_use]
    pub fn is_thing(&self) -> bool {
        self.remainder.as_deref() == Some("Thing") && &*self.prefix == owl::NS
    }

    /// `true` iff this is the identifier `owl:Nothing` is named with.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.remainder.as_deref() == Some("Nothing") && &*self.prefix == owl::NS
    }

    /// `true` iff this is the identifier `rdf:PlainLiteral` is named with.
    #[must_use]
    pub fn is_plain_literal(&self) -> bool {
        self.remainder.as_deref() == Some("PlainLiteral") && &*self.prefix == rdf::NS
    }

    /// The full text wrapped in angle brackets, for serialization.
    #[must_use]
    pub fn to_quoted_string(&self) -> String {
        format!("<{self}>")
    }

    /// Byte length of the logical concatenation; [`Self::char_len`] counts
    /// characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefix.len() + self.remainder.as_deref().map_or(0, str::len)
    }

    /// Character count of the logical concatenation. This is the exclusive
    /// upper bound on [`Self::char_at`] indices, and at most [`Self::len`].
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.remainder.is_none()
    }

    /// Characters of the logical concatenation, without materializing it.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.prefix
            .chars()
            .chain(self.remainder.as_deref().unwrap_or("").chars())
    }

    /// The `index`-th character of the logical concatenation. Indices count
    /// characters, not bytes.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }

    /// A materialized byte-range slice of the full text; `None` if the range
    /// is out of bounds or not on character boundaries.
    #[must_use]
    pub fn subsequence(&self, range: Range<usize>) -> Option<String> {
        self.to_string().get(range).map(ToOwned::to_owned)
    }

    /// An auto-generated ontology document identifier, unique within this
    /// process run.
    #[must_use]
    pub fn generate_document_iri() -> Self {
        DOCUMENT_IRIS.next_iri()
    }

    fn precomputed_hash(&self) -> u64 {
        let mut h = self.hash.load(Ordering::Relaxed);
        if h == 0 {
            h = rustc_hash::FxBuildHasher
                .hash_one(&*self.prefix)
                .wrapping_add(
                    self.remainder
                        .as_deref()
                        .map_or(0, |r| rustc_hash::FxBuildHasher.hash_one(r)),
                );
            if h == 0 {
                h = 1;
            }
            self.hash.store(h, Ordering::Relaxed);
        }
        h
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)?;
        if let Some(r) = self.remainder.as_deref() {
            f.write_str(r)?;
        }
        Ok(())
    }
}
debugdisplay!(Iri);

impl Clone for Iri {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            remainder: self.remainder.clone(),
            hash: AtomicU64::new(self.hash.load(Ordering::Relaxed)),
        }
    }
}

// Equality is defined on string content, never on pool identity: two equal
// prefixes may be backed by distinct allocations across a pool eviction.
impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        match (self.remainder.as_deref(), other.remainder.as_deref()) {
            (None, None) => self.prefix == other.prefix,
            (Some(a), Some(b)) => a == b && self.prefix == other.prefix,
            _ => false,
        }
    }
}
impl Eq for Iri {}

impl Hash for Iri {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.precomputed_hash());
    }
}

impl Ord for Iri {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.prefix.cmp(&other.prefix) {
            std::cmp::Ordering::Equal => {
                match (self.remainder.as_deref(), other.remainder.as_deref()) {
                    (None, None) => std::cmp::Ordering::Equal,
                    (None, Some(_)) => std::cmp::Ordering::Less,
                    (Some(_), None) => std::cmp::Ordering::Greater,
                    (Some(a), Some(b)) => a.cmp(b),
                }
            }
            o => o,
        }
    }
}
impl PartialOrd for Iri {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Iri {
    type Err = Infallible;
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<Url> for Iri {
    #[inline]
    fn from(url: Url) -> Self {
        Self::new(url.as_str())
    }
}

/// Scheme of auto-generated document identifiers.
pub const DOCUMENT_SCHEME: &str = "howlite";
const DOCUMENT_PREFIX: &str = concatcp!(DOCUMENT_SCHEME, ":ontology");

/// Source of auto-generated ontology document identifiers. Holds an atomic
/// counter, so concurrent callers always draw distinct values; the default
/// instance seeds the counter from a wall-clock reading so that consecutive
/// process runs are unlikely to collide.
pub struct DocumentIriGenerator {
    counter: AtomicU64,
}

impl DocumentIriGenerator {
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }

    #[must_use]
    pub fn next_iri(&self) -> Iri {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Iri::new(format!("{DOCUMENT_PREFIX}{n}"))
    }
}

impl Default for DocumentIriGenerator {
    fn default() -> Self {
        let seed = chrono::Utc::now()
            .timestamp_nanos_opt()
            .and_then(|t| u64::try_from(t).ok())
            .unwrap_or(1);
        Self::with_seed(seed)
    }
}

lazy_static! {
    static ref DOCUMENT_IRIS: DocumentIriGenerator = DocumentIriGenerator::default();
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{serialize, Iri};
    serialize!(DE Iri);
}
