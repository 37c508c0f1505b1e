use std::error::Error;
use std::fmt::Display;

#[derive(Debug)]
pub enum IriError {
    /// The identifier text is not syntactically a URI.
    Url(url::ParseError),
    /// The identifier text is not a valid RDF term.
    Term(oxrdf::IriParseError),
    /// Both parts of a two-part construction were absent.
    EmptyIri,
    /// A relative reference was resolved against a non-hierarchical base.
    OpaqueBase { original: String },
    /// A filesystem path that cannot be represented as a `file:` URL.
    InvalidFilePath,
}

impl From<url::ParseError> for IriError {
    #[inline]
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}
impl From<oxrdf::IriParseError> for IriError {
    #[inline]
    fn from(e: oxrdf::IriParseError) -> Self {
        Self::Term(e)
    }
}

impl Display for IriError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(e) => {
                write!(f, "not a valid URI: {e}")
            }
            Self::Term(e) => {
                write!(f, "not a valid RDF term: {e}")
            }
            Self::EmptyIri => {
                write!(f, "an identifier needs at least one of prefix and suffix")
            }
            Self::OpaqueBase { original } => {
                write!(f, "cannot resolve {original} against an opaque base")
            }
            Self::InvalidFilePath => {
                write!(f, "path cannot be expressed as a file URL")
            }
        }
    }
}

impl Error for IriError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Url(e) => Some(e),
            Self::Term(e) => Some(e),
            _ => None,
        }
    }
}
