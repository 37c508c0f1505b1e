pub use oxrdf::{
    BlankNode, GraphName, GraphNameRef, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject,
    SubjectRef, Term as RDFTerm, TermRef as RDFTermRef, Triple, TripleRef,
};

pub mod ontologies {
    //! The well-known namespaces this layer needs: the W3C reserved
    //! vocabularies and the handful of `owl:` terms with dedicated checks.

    macro_rules! dict {
        ($name:ident = $uri:literal: $($i:ident = $l:literal;)*) => {
            pub mod $name {
                #![doc=concat!("`",$uri,"`")]
                use oxrdf::NamedNodeRef;
                #[doc=concat!("`",$uri,"`")]
                pub const NS: &str = concat!($uri, "#");
                $(
                    #[doc=concat!("`",$uri,"#",$l,"`")]
                    pub const $i: NamedNodeRef<'static> =
                        NamedNodeRef::new_unchecked(concat!($uri, "#", $l));
                )*
            }
        };
    }

    dict! { owl = "http://www.w3.org/2002/07/owl":
        THING = "Thing";
        NOTHING = "Nothing";
        OBJECT_PROPERTY = "ObjectProperty";
        INVERSE_OF = "inverseOf";
        ONTOLOGY = "Ontology";
    }

    pub mod rdf {
        //! `http://www.w3.org/1999/02/22-rdf-syntax-ns#`
        pub use oxrdf::vocab::rdf::*;
        pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
        /// `rdf:PlainLiteral`
        pub const PLAIN_LITERAL: oxrdf::NamedNodeRef<'static> = oxrdf::NamedNodeRef::new_unchecked(
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral",
        );
    }
    pub mod rdfs {
        //! `http://www.w3.org/2000/01/rdf-schema#`
        pub use oxrdf::vocab::rdfs::*;
        pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    }
    pub mod xsd {
        //! `http://www.w3.org/2001/XMLSchema#`
        pub use oxrdf::vocab::xsd::*;
        pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    }
}
