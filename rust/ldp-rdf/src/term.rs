//! RDF term types.
//!
//! [`NamedNode`]s are IRIs, [`BlankNode`]s are document-local nodes and
//! [`Literal`]s are typed values. A [`Term`] is any one of them.

use std::{borrow::Cow, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{RdfError, vocab::xsd};

/// An IRI naming a resource or a vocabulary term.
///
/// Vocabulary terms are `const` values built with [`NamedNode::from_static`];
/// IRIs that arrive at runtime are owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedNode(Cow<'static, str>);

impl NamedNode {
    /// Wrap a static IRI. No validation takes place.
    pub const fn from_static(iri: &'static str) -> Self {
        Self(Cow::Borrowed(iri))
    }

    /// Wrap the given IRI. No validation takes place.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(Cow::Owned(iri.into()))
    }

    /// Wrap the given IRI after checking that it is absolute.
    pub fn parse(iri: &str) -> Result<Self, RdfError> {
        url::Url::parse(iri).map_err(|error| RdfError::InvalidIri {
            iri: iri.to_owned(),
            reason: error.to_string(),
        })?;
        Ok(Self::new(iri))
    }

    /// The IRI as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&url::Url> for NamedNode {
    fn from(value: &url::Url) -> Self {
        Self::new(value.as_str())
    }
}

impl Display for NamedNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A node without a global name, identified only within one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankNode(String);

impl BlankNode {
    /// Create a blank node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label of this node.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A typed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    value: String,
    datatype: NamedNode,
}

impl Literal {
    /// A literal with an explicit datatype.
    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self {
            value: value.into(),
            datatype,
        }
    }

    /// An `xsd:string` literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new_typed(value, xsd::STRING)
    }

    /// An `xsd:integer` literal.
    pub fn integer(value: i64) -> Self {
        Self::new_typed(value.to_string(), xsd::INTEGER)
    }

    /// The lexical form of the literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI of the literal.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The numeric value, if this is a well-formed `xsd:integer`.
    pub fn as_integer(&self) -> Option<i64> {
        if self.datatype != xsd::INTEGER {
            return None;
        }
        self.value.parse().ok()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"^^{}", self.value, self.datatype)
    }
}

/// Any RDF term that may appear as the subject or object of a [`Quad`](crate::Quad).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "termType", content = "value")]
pub enum Term {
    /// An IRI
    NamedNode(NamedNode),
    /// A blank node
    BlankNode(BlankNode),
    /// A literal
    Literal(Literal),
}

impl Term {
    /// The IRI of this term, when it is a named node.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(node) => Some(node),
            _ => None,
        }
    }

    /// The literal of this term, when it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// The raw value of the term: the IRI, the blank node label or the
    /// lexical form of the literal.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(node) => node.as_str(),
            Term::BlankNode(node) => node.as_str(),
            Term::Literal(literal) => literal.value(),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(value: NamedNode) -> Self {
        Term::NamedNode(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl PartialEq<NamedNode> for Term {
    fn eq(&self, other: &NamedNode) -> bool {
        self.as_named_node() == Some(other)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::NamedNode(node) => node.fmt(f),
            Term::BlankNode(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}
