use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{NamedNode, Term};

/// A [`Quad`] is a semantic triple, optionally placed in a named graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quad {
    /// The subject of the statement
    pub subject: Term,
    /// The predicate of the statement
    pub predicate: NamedNode,
    /// The object of the statement
    pub object: Term,
    /// The named graph holding the statement, `None` for the default graph
    pub graph: Option<NamedNode>,
}

impl Quad {
    /// A statement in the default graph.
    pub fn new(subject: impl Into<Term>, predicate: NamedNode, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph: None,
        }
    }

    /// Move the statement into the given named graph.
    pub fn in_graph(self, graph: NamedNode) -> Self {
        Self {
            graph: Some(graph),
            ..self
        }
    }
}

impl Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.graph {
            Some(graph) => write!(
                f,
                "{} {} {} {} .",
                self.subject, self.predicate, self.object, graph
            ),
            None => write!(f, "{} {} {} .", self.subject, self.predicate, self.object),
        }
    }
}
