//! A deliberately small RDF model: just enough to describe access rules and
//! protocol metadata.
//!
//! ```
//! use ldp_rdf::{Dataset, NamedNode, QuadSelector, Term, vocab::{acl, foaf}};
//!
//! let rule = Term::from(NamedNode::new("https://ex.org/.acl#public"));
//!
//! let mut rules = Dataset::default();
//! rules.add(rule.clone(), acl::AGENT_CLASS, foaf::AGENT);
//!
//! let selector = QuadSelector::default()
//!     .subject(rule)
//!     .predicate(acl::AGENT_CLASS)
//!     .object(foaf::AGENT);
//!
//! assert_eq!(rules.count_quads(&selector), 1);
//! ```
//!
//! Parsing and serializing RDF documents is left to other crates; a
//! [`Dataset`] is always built in memory from [`Quad`]s.

mod error;
pub use error::*;

mod term;
pub use term::*;

mod quad;
pub use quad::*;

mod dataset;
pub use dataset::*;

pub mod vocab;
