use ldp_rdf::{BlankNode, Literal, NamedNode, Quad, Term, vocab::ma};

/// Label of the subject used when metadata describes no particular resource.
pub const DEFAULT_METADATA_SUBJECT: &str = "representation";

/// Statements about a representation, all sharing one subject.
///
/// The content type is stored like any other statement, as `ma:format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentationMetadata {
    identifier: Term,
    properties: Vec<(NamedNode, Term)>,
}

impl Default for RepresentationMetadata {
    fn default() -> Self {
        Self {
            identifier: BlankNode::new(DEFAULT_METADATA_SUBJECT).into(),
            properties: Vec::new(),
        }
    }
}

impl RepresentationMetadata {
    /// Metadata for a representation of the given content type.
    pub fn new(content_type: &str) -> Self {
        let mut metadata = Self::default();
        metadata.set_content_type(content_type);
        metadata
    }

    /// The subject of every statement.
    pub fn identifier(&self) -> &Term {
        &self.identifier
    }

    /// The content type of the representation, if known.
    pub fn content_type(&self) -> Option<&str> {
        self.get(&ma::FORMAT).map(Term::value)
    }

    /// Replace the content type of the representation.
    pub fn set_content_type(&mut self, content_type: &str) {
        self.set(ma::FORMAT, Literal::string(content_type));
    }

    /// Add a statement. Existing statements with the same predicate are kept.
    pub fn add(&mut self, predicate: NamedNode, object: impl Into<Term>) {
        let object = object.into();
        if !self.properties.iter().any(|(p, o)| *p == predicate && *o == object) {
            self.properties.push((predicate, object));
        }
    }

    /// Replace every statement with the same predicate.
    pub fn set(&mut self, predicate: NamedNode, object: impl Into<Term>) {
        self.remove_all(&predicate);
        self.properties.push((predicate, object.into()));
    }

    /// Remove every statement with `predicate`.
    pub fn remove_all(&mut self, predicate: &NamedNode) {
        self.properties.retain(|(p, _)| p != predicate);
    }

    /// The first object stated for `predicate`.
    pub fn get(&self, predicate: &NamedNode) -> Option<&Term> {
        self.properties
            .iter()
            .find(|(p, _)| p == predicate)
            .map(|(_, object)| object)
    }

    /// Every object stated for `predicate`, in insertion order.
    pub fn get_all<'a>(&'a self, predicate: &NamedNode) -> impl Iterator<Item = &'a Term> {
        self.properties
            .iter()
            .filter(move |(p, _)| p == predicate)
            .map(|(_, object)| object)
    }

    /// Fold in the statements of `delta`.
    pub fn extend(&mut self, delta: MetadataDelta) {
        for (predicate, object) in delta {
            self.add(predicate, object);
        }
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether there are no statements at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The statements as quads.
    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        self.properties
            .iter()
            .map(|(predicate, object)| Quad::new(self.identifier.clone(), predicate.clone(), object.clone()))
    }
}

/// Statements to be added to some [`RepresentationMetadata`].
///
/// Collectors return one of these instead of changing the metadata they are
/// given; the caller decides whether to apply it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataDelta(Vec<(NamedNode, Term)>);

impl MetadataDelta {
    /// Add a statement.
    pub fn add(&mut self, predicate: NamedNode, object: impl Into<Term>) {
        self.0.push((predicate, object.into()));
    }

    /// Iterate over the statements.
    pub fn iter(&self) -> impl Iterator<Item = (&NamedNode, &Term)> {
        self.0.iter().map(|(predicate, object)| (predicate, object))
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the delta adds nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for MetadataDelta {
    type Item = (NamedNode, Term);
    type IntoIter = std::vec::IntoIter<(NamedNode, Term)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(NamedNode, Term)> for MetadataDelta {
    fn from_iter<T: IntoIterator<Item = (NamedNode, Term)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
