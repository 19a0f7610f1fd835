use std::collections::BTreeSet;

use crate::{NamedNode, Quad, Term};

/// Selects [`Quad`]s from a [`Dataset`]. You can assign its fields directly,
/// but it is usually built incrementally with the `subject`, `predicate`,
/// `object` and `graph` methods.
///
/// A field that is `None` matches anything. In particular, a selector with
/// no graph matches statements in every graph, including the default one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuadSelector {
    /// The subject that selected quads must have
    pub subject: Option<Term>,
    /// The predicate that selected quads must use
    pub predicate: Option<NamedNode>,
    /// The object that selected quads must refer to
    pub object: Option<Term>,
    /// The named graph that selected quads must belong to
    pub graph: Option<NamedNode>,
}

impl QuadSelector {
    /// Set the subject field of the [`QuadSelector`]
    pub fn subject(mut self, subject: impl Into<Term>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the predicate field of the [`QuadSelector`]
    pub fn predicate(mut self, predicate: NamedNode) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Set the object field of the [`QuadSelector`]
    pub fn object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Set the graph field of the [`QuadSelector`]
    pub fn graph(mut self, graph: NamedNode) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Whether the given quad is selected.
    pub fn matches(&self, quad: &Quad) -> bool {
        self.subject.as_ref().is_none_or(|subject| *subject == quad.subject)
            && self
                .predicate
                .as_ref()
                .is_none_or(|predicate| *predicate == quad.predicate)
            && self.object.as_ref().is_none_or(|object| *object == quad.object)
            && self
                .graph
                .as_ref()
                .is_none_or(|graph| quad.graph.as_ref() == Some(graph))
    }
}

/// An in-memory set of [`Quad`]s.
///
/// Duplicate statements are stored once. Lookups are linear scans, which is
/// adequate for the handful of statements an access-control document holds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dataset {
    quads: BTreeSet<Quad>,
}

impl Dataset {
    /// Add a quad. Returns `false` if it was already present.
    pub fn insert(&mut self, quad: Quad) -> bool {
        self.quads.insert(quad)
    }

    /// Add a statement to the default graph.
    pub fn add(&mut self, subject: impl Into<Term>, predicate: NamedNode, object: impl Into<Term>) {
        self.insert(Quad::new(subject, predicate, object));
    }

    /// Number of quads held.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether the dataset holds no quads.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate over every quad.
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// Iterate over the quads selected by `selector`.
    pub fn match_quads<'a>(
        &'a self,
        selector: &'a QuadSelector,
    ) -> impl Iterator<Item = &'a Quad> + 'a {
        self.quads.iter().filter(move |quad| selector.matches(quad))
    }

    /// Count the quads selected by `selector`.
    pub fn count_quads(&self, selector: &QuadSelector) -> usize {
        self.match_quads(selector).count()
    }

    /// Whether at least one quad is selected by `selector`.
    pub fn has(&self, selector: &QuadSelector) -> bool {
        self.match_quads(selector).next().is_some()
    }

    /// The objects of every `subject predicate ?object` statement.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a NamedNode,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.quads
            .iter()
            .filter(move |quad| quad.subject == *subject && quad.predicate == *predicate)
            .map(|quad| &quad.object)
    }

    /// The subjects of every `?subject predicate object` statement.
    pub fn subjects<'a>(
        &'a self,
        predicate: &'a NamedNode,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.quads
            .iter()
            .filter(move |quad| quad.predicate == *predicate && quad.object == *object)
            .map(|quad| &quad.subject)
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        Self {
            quads: iter.into_iter().collect(),
        }
    }
}

impl Extend<Quad> for Dataset {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        self.quads.extend(iter);
    }
}

impl IntoIterator for Dataset {
    type Item = Quad;
    type IntoIter = std::collections::btree_set::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        Dataset, NamedNode, Quad, QuadSelector, Term,
        vocab::{acl, foaf},
    };

    fn rule(name: &str) -> Term {
        NamedNode::new(format!("https://ex.org/.acl#{name}")).into()
    }

    fn dataset() -> Dataset {
        let mut dataset = Dataset::default();
        dataset.add(rule("public"), acl::AGENT_CLASS, foaf::AGENT);
        dataset.add(rule("public"), acl::MODE, acl::READ);
        dataset.add(rule("owner"), acl::MODE, acl::READ);
        dataset.add(rule("owner"), acl::MODE, acl::WRITE);
        dataset.insert(
            Quad::new(rule("owner"), acl::AGENT, NamedNode::new("https://ex.org/alice"))
                .in_graph(NamedNode::new("https://ex.org/.acl")),
        );
        dataset
    }

    #[test]
    fn it_stores_duplicate_statements_once() {
        let mut dataset = dataset();
        let before = dataset.len();

        dataset.add(rule("public"), acl::MODE, acl::READ);

        assert_eq!(dataset.len(), before);
    }

    #[test]
    fn it_treats_unset_selector_fields_as_wildcards() {
        let dataset = dataset();

        assert_eq!(dataset.count_quads(&QuadSelector::default()), dataset.len());
        assert_eq!(
            dataset.count_quads(&QuadSelector::default().predicate(acl::MODE).object(acl::READ)),
            2
        );
        assert_eq!(dataset.count_quads(&QuadSelector::default().subject(rule("owner"))), 3);
    }

    #[test]
    fn it_restricts_to_a_graph_only_when_asked() {
        let dataset = dataset();
        let graph = NamedNode::new("https://ex.org/.acl");

        assert_eq!(dataset.count_quads(&QuadSelector::default().graph(graph)), 1);
        assert!(dataset.has(&QuadSelector::default().predicate(acl::AGENT)));
    }

    #[test]
    fn it_lists_objects_and_subjects() {
        let dataset = dataset();
        let owner = rule("owner");
        let read = Term::from(acl::READ);

        let modes: Vec<_> = dataset.objects(&owner, &acl::MODE).cloned().collect();
        assert_eq!(modes, vec![Term::from(acl::READ), Term::from(acl::WRITE)]);

        let readers = dataset.subjects(&acl::MODE, &read).count();
        assert_eq!(readers, 2);
    }

    #[test]
    fn it_finds_nothing_in_an_empty_dataset() {
        let dataset = Dataset::default();

        assert!(dataset.is_empty());
        assert_eq!(
            dataset.count_quads(&QuadSelector::default().subject(rule("public"))),
            0
        );
    }
}
