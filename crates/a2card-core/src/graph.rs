//! Id-indexed component arena.
//!
//! Components are decoded into a `Vec` in input order and an index maps each
//! id to its position. Rendering follows positions, never references, so an
//! arena is cheap to build per call and safe to share across threads.

use std::collections::HashMap;

use a2card_types::component::{Component, ComponentGraph};

/// Decoded components plus an id -> position index.
#[derive(Debug, Clone)]
pub struct ComponentArena {
    components: Vec<Component>,
    index: HashMap<String, usize>,
    root_id: String,
}

impl ComponentArena {
    /// Decode every component and index it by id in a single pass.
    ///
    /// On duplicate ids the later component shadows the earlier one; the
    /// shadowed entry stays in the arena but can no longer be resolved.
    pub fn build(graph: &ComponentGraph) -> Self {
        let components: Vec<Component> = graph.components.iter().map(Component::from).collect();
        let index = components
            .iter()
            .enumerate()
            .map(|(position, c)| (c.id.clone(), position))
            .collect();

        Self {
            components,
            index,
            root_id: graph.root_component_id.clone(),
        }
    }

    /// Position of the component an id resolves to.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, position: usize) -> Option<&Component> {
        self.components.get(position)
    }

    /// Resolve an id to its (last-declared) component.
    pub fn resolve(&self, id: &str) -> Option<&Component> {
        self.position(id).and_then(|p| self.get(p))
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn root(&self) -> Option<&Component> {
        self.resolve(&self.root_id)
    }

    /// Components that win their id, in input order.
    pub fn resolvable(&self) -> impl Iterator<Item = (usize, &Component)> {
        self.components
            .iter()
            .enumerate()
            .filter(|(position, c)| self.index.get(&c.id) == Some(position))
    }

    /// Ids declared more than once, in order of first declaration.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for c in &self.components {
            let count = counts.entry(c.id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(c.id.clone());
            }
        }
        order
    }

    /// Number of declared components, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use a2card_types::component::{ComponentKind, RawComponent};
    use serde_json::json;

    fn text(id: &str, value: &str) -> RawComponent {
        RawComponent::new(id, "Text").with_properties(json!({ "text": value }))
    }

    #[test]
    fn test_build_indexes_every_component() {
        let graph = ComponentGraph::new(
            vec![
                RawComponent::new("root", "Column").with_children(["a", "b"]),
                text("a", "first"),
                text("b", "second"),
            ],
            "root",
        );
        let arena = ComponentArena::build(&graph);

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.root().unwrap().id, "root");
        assert_eq!(arena.position("b"), Some(2));
        assert_eq!(
            arena.resolve("a").unwrap().kind,
            ComponentKind::Text {
                text: "first".to_string()
            }
        );
    }

    #[test]
    fn test_missing_ids_resolve_to_none() {
        let arena = ComponentArena::build(&ComponentGraph::new(vec![text("a", "x")], "nope"));
        assert!(arena.root().is_none());
        assert!(arena.resolve("ghost").is_none());
        assert!(arena.get(99).is_none());
    }

    #[test]
    fn test_empty_graph() {
        let arena = ComponentArena::build(&ComponentGraph::default());
        assert!(arena.is_empty());
        assert!(arena.root().is_none());
        assert!(arena.duplicate_ids().is_empty());
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let graph = ComponentGraph::new(
            vec![text("dup", "old"), text("other", "x"), text("dup", "new")],
            "dup",
        );
        let arena = ComponentArena::build(&graph);

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.position("dup"), Some(2));
        assert_eq!(
            arena.root().unwrap().kind,
            ComponentKind::Text {
                text: "new".to_string()
            }
        );
        assert_eq!(arena.duplicate_ids(), vec!["dup".to_string()]);

        let winners: Vec<usize> = arena.resolvable().map(|(p, _)| p).collect();
        assert_eq!(winners, vec![1, 2]);
    }

    #[test]
    fn test_build_does_not_touch_input() {
        let graph = ComponentGraph::new(vec![text("a", "x"), text("a", "y")], "a");
        let before = graph.clone();
        let _ = ComponentArena::build(&graph);
        assert_eq!(graph, before);
    }
}
