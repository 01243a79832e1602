//! Structural diagnostics for component graphs.
//!
//! Conversion silently drops whatever it cannot render. `inspect` reports the
//! same problems explicitly so generators and prompts can be debugged. Child
//! edges are modelled with `petgraph`; strongly connected components find
//! cycles and a BFS from the root finds unreachable components.

use std::collections::HashMap;

use a2card_types::component::ComponentGraph;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use serde::Serialize;

use crate::graph::ComponentArena;

/// A `children` entry naming an id that no component declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub parent: String,
    pub child: String,
}

/// A component whose type tag the renderer does not support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownComponent {
    pub id: String,
    pub tag: String,
}

/// Everything conversion would silently drop or truncate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    pub component_count: usize,
    pub root_resolved: bool,
    pub duplicate_ids: Vec<String>,
    pub dangling_references: Vec<DanglingReference>,
    pub unknown_components: Vec<UnknownComponent>,
    /// Resolvable components no path from the root reaches.
    pub unreachable: Vec<String>,
    /// Each entry is one cycle's member ids, sorted.
    pub cycles: Vec<Vec<String>>,
}

impl GraphReport {
    /// True when conversion would render every declared component.
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    pub fn issue_count(&self) -> usize {
        usize::from(!self.root_resolved)
            + self.duplicate_ids.len()
            + self.dangling_references.len()
            + self.unknown_components.len()
            + self.unreachable.len()
            + self.cycles.len()
    }
}

/// Inspect a graph without rendering it.
pub fn inspect(graph: &ComponentGraph) -> GraphReport {
    let arena = ComponentArena::build(graph);

    let mut edges: DiGraph<&str, ()> = DiGraph::new();
    let mut nodes: HashMap<usize, NodeIndex> = HashMap::new();
    for (position, component) in arena.resolvable() {
        nodes.insert(position, edges.add_node(component.id.as_str()));
    }

    let mut dangling_references = Vec::new();
    let mut unknown_components = Vec::new();
    for (position, component) in arena.resolvable() {
        if !component.kind.is_known() {
            unknown_components.push(UnknownComponent {
                id: component.id.clone(),
                tag: component.tag.clone(),
            });
        }
        for child in &component.children {
            match arena.position(child) {
                Some(child_position) => {
                    edges.update_edge(nodes[&position], nodes[&child_position], ());
                }
                None => dangling_references.push(DanglingReference {
                    parent: component.id.clone(),
                    child: child.clone(),
                }),
            }
        }
    }

    let root = arena.position(arena.root_id()).map(|p| nodes[&p]);
    let mut reached = vec![false; edges.node_count()];
    if let Some(root) = root {
        let mut bfs = Bfs::new(&edges, root);
        while let Some(node) = bfs.next(&edges) {
            reached[node.index()] = true;
        }
    }
    let unreachable = edges
        .node_indices()
        .filter(|n| !reached[n.index()])
        .map(|n| edges[n].to_string())
        .collect();

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&edges)
        .into_iter()
        .filter(|scc| scc.len() > 1 || edges.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut ids: Vec<String> = scc.into_iter().map(|n| edges[n].to_string()).collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();

    let report = GraphReport {
        component_count: arena.len(),
        root_resolved: root.is_some(),
        duplicate_ids: arena.duplicate_ids(),
        dangling_references,
        unknown_components,
        unreachable,
        cycles,
    };
    tracing::debug!(issues = report.issue_count(), "graph inspected");
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
