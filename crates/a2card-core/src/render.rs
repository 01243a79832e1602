//! Recursive renderer: component id -> card element.
//!
//! Rendering is depth-first and pre-order over `children`. Anything that
//! cannot be rendered yields `None` and is filtered out of its parent, so a
//! bad subtree never takes its siblings or ancestors down with it:
//!
//! - dangling id (no component declared)
//! - unknown component type
//! - back-edge to a component already on the current path (cycle)
//! - a component already rendered elsewhere in this call (shared reference)
//! - nesting deeper than `ConverterConfig::max_depth`
//!
//! Each component renders at most once per call, so the output never has
//! more elements than the graph has components.

use std::collections::HashSet;

use a2card_types::card::{
    ActionSet, CardElement, Column, ColumnSet, Container, Image, InputField, TextBlock,
};
use a2card_types::component::{Component, ComponentKind, InputKind};
use a2card_types::config::ConverterConfig;

use crate::graph::ComponentArena;

/// Per-call rendering state: the arena being read, the path from the root
/// to the component currently being rendered, and every component already
/// emitted.
pub struct Renderer<'a> {
    arena: &'a ComponentArena,
    config: &'a ConverterConfig,
    on_path: HashSet<usize>,
    rendered: HashSet<usize>,
    depth: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(arena: &'a ComponentArena, config: &'a ConverterConfig) -> Self {
        Self {
            arena,
            config,
            on_path: HashSet::new(),
            rendered: HashSet::new(),
            depth: 0,
        }
    }

    /// Render the component an id resolves to, or `None` if it produces
    /// nothing.
    pub fn render(&mut self, id: &str) -> Option<CardElement> {
        let arena = self.arena;
        let Some(position) = arena.position(id) else {
            tracing::debug!(id, "dropping reference to undeclared component");
            return None;
        };
        if self.on_path.contains(&position) {
            tracing::warn!(id, depth = self.depth, "dropping cyclic component reference");
            return None;
        }
        if self.rendered.contains(&position) {
            tracing::debug!(id, "dropping repeated reference to an already rendered component");
            return None;
        }
        if self.depth >= self.config.max_depth {
            tracing::warn!(
                id,
                max_depth = self.config.max_depth,
                "dropping component nested beyond max depth"
            );
            return None;
        }
        let component = arena.get(position)?;

        self.rendered.insert(position);
        self.on_path.insert(position);
        self.depth += 1;
        let element = self.render_component(component);
        self.depth -= 1;
        self.on_path.remove(&position);

        element
    }

    fn render_component(&mut self, component: &'a Component) -> Option<CardElement> {
        let element = match &component.kind {
            ComponentKind::Column => {
                CardElement::Container(Container::stack(self.render_children(component)))
            }
            ComponentKind::Row => CardElement::ColumnSet(ColumnSet {
                columns: component
                    .children
                    .iter()
                    .map(|child| Column::stretch(self.render(child).into_iter().collect()))
                    .collect(),
            }),
            ComponentKind::Card { title } => {
                let mut items = vec![CardElement::TextBlock(TextBlock::title(title.clone()))];
                items.extend(self.render_children(component));
                CardElement::Container(Container::emphasis(items))
            }
            ComponentKind::Text { text } => CardElement::TextBlock(TextBlock::plain(text.clone())),
            ComponentKind::Image { src, alt } => {
                let url = src
                    .clone()
                    .unwrap_or_else(|| self.config.fallback_image_url.clone());
                CardElement::Image(Image::centered(url, alt.clone()))
            }
            ComponentKind::Button { label, action } => {
                CardElement::ActionSet(ActionSet::submit(label.clone(), action.clone()))
            }
            ComponentKind::Input { input, placeholder } => {
                let field = InputField {
                    id: component.id.clone(),
                    placeholder: placeholder.clone(),
                };
                match input {
                    InputKind::Text => CardElement::InputText(field),
                    InputKind::Date => CardElement::InputDate(field),
                    InputKind::Time => CardElement::InputTime(field),
                    InputKind::Number => CardElement::InputNumber(field),
                }
            }
            ComponentKind::Unknown { tag } => {
                tracing::debug!(id = %component.id, tag = %tag, "dropping component of unknown type");
                return None;
            }
        };
        Some(element)
    }

    /// Render children in order, dropping those that produce nothing.
    fn render_children(&mut self, component: &'a Component) -> Vec<CardElement> {
        component
            .children
            .iter()
            .filter_map(|child| self.render(child))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
