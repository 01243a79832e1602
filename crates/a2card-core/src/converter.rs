//! Component graph -> Adaptive Card conversion.
//!
//! `convert` is total: every graph, however broken, produces a well-formed
//! card. Unresolvable or unsupported nodes are dropped individually.

use a2card_types::card::{AdaptiveCard, CardElement};
use a2card_types::component::ComponentGraph;
use a2card_types::config::ConverterConfig;

use crate::graph::ComponentArena;
use crate::render::Renderer;

/// Converts component graphs using a fixed configuration.
///
/// Holds no per-call state, so one converter can serve any number of
/// concurrent conversions.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter. A `max_depth` of zero is raised to one so the
    /// root itself can always render.
    pub fn new(mut config: ConverterConfig) -> Self {
        config.max_depth = config.max_depth.max(1);
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a graph into a card.
    ///
    /// The rendered root is unwrapped into the body: a container root
    /// contributes its items directly, any other element becomes a
    /// single-element body, and an unresolved root yields an empty body.
    pub fn convert(&self, graph: &ComponentGraph) -> AdaptiveCard {
        let _span = tracing::debug_span!(
            "convert",
            components = graph.components.len(),
            root = %graph.root_component_id
        )
        .entered();

        let arena = ComponentArena::build(graph);
        let root = Renderer::new(&arena, &self.config).render(arena.root_id());

        let body = match root {
            Some(CardElement::Container(container)) => container.items,
            Some(element) => vec![element],
            None => {
                tracing::debug!("root did not render, emitting empty card");
                Vec::new()
            }
        };

        let card = AdaptiveCard::new(body);
        tracing::debug!(
            body_len = card.body.len(),
            elements = card.element_count(),
            "conversion complete"
        );
        card
    }
}

/// Convert a graph with the default configuration.
pub fn convert(graph: &ComponentGraph) -> AdaptiveCard {
    Converter::default().convert(graph)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
