//! Component graph resolution and Adaptive Card rendering for a2card.
//!
//! - `graph` -- id-indexed arena built once per conversion
//! - `render` -- recursive per-type renderer with cycle and depth guards
//! - `converter` -- the `convert` entry point and envelope assembly
//! - `inspect` -- structural diagnostics over a graph, without rendering
//! - `reply` -- turning a model reply into an outgoing chat message
//!
//! Pure and synchronous: no I/O, no state kept between calls.

pub mod converter;
pub mod graph;
pub mod inspect;
pub mod render;
pub mod reply;

pub use converter::{Converter, convert};
