//! Shared domain types for a2card.
//!
//! This crate contains the wire types on both sides of the converter: the
//! platform-neutral component graph a model emits, and the Adaptive Card
//! presentation tree a messaging client renders. It also carries the chat
//! reply envelope, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, schemars, thiserror.

pub mod card;
pub mod component;
pub mod config;
pub mod error;
pub mod reply;
pub mod schema;
