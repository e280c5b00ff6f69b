//! Typed entity and event model for Caliper learning-analytics telemetry.
//!
//! This crate provides:
//! - Entities: one variant per kind, each with a fixed attribute set
//! - Events: one record per interaction, with per-kind allowed actions
//! - The factory that builds either from a property bag
//! - The serializer that emits the canonical JSON-LD form
//!
//! Core invariants:
//! - A node's `@type` is fixed by its kind and cannot be set independently
//! - Output member order is declared per kind, never taken from input order
//! - Each relationship field either embeds or references, fixed per field
//! - Construction and serialization are pure; no shared mutable state
//!
#![deny(missing_docs)]

/// Entity kinds and their attributes.
pub mod entities;
/// Error types for core operations.
pub mod errors;
/// Event record, builder and allowed action sets.
pub mod events;
/// Property bag construction of typed nodes.
pub mod factory;
/// Node contract and per-field codecs.
pub mod node;
/// Top-level node wrapper.
pub mod payload;
/// JSON-LD serialization and parsing.
pub mod serializer;

pub use entities::{Entity, Link, Props};
pub use errors::CoreError;
pub use events::{allowed_actions, is_allowed, Event, EventBuilder};
pub use factory::Factory;
pub use node::{Node, Policy, PropertyBag};
pub use payload::Payload;
pub use serializer::Serializer;
