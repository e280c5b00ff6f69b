//! Canonical primitives for the Caliper analytics data model.
//!
//! This crate owns everything that is fixed per data-model version and shared
//! by the entity/event model above it:
//! - the vocabulary registry (actions, entity/event types, LIS roles and status)
//! - validated identifier newtypes (IRIs, ISO-8601 instants and durations)
//! - the UUID collaborator used to mint event identifiers
//! - RFC 8785 canonical bytes for order-insensitive document comparison
//!
#![deny(missing_docs)]

/// Canonical JSON bytes for structural comparison.
pub mod canonicalizer;
/// Identifier generation and well-formedness checks.
pub mod ids;
/// Identifier newtypes (IRI, timestamp, duration).
pub mod identifiers;
/// Validation errors raised by identifier newtypes.
pub mod validation;
/// Static vocabulary tables and the registry facade.
pub mod vocabulary;

pub use canonicalizer::{CanonicalizationError, Canonicalizer};
pub use identifiers::{Iri, IsoDuration, Timestamp};
pub use ids::{generate_id, is_valid_id, IdGenerator, UuidGenerator, UuidVersion};
pub use validation::ValidationError;
pub use vocabulary::{
    lookup, Action, EntityType, EventType, Role, Status, Vocabulary, VocabularyError,
    CALIPER_CONTEXT,
};
