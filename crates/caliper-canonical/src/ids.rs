//! Event identifier generation.
//!
//! Events that arrive without an identifier get a `urn:uuid:` IRI minted by
//! an [`IdGenerator`]. The generator is injected so tests can supply a
//! deterministic sequence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UUID flavour used when minting identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Random.
    #[default]
    V4,
    /// Time-ordered.
    V7,
}

/// Source of fresh node identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a new, globally unique IRI.
    fn generate_id(&self) -> String;
}

/// [`IdGenerator`] backed by the `uuid` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator {
    version: UuidVersion,
}

impl UuidGenerator {
    /// Creates a generator for the given UUID version.
    pub fn new(version: UuidVersion) -> Self {
        Self { version }
    }

    /// Version this generator mints.
    pub fn version(&self) -> UuidVersion {
        self.version
    }
}

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        generate_id(self.version)
    }
}

/// Mints a `urn:uuid:` IRI of the requested version.
pub fn generate_id(version: UuidVersion) -> String {
    let uuid = match version {
        UuidVersion::V4 => Uuid::new_v4(),
        UuidVersion::V7 => Uuid::now_v7(),
    };
    format!("urn:uuid:{}", uuid.hyphenated())
}

/// Returns true when `value` is a UUID, bare or in `urn:uuid:` form.
pub fn is_valid_id(value: &str) -> bool {
    let bare = value.strip_prefix("urn:uuid:").unwrap_or(value);
    Uuid::parse_str(bare).is_ok()
}
