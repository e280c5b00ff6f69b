//! Envelope building and delivery for Caliper sensors.
//!
//! This crate provides:
//! - [`SensorConfig`]: sensor id, data version and id scheme, loadable from TOML
//! - [`Sensor`]: wraps serialized nodes into an [`Envelope`]
//! - [`Transport`]: the success/failure seam envelopes are handed to
//!
//! ## Quick Start
//!
//! ```rust
//! use caliper_canonical::{EntityType, Iri, Timestamp};
//! use caliper_core::Entity;
//! use caliper_sensor::{Envelope, Sensor, SensorConfig};
//!
//! let config: SensorConfig = r#"sensor_id = "https://example.edu/sensors/1""#.parse()?;
//! let sensor = Sensor::new(config)?;
//!
//! let person = Entity::of_kind(EntityType::Person, Iri::parse("https://example.edu/users/554433")?);
//! let envelope = sensor.create_envelope(Timestamp::parse("2016-11-15T11:05:01.000Z")?, person.clone())?;
//! assert_eq!(envelope.data.len(), 1);
//!
//! // Any `Transport` works here; a `Vec` just collects.
//! let mut sent: Vec<Envelope> = Vec::new();
//! sensor.send(&mut sent, Timestamp::now(), person)?;
//! assert_eq!(sent.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Sensor configuration.
pub mod config;
/// Envelope record and builder.
pub mod envelope;
/// Error types for sensor operations.
pub mod errors;
/// Transport seam.
pub mod transport;

pub use config::SensorConfig;
pub use envelope::{Envelope, Sensor};
pub use errors::{ConfigError, SensorError, TransportError};
pub use transport::Transport;
