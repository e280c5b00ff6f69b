//! Sensor settings and their TOML form.
//!
//! ```toml
//! sensor_id = "https://example.edu/sensors/1"
//! data_version = "http://purl.imsglobal.org/ctx/caliper/v1p1"
//! uuid_version = "v7"
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use caliper_canonical::{Iri, UuidVersion, CALIPER_CONTEXT};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Sensor id used when none is configured.
pub const DEFAULT_SENSOR_ID: &str = "https://example.org/caliper/sensor/1";

/// Immutable inputs read at envelope-build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensorConfig {
    /// IRI identifying the emitting sensor.
    pub sensor_id: String,
    /// Context IRI stamped as the envelope's `dataVersion`.
    pub data_version: String,
    /// Scheme used to mint event ids.
    pub uuid_version: UuidVersion,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            sensor_id: DEFAULT_SENSOR_ID.to_string(),
            data_version: CALIPER_CONTEXT.to_string(),
            uuid_version: UuidVersion::default(),
        }
    }
}

impl SensorConfig {
    /// Loads and validates a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Checks that both IRIs are well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sensor_iri()?;
        Iri::parse(self.data_version.as_str()).map_err(|source| ConfigError::Invalid {
            field: "data_version",
            source,
        })?;
        Ok(())
    }

    pub(crate) fn sensor_iri(&self) -> Result<Iri, ConfigError> {
        Iri::parse(self.sensor_id.as_str()).map_err(|source| ConfigError::Invalid {
            field: "sensor_id",
            source,
        })
    }
}

impl FromStr for SensorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: SensorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
