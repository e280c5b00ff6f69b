//! Envelope construction.

use caliper_canonical::{Iri, Timestamp, UuidGenerator};
use caliper_core::{Factory, Payload, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::SensorConfig;
use crate::errors::{ConfigError, SensorError};
use crate::transport::Transport;

/// The transmission unit: nodes plus sensor and timing metadata.
///
/// Members serialize in declaration order. `data` is always an array, even
/// when it holds a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Emitting sensor.
    pub sensor: Iri,
    /// When the envelope was built for sending.
    pub send_time: Timestamp,
    /// Context IRI of the data model the nodes follow.
    pub data_version: String,
    /// Serialized JSON-LD nodes, in payload order.
    pub data: Vec<Value>,
}

impl Envelope {
    /// JSON object form.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Reads an envelope from its JSON object form.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Builds envelopes from typed nodes.
///
/// A sensor holds only its validated configuration; building is pure and
/// the same sensor can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct Sensor {
    id: Iri,
    config: SensorConfig,
    serializer: Serializer,
}

impl Sensor {
    /// Creates a sensor from a configuration, validating it first.
    pub fn new(config: SensorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id: config.sensor_iri()?,
            config,
            serializer: Serializer::default(),
        })
    }

    /// Configured sensor id.
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Configuration the sensor was built from.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Factory minting event ids with the configured UUID version.
    pub fn factory(&self) -> Factory {
        Factory::new(UuidGenerator::new(self.config.uuid_version))
    }

    /// Wraps `payload` in an envelope stamped with this sensor's id.
    pub fn create_envelope(
        &self,
        send_time: Timestamp,
        payload: impl Into<Vec<Payload>>,
    ) -> Result<Envelope, SensorError> {
        self.create_envelope_for(self.id.clone(), send_time, payload)
    }

    /// Wraps `payload` in an envelope stamped with `sensor`.
    ///
    /// Nodes are serialized in order. The first node that fails aborts the
    /// whole envelope.
    pub fn create_envelope_for(
        &self,
        sensor: Iri,
        send_time: Timestamp,
        payload: impl Into<Vec<Payload>>,
    ) -> Result<Envelope, SensorError> {
        let payload = payload.into();
        if payload.is_empty() {
            return Err(SensorError::EmptyEnvelope);
        }

        let data = payload
            .iter()
            .map(|node| self.serializer.serialize(node))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(sensor = %sensor, send_time = %send_time, nodes = data.len(), "built envelope");
        Ok(Envelope {
            sensor,
            send_time,
            data_version: self.config.data_version.clone(),
            data,
        })
    }

    /// Builds an envelope and hands it to `transport`.
    pub fn send<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        send_time: Timestamp,
        payload: impl Into<Vec<Payload>>,
    ) -> Result<(), SensorError> {
        let envelope = self.create_envelope(send_time, payload)?;
        transport.send(&envelope)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caliper_canonical::EntityType;
    use caliper_core::Entity;

    fn person() -> Entity {
        Entity::of_kind(
            EntityType::Person,
            Iri::parse("https://example.edu/users/554433").unwrap(),
        )
    }

    #[test]
    fn members_serialize_in_declared_order() {
        let sensor = Sensor::new(SensorConfig::default()).unwrap();
        let envelope = sensor
            .create_envelope(Timestamp::parse("2016-11-15T11:05:01Z").unwrap(), person())
            .unwrap();
        let value = envelope.to_value().unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["sensor", "sendTime", "dataVersion", "data"]);
        assert_eq!(value["sendTime"], "2016-11-15T11:05:01.000Z");
    }

    #[test]
    fn empty_payload_is_rejected() {
        let sensor = Sensor::new(SensorConfig::default()).unwrap();
        let err = sensor
            .create_envelope(Timestamp::now(), Vec::<Payload>::new())
            .unwrap_err();
        assert!(matches!(err, SensorError::EmptyEnvelope));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SensorConfig {
            data_version: "not an iri".into(),
            ..SensorConfig::default()
        };
        assert!(matches!(
            Sensor::new(config),
            Err(ConfigError::Invalid { field: "data_version", .. })
        ));
    }
}
