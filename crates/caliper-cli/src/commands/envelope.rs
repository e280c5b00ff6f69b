//! Envelope command implementation.

use crate::input;
use caliper_canonical::{Iri, Timestamp};
use caliper_core::Payload;
use caliper_sensor::{Sensor, SensorConfig};

pub struct Options {
    pub inputs: Vec<String>,
    pub sensor: Option<String>,
    pub send_time: Option<String>,
    pub config: Option<String>,
}

pub fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &options.config {
        Some(path) => SensorConfig::from_file(path)?,
        None => SensorConfig::default(),
    };
    let sensor = Sensor::new(config)?;
    let factory = sensor.factory();

    let documents = if options.inputs.is_empty() {
        vec![input::read_json(None)?]
    } else {
        options
            .inputs
            .iter()
            .map(|path| input::read_json(Some(path.as_str())))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut payload: Vec<Payload> = Vec::new();
    for node in documents.into_iter().flat_map(input::nodes) {
        let bag = node.as_object().ok_or("every node must be a JSON object")?;
        payload.push(factory.create_node(bag)?);
    }

    let send_time = match &options.send_time {
        Some(text) => Timestamp::parse(text)?,
        None => Timestamp::now(),
    };
    let sensor_id = match &options.sensor {
        Some(text) => Iri::parse(text.as_str())?,
        None => sensor.id().clone(),
    };
    let envelope = sensor.create_envelope_for(sensor_id, send_time, payload)?;

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
