//! Input loading shared by commands.

use serde_json::Value;
use std::io::{self, Read};

/// Reads JSON from a file, or from stdin when no path is given.
pub fn read_json(input: Option<&str>) -> Result<Value, Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&text).map_err(|e| format!("Invalid JSON: {}", e))?)
}

/// Splits a document into its nodes.
///
/// An envelope yields its `data`, an array yields its items, anything else
/// is a single node.
pub fn nodes(document: Value) -> Vec<Value> {
    match document {
        Value::Object(mut map) if map.contains_key("sensor") && map.contains_key("data") => {
            match map.remove("data") {
                Some(Value::Array(items)) => items,
                Some(other) => vec![other],
                None => Vec::new(),
            }
        }
        Value::Array(items) => items,
        other => vec![other],
    }
}
