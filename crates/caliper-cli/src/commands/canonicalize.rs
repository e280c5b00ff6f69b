//! Canonicalize command implementation.

use crate::input;
use caliper_canonical::Canonicalizer;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input.as_deref())?;

    let bytes = Canonicalizer::new()
        .canonicalize(&value)
        .map_err(|e| format!("Canonicalization failed: {}", e))?;

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
