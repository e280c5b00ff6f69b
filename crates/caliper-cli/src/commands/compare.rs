//! Compare command implementation.

use crate::input;
use caliper_canonical::Canonicalizer;
use serde_json::Value;

pub fn run(
    expected: String,
    actual: String,
    ignore_order: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = input::read_json(Some(expected.as_str()))?;
    let actual = input::read_json(Some(actual.as_str()))?;

    if ignore_order {
        if Canonicalizer::new().equivalent(&expected, &actual)? {
            println!("equivalent");
            return Ok(());
        }
        return Err("documents differ".into());
    }

    match first_difference(&expected, &actual, String::new()) {
        None => {
            println!("identical");
            Ok(())
        }
        Some(at) => Err(format!("documents differ at {}", display_pointer(&at)).into()),
    }
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() {
        "/"
    } else {
        pointer
    }
}

/// JSON pointer of the first member where `a` and `b` differ, member order
/// included.
pub fn first_difference(a: &Value, b: &Value, at: String) -> Option<String> {
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => {
            let mut others = y.iter();
            for (key, value) in x {
                let child = format!("{}/{}", at, escape(key));
                match others.next() {
                    Some((other_key, other_value)) if other_key == key => {
                        if let Some(found) = first_difference(value, other_value, child) {
                            return Some(found);
                        }
                    }
                    _ => return Some(child),
                }
            }
            others
                .next()
                .map(|(key, _)| format!("{}/{}", at, escape(key)))
        }
        (Value::Array(x), Value::Array(y)) => {
            for (i, value) in x.iter().enumerate() {
                let child = format!("{}/{}", at, i);
                match y.get(i) {
                    Some(other) => {
                        if let Some(found) = first_difference(value, other, child) {
                            return Some(found);
                        }
                    }
                    None => return Some(child),
                }
            }
            (y.len() > x.len()).then(|| format!("{}/{}", at, x.len()))
        }
        _ if a == b => None,
        _ => Some(at),
    }
}

fn escape(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
