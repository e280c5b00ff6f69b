//! Validate command implementation.

use crate::input;
use crate::output::{self, Verdict};
use caliper_core::{Factory, Serializer};
use serde_json::{json, Value};
use tracing::debug;

/// Outcome for one node.
pub struct Report {
    pub id: String,
    pub kind: String,
    pub verdict: Verdict,
    pub detail: Option<String>,
}

/// Rebuilds `node` through the factory and re-serializes it.
///
/// `Ok` means the rebuilt node serializes to exactly the input, member order
/// included. `Differs` means it builds but serializes differently.
pub fn check(factory: &Factory, serializer: &Serializer, node: &Value) -> Report {
    let header = |key: &str| {
        node.get(format!("@{}", key))
            .or_else(|| node.get(key))
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string()
    };
    let mut report = Report {
        id: header("id"),
        kind: header("type"),
        verdict: Verdict::Invalid,
        detail: None,
    };

    let Some(bag) = node.as_object() else {
        report.detail = Some("not a JSON object".to_string());
        return report;
    };
    let rebuilt = factory
        .create_node(bag)
        .and_then(|payload| serializer.serialize(&payload));
    match rebuilt {
        Ok(out) if out.to_string() == node.to_string() => report.verdict = Verdict::Ok,
        Ok(out) => {
            report.verdict = Verdict::Differs;
            report.detail = super::compare::first_difference(node, &out, String::new())
                .map(|at| format!("first difference at {}", at));
        }
        Err(e) => report.detail = Some(e.to_string()),
    }
    debug!(id = %report.id, verdict = report.verdict.as_str(), "validated node");
    report
}

pub fn run(input: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let document = input::read_json(input.as_deref())?;
    let factory = Factory::default();
    let serializer = Serializer::default();

    let reports: Vec<Report> = input::nodes(document)
        .iter()
        .map(|node| check(&factory, &serializer, node))
        .collect();

    if json_output {
        let rows: Vec<Value> = reports
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "type": r.kind,
                    "verdict": r.verdict.as_str(),
                    "detail": r.detail,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        output::print_report_header();
        for report in &reports {
            println!("{}", output::format_report_row(report));
        }
    }

    let invalid = reports
        .iter()
        .filter(|r| r.verdict == Verdict::Invalid)
        .count();
    if invalid > 0 {
        return Err(format!("{} of {} nodes invalid", invalid, reports.len()).into());
    }
    Ok(())
}
