//! Output formatting utilities.

use crate::commands::validate::Report;

/// Validation verdict for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Differs,
    Invalid,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Ok => "ok",
            Verdict::Differs => "differs",
            Verdict::Invalid => "invalid",
        }
    }
}

/// Prints the validation table header.
#[allow(clippy::print_literal)]
pub fn print_report_header() {
    println!("{:<60} {:<24} {:<8} {}", "ID", "TYPE", "VERDICT", "DETAIL");
    println!("{}", "-".repeat(110));
}

/// Formats one validation result as a table row.
pub fn format_report_row(report: &Report) -> String {
    format!(
        "{:<60} {:<24} {:<8} {}",
        truncate(&report.id, 60),
        truncate(short_type(&report.kind), 24),
        report.verdict.as_str(),
        report.detail.as_deref().unwrap_or("")
    )
}

/// Last path segment of a type IRI.
fn short_type(iri: &str) -> &str {
    iri.rsplit('/').next().unwrap_or(iri)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
