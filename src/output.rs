//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity is its semantic identity (category title, export counts),
//! with filesystem paths shown as secondary context on indented lines.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Categories
//! 001 Ai + machine learning (24 icons)
//! 002 Compute (31 icons)
//!
//! Skipped
//!     orphan.svg (not inside a category directory)
//! ```
//!
//! ## Process
//!
//! ```text
//! Generated 204 component files
//!
//! Failures
//!     compute/10035-icon-service-Broken.svg: SVG parse error
//! ```
//!
//! ## Generate
//!
//! ```text
//! Exported 204 components (12 aliased), 18 categories
//!
//! Duplicate aliases (ambiguous vendor data)
//!     DiskCompute
//! ```

use crate::generate::GenerateSummary;
use crate::process::ProcessOutcome;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan stage output: categories with icon counts, then skipped files.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Categories".to_string());

    let mut order: Vec<&str> = Vec::new();
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for record in &manifest.records {
        if !counts.contains_key(record.category.as_str()) {
            order.push(&record.category);
        }
        *counts.entry(&record.category).or_default() += 1;
    }

    for (i, category) in order.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} icons)",
            format_index(i + 1),
            category,
            counts[category]
        ));
    }

    if !manifest.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &manifest.skipped {
            lines.push(format!("    {} ({})", skipped.path, skipped.reason));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Process output
// ============================================================================

/// Format process stage output: how many components were written, and which
/// records were dropped.
pub fn format_process_output(outcome: &ProcessOutcome) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Generated {} component files",
        outcome.manifest.records.len()
    ));

    if !outcome.failures.is_empty() {
        lines.push(String::new());
        lines.push("Failures".to_string());
        for failure in &outcome.failures {
            lines.push(format!("    {}: {}", failure.source_path, failure.error));
        }
    }

    lines
}

/// Print process output to stdout.
pub fn print_process_output(outcome: &ProcessOutcome) {
    for line in format_process_output(outcome) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format generate stage output: export totals plus any duplicate aliases.
///
/// Duplicate aliases are not an error here — they reflect genuinely
/// ambiguous vendor data and will fail loudly downstream — but they are
/// surfaced prominently so the maintainer sees them before publishing.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Exported {} components ({} aliased), {} categories",
        summary.exports, summary.aliased, summary.categories
    ));

    if !summary.duplicate_aliases.is_empty() {
        lines.push(String::new());
        lines.push("Duplicate aliases (ambiguous vendor data)".to_string());
        for alias in &summary.duplicate_aliases {
            lines.push(format!("    {}", alias));
        }
    }

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
