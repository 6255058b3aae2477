//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → process →
//! generate) and must be identical across all three modules.

use serde::{Deserialize, Serialize};

/// One discovered icon, prior to alias resolution.
///
/// Produced by the scan stage, carried through the process stage (records
/// whose component generation fails are dropped there), and consumed as a
/// complete list by the resolver in the generate stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Display name derived from the source filename stem: numeric prefix and
    /// vendor prefix stripped, remaining words PascalCased, `+` mapped to
    /// `Plus`, other non-alphanumerics removed. Never empty.
    pub raw_name: String,
    /// Source SVG path relative to the icons root.
    pub source_path: String,
    /// Planned component path relative to the output root, forward slashes:
    /// `components/<category dir…>/<stem>.tsx`.
    pub relative_path: String,
    /// First path segment under the icons root, first character capitalized.
    /// May still contain digits, spaces, `+`, and punctuation.
    pub category: String,
    /// The vendor's stable per-icon identifier: the first run of exactly five
    /// consecutive digits in `relative_path`, or empty if none exists.
    pub numeric_id: String,
}

/// Output of the resolver: an asset record plus the identifier it is exported
/// under in the aggregated module. Unique across the input list except for
/// the documented same-name/same-id ambiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedExport {
    pub exported_name: String,
    pub record: AssetRecord,
}
