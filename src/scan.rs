//! Filesystem scanning and manifest generation.
//!
//! Stage 2 of the icon-mill pipeline (after fetch). Walks the extracted icon
//! tree to discover every vector asset, deriving for each one the component
//! name, its category, and the vendor's numeric id, and produces a structured
//! manifest that subsequent stages consume.
//!
//! ## Directory Structure
//!
//! The vendor archive lays icons out one directory per category:
//!
//! ```text
//! Icons/                                   # Icons root
//! ├── ai + machine learning/
//! │   ├── 00028-icon-service-Genomics.svg
//! │   └── 10165-icon-service-Machine-Learning.svg
//! ├── compute/
//! │   ├── 10021-icon-service-Disk.svg
//! │   └── 10035-icon-service-Virtual-Machine.svg
//! └── storage/
//!     └── 10087-icon-service-Blob-Storage.svg
//! ```
//!
//! ## Derivation Rules
//!
//! - **Name**: filename stem, numeric and vendor prefixes stripped, words
//!   PascalCased ([`naming::component_name_from_stem`]).
//! - **Category**: the first path segment under the icons root, first
//!   character capitalized, otherwise untouched.
//! - **Numeric id**: first run of exactly five digits in the planned
//!   component path ([`naming::numeric_id`]).
//!
//! ## Skipped Files
//!
//! Files directly under the icons root have no category directory to derive
//! a category from; files whose stem sanitizes to an empty name have no
//! identifier to export. Both are skipped and reported in the manifest
//! rather than passed downstream — the resolver's precondition is that every
//! record carries a non-empty name and category.

use crate::config::BuildConfig;
use crate::naming;
use crate::types::AssetRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extension of generated component files.
pub const COMPONENT_EXT: &str = "tsx";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("icons directory not found: {0}")]
    InputMissing(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub records: Vec<AssetRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
    pub config: BuildConfig,
}

/// A source file the collector refused to turn into a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path relative to the icons root.
    pub path: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Walk the icons root and derive an [`AssetRecord`] per vector asset.
///
/// Traversal is sorted by file name, so record order is stable across runs
/// and platforms. Hidden files and directories are ignored.
pub fn scan(root: &Path, config: &BuildConfig) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::InputMissing(root.to_path_buf()));
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    // Depth 0 is the root itself; only entries below it are subject to the
    // hidden-name filter.
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_svg(entry.path()) {
            continue;
        }

        // Both prefix-strips are safe: walkdir yields paths under `root`,
        // and files always have a stem.
        let rel = entry.path().strip_prefix(root).expect("walked under root");
        let rel_str = to_forward_slashes(rel);
        let stem = entry
            .path()
            .file_stem()
            .expect("file entry has a stem")
            .to_string_lossy();

        let Some(category_dir) = first_segment(rel) else {
            skipped.push(SkippedFile {
                path: rel_str,
                reason: "not inside a category directory".to_string(),
            });
            continue;
        };

        let raw_name = naming::component_name_from_stem(&stem);
        if raw_name.is_empty() {
            skipped.push(SkippedFile {
                path: rel_str,
                reason: "filename yields no identifier".to_string(),
            });
            continue;
        }

        let rel_dir = to_forward_slashes(rel.parent().unwrap_or(Path::new("")));
        let relative_path = format!(
            "{}/{}/{}.{}",
            config.output.components_dir, rel_dir, stem, COMPONENT_EXT
        );

        records.push(AssetRecord {
            raw_name,
            source_path: rel_str,
            numeric_id: naming::numeric_id(&relative_path),
            relative_path,
            category: capitalize_first(&category_dir),
        });
    }

    Ok(Manifest {
        records,
        skipped,
        config: config.clone(),
    })
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// First path segment of a relative file path, or `None` for files with no
/// parent directory.
fn first_segment(rel: &Path) -> Option<String> {
    let mut components = rel.components();
    let first = components.next()?;
    // A bare filename has exactly one component; that one is not a category.
    components.next()?;
    Some(first.as_os_str().to_string_lossy().to_string())
}

fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Uppercase the first character, leave the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_icon;
    use tempfile::TempDir;

    fn scan_tmp(tmp: &TempDir) -> Manifest {
        scan(tmp.path(), &BuildConfig::default()).unwrap()
    }

    #[test]
    fn finds_icons_across_categories() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");
        write_icon(tmp.path(), "compute/10035-icon-service-Virtual-Machine.svg");
        write_icon(tmp.path(), "storage/10087-icon-service-Blob-Storage.svg");

        let manifest = scan_tmp(&tmp);
        assert_eq!(manifest.records.len(), 3);
        assert!(manifest.skipped.is_empty());
    }

    #[test]
    fn derives_record_fields() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");

        let manifest = scan_tmp(&tmp);
        let record = &manifest.records[0];
        assert_eq!(record.raw_name, "Disk");
        assert_eq!(record.category, "Compute");
        assert_eq!(record.source_path, "compute/10021-icon-service-Disk.svg");
        assert_eq!(
            record.relative_path,
            "components/compute/10021-icon-service-Disk.tsx"
        );
        assert_eq!(record.numeric_id, "10021");
    }

    #[test]
    fn category_keeps_everything_but_first_letter() {
        let tmp = TempDir::new().unwrap();
        write_icon(
            tmp.path(),
            "ai + machine learning/10165-icon-service-Machine-Learning.svg",
        );

        let manifest = scan_tmp(&tmp);
        assert_eq!(manifest.records[0].category, "Ai + machine learning");
    }

    #[test]
    fn nested_directories_keep_top_level_category() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/vm/10035-icon-service-Scale-Set.svg");

        let manifest = scan_tmp(&tmp);
        let record = &manifest.records[0];
        assert_eq!(record.category, "Compute");
        assert_eq!(
            record.relative_path,
            "components/compute/vm/10035-icon-service-Scale-Set.tsx"
        );
    }

    #[test]
    fn root_level_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "10001-icon-service-Orphan.svg");
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");

        let manifest = scan_tmp(&tmp);
        assert_eq!(manifest.records.len(), 1);
        assert_eq!(manifest.skipped.len(), 1);
        assert_eq!(manifest.skipped[0].path, "10001-icon-service-Orphan.svg");
    }

    #[test]
    fn nameless_stems_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "misc/#$%.svg");

        let manifest = scan_tmp(&tmp);
        assert!(manifest.records.is_empty());
        assert_eq!(manifest.skipped.len(), 1);
        assert_eq!(manifest.skipped[0].path, "misc/#$%.svg");
    }

    #[test]
    fn non_svg_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");
        std::fs::write(tmp.path().join("compute/readme.txt"), "not an icon").unwrap();

        let manifest = scan_tmp(&tmp);
        assert_eq!(manifest.records.len(), 1);
        assert!(manifest.skipped.is_empty());
    }

    #[test]
    fn hidden_entries_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");
        write_icon(tmp.path(), "compute/.hidden.svg");
        write_icon(tmp.path(), ".cache/10099-icon-service-Ghost.svg");

        let manifest = scan_tmp(&tmp);
        assert_eq!(manifest.records.len(), 1);
    }

    #[test]
    fn svg_extension_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.SVG");

        let manifest = scan_tmp(&tmp);
        assert_eq!(manifest.records.len(), 1);
    }

    #[test]
    fn records_are_sorted_by_path() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "storage/10087-icon-service-Blob.svg");
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");
        write_icon(tmp.path(), "compute/10002-icon-service-App.svg");

        let manifest = scan_tmp(&tmp);
        let paths: Vec<&str> = manifest
            .records
            .iter()
            .map(|r| r.source_path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec![
                "compute/10002-icon-service-App.svg",
                "compute/10021-icon-service-Disk.svg",
                "storage/10087-icon-service-Blob.svg"
            ]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let result = scan(&missing, &BuildConfig::default());
        assert!(matches!(result, Err(ScanError::InputMissing(_))));
    }

    #[test]
    fn custom_components_dir_shapes_relative_paths() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");

        let mut config = BuildConfig::default();
        config.output.components_dir = "icons".to_string();
        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(
            manifest.records[0].relative_path,
            "icons/compute/10021-icon-service-Disk.tsx"
        );
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let tmp = TempDir::new().unwrap();
        write_icon(tmp.path(), "compute/10021-icon-service-Disk.svg");

        let manifest = scan_tmp(&tmp);
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.records, manifest.records);
    }
}
