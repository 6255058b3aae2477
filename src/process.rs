//! Component file generation.
//!
//! Stage 3 of the icon-mill pipeline. Takes the manifest from the scan stage
//! and turns every record into a component source file: read the SVG,
//! normalize it through [`crate::optimize`], render the component with
//! [`crate::generate::render_component`], write it to its planned path.
//!
//! ## Output Structure
//!
//! ```text
//! src/generated/
//! └── components/
//!     ├── ai + machine learning/
//!     │   └── 10165-icon-service-Machine-Learning.tsx
//!     └── compute/
//!         └── 10021-icon-service-Disk.tsx
//! ```
//!
//! (`index.ts` and `types.ts` are written later by the generate stage.)
//!
//! ## Failure Semantics
//!
//! A record whose source file is missing, unreadable, or rejected by the
//! optimizer is dropped from the manifest and reported — one broken vendor
//! file must not sink the other several hundred. The resolver downstream
//! only ever sees records whose component file actually exists.
//!
//! ## Parallel Processing
//!
//! Records are processed in parallel using [rayon](https://docs.rs/rayon);
//! results are joined back in input order before the manifest is written.

use crate::config::BuildConfig;
use crate::generate::render_component;
use crate::optimize::optimize_svg;
use crate::types::AssetRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input manifest (from scan stage).
#[derive(Debug, Deserialize)]
pub struct InputManifest {
    pub records: Vec<AssetRecord>,
    pub config: BuildConfig,
}

/// Output manifest (after processing): the surviving records.
#[derive(Debug, Serialize)]
pub struct OutputManifest {
    pub records: Vec<AssetRecord>,
    pub config: BuildConfig,
}

/// A record that failed component generation and was dropped.
#[derive(Debug, Clone, Serialize)]
pub struct FailedRecord {
    pub source_path: String,
    pub error: String,
}

/// Result of the process stage.
#[derive(Debug)]
pub struct ProcessOutcome {
    pub manifest: OutputManifest,
    pub failures: Vec<FailedRecord>,
}

/// Generate a component file for every record in the scan manifest.
///
/// The output directory is cleared first — stale components from a previous
/// icon set release would otherwise leak into the barrel.
pub fn process(
    manifest_path: &Path,
    icons_root: &Path,
    output_dir: &Path,
) -> Result<ProcessOutcome, ProcessError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let input: InputManifest = serde_json::from_str(&manifest_content)?;

    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir.join(&input.config.output.components_dir))?;

    let results: Vec<Result<AssetRecord, FailedRecord>> = input
        .records
        .par_iter()
        .map(|record| {
            process_record(record, icons_root, output_dir, &input.config)
                .map(|()| record.clone())
                .map_err(|error| FailedRecord {
                    source_path: record.source_path.clone(),
                    error,
                })
        })
        .collect();

    let mut records = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(failure) => failures.push(failure),
        }
    }

    Ok(ProcessOutcome {
        manifest: OutputManifest {
            records,
            config: input.config,
        },
        failures,
    })
}

/// Read, optimize, render, and write a single record's component file.
fn process_record(
    record: &AssetRecord,
    icons_root: &Path,
    output_dir: &Path,
    config: &BuildConfig,
) -> Result<(), String> {
    let source = icons_root.join(&record.source_path);
    let svg = fs::read_to_string(&source)
        .map_err(|e| format!("reading {}: {}", source.display(), e))?;
    let optimized = optimize_svg(&svg).map_err(|e| e.to_string())?;
    let code = render_component(record, &optimized, config);

    let target = output_dir.join(&record.relative_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    fs::write(&target, code).map_err(|e| format!("writing {}: {}", target.display(), e))?;
    Ok(())
}
