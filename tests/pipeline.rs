//! End-to-end pipeline test: scan → process → generate over a fixture tree
//! with every collision flavor, asserting on the emitted TypeScript.

use icon_mill::config::BuildConfig;
use icon_mill::{generate, process, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 18 18"><path d="M0 0h18v18H0z" fill="#0078d4"/></svg>"##;

fn write_icon(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, SAMPLE_SVG).unwrap();
}

#[test]
fn full_pipeline_produces_compiling_barrel_shape() {
    let tmp = TempDir::new().unwrap();
    let icons = tmp.path().join("icons");

    // A unique icon, a same-category duplicate pair, a cross-category
    // duplicate pair, and an icon named after its own category.
    write_icon(&icons, "01 compute/10035-icon-service-Virtual-Machine.svg");
    write_icon(&icons, "10 storage/10001-icon-service-Disk.svg");
    write_icon(&icons, "10 storage/10002-icon-service-Disk.svg");
    write_icon(&icons, "02 networking/10076-icon-service-Gateway.svg");
    write_icon(&icons, "07 databases/10134-icon-service-Gateway.svg");
    write_icon(&icons, "02 networking/10061-icon-service-Networking.svg");

    let config = BuildConfig::default();

    // Stage 2: scan.
    let manifest = scan::scan(&icons, &config).unwrap();
    assert_eq!(manifest.records.len(), 6);
    assert!(manifest.skipped.is_empty());
    let manifest_path = tmp.path().join("manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    // Stage 3: process.
    let output = tmp.path().join("generated");
    let outcome = process::process(&manifest_path, &icons, &output).unwrap();
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.manifest.records.len(), 6);
    let processed_path = tmp.path().join("processed.json");
    fs::write(
        &processed_path,
        serde_json::to_string_pretty(&outcome.manifest).unwrap(),
    )
    .unwrap();

    // Every component file exists where the barrel will import it from.
    for record in &outcome.manifest.records {
        assert!(output.join(&record.relative_path).exists());
    }

    // Stage 4: generate.
    let summary = generate::generate(&processed_path, &output).unwrap();
    assert_eq!(summary.exports, 6);
    assert_eq!(summary.categories, 4);
    assert!(summary.duplicate_aliases.is_empty());

    let index = fs::read_to_string(output.join("index.ts")).unwrap();

    // Unique icon: bare name.
    assert!(index.contains("export { VirtualMachine };"));
    // Same-category duplicates: category label + numeric id.
    assert!(index.contains("export { DiskStorage10001 };"));
    assert!(index.contains("export { DiskStorage10002 };"));
    // Cross-category duplicates: category label only.
    assert!(index.contains("export { GatewayNetworking };"));
    assert!(index.contains("export { GatewayDatabases };"));
    // Icon named after its own category: numeric id.
    assert!(index.contains("export { Networking10061 };"));

    // Aliased imports reference the component's base name.
    assert!(index.contains(
        "import { Disk as DiskStorage10001 } from './components/10 storage/10001-icon-service-Disk';"
    ));

    // Category objects key members by base name, valued by alias.
    assert!(index.contains("export const Storage = {"));
    assert!(index.contains("    Disk: DiskStorage10001,"));
    assert!(index.contains("  label: 'Storage',"));

    // Default export lists every category label.
    assert!(index.contains("  Compute: Compute,"));
    assert!(index.contains("  Networking: Networking,"));
    assert!(index.contains("  Databases: Databases,"));

    // The shared props interface is in place next to the barrel.
    let types = fs::read_to_string(output.join("types.ts")).unwrap();
    assert!(types.contains("export interface IconProps"));
}

#[test]
fn same_icon_filed_twice_resolves_by_category_and_is_reported_clean() {
    let tmp = TempDir::new().unwrap();
    let icons = tmp.path().join("icons");

    // The same vendor id under two categories: rule 1 territory.
    write_icon(&icons, "compute/10001-icon-service-Storage.svg");
    write_icon(&icons, "storage/10001-icon-service-Storage.svg");

    let config = BuildConfig::default();
    let manifest = scan::scan(&icons, &config).unwrap();
    let manifest_path = tmp.path().join("manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    let output = tmp.path().join("generated");
    let outcome = process::process(&manifest_path, &icons, &output).unwrap();
    let processed_path = tmp.path().join("processed.json");
    fs::write(
        &processed_path,
        serde_json::to_string_pretty(&outcome.manifest).unwrap(),
    )
    .unwrap();

    let summary = generate::generate(&processed_path, &output).unwrap();
    assert_eq!(summary.exports, 2);
    assert!(summary.duplicate_aliases.is_empty());

    let index = fs::read_to_string(output.join("index.ts")).unwrap();
    assert!(index.contains("export { StorageCompute };"));
    assert!(index.contains("export { StorageStorage };"));
}
