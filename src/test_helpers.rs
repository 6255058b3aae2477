//! Shared test utilities for the icon-mill test suite.
//!
//! Fixture icon trees are built programmatically — a helper writes a small
//! valid SVG at any relative path, so tests can shape category layouts
//! inline without carrying binary fixtures in the repository.

use std::path::Path;

/// A minimal but real SVG document that usvg parses without complaint.
pub const SAMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 18 18"><path d="M0 0h18v18H0z" fill="#0078d4"/></svg>"##;

/// Write [`SAMPLE_SVG`] at `rel` under `root`, creating parent directories.
pub fn write_icon(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, SAMPLE_SVG).unwrap();
}
