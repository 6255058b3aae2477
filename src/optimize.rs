//! SVG optimization via usvg.
//!
//! The vendor's SVGs carry editor metadata, style elements, and nested
//! transforms. Parsing them into a usvg tree and writing the tree back out
//! yields a normalized document: styles resolved into attributes, transforms
//! applied to path data, scripts and unknown elements discarded. The
//! optimized markup is what gets embedded into the generated components.
//!
//! Optimization failures are per-file conditions; the process stage drops
//! the affected record and reports it rather than aborting the batch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("SVG parse error: {0}")]
    Parse(#[from] usvg::Error),
}

/// Parse an SVG document and re-serialize it in normalized form.
pub fn optimize_svg(text: &str) -> Result<String, OptimizeError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(text, &options)?;
    Ok(tree.to_string(&usvg::WriteOptions::default()))
}
