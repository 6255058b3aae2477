//! # icon-mill
//!
//! Generates typed React icon components from the Azure Public Service
//! Icons set. Instead of hand-authoring hundreds of icon components every
//! time the vendor updates its icon archive, icon-mill downloads the
//! archive, turns every SVG into a `.tsx` component, and emits an
//! aggregated module that re-exports each component individually and
//! grouped by category.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! icon-mill processes the icon set through four independent stages; the
//! middle two exchange a JSON manifest so each stage can be run, inspected,
//! and tested on its own:
//!
//! ```text
//! 1. Fetch     vendor zip  →  temp dir          (download + unpack)
//! 2. Scan      icons dir   →  manifest.json     (filesystem → records)
//! 3. Process   manifest    →  components/*.tsx  (optimize + render each icon)
//! 4. Generate  manifest    →  index.ts          (alias resolution + barrel)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifests are human-readable JSON you can inspect
//!   when the vendor ships something surprising.
//! - **Re-runnability**: tweak the output config and re-run generate without
//!   re-downloading a hundred-megabyte archive.
//! - **Testability**: scan, resolution, and rendering are pure functions of
//!   their inputs, so unit tests never need the network.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`fetch`] | Stage 1 — downloads and unpacks the vendor archive |
//! | [`scan`] | Stage 2 — walks the icon tree, derives name/category/id per asset |
//! | [`process`] | Stage 3 — optimizes each SVG and writes its component file |
//! | [`generate`] | Stage 4 — resolves export names, renders `index.ts` and `types.ts` |
//! | [`resolve`] | Export-name collision resolution (the interesting part) |
//! | [`naming`] | Sanitizers: component names, category labels, numeric ids |
//! | [`optimize`] | SVG normalization through usvg |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting for all stages |
//! | [`types`] | Shared types serialized between stages (`AssetRecord`) |
//!
//! # Design Decisions
//!
//! ## Whole-List Alias Resolution
//!
//! Export names cannot be decided per file: whether `Disk` needs a suffix
//! depends on every other icon in the set. The resolver therefore runs
//! exactly once, after all per-file work has finished and failures have
//! been filtered out, over the complete record list. See [`resolve`] for
//! the rule ladder.
//!
//! ## usvg Over a Hand-Rolled Cleaner
//!
//! The vendor's SVGs are editor exports full of style elements and nested
//! transforms. Round-tripping them through [usvg](https://docs.rs/usvg)
//! resolves styles into attributes, applies transforms to path data, and
//! drops script/metadata elements — the same normalization an SVG-optimizer
//! pass provides, without owning any of that logic.
//!
//! ## Components Embed Markup, Barrel Owns Names
//!
//! Component files are self-contained and never aliased; all collision
//! handling lives in the barrel's import statements. This keeps the
//! per-file stage embarrassingly parallel and makes a component's source
//! file stable across icon set releases even when a *different* icon forces
//! an alias change in the barrel.

pub mod config;
pub mod fetch;
pub mod generate;
pub mod naming;
pub mod optimize;
pub mod output;
pub mod process;
pub mod resolve;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
