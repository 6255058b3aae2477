//! Component and barrel module rendering.
//!
//! Final stage of the icon-mill pipeline. Owns every piece of TypeScript
//! syntax the tool emits, so the resolver and the collector never see a line
//! of target-language text:
//!
//! - [`render_component`]: one typed React component per icon, embedding the
//!   optimized SVG markup. Called by the process stage as it writes files.
//! - [`render_index`]: the aggregated `index.ts` that imports every
//!   component under its resolved alias, re-exports each one individually,
//!   and exposes per-category objects plus a default export.
//! - [`render_types`]: the shared `IconProps` interface.
//!
//! ## Generated index shape
//!
//! ```text
//! import { Disk } from './components/compute/10021-icon-service-Disk';
//! import { Disk as DiskStorage10001 } from './components/storage/10001-icon-service-Disk';
//!
//! export { Disk };
//! export { DiskStorage10001 };
//!
//! export const Storage = {
//!   label: 'Storage',
//!   components: {
//!     Disk: DiskStorage10001,
//!   },
//! } as const;
//!
//! export default {
//!   Storage: Storage,
//! } as const;
//! ```
//!
//! The `generate` entry point reads the processed manifest, runs the
//! resolver exactly once over the complete record list, and writes
//! `index.ts` and `types.ts` into the output root.

use crate::config::BuildConfig;
use crate::naming::sanitize_component_name;
use crate::resolve::{self, CategoryGroup, ResolveError};
use crate::scan::COMPONENT_EXT;
use crate::types::{AssetRecord, ResolvedExport};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Processed manifest from the process stage.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub records: Vec<AssetRecord>,
    pub config: BuildConfig,
}

/// What the generate stage produced, for CLI reporting.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Total number of exported components.
    pub exports: usize,
    /// How many of them needed an alias.
    pub aliased: usize,
    /// Number of category export objects.
    pub categories: usize,
    /// Aliases assigned to more than one record (ambiguous vendor data).
    pub duplicate_aliases: Vec<String>,
}

/// Read the processed manifest, resolve export names, and write the
/// aggregated `index.ts` and the shared `types.ts`.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<GenerateSummary, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let resolved = resolve::resolve(&manifest.records)?;
    let groups = resolve::group_by_category(&resolved);

    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.ts"), render_index(&resolved, &groups))?;
    fs::write(output_dir.join("types.ts"), render_types())?;

    let aliased = resolved
        .iter()
        .filter(|e| e.exported_name != sanitize_component_name(&e.record.raw_name))
        .count();

    Ok(GenerateSummary {
        exports: resolved.len(),
        aliased,
        categories: groups.len(),
        duplicate_aliases: resolve::duplicate_aliases(&resolved),
    })
}

/// Render one icon component.
///
/// The optimized SVG's root attributes are reduced to its `viewBox`; sizing
/// is taken over by the `size` prop, and everything inside the root element
/// is embedded verbatim.
pub fn render_component(record: &AssetRecord, optimized_svg: &str, config: &BuildConfig) -> String {
    let name = sanitize_component_name(&record.raw_name);
    let depth = record.relative_path.matches('/').count();
    let types_path = format!("{}types", "../".repeat(depth));
    let parts = svg_parts(optimized_svg);
    let size = &config.output.default_size;

    let view_box_attr = match &parts.view_box {
        Some(vb) => format!("\n    viewBox=\"{vb}\""),
        None => String::new(),
    };

    format!(
        "import {{ IconProps }} from '{types_path}';\n\
         \n\
         const {name} = ({{ size = '{size}', ...props }}: IconProps) => (\n\
         \x20 <svg\n\
         \x20   xmlns=\"http://www.w3.org/2000/svg\"{view_box_attr}\n\
         \x20   width={{size}}\n\
         \x20   height={{size}}\n\
         \x20   {{...props}}\n\
         \x20   dangerouslySetInnerHTML={{{{ __html: `{inner}` }}}}\n\
         \x20 />\n\
         );\n\
         \n\
         {name}.displayName = '{name}';\n\
         \n\
         export {{ {name} }};\n",
        inner = escape_template_literal(&parts.inner),
    )
}

/// Render the aggregated barrel module.
pub fn render_index(resolved: &[ResolvedExport], groups: &[CategoryGroup]) -> String {
    let suffix = format!(".{COMPONENT_EXT}");
    let mut imports = Vec::with_capacity(resolved.len());
    let mut exports = Vec::with_capacity(resolved.len());

    for export in resolved {
        let name = sanitize_component_name(&export.record.raw_name);
        let alias = &export.exported_name;
        let path = format!(
            "./{}",
            export.record.relative_path.trim_end_matches(suffix.as_str())
        );
        if *alias != name {
            imports.push(format!("import {{ {name} as {alias} }} from '{path}';"));
            exports.push(format!("export {{ {alias} }};"));
        } else {
            imports.push(format!("import {{ {name} }} from '{path}';"));
            exports.push(format!("export {{ {name} }};"));
        }
    }

    let category_exports: Vec<String> = groups.iter().map(render_category_export).collect();

    let default_members: Vec<String> = groups
        .iter()
        .map(|g| format!("  {}: {},", g.category_label, g.category_label))
        .collect();
    let default_export = format!(
        "export default {{\n{}\n}} as const;",
        default_members.join("\n")
    );

    format!(
        "{}\n\n{}\n\n{}\n\n{}\n",
        imports.join("\n"),
        exports.join("\n"),
        category_exports.join("\n\n"),
        default_export
    )
}

/// Render one `export const <CategoryLabel> = { label, components } as const;`
/// block. Members are keyed by base name and valued by resolved alias.
fn render_category_export(group: &CategoryGroup) -> String {
    let members: Vec<String> = group
        .members
        .iter()
        .map(|member| {
            let base = sanitize_component_name(&member.record.raw_name);
            format!("    {}: {},", base, member.exported_name)
        })
        .collect();

    format!(
        "export const {} = {{\n  label: '{}',\n  components: {{\n{}\n  }},\n}} as const;",
        group.category_label,
        escape_single_quoted(&group.label),
        members.join("\n")
    )
}

/// Render the shared props interface.
pub fn render_types() -> &'static str {
    "import { SVGAttributes } from 'react';\n\
     \n\
     export interface IconProps extends SVGAttributes<SVGElement> {\n\
     \x20 size?: string;\n\
     }\n"
}

/// The pieces of an SVG document the component template needs.
struct SvgParts {
    view_box: Option<String>,
    inner: String,
}

/// Split an SVG document into its root `viewBox` and inner markup.
///
/// Best-effort string dissection: the input is always usvg output, which is
/// well-formed with a single root element.
fn svg_parts(svg: &str) -> SvgParts {
    let empty = SvgParts {
        view_box: None,
        inner: String::new(),
    };
    let Some(start) = svg.find("<svg") else {
        return empty;
    };
    let rest = &svg[start..];
    let Some(tag_end) = rest.find('>') else {
        return empty;
    };
    let root_tag = &rest[..=tag_end];

    let view_box = root_tag.find("viewBox=\"").and_then(|i| {
        let after = &root_tag[i + "viewBox=\"".len()..];
        after.find('"').map(|quote| after[..quote].to_string())
    });

    let inner = if root_tag.ends_with("/>") {
        String::new()
    } else {
        let body = &rest[tag_end + 1..];
        match body.rfind("</svg>") {
            Some(end) => body[..end].trim().to_string(),
            None => String::new(),
        }
    };

    SvgParts { view_box, inner }
}

/// Escape markup for embedding in a JS template literal.
fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Escape a label for embedding in a single-quoted JS string.
fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
