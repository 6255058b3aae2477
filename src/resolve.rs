//! Export-name collision resolution.
//!
//! The heart of the generate stage. Given the complete list of asset records,
//! decides the identifier each component is exported under in the aggregated
//! module so that the barrel compiles without duplicate-identifier errors
//! while keeping names as readable as possible.
//!
//! ## Why a whole-list batch transform
//!
//! Every decision depends on a collision census over the *entire* input:
//! whether a name repeats globally, within its own category, with the same
//! vendor id, or collides with a category identifier. The resolver is
//! therefore invoked exactly once, after all per-file work has completed and
//! failures have been filtered out. It is pure and deterministic: the same
//! input list always yields the same output, in input order.
//!
//! ## Disambiguation rules
//!
//! For each record, the first matching rule wins:
//!
//! 1. Another record has the same sanitized name *and* the same five-digit
//!    vendor id → append the category identifier. Two such records are almost
//!    certainly the same icon filed under two categories, so the id would not
//!    distinguish them. If three or more records share name and id, they all
//!    receive the same alias — a known, accepted ambiguity that downstream
//!    compilation will surface loudly.
//! 2. The name collides with some category's identifier → append the vendor
//!    id. This also fires on coincidental matches with no real collision.
//! 3. The name repeats within the record's own category (distinct vendor
//!    ids) → append category identifier and vendor id.
//! 4. The name repeats only across categories → append the category
//!    identifier alone.
//! 5. No collision → the bare sanitized name.

use crate::naming::{category_display_label, sanitize_category_name, sanitize_component_name};
use crate::types::{AssetRecord, ResolvedExport};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("record has an empty name: {0}")]
    EmptyName(String),
    #[error("record has an empty category: {0}")]
    EmptyCategory(String),
}

/// A category's slice of the aggregated export.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    /// Raw category string the group was keyed on.
    pub category: String,
    /// PascalCase identifier used for the exported object.
    pub category_label: String,
    /// Human-readable label, e.g. `"Ai + Machine learning"`.
    pub label: String,
    /// Members in input order, de-duplicated by base sanitized name.
    pub members: Vec<ResolvedExport>,
}

/// Collision census over the whole record list, built in one pass and read
/// immutably by the per-record decision step.
struct Census {
    /// sanitized name → number of records sharing it, any category.
    global_count: HashMap<String, usize>,
    /// category → sanitized name → vendor ids of the records sharing it.
    category_ids: HashMap<String, HashMap<String, Vec<String>>>,
    /// sanitized name + vendor id → number of records sharing both.
    exact_key_count: HashMap<String, usize>,
    /// Sanitized identifiers of every category present in the input.
    category_labels: HashSet<String>,
}

fn build_census(records: &[AssetRecord]) -> Census {
    let mut global_count: HashMap<String, usize> = HashMap::new();
    let mut category_ids: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
    let mut exact_key_count: HashMap<String, usize> = HashMap::new();
    let mut category_labels: HashSet<String> = HashSet::new();

    for record in records {
        let name = sanitize_component_name(&record.raw_name);
        *global_count.entry(name.clone()).or_default() += 1;
        *exact_key_count
            .entry(format!("{}{}", name, record.numeric_id))
            .or_default() += 1;
        category_ids
            .entry(record.category.clone())
            .or_default()
            .entry(name)
            .or_default()
            .push(record.numeric_id.clone());
        category_labels.insert(sanitize_category_name(&record.category));
    }

    Census {
        global_count,
        category_ids,
        exact_key_count,
        category_labels,
    }
}

/// Decide the exported identifier for one record against the census.
fn exported_name(record: &AssetRecord, census: &Census) -> String {
    let name = sanitize_component_name(&record.raw_name);
    let category_label = sanitize_category_name(&record.category);

    let exact_key = format!("{}{}", name, record.numeric_id);
    if census.exact_key_count.get(&exact_key).copied().unwrap_or(0) > 1 {
        return format!("{name}{category_label}");
    }
    if census.category_labels.contains(&name) {
        return format!("{}{}", name, record.numeric_id);
    }
    let ids_in_category = census
        .category_ids
        .get(&record.category)
        .and_then(|names| names.get(&name))
        .map(Vec::len)
        .unwrap_or(0);
    if ids_in_category > 1 {
        return format!("{}{}{}", name, category_label, record.numeric_id);
    }
    if census.global_count.get(&name).copied().unwrap_or(0) > 1 {
        return format!("{name}{category_label}");
    }
    name
}

/// Resolve an exported identifier for every record.
///
/// Pure function of the whole input list; output length and order match the
/// input. Fails fast on records with an empty name or category — those
/// indicate a bug in the upstream collector, not a per-item condition.
pub fn resolve(records: &[AssetRecord]) -> Result<Vec<ResolvedExport>, ResolveError> {
    for record in records {
        if record.raw_name.is_empty() {
            return Err(ResolveError::EmptyName(record.relative_path.clone()));
        }
        if record.category.is_empty() {
            return Err(ResolveError::EmptyCategory(record.relative_path.clone()));
        }
    }

    let census = build_census(records);

    Ok(records
        .iter()
        .map(|record| ResolvedExport {
            exported_name: exported_name(record, &census),
            record: record.clone(),
        })
        .collect())
}

/// Group resolved exports by raw category, in first-seen order.
///
/// Within a group, members whose base sanitized name repeats an earlier
/// member's are dropped: two different full identifiers can collapse to the
/// same base name after aliasing, and the category object is keyed by base
/// name, so only the first occurrence in input order is kept.
pub fn group_by_category(resolved: &[ResolvedExport]) -> Vec<CategoryGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ResolvedExport>> = HashMap::new();

    for export in resolved {
        let category = &export.record.category;
        if !groups.contains_key(category) {
            order.push(category.clone());
        }
        groups.entry(category.clone()).or_default().push(export.clone());
    }

    order
        .into_iter()
        .map(|category| {
            let mut seen = HashSet::new();
            let members: Vec<ResolvedExport> = groups
                .remove(&category)
                .unwrap_or_default()
                .into_iter()
                .filter(|e| seen.insert(sanitize_component_name(&e.record.raw_name)))
                .collect();
            CategoryGroup {
                category_label: sanitize_category_name(&category),
                label: category_display_label(&category),
                category,
                members,
            }
        })
        .collect()
}

/// Exported names that more than one record resolved to.
///
/// Non-empty output means the rule-1 ambiguity occurred: genuinely distinct
/// records sharing both name and vendor id. Reported to the user by the
/// generate stage; downstream compilation will fail loudly, which is
/// acceptable since it reflects genuinely ambiguous vendor data.
pub fn duplicate_aliases(resolved: &[ResolvedExport]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for export in resolved {
        *counts.entry(export.exported_name.as_str()).or_default() += 1;
    }
    let mut duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect();
    duplicates.sort();
    duplicates
}
