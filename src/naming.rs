//! Centralized name derivation for icon components and categories.
//!
//! All identifier shaping lives here: turning vendor filename stems into
//! component names, category directory names into PascalCase labels and
//! human-readable display labels, and extracting the vendor's stable numeric
//! icon id from a path. The resolver and the templater both build on these,
//! so the rules must stay consistent across stages.
//!
//! ## Vendor filename convention
//!
//! Source files are named `<id>-icon-service-<Name>.svg`, e.g.
//! `10165-icon-service-Machine-Learning.svg`. The id is five digits and
//! reappears in the generated component path, which is where
//! [`numeric_id`] reads it back from.

/// Filename prefixes the vendor inserts between the numeric id and the icon
/// name. Stripped before deriving the component name.
const VENDOR_PREFIXES: &[&str] = &["icon-service-"];

/// Make an identifier-safe component name: `+` becomes the word `Plus`,
/// every other non-alphanumeric character is dropped.
///
/// - `"Icon+Name"` → `"IconPlusName"`
/// - `"My@Icon#Name"` → `"MyIconName"`
pub fn sanitize_component_name(name: &str) -> String {
    name.replace('+', "Plus")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Derive the PascalCase identifier for a category directory name.
///
/// Strips the leading digit run, splits on runs of whitespace and `+`,
/// capitalizes the first letter of each word and lowercases the rest, then
/// drops any remaining non-alphanumeric characters.
///
/// - `"01 My Category"` → `"MyCategory"`
/// - `"08 AI + Machine Learning"` → `"AiMachineLearning"`
/// - `"123456"` → `""` (purely numeric categories have no identifier)
pub fn sanitize_category_name(category: &str) -> String {
    let stripped = category.trim_start_matches(|c: char| c.is_ascii_digit());
    stripped
        .split(|c: char| c.is_whitespace() || c == '+')
        .map(capitalize_lower)
        .collect::<String>()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Derive the human-readable label for a category export object.
///
/// Strips a leading `<digits><dash/space>` prefix, splits on `+`, capitalizes
/// each side (first letter up, the rest down), and rejoins with `" + "`.
///
/// - `"08 AI + Machine Learning"` → `"Ai + Machine learning"`
pub fn category_display_label(category: &str) -> String {
    let stripped = category
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start_matches(|c: char| c == '-' || c.is_whitespace());
    stripped
        .split('+')
        .map(|side| capitalize_lower(side.trim()))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Extract the vendor's stable numeric icon id from a path: the first run of
/// exactly five consecutive digits. Runs of any other length do not count.
/// Returns an empty string when no such run exists.
pub fn numeric_id(path: &str) -> String {
    let mut run = String::new();
    let mut chars = path.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            run.push(c);
            let at_end = chars.peek().is_none_or(|n| !n.is_ascii_digit());
            if at_end {
                if run.len() == 5 {
                    return run;
                }
                run.clear();
            }
        }
    }
    String::new()
}

/// Derive the component display name from a source filename stem.
///
/// `"10165-icon-service-Machine-Learning"` → `"MachineLearning"`:
/// the numeric prefix and vendor prefix are stripped, the remaining words
/// (split on `-`, `_`, and whitespace) get their first letter capitalized
/// with the rest preserved (so `AI-Studio` keeps its casing as `AIStudio`),
/// and the result is run through [`sanitize_component_name`].
pub fn component_name_from_stem(stem: &str) -> String {
    let mut rest = stem
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start_matches('-');
    for prefix in VENDOR_PREFIXES {
        if let Some(after) = rest.strip_prefix(prefix) {
            rest = after;
            break;
        }
    }
    let pascal: String = rest
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(capitalize_preserve)
        .collect();
    sanitize_component_name(&pascal)
}

/// Uppercase the first character, lowercase the rest.
fn capitalize_lower(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, preserve the rest.
fn capitalize_preserve(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
