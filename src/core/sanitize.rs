// src/core/sanitize.rs

/// Enum case name for a group identifier: every `-` becomes `_`,
/// nothing else changes.
pub fn case_name(id: &str) -> String {
    id.replace('-', "_")
}

/// True when the identifier is not already a usable case name.
pub fn needs_mapping(id: &str) -> bool {
    id.contains('-')
}
