// src/render.rs
//
// Swift source for the `CelesTrakGroup` enum.
//
// Layout matches the enum checked into the Swift package byte for byte,
// stray spaces included.

use crate::{
    config::consts::{ENUM_CONFORMANCES, ENUM_NAME},
    groups::Group,
};

/// `case <name>` per group, in order.
pub fn case_lines(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|g| format!("case {}", g.case_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `case <name>: return "<id>"` for groups whose case name differs from the id.
pub fn mapping_lines(groups: &[Group]) -> String {
    groups
        .iter()
        .filter(|g| g.needs_mapping())
        .map(|g| format!("case {}: return \"{}\"", g.case_name, g.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Computed `id` property: explicit arms for mapped cases, raw value otherwise.
pub fn id_property(groups: &[Group]) -> String {
    let mut s = String::from("    public var id:String {\nswitch self {\n");
    s.push_str(&mapping_lines(groups));
    s.push_str("\ndefault: return self.rawValue\n}\n}");
    s
}

/// The complete enum text, ready to print as-is.
pub fn render_enum(groups: &[Group]) -> String {
    let header = format!("public enum {ENUM_NAME}:{ENUM_CONFORMANCES} {{\n");
    let parts = [
        header,
        case_lines(groups),
        String::from("\n\n"),
        id_property(groups),
        String::from("\n}\n"),
    ];
    let mut out = parts.join(" ");
    out.push('\n');
    out
}

/// Convenience over raw identifiers.
pub fn render_ids<S: AsRef<str>>(ids: &[S]) -> String {
    let groups: Vec<Group> = ids.iter().map(|id| Group::new(id.as_ref())).collect();
    render_enum(&groups)
}
