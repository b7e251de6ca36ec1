// src/groups.rs
//
// Group identifiers from the CelesTrak current data page.
//
// Page shape (first table only):
//   <table> ... <td> <table> ... <td><a href="gp.php?GROUP=<id>&FORMAT=tle">..</a></td> ...
//
// Every <td> of the first table is visited; every <td> nested in it must
// carry an anchor. Cells with no nested cells contribute nothing.

use std::collections::HashMap;

use scraper::Html;

use crate::{
    config::consts::{GROUP_PARAM_SEP, QUERY_SEP},
    core::{html, sanitize},
    error::{Error, Result},
};

/// One satellite group as it appears in the generated enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Identifier as used in CelesTrak URLs, e.g. `cosmos-2251-debris`.
    pub id: String,
    /// Enum case name, e.g. `cosmos_2251_debris`.
    pub case_name: String,
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let case_name = sanitize::case_name(&id);
        Self { id, case_name }
    }

    /// Case name differs from the identifier and needs an explicit `id` arm.
    pub fn needs_mapping(&self) -> bool {
        sanitize::needs_mapping(&self.id)
    }
}

/// Text between the first and second `=` of a link target, cut at `&`.
pub fn group_from_href(href: &str) -> Result<&str> {
    let value = href
        .split(GROUP_PARAM_SEP)
        .nth(1)
        .ok_or_else(|| Error::MalformedLink { href: href.to_string() })?;
    Ok(value.split(QUERY_SEP).next().unwrap_or(value))
}

/// Unique group identifiers in first-seen order.
pub fn extract_groups(page: &str) -> Result<Vec<String>> {
    let sel = html::Selectors::new()?;
    let doc = Html::parse_document(page);
    let table = html::first_table(&doc, &sel).ok_or(Error::NoTable)?;

    let mut groups: Vec<String> = Vec::new();
    let mut cell = 0usize;

    for outer in table.select(&sel.cell) {
        for inner in outer.select(&sel.cell) {
            let href = match html::first_anchor_href(inner, &sel) {
                Some(Some(href)) => href,
                Some(None) => return Err(Error::MissingHref { cell }),
                None => return Err(Error::MissingAnchor { cell }),
            };
            let id = group_from_href(href)?;
            if groups.iter().any(|g| g == id) {
                logd!("duplicate group {id} in cell {cell}");
            } else {
                groups.push(id.to_string());
            }
            cell += 1;
        }
    }

    logf!("{} unique groups", groups.len());
    Ok(groups)
}

/// `extract_groups` paired with case names. Case-name collisions are logged,
/// not rejected.
pub fn extract(page: &str) -> Result<Vec<Group>> {
    let groups: Vec<Group> = extract_groups(page)?.into_iter().map(Group::new).collect();

    let mut first_id: HashMap<&str, &str> = HashMap::new();
    for g in &groups {
        if let Some(prev) = first_id.get(g.case_name.as_str()) {
            logw!("case name {} used by both {} and {}", g.case_name, prev, g.id);
        } else {
            first_id.insert(&g.case_name, &g.id);
        }
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_between_equals_and_ampersand() {
        assert_eq!(group_from_href("gp.php?GROUP=active&FORMAT=tle").unwrap(), "active");
        assert_eq!(group_from_href("gp.php?GROUP=gps-ops").unwrap(), "gps-ops");
        assert_eq!(group_from_href("?GROUP=&FORMAT=tle").unwrap(), "");
    }

    #[test]
    fn value_stops_at_second_equals() {
        assert_eq!(group_from_href("gp.php?GROUP=a=b&FORMAT=tle").unwrap(), "a");
        assert_eq!(group_from_href("gp.php?GROUP=weather=x").unwrap(), "weather");
    }

    #[test]
    fn link_without_equals_is_malformed() {
        match group_from_href("table.php") {
            Err(Error::MalformedLink { href }) => assert_eq!(href, "table.php"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn group_case_name_and_mapping() {
        let g = Group::new("iridium-33-debris");
        assert_eq!(g.case_name, "iridium_33_debris");
        assert!(g.needs_mapping());

        let g = Group::new("starlink");
        assert_eq!(g.case_name, "starlink");
        assert!(!g.needs_mapping());
    }

    fn page(cells: &[&str]) -> String {
        let inner: String = cells.iter().map(|c| format!("<tr><td>{c}</td></tr>")).collect();
        format!("<html><body><table><tr><td><table>{inner}</table></td></tr></table></body></html>")
    }

    #[test]
    fn dedupes_in_first_seen_order() {
        let html = page(&[
            "<a href='gp.php?GROUP=b&FORMAT=tle'>B</a>",
            "<a href='gp.php?GROUP=a&FORMAT=tle'>A</a>",
            "<a href='gp.php?GROUP=b&FORMAT=json'>B again</a>",
        ]);
        assert_eq!(extract_groups(&html).unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn missing_anchor_fails() {
        let html = page(&["<a href='gp.php?GROUP=a'>A</a>", "no link"]);
        assert!(matches!(extract_groups(&html), Err(Error::MissingAnchor { cell: 1 })));
    }

    #[test]
    fn anchor_without_href_fails() {
        let html = page(&["<a name='x'>A</a>"]);
        assert!(matches!(extract_groups(&html), Err(Error::MissingHref { cell: 0 })));
    }

    #[test]
    fn no_table_fails() {
        assert!(matches!(extract_groups("<p>moved</p>"), Err(Error::NoTable)));
    }

    #[test]
    fn flat_table_yields_nothing() {
        let html = "<table><tr><td><a href='gp.php?GROUP=a'>A</a></td></tr></table>";
        assert!(extract_groups(html).unwrap().is_empty());
    }

    #[test]
    fn extract_keeps_colliding_case_names() {
        let html = page(&[
            "<a href='gp.php?GROUP=x-comm'>X</a>",
            "<a href='gp.php?GROUP=x_comm'>X</a>",
        ]);
        let groups = extract(&html).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].case_name, groups[1].case_name);
    }

    #[test]
    fn nested_cells_at_any_depth_are_visited() {
        // inner cell holds a third level; both levels must carry anchors
        let html = page(&[
            "<a href='gp.php?GROUP=outer'>O</a>\
             <table><tr><td><a href='gp.php?GROUP=deep&FORMAT=tle'>D</a></td></tr></table>",
        ]);
        assert_eq!(extract_groups(&html).unwrap(), vec!["outer", "deep"]);
    }
}
