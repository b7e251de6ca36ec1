// src/core/html.rs
// DOM helpers on top of `scraper`.
// `ElementRef::select` matches descendants only, never the element itself.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector {
        css: css.to_string(),
        reason: e.to_string(),
    })
}

/// Selectors for the group table walk.
pub struct Selectors {
    pub table: Selector,
    pub cell: Selector,
    pub anchor: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: selector("table")?,
            cell: selector("td")?,
            anchor: selector("a")?,
        })
    }
}

/// First `<table>` in the document.
pub fn first_table<'a>(doc: &'a Html, sel: &Selectors) -> Option<ElementRef<'a>> {
    doc.select(&sel.table).next()
}

/// `href` of the first `<a>` below `el`.
/// Outer `None`: no anchor. Inner `None`: anchor without `href`.
pub fn first_anchor_href<'a>(el: ElementRef<'a>, sel: &Selectors) -> Option<Option<&'a str>> {
    el.select(&sel.anchor)
        .next()
        .map(|a| a.value().attr("href"))
}
