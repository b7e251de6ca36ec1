// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: String, reason: String },

    #[error("page has no <table> element")]
    NoTable,

    /// `cell` is the index of the nested cell inside the first table.
    #[error("cell {cell} has no <a> element")]
    MissingAnchor { cell: usize },

    #[error("anchor in cell {cell} has no href")]
    MissingHref { cell: usize },

    #[error("link has no query value: {href}")]
    MalformedLink { href: String },
}
