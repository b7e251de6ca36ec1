// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod groups;
pub mod render;

pub use error::{Error, Result};
pub use groups::{extract, extract_groups, Group};
pub use render::{render_enum, render_ids};
