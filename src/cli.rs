// src/cli.rs
use std::io::{self, Write};

use crate::{config::consts::GROUPS_URL, core::net, error::Result, groups, render};

const HELP: &str = "\
Usage: celestrak_groups

Fetches the CelesTrak current data page and prints the CelesTrakGroup
Swift enum to stdout. Takes no options. Set RUST_LOG for more logging.";

pub enum Mode {
    Generate,
    Help,
}

/// No configuration; only `-h`/`--help` is recognised.
pub fn detect_mode<I: IntoIterator<Item = String>>(args: I) -> std::result::Result<Mode, String> {
    let mut mode = Mode::Generate;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => mode = Mode::Help,
            _ => return Err(format!("Unknown arg: {a} (try --help)")),
        }
    }
    Ok(mode)
}

/// Page text → enum text. No IO.
pub fn generate(page: &str) -> Result<String> {
    let groups = groups::extract(page)?;
    Ok(render::render_enum(&groups))
}

/// Fetch, generate, print.
pub fn run(out: &mut dyn Write) -> color_eyre::Result<()> {
    let page = net::http_get(GROUPS_URL).inspect_err(|e| loge!("{e}"))?;
    let text = generate(&page).inspect_err(|e| loge!("{e}"))?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn main_with_args<I: IntoIterator<Item = String>>(args: I) -> color_eyre::Result<()> {
    match detect_mode(args).map_err(color_eyre::eyre::Report::msg)? {
        Mode::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Mode::Generate => run(&mut io::stdout().lock()),
    }
}
