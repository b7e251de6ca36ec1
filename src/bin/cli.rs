// src/bin/cli.rs
use celestrak_groups::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::main_with_args(std::env::args().skip(1))
}
