// src/bin/cli.rs
use clap::Parser;
use drive_chart::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    drive_chart::log::init_stderr();

    let args = Args::parse();
    cli::run(&args)?;
    Ok(())
}
