// src/bin/cli.rs
use clap::Parser;
use mv_dash::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::Stderr);

    let args = cli::Args::parse();
    cli::run(args)?;
    Ok(())
}
