#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{build, download, install};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Download { cache } => download::download_packages(&cache)?,
        AppCommands::Install { cache } => install::install_packages(&cache)?,
        AppCommands::Build { sphinx } => build::build_docs(&sphinx)?,
    }

    Ok(())
}
