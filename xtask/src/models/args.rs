//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Automation toolkit for the Spectral Maps Rediscovered documentation")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Download the pinned package stack into a local cache
    Download {
        /// Directory receiving the downloaded package archives
        cache: PathBuf,
    },
    /// Install the pinned package stack from a local cache, offline
    Install {
        /// Directory holding previously downloaded package archives
        cache: PathBuf,
    },
    /// Rebuild the HTML documentation
    Build {
        /// Path to the `sphinx-build` executable
        sphinx: PathBuf,
    },
}
