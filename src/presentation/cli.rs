//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pcdm-works - validate PCDM aggregations and characterization
#[derive(Parser, Debug)]
#[command(name = "pcdm-works")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./pcdm-works.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a manifest's memberships and validate declared uses
    Check {
        /// Path to the manifest
        manifest: PathBuf,
    },

    /// List built-in characterization schemas, or one schema's properties
    Schema {
        /// Schema name (base, image, document, audio, video)
        name: Option<String>,
    },

    /// Print index documents for a manifest's entities
    Index {
        /// Path to the manifest
        manifest: PathBuf,
    },
}
