//! pcdm-works CLI - validate PCDM aggregations and characterization
//!
//! Usage: pcdm-works <COMMAND>
//!
//! Commands:
//!   check   Apply a manifest's memberships and validate declared uses
//!   schema  List built-in characterization schemas
//!   index   Print index documents for a manifest

mod commands;

use anyhow::Result;
use clap::Parser;
use pcdm_works::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref(), cli.json)?;
    pcdm_works::logging::init(cli.verbose, config.logging.level);

    match cli.command {
        Commands::Check { manifest } => commands::check::cmd_check(&manifest, config, cli.json),
        Commands::Schema { name } => commands::schema::cmd_schema(name.as_deref(), config, cli.json),
        Commands::Index { manifest } => commands::index::cmd_index(&manifest, config, cli.json),
    }
}
