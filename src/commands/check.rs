use std::path::Path;

use anyhow::{Context, Result};
use pcdm_works::config::Config;
use pcdm_works::infrastructure::Manifest;
use pcdm_works::presentation::factory::create_check_use_case;
use pcdm_works::presentation::output::{render_check, OutputFormat};

pub fn cmd_check(manifest_path: &Path, config: Config, json: bool) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let mut use_case = create_check_use_case(config);
    let result = use_case
        .execute(manifest)
        .context("failed to build the characterization type")?;

    let format = OutputFormat::from_json_flag(json);
    if format == OutputFormat::Text {
        println!("Checking {}", manifest_path.display());
    }
    print!("{}", render_check(&result, format));
    if format == OutputFormat::Json {
        println!();
    }

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
