use std::path::Path;

use anyhow::{Context, Result};
use pcdm_works::config::Config;
use pcdm_works::infrastructure::Manifest;
use pcdm_works::presentation::factory::create_index_use_case;
use pcdm_works::presentation::output::{render_check, render_index, OutputFormat};

pub fn cmd_index(manifest_path: &Path, config: Config, json: bool) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let mut use_case = create_index_use_case(config);
    let result = use_case
        .execute(manifest)
        .context("failed to build the characterization type")?;

    // Problems go to stderr so stdout stays a document stream
    if !result.check.is_success() {
        eprint!("{}", render_check(&result.check, OutputFormat::Text));
    }

    let format = OutputFormat::from_json_flag(json);
    let rendered = render_index(&result, format).context("failed to serialize index documents")?;
    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    }

    if !result.check.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
