use anyhow::Result;
use pcdm_works::config::Config;
use pcdm_works::domain::services::characterization::schemas::{schema_by_name, SCHEMA_NAMES};
use pcdm_works::presentation::output::{render_schema, render_schema_list, OutputFormat};

pub fn cmd_schema(name: Option<&str>, config: Config, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    let Some(name) = name else {
        let schemas = SCHEMA_NAMES
            .iter()
            .map(|n| schema_by_name(n))
            .collect::<Result<Vec<_>, _>>()?;
        print!("{}", render_schema_list(&schemas, format));
        if format == OutputFormat::Json {
            println!();
        }
        return Ok(());
    };

    let schema = schema_by_name(name)?;
    let entity_type = config.entity_type()?;
    print!("{}", render_schema(&schema, &entity_type, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
