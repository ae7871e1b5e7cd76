//! Output Rendering
//!
//! Renders use case results as human-readable text or JSON.

use std::fmt::Write as _;

use crate::application::{CheckResult, IndexResult};
use crate::domain::entities::{EntityType, Schema};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render a check result
pub fn render_check(result: &CheckResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({
            "event": "check",
            "success": result.is_success(),
            "entities": result.entities,
            "memberships_applied": result.memberships_applied,
            "problems": result.problems,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            for entity in &result.entities {
                let _ = writeln!(
                    out,
                    "  {} ({}): {} member(s), {} file(s)",
                    entity.name, entity.kind, entity.members, entity.files
                );
            }
            for problem in &result.problems {
                let _ = writeln!(out, "✗ {}: {}", problem.entity, problem.message);
            }
            if result.is_success() {
                let _ = writeln!(
                    out,
                    "✓ {} entities, {} memberships applied",
                    result.entities.len(),
                    result.memberships_applied
                );
            } else {
                let _ = writeln!(out, "{} problem(s) found", result.problems.len());
            }
            out
        }
    }
}

/// Render index documents; always JSON, one document per line in text mode
pub fn render_index(result: &IndexResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(&serde_json::json!({
            "event": "index",
            "documents": serde_json::to_value(&result.documents)?,
        })),
        OutputFormat::Text => {
            let mut out = String::new();
            for named in &result.documents {
                let _ = writeln!(out, "{}", named.document.to_json()?);
            }
            Ok(out)
        }
    }
}

/// Render the list of built-in schemas
pub fn render_schema_list(schemas: &[Schema], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let names: Vec<&str> = schemas.iter().map(Schema::name).collect();
            serde_json::json!({ "schemas": names }).to_string()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for schema in schemas {
                let _ = writeln!(
                    out,
                    "{:<10} {} properties",
                    schema.name(),
                    schema.properties().len()
                );
            }
            out
        }
    }
}

/// Render one schema's properties as seen on the composed entity type
pub fn render_schema(schema: &Schema, entity_type: &EntityType, format: OutputFormat) -> String {
    let rows: Vec<(&str, &str, bool)> = schema
        .properties()
        .iter()
        .map(|p| {
            let effective = entity_type.property(&p.name).unwrap_or(p);
            (p.name.as_str(), effective.predicate.as_str(), effective.multiple)
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let properties: Vec<serde_json::Value> = rows
                .iter()
                .map(|(name, predicate, multiple)| {
                    serde_json::json!({
                        "name": name,
                        "predicate": predicate,
                        "multiple": multiple,
                    })
                })
                .collect();
            serde_json::json!({ "schema": schema.name(), "properties": properties }).to_string()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, predicate, multiple) in rows {
                let cardinality = if multiple { "many" } else { "one" };
                let _ = writeln!(out, "{:<20} {:<5} {}", name, cardinality, predicate);
            }
            out
        }
    }
}
