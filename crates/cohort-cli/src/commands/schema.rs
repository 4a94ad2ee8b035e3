use anyhow::Context;
use cohort_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `cohort schema [TYPE]`. Without a type, lists registered names.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    output(&lookup(&registry, args.type_name.as_deref())?, flags.format)
}

fn lookup(registry: &SchemaRegistry, type_name: Option<&str>) -> anyhow::Result<serde_json::Value> {
    let Some(name) = type_name else {
        return Ok(serde_json::json!(registry.list()));
    };

    let normalized = name.trim().replace('-', "_");
    registry.get(&normalized).cloned().with_context(|| {
        format!(
            "unknown schema '{name}', expected one of: {}",
            registry.list().join(", ")
        )
    })
}
