use tp_core::schema::{SCHEMA_NAMES, schema_for_name};

use crate::cli::global::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for_name(&args.name).map_err(|error| {
        anyhow::anyhow!("{error}; known types: {}", SCHEMA_NAMES.join(", "))
    })?;
    output(&schema, flags.format)
}
