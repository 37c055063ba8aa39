//! Implementation of the `kickstart templates` command.

use serde_json::json;

use kickstart_core::domain::TEMPLATE_REGISTRY;

use crate::{
    cli::{ListFormat, TemplatesArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for def in TEMPLATE_REGISTRY {
                output.print(&format!(
                    "  {:<12} {:<26} {}",
                    def.name,
                    def.seeder_class,
                    def.description
                ))?;
            }
        }

        // JSON must stay parseable in pipes, so it bypasses quiet mode.
        ListFormat::Json => {
            let rows: Vec<_> = TEMPLATE_REGISTRY
                .iter()
                .map(|def| {
                    json!({
                        "name": def.name,
                        "seeder": def.seeder_class,
                        "description": def.description,
                    })
                })
                .collect();
            output.json(&rows)?;
        }

        ListFormat::List => {
            for def in TEMPLATE_REGISTRY {
                output.print(def.name)?;
            }
        }
    }

    Ok(())
}
