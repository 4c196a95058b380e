//! Provider status command.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use switchyard_models::ModelRegistry;

/// Run providers command.
pub fn run() -> Result<()> {
    let registry = super::build_registry()?;
    println!("{}", providers_table(&registry));
    println!();
    println!("Preferred provider: {}", registry.preferred_provider_name());
    Ok(())
}

fn providers_table(registry: &ModelRegistry) -> Table {
    let preferred = registry.preferred_provider_name();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Provider").fg(Color::Cyan),
        Cell::new("Prefix").fg(Color::Cyan),
        Cell::new("Available").fg(Color::Cyan),
        Cell::new("Big model").fg(Color::Cyan),
        Cell::new("Small model").fg(Color::Cyan),
    ]);

    for name in registry.provider_names() {
        let Some(provider) = registry.provider(&name) else {
            continue;
        };
        let label = if name == preferred {
            format!("{name} *")
        } else {
            name
        };
        let available = if provider.is_available() {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        let defaults = provider.default_models();

        table.add_row(vec![
            Cell::new(label),
            Cell::new(provider.prefix()),
            available,
            Cell::new(&defaults.big),
            Cell::new(&defaults.small),
        ]);
    }

    table
}
