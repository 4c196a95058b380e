//! Supported model listing.

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use switchyard_models::ModelRegistry;

/// Models listing arguments.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Only list models for this provider
    #[arg(long)]
    pub provider: Option<String>,
}

/// Run models command.
pub fn run(args: ModelsArgs) -> Result<()> {
    let registry = super::build_registry()?;
    println!("{}", models_table(&registry, args.provider.as_deref())?);
    Ok(())
}

fn models_table(registry: &ModelRegistry, provider: Option<&str>) -> Result<Table> {
    let grouped: Vec<(String, Vec<String>)> = match provider {
        Some(name) => vec![(name.to_string(), registry.supported_models_for(name)?)],
        None => registry
            .provider_names()
            .into_iter()
            .filter_map(|name| {
                let models = registry.supported_models_for(&name).ok()?;
                Some((name, models))
            })
            .collect(),
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Provider").fg(Color::Cyan),
        Cell::new("Model").fg(Color::Cyan),
    ]);

    for (name, models) in grouped {
        for model in models {
            table.add_row(vec![Cell::new(&name), Cell::new(model)]);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use switchyard_models::env::MapEnv;

    fn registry() -> ModelRegistry {
        ModelRegistry::with_builtin_providers(Arc::new(MapEnv::new()))
    }

    #[test]
    fn lists_every_provider_by_default() {
        let rendered = models_table(&registry(), None).unwrap().to_string();
        assert!(rendered.contains("o3-mini"));
        assert!(rendered.contains("gpt-35-turbo"));
        assert!(rendered.contains("claude-3-opus-20240229"));
    }

    #[test]
    fn filters_by_provider() {
        let rendered = models_table(&registry(), Some("gemini")).unwrap().to_string();
        assert!(rendered.contains("gemini-2.0-flash"));
        assert!(!rendered.contains("gpt-4o"));
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = models_table(&registry(), Some("mistral")).unwrap_err();
        assert!(err.to_string().contains("provider not found: mistral"));
    }
}
