//! Configuration inspection commands.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::config::ConfigLoader;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration with API keys redacted
    Show,
    /// List where routing settings come from, highest precedence first
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show(),
        ConfigCommands::Path => {
            let table = layers_table(
                ConfigLoader::user_config_path().as_deref(),
                &ConfigLoader::project_config_path(),
            );
            println!("{table}");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = ConfigLoader::load()?.redacted();
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Settings sources in the order a variable is looked up.
fn layers(user: Option<&Path>, project: &Path) -> Vec<(&'static str, String, &'static str)> {
    let file = |path: &Path| {
        let state = if path.exists() { "loaded" } else { "missing" };
        (path.display().to_string(), state)
    };

    let (project_path, project_state) = file(project);
    let (user_path, user_state) = match user {
        Some(path) => file(path),
        None => ("-".to_string(), "unavailable"),
    };

    vec![
        ("environment", "process environment".to_string(), "live"),
        ("project", project_path, project_state),
        ("user", user_path, user_state),
    ]
}

fn layers_table(user: Option<&Path>, project: &Path) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Layer").fg(Color::Cyan),
        Cell::new("Source").fg(Color::Cyan),
        Cell::new("State").fg(Color::Cyan),
    ]);

    for (layer, source, state) in layers(user, project) {
        let state_cell = match state {
            "loaded" | "live" => Cell::new(state).fg(Color::Green),
            _ => Cell::new(state).fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(layer), Cell::new(source), state_cell]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn layers_listed_in_precedence_order() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("config.toml");
        std::fs::write(&project, "[routing]\n").unwrap();
        let user = temp_dir.path().join("user.toml");

        let layers = layers(Some(&user), &project);
        let names: Vec<_> = layers.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, vec!["environment", "project", "user"]);
        assert_eq!(layers[1].2, "loaded");
        assert_eq!(layers[2].2, "missing");
    }

    #[test]
    fn missing_user_dir_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let layers = layers(None, &temp_dir.path().join("config.toml"));
        assert_eq!(layers[2], ("user", "-".to_string(), "unavailable"));
    }

    #[test]
    fn layers_table_shows_every_layer() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("config.toml");

        let rendered = layers_table(None, &project).to_string();
        assert!(rendered.contains("environment"));
        assert!(rendered.contains("project"));
        assert!(rendered.contains("unavailable"));
    }
}
