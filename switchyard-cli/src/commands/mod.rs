pub mod config;
pub mod models;
pub mod providers;
pub mod resolve;

use std::sync::Arc;

use anyhow::Result;
use switchyard_models::ModelRegistry;
use switchyard_models::env::{LayeredEnv, ProcessEnv};

use crate::config::{ConfigLoader, SwitchyardConfig};

/// Build the registry from the process environment layered over config files.
///
/// Environment variables always win over values from config files.
pub fn build_registry() -> Result<ModelRegistry> {
    let config = ConfigLoader::load()?;
    Ok(registry_from_config(&config))
}

fn registry_from_config(config: &SwitchyardConfig) -> ModelRegistry {
    let env = LayeredEnv::new().layer(ProcessEnv).layer(config.to_env());
    ModelRegistry::with_builtin_providers(Arc::new(env))
}
