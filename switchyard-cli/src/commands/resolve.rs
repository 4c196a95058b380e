//! Model-name resolution command.

use anyhow::{Result, bail};
use clap::Args;
use switchyard_models::providers::CompletionRequest;
use switchyard_models::{ModelRegistry, Route};
use tracing::debug;

/// Resolve arguments.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Model name (e.g., sonnet, gpt-4o, azure/my-deployment)
    pub model: String,

    /// Print the configured request as JSON (API key redacted)
    #[arg(long)]
    pub json: bool,
}

/// Run resolve command.
pub fn run(args: ResolveArgs) -> Result<()> {
    let registry = super::build_registry()?;
    println!("{}", render(&registry, &args.model, args.json)?);
    Ok(())
}

fn render(registry: &ModelRegistry, model: &str, json: bool) -> Result<String> {
    let resolution = registry.resolve(model);
    debug!(?resolution, "resolved model");

    let Some(provider) = resolution.provider.as_ref() else {
        bail!(
            "no provider available for '{}'; set credentials for one of: {}",
            model,
            registry.provider_names().join(", ")
        );
    };

    if json {
        let request = resolution.configure(CompletionRequest::new(model))?;
        return Ok(serde_json::to_string_pretty(&request.to_redacted_value()?)?);
    }

    let route = match resolution.route {
        Route::Explicit => "explicit prefix",
        Route::Alias => "alias via preferred provider",
        Route::Fallback => "first available provider",
        Route::Unresolved => "unresolved",
    };
    Ok(format!(
        "Model:    {}\nProvider: {}\nRoute:    {}",
        resolution.model,
        provider.name(),
        route
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use switchyard_models::env::MapEnv;

    fn azure_registry() -> ModelRegistry {
        let env = MapEnv::new()
            .with("PREFERRED_PROVIDER", "azure")
            .with("AZURE_OPENAI_API_KEY", "az-secret")
            .with("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com");
        ModelRegistry::with_builtin_providers(Arc::new(env))
    }

    #[test]
    fn renders_plain_summary() {
        let out = render(&azure_registry(), "sonnet", false).unwrap();
        assert!(out.contains("Model:    azure/gpt-4o"));
        assert!(out.contains("Provider: azure"));
        assert!(out.contains("alias via preferred provider"));
    }

    #[test]
    fn renders_redacted_request_json() {
        let out = render(&azure_registry(), "haiku", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["model"], "azure/gpt-4o-mini");
        assert_eq!(value["api_key"], "[REDACTED]");
        assert_eq!(value["api_version"], "2024-10-21");
        assert!(!out.contains("az-secret"));
    }

    #[test]
    fn unresolved_model_is_an_error() {
        let registry = ModelRegistry::with_builtin_providers(Arc::new(MapEnv::new()));
        let err = render(&registry, "sonnet", false).unwrap_err();
        assert!(err.to_string().contains("no provider available"));
    }
}
