//! Model-name routing for switchyard.
//!
//! This crate provides:
//! - A [`Provider`](providers::Provider) trait with OpenAI, Azure OpenAI,
//!   Gemini, and Anthropic implementations
//! - A [`ModelRegistry`] that resolves names like `sonnet`, `gpt-4o`, or
//!   `azure/my-deployment` to a qualified model and provider
//! - Environment sources and redacting API key handling
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ModelRegistry                         │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐     │
//! │  │  OpenAI  │  │  Gemini  │  │  Azure   │  │ Anthropic │     │
//! │  └──────────┘  └──────────┘  └──────────┘  └───────────┘     │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Environment                          │
//! │           (process env, in-memory map, or layered)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use switchyard_models::ModelRegistry;
//! use switchyard_models::env::MapEnv;
//!
//! let env = MapEnv::new()
//!     .with("OPENAI_API_KEY", "sk-test")
//!     .with("SMALL_MODEL", "gpt-4o-mini");
//! let registry = ModelRegistry::with_builtin_providers(Arc::new(env));
//!
//! let resolution = registry.resolve("haiku");
//! assert_eq!(resolution.model, "openai/gpt-4o-mini");
//! assert_eq!(resolution.provider_name(), Some("openai"));
//! ```

mod error;
mod types;

pub mod auth;
pub mod env;
pub mod providers;
pub mod registry;

pub use auth::ApiKey;
pub use error::{Error, Result};
pub use registry::{ModelRegistry, Resolution, Route};
pub use types::{
    Alias, DefaultModels, ModelKind, PREFIX_SEPARATOR, qualify, split_prefix, strip_prefix,
};
