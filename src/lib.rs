//! # Payra
//!
//! Host for the Payra Pay front end. The browser app itself lives in the
//! `payra-ui` package (Leptos, compiled to WebAssembly); this crate serves
//! its build output and answers client-side routes with the SPA shell.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`server`]: Axum router, SPA fallback and health probes

pub mod config;
pub mod logging;
pub mod server;

pub use config::{
    AssetsConfig, Config, ConfigError, LoadedConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use server::{build_router, serve, AppState, ServerError, ServerResult};
