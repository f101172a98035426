//! Shared types, error model, and configuration for categorytree.
//!
//! This crate is the foundation depended on by all other categorytree crates.
//! It provides:
//! - [`CategoryTreeError`] — the unified error type
//! - Domain types ([`RawCategory`], [`DisplayCategory`], [`CategoriesResponse`])
//! - Configuration ([`AppConfig`], [`HomeConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    ApiConfig, AppConfig, DEFAULT_CATEGORIES_TO_SHOW, HomeConfig, MAX_CATEGORIES_TO_SHOW,
    config_dir, config_file_path, init_config, load_config, load_config_from,
    validate_home_config,
};
pub use error::{CategoryTreeError, Result};
pub use types::{CategoriesResponse, DisplayCategory, RawCategory};
