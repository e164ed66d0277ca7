// src/config/mod.rs

//! Configuration loading and validation for wordlist-feeder.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file and merge CLI flags over it (`loader.rs`).
//! - Validate it into an immutable `FeederConfig` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{env_shell, load_from_path, resolve};
pub use model::{FeederConfig, FeederSection, RawConfigFile};
