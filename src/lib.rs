pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::Catalog;
pub use crate::core::{
    filter::{CategoryFilter, PartsFilter},
    session::EditingSession,
    store::CustomizationStore,
};
pub use crate::utils::error::{CustomizerError, Result};
