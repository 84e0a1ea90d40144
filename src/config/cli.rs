use crate::config::catalog::Catalog;
use crate::core::export::OutputFormat;
use crate::domain::model::PartId;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "moto-customizer")]
#[command(about = "Customize a motorcycle with aftermarket parts and see the resulting specs")]
pub struct CliConfig {
    /// TOML catalog to use instead of the built-in lineup
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List brands, models and engines
    Catalog,

    /// Browse parts the way the parts panel filters them
    Parts {
        #[arg(long)]
        model: Option<String>,

        /// Category display name, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        #[arg(long, default_value = "")]
        search: String,
    },

    /// Configure a bike and print its specs and bill of materials
    Build {
        #[arg(long)]
        brand: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        engine: Option<String>,

        /// Part ids to attach, in order
        #[arg(long, value_delimiter = ',')]
        attach: Vec<PartId>,

        /// Part ids to remove after attaching
        #[arg(long, value_delimiter = ',')]
        remove: Vec<PartId>,

        /// Part id to highlight at the end
        #[arg(long)]
        select: Option<PartId>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl CliConfig {
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => {
                let catalog = Catalog::from_file(path)?;
                catalog.validate()?;
                Ok(catalog)
            }
            None => Catalog::builtin(),
        }
    }
}
