pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, Validate, CSV_EXTENSION};
#[cfg(feature = "cli")]
use clap::Parser;

/// Two spaces per nesting level.
pub const DEFAULT_INDENT: &str = "  ";

pub const MISSING_FILENAME_PROMPT: &str = "you must provide the name of a .csv file";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "org-roles-etl")]
#[command(about = "Group organization,user,role CSV rows into nested JSON")]
pub struct CliConfig {
    /// CSV file, relative to the current directory
    pub filename: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let filename = self.filename.as_deref().unwrap_or_default();
        validate_path("filename", filename)?;
        validate_file_extension(filename, CSV_EXTENSION)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        self.filename.as_deref().unwrap_or_default()
    }

    fn indent(&self) -> &str {
        DEFAULT_INDENT
    }
}
