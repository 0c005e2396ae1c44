pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, DEFAULT_INDENT};
pub use core::{
    aggregator::{aggregate, Aggregator},
    etl::EtlEngine,
    pipeline::{parse_csv_to_json, CsvJsonPipeline},
    Model, Organization, Record, User,
};
pub use utils::error::{EtlError, Result};
