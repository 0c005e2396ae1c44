use crate::adapters::{read_records, to_json};
use crate::core::aggregator::aggregate;
use crate::core::{ConfigProvider, Model, Pipeline, Record, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, CSV_EXTENSION};

/// Reads one CSV file through `Storage`, groups it and renders JSON.
pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_file();

        // extension is checked before the file is opened
        validate_file_extension(path, CSV_EXTENSION)?;

        tracing::debug!("Reading {}", path);
        let raw = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", raw.len());

        read_records(raw.trim_ascii())
    }

    fn transform(&self, records: Vec<Record>) -> Result<Model> {
        aggregate(records)
    }

    fn load(&self, model: Model) -> Result<String> {
        let json = to_json(&model, self.config.indent())?;
        tracing::debug!("Rendered {} organizations ({} bytes)", model.len(), json.len());
        Ok(json)
    }
}

/// The whole transform on in-memory CSV text.
pub fn parse_csv_to_json(content: &str, indent_unit: &str) -> Result<String> {
    let records = read_records(content)?;
    let model = aggregate(records)?;
    to_json(&model, indent_unit)
}
