use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the rendered JSON. Nothing is returned unless every stage succeeds.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting CSV to JSON conversion");

        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        let model = self.pipeline.transform(records)?;
        tracing::info!("Grouped into {} organizations", model.len());

        let json = self.pipeline.load(model)?;
        tracing::info!("Conversion finished");

        Ok(json)
    }
}
