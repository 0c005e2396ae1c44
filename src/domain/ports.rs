use crate::domain::model::{Model, Record};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn indent(&self) -> &str;
}

/// Three stages run in order by `EtlEngine`; the first error aborts the run.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, records: Vec<Record>) -> Result<Model>;
    fn load(&self, model: Model) -> Result<String>;
}
