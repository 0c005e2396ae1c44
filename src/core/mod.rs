pub mod aggregator;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{Model, Organization, Record, Role, User};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
