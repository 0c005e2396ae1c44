// Adapters layer: concrete codecs at the edges of the pipeline.

pub mod csv_reader;
pub mod json_writer;

pub use csv_reader::read_records;
pub use json_writer::to_json;
