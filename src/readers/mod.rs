pub mod cyclone_reader;
pub mod record_parser;

pub use cyclone_reader::{ColumnLayout, CycloneReader};
pub use record_parser::{parse_record, parse_records};
