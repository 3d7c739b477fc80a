pub mod cyclone;
pub mod raw_record;
pub mod track;

pub use cyclone::{ParsedRecord, Timestamp};
pub use raw_record::RawRecord;
pub use track::TrackPoint;
