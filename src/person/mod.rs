//! Individual records and CSV loading

mod data;
pub mod loader;

pub use data::IndividualRecord;
pub use loader::{load_records, load_records_from_reader};
