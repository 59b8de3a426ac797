//! Delimited file loading.

mod csv_loader;
mod options;

pub use csv_loader::CsvLoader;
pub use options::LoadOptions;
