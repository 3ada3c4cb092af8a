pub mod csv_table;
pub mod delimiter;
pub mod error;

pub use csv_table::{CsvTable, read_csv_table};
pub use delimiter::Delimiter;
pub use error::{IngestError, Result};
