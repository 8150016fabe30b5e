//! Output writers for cleaned tables and error reports.

pub mod errors;
pub mod table;

pub use errors::write_error_report;
pub use table::write_table;
