//! Reading and reshaping of raw agency exports.

pub mod concat;
pub mod header;
pub mod reader;

pub use concat::{clean_float_artifact, concat_tables};
pub use header::{normalize_column_name, reorganize_table};
pub use reader::read_table;
