//! CLI library components for the case-record cleaner.

pub mod logging;
pub mod pipeline;
