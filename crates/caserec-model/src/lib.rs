pub mod error;
pub mod mapping;
pub mod options;
pub mod record;
pub mod schema;
pub mod table;
pub mod vocabulary;

pub use error::{CaserecError, Result};
pub use mapping::{FieldType, TypeMapping};
pub use options::{ChoiceValidity, DatetimeLeniency, ValidationOptions};
pub use record::{ErrorRecord, PROCESSING_TYPE, STRUCTURAL_TYPE};
pub use schema::SchemaConfig;
pub use table::Table;
pub use vocabulary::{CaseFold, Vocabulary, VocabularyRegistry};
