pub mod choice;
pub mod datetime;
pub mod engine;
pub mod normalize;
pub mod numeric;
pub mod taxid;

pub use choice::validate_choice;
pub use datetime::{DateOutput, validate_date};
pub use engine::{ProcessOutcome, RowEngine};
pub use normalize::{NULL_SENTINELS, clean_null, normalize_diacritics};
pub use numeric::{validate_float, validate_integer};
pub use taxid::clean_tax_id;
