// Pure transformation services
pub mod error_classifier;
pub mod field_validator;
pub mod payload_formatter;

pub use error_classifier::*;
pub use field_validator::*;
pub use payload_formatter::*;
