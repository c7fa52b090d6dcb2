//! Form schema model
//!
//! The editor hands over an untyped `serde_json::Value`. Nothing in it is
//! trusted: [`FormSchema::from_value`] narrows it field by field, and any
//! part with the wrong shape degrades to a default instead of failing.
//!
//! ## Usage
//!
//! ```rust
//! use form_contracts::schema::{decode_schema_text, FormSchema};
//!
//! let value = decode_schema_text(r#"{"formTitle": "Hi", "fields": []}"#).unwrap();
//! let schema = FormSchema::from_value(&value).unwrap();
//! assert_eq!(schema.title, "Hi");
//! ```

mod decode;
mod field_type;
mod option;
mod types;
mod validation;

pub use decode::{decode_schema_text, format_schema, reformat_schema_text};
pub use field_type::FieldType;
pub use option::{normalize_option, ChoiceOption};
pub use types::{Field, FormSchema};
pub use validation::FieldValidation;
