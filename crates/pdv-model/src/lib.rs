//! Data model for personal record validation.
//!
//! A [`Record`] carries the nine fields of one subject as they were read
//! from the source file. Classifying a record yields a [`Classification`],
//! and a batch of classifications is tallied in [`ValidationStats`].

pub mod classification;
pub mod error;
pub mod field;
pub mod record;
pub mod stats;
pub mod value;

pub use classification::Classification;
pub use error::{ModelError, Result};
pub use field::RecordField;
pub use record::{Record, RecordBuilder};
pub use stats::ValidationStats;
pub use value::FieldValue;
