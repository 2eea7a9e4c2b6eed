//! Personal record validation.
//!
//! [`rules`] holds one pure predicate per record field. [`RecordClassifier`]
//! applies them in the fixed field order and reports the first field that
//! fails, or [`Classification::Valid`] when every rule passes.
//!
//! # Example
//!
//! ```
//! use pdv_model::{Classification, Record, RecordField};
//! use pdv_validate::{RecordClassifier, RuleConfig};
//!
//! let classifier = RecordClassifier::new(
//!     RuleConfig::default().with_occupation_blocklist(["Безработный"]),
//! );
//! let record = Record::builder().telephone("7-923-123-45-67").build();
//! assert_eq!(
//!     classifier.classify(&record),
//!     Classification::Invalid(RecordField::Telephone)
//! );
//! ```

pub mod classifier;
pub mod config;
pub mod rules;

pub use classifier::{RecordClassifier, classify, classify_with};
pub use config::{Alphabet, RuleConfig};
pub use pdv_model::{Classification, Record, RecordField};
