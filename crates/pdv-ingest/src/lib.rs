//! Personal record ingestion and report output.
//!
//! # Features
//!
//! - **Record Loading**: Read a JSON list of records, with UTF-8 BOM
//!   handling and a Windows-1251 fallback for legacy exports
//! - **Layout Detection**: Accept a bare array or an object wrapping one array
//! - **Reports**: Write valid records as JSON, CSV or plain text
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pdv_ingest::{ReportFormat, read_records, write_report};
//!
//! let records = read_records(Path::new("records.json"))?;
//! write_report(Path::new("valid.json"), &records, ReportFormat::Json)?;
//! ```

mod error;
mod reader;
mod report;

// === Error Types ===
pub use error::{IngestError, Result};

// === Record Reading ===
pub use reader::{
    MAX_INPUT_FILE_SIZE, check_file_size_with_limit, decode_input, parse_records, read_records,
    read_records_with_limit,
};

// === Report Output ===
pub use report::{ReportFormat, TEXT_SEPARATOR, format_record_line, render_report, write_report};
