//! Record file reading.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::WINDOWS_1251;
use pdv_model::Record;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum input file size (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read all records from a JSON file.
///
/// The file holds either a top-level array of record objects, or an object
/// with exactly one array-valued key (for example `{"data": [...]}`).
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    read_records_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Read records, rejecting files larger than `max_size` bytes.
pub fn read_records_with_limit(path: &Path, max_size: u64) -> Result<Vec<Record>> {
    check_file_size_with_limit(path, max_size)?;
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
    let text = decode_input(&bytes, path)?;
    parse_records(&text, path)
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn read_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Decode raw file bytes to text.
///
/// UTF-8 is expected and a UTF-8 BOM is stripped. UTF-16 files are rejected.
/// Anything else that is not valid UTF-8 is treated as a legacy Windows-1251
/// export.
pub fn decode_input<'a>(bytes: &'a [u8], path: &Path) -> Result<Cow<'a, str>> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            let (decoded, had_errors) = WINDOWS_1251.decode_without_bom_handling(body);
            warn!(
                path = %path.display(),
                had_errors,
                "input is not valid UTF-8, decoded as Windows-1251"
            );
            Ok(decoded)
        }
    }
}

/// Parse records from JSON text. `path` is only used in error messages.
pub fn parse_records(text: &str, path: &Path) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = record_list(value, path)?;
    debug!(
        path = %path.display(),
        record_count = items.len(),
        "record list located"
    );

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Record::from_value(item).map_err(|source| IngestError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

fn record_list(value: Value, path: &Path) -> Result<Vec<Value>> {
    let layout_error = |reason: String| IngestError::UnexpectedLayout {
        path: path.to_path_buf(),
        reason,
    };

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => {
            let mut lists = map.into_iter().filter(|(_, value)| value.is_array());
            match (lists.next(), lists.next()) {
                (Some((key, Value::Array(items))), None) => {
                    debug!(key = %key, "records read from wrapping object");
                    Ok(items)
                }
                (None, _) => Err(layout_error(
                    "top-level object has no list of records".to_string(),
                )),
                _ => Err(layout_error(
                    "top-level object has more than one list".to_string(),
                )),
            }
        }
        other => Err(layout_error(format!(
            "expected a list of records, found {}",
            match other {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                _ => "string",
            }
        ))),
    }
}
