//! Valid-record report output.

use std::fmt;
use std::path::Path;

use pdv_model::{Record, RecordField};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{IngestError, Result};

/// Separator between field values in the text report.
pub const TEXT_SEPARATOR: &str = " | ";

/// Output format for the valid-record report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON array, same keys as the input.
    #[default]
    Json,
    /// Header row plus one row per record.
    Csv,
    /// One line per record, values joined by [`TEXT_SEPARATOR`].
    Text,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Text => "text",
        })
    }
}

/// Write `records` to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, records: &[Record], format: ReportFormat) -> Result<()> {
    let rendered = render_report(records, format)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, rendered).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        format = %format,
        "report written"
    );
    Ok(())
}

/// Render `records` in the given format.
pub fn render_report(records: &[Record], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => render_json(records),
        ReportFormat::Csv => render_csv(records),
        ReportFormat::Text => Ok(render_text(records)),
    }
}

fn render_json(records: &[Record]) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(records).map_err(|err| IngestError::Serialize {
            format: ReportFormat::Json,
            message: err.to_string(),
        })?;
    rendered.push('\n');
    Ok(rendered)
}

fn render_csv(records: &[Record]) -> Result<String> {
    let csv_error = |message: String| IngestError::Serialize {
        format: ReportFormat::Csv,
        message,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(RecordField::all().iter().map(|field| field.key()))
        .map_err(|err| csv_error(err.to_string()))?;
    for record in records {
        writer
            .write_record(record.values().map(|(_, value)| value.to_string()))
            .map_err(|err| csv_error(err.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv_error(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| csv_error(err.to_string()))
}

fn render_text(records: &[Record]) -> String {
    let mut rendered = String::new();
    for record in records {
        rendered.push_str(&format_record_line(record));
        rendered.push('\n');
    }
    rendered
}

/// One report line: every field value in validation order.
pub fn format_record_line(record: &Record) -> String {
    record
        .values()
        .map(|(_, value)| value.to_string())
        .collect::<Vec<_>>()
        .join(TEXT_SEPARATOR)
}
