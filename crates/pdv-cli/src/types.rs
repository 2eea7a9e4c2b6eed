use std::path::PathBuf;

use pdv_ingest::ReportFormat;
use pdv_model::ValidationStats;

#[derive(Debug)]
pub struct ValidationRun {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    pub stats: ValidationStats,
}
