use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use pdv_cli::logging::{
    LogConfig, LogFormat, REDACTED_VALUE, init_logging_with_writer, redact_value,
};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf-8 logs")
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Installs the global subscriber, so this file holds a single test.
#[test]
fn json_logs_follow_level_and_redact_values() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_env_filter(false)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    init_logging_with_writer(&config, move || writer.clone());

    info!(
        target: "pdv_cli",
        value = redact_value("+7-(923)-123-45-67"),
        "record rejected"
    );
    debug!(target: "pdv_cli", "classification detail");
    info!(target: "other_crate", "outside the workspace");

    let output = logs.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1, "{output}");
    let event: serde_json::Value = serde_json::from_str(lines[0]).expect("json log line");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "record rejected");
    assert_eq!(event["fields"]["value"], REDACTED_VALUE);
    assert!(!output.contains("+7-(923)"));
}
