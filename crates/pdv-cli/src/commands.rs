use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use pdv_cli::cli::ValidateArgs;
use pdv_cli::config::build_rule_config;
use pdv_cli::pipeline::{BatchOutcome, classify_batch, default_output_path, progress_bar};
use pdv_ingest::{ReportFormat, read_records, write_report};
use pdv_model::RecordField;
use pdv_validate::{RecordClassifier, rules};
use tracing::{info, info_span};

use crate::summary::apply_table_style;
use crate::types::ValidationRun;

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Field", "Rule"]);
    apply_table_style(&mut table);
    for field in RecordField::all() {
        table.add_row(vec![
            field.index().to_string(),
            field.key().to_string(),
            rules::describe(*field).to_string(),
        ]);
    }
    println!("{table}");
    println!("Code 9: every rule passed.");
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let input = &args.input;
    let validate_span = info_span!("validate", input = %input.display());
    let _validate_guard = validate_span.enter();
    let format = ReportFormat::from(args.format);

    // =========================================================================
    // Stage 1: Configure rules
    // =========================================================================
    let config = build_rule_config(args.config.as_deref(), args.rule_overrides())?;
    let classifier = RecordClassifier::new(config);
    let rule_config = classifier.config();
    info!(
        occupation_blocked = rule_config.occupation_blocklist.len(),
        political_views_blocked = rule_config.political_views_blocklist.len(),
        worldview_blocked = rule_config.worldview_blocklist.len(),
        alphabet = rule_config.alphabet.label(),
        "rules configured"
    );

    // =========================================================================
    // Stage 2: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let records =
        read_records(input).with_context(|| format!("read records: {}", input.display()))?;
    info!(
        record_count = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 3: Classify
    // =========================================================================
    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let progress = progress_bar(records.len() as u64, show_progress);
    let classify_start = Instant::now();
    let BatchOutcome {
        valid_records,
        stats,
    } = classify_batch(records, &classifier, &progress);
    progress.finish_and_clear();
    info!(
        valid = stats.valid(),
        invalid = stats.invalid(),
        duration_ms = classify_start.elapsed().as_millis(),
        "classification complete"
    );

    // =========================================================================
    // Stage 4: Report
    // =========================================================================
    let output = if args.dry_run {
        info!("dry run, report not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input, format));
        write_report(&path, &valid_records, format)
            .with_context(|| format!("write report: {}", path.display()))?;
        Some(path)
    };

    Ok(ValidationRun {
        input: input.clone(),
        output,
        format,
        stats,
    })
}
