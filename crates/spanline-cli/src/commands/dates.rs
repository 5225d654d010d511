//! Dates command implementation.

use crate::cli::DatesArgs;
use crate::error::Result;
use crate::fixture::load_date_records;
use crate::output::{DateReport, Formatter};
use spanline_domain::DateRecord;
use spanline_gatekeeper::TemporalService;

/// Execute the dates command.
///
/// Returns whether every record passed.
pub fn execute_dates(args: DatesArgs, formatter: &Formatter) -> Result<bool> {
    let records = load_date_records(&args.file)?;
    tracing::debug!(count = records.len(), file = %args.file.display(), "Loaded date records");

    let service = TemporalService::new();
    let reports: Vec<DateReport> = records
        .iter()
        .map(|record| check_record(&service, record, args.strict_precision))
        .collect();

    println!("{}", formatter.format_date_reports(&reports)?);

    Ok(reports.iter().all(|r| r.valid))
}

/// Check one record and describe the outcome.
pub fn check_record(service: &TemporalService, record: &DateRecord, strict_precision: bool) -> DateReport {
    let (range, error) = match service.range_for(record) {
        Ok(range) => (Some(range.to_string()), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let mut valid = service.validate_dates(record);
    let mut error = error;
    if valid && strict_precision && !service.validate_precisions(record) {
        valid = false;
        error = Some("End precision is finer than start precision".to_string());
    }

    DateReport {
        id: record.id.to_string(),
        range,
        valid,
        error,
        normalized_start: service.normalized_start(record).ok().map(|d| d.to_string()),
        normalized_end: service.normalized_end(record).ok().flatten().map(|d| d.to_string()),
    }
}
