//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use spanline_domain::ConnectionSnapshot;
use spanline_gatekeeper::ValidationResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Outcome of checking one date record.
#[derive(Debug, Clone, Serialize)]
pub struct DateReport {
    /// Record identity
    pub id: String,
    /// Rendered range, when it could be built
    pub range: Option<String>,
    /// Whether the record may be written
    pub valid: bool,
    /// Why the record was rejected
    pub error: Option<String>,
    /// Earliest instant of the start
    pub normalized_start: Option<String>,
    /// Latest instant of the end
    pub normalized_end: Option<String>,
}

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format date record reports.
    pub fn format_date_reports(&self, reports: &[DateReport]) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            CliFormat::Table => Ok(self.format_date_table(reports)),
            CliFormat::Quiet => Ok(reports
                .iter()
                .filter(|r| !r.valid)
                .map(|r| r.id.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_date_table(&self, reports: &[DateReport]) -> String {
        if reports.is_empty() {
            return self.warning("No records found.");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Range", "Start", "End", "Status"]);

        for report in reports {
            let status = if report.valid {
                "ok".to_string()
            } else {
                report.error.clone().unwrap_or_else(|| "invalid".to_string())
            };
            builder.push_record([
                &report.id[..8], // Truncate ID for readability
                report.range.as_deref().unwrap_or("-"),
                report.normalized_start.as_deref().unwrap_or("-"),
                report.normalized_end.as_deref().unwrap_or("present"),
                &status,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a constraint verdict for a candidate connection.
    pub fn format_verdict(&self, candidate: &ConnectionSnapshot, result: &ValidationResult) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "connection": candidate.connection.id.to_string(),
                "relation_type": candidate.connection.relation_type,
                "valid": result.valid,
                "error": result.error,
                "conflicting": result.conflicting.map(|id| id.to_string()),
            }))?),
            CliFormat::Table if result.valid => Ok(self.success(&format!(
                "{} connection {} may be written",
                candidate.connection.relation_type, candidate.connection.id
            ))),
            CliFormat::Table => {
                let mut message = result.error.clone().unwrap_or_else(|| "Connection rejected".to_string());
                if let Some(conflicting) = result.conflicting {
                    message.push_str(&format!(" ({})", conflicting));
                }
                Ok(self.error(&message))
            }
            CliFormat::Quiet if result.valid => Ok(String::new()),
            CliFormat::Quiet => Ok(candidate.connection.id.to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanline_domain::{Connection, SpanId};
    use spanline_gatekeeper::OVERLAP_MESSAGE;

    fn report(valid: bool) -> DateReport {
        DateReport {
            id: "0192f0a0-0000-7000-8000-000000000001".to_string(),
            range: valid.then(|| "1978 – 1994-09".to_string()),
            valid,
            error: (!valid).then(|| "Invalid range".to_string()),
            normalized_start: Some("1978-01-01".to_string()),
            normalized_end: None,
        }
    }

    fn candidate() -> ConnectionSnapshot {
        ConnectionSnapshot::undated(Connection::new(SpanId::new(), SpanId::new(), "residence"))
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(CliFormat::Table, false);
        let output = formatter.format_date_reports(&[report(true), report(false)]).unwrap();
        assert!(output.contains("Range"));
        assert!(output.contains("1978 – 1994-09"));
        assert!(output.contains("Invalid range"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(CliFormat::Json, false);
        let output = formatter.format_date_reports(&[report(true)]).unwrap();
        assert!(output.contains("\"normalized_start\": \"1978-01-01\""));
    }

    #[test]
    fn test_quiet_format_lists_failures() {
        let formatter = Formatter::new(CliFormat::Quiet, false);
        let output = formatter.format_date_reports(&[report(true)]).unwrap();
        assert!(output.is_empty());

        let output = formatter.format_date_reports(&[report(false)]).unwrap();
        assert_eq!(output, "0192f0a0-0000-7000-8000-000000000001");
    }

    #[test]
    fn test_empty_reports() {
        let formatter = Formatter::new(CliFormat::Table, false);
        let output = formatter.format_date_reports(&[]).unwrap();
        assert!(output.contains("No records found"));
    }

    #[test]
    fn test_rejected_verdict() {
        let formatter = Formatter::new(CliFormat::Table, false);
        let result = ValidationResult::invalid(OVERLAP_MESSAGE, None);
        let output = formatter.format_verdict(&candidate(), &result).unwrap();
        assert_eq!(output, format!("✗ {}", OVERLAP_MESSAGE));
    }

    #[test]
    fn test_json_verdict() {
        let formatter = Formatter::new(CliFormat::Json, false);
        let output = formatter.format_verdict(&candidate(), &ValidationResult::valid()).unwrap();
        assert!(output.contains("\"valid\": true"));
        assert!(output.contains("\"relation_type\": \"residence\""));
    }
}
