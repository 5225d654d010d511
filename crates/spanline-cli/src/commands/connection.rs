//! Connection command implementation.

use crate::cli::ConnectionArgs;
use crate::error::Result;
use crate::fixture::ConnectionFixture;
use crate::output::Formatter;
use spanline_gatekeeper::{ConnectionConstraintService, ConstraintConfig, ValidationResult};

/// Execute the connection command.
///
/// Returns whether the candidate may be written.
pub fn execute_connection(args: ConnectionArgs, formatter: &Formatter) -> Result<bool> {
    let config = match &args.config {
        Some(path) => ConstraintConfig::load(path)?,
        None => ConstraintConfig::default(),
    };
    let fixture = ConnectionFixture::load(&args.fixture)?;

    let result = check_fixture(&fixture, config, args.constraint.as_deref())?;
    println!("{}", formatter.format_verdict(&fixture.candidate, &result)?);

    Ok(result.valid)
}

/// Validate a fixture's candidate against its existing connections.
pub fn check_fixture(
    fixture: &ConnectionFixture,
    config: ConstraintConfig,
    constraint: Option<&str>,
) -> Result<ValidationResult> {
    let service = ConnectionConstraintService::new(config);
    let lookup = fixture.lookup();

    let result = match constraint {
        Some(constraint) => service.validate_constraint(&lookup, &fixture.candidate, constraint)?,
        None => service.validate_connection(&lookup, &fixture.candidate)?,
    };
    Ok(result)
}
