use tickstat_core::LoadReport;

use crate::error::CliError;

use super::{skipped_warnings, CommandResult};

pub fn run(report: LoadReport) -> Result<CommandResult, CliError> {
    let warnings = skipped_warnings(&report);
    let data = serde_json::to_value(report.collection.summary())?;

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
