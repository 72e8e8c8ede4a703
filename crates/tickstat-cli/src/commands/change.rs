use serde_json::json;
use tickstat_core::LoadReport;

use crate::error::CliError;

use super::{skipped_warnings, CommandResult};

pub fn run(report: LoadReport) -> Result<CommandResult, CliError> {
    let warnings = skipped_warnings(&report);
    let collection = &report.collection;

    let data = json!({
        "instrument": serde_json::to_value(collection.instrument())?,
        "observations": collection.len(),
        "biggest_change": serde_json::to_value(collection.biggest_change())?,
    });

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
