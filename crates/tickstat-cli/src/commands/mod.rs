mod change;
mod summary;

use std::io::{self, Read};

use serde_json::Value;
use tickstat_core::{Envelope, EnvelopeMeta, LoadReport, MismatchPolicy, ObservationDataset};
use tracing::info;
use uuid::Uuid;

use crate::cli::{Cli, Command, InputArgs};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    run_with_stdin(cli, io::stdin().lock())
}

/// Runs the selected command, reading `-` inputs from `stdin`.
fn run_with_stdin<R: Read>(cli: &Cli, stdin: R) -> Result<Envelope<Value>, CliError> {
    let policy = if cli.skip_mismatched {
        MismatchPolicy::Skip
    } else {
        MismatchPolicy::Reject
    };

    let command_result = match &cli.command {
        Command::Summary(args) => summary::run(load(args, policy, stdin)?)?,
        Command::Change(args) => change::run(load(args, policy, stdin)?)?,
    };

    let CommandResult { data, warnings } = command_result;

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), SCHEMA_VERSION)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::success(meta, data))
}

/// Fails with `StrictModeViolation` when `strict` is set and the envelope carries warnings.
pub fn enforce_strict(envelope: &Envelope<Value>, strict: bool) -> Result<(), CliError> {
    if strict && !envelope.meta.warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
        });
    }

    Ok(())
}

fn load<R: Read>(
    args: &InputArgs,
    policy: MismatchPolicy,
    stdin: R,
) -> Result<LoadReport, CliError> {
    let dataset = if args.reads_stdin() {
        ObservationDataset::from_reader(stdin)?
    } else {
        ObservationDataset::from_path(&args.input)?
    };

    info!(
        input = %args.input.display(),
        entries = dataset.observations.len(),
        "loading dataset"
    );
    Ok(dataset.into_collection(policy)?)
}

fn skipped_warnings(report: &LoadReport) -> Vec<String> {
    report
        .skipped
        .iter()
        .map(|skipped| {
            format!(
                "skipped observation #{} for instrument {}",
                skipped.index, skipped.instrument
            )
        })
        .collect()
}
