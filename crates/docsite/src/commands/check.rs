//! `docsite check` command implementation.

use clap::Args;
use docsite_paths::{is_valid_path, needs_encoding, normalize_path, suggested_paths};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Route path to check.
    path: String,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let report = PathReport::of(&self.path)?;

        output.field("path", &self.path);
        output.field("normalized", &report.normalized);

        if report.needs_encoding {
            output.warning("Path contains characters that need encoding");
        } else {
            output.success("Path is safe to use as a route");
        }

        output.highlight("Candidates:");
        for candidate in &report.candidates {
            output.data(candidate);
        }

        Ok(())
    }
}

/// Everything `check` prints about one path.
#[derive(Debug, PartialEq)]
struct PathReport {
    normalized: String,
    needs_encoding: bool,
    candidates: Vec<String>,
}

impl PathReport {
    fn of(path: &str) -> Result<Self, CliError> {
        if !is_valid_path(Some(path)) {
            return Err(CliError::Validation("path cannot be empty".to_owned()));
        }

        Ok(Self {
            normalized: normalize_path(path),
            needs_encoding: needs_encoding(path),
            candidates: suggested_paths(Some(path)),
        })
    }
}
