//! Write evaluation results to CSV

use crate::error::OutputError;
use crate::runner::PopulationResult;
use std::path::Path;

/// Write one CSV row per successful evaluation, in input order
///
/// With `strict` set, any failed record aborts before the file is created,
/// so a partial result set never reaches disk. Otherwise failures are logged
/// and skipped. Returns the number of rows written.
pub fn write_results<P: AsRef<Path>>(
    path: P,
    result: &PopulationResult,
    strict: bool,
) -> Result<usize, OutputError> {
    if strict {
        if let Some(err) = result.errors().next() {
            return Err(err.clone().into());
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    let mut written = 0;
    for outcome in &result.outcomes {
        match outcome {
            Ok(evaluation) => {
                writer.serialize(evaluation)?;
                written += 1;
            }
            Err(err) => log::warn!("skipping record: {}", err),
        }
    }
    writer.flush()?;

    log::debug!("Wrote {} result rows", written);
    Ok(written)
}
