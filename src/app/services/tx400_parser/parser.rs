//! Streaming parse of a TX400 export into a dataset

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::stats::{ParseResult, ParseStats};
use crate::app::models::{ComponentRecord, Dataset, FeederAttributes};
use crate::app::services::rows;
use crate::constants::{
    comp_fields, feeder_fields, COMP_MIN_FIELDS, COMP_TAG, FEEDER_MIN_FIELDS, FEEDER_TAG,
};
use crate::{Error, Result};

/// Parse a TX400 export file into a fresh dataset
///
/// Fails only when the file cannot be opened or the stream cannot be
/// decoded; malformed individual rows are skipped and counted. The file
/// handle is released before this function returns, on every exit path.
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    info!("Parsing TX400 export: {}", path.display());

    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open export file '{}'", path.display()), e)
    })?;

    parse_reader(file, &path.display().to_string())
}

/// Parse a TX400 export stream into a fresh dataset
///
/// `source_name` labels the stream in read-error messages.
pub fn parse_reader<R: Read>(reader: R, source_name: &str) -> Result<ParseResult> {
    let mut dataset = Dataset::new();
    let mut stats = ParseStats::new();

    let mut csv_reader = rows::row_reader(reader);
    for result in csv_reader.records() {
        let record = result.map_err(|e| {
            Error::read(source_name, "failed to decode export stream", Some(e))
        })?;
        stats.rows_read += 1;

        match rows::field(&record, 0) {
            FEEDER_TAG => {
                if record.len() >= FEEDER_MIN_FIELDS {
                    let feeder_id = rows::field(&record, feeder_fields::ID);
                    let comment = rows::field(&record, feeder_fields::COMMENT);
                    // Last write wins for repeated feeder ids
                    dataset.insert_feeder(feeder_id, FeederAttributes::from_comment(comment));
                    stats.feeders_parsed += 1;
                } else {
                    debug!(
                        "Skipped short feeder row at line {}",
                        rows::line_number(&record)
                    );
                    stats.rows_skipped += 1;
                }
            }
            COMP_TAG => {
                if record.len() >= COMP_MIN_FIELDS {
                    dataset.push_component(ComponentRecord::new(
                        rows::field(&record, comp_fields::DESIGNATOR),
                        rows::field(&record, comp_fields::FEEDER_ID),
                        rows::field(&record, comp_fields::FOOTPRINT),
                    ));
                    stats.components_parsed += 1;
                } else {
                    debug!(
                        "Skipped short component row at line {}",
                        rows::line_number(&record)
                    );
                    stats.rows_skipped += 1;
                }
            }
            _ => {
                stats.rows_ignored += 1;
            }
        }
    }

    info!(
        "Parsed {} feeders and {} components from {} rows ({} skipped)",
        stats.feeders_parsed, stats.components_parsed, stats.rows_read, stats.rows_skipped
    );

    Ok(ParseResult { dataset, stats })
}
