//! TX400 export validator
//!
//! Strict, exhaustive second pass over an export, independent of the
//! lenient parser. The validator is the sole authority on whether a file
//! may be registered into the catalog; the parser loads whatever it can
//! regardless.
//!
//! Both passes share only the row tokenizer in
//! [`crate::app::services::rows`]. Their accept/reject policies differ on
//! purpose and must not be unified: the parser silently drops the same
//! incomplete rows this pass flags.
//!
//! A validation pass never fails: stream-level errors are translated into
//! report entries, and the caller always receives a [`ValidationReport`].

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::ValidationReport;
use crate::app::services::rows;
use crate::constants::{
    comp_fields, feeder_fields, COMP_MIN_FIELDS, COMP_TAG, FEEDER_MIN_FIELDS, FEEDER_TAG,
};

#[cfg(test)]
pub mod tests;

/// Validate a TX400 export file
///
/// An open failure becomes the report's single entry rather than an error;
/// the file handle, when obtained, is released before returning.
pub fn validate_file(path: &Path) -> ValidationReport {
    info!("Validating TX400 export: {}", path.display());

    match File::open(path) {
        Ok(file) => validate_reader(file),
        Err(e) => {
            let mut report = ValidationReport::new();
            report.push(format!(
                "Erro ao abrir '{}': {}",
                path.display(),
                e
            ));
            report
        }
    }
}

/// Validate a TX400 export stream
///
/// Produces line-tagged errors in scan order, followed by whole-file checks
/// (at least one feeder, at least one component, referential integrity of
/// every component's feeder id — one entry per offending reference,
/// duplicates included).
pub fn validate_reader<R: Read>(reader: R) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut known_feeders: HashSet<String> = HashSet::new();
    let mut component_refs: Vec<String> = Vec::new();

    let mut csv_reader = rows::row_reader(reader);
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                // Decode failure mid-stream: record it and stop, skipping
                // the whole-file checks the partial scan cannot support
                report.push(e.to_string());
                return report;
            }
        };

        let line = rows::line_number(&record);
        match rows::field(&record, 0) {
            FEEDER_TAG => {
                if record.len() < FEEDER_MIN_FIELDS {
                    report.push(format!("Linha {}: Feeder incompleto", line));
                } else {
                    known_feeders.insert(rows::field(&record, feeder_fields::ID).to_string());
                }
            }
            COMP_TAG => {
                if record.len() < COMP_MIN_FIELDS {
                    report.push(format!("Linha {}: Comp incompleto", line));
                    continue;
                }

                let feeder_id = rows::field(&record, comp_fields::FEEDER_ID);
                if feeder_id.is_empty() {
                    report.push(format!("Linha {}: Feeder ID vazio", line));
                }
                if rows::field(&record, comp_fields::DESIGNATOR).is_empty() {
                    report.push(format!("Linha {}: Designator vazio", line));
                }

                // Queued for the referential check even when empty
                component_refs.push(feeder_id.to_string());
            }
            _ => {}
        }
    }

    if known_feeders.is_empty() {
        report.push("Nenhum Feeder encontrado");
    }
    if component_refs.is_empty() {
        report.push("Nenhum componente encontrado");
    }

    for feeder_id in &component_refs {
        if !known_feeders.contains(feeder_id) {
            report.push(format!("Feeder ID inexistente: {}", feeder_id));
        }
    }

    debug!("Validation produced {} error(s)", report.len());
    report
}
