//! Load individual records from CSV
//!
//! Column names follow the German field names of the input extract.
//! `rentenwert` and `zugangsfaktor` are optional; the rule set's point value
//! and a factor of 1.0 fill them in.

use super::IndividualRecord;
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "p_id")]
    person_id: u64,
    #[serde(rename = "grundrentenzeiten")]
    qualifying_months: u32,
    #[serde(rename = "grundrentenbewertungszeiten")]
    valuation_months: u32,
    #[serde(rename = "entgeltpunkte_grundrente")]
    grundrente_points: f64,
    #[serde(rename = "rentenwert", default)]
    pension_point_value: Option<f64>,
    #[serde(rename = "zugangsfaktor", default)]
    access_factor: Option<f64>,
    #[serde(rename = "bruttolohn_m")]
    gross_wage: f64,
    #[serde(rename = "rente_anspr_m")]
    existing_pension: f64,
}

impl CsvRow {
    fn into_record(self, default_point_value: f64) -> IndividualRecord {
        IndividualRecord {
            person_id: self.person_id,
            qualifying_months: self.qualifying_months,
            valuation_months: self.valuation_months,
            grundrente_points: self.grundrente_points,
            pension_point_value: self.pension_point_value.unwrap_or(default_point_value),
            access_factor: self.access_factor.unwrap_or(1.0),
            gross_wage: self.gross_wage,
            existing_pension: self.existing_pension,
        }
    }
}

/// Load all records from a CSV file
pub fn load_records<P: AsRef<Path>>(
    path: P,
    default_point_value: f64,
) -> Result<Vec<IndividualRecord>, LoadError> {
    let reader = Reader::from_path(path)?;
    read_records(reader, default_point_value)
}

/// Load records from any reader (e.g., string buffer, network stream)
pub fn load_records_from_reader<R: std::io::Read>(
    reader: R,
    default_point_value: f64,
) -> Result<Vec<IndividualRecord>, LoadError> {
    read_records(Reader::from_reader(reader), default_point_value)
}

fn read_records<R: std::io::Read>(
    mut reader: Reader<R>,
    default_point_value: f64,
) -> Result<Vec<IndividualRecord>, LoadError> {
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let record = row.into_record(default_point_value);
        record
            .validate()
            .map_err(|reason| LoadError::InvalidRecord { row: idx + 1, reason })?;

        if !record.has_consistent_months() {
            log::warn!(
                "person {}: valuation months ({}) exceed qualifying months ({})",
                record.person_id,
                record.valuation_months,
                record.qualifying_months
            );
        }
        records.push(record);
    }

    log::debug!("Loaded {} records", records.len());
    Ok(records)
}
