use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::record::{MenuItemRecord, PricingTier, UnknownTierError};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read dataset row {row}: {source}")]
    Row { row: usize, source: csv::Error },
    #[error(transparent)]
    UnknownTier(#[from] UnknownTierError),
}

/// Raw CSV row as it appears in the source file. Pricing stays a string here
/// so an unknown tier surfaces as `UnknownTierError` instead of a serde
/// error.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Type of Food")]
    food_type: String,
    #[serde(rename = "Event Type")]
    event_type: String,
    #[serde(rename = "Number of Guests")]
    guests: u32,
    #[serde(rename = "Pricing")]
    pricing: String,
    #[serde(rename = "Wastage Food Amount")]
    wastage_amount: f64,
}

/// Read menu item records from CSV data.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<MenuItemRecord>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize().enumerate() {
        let raw: RawRecord = result.map_err(|source| DatasetError::Row { row, source })?;
        let pricing: PricingTier = raw.pricing.parse()?;
        records.push(MenuItemRecord::new(
            raw.food_type,
            raw.event_type,
            raw.guests,
            pricing,
            raw.wastage_amount,
        ));
    }
    Ok(records)
}

/// Read menu item records from a CSV file on disk.
pub fn load_records(path: &Path) -> Result<Vec<MenuItemRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_records(file)
}
