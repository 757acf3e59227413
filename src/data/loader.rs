use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::{Restaurant, RestaurantDataset, RestaurantId};

/// Structural problems that make a file unusable as a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("expected a top-level JSON array of restaurants")]
    NotAnArray,
    #[error("row {0} is not a JSON object")]
    RowNotObject(usize),
    #[error("CSV has no 'name' column")]
    MissingNameColumn,
}

/// The dataset compiled into the binary, used when no file is given.
const BUNDLED_DATASET: &str = include_str!("../../data/jomato.json");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a restaurant dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": 1, "name": "...", "cuisines": [...], ... }, ...]`
/// * `.csv`  – header row with the same field names, lists separated by `;`
pub fn load_file(path: &Path) -> Result<RestaurantDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            load_json_str(&text)?
        }
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_csv_reader(file)?
        }
        other => return Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    };

    log::info!(
        "Loaded {} restaurants from {} ({} cuisines, {} areas)",
        dataset.len(),
        path.display(),
        dataset.cuisines.len(),
        dataset.areas.len()
    );
    Ok(dataset)
}

/// Load the sample dataset shipped with the application.
pub fn load_bundled() -> Result<RestaurantDataset> {
    load_json_str(BUNDLED_DATASET).context("parsing bundled dataset")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse a records-oriented JSON array.
///
/// Individual fields are coerced leniently, so only the overall shape
/// (array of objects) can fail.
pub fn load_json_str(text: &str) -> Result<RestaurantDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let JsonValue::Array(rows) = root else {
        return Err(DatasetError::NotAnArray.into());
    };

    let mut restaurants = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        if !row.is_object() {
            return Err(DatasetError::RowNotObject(i).into());
        }
        restaurants.push(restaurant_from_row(row, i)?);
    }

    Ok(RestaurantDataset::from_restaurants(restaurants))
}

fn restaurant_from_row(row: JsonValue, index: usize) -> Result<Restaurant> {
    let mut restaurant: Restaurant =
        serde_json::from_value(row).with_context(|| format!("row {index}"))?;
    if restaurant.id.is_none() {
        log::warn!("Row {index} has no id, using its position");
        restaurant.id = Some(RestaurantId::Number(index as i64));
    }
    Ok(restaurant)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with record field names (`name`, `cuisines`,
/// `rating`, `averageCost`, ...). Empty cells are absent values; the
/// `cuisines` cell holds labels separated by `;` or `,`.
pub fn load_csv_reader<R: Read>(input: R) -> Result<RestaurantDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if !headers.iter().any(|h| h == "name") {
        return Err(DatasetError::MissingNameColumn.into());
    }

    let mut restaurants = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut obj = Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            let value = if cell.is_empty() {
                JsonValue::Null
            } else if header == "id" {
                csv_id(cell)
            } else {
                JsonValue::String(cell.to_string())
            };
            obj.insert(header.clone(), value);
        }

        restaurants.push(restaurant_from_row(JsonValue::Object(obj), row_no)?);
    }

    Ok(RestaurantDataset::from_restaurants(restaurants))
}

fn csv_id(cell: &str) -> JsonValue {
    match cell.parse::<i64>() {
        Ok(i) => JsonValue::from(i),
        Err(_) => JsonValue::String(cell.to_string()),
    }
}
