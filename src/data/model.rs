use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// RestaurantId – the unique key of a record
// ---------------------------------------------------------------------------

/// Record identifier as found in the source file (number or text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RestaurantId {
    Number(i64),
    Text(String),
}

// ---------------------------------------------------------------------------
// Restaurant – one row of the dataset
// ---------------------------------------------------------------------------

/// A single restaurant record.
///
/// Every field except `name` is optional in the source data. Malformed values
/// never fail deserialization: see [`coerce_number`] for the numeric rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RestaurantId>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Category label, e.g. "Casual Dining".
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub cuisines: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rating_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub average_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub online_order: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub table_booking: Option<String>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient_number")]
    pub delivery_time: Option<f64>,
}

impl Restaurant {
    /// Rating used for threshold comparisons; absent counts as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Lenient field coercion
// ---------------------------------------------------------------------------

/// Interpret an arbitrary JSON value as a number.
///
/// * `null` → `None` (absent)
/// * number → its value
/// * numeric string (whitespace trimmed) → its value
/// * anything else that is present → `Some(0.0)`
pub fn coerce_number(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Null => None,
        JsonValue::Number(n) => Some(n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0)),
        JsonValue::String(s) => Some(
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .unwrap_or(0.0),
        ),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        JsonValue::Array(_) | JsonValue::Object(_) => Some(0.0),
    }
}

/// Split a joined cuisine string ("North Indian, Chinese") into labels.
pub fn split_labels(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RestaurantId>, D::Error> {
    Ok(match Option::<JsonValue>::deserialize(d)? {
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => Some(RestaurantId::Number(i)),
            None => Some(RestaurantId::Text(n.to_string())),
        },
        Some(JsonValue::String(s)) => Some(RestaurantId::Text(s)),
        _ => None,
    })
}

fn lenient_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(lenient_text(d)?.unwrap_or_default())
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<JsonValue>::deserialize(d)? {
        Some(JsonValue::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<JsonValue>::deserialize(d)? {
        Some(JsonValue::String(s)) => Some(s),
        Some(JsonValue::Bool(true)) => Some("Yes".to_string()),
        Some(JsonValue::Bool(false)) => Some("No".to_string()),
        Some(JsonValue::Null) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<JsonValue>::deserialize(d)? {
        Some(JsonValue::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                JsonValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(JsonValue::String(s)) => split_labels(&s),
        _ => Vec::new(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<JsonValue>::deserialize(d)?.and_then(|v| coerce_number(&v)))
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    Ok(lenient_number(d)?.map(|f| if f > 0.0 { f as u64 } else { 0 }))
}

// ---------------------------------------------------------------------------
// RestaurantDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed option sets.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDataset {
    /// All records, in source order.
    pub restaurants: Vec<Restaurant>,
    /// Sorted distinct cuisines across the full dataset.
    pub cuisines: BTreeSet<String>,
    /// Sorted distinct, non-empty areas across the full dataset.
    pub areas: BTreeSet<String>,
}

impl RestaurantDataset {
    /// Build option sets from the loaded records.
    pub fn from_restaurants(restaurants: Vec<Restaurant>) -> Self {
        let cuisines = distinct_cuisines(&restaurants);
        let areas = distinct_areas(&restaurants);
        RestaurantDataset {
            restaurants,
            cuisines,
            areas,
        }
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

/// Every cuisine label that appears in any record, deduplicated and sorted.
pub fn distinct_cuisines(restaurants: &[Restaurant]) -> BTreeSet<String> {
    restaurants
        .iter()
        .flat_map(|r| r.cuisines.iter().cloned())
        .collect()
}

/// Every non-empty area, deduplicated and sorted.
pub fn distinct_areas(restaurants: &[Restaurant]) -> BTreeSet<String> {
    restaurants
        .iter()
        .filter_map(|r| r.area.as_deref())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
