use super::model::{Restaurant, RestaurantDataset};

// ---------------------------------------------------------------------------
// Filter criteria: one value per filter control
// ---------------------------------------------------------------------------

/// Steps offered by the minimum rating selector (0 = any rating).
pub const RATING_STEPS: [f64; 4] = [0.0, 3.0, 3.5, 4.0];

/// Current user selections. Empty text and zero thresholds mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub cuisine: Option<String>,
    pub area: Option<String>,
    pub min_rating: f64,
    /// Minutes.
    pub max_delivery_time: f64,
    pub max_cost: f64,
}

impl FilterCriteria {
    /// Whether no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && selected(&self.cuisine).is_none()
            && selected(&self.area).is_none()
            && threshold(self.min_rating).is_none()
            && threshold(self.max_delivery_time).is_none()
            && threshold(self.max_cost).is_none()
    }
}

/// Parse the text of a numeric threshold input. Anything unparseable is 0.
pub fn parse_threshold(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn selected(label: &Option<String>) -> Option<&str> {
    label.as_deref().filter(|l| !l.is_empty())
}

/// 0 (and NaN) is the "unset" sentinel.
fn threshold(value: f64) -> Option<f64> {
    (value != 0.0 && !value.is_nan()).then_some(value)
}

// ---------------------------------------------------------------------------
// Matcher: criteria prepared once per filter pass
// ---------------------------------------------------------------------------

struct Matcher<'c> {
    needle: Option<String>,
    cuisine: Option<&'c str>,
    area: Option<&'c str>,
    min_rating: Option<f64>,
    max_delivery_time: Option<f64>,
    max_cost: Option<f64>,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            needle: (!criteria.search_text.is_empty())
                .then(|| criteria.search_text.to_lowercase()),
            cuisine: selected(&criteria.cuisine),
            area: selected(&criteria.area),
            min_rating: threshold(criteria.min_rating),
            max_delivery_time: threshold(criteria.max_delivery_time),
            max_cost: threshold(criteria.max_cost),
        }
    }

    fn matches(&self, r: &Restaurant) -> bool {
        let name_ok = self
            .needle
            .as_deref()
            .map_or(true, |n| r.name.to_lowercase().contains(n));
        let cuisine_ok = self
            .cuisine
            .map_or(true, |c| r.cuisines.iter().any(|rc| rc == c));
        let area_ok = self.area.map_or(true, |a| r.area.as_deref() == Some(a));
        let rating_ok = self
            .min_rating
            .map_or(true, |min| r.rating_or_zero() >= min);
        // Absent delivery time or cost never excludes a record.
        let delivery_ok = match (self.max_delivery_time, r.delivery_time) {
            (Some(max), Some(t)) => t <= max,
            _ => true,
        };
        let cost_ok = match (self.max_cost, r.average_cost) {
            (Some(max), Some(c)) => c <= max,
            _ => true,
        };

        name_ok && cuisine_ok && area_ok && rating_ok && delivery_ok && cost_ok
    }
}

// ---------------------------------------------------------------------------
// Filter passes
// ---------------------------------------------------------------------------

/// Return the records that pass all active criteria, in input order.
pub fn filter_records<'a>(
    restaurants: &'a [Restaurant],
    criteria: &FilterCriteria,
) -> Vec<&'a Restaurant> {
    let matcher = Matcher::new(criteria);
    restaurants.iter().filter(|r| matcher.matches(r)).collect()
}

/// Return indices of records that pass all active criteria.
pub fn filtered_indices(dataset: &RestaurantDataset, criteria: &FilterCriteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..dataset.len()).collect();
    }
    let matcher = Matcher::new(criteria);
    dataset
        .restaurants
        .iter()
        .enumerate()
        .filter(|(_, r)| matcher.matches(r))
        .map(|(i, _)| i)
        .collect()
}
