use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, parse_threshold, FilterCriteria};
use crate::data::model::{Restaurant, RestaurantDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a dataset has been loaded).
    pub dataset: Option<RestaurantDataset>,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Raw text of the numeric inputs, kept so partial edits survive a frame.
    pub delivery_input: String,
    pub cost_input: String,

    /// Indices of restaurants passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Tag colour per cuisine.
    pub cuisine_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and show every record.
    pub fn set_dataset(&mut self, dataset: RestaurantDataset) {
        self.cuisine_colors = ColorMap::new(&dataset.cuisines);
        self.criteria = FilterCriteria::default();
        self.delivery_input.clear();
        self.cost_input.clear();
        self.visible_indices = (0..dataset.len()).collect();

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Seed criteria (e.g. from the command line) and refilter.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.delivery_input = threshold_text(criteria.max_delivery_time);
        self.cost_input = threshold_text(criteria.max_cost);
        self.criteria = criteria;
        self.refilter();
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
            log::debug!(
                "Filter {:?}: {} of {} restaurants visible",
                self.criteria,
                self.visible_indices.len(),
                ds.len()
            );
        }
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.criteria.search_text = text.to_string();
        self.refilter();
    }

    /// `None` selects all cuisines.
    pub fn set_cuisine(&mut self, cuisine: Option<String>) {
        self.criteria.cuisine = cuisine;
        self.refilter();
    }

    /// `None` selects all areas.
    pub fn set_area(&mut self, area: Option<String>) {
        self.criteria.area = area;
        self.refilter();
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.criteria.min_rating = min_rating;
        self.refilter();
    }

    pub fn set_max_delivery_input(&mut self, input: &str) {
        self.delivery_input = input.to_string();
        self.criteria.max_delivery_time = parse_threshold(input);
        self.refilter();
    }

    pub fn set_max_cost_input(&mut self, input: &str) {
        self.cost_input = input.to_string();
        self.criteria.max_cost = parse_threshold(input);
        self.refilter();
    }

    /// Clear every criterion.
    pub fn reset_filters(&mut self) {
        self.apply_criteria(FilterCriteria::default());
    }

    /// Matching restaurants in dataset order.
    pub fn visible_restaurants(&self) -> impl Iterator<Item = &Restaurant> + '_ {
        let restaurants = self
            .dataset
            .as_ref()
            .map(|ds| ds.restaurants.as_slice())
            .unwrap_or_default();
        self.visible_indices
            .iter()
            .filter_map(move |&i| restaurants.get(i))
    }
}

fn threshold_text(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_json_str;

    const RECORDS: &str = r#"[
        {"id": 1, "name": "Spice Hub", "area": "Downtown", "cuisines": ["Indian", "Chinese"],
         "rating": 4.2, "deliveryTime": 30, "averageCost": 500},
        {"id": 2, "name": "Burger Barn", "area": "Uptown", "cuisines": ["American"],
         "rating": 3.0, "deliveryTime": 20, "averageCost": 300},
        {"id": 3, "name": "Mystery Kitchen"}
    ]"#;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(load_json_str(RECORDS).expect("records should load"));
        state
    }

    fn visible_names(state: &AppState) -> Vec<&str> {
        state.visible_restaurants().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn new_dataset_shows_everything() {
        let state = loaded_state();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert!(state.criteria.is_empty());
        assert_ne!(
            state.cuisine_colors.color_for("Indian"),
            state.cuisine_colors.color_for("American")
        );
    }

    #[test]
    fn each_setter_refilters() {
        let mut state = loaded_state();

        state.set_search_text("BARN");
        assert_eq!(visible_names(&state), vec!["Burger Barn"]);

        state.set_search_text("");
        state.set_cuisine(Some("Indian".into()));
        assert_eq!(visible_names(&state), vec!["Spice Hub"]);

        state.set_cuisine(None);
        state.set_area(Some("Uptown".into()));
        assert_eq!(visible_names(&state), vec!["Burger Barn"]);

        state.set_area(None);
        state.set_min_rating(4.0);
        assert_eq!(visible_names(&state), vec!["Spice Hub"]);

        state.set_min_rating(0.0);
        state.set_max_cost_input("350");
        assert_eq!(visible_names(&state), vec!["Burger Barn", "Mystery Kitchen"]);

        state.set_max_cost_input("");
        state.set_max_delivery_input("25");
        assert_eq!(state.criteria.max_delivery_time, 25.0);
        assert_eq!(visible_names(&state), vec!["Burger Barn", "Mystery Kitchen"]);
    }

    #[test]
    fn unparseable_threshold_input_is_no_constraint() {
        let mut state = loaded_state();
        state.set_max_delivery_input("fast");
        assert_eq!(state.delivery_input, "fast");
        assert_eq!(state.criteria.max_delivery_time, 0.0);
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn reset_clears_criteria_and_inputs() {
        let mut state = loaded_state();
        state.apply_criteria(FilterCriteria {
            search_text: "hub".into(),
            max_cost: 400.0,
            ..Default::default()
        });
        assert_eq!(state.cost_input, "400");
        assert!(state.visible_indices.is_empty());

        state.reset_filters();
        assert!(state.criteria.is_empty());
        assert!(state.cost_input.is_empty());
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn loading_a_dataset_resets_previous_filters() {
        let mut state = loaded_state();
        state.set_search_text("spice");
        state.status_message = Some("Error: stale".into());

        state.set_dataset(load_json_str(r#"[{"name": "Only One"}]"#).expect("should load"));

        assert!(state.criteria.search_text.is_empty());
        assert_eq!(visible_names(&state), vec!["Only One"]);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn refilter_without_dataset_is_a_no_op() {
        let mut state = AppState::default();
        state.set_search_text("anything");
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.visible_restaurants().count(), 0);
    }
}
