use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::FilterCriteria;

/// Browse a restaurant directory with search and filters.
#[derive(Debug, Parser)]
#[command(name = "jomato", version, about)]
pub struct Cli {
    /// Dataset to load (.json or .csv). Uses the bundled sample when omitted.
    pub dataset: Option<PathBuf>,

    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only restaurants serving this cuisine
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Only restaurants in this area
    #[arg(long)]
    pub area: Option<String>,

    /// Minimum rating (0 = any)
    #[arg(long, default_value_t = 0.0)]
    pub min_rating: f64,

    /// Maximum delivery time in minutes (0 = any)
    #[arg(long, default_value_t = 0.0)]
    pub max_delivery_time: f64,

    /// Maximum average cost for two (0 = any)
    #[arg(long, default_value_t = 0.0)]
    pub max_cost: f64,

    /// Print matching restaurants as JSON lines instead of opening a window
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search.clone(),
            cuisine: self.cuisine.clone(),
            area: self.area.clone(),
            min_rating: self.min_rating,
            max_delivery_time: self.max_delivery_time,
            max_cost: self.max_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_empty_criteria() {
        let cli = Cli::try_parse_from(["jomato"]).expect("should parse");
        assert!(cli.dataset.is_none());
        assert!(!cli.headless);
        assert!(cli.criteria().is_empty());
    }

    #[test]
    fn flags_map_onto_criteria() {
        let cli = Cli::try_parse_from([
            "jomato",
            "restaurants.csv",
            "--search",
            "piz",
            "--cuisine",
            "Italian",
            "--area",
            "Koramangala",
            "--min-rating",
            "3.5",
            "--max-delivery-time",
            "40",
            "--max-cost",
            "600",
            "--headless",
        ])
        .expect("should parse");

        assert_eq!(cli.dataset, Some(PathBuf::from("restaurants.csv")));
        assert!(cli.headless);
        assert_eq!(
            cli.criteria(),
            FilterCriteria {
                search_text: "piz".into(),
                cuisine: Some("Italian".into()),
                area: Some("Koramangala".into()),
                min_rating: 3.5,
                max_delivery_time: 40.0,
                max_cost: 600.0,
            }
        );
    }
}
