use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::data::filter::{filter_records, FilterCriteria};
use crate::data::loader;
use crate::data::model::RestaurantDataset;

/// Load the dataset named on the command line, or the bundled sample.
pub fn load_dataset(cli: &Cli) -> Result<RestaurantDataset> {
    match &cli.dataset {
        Some(path) => loader::load_file(path),
        None => loader::load_bundled(),
    }
}

/// Write every matching record as one JSON line. Returns the number of lines.
pub fn write_matches<W: Write>(
    out: &mut W,
    dataset: &RestaurantDataset,
    criteria: &FilterCriteria,
) -> Result<usize> {
    let matches = filter_records(&dataset.restaurants, criteria);
    log::info!("{} of {} restaurants match", matches.len(), dataset.len());
    for restaurant in &matches {
        serde_json::to_writer(&mut *out, restaurant).context("serializing restaurant")?;
        writeln!(out).context("writing output")?;
    }
    out.flush().context("flushing output")?;
    Ok(matches.len())
}

/// Headless entry point: load, filter and print.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<usize> {
    let dataset = load_dataset(cli)?;
    write_matches(out, &dataset, &cli.criteria())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;
    use serde_json::Value as JsonValue;

    use super::*;
    use crate::data::loader::DatasetError;

    fn unique_test_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("jomato-{prefix}-{nanos}"))
    }

    fn run_with(args: &[&str]) -> (Result<usize>, Vec<JsonValue>) {
        let cli = Cli::try_parse_from(args).expect("should parse");
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        let text = String::from_utf8(out).expect("output should be utf-8");
        let lines = text
            .lines()
            .map(|l| serde_json::from_str(l).expect("each line should be a JSON object"))
            .collect();
        (result, lines)
    }

    #[test]
    fn prints_one_json_line_per_match() {
        let (result, lines) = run_with(&["jomato", "--headless", "--max-cost", "350"]);

        let count = result.expect("headless run should succeed");
        assert_eq!(count, lines.len());
        assert_eq!(count, 6);

        let first = &lines[0];
        assert_eq!(first["id"], 2);
        assert_eq!(first["name"], "Burger Barn");
        assert_eq!(first["type"], "Quick Bites");
        assert_eq!(first["averageCost"], 300.0);
        assert_eq!(first["deliveryTime"], 20.0);
        assert_eq!(first["onlineOrder"], "Yes");
        assert!(first.get("kind").is_none());
        assert!(first.get("average_cost").is_none());
    }

    #[test]
    fn pizza_search_over_bundled_dataset() {
        let (result, lines) = run_with(&["jomato", "--search", "piz", "--headless"]);

        assert_eq!(result.expect("headless run should succeed"), 2);
        let names: Vec<_> = lines.iter().map(|l| l["name"].as_str().unwrap_or("")).collect();
        assert_eq!(names, vec!["Pizza Corner", "PIZZA PALACE"]);
    }

    #[test]
    fn no_matches_prints_nothing() {
        let (result, lines) = run_with(&["jomato", "--headless", "--cuisine", "Martian"]);
        assert_eq!(result.expect("headless run should succeed"), 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn unusable_dataset_is_an_error() {
        let temp_dir = unique_test_dir("headless");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let txt_path = temp_dir.join("restaurants.txt");
        fs::write(&txt_path, "[]").expect("should write txt");
        let path = txt_path.to_string_lossy().to_string();

        let (result, lines) = run_with(&["jomato", path.as_str(), "--headless"]);

        let err = result.expect_err("unsupported extension should fail");
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::UnsupportedExtension(ext)) if ext == "txt"
        ));
        assert!(lines.is_empty());

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
