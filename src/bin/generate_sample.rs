use clap::Parser;
use serde_json::{json, Value};

/// Write a deterministic synthetic restaurant dataset to sample_restaurants.json.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version, about)]
struct Args {
    /// Number of restaurants to generate
    #[arg(default_value_t = 500)]
    count: usize,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const PREFIXES: [&str; 10] = [
    "Royal", "Spice", "Golden", "Urban", "Little", "Happy", "Coastal", "Old Town", "Green", "Midnight",
];
const NOUNS: [&str; 10] = [
    "Kitchen", "Bistro", "Diner", "Corner", "Hub", "Express", "House", "Cafe", "Grill", "Point",
];
const TYPES: [&str; 6] = [
    "Casual Dining", "Quick Bites", "Cafe", "Delivery", "Fine Dining", "Dessert Parlor",
];
const AREAS: [&str; 8] = [
    "Downtown", "Uptown", "Koramangala", "Indiranagar", "Jayanagar", "Whitefield", "BTM", "HSR",
];
const CUISINES: [&str; 14] = [
    "North Indian", "South Indian", "Chinese", "Italian", "Pizza", "American", "Fast Food",
    "Desserts", "Beverages", "Biryani", "Thai", "Mexican", "Seafood", "Cafe",
];

fn restaurant(id: usize, rng: &mut SimpleRng) -> Value {
    let name = format!("{} {}", rng.pick(&PREFIXES), rng.pick(&NOUNS));

    let n_cuisines = 1 + rng.below(3);
    let mut cuisines: Vec<&str> = Vec::with_capacity(n_cuisines);
    while cuisines.len() < n_cuisines {
        let c = rng.pick(&CUISINES);
        if !cuisines.contains(&c) {
            cuisines.push(c);
        }
    }

    // A share of records carry missing fields, as real exports do.
    let rating = if rng.chance(0.1) {
        Value::Null
    } else {
        json!(((2.5 + rng.next_f64() * 2.4) * 10.0).round() / 10.0)
    };
    let area = if rng.chance(0.05) {
        Value::Null
    } else {
        json!(rng.pick(&AREAS))
    };
    let delivery_time = if rng.chance(0.1) {
        Value::Null
    } else {
        json!(15 + 5 * rng.below(10))
    };
    let average_cost = if rng.chance(0.05) {
        Value::Null
    } else {
        json!(150 + 50 * rng.below(30))
    };
    let yes_no = |b: bool| if b { "Yes" } else { "No" };

    json!({
        "id": id,
        "name": name,
        "type": rng.pick(&TYPES),
        "area": area,
        "cuisines": cuisines,
        "rating": rating,
        "ratingCount": rng.below(3000),
        "averageCost": average_cost,
        "onlineOrder": yes_no(rng.chance(0.7)),
        "tableBooking": yes_no(rng.chance(0.3)),
        "deliveryTime": delivery_time,
    })
}

fn main() {
    let Args { count } = Args::parse();

    let mut rng = SimpleRng::new(42);
    let records: Vec<Value> = (1..=count).map(|id| restaurant(id, &mut rng)).collect();

    let output_path = "sample_restaurants.json";
    let text = serde_json::to_string_pretty(&records).expect("Failed to serialize records");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!("Wrote {count} restaurants to {output_path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_500() {
        let args = Args::try_parse_from(["generate_sample"]).expect("should parse");
        assert_eq!(args.count, 500);

        let args = Args::try_parse_from(["generate_sample", "25"]).expect("should parse");
        assert_eq!(args.count, 25);
    }

    #[test]
    fn bad_count_arguments_are_rejected() {
        assert!(Args::try_parse_from(["generate_sample", "abc"]).is_err());
        assert!(Args::try_parse_from(["generate_sample", "-3"]).is_err());
        assert!(Args::try_parse_from(["generate_sample", "10", "20"]).is_err());
    }

    #[test]
    fn records_are_deterministic_and_well_formed() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for id in 1..=50 {
            let left = restaurant(id, &mut a);
            assert_eq!(left, restaurant(id, &mut b));
            assert_eq!(left["id"], id);
            let cuisines = left["cuisines"].as_array().expect("cuisines should be a list");
            assert!((1..=3).contains(&cuisines.len()));
        }
    }
}
