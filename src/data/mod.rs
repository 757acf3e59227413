//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  .json / .csv / bundled sample
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → RestaurantDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────────┐
//!   │ RestaurantDataset │  Vec<Restaurant>, cuisine + area option sets
//!   └───────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply FilterCriteria → matching indices
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
