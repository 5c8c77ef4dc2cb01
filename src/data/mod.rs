/// Data layer: core types, loading, and year-range filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ClimateDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ClimateDataset │  Vec<Record>, file order
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  YearRange → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
