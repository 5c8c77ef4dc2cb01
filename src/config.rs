// ---------------------------------------------------------------------------
// Application configuration (compile-time)
// ---------------------------------------------------------------------------

/// Dataset read once at startup, relative to the working directory.
pub const DATASET_PATH: &str = "climate_data.csv";

/// Earliest start year accepted by a query.
pub const MIN_YEAR: i64 = 1990;

/// Latest end year accepted by a query.
pub const MAX_YEAR: i64 = 2025;

pub const WINDOW_TITLE: &str = "Climate Data Visualization";
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 900.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [600.0, 400.0];

/// Height of a single chart inside a panel set.
pub const CHART_HEIGHT: f32 = 280.0;
