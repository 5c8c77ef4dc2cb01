use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const FIRST_YEAR: i64 = 1990;
const LAST_YEAR: i64 = 2025;
/// Years left out so the viewer has a range with no data.
const MISSING_YEARS: [i64; 2] = [2020, 2021];

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Temperature")]
    temperature: f64,
    #[serde(rename = "Rainfall")]
    rainfall: f64,
    #[serde(rename = "Humidity")]
    humidity: f64,
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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<Row> {
    (FIRST_YEAR..=LAST_YEAR)
        .filter(|year| !MISSING_YEARS.contains(year))
        .map(|year| {
            let t = (year - FIRST_YEAR) as f64;
            Row {
                year,
                temperature: round_to(rng.gauss(14.2 + 0.025 * t, 0.3), 2),
                rainfall: round_to(rng.gauss(1150.0 - 1.8 * t, 60.0).max(0.0), 1),
                humidity: round_to(rng.gauss(68.0 + 0.05 * t, 2.5).clamp(0.0, 100.0), 1),
            }
        })
        .collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    // Write CSV
    let csv_path = "climate_data.csv";
    let mut csv_writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    for row in &rows {
        csv_writer.serialize(row).expect("Failed to write CSV row");
    }
    csv_writer.flush().expect("Failed to flush CSV file");

    // Build Arrow arrays
    let schema = Arc::new(Schema::new(vec![
        Field::new("Year", DataType::Int64, false),
        Field::new("Temperature", DataType::Float64, false),
        Field::new("Rainfall", DataType::Float64, false),
        Field::new("Humidity", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.year))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.temperature))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.rainfall))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.humidity))),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let parquet_path = "climate_data.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} yearly records ({FIRST_YEAR}–{LAST_YEAR}, without {:?}) to {csv_path} and {parquet_path}",
        rows.len(),
        MISSING_YEARS
    );
}
