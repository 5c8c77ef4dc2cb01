use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{ClimateDataset, Record, Variable};

const YEAR_COLUMN: &str = "Year";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a climate dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Year`, `Temperature`, `Rainfall`, `Humidity`
/// * `.json`    – `[{ "Year": 2000, "Temperature": 15.1, ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<ClimateDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::debug!("{} records read from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns are located by header name, so their order is free and extra
/// columns are ignored.
fn load_csv(path: &Path) -> Result<ClimateDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let year_idx = position(YEAR_COLUMN)?;
    let temp_idx = position(Variable::Temperature.column())?;
    let rain_idx = position(Variable::Rainfall.column())?;
    let hum_idx = position(Variable::Humidity.column())?;

    let mut records = Vec::new();

    for (i, result) in reader.records().enumerate() {
        // 1-based, counting data rows below the header.
        let row_no = i + 1;
        let row = result.with_context(|| format!("CSV data row {row_no}"))?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let year = cell(year_idx).parse::<i64>().with_context(|| {
            format!(
                "Data row {row_no}, {YEAR_COLUMN}: '{}' is not an integer",
                cell(year_idx)
            )
        })?;

        records.push(Record {
            year,
            temperature: parse_real(cell(temp_idx), row_no, Variable::Temperature)?,
            rainfall: parse_real(cell(rain_idx), row_no, Variable::Rainfall)?,
            humidity: parse_real(cell(hum_idx), row_no, Variable::Humidity)?,
        });
    }

    Ok(ClimateDataset::from_records(records))
}

fn parse_real(s: &str, row: usize, variable: Variable) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .with_context(|| format!("Data row {row}, {variable}: '{s}' is not a number"))?;
    if !value.is_finite() {
        bail!("Data row {row}, {variable}: '{s}' is not a finite number");
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` layout.
fn load_json(path: &Path) -> Result<ClimateDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<Record> = serde_json::from_str(&text).context("parsing JSON records")?;
    Ok(ClimateDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Expected schema:
/// - `Year`: Int32 or Int64
/// - `Temperature`, `Rainfall`, `Humidity`: Float64, Float32, Int32 or Int64
///
/// Nulls are rejected.
fn load_parquet(path: &Path) -> Result<ClimateDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let n_rows = batch.num_rows();

        let years = column(&batch, YEAR_COLUMN)?;
        let temps = column(&batch, Variable::Temperature.column())?;
        let rains = column(&batch, Variable::Rainfall.column())?;
        let hums = column(&batch, Variable::Humidity.column())?;

        for row in 0..n_rows {
            let row_no = offset + row + 1;
            let failed = |name: &str| format!("Data row {row_no}: failed to read '{name}'");
            records.push(Record {
                year: extract_i64(years, row).with_context(|| failed(YEAR_COLUMN))?,
                temperature: extract_f64(temps, row).with_context(|| failed("Temperature"))?,
                rainfall: extract_f64(rains, row).with_context(|| failed("Rainfall"))?,
                humidity: extract_f64(hums, row).with_context(|| failed("Humidity"))?,
            });
        }
        offset += n_rows;
    }

    Ok(ClimateDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        other => bail!("Expected integer column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    let value = match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            arr.value(row)
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            arr.value(row) as f64
        }
        DataType::Int64 | DataType::Int32 => extract_i64(col, row)? as f64,
        other => bail!("Expected numeric column, got {other:?}"),
    };
    if !value.is_finite() {
        bail!("non-finite value {value}");
    }
    Ok(value)
}
