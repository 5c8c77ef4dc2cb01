use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::fit::pipeline::FitOutcome;

// ---------------------------------------------------------------------------
// Fit summary export
// ---------------------------------------------------------------------------

/// One fitted line, flattened for CSV / JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub start_year: i64,
    pub end_year: i64,
    pub variable: String,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub points: usize,
}

/// One row per outcome per variable, in display order.
pub fn summary_rows(outcomes: &[FitOutcome]) -> Vec<SummaryRow> {
    outcomes
        .iter()
        .flat_map(|out| {
            out.series.iter().map(move |s| SummaryRow {
                start_year: out.range.start,
                end_year: out.range.end,
                variable: s.variable.to_string(),
                slope: s.fit.slope,
                intercept: s.fit.intercept,
                r_squared: s.fit.r_squared,
                points: out.years.len(),
            })
        })
        .collect()
}

/// Write the summary of `outcomes` to `path`.  Dispatch by extension
/// (`.csv` or `.json`).  Returns the number of rows written.
pub fn write_summary(path: &Path, outcomes: &[FitOutcome]) -> Result<usize> {
    let rows = summary_rows(outcomes);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
            for row in &rows {
                writer.serialize(row).context("writing CSV row")?;
            }
            writer.flush().context("flushing CSV file")?;
        }
        "json" => {
            let file = std::fs::File::create(path).context("creating JSON file")?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &rows).context("writing JSON")?;
            writer.flush().context("flushing JSON file")?;
        }
        other => bail!("Unsupported export extension: .{other}"),
    }

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ClimateDataset, Record};
    use crate::fit::pipeline::compute_fit;

    fn rec(year: i64, temperature: f64, rainfall: f64, humidity: f64) -> Record {
        Record {
            year,
            temperature,
            rainfall,
            humidity,
        }
    }

    fn outcomes() -> Vec<FitOutcome> {
        let ds = ClimateDataset::from_records(vec![
            rec(2000, 15.0, 100.0, 50.0),
            rec(2001, 16.0, 110.0, 52.0),
            rec(2002, 17.0, 120.0, 54.0),
        ]);
        vec![
            compute_fit(&ds, "2000", "2002").unwrap(),
            compute_fit(&ds, "2000", "2001").unwrap(),
        ]
    }

    #[test]
    fn rows_follow_display_order() {
        let rows = summary_rows(&outcomes());
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].variable, "Temperature");
        assert_eq!(rows[0].slope, 1.0);
        assert_eq!(rows[0].intercept, -1985.0);
        assert_eq!(rows[2].variable, "Humidity");
        assert_eq!(rows[3].end_year, 2001);
        assert_eq!(rows[3].points, 2);
    }

    #[test]
    fn writes_csv() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let n = write_summary(file.path(), &outcomes()).unwrap();
        assert_eq!(n, 6);

        let text = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("start_year,end_year,variable,slope,intercept,r_squared,points")
        );
        assert_eq!(lines.count(), 6);
    }

    #[test]
    fn writes_json() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write_summary(file.path(), &outcomes()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 6);
        assert_eq!(arr[1]["variable"], "Rainfall");
        assert_eq!(arr[1]["slope"], 10.0);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(write_summary(file.path(), &outcomes()).is_err());
    }
}
