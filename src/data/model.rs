use std::fmt;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation year. Duplicate years are allowed and kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
}

// ---------------------------------------------------------------------------
// Variable – the dependent columns we fit against Year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Temperature,
    Rainfall,
    Humidity,
}

impl Variable {
    /// Fit and display order.
    pub const ALL: [Variable; 3] = [Variable::Temperature, Variable::Rainfall, Variable::Humidity];

    /// Column header in the source file.
    pub fn column(self) -> &'static str {
        match self {
            Variable::Temperature => "Temperature",
            Variable::Rainfall => "Rainfall",
            Variable::Humidity => "Humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Variable::Temperature => "°C",
            Variable::Rainfall => "mm",
            Variable::Humidity => "%",
        }
    }

    /// Y axis label, e.g. `Rainfall (mm)`.
    pub fn axis_label(self) -> String {
        format!("{} ({})", self.column(), self.unit())
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Variable::Temperature => record.temperature,
            Variable::Rainfall => record.rainfall,
            Variable::Humidity => record.humidity,
        }
    }

    /// Colour of the actual-value points.
    pub fn actual_color(self) -> Color32 {
        match self {
            Variable::Temperature => Color32::BLACK,
            Variable::Rainfall => Color32::RED,
            Variable::Humidity => Color32::from_rgb(0, 255, 255),
        }
    }

    /// Colour of the prediction line.
    pub fn predicted_color(self) -> Color32 {
        match self {
            Variable::Temperature => Color32::BLUE,
            Variable::Rainfall => Color32::GREEN,
            Variable::Humidity => Color32::from_rgb(255, 0, 255),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// ClimateDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records in file order. Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ClimateDataset {
    pub records: Vec<Record>,
}

impl ClimateDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        ClimateDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest year present, if any.
    pub fn year_span(&self) -> Option<(i64, i64)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}
