use std::path::Path;

use crate::data::model::ClimateDataset;
use crate::export;
use crate::fit::pipeline::{FitOutcome, compute_fit};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at startup. Never mutated afterwards.
    dataset: ClimateDataset,

    /// Raw text of the "Start Year" field.
    pub start_input: String,

    /// Raw text of the "End Year" field.
    pub end_input: String,

    /// Every successful query, oldest first. New results are appended.
    pub outcomes: Vec<FitOutcome>,

    /// Message for the modal error dialog, if one is open.
    pub error_dialog: Option<String>,

    /// Status / export message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: ClimateDataset) -> Self {
        Self {
            dataset,
            start_input: String::new(),
            end_input: String::new(),
            outcomes: Vec::new(),
            error_dialog: None,
            status_message: None,
        }
    }

    pub fn dataset(&self) -> &ClimateDataset {
        &self.dataset
    }

    /// Handle a "Plot Data" action: fit the current inputs and append the
    /// result, or open the error dialog.
    pub fn plot_requested(&mut self) {
        match compute_fit(&self.dataset, &self.start_input, &self.end_input) {
            Ok(outcome) => {
                log::info!(
                    "Fitted {} records for {}–{}",
                    outcome.years.len(),
                    outcome.range.start,
                    outcome.range.end
                );
                self.outcomes.push(outcome);
            }
            Err(e) => {
                log::warn!(
                    "Plot request rejected (start={:?}, end={:?}): {e}",
                    self.start_input,
                    self.end_input
                );
                self.error_dialog = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_dialog = None;
    }

    /// Drop all rendered chart sets.
    pub fn clear_results(&mut self) {
        log::info!("Cleared {} chart sets", self.outcomes.len());
        self.outcomes.clear();
        self.status_message = None;
    }

    /// Write the fit summary of every rendered chart set.
    pub fn export_summary(&mut self, path: &Path) {
        match export::write_summary(path, &self.outcomes) {
            Ok(n) => {
                log::info!("Exported {n} fit rows to {}", path.display());
                self.status_message = Some(format!("Exported {n} rows to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export summary: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
