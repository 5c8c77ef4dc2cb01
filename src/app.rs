use eframe::egui;

use crate::data::model::ClimateDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ClimateTrendsApp {
    pub state: AppState,
}

impl ClimateTrendsApp {
    pub fn new(dataset: ClimateDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for ClimateTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Query inputs ----
        egui::TopBottomPanel::top("input_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            panels::input_panel(ui, &mut self.state);
            ui.add_space(6.0);
        });

        // ---- Central panel: accumulated charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_area(ui, &self.state);
        });

        panels::error_dialog(ctx, &mut self.state);
    }
}
