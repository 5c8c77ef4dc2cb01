use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::config::CHART_HEIGHT;
use crate::data::model::Variable;
use crate::fit::pipeline::{FitOutcome, VariableSeries};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart sets (central panel)
// ---------------------------------------------------------------------------

/// Render every fitted range, oldest first, in a vertical scroll area.
pub fn chart_area(ui: &mut Ui, state: &AppState) {
    if state.outcomes.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Enter a start and end year, then press Plot Data");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, outcome) in state.outcomes.iter().enumerate() {
                ui.push_id(idx, |ui: &mut Ui| chart_set(ui, idx, outcome));
                ui.separator();
            }
        });
}

/// Three stacked charts plus the fit table for one range.
fn chart_set(ui: &mut Ui, idx: usize, outcome: &FitOutcome) {
    let range = outcome.range;
    ui.heading(format!(
        "{} to {}  ({} records)",
        range.start,
        range.end,
        outcome.years.len()
    ));

    for variable in Variable::ALL {
        let Some(series) = outcome.series_for(variable) else {
            continue;
        };
        ui.add_space(6.0);
        ui.strong(format!(
            "{variable} Data from {} to {}",
            range.start, range.end
        ));
        variable_chart(ui, idx, &outcome.years, series);
    }

    ui.add_space(6.0);
    fit_table(ui, outcome);
}

fn variable_chart(ui: &mut Ui, idx: usize, years: &[i64], series: &VariableSeries) {
    let variable = series.variable;

    let actual: PlotPoints = years
        .iter()
        .zip(series.actual.iter())
        .map(|(&x, &y)| [x as f64, y])
        .collect();
    let predicted: PlotPoints = years
        .iter()
        .zip(series.predicted.iter())
        .map(|(&x, &y)| [x as f64, y])
        .collect();

    Plot::new(("fit_plot", idx, variable.column()))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label(variable.axis_label())
        .show_grid(true)
        // Wheel events scroll the surrounding area instead of zooming.
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(actual)
                    .name(format!("Actual {variable}"))
                    .color(variable.actual_color())
                    .radius(3.0),
            );
            plot_ui.line(
                Line::new(predicted)
                    .name(format!("{variable} Prediction"))
                    .color(variable.predicted_color())
                    .width(2.0),
            );
        });
}

fn fit_table(ui: &mut Ui, outcome: &FitOutcome) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(100.0))
        .columns(Column::auto().at_least(90.0), 4)
        .header(20.0, |mut header| {
            for title in ["Variable", "Slope", "Intercept", "R²", "Points"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for series in &outcome.series {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(series.variable.axis_label());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.4}", series.fit.slope));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.4}", series.fit.intercept));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.4}", series.fit.r_squared));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(outcome.years.len().to_string());
                    });
                });
            }
        });
}
