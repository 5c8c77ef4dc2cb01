use eframe::egui::{self, Color32, Key, RichText, TextEdit, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let can_export = !state.outcomes.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export fit summary…"))
                .clicked()
            {
                save_summary_dialog(state);
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        let ds = state.dataset();
        match ds.year_span() {
            Some((first, last)) => {
                ui.label(format!("{} records, {first}–{last}", ds.len()));
            }
            None => {
                ui.label("Dataset is empty");
            }
        }

        ui.separator();

        if ui
            .add_enabled(!state.outcomes.is_empty(), egui::Button::new("Clear charts"))
            .clicked()
        {
            state.clear_results();
        }

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Query inputs
// ---------------------------------------------------------------------------

/// Start / end year fields and the "Plot Data" button.
pub fn input_panel(ui: &mut Ui, state: &mut AppState) {
    let mut submitted = false;

    ui.vertical_centered(|ui: &mut Ui| {
        egui::Grid::new("year_inputs")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui: &mut Ui| {
                ui.label("Start Year:");
                submitted |= year_field(ui, &mut state.start_input);
                ui.end_row();

                ui.label("End Year:");
                submitted |= year_field(ui, &mut state.end_input);
                ui.end_row();
            });

        ui.add_space(4.0);
        if ui.button("Plot Data").clicked() {
            submitted = true;
        }
    });

    if submitted {
        state.plot_requested();
    }
}

/// Single-line year entry. Returns true when Enter was pressed in it.
fn year_field(ui: &mut Ui, text: &mut String) -> bool {
    let response = ui.add(TextEdit::singleline(text).desired_width(120.0));
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

// ---------------------------------------------------------------------------
// Error dialog
// ---------------------------------------------------------------------------

/// Modal error dialog; blocks the rest of the window until dismissed.
pub fn error_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.error_dialog.clone() else {
        return;
    };

    let mut ok_clicked = false;
    let modal = egui::Modal::new(egui::Id::new("error_dialog")).show(ctx, |ui: &mut Ui| {
        ui.set_max_width(360.0);
        ui.heading("Error");
        ui.add_space(6.0);
        ui.label(&message);
        ui.add_space(8.0);
        ui.vertical_centered(|ui: &mut Ui| {
            if ui.button("OK").clicked() {
                ok_clicked = true;
            }
        });
    });

    if ok_clicked || modal.should_close() {
        state.dismiss_error();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_summary_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export fit summary")
        .set_file_name("fit_summary.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        state.export_summary(&path);
    }
}
