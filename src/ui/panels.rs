use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – trace toggles and matches
// ---------------------------------------------------------------------------

/// Render the left panel: which traces are drawn, and the closest references.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Samples");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all();
                }
                if ui.small_button("None").clicked() {
                    state.select_none();
                }
            });

            for i in 0..state.plot.traces.len() {
                let trace = &state.plot.traces[i];
                let text = RichText::new(format!("Sample {}", trace.sample + 1))
                    .color(state.colors[i].to_opaque());
                let mut checked = state.trace_visible[i];
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_trace(i);
                }
            }

            ui.separator();
            ui.checkbox(&mut state.show_average, RichText::new("Averaged Spectrum").strong());

            if !state.matches.is_empty() {
                ui.add_space(8.0);
                egui::CollapsingHeader::new(RichText::new("Closest references").strong())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        egui::Grid::new("matches").striped(true).show(ui, |ui: &mut Ui| {
                            for m in &state.matches {
                                ui.label(format!("{}.", m.rank));
                                ui.label(&m.name);
                                ui.label(format!("{:.4}", m.distance));
                                ui.end_row();
                            }
                        });
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and sample counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(&state.plot.title);
        ui.separator();
        ui.label(format!(
            "{} samples averaged, {} of {} shown, {} points",
            state.plot.average.sample_count,
            state.visible_count(),
            state.plot.traces.len(),
            state.plot.axis.len()
        ));
    });
}
