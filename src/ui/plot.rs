use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot};

use crate::color::AVERAGE_COLOR;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectral plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected samples and their average against the Raman shift axis.
pub fn spectral_plot(ui: &mut Ui, state: &AppState) {
    let axis = &state.plot.axis.values;

    Plot::new("spectral_plot")
        .legend(Legend::default())
        .x_axis_label("Raman Shift (cm⁻¹)")
        .y_axis_label("Intensity (counts)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (trace, color) in state.visible_traces() {
                // Unlabelled traces stay out of the legend.
                let name = trace.label.clone().unwrap_or_default();
                let line = Line::new(points(axis, &trace.intensities))
                    .name(&name)
                    .color(color)
                    .width(0.5);
                plot_ui.line(line);
            }

            if state.show_average {
                let line = Line::new(points(axis, &state.plot.average.values))
                    .name("Averaged Spectrum")
                    .color(AVERAGE_COLOR)
                    .width(2.0);
                plot_ui.line(line);
            }
        });
}

fn points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect()
}
