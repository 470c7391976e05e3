use eframe::egui::Color32;

use crate::color::trace_palette;
use crate::data::model::Match;
use crate::pipeline::{PlotData, Trace};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Result of the analysis run being shown.
    pub plot: PlotData,

    /// Closest reference spectra (empty for `average` runs).
    pub matches: Vec<Match>,

    /// Per-trace visibility, parallel to `plot.traces`.
    pub trace_visible: Vec<bool>,

    pub show_average: bool,

    /// One colour per trace.
    pub colors: Vec<Color32>,
}

impl AppState {
    pub fn new(plot: PlotData, matches: Vec<Match>) -> Self {
        let n = plot.traces.len();
        Self {
            colors: trace_palette(n),
            trace_visible: vec![true; n],
            show_average: true,
            plot,
            matches,
        }
    }

    /// Traces currently switched on, with their colours.
    pub fn visible_traces(&self) -> impl Iterator<Item = (&Trace, Color32)> {
        self.plot
            .traces
            .iter()
            .zip(&self.colors)
            .zip(&self.trace_visible)
            .filter(|(_, visible)| **visible)
            .map(|((t, c), _)| (t, *c))
    }

    pub fn toggle_trace(&mut self, index: usize) {
        if let Some(v) = self.trace_visible.get_mut(index) {
            *v = !*v;
        }
    }

    pub fn select_all(&mut self) {
        self.trace_visible.iter_mut().for_each(|v| *v = true);
    }

    pub fn select_none(&mut self) {
        self.trace_visible.iter_mut().for_each(|v| *v = false);
    }

    pub fn visible_count(&self) -> usize {
        self.trace_visible.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AverageSpectrum, WavenumberAxis};

    fn state(traces: usize) -> AppState {
        let plot = PlotData {
            title: "t".into(),
            axis: WavenumberAxis::new(vec![100.0, 200.0]),
            traces: (0..traces)
                .map(|i| Trace {
                    sample: i,
                    label: Some(format!("Sample {}", i + 1)),
                    intensities: vec![i as f64, 1.0],
                })
                .collect(),
            average: AverageSpectrum { values: vec![0.0, 1.0], sample_count: traces },
        };
        AppState::new(plot, Vec::new())
    }

    #[test]
    fn everything_starts_visible() {
        let s = state(3);
        assert_eq!(s.visible_count(), 3);
        assert_eq!(s.colors.len(), 3);
        assert!(s.show_average);
    }

    #[test]
    fn toggling_hides_one_trace() {
        let mut s = state(3);
        s.toggle_trace(1);
        let samples: Vec<usize> = s.visible_traces().map(|(t, _)| t.sample).collect();
        assert_eq!(samples, [0, 2]);
        s.toggle_trace(1);
        assert_eq!(s.visible_count(), 3);
        s.toggle_trace(99);
        assert_eq!(s.visible_count(), 3);
    }

    #[test]
    fn select_none_then_all() {
        let mut s = state(2);
        s.select_none();
        assert_eq!(s.visible_traces().count(), 0);
        s.select_all();
        assert_eq!(s.visible_traces().count(), 2);
    }
}
