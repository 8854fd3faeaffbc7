//! Load-velocity-power chart widget.
//!
//! Draws the raw samples, the fitted load line and the power curve on fixed
//! axes so charts from different sessions can be compared by eye.

use egui::{Response, RichText, Ui};
use egui_plot::{GridInput, GridMark, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::metrics::profile::{AnnotationKind, ProfileReport};
use crate::ui::theme::chart_colors;

/// Velocity axis range and grid spacing.
pub const X_RANGE: (f64, f64) = (0.0, 3.0);
pub const X_STEP: f64 = 0.1;
/// Load axis range and grid spacing.
pub const Y_RANGE: (f64, f64) = (0.0, 200.0);
pub const Y_STEP: f64 = 5.0;

/// Upper bound on grid marks produced per axis when zoomed far out.
const MAX_GRID_MARKS: i64 = 2000;

/// Profile chart widget.
pub struct ProfileChart<'a> {
    report: &'a ProfileReport,
    height: f32,
    allow_zoom: bool,
    allow_drag: bool,
    show_legend: bool,
}

impl<'a> ProfileChart<'a> {
    /// Create a new profile chart.
    pub fn new(report: &'a ProfileReport) -> Self {
        Self {
            report,
            height: 520.0,
            allow_zoom: false,
            allow_drag: false,
            show_legend: true,
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Enable scroll-wheel and pinch zoom.
    pub fn allow_zoom(mut self, allow: bool) -> Self {
        self.allow_zoom = allow;
        self
    }

    /// Enable drag panning.
    pub fn allow_drag(mut self, allow: bool) -> Self {
        self.allow_drag = allow;
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Show the chart with its title and annotations.
    pub fn show(self, ui: &mut Ui) -> Response {
        ui.heading(self.report.title());
        ui.add_space(4.0);

        for note in self.report.annotations() {
            ui.label(
                RichText::new(note.text)
                    .size(15.0)
                    .color(chart_colors::annotation(note.kind)),
            );
        }
        ui.add_space(8.0);

        let series = &self.report.fit.series;
        let peak = self.report.fit.peak_point();

        let scatter = Points::new("Data Points", PlotPoints::new(self.report.scatter()))
            .shape(MarkerShape::Circle)
            .radius(5.0)
            .color(chart_colors::DATA_POINTS);
        let load_line = Line::new("Velocity-Load Line", PlotPoints::new(series.load_curve()))
            .color(chart_colors::LOAD_LINE)
            .width(2.0);
        let power_line = Line::new("Velocity-Power Curve", PlotPoints::new(series.power_curve()))
            .color(chart_colors::POWER_CURVE)
            .width(2.0);
        let peak_marker = Points::new(
            "Optimal Power Load",
            PlotPoints::new(vec![[peak.velocity, peak.load]]),
        )
        .shape(MarkerShape::Diamond)
        .radius(6.0)
        .color(chart_colors::annotation(AnnotationKind::Opl));

        let mut plot = Plot::new("profile_chart")
            .height(self.height)
            .allow_drag(self.allow_drag)
            .allow_zoom(self.allow_zoom)
            .allow_scroll(self.allow_zoom)
            .default_x_bounds(X_RANGE.0, X_RANGE.1)
            .default_y_bounds(Y_RANGE.0, Y_RANGE.1)
            .x_grid_spacer(|input| fixed_grid(input, X_STEP))
            .y_grid_spacer(|input| fixed_grid(input, Y_STEP))
            .x_axis_label("Velocity")
            .y_axis_label("Load")
            .label_formatter(|name, value| format_hover(name, value.x, value.y));

        if self.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            plot_ui.points(scatter);
            plot_ui.line(load_line);
            plot_ui.line(power_line);
            plot_ui.points(peak_marker);
        })
        .response
    }
}

/// Tolerance for marks that land on a bound up to rounding.
const GRID_EPSILON: f64 = 1e-9;

/// Grid marks at every multiple of `step` inside the visible bounds.
fn fixed_grid(input: GridInput, step: f64) -> Vec<GridMark> {
    let (lo, hi) = input.bounds;
    let first = (lo / step - GRID_EPSILON).ceil() as i64;
    let last = ((hi / step + GRID_EPSILON).floor() as i64).min(first + MAX_GRID_MARKS);

    (first..=last)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

/// Hover tooltip text.
fn format_hover(name: &str, velocity: f64, value: f64) -> String {
    let point = format!("v = {:.2}\ny = {:.1}", velocity, value);
    if name.is_empty() {
        point
    } else {
        format!("{}\n{}", name, point)
    }
}
