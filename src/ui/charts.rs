use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::color;
use crate::data::aggregate::TrendPoint;
use crate::data::catalog::Position;
use crate::data::present::{rate_display_bound, ChartPoint};

// ---------------------------------------------------------------------------
// Bar charts (central panel)
// ---------------------------------------------------------------------------

/// Counting statistics as a bar chart, auto-scaled to the data.
pub fn counting_chart(ui: &mut Ui, points: &[ChartPoint]) {
    bar_chart(ui, "counting_chart", points, None);
}

/// Rate statistics as a bar chart with a fixed position-specific ceiling so
/// the bars stay comparable across players.
pub fn rate_chart(ui: &mut Ui, points: &[ChartPoint], position: Position) {
    bar_chart(ui, "rate_chart", points, Some(rate_display_bound(position)));
}

fn bar_chart(ui: &mut Ui, id: &str, points: &[ChartPoint], max_y: Option<f64>) {
    let palette = color::bar_palette(points.len());
    let bars: Vec<Bar> = points
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (p, color))| Bar::new(i as f64, p.value).name(p.label).fill(color))
        .collect();

    let labels: Vec<&'static str> = points.iter().map(|p| p.label).collect();

    let mut plot = Plot::new(id)
        .height(220.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value));
    if let Some(bound) = max_y {
        plot = plot.include_y(bound);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars));
    });
}

// ---------------------------------------------------------------------------
// Monthly trend line
// ---------------------------------------------------------------------------

/// The headline rate stat across the season, one point per month that has
/// data. Gaps are already removed upstream, so the x axis is the point index.
pub fn trend_chart(ui: &mut Ui, trend: &[TrendPoint]) {
    let points: PlotPoints = trend
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.value])
        .collect();
    let labels: Vec<&'static str> = trend.iter().map(|p| p.label).collect();

    Plot::new("trend_chart")
        .height(200.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .include_y(1.0)
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).color(color::TREND).width(2.0));
        });
}

/// Label for integer grid positions; fractional marks stay blank so the axis
/// shows exactly one label per bar or point.
fn axis_label(labels: &[&'static str], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|l| l.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_only_on_integer_marks() {
        let labels = ["안타", "홈런"];
        assert_eq!(axis_label(&labels, 0.0), "안타");
        assert_eq!(axis_label(&labels, 1.0), "홈런");
        assert_eq!(axis_label(&labels, 0.5), "");
        assert_eq!(axis_label(&labels, -1.0), "");
        assert_eq!(axis_label(&labels, 2.0), "");
    }
}
