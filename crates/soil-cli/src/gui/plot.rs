//! Nutrient trend plot.

use eframe::egui::{self, RichText};
use egui_plot::{GridMark, Legend, Line, MarkerShape, Plot, PlotPoints, Points};
use soil_core::NutrientChart;
use soil_core::chart::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL, format_x};
use soil_types::Nutrient;

use super::components::empty_state;
use super::theme::Theme;

/// Point marker for each nutrient line.
pub fn marker_for(nutrient: Nutrient) -> MarkerShape {
    match nutrient {
        Nutrient::Nitrogen => MarkerShape::Circle,
        Nutrient::Phosphorus => MarkerShape::Square,
        Nutrient::Potassium => MarkerShape::Up,
    }
}

/// Draw the chart, or a hint if "Show Graph" has not produced one yet.
pub fn show_chart(ui: &mut egui::Ui, theme: &Theme, chart: Option<&NutrientChart>) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(CHART_TITLE)
                .strong()
                .color(theme.text_primary)
                .size(theme.typography.subheading),
        );
    });

    let Some(chart) = chart else {
        empty_state(
            ui,
            theme,
            "No graph yet",
            "Press \"Show Graph\" to plot nutrient levels over time",
        );
        return;
    };

    Plot::new("nutrient_trends")
        .legend(Legend::default())
        .show_axes(true)
        .show_grid(true)
        .allow_scroll(false)
        .allow_double_click_reset(true)
        .set_margin_fraction(egui::vec2(0.02, 0.1))
        .x_axis_label(X_AXIS_LABEL)
        .y_axis_label(Y_AXIS_LABEL)
        .x_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            format_x(mark.value)
        })
        .show(ui, |plot_ui| {
            for series in chart.series() {
                let color = theme.series_color(series);
                plot_ui.line(
                    Line::new(series.label(), PlotPoints::new(series.points.clone()))
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(series.label(), PlotPoints::new(series.points.clone()))
                        .shape(marker_for(series.nutrient))
                        .radius(3.0)
                        .filled(true)
                        .color(color),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_distinct() {
        assert_eq!(marker_for(Nutrient::Nitrogen), MarkerShape::Circle);
        assert_eq!(marker_for(Nutrient::Phosphorus), MarkerShape::Square);
        assert_eq!(marker_for(Nutrient::Potassium), MarkerShape::Up);
    }
}
