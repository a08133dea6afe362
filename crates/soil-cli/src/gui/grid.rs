//! Scrolling grid of stored readings.

use eframe::egui::{self, RichText};
use soil_core::SoilReading;
use soil_store::EXPORT_HEADER;
use soil_store::export::csv_row;

use super::theme::Theme;

/// Draw the grid. Returns the id of a row clicked this frame.
pub fn show_grid(
    ui: &mut egui::Ui,
    theme: &Theme,
    rows: &[SoilReading],
    selected: Option<i64>,
    max_height: f32,
) -> Option<i64> {
    let mut clicked = None;

    egui::ScrollArea::both()
        .id_salt("readings_grid_scroll")
        .max_height(max_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("readings_grid")
                .striped(true)
                .num_columns(EXPORT_HEADER.len())
                .spacing([theme.spacing.md, theme.spacing.xs])
                .show(ui, |ui| {
                    for header in EXPORT_HEADER {
                        ui.label(
                            RichText::new(header)
                                .strong()
                                .color(theme.text_primary)
                                .size(theme.typography.body),
                        );
                    }
                    ui.end_row();

                    for reading in rows {
                        let is_selected = selected == Some(reading.id);
                        for cell in csv_row(reading) {
                            if ui.selectable_label(is_selected, cell).clicked() {
                                clicked = Some(reading.id);
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    clicked
}
