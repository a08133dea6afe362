//! Small reusable widgets.

use eframe::egui::{self, RichText, Ui};

use super::theme::Theme;

/// Centered placeholder for an empty panel.
pub fn empty_state(ui: &mut Ui, theme: &Theme, title: &str, description: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme.spacing.lg);
        ui.label(
            RichText::new(title)
                .color(theme.text_secondary)
                .size(theme.typography.subheading)
                .strong(),
        );
        ui.add_space(theme.spacing.xs);
        ui.label(
            RichText::new(description)
                .color(theme.text_muted)
                .size(theme.typography.body),
        );
    });
}

/// Section heading.
pub fn section_header(ui: &mut Ui, theme: &Theme, title: &str) {
    ui.label(
        RichText::new(title)
            .color(theme.text_primary)
            .size(theme.typography.subheading)
            .strong(),
    );
    ui.add_space(theme.spacing.sm);
}

/// Toolbar button. Danger buttons are filled red.
pub fn action_button(ui: &mut Ui, theme: &Theme, label: &str, danger: bool) -> bool {
    let button = if danger {
        egui::Button::new(RichText::new(label).color(theme.text_on_accent)).fill(theme.danger)
    } else {
        egui::Button::new(RichText::new(label).color(theme.text_primary)).fill(theme.bg_card)
    };
    ui.add(button).clicked()
}
