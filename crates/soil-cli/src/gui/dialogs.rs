//! Modal dialogs: message boxes and the delete-all confirmation.

use eframe::egui::{self, RichText};
use soil_core::{Confirmation, Error};

use super::theme::Theme;

/// Severity of a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A titled message with an OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// Dialog for a failed controller action.
    ///
    /// Empty-table and missing-selection cases are warnings; everything else
    /// is an error carrying the underlying message.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::NoData => Self::warning("No Data", "No data available to display!"),
            Error::NoSelection => Self::warning("No Selection", "Please select a row to delete."),
            other => Self::error(other.to_string()),
        }
    }
}

/// The dialog currently blocking the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Message(Dialog),
    ConfirmDeleteAll,
}

/// What the user did with the open modal this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResponse {
    Dismissed,
    Answered(Confirmation),
}

pub const CONFIRM_DELETE_ALL_TITLE: &str = "Delete All Records";
pub const CONFIRM_DELETE_ALL_MESSAGE: &str = "Are you sure you want to delete all records?";

/// Draw `modal` centered over the window.
pub fn show_modal(ctx: &egui::Context, theme: &Theme, modal: &Modal) -> Option<ModalResponse> {
    match modal {
        Modal::Message(dialog) => show_message(ctx, theme, dialog),
        Modal::ConfirmDeleteAll => show_confirm(ctx, theme),
    }
}

fn show_message(ctx: &egui::Context, theme: &Theme, dialog: &Dialog) -> Option<ModalResponse> {
    let color = match dialog.kind {
        DialogKind::Info => theme.info,
        DialogKind::Warning => theme.warning,
        DialogKind::Error => theme.danger,
    };
    let mut response = None;

    egui::Window::new(dialog.title.as_str())
        .id(egui::Id::new("soil_message_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(&dialog.message)
                    .color(color)
                    .size(theme.typography.body),
            );
            ui.add_space(theme.spacing.md);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    response = Some(ModalResponse::Dismissed);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        response = Some(ModalResponse::Dismissed);
    }
    response
}

fn show_confirm(ctx: &egui::Context, theme: &Theme) -> Option<ModalResponse> {
    let mut response = None;

    egui::Window::new(CONFIRM_DELETE_ALL_TITLE)
        .id(egui::Id::new("soil_confirm_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(CONFIRM_DELETE_ALL_MESSAGE).size(theme.typography.body));
            ui.add_space(theme.spacing.md);
            ui.horizontal(|ui| {
                let yes = egui::Button::new(
                    RichText::new("Yes").color(theme.text_on_accent),
                )
                .fill(theme.danger);
                if ui.add(yes).clicked() {
                    response = Some(ModalResponse::Answered(Confirmation::Yes));
                }
                // "No" is the default answer.
                if ui.button("No").clicked() {
                    response = Some(ModalResponse::Answered(Confirmation::No));
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        response = Some(ModalResponse::Answered(Confirmation::No));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_is_warning() {
        let dialog = Dialog::from_error(&Error::NoData);
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.title, "No Data");
        assert_eq!(dialog.message, "No data available to display!");
    }

    #[test]
    fn test_no_selection_is_warning() {
        let dialog = Dialog::from_error(&Error::NoSelection);
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.message, "Please select a row to delete.");
    }

    #[test]
    fn test_storage_failure_is_error() {
        let dialog = Dialog::from_error(&Error::Gateway("connection lost".to_string()));
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.title, "Error");
        assert!(dialog.message.contains("connection lost"));
    }
}
