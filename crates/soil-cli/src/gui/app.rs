//! Main window.

use eframe::egui::{self, RichText};
use soil_core::{RandomGenerator, Store};

use super::components::{action_button, section_header};
use super::dialogs::show_modal;
use super::grid::show_grid;
use super::plot::show_chart;
use super::state::{Action, AppState};
use super::theme::{Theme, ThemeMode};

/// Toolbar buttons, left to right.
pub const TOOLBAR: [(&str, Action); 6] = [
    ("Insert Random Data", Action::InsertRandom),
    ("Export Data as CSV", Action::Export),
    ("Show Graph", Action::ShowGraph),
    ("Refresh Data", Action::Refresh),
    ("Delete Selected Data", Action::DeleteSelected),
    ("Delete All Records", Action::DeleteAll),
];

/// The soil-health data manager window.
pub struct SoilApp {
    state: AppState<Store, RandomGenerator>,
    theme_mode: ThemeMode,
    theme: Theme,
}

impl SoilApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: AppState<Store, RandomGenerator>,
        theme_mode: ThemeMode,
    ) -> Self {
        let theme = Theme::for_mode(theme_mode);
        cc.egui_ctx.set_style(theme.to_style());
        Self {
            state,
            theme_mode,
            theme,
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme_mode.toggle();
        self.theme = Theme::for_mode(self.theme_mode);
        ctx.set_style(self.theme.to_style());
    }

    fn render_toolbar(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.horizontal_wrapped(|ui| {
            for (label, button_action) in TOOLBAR {
                let danger = matches!(button_action, Action::DeleteAll);
                if action_button(ui, &self.theme, label, danger) {
                    action = Some(button_action);
                }
            }
        });
        action
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            let selected = match self.state.selected() {
                Some(id) => format!("Selected ID {}", id),
                None => "No selection".to_string(),
            };
            ui.label(
                RichText::new(format!(
                    "{} records  |  {}  |  Export to {}",
                    self.state.rows().len(),
                    selected,
                    self.state.export_path().display()
                ))
                .color(self.theme.text_muted)
                .size(self.theme.typography.caption),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button(self.theme_mode.toggle_label()).clicked() {
                    self.toggle_theme(ctx);
                }
            });
        });
    }
}

impl eframe::App for SoilApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending = None;
        let blocked = self.state.modal().is_some();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(self.theme.spacing.xs);
            ui.add_enabled_ui(!blocked, |ui| {
                if let Some(action) = self.render_toolbar(ui) {
                    pending = Some(action);
                }
            });
            ui.add_space(self.theme.spacing.xs);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                section_header(ui, &self.theme, "Soil Health Records");
                let grid_height = (ui.available_height() * 0.45).max(120.0);
                if let Some(id) = show_grid(
                    ui,
                    &self.theme,
                    self.state.rows(),
                    self.state.selected(),
                    grid_height,
                ) {
                    pending = Some(Action::Select(id));
                }
                ui.separator();
                show_chart(ui, &self.theme, self.state.chart());
            });
        });

        if let Some(modal) = self.state.modal()
            && let Some(response) = show_modal(ctx, &self.theme, modal)
        {
            pending = Some(Action::Modal(response));
        }

        if let Some(action) = pending {
            self.state.handle(action);
        }
    }
}
