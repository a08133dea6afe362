//! Colors and sizes for the soil-health window.

use eframe::egui::{self, Color32, CornerRadius, Margin, Shadow, Stroke, Style, Visuals};
use soil_core::chart::NutrientSeries;
use soil_types::Nutrient;

/// Light or dark palette, chosen by the `gui.theme` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse the `gui.theme` config value. Unknown values fall back to dark.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("light") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    fn other(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.other();
    }

    /// Label for the status-bar button that switches away from this mode.
    pub fn toggle_label(&self) -> &'static str {
        match self.other() {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
        }
    }
}

/// Gaps between widgets, in points.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
}

const SPACING: Spacing = Spacing {
    xs: 4.0,
    sm: 8.0,
    md: 16.0,
    lg: 24.0,
};

/// Font sizes, in points.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    pub caption: f32,
    pub body: f32,
    pub subheading: f32,
}

const TYPOGRAPHY: Typography = Typography {
    caption: 11.0,
    body: 14.0,
    subheading: 18.0,
};

const CORNER: u8 = 6;

/// Resolved palette for one [`ThemeMode`].
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub panel: Color32,
    pub window: Color32,
    pub bg_card: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub accent: Color32,
    pub info: Color32,
    pub warning: Color32,
    pub danger: Color32,
    /// Line colors, indexed in [`Nutrient::ALL`] order.
    nutrients: [Color32; 3],
    pub spacing: Spacing,
    pub typography: Typography,
}

impl Theme {
    /// Soil browns on near-black.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            panel: Color32::from_rgb(18, 16, 14),
            window: Color32::from_rgb(30, 27, 24),
            bg_card: Color32::from_rgb(44, 40, 36),
            border: Color32::from_rgb(68, 62, 56),
            text_primary: Color32::from_rgb(245, 240, 232),
            text_secondary: Color32::from_rgb(214, 206, 196),
            text_muted: Color32::from_rgb(160, 150, 138),
            text_on_accent: Color32::WHITE,
            accent: Color32::from_rgb(101, 163, 13),
            info: Color32::from_rgb(56, 189, 248),
            warning: Color32::from_rgb(245, 180, 40),
            danger: Color32::from_rgb(229, 72, 60),
            nutrients: [
                Color32::from_rgb(96, 165, 250),
                Color32::from_rgb(251, 146, 60),
                Color32::from_rgb(163, 230, 53),
            ],
            spacing: SPACING,
            typography: TYPOGRAPHY,
        }
    }

    /// Warm paper background.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            panel: Color32::from_rgb(250, 248, 244),
            window: Color32::from_rgb(241, 237, 230),
            bg_card: Color32::WHITE,
            border: Color32::from_rgb(214, 206, 196),
            text_primary: Color32::from_rgb(33, 28, 24),
            text_secondary: Color32::from_rgb(72, 64, 56),
            text_muted: Color32::from_rgb(120, 110, 100),
            text_on_accent: Color32::WHITE,
            accent: Color32::from_rgb(77, 124, 15),
            info: Color32::from_rgb(2, 132, 199),
            warning: Color32::from_rgb(180, 110, 0),
            danger: Color32::from_rgb(200, 40, 30),
            nutrients: [
                Color32::from_rgb(37, 99, 235),
                Color32::from_rgb(234, 88, 12),
                Color32::from_rgb(77, 124, 15),
            ],
            spacing: SPACING,
            typography: TYPOGRAPHY,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Line color for a nutrient.
    pub fn nutrient_color(&self, nutrient: Nutrient) -> Color32 {
        let index = Nutrient::ALL
            .iter()
            .position(|&n| n == nutrient)
            .unwrap_or_default();
        self.nutrients[index]
    }

    pub fn series_color(&self, series: &NutrientSeries) -> Color32 {
        self.nutrient_color(series.nutrient)
    }

    /// egui style with this palette applied.
    pub fn to_style(&self) -> Style {
        let mut style = Style {
            visuals: self.to_visuals(),
            ..Default::default()
        };
        style.spacing.item_spacing = egui::vec2(self.spacing.sm, self.spacing.sm);
        style.spacing.button_padding = egui::vec2(self.spacing.md * 0.75, self.spacing.xs * 1.5);
        style.spacing.window_margin = Margin::same(self.spacing.md as i8);
        style
    }

    pub fn to_visuals(&self) -> Visuals {
        let mut visuals = match self.mode {
            ThemeMode::Dark => Visuals::dark(),
            ThemeMode::Light => Visuals::light(),
        };

        visuals.panel_fill = self.panel;
        visuals.window_fill = self.window;
        visuals.faint_bg_color = self.window;
        visuals.extreme_bg_color = self.bg_card;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = Shadow {
            offset: [0, 2],
            blur: 10,
            spread: 0,
            color: Color32::from_black_alpha(if self.is_dark() { 60 } else { 25 }),
        };
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.warn_fg_color = self.warning;
        visuals.error_fg_color = self.danger;

        let widgets = &mut visuals.widgets;
        let states = [
            (&mut widgets.noninteractive, self.window, self.text_primary),
            (&mut widgets.inactive, self.bg_card, self.text_secondary),
            (&mut widgets.hovered, self.accent.gamma_multiply(0.6), self.text_on_accent),
            (&mut widgets.active, self.accent, self.text_on_accent),
        ];
        for (state, fill, text) in states {
            state.bg_fill = fill;
            state.weak_bg_fill = fill;
            state.fg_stroke.color = text;
            state.bg_stroke = Stroke::new(1.0, self.border);
            state.corner_radius = CornerRadius::same(CORNER);
        }

        visuals
    }
}
