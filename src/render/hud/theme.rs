//! Overlay theme - midnight business-card look.
//!
//! Dark slate panels with a blue accent, matching the blob field's hue
//! range.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Overlay color palette
pub struct CardColors;

impl CardColors {
    // === Background Colors ===
    /// Near-black with blue tint - main background
    pub const BACKGROUND: Color32 = Color32::from_rgb(3, 7, 18);
    /// Dark slate panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(17, 24, 39, 242);
    /// Slightly lighter for hover states
    pub const PANEL_BG_HOVER: Color32 = Color32::from_rgb(31, 41, 55);

    // === Text Colors ===
    /// Cool white - headline text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
    /// Muted gray - body text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(209, 213, 219);
    /// Dim gray - labels
    pub const TEXT_LABEL: Color32 = Color32::from_rgb(140, 148, 160);

    // === Accents ===
    /// Card blue - titles, links, the badge ring
    pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
    /// Badge fill
    pub const BADGE_BG: Color32 = Color32::from_rgb(12, 12, 27);
    /// Divider and panel border
    pub const BORDER: Color32 = Color32::from_rgb(55, 65, 81);
    /// Confirmation green for export feedback
    pub const SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
}

/// Typography settings
pub struct CardTypography;

impl CardTypography {
    /// Person name display size
    pub const NAME_SIZE: f32 = 30.0;
    /// Company name size
    pub const COMPANY_SIZE: f32 = 20.0;
    /// Job title size
    pub const TITLE_SIZE: f32 = 15.0;
    /// Body/biography size
    pub const BODY_SIZE: f32 = 13.0;
    /// Label size
    pub const LABEL_SIZE: f32 = 11.0;
    /// Small annotation size
    pub const SMALL_SIZE: f32 = 10.0;
}

/// Overlay theme configuration
pub struct CardTheme {
    /// Panel corner rounding
    pub panel_rounding: f32,
    /// Button rounding
    pub button_rounding: f32,
    /// Panel padding
    pub panel_padding: f32,
    /// Spacing between elements
    pub item_spacing: f32,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            panel_rounding: 12.0,
            button_rounding: 6.0,
            panel_padding: 18.0,
            item_spacing: 6.0,
        }
    }
}

impl CardTheme {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::dark();

        visuals.panel_fill = CardColors::PANEL_BG;
        visuals.window_fill = CardColors::PANEL_BG;
        visuals.extreme_bg_color = CardColors::BACKGROUND;
        visuals.faint_bg_color = CardColors::PANEL_BG_HOVER;

        visuals.override_text_color = Some(CardColors::TEXT_SECONDARY);

        visuals.widgets.noninteractive.bg_fill = CardColors::PANEL_BG;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, CardColors::TEXT_SECONDARY);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.panel_rounding);

        visuals.widgets.inactive.bg_fill = CardColors::PANEL_BG_HOVER;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, CardColors::TEXT_SECONDARY);
        visuals.widgets.inactive.rounding = Rounding::same(self.button_rounding);

        visuals.widgets.hovered.bg_fill = CardColors::PANEL_BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, CardColors::ACCENT);
        visuals.widgets.hovered.rounding = Rounding::same(self.button_rounding);

        visuals.widgets.active.bg_fill = CardColors::ACCENT;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, CardColors::TEXT_PRIMARY);

        visuals.hyperlink_color = CardColors::ACCENT;

        visuals.selection.bg_fill = CardColors::ACCENT.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, CardColors::ACCENT);

        visuals.window_stroke = Stroke::new(1.0, CardColors::BORDER);
        visuals.window_rounding = Rounding::same(self.panel_rounding);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.window_margin = egui::Margin::same(self.panel_padding);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(CardTypography::COMPANY_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(CardTypography::BODY_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(CardTypography::SMALL_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(CardTypography::BODY_SIZE, FontFamily::Monospace),
        );

        ctx.set_style(style);
    }
}
