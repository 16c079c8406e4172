//! Custom widgets for the card overlay.

use egui::{Color32, Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};

use super::theme::{CardColors, CardTypography};
use crate::config::ContactItem;

/// Circular monogram badge standing in for the company logo
pub struct MonogramBadge {
    initials: String,
    size: f32,
}

impl MonogramBadge {
    pub fn new(initials: impl Into<String>) -> Self {
        Self {
            initials: initials.into(),
            size: 72.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Widget for MonogramBadge {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = self.size / 2.0 - 2.0;

            painter.circle_filled(center, radius, CardColors::BADGE_BG);
            painter.circle_stroke(center, radius, Stroke::new(3.0, CardColors::BORDER));

            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &self.initials,
                egui::FontId::new(self.size * 0.32, egui::FontFamily::Proportional),
                CardColors::TEXT_PRIMARY,
            );
        }

        response
    }
}

/// One contact row: glyph plus a hyperlink, or a plain label when the
/// entry has no link target
pub struct ContactRow<'a> {
    glyph: &'a str,
    item: &'a ContactItem,
}

impl<'a> ContactRow<'a> {
    pub fn new(glyph: &'a str, item: &'a ContactItem) -> Self {
        Self { glyph, item }
    }
}

impl Widget for ContactRow<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.glyph)
                    .size(CardTypography::TITLE_SIZE)
                    .color(CardColors::ACCENT),
            );

            let text = egui::RichText::new(&self.item.text).size(CardTypography::BODY_SIZE);
            match &self.item.link {
                Some(link) => {
                    ui.hyperlink_to(text, link);
                }
                None => {
                    ui.label(text.color(CardColors::TEXT_SECONDARY));
                }
            }
        });

        response.response
    }
}

/// Section header with subtle line
pub fn section_header(ui: &mut Ui, text: &str) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(CardTypography::LABEL_SIZE)
                .color(CardColors::TEXT_LABEL)
                .strong(),
        );
        ui.add_space(4.0);
        let rect = ui.available_rect_before_wrap();
        ui.painter().line_segment(
            [
                Pos2::new(rect.left(), rect.center().y),
                Pos2::new(rect.right(), rect.center().y),
            ],
            Stroke::new(1.0, CardColors::BORDER),
        );
    });
    ui.add_space(2.0);
}

/// Key-value pair in compact format
pub fn key_value(ui: &mut Ui, key: &str, value: &str, color: Option<Color32>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(key)
                .size(CardTypography::LABEL_SIZE)
                .color(CardColors::TEXT_LABEL),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(CardTypography::BODY_SIZE)
                    .family(egui::FontFamily::Monospace)
                    .color(color.unwrap_or(CardColors::TEXT_PRIMARY)),
            );
        });
    });
}
