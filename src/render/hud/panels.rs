//! Overlay panel definitions and rendering.

use egui::{Align2, Context, Window};

use super::state::HudState;
use super::theme::{CardColors, CardTypography};
use super::widgets::{key_value, section_header, ContactRow, MonogramBadge};
use super::ExportAction;
use crate::config::ProfileRecord;
use crate::state::FrameMetrics;

/// Render all panels; returns any export action a button raised this frame
pub fn render_panels(
    ctx: &Context,
    state: &HudState,
    metrics: &FrameMetrics,
    profile: &ProfileRecord,
) -> Option<ExportAction> {
    if !state.hud_enabled {
        return None;
    }

    let mut action = None;

    if state.show_card {
        action = action.or(render_card_panel(ctx, profile));
    }

    if state.show_contacts {
        render_contacts_panel(ctx, profile);
    }

    if state.show_status {
        render_status_panel(ctx, metrics);
    }

    if state.show_help {
        render_help_overlay(ctx);
    }

    if state.show_export_menu {
        action = action.or(render_export_menu(ctx));
    }

    action
}

/// Main card panel (center-left)
fn render_card_panel(ctx: &Context, profile: &ProfileRecord) -> Option<ExportAction> {
    let mut action = None;

    Window::new("card")
        .title_bar(false)
        .anchor(Align2::CENTER_CENTER, [-140.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.set_max_width(360.0);
            ui.vertical_centered(|ui| {
                ui.add(MonogramBadge::new(&profile.monogram).size(84.0));
                ui.add_space(6.0);

                ui.label(
                    egui::RichText::new(&profile.company_name)
                        .size(CardTypography::COMPANY_SIZE)
                        .color(CardColors::TEXT_PRIMARY)
                        .strong(),
                );

                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);

                ui.label(
                    egui::RichText::new(&profile.person_name)
                        .size(CardTypography::NAME_SIZE)
                        .color(CardColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(profile.title.to_uppercase())
                        .size(CardTypography::TITLE_SIZE)
                        .color(CardColors::ACCENT)
                        .italics(),
                );

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&profile.bio)
                        .size(CardTypography::BODY_SIZE)
                        .color(CardColors::TEXT_SECONDARY),
                );

                ui.add_space(12.0);
                if ui.button("Save contact (.vcf)").clicked() {
                    action = Some(ExportAction::ContactCard);
                }
            });
        });

    action
}

/// Contacts panel (right of the card)
fn render_contacts_panel(ctx: &Context, profile: &ProfileRecord) {
    Window::new("contacts")
        .title_bar(false)
        .anchor(Align2::CENTER_CENTER, [260.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.set_min_width(220.0);

            section_header(ui, "CONTACT");
            ui.add(ContactRow::new("\u{2709}", &profile.contacts.email));
            ui.add(ContactRow::new("\u{260E}", &profile.contacts.phone));
            ui.add(ContactRow::new("\u{2316}", &profile.contacts.address));
        });
}

/// Status panel (top-left)
fn render_status_panel(ctx: &Context, metrics: &FrameMetrics) {
    Window::new("STATUS")
        .anchor(Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(150.0);

            key_value(ui, "FPS", &format!("{:.0}", metrics.fps), None);
            key_value(ui, "Frame", &format!("{}", metrics.frame), None);
            key_value(ui, "Blobs", &format!("{}", metrics.blob_count), None);
            key_value(
                ui,
                "Mean speed",
                &format!("{:.2} px/f", metrics.mean_speed),
                None,
            );
            key_value(
                ui,
                "Max speed",
                &format!("{:.2} px/f", metrics.max_speed),
                None,
            );
            key_value(
                ui,
                "Pointer",
                &format!("{:.0},{:.0}", metrics.pointer.x, metrics.pointer.y),
                None,
            );

            ui.add_space(4.0);
            let (text, color) = if metrics.paused {
                ("PAUSED", CardColors::ACCENT)
            } else {
                ("RUNNING", CardColors::SUCCESS)
            };
            key_value(ui, "Field", text, Some(color));
        });
}

/// Help overlay (center)
fn render_help_overlay(ctx: &Context) {
    Window::new("KEYBOARD SHORTCUTS")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            section_header(ui, "CARD");
            key_value(ui, "C", "Save contact (.vcf)", None);
            key_value(ui, "E", "Export menu", None);

            section_header(ui, "BACKDROP");
            key_value(ui, "P", "Pause/resume field", None);
            key_value(ui, "F12", "Backdrop screenshot", None);

            section_header(ui, "OVERLAY");
            key_value(ui, "S", "Status panel", None);
            key_value(ui, "Tab", "Toggle overlay", None);
            key_value(ui, "H", "Toggle help", None);
            key_value(ui, "Escape", "Quit", None);

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Press H to close")
                    .size(CardTypography::SMALL_SIZE)
                    .color(CardColors::TEXT_LABEL),
            );
        });
}

/// Export menu (center)
fn render_export_menu(ctx: &Context) -> Option<ExportAction> {
    let mut action = None;

    Window::new("EXPORT")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(200.0);

            if ui.button("Contact card (VCF)").clicked() {
                action = Some(ExportAction::ContactCard);
            }

            if ui.button("Backdrop (PNG)").clicked() {
                action = Some(ExportAction::Screenshot);
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Press E to close")
                    .size(CardTypography::SMALL_SIZE)
                    .color(CardColors::TEXT_LABEL),
            );
        });

    action
}
