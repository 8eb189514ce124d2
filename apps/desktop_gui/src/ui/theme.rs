//! Colors and style tweaks for the portfolio window.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xCC, 0xFF, 0x00);
pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
pub const SECTION_ALT_BG: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const NAV_BG: egui::Color32 = egui::Color32::from_rgba_premultiplied(2, 6, 23, 220);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const INPUT_BG: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(203, 213, 225);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const TEXT_FAINT: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const HEADING: egui::Color32 = egui::Color32::WHITE;
pub const ON_ACCENT: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const SUCCESS_BG: egui::Color32 = egui::Color32::from_rgb(110, 231, 183);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(6, 78, 59);
pub const ERROR_BG: egui::Color32 = egui::Color32::from_rgb(253, 164, 175);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(136, 19, 55);

/// Content column width, similar to a centered max-width container.
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const FORM_MAX_WIDTH: f32 = 640.0;
/// Vertical distance a hidden block sits below its resting position.
pub const REVEAL_OFFSET: f32 = 32.0;

pub fn apply(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = PAGE_BG;
        style.visuals.window_fill = PAGE_BG;
        style.visuals.extreme_bg_color = INPUT_BG;
        style.visuals.override_text_color = Some(TEXT);
        style.visuals.hyperlink_color = TEXT_MUTED;
        style.visuals.selection.bg_fill = ACCENT;
        style.visuals.selection.stroke = egui::Stroke::new(1.0, ON_ACCENT);
        style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
        style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
        style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
    });
}
