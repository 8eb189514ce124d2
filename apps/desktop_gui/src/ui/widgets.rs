//! Small reusable pieces of the page: reveal wrapper, nav links, tags, form control.

use eframe::egui;
use shared::domain::SubmissionStatus;

use crate::ui::theme;

pub fn to_page_rect(rect: egui::Rect) -> page_core::Rect {
    page_core::Rect::from_min_max(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

/// Lays out `add_contents` with an eased fade and slide keyed off `revealed`.
///
/// The block keeps the same total height whatever the animation progress,
/// so revealing never shifts the rest of the page. Returns the block rect.
pub fn reveal_block(
    ui: &mut egui::Ui,
    id: egui::Id,
    revealed: bool,
    duration: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Rect {
    let progress = ui
        .ctx()
        .animate_bool_with_time_and_easing(id, revealed, duration, egui::emath::easing::cubic_in_out);
    let offset = (1.0 - progress) * theme::REVEAL_OFFSET;

    ui.scope(|ui| {
        ui.set_opacity(progress);
        ui.add_space(offset);
        add_contents(ui);
        ui.add_space(theme::REVEAL_OFFSET - offset);
    })
    .response
    .rect
}

pub fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let (text_color, fill) = if active {
        (theme::ON_ACCENT, theme::ACCENT)
    } else {
        (theme::TEXT, egui::Color32::TRANSPARENT)
    };
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(text_color).strong())
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .corner_radius(6.0),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn tag_pill(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::NONE
        .fill(theme::ACCENT)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(tag)
                    .size(11.0)
                    .strong()
                    .color(theme::ON_ACCENT),
            );
        });
}

pub fn accent_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(theme::ON_ACCENT).strong())
            .fill(theme::ACCENT)
            .corner_radius(6.0),
    )
}

/// Draws whatever replaces the submit button for `status`; `true` when the
/// user asked to submit this frame.
pub fn submission_control(ui: &mut egui::Ui, status: SubmissionStatus) -> bool {
    let size = egui::vec2(ui.available_width(), 44.0);
    match status {
        SubmissionStatus::Idle => ui
            .add_sized(
                size,
                egui::Button::new(
                    egui::RichText::new("Send Message")
                        .color(theme::ON_ACCENT)
                        .strong(),
                )
                .fill(theme::ACCENT)
                .corner_radius(6.0),
            )
            .clicked(),
        SubmissionStatus::Sending => {
            ui.add_enabled_ui(false, |ui| {
                ui.allocate_ui_with_layout(
                    size,
                    egui::Layout::left_to_right(egui::Align::Center),
                    |ui| {
                        egui::Frame::NONE
                            .fill(theme::ACCENT.gamma_multiply(0.7))
                            .corner_radius(6.0)
                            .inner_margin(egui::Margin::symmetric(14, 10))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.add(egui::Spinner::new().color(theme::ON_ACCENT));
                                    ui.label(
                                        egui::RichText::new("Sending...")
                                            .color(theme::ON_ACCENT)
                                            .strong(),
                                    );
                                });
                            });
                    },
                );
            });
            false
        }
        SubmissionStatus::Success => {
            status_badge(ui, "✔ Message Sent!", theme::SUCCESS_BG, theme::SUCCESS_TEXT);
            false
        }
        SubmissionStatus::Error => {
            status_badge(ui, "⚠ Something went wrong.", theme::ERROR_BG, theme::ERROR_TEXT);
            false
        }
    }
}

fn status_badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32, color: egui::Color32) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(text).color(color).strong());
            });
        });
}
