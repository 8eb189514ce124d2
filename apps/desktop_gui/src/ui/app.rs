use std::{collections::BTreeMap, f32::consts::TAU, time::Duration};

use chrono::{Datelike, Local};
use crossbeam_channel::{unbounded, Receiver};
use eframe::egui;
use page_core::{page::PageEvent, EffectRuntime, Page, PageSettings, RootMargin};
use shared::{
    content::{PortfolioContent, Project},
    domain::{ElementId, FormField, ProjectId, SectionId},
};

use crate::backend_bridge::runtime::BackendRuntime;
use crate::controller::events::UiAction;
use crate::controller::orchestration::{dispatch_page_event, drain_effect_events};
use crate::ui::{theme, widgets};

const HERO_BLOCK: ElementId = ElementId(100);
const PROJECTS_HEADER_BLOCK: ElementId = ElementId(101);
const CONTACT_BLOCK: ElementId = ElementId(102);

fn section_element(section: SectionId) -> ElementId {
    match section {
        SectionId::About => ElementId(1),
        SectionId::Projects => ElementId(2),
        SectionId::Contact => ElementId(3),
    }
}

fn project_block(project: ProjectId) -> ElementId {
    ElementId(1_000 + project.0)
}

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub settings: PageSettings,
    pub section_margin: RootMargin,
    pub content: PortfolioContent,
}

/// Everything a frame's drawing code hands back to the app.
#[derive(Default)]
struct FrameOutput {
    viewport: Option<page_core::Rect>,
    layout: BTreeMap<ElementId, page_core::Rect>,
    actions: Vec<UiAction>,
    scrolled_to: Option<SectionId>,
}

pub struct PortfolioApp {
    content: PortfolioContent,
    reveal_duration: f32,
    page: Page,
    effects: EffectRuntime,
    page_events: Receiver<PageEvent>,
    pending_scroll: Option<SectionId>,
    // Declared last so effect tasks are aborted before their runtime goes away.
    _backend: BackendRuntime,
}

impl PortfolioApp {
    pub fn new(ctx: &egui::Context, startup: StartupConfig, backend: BackendRuntime) -> Self {
        theme::apply(ctx);

        let (events_tx, page_events) = unbounded();
        let repaint_ctx = ctx.clone();
        let effects = backend.effects(&startup.settings, events_tx, move || {
            repaint_ctx.request_repaint()
        });

        let mut page = Page::from_settings(&startup.settings, startup.section_margin);
        for section in SectionId::ALL {
            page.register_section(section, section_element(section));
        }
        page.add_revealable(HERO_BLOCK);
        page.add_revealable(PROJECTS_HEADER_BLOCK);
        page.add_revealable(CONTACT_BLOCK);
        for project in &startup.content.projects {
            page.add_revealable(project_block(project.id));
        }
        tracing::info!(
            projects = startup.content.projects.len(),
            section_margin = %startup.section_margin,
            "portfolio page ready"
        );

        Self {
            content: startup.content,
            reveal_duration: startup.settings.reveal_duration().as_secs_f32(),
            page,
            effects,
            page_events,
            pending_scroll: None,
            _backend: backend,
        }
    }

    fn finish_frame(&mut self, ctx: &egui::Context, out: FrameOutput) {
        if out.scrolled_to.is_some() && out.scrolled_to == self.pending_scroll {
            self.pending_scroll = None;
        }

        for action in out.actions {
            if let UiAction::NavigateTo(section) = action {
                self.pending_scroll = Some(section);
                ctx.request_repaint();
                continue;
            }
            if let Some(event) = action.into_page_event() {
                dispatch_page_event(&mut self.page, &mut self.effects, event);
            }
        }

        if let Some(viewport) = out.viewport {
            let events = self.page.observe_frame(viewport, &out.layout);
            if !events.is_empty() {
                ctx.request_repaint();
            }
            for event in events {
                dispatch_page_event(&mut self.page, &mut self.effects, event);
            }
        }
    }

    fn show_nav_bar(&self, ctx: &egui::Context, out: &mut FrameOutput) {
        egui::TopBottomPanel::top("portfolio_nav")
            .frame(
                egui::Frame::NONE
                    .fill(theme::NAV_BG)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = ui
                        .add(
                            egui::Label::new(
                                egui::RichText::new(format!("</>  {}", self.content.owner_name))
                                    .size(20.0)
                                    .strong()
                                    .color(theme::HEADING),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if brand.clicked() {
                        out.actions.push(UiAction::NavigateTo(SectionId::About));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let active = self.page.active_section();
                        for section in SectionId::ALL.into_iter().rev() {
                            let label = self.content.nav_label(section);
                            if widgets::nav_link(ui, label, active == Some(section)).clicked() {
                                out.actions.push(UiAction::NavigateTo(section));
                            }
                        }
                    });
                });
            });
    }

    fn show_page(&self, ctx: &egui::Context, out: &mut FrameOutput) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::PAGE_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("portfolio_page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        out.viewport = Some(widgets::to_page_rect(ui.clip_rect()));
                        ui.spacing_mut().item_spacing.y = 0.0;

                        self.show_section(ui, out, SectionId::About, None, |app, ui, out| {
                            app.show_about(ui, out)
                        });
                        self.show_section(
                            ui,
                            out,
                            SectionId::Projects,
                            Some(theme::SECTION_ALT_BG),
                            |app, ui, out| app.show_projects(ui, out),
                        );
                        self.show_section(ui, out, SectionId::Contact, None, |app, ui, out| {
                            app.show_contact(ui, out)
                        });
                        self.show_footer(ui);
                    });
            });
    }

    fn show_section(
        &self,
        ui: &mut egui::Ui,
        out: &mut FrameOutput,
        section: SectionId,
        fill: Option<egui::Color32>,
        add_contents: impl FnOnce(&Self, &mut egui::Ui, &mut FrameOutput),
    ) {
        let rect = egui::Frame::NONE
            .fill(fill.unwrap_or(egui::Color32::TRANSPARENT))
            .inner_margin(egui::Margin::symmetric(24, 72))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.spacing_mut().item_spacing.y = 10.0;
                centered_column(ui, theme::CONTENT_MAX_WIDTH, |ui| {
                    add_contents(self, ui, out)
                });
            })
            .response
            .rect;

        out.layout
            .insert(section_element(section), widgets::to_page_rect(rect));
        if self.pending_scroll == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            out.scrolled_to = Some(section);
        }
    }

    fn reveal(
        &self,
        ui: &mut egui::Ui,
        out: &mut FrameOutput,
        element: ElementId,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) {
        let rect = widgets::reveal_block(
            ui,
            egui::Id::new(("reveal", element.0)),
            self.page.reveal_state(element).is_revealed(),
            self.reveal_duration,
            add_contents,
        );
        out.layout.insert(element, widgets::to_page_rect(rect));
    }

    fn show_about(&self, ui: &mut egui::Ui, out: &mut FrameOutput) {
        let mut actions = Vec::new();
        self.reveal(ui, out, HERO_BLOCK, |ui| {
            ui.add_space(48.0);
            ui.columns(2, |columns| {
                let left = &mut columns[0];
                left.label(
                    egui::RichText::new(&self.content.headline)
                        .size(44.0)
                        .strong()
                        .color(theme::HEADING),
                );
                left.label(
                    egui::RichText::new(&self.content.tagline)
                        .size(30.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                left.add_space(12.0);
                left.label(
                    egui::RichText::new(&self.content.bio)
                        .size(17.0)
                        .color(theme::TEXT_MUTED),
                );
                left.add_space(16.0);
                left.horizontal(|ui| {
                    if widgets::accent_button(ui, &self.content.call_to_action).clicked() {
                        actions.push(UiAction::NavigateTo(SectionId::Contact));
                    }
                    ui.add_space(12.0);
                    for link in &self.content.social_links {
                        ui.hyperlink_to(link.name.as_str(), &link.href);
                    }
                });

                let right = &mut columns[1];
                right.vertical_centered(|ui| portrait(ui, &self.content.owner_name));
            });
            ui.add_space(48.0);
        });
        out.actions.extend(actions);
    }

    fn show_projects(&self, ui: &mut egui::Ui, out: &mut FrameOutput) {
        self.reveal(ui, out, PROJECTS_HEADER_BLOCK, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&self.content.projects_heading)
                        .size(34.0)
                        .strong()
                        .color(theme::HEADING),
                );
                ui.label(
                    egui::RichText::new(&self.content.projects_blurb)
                        .size(17.0)
                        .color(theme::TEXT_MUTED),
                );
            });
        });

        for project in &self.content.projects {
            ui.add_space(24.0);
            self.reveal(ui, out, project_block(project.id), |ui| project_card(ui, project));
        }
    }

    fn show_contact(&self, ui: &mut egui::Ui, out: &mut FrameOutput) {
        let mut actions = Vec::new();
        let form = self.page.contact().form();
        let status = self.page.status();

        self.reveal(ui, out, CONTACT_BLOCK, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&self.content.contact_heading)
                        .size(34.0)
                        .strong()
                        .color(theme::HEADING),
                );
                ui.label(
                    egui::RichText::new(&self.content.contact_blurb)
                        .size(17.0)
                        .color(theme::TEXT_MUTED),
                );
            });
            ui.add_space(32.0);

            centered_column(ui, theme::FORM_MAX_WIDTH, |ui| {
                for field in FormField::ALL {
                    let mut value = form.field(field).to_owned();
                    let edit = match field {
                        FormField::Message => egui::TextEdit::multiline(&mut value).desired_rows(4),
                        FormField::Name | FormField::Email => egui::TextEdit::singleline(&mut value),
                    }
                    .id_salt(("contact_field", field))
                    .hint_text(field.placeholder())
                    .margin(egui::Margin::symmetric(12, 10))
                    .desired_width(f32::INFINITY);

                    if ui.add(edit).changed() {
                        actions.push(UiAction::EditField { field, value });
                    }
                    ui.add_space(8.0);
                }

                if widgets::submission_control(ui, status) {
                    actions.push(UiAction::Submit);
                }
            });
        });
        out.actions.extend(actions);
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(theme::SECTION_ALT_BG)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "© {} {}. All rights reserved.",
                            Local::now().year(),
                            self.content.owner_name
                        ))
                        .size(13.0)
                        .color(theme::TEXT_FAINT),
                    );
                });
            });
    }
}

fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(max_width);
    let side = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

fn project_card(ui: &mut egui::Ui, project: &Project) {
    egui::Frame::NONE
        .fill(theme::PAGE_BG)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(&project.title)
                    .size(26.0)
                    .strong()
                    .color(theme::HEADING),
            );
            ui.label(
                egui::RichText::new(&project.description)
                    .size(16.0)
                    .color(theme::TEXT),
            );
            ui.horizontal_wrapped(|ui| {
                for tag in &project.tags {
                    widgets::tag_pill(ui, tag);
                }
            });
            if let Some(url) = &project.image_url {
                ui.hyperlink_to(
                    egui::RichText::new("View cover image").size(12.0),
                    url,
                );
            }
        });
}

/// Initials inside a slowly turning dashed ring.
fn portrait(ui: &mut egui::Ui, owner_name: &str) {
    let diameter = ui.available_width().clamp(160.0, 300.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = diameter / 2.0 - 4.0;

    painter.circle_filled(center, radius - 10.0, theme::SECTION_ALT_BG);

    let turn = (ui.input(|i| i.time) as f32 * 0.15) % 1.0;
    let ring: Vec<egui::Pos2> = (0..=96)
        .map(|step| {
            let angle = TAU * (step as f32 / 96.0 + turn);
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect();
    painter.extend(egui::Shape::dashed_line(
        &ring,
        egui::Stroke::new(2.0, theme::ACCENT),
        8.0,
        6.0,
    ));

    let initials: String = owner_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(diameter / 3.5),
        theme::ACCENT,
    );
    ui.ctx().request_repaint_after(Duration::from_millis(50));
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if drain_effect_events(&mut self.page, &mut self.effects, &self.page_events) > 0 {
            ctx.request_repaint();
        }

        let mut out = FrameOutput::default();
        self.show_nav_bar(ctx, &mut out);
        self.show_page(ctx, &mut out);
        self.finish_frame(ctx, out);
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        let commands = self.page.teardown();
        self.effects.execute_all(commands);
    }
}
