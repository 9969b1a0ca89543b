use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use portfolio_core::{
    render::{AvatarView, PageView},
    ContactForm, FormError, Portfolio, PortfolioSettings, SectionLayout, SourceConfigError,
    ViewportBroadcaster, ViewportSample,
};
use shared::domain::{SectionId, ThemeVariant};
use tokio::runtime::Handle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::sections::{self, PageAction, ScrollTarget};
use crate::ui::theme::{palette_for_theme, visuals_for_theme, PagePalette};

const AVATAR_TEXTURE_NAME: &str = "hero-avatar";
/// Repaint cadence while background work may still deliver updates.
const BACKGROUND_REPAINT: Duration = Duration::from_millis(100);

enum AvatarState {
    Placeholder,
    Loading { url: String },
    Ready { url: String, texture: egui::TextureHandle },
    Failed { url: String },
}

impl AvatarState {
    fn url(&self) -> Option<&str> {
        match self {
            AvatarState::Placeholder => None,
            AvatarState::Loading { url }
            | AvatarState::Ready { url, .. }
            | AvatarState::Failed { url } => Some(url),
        }
    }

    fn texture(&self) -> Option<&egui::TextureHandle> {
        match self {
            AvatarState::Ready { texture, .. } => Some(texture),
            _ => None,
        }
    }
}

pub struct PortfolioApp {
    portfolio: Portfolio,
    viewport: ViewportBroadcaster,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: ContactForm,
    form_error: Option<FormError>,
    avatar: AvatarState,
    applied_theme: Option<ThemeVariant>,
    pending_scroll: Option<ScrollTarget>,
    /// Section tops measured during the previous frame.
    layout: SectionLayout,
    status: String,
}

impl PortfolioApp {
    pub fn new(
        settings: PortfolioSettings,
        runtime: Handle,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Result<Self, SourceConfigError> {
        let viewport = ViewportBroadcaster::new();
        let portfolio = Portfolio::mount_github(settings, &viewport, runtime)?;
        Ok(Self {
            portfolio,
            viewport,
            cmd_tx,
            ui_rx,
            form: ContactForm::default(),
            form_error: None,
            avatar: AvatarState::Placeholder,
            applied_theme: None,
            pending_scroll: None,
            layout: SectionLayout::new(),
            status: String::new(),
        })
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context, theme: ThemeVariant) {
        if self.applied_theme == Some(theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(theme);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.interact_size = egui::vec2(40.0, 30.0);
        ctx.set_style(style);
        self.applied_theme = Some(theme);
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::AvatarLoaded { url, image } => {
                    if self.avatar.url() != Some(url.as_str()) {
                        continue;
                    }
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    let texture = ctx.load_texture(
                        AVATAR_TEXTURE_NAME,
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.avatar = AvatarState::Ready { url, texture };
                }
                UiEvent::AvatarFailed { url, reason } => {
                    if self.avatar.url() == Some(url.as_str()) {
                        self.status = format!("Avatar unavailable: {reason}");
                        self.avatar = AvatarState::Failed { url };
                    }
                }
            }
        }
    }

    fn request_avatar_if_needed(&mut self, avatar: &AvatarView) {
        let AvatarView::Remote(url) = avatar else {
            return;
        };
        if self.avatar.url() == Some(url.as_str()) {
            return;
        }
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchAvatar { url: url.clone() },
            &mut self.status,
        );
        self.avatar = AvatarState::Loading { url: url.clone() };
    }

    fn show_page(
        &mut self,
        ui: &mut egui::Ui,
        view: &PageView,
        palette: PagePalette,
        actions: &mut Vec<PageAction>,
    ) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false]);
        if let Some(target) = self.pending_scroll.take() {
            match scroll_offset_for(target, &self.layout) {
                Some(offset) => area = area.vertical_scroll_offset(offset),
                None => tracing::debug!(?target, "scroll target not measured yet"),
            }
        }

        let mut layout = SectionLayout::new();
        let form = &mut self.form;
        let form_error = self.form_error.as_ref();
        let avatar_texture = self.avatar.texture();
        let output = area.show(ui, |ui| {
            let origin = ui.min_rect().top();
            for section in SectionId::ALL {
                layout.set_top(section, ui.cursor().top() - origin);
                let fill = match section {
                    SectionId::About | SectionId::Skills => palette.section_fill,
                    _ => ui.visuals().panel_fill,
                };
                ui.push_id(section.anchor(), |ui| {
                    sections::section_frame(fill).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        match section {
                            SectionId::Home => {
                                sections::hero(ui, &view.hero, avatar_texture, palette, actions)
                            }
                            SectionId::About => sections::about(ui, &view.about, palette),
                            SectionId::Projects => {
                                sections::projects(ui, &view.projects, palette)
                            }
                            SectionId::Skills => sections::skills(ui, &view.skills, palette),
                            SectionId::Contact => sections::contact(
                                ui,
                                &view.contact,
                                form,
                                form_error,
                                palette,
                                actions,
                            ),
                        }
                    });
                });
            }
            sections::section_frame(palette.section_fill).show(ui, |ui| {
                ui.set_width(ui.available_width());
                sections::footer(ui, &view.footer, palette);
            });
        });

        let sample = ViewportSample {
            offset: output.state.offset.y,
            layout: layout.clone(),
        };
        if self.viewport.publish(sample) {
            ui.ctx().request_repaint();
        }
        self.layout = layout;
    }

    fn show_scroll_to_top(&self, ctx: &egui::Context, actions: &mut Vec<PageAction>) {
        egui::Area::new(egui::Id::new("scroll_to_top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                if ui
                    .button(egui::RichText::new("⬆").size(20.0))
                    .on_hover_text("Volver arriba")
                    .clicked()
                {
                    actions.push(PageAction::ScrollTo(ScrollTarget::Top));
                }
            });
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<PageAction>) {
        for action in actions {
            match action {
                PageAction::Navigate(section) => {
                    self.portfolio.select_nav_link();
                    self.pending_scroll = Some(ScrollTarget::Section(section));
                }
                PageAction::ScrollTo(target) => self.pending_scroll = Some(target),
                PageAction::ToggleTheme => self.portfolio.toggle_theme(),
                PageAction::ToggleMenu => self.portfolio.toggle_menu(),
                PageAction::SubmitContact => {
                    self.form_error = self.portfolio.submit_contact(&mut self.form).err();
                }
            }
            ctx.request_repaint();
        }
    }
}

/// Content offset that brings `target` to the top of the viewport.
pub fn scroll_offset_for(target: ScrollTarget, layout: &SectionLayout) -> Option<f32> {
    match target {
        ScrollTarget::Top => Some(0.0),
        ScrollTarget::Section(section) => layout.top(section).map(|top| top.max(0.0)),
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let changed = self.portfolio.sync();
        self.process_ui_events(ctx);

        let view = self.portfolio.render();
        self.apply_theme_if_needed(ctx, view.theme);
        self.request_avatar_if_needed(&view.hero.avatar);
        let palette = palette_for_theme(view.theme);
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                sections::header(ui, &view.header, palette, &mut actions);
                if !self.status.is_empty() {
                    ui.label(egui::RichText::new(&self.status).small().color(palette.muted_text));
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| self.show_page(ui, &view, palette, &mut actions));

        if view.show_scroll_top {
            self.show_scroll_to_top(ctx, &mut actions);
        }

        self.apply_actions(ctx, actions);

        if changed {
            ctx.request_repaint();
        }
        if self.portfolio.is_fetch_in_flight()
            || self.portfolio.has_pending_form_reset()
            || matches!(self.avatar, AvatarState::Loading { .. })
        {
            ctx.request_repaint_after(BACKGROUND_REPAINT);
        }
    }
}
