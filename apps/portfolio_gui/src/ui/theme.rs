//! Light and dark palettes for the page.

use eframe::egui;
use shared::domain::ThemeVariant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePalette {
    pub accent: egui::Color32,
    pub section_fill: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub muted_text: egui::Color32,
    pub success_fill: egui::Color32,
    pub success_text: egui::Color32,
}

pub fn palette_for_theme(theme: ThemeVariant) -> PagePalette {
    match theme {
        ThemeVariant::Light => PagePalette {
            accent: egui::Color32::from_rgb(37, 99, 235),
            section_fill: egui::Color32::from_rgb(249, 250, 251),
            card_fill: egui::Color32::WHITE,
            card_stroke: egui::Color32::from_rgb(229, 231, 235),
            muted_text: egui::Color32::from_rgb(75, 85, 99),
            success_fill: egui::Color32::from_rgb(220, 252, 231),
            success_text: egui::Color32::from_rgb(22, 101, 52),
        },
        ThemeVariant::Dark => PagePalette {
            accent: egui::Color32::from_rgb(96, 165, 250),
            section_fill: egui::Color32::from_rgb(17, 24, 39),
            card_fill: egui::Color32::from_rgb(31, 41, 55),
            card_stroke: egui::Color32::from_rgb(55, 65, 81),
            muted_text: egui::Color32::from_rgb(156, 163, 175),
            success_fill: egui::Color32::from_rgb(20, 83, 45),
            success_text: egui::Color32::from_rgb(187, 247, 208),
        },
    }
}

pub fn visuals_for_theme(theme: ThemeVariant) -> egui::Visuals {
    let palette = palette_for_theme(theme);
    let mut visuals = match theme {
        ThemeVariant::Light => egui::Visuals::light(),
        ThemeVariant::Dark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(243, 244, 246));
            v.window_fill = egui::Color32::from_rgb(17, 24, 39);
            v.panel_fill = egui::Color32::from_rgb(17, 24, 39);
            v.extreme_bg_color = egui::Color32::from_rgb(31, 41, 55);
            v.faint_bg_color = egui::Color32::from_rgb(31, 41, 55);
            v
        }
    };

    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.hovered.bg_fill = palette.accent.gamma_multiply(0.85);

    let radius = egui::CornerRadius::same(6);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}
