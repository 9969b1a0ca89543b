//! Painters for each part of the page. They only read the rendered view and
//! report clicks as [`PageAction`]s; the app applies them after the frame.

use eframe::egui;
use portfolio_core::{
    content::{AboutCopy, SocialLink},
    render::{
        ContactView, FooterView, HeaderView, HeroView, NavEntry, ProjectsView, SkillsView,
        ThemeToggleIcon,
    },
    ContactForm, FormError, FormField,
};
use shared::domain::SectionId;

use crate::ui::theme::PagePalette;

const CARD_WIDTH: f32 = 300.0;
const AVATAR_SIZE: f32 = 220.0;
/// Below this width the header collapses its links behind the menu button.
pub const COMPACT_HEADER_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(SectionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// A header link; closes the mobile menu and scrolls.
    Navigate(SectionId),
    ScrollTo(ScrollTarget),
    ToggleTheme,
    ToggleMenu,
    SubmitContact,
}

pub fn section_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(32, 48))
}

fn card_frame(palette: PagePalette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
}

fn section_title(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>, palette: PagePalette) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(30.0).strong());
        if let Some(subtitle) = subtitle {
            ui.label(egui::RichText::new(subtitle).color(palette.muted_text));
        }
    });
    ui.add_space(24.0);
}

/// The open mobile menu is only shown while the header is compact.
fn visible_mobile_nav(header: &HeaderView, width: f32) -> Option<&[NavEntry]> {
    if width < COMPACT_HEADER_WIDTH {
        header.mobile_nav.as_deref()
    } else {
        None
    }
}

pub fn header(
    ui: &mut egui::Ui,
    header: &HeaderView,
    palette: PagePalette,
    actions: &mut Vec<PageAction>,
) {
    let width = ui.available_width();
    let compact = width < COMPACT_HEADER_WIDTH;

    ui.horizontal(|ui| {
        let brand = ui.add(
            egui::Label::new(
                egui::RichText::new(header.brand)
                    .size(24.0)
                    .strong()
                    .color(palette.accent),
            )
            .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            actions.push(PageAction::Navigate(SectionId::Home));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = match header.theme_toggle {
                ThemeToggleIcon::Moon => "🌙",
                ThemeToggleIcon::Sun => "☀",
            };
            if ui
                .button(icon)
                .on_hover_text("Cambiar tema")
                .clicked()
            {
                actions.push(PageAction::ToggleTheme);
            }

            if compact {
                let menu_icon = if header.mobile_nav.is_some() { "✖" } else { "☰" };
                if ui.button(menu_icon).clicked() {
                    actions.push(PageAction::ToggleMenu);
                }
            } else {
                // Right-to-left layout, so walk the links backwards.
                for entry in header.nav.iter().rev() {
                    if ui.selectable_label(entry.active, entry.label).clicked() {
                        actions.push(PageAction::Navigate(entry.section));
                    }
                }
            }
        });
    });

    if let Some(mobile_nav) = visible_mobile_nav(header, width) {
        ui.separator();
        ui.vertical(|ui| {
            for entry in mobile_nav {
                if ui.selectable_label(entry.active, entry.label).clicked() {
                    actions.push(PageAction::Navigate(entry.section));
                }
            }
        });
    }
}

fn social_row(ui: &mut egui::Ui, links: &[SocialLink]) {
    ui.horizontal_wrapped(|ui| {
        for link in links {
            match &link.url {
                Some(url) => {
                    ui.hyperlink_to(link.network.label(), url);
                }
                None => {
                    ui.add_enabled(false, egui::Button::new(link.network.label()));
                }
            }
        }
    });
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn avatar(ui: &mut egui::Ui, display_name: &str, texture: Option<&egui::TextureHandle>, palette: PagePalette) {
    let size = egui::vec2(AVATAR_SIZE, AVATAR_SIZE);
    match texture {
        Some(texture) => {
            ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(size)
                    .corner_radius(AVATAR_SIZE / 2.0),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), AVATAR_SIZE / 2.0, palette.card_stroke);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initials(display_name),
                egui::FontId::proportional(64.0),
                palette.muted_text,
            );
        }
    }
}

pub fn hero(
    ui: &mut egui::Ui,
    hero: &HeroView,
    avatar_texture: Option<&egui::TextureHandle>,
    palette: PagePalette,
    actions: &mut Vec<PageAction>,
) {
    ui.columns(2, |columns| {
        columns[0].vertical(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(hero.greeting).size(20.0).color(palette.muted_text));
            ui.label(egui::RichText::new(&hero.display_name).size(44.0).strong());
            ui.label(egui::RichText::new(&hero.bio).size(20.0).color(palette.accent));
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let (label, section) = hero.primary_action;
                if ui
                    .add(egui::Button::new(egui::RichText::new(label).strong()).fill(palette.accent))
                    .clicked()
                {
                    actions.push(PageAction::ScrollTo(ScrollTarget::Section(section)));
                }
                let (label, section) = hero.secondary_action;
                if ui.button(label).clicked() {
                    actions.push(PageAction::ScrollTo(ScrollTarget::Section(section)));
                }
            });
            ui.add_space(16.0);
            social_row(ui, &hero.socials);
        });
        columns[1].vertical_centered(|ui| {
            avatar(ui, &hero.display_name, avatar_texture, palette);
        });
    });
}

pub fn about(ui: &mut egui::Ui, about: &AboutCopy, palette: PagePalette) {
    section_title(ui, about.title, None, palette);
    for paragraph in about.paragraphs {
        ui.label(egui::RichText::new(*paragraph).size(16.0));
        ui.add_space(8.0);
    }
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for stat in about.stats {
            card_frame(palette).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(stat.value)
                            .size(32.0)
                            .strong()
                            .color(palette.accent),
                    );
                    ui.label(egui::RichText::new(stat.caption).color(palette.muted_text));
                });
            });
        }
    });
}

pub fn projects(ui: &mut egui::Ui, projects: &ProjectsView, palette: PagePalette) {
    section_title(ui, projects.title, Some(projects.subtitle), palette);
    ui.horizontal_wrapped(|ui| {
        for card in &projects.cards {
            ui.allocate_ui(egui::vec2(CARD_WIDTH, 0.0), |ui| {
                card_frame(palette).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH - 32.0);
                    ui.label(egui::RichText::new(&card.name).size(18.0).strong());
                    if let Some(description) = &card.description {
                        ui.label(egui::RichText::new(description).color(palette.muted_text));
                    }
                    ui.horizontal(|ui| {
                        if let Some(language) = &card.language {
                            ui.label(egui::RichText::new(language).small().color(palette.accent));
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.hyperlink_to(card.link_label, &card.url);
                        });
                    });
                });
            });
        }
    });
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.hyperlink_to(projects.more_label, &projects.more_url);
    });
}

pub fn skills(ui: &mut egui::Ui, skills: &SkillsView, palette: PagePalette) {
    section_title(ui, skills.title, Some(skills.subtitle), palette);
    ui.columns(skills.groups.len().max(1), |columns| {
        for (column, group) in columns.iter_mut().zip(skills.groups) {
            card_frame(palette).show(column, |ui| {
                ui.label(egui::RichText::new(group.title).size(20.0).strong());
                ui.add_space(8.0);
                for skill in group.skills {
                    ui.horizontal(|ui| {
                        ui.label(skill.name);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("{}%", skill.percent))
                                    .color(palette.muted_text),
                            );
                        });
                    });
                    ui.add(
                        egui::ProgressBar::new(skill.fraction())
                            .fill(palette.accent)
                            .desired_height(8.0),
                    );
                    ui.add_space(6.0);
                }
            });
        }
    });
}

fn form_field(
    ui: &mut egui::Ui,
    field: FormField,
    value: &mut String,
    error: Option<&FormError>,
    multiline: bool,
) {
    ui.label(field.label());
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(5)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(edit.desired_width(f32::INFINITY));
    if let Some(error) = error.filter(|error| error.field() == Some(field)) {
        ui.colored_label(ui.visuals().error_fg_color, error.to_string());
    }
    ui.add_space(6.0);
}

pub fn contact(
    ui: &mut egui::Ui,
    contact: &ContactView,
    form: &mut ContactForm,
    form_error: Option<&FormError>,
    palette: PagePalette,
    actions: &mut Vec<PageAction>,
) {
    section_title(ui, contact.title, Some(contact.subtitle), palette);
    ui.columns(2, |columns| {
        columns[0].vertical(|ui| {
            for detail in contact.details {
                ui.label(egui::RichText::new(detail.label).strong());
                match detail.href {
                    Some(href) => {
                        ui.hyperlink_to(detail.value, href);
                    }
                    None => {
                        ui.label(detail.value);
                    }
                }
                ui.add_space(10.0);
            }
            social_row(ui, &contact.socials);
        });

        card_frame(palette).show(&mut columns[1], |ui| {
            ui.label(egui::RichText::new(contact.form_title).size(20.0).strong());
            ui.add_space(8.0);
            if let Some(banner) = contact.success_banner {
                egui::Frame::new()
                    .fill(palette.success_fill)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(banner).color(palette.success_text));
                    });
                ui.add_space(8.0);
            }
            form_field(ui, FormField::Name, &mut form.name, form_error, false);
            form_field(ui, FormField::Email, &mut form.email, form_error, false);
            form_field(ui, FormField::Subject, &mut form.subject, form_error, false);
            form_field(ui, FormField::Message, &mut form.message, form_error, true);
            if let Some(error) = form_error.filter(|error| error.field().is_none()) {
                ui.colored_label(ui.visuals().error_fg_color, error.to_string());
            }
            if ui
                .add(
                    egui::Button::new(egui::RichText::new(contact.submit_label).strong())
                        .fill(palette.accent),
                )
                .clicked()
            {
                actions.push(PageAction::SubmitContact);
            }
        });
    });
}

pub fn footer(ui: &mut egui::Ui, footer: &FooterView, palette: PagePalette) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(footer.brand)
                .size(20.0)
                .strong()
                .color(palette.accent),
        );
        ui.label(egui::RichText::new(footer.notice).small().color(palette.muted_text));
    });
}

#[cfg(test)]
mod tests {
    use portfolio_core::render::{HeaderView, NavEntry, ThemeToggleIcon};
    use shared::domain::SectionId;

    use super::{initials, visible_mobile_nav, COMPACT_HEADER_WIDTH};

    fn open_menu_header() -> HeaderView {
        let nav: Vec<NavEntry> = SectionId::ALL
            .iter()
            .map(|section| NavEntry {
                section: *section,
                label: section.label(),
                active: *section == SectionId::Home,
            })
            .collect();
        HeaderView {
            brand: "Portfolio",
            mobile_nav: Some(nav.clone()),
            nav,
            theme_toggle: ThemeToggleIcon::Moon,
        }
    }

    #[test]
    fn open_mobile_menu_hides_on_wide_header() {
        let header = open_menu_header();
        assert_eq!(
            visible_mobile_nav(&header, COMPACT_HEADER_WIDTH - 1.0).map(<[NavEntry]>::len),
            Some(SectionId::ALL.len())
        );
        assert!(visible_mobile_nav(&header, COMPACT_HEADER_WIDTH).is_none());
        assert!(visible_mobile_nav(&header, 1200.0).is_none());

        let closed = HeaderView {
            mobile_nav: None,
            ..open_menu_header()
        };
        assert!(visible_mobile_nav(&closed, 400.0).is_none());
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("Nicolás Sánchez"), "NS");
        assert_eq!(initials("octo"), "O");
        assert_eq!(initials("  "), "");
        assert_eq!(initials("ada king lovelace"), "AK");
    }
}
