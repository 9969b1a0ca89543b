//! Projection from [`ViewState`] to what is painted. No state lives here.

use serde::Serialize;
use shared::domain::{RepositoryId, SectionId, ThemeVariant};

use crate::{
    content::{
        self, AboutCopy, ContactDetail, SkillGroup, SocialLink, SocialNetwork, CONTACT_NETWORKS,
        HERO_NETWORKS,
    },
    settings::PortfolioSettings,
    store::ViewState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub theme: ThemeVariant,
    pub header: HeaderView,
    pub hero: HeroView,
    pub about: AboutCopy,
    pub projects: ProjectsView,
    pub skills: SkillsView,
    pub contact: ContactView,
    pub footer: FooterView,
    pub show_scroll_top: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeToggleIcon {
    /// Offered while the light theme is on.
    Moon,
    Sun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub section: SectionId,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub brand: &'static str,
    pub nav: Vec<NavEntry>,
    /// Present only while the mobile menu is open.
    pub mobile_nav: Option<Vec<NavEntry>>,
    pub theme_toggle: ThemeToggleIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum AvatarView {
    Placeholder,
    Remote(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub greeting: &'static str,
    pub display_name: String,
    pub bio: String,
    pub avatar: AvatarView,
    pub primary_action: (&'static str, SectionId),
    pub secondary_action: (&'static str, SectionId),
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCard {
    pub id: RepositoryId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub link_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<RepositoryCard>,
    pub more_label: &'static str,
    pub more_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub groups: &'static [SkillGroup],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form_title: &'static str,
    pub submit_label: &'static str,
    pub success_banner: Option<&'static str>,
    pub details: &'static [ContactDetail],
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub brand: &'static str,
    pub notice: &'static str,
}

pub fn render(state: &ViewState, settings: &PortfolioSettings) -> PageView {
    let nav = nav_entries(state.active_section);
    let profile_url = settings.profile_url();

    PageView {
        theme: ThemeVariant::from_dark_flag(state.dark_mode),
        header: HeaderView {
            brand: content::BRAND,
            mobile_nav: state.menu_open.then(|| nav.clone()),
            nav,
            theme_toggle: if state.dark_mode {
                ThemeToggleIcon::Sun
            } else {
                ThemeToggleIcon::Moon
            },
        },
        hero: render_hero(state, settings, &profile_url),
        about: content::ABOUT,
        projects: ProjectsView {
            title: content::PROJECTS_TITLE,
            subtitle: content::PROJECTS_SUBTITLE,
            cards: state
                .repositories
                .iter()
                .map(|repo| RepositoryCard {
                    id: repo.id,
                    name: repo.name.clone(),
                    language: non_blank(repo.language.as_deref()),
                    description: non_blank(repo.description.as_deref()),
                    url: repo.html_url.clone(),
                    link_label: content::REPOSITORY_LINK_LABEL,
                })
                .collect(),
            more_label: content::PROJECTS_MORE_LABEL,
            more_url: profile_url.clone(),
        },
        skills: SkillsView {
            title: content::SKILLS_TITLE,
            subtitle: content::SKILLS_SUBTITLE,
            groups: content::SKILL_GROUPS,
        },
        contact: ContactView {
            title: content::CONTACT_TITLE,
            subtitle: content::CONTACT_SUBTITLE,
            form_title: content::CONTACT_FORM_TITLE,
            submit_label: content::CONTACT_SUBMIT_LABEL,
            success_banner: state
                .form_success
                .then_some(content::CONTACT_SUCCESS_MESSAGE),
            details: content::CONTACT_DETAILS,
            socials: social_links(CONTACT_NETWORKS, &profile_url),
        },
        footer: FooterView {
            brand: content::BRAND,
            notice: content::FOOTER_NOTICE,
        },
        show_scroll_top: state.past_scroll_threshold,
    }
}

fn nav_entries(active: SectionId) -> Vec<NavEntry> {
    SectionId::ALL
        .into_iter()
        .map(|section| NavEntry {
            section,
            label: section.label(),
            active: section == active,
        })
        .collect()
}

fn render_hero(state: &ViewState, settings: &PortfolioSettings, profile_url: &str) -> HeroView {
    let profile = state.profile.as_ref();
    let display_name = non_blank(profile.and_then(|p| p.name.as_deref()))
        .unwrap_or_else(|| settings.fallback_name.clone());
    let bio = non_blank(profile.and_then(|p| p.bio.as_deref()))
        .unwrap_or_else(|| settings.fallback_bio.clone());
    let avatar = non_blank(profile.and_then(|p| p.avatar_url.as_deref()))
        .map(AvatarView::Remote)
        .unwrap_or(AvatarView::Placeholder);

    HeroView {
        greeting: content::HERO_GREETING,
        display_name,
        bio,
        avatar,
        primary_action: (content::HERO_PRIMARY_ACTION, SectionId::Projects),
        secondary_action: (content::HERO_SECONDARY_ACTION, SectionId::Contact),
        socials: social_links(HERO_NETWORKS, profile_url),
    }
}

fn social_links(networks: &[SocialNetwork], profile_url: &str) -> Vec<SocialLink> {
    networks
        .iter()
        .map(|&network| SocialLink {
            network,
            url: (network == SocialNetwork::Github).then(|| profile_url.to_string()),
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
