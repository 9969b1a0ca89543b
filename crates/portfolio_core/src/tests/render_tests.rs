use super::*;
use shared::protocol::{RepositorySummary, UserProfile};

fn settings() -> PortfolioSettings {
    PortfolioSettings {
        account: "octo".to_string(),
        ..PortfolioSettings::default()
    }
}

fn repo(id: i64, language: Option<&str>, description: Option<&str>) -> RepositorySummary {
    RepositorySummary {
        id: RepositoryId(id),
        name: format!("repo-{id}"),
        description: description.map(str::to_string),
        language: language.map(str::to_string),
        html_url: format!("https://github.com/octo/repo-{id}"),
    }
}

#[test]
fn initial_state_shows_placeholders_and_static_sections() {
    let view = render(&ViewState::default(), &settings());

    assert_eq!(view.theme, ThemeVariant::Light);
    assert_eq!(view.header.theme_toggle, ThemeToggleIcon::Moon);
    assert!(view.header.mobile_nav.is_none());
    assert_eq!(view.hero.display_name, "Nicolás Sánchez");
    assert_eq!(view.hero.bio, "Desarrollador de Software");
    assert_eq!(view.hero.avatar, AvatarView::Placeholder);
    assert!(view.projects.cards.is_empty());
    assert_eq!(view.projects.more_url, "https://github.com/octo");
    assert!(view.contact.success_banner.is_none());
    assert!(!view.show_scroll_top);
    assert_eq!(view.skills.groups.len(), 2);
    assert_eq!(view.about.stats.len(), 2);
}

#[test]
fn exactly_one_nav_entry_is_active() {
    for active in SectionId::ALL {
        let state = ViewState {
            active_section: active,
            menu_open: true,
            ..ViewState::default()
        };
        let view = render(&state, &settings());
        let highlighted: Vec<_> = view
            .header
            .nav
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.section)
            .collect();
        assert_eq!(highlighted, vec![active]);
        assert_eq!(view.header.mobile_nav.as_ref(), Some(&view.header.nav));
    }
}

#[test]
fn nav_follows_page_order_with_labels() {
    let view = render(&ViewState::default(), &settings());
    let labels: Vec<_> = view.header.nav.iter().map(|entry| entry.label).collect();
    assert_eq!(labels, vec!["Home", "About", "Projects", "Skills", "Contact"]);
}

#[test]
fn dark_theme_offers_sun_toggle() {
    let state = ViewState {
        dark_mode: true,
        ..ViewState::default()
    };
    let view = render(&state, &settings());
    assert_eq!(view.theme, ThemeVariant::Dark);
    assert_eq!(view.header.theme_toggle, ThemeToggleIcon::Sun);
}

#[test]
fn loaded_profile_replaces_fallbacks() {
    let state = ViewState {
        profile: Some(UserProfile {
            name: Some("Octo Cat".to_string()),
            bio: Some("Ships things".to_string()),
            avatar_url: Some("https://avatars.example/octo.png".to_string()),
        }),
        ..ViewState::default()
    };
    let view = render(&state, &settings());
    assert_eq!(view.hero.display_name, "Octo Cat");
    assert_eq!(view.hero.bio, "Ships things");
    assert_eq!(
        view.hero.avatar,
        AvatarView::Remote("https://avatars.example/octo.png".to_string())
    );
}

#[test]
fn blank_profile_fields_fall_back() {
    let state = ViewState {
        profile: Some(UserProfile {
            name: Some("   ".to_string()),
            bio: None,
            avatar_url: Some(String::new()),
        }),
        ..ViewState::default()
    };
    let view = render(&state, &settings());
    assert_eq!(view.hero.display_name, "Nicolás Sánchez");
    assert_eq!(view.hero.bio, "Desarrollador de Software");
    assert_eq!(view.hero.avatar, AvatarView::Placeholder);
}

#[test]
fn repository_cards_omit_missing_language_and_description() {
    let state = ViewState {
        repositories: vec![
            repo(1, Some("Rust"), Some("A crate")),
            repo(2, None, Some("")),
        ],
        ..ViewState::default()
    };
    let view = render(&state, &settings());
    let cards = &view.projects.cards;
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].language.as_deref(), Some("Rust"));
    assert_eq!(cards[0].description.as_deref(), Some("A crate"));
    assert_eq!(cards[1].language, None);
    assert_eq!(cards[1].description, None);
    assert_eq!(cards[1].url, "https://github.com/octo/repo-2");

    let json = serde_json::to_value(&cards[1]).expect("serialize card");
    assert!(json.get("language").is_none());
    assert!(json.get("description").is_none());
}

#[test]
fn success_banner_and_scroll_top_follow_flags() {
    let state = ViewState {
        form_success: true,
        past_scroll_threshold: true,
        ..ViewState::default()
    };
    let view = render(&state, &settings());
    assert_eq!(
        view.contact.success_banner,
        Some(content::CONTACT_SUCCESS_MESSAGE)
    );
    assert!(view.show_scroll_top);
}

#[test]
fn only_github_social_link_has_a_target() {
    let view = render(&ViewState::default(), &settings());
    assert_eq!(view.hero.socials.len(), 3);
    assert_eq!(view.contact.socials.len(), 4);
    for link in view.hero.socials.iter().chain(&view.contact.socials) {
        if link.network == SocialNetwork::Github {
            assert_eq!(link.url.as_deref(), Some("https://github.com/octo"));
        } else {
            assert_eq!(link.url, None);
        }
    }
}
