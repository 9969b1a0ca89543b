//! View state and the updates async producers deliver to it.

use shared::{
    domain::SectionId,
    protocol::{RepositorySummary, UserProfile},
};

use crate::scroll::ScrollState;

/// Maximum number of repositories kept for the showcase.
pub const REPOSITORY_LIMIT: usize = 6;

/// Everything the renderer reads. Each field has exactly one writer:
/// user actions (theme, menu), the scroll tracker (active section, threshold),
/// the fetcher (profile, repositories) and the form handler (success flag).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub dark_mode: bool,
    pub menu_open: bool,
    pub active_section: SectionId,
    pub past_scroll_threshold: bool,
    pub form_success: bool,
    pub profile: Option<UserProfile>,
    pub repositories: Vec<RepositorySummary>,
}

/// Messages from producers that run off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUpdate {
    ProfileLoaded(UserProfile),
    RepositoriesLoaded(Vec<RepositorySummary>),
    /// The success window opened by submission `ticket` has elapsed.
    FormSuccessExpired { ticket: u64 },
}

impl ViewState {
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether anything visible changed.
    pub fn apply_scroll(&mut self, scroll: ScrollState) -> bool {
        let changed = self.active_section != scroll.active_section
            || self.past_scroll_threshold != scroll.past_threshold;
        self.active_section = scroll.active_section;
        self.past_scroll_threshold = scroll.past_threshold;
        changed
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Keeps source order and drops everything past [`REPOSITORY_LIMIT`].
    pub fn set_repositories(&mut self, mut repositories: Vec<RepositorySummary>) {
        repositories.truncate(REPOSITORY_LIMIT);
        self.repositories = repositories;
    }
}

#[cfg(test)]
mod tests {
    use shared::{domain::RepositoryId, protocol::RepositorySummary};

    use super::{ViewState, REPOSITORY_LIMIT};
    use crate::scroll::ScrollState;
    use shared::domain::SectionId;

    fn repo(id: i64) -> RepositorySummary {
        RepositorySummary {
            id: RepositoryId(id),
            name: format!("repo-{id}"),
            description: None,
            language: None,
            html_url: format!("https://github.com/octo/repo-{id}"),
        }
    }

    #[test]
    fn starts_on_home_with_everything_off() {
        let state = ViewState::default();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.dark_mode);
        assert!(!state.menu_open);
        assert!(!state.past_scroll_threshold);
        assert!(!state.form_success);
        assert!(state.profile.is_none());
        assert!(state.repositories.is_empty());
    }

    #[test]
    fn double_toggle_restores_flags() {
        let mut state = ViewState::default();
        state.toggle_theme();
        assert!(state.dark_mode);
        state.toggle_theme();
        assert!(!state.dark_mode);

        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn truncates_repositories_without_reordering() {
        let mut state = ViewState::default();
        state.set_repositories((1..=8).map(repo).collect());
        let ids: Vec<_> = state.repositories.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(state.repositories.len(), REPOSITORY_LIMIT);
    }

    #[test]
    fn scroll_reports_only_visible_changes() {
        let mut state = ViewState::default();
        let unchanged = ScrollState {
            active_section: SectionId::Home,
            past_threshold: false,
        };
        assert!(!state.apply_scroll(unchanged));
        assert!(state.apply_scroll(ScrollState {
            active_section: SectionId::About,
            past_threshold: true,
        }));
        assert_eq!(state.active_section, SectionId::About);
        assert!(state.past_scroll_threshold);
    }
}
