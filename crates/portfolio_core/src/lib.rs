use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub mod content;
pub mod fetcher;
pub mod form;
pub mod render;
pub mod scroll;
pub mod settings;
pub mod store;

pub use fetcher::{FetchHandle, GithubClient, ProfileSource, RemoteDataFetcher, SourceConfigError};
pub use form::{ContactForm, FormError, FormField, FormHandler, FORM_SUCCESS_WINDOW};
pub use render::{render, PageView};
pub use scroll::{
    track_scroll, ScrollObserver, ScrollState, ScrollTracker, SectionLayout, ViewportBroadcaster,
    ViewportSample,
};
pub use settings::PortfolioSettings;
pub use store::{StoreUpdate, ViewState, REPOSITORY_LIMIT};

const STORE_UPDATE_QUEUE: usize = 64;

/// The mounted single-page portfolio.
///
/// All state is written on the thread that owns this value. Async producers
/// (the remote fetch, the success-window timer) only send [`StoreUpdate`]s,
/// which [`Portfolio::sync`] applies once per frame.
pub struct Portfolio {
    settings: PortfolioSettings,
    state: ViewState,
    runtime: Handle,
    lifetime: CancellationToken,
    updates_rx: Receiver<StoreUpdate>,
    scroll: ScrollTracker,
    fetch: FetchHandle,
    form: FormHandler,
    torn_down: bool,
}

impl Portfolio {
    /// Subscribes to the viewport and starts the one-shot remote fetch.
    pub fn mount(
        settings: PortfolioSettings,
        source: Arc<dyn ProfileSource>,
        viewport: &dyn ScrollObserver,
        runtime: Handle,
    ) -> Self {
        let (updates_tx, updates_rx) = bounded(STORE_UPDATE_QUEUE);
        let lifetime = CancellationToken::new();

        let fetch = RemoteDataFetcher::new(source, settings.fetch_timeout, updates_tx.clone())
            .spawn(&runtime, lifetime.child_token());
        let form = FormHandler::new(updates_tx, FORM_SUCCESS_WINDOW);

        info!(account = %settings.account, "portfolio mounted");
        Self {
            settings,
            state: ViewState::default(),
            runtime,
            lifetime,
            updates_rx,
            scroll: ScrollTracker::attach(viewport),
            fetch,
            form,
            torn_down: false,
        }
    }

    /// [`Portfolio::mount`] against the GitHub REST API named in `settings`.
    pub fn mount_github(
        settings: PortfolioSettings,
        viewport: &dyn ScrollObserver,
        runtime: Handle,
    ) -> Result<Self, SourceConfigError> {
        let client = GithubClient::new(&settings)?;
        Ok(Self::mount(settings, Arc::new(client), viewport, runtime))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &PortfolioSettings {
        &self.settings
    }

    pub fn render(&self) -> PageView {
        render(&self.state, &self.settings)
    }

    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        debug!(dark_mode = self.state.dark_mode, "theme toggled");
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
    }

    /// Navigation link activation. The scroll itself belongs to the viewport;
    /// here the mobile menu is closed.
    pub fn select_nav_link(&mut self) {
        self.state.close_menu();
    }

    /// Accepts the form locally, clears it and opens the success window.
    /// Nothing is sent anywhere. After teardown the form is left untouched
    /// and [`FormError::Closed`] is returned.
    pub fn submit_contact(&mut self, form: &mut ContactForm) -> Result<(), FormError> {
        if self.torn_down {
            debug!("submission after teardown rejected");
            return Err(FormError::Closed);
        }
        self.form.submit(form, &self.runtime, &self.lifetime)?;
        self.state.form_success = true;
        Ok(())
    }

    /// Applies pending scroll samples and producer updates. Returns whether
    /// the view state changed.
    pub fn sync(&mut self) -> bool {
        if self.torn_down {
            return false;
        }

        let mut changed = match self.scroll.poll() {
            Some(scroll) => self.state.apply_scroll(scroll),
            None => false,
        };

        while let Ok(update) = self.updates_rx.try_recv() {
            changed |= self.apply(update);
        }
        changed
    }

    fn apply(&mut self, update: StoreUpdate) -> bool {
        match update {
            StoreUpdate::ProfileLoaded(profile) => {
                self.state.set_profile(profile);
                true
            }
            StoreUpdate::RepositoriesLoaded(repositories) => {
                self.state.set_repositories(repositories);
                true
            }
            StoreUpdate::FormSuccessExpired { ticket } => {
                if self.form.expire(ticket) {
                    self.state.form_success = false;
                    true
                } else {
                    debug!(ticket, "stale success reset ignored");
                    false
                }
            }
        }
    }

    pub fn is_fetch_in_flight(&self) -> bool {
        !self.fetch.is_finished()
    }

    pub fn has_pending_form_reset(&self) -> bool {
        self.form.has_pending_reset()
    }

    pub fn is_scroll_attached(&self) -> bool {
        self.scroll.is_attached()
    }

    /// Unsubscribes from the viewport, cancels the fetch and any pending
    /// reset, and discards queued updates. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.scroll.detach();
        self.form.cancel_pending();
        self.fetch.cancel();
        self.lifetime.cancel();
        let discarded = self.updates_rx.try_iter().count();
        info!(discarded, "portfolio torn down");
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
