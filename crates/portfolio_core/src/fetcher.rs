//! One-shot reads of the GitHub profile and repository listing.

use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use crossbeam_channel::{Sender, TrySendError};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use shared::{
    error::{FetchError, RemoteResource},
    protocol::{RepositorySummary, UserProfile},
};
use thiserror::Error;
use tokio::{runtime::Handle, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    settings::PortfolioSettings,
    store::{StoreUpdate, REPOSITORY_LIMIT},
};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile, FetchError>;
    /// Most recently updated first, at most `limit` entries requested.
    async fn fetch_repositories(&self, limit: usize) -> Result<Vec<RepositorySummary>, FetchError>;
}

#[derive(Debug, Error)]
pub enum SourceConfigError {
    #[error("invalid GitHub API base url '{api_base}': {source}")]
    InvalidApiBase {
        api_base: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// [`ProfileSource`] backed by the GitHub REST API.
pub struct GithubClient {
    http: Client,
    settings: PortfolioSettings,
    profile_url: Url,
}

impl GithubClient {
    pub fn new(settings: &PortfolioSettings) -> Result<Self, SourceConfigError> {
        let profile_url =
            settings
                .profile_endpoint()
                .map_err(|source| SourceConfigError::InvalidApiBase {
                    api_base: settings.api_base.clone(),
                    source,
                })?;
        let http = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            settings: settings.clone(),
            profile_url,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: RemoteResource,
        url: Url,
    ) -> Result<T, FetchError> {
        debug!(%url, "requesting {resource}");
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, GITHUB_MEDIA_TYPE)
            .send()
            .await
            .map_err(|err| FetchError::transport(resource, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| FetchError::decode(resource, err.to_string()))
    }
}

#[async_trait]
impl ProfileSource for GithubClient {
    async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
        self.get_json(RemoteResource::Profile, self.profile_url.clone())
            .await
    }

    async fn fetch_repositories(&self, limit: usize) -> Result<Vec<RepositorySummary>, FetchError> {
        let url = self
            .settings
            .repositories_endpoint(limit)
            .map_err(|err| FetchError::transport(RemoteResource::Repositories, err.to_string()))?;
        self.get_json(RemoteResource::Repositories, url).await
    }
}

/// Performs the profile read and then the repository read, delivering each
/// success to the store queue. A failed read is logged and leaves its field
/// untouched; it never prevents the other read.
pub struct RemoteDataFetcher {
    source: Arc<dyn ProfileSource>,
    timeout: Duration,
    updates: Sender<StoreUpdate>,
}

impl RemoteDataFetcher {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        timeout: Duration,
        updates: Sender<StoreUpdate>,
    ) -> Self {
        Self {
            source,
            timeout,
            updates,
        }
    }

    pub async fn run(self) {
        match self
            .bounded(RemoteResource::Profile, self.source.fetch_profile())
            .await
        {
            Ok(profile) => {
                info!("github profile loaded");
                self.deliver(StoreUpdate::ProfileLoaded(profile));
            }
            Err(err) => warn!(
                error = %err,
                resource = %err.resource(),
                kind = ?err.kind(),
                "github profile unavailable; keeping placeholder"
            ),
        }

        match self
            .bounded(
                RemoteResource::Repositories,
                self.source.fetch_repositories(REPOSITORY_LIMIT),
            )
            .await
        {
            Ok(repositories) => {
                info!(count = repositories.len(), "github repositories loaded");
                self.deliver(StoreUpdate::RepositoriesLoaded(repositories));
            }
            Err(err) => warn!(
                error = %err,
                resource = %err.resource(),
                kind = ?err.kind(),
                "github repositories unavailable; showcase stays empty"
            ),
        }
    }

    /// Runs [`Self::run`] on `runtime` until it completes or `cancel` fires.
    pub fn spawn(self, runtime: &Handle, cancel: CancellationToken) -> FetchHandle {
        let task_cancel = cancel.clone();
        let task = runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => debug!("github fetch cancelled"),
                _ = self.run() => {}
            }
        });
        FetchHandle { cancel, task }
    }

    async fn bounded<T>(
        &self,
        resource: RemoteResource,
        read: impl Future<Output = Result<T, FetchError>>,
    ) -> Result<T, FetchError> {
        tokio::time::timeout(self.timeout, read)
            .await
            .map_err(|_| FetchError::Timeout {
                resource,
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            })?
    }

    fn deliver(&self, update: StoreUpdate) {
        match self.updates.try_send(update) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!("store update queue full; dropping fetch result"),
            Err(TrySendError::Disconnected(_)) => {
                debug!("store update queue closed; component already torn down")
            }
        }
    }
}

/// The in-flight fetch task, owned by the mounted component.
#[derive(Debug)]
pub struct FetchHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
