use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remote resources read on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteResource {
    Profile,
    Repositories,
}

impl fmt::Display for RemoteResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteResource::Profile => f.write_str("profile"),
            RemoteResource::Repositories => f.write_str("repositories"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Transport,
    Status,
    Decode,
    Timeout,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{resource} request failed: {message}")]
    Transport {
        resource: RemoteResource,
        message: String,
    },
    #[error("{resource} request returned HTTP {status}")]
    Status { resource: RemoteResource, status: u16 },
    #[error("{resource} response could not be decoded: {message}")]
    Decode {
        resource: RemoteResource,
        message: String,
    },
    #[error("{resource} request timed out after {timeout_ms}ms")]
    Timeout {
        resource: RemoteResource,
        timeout_ms: u64,
    },
}

impl FetchError {
    pub fn transport(resource: RemoteResource, message: impl Into<String>) -> Self {
        Self::Transport {
            resource,
            message: message.into(),
        }
    }

    pub fn decode(resource: RemoteResource, message: impl Into<String>) -> Self {
        Self::Decode {
            resource,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
        }
    }

    pub fn resource(&self) -> RemoteResource {
        match self {
            FetchError::Transport { resource, .. }
            | FetchError::Status { resource, .. }
            | FetchError::Decode { resource, .. }
            | FetchError::Timeout { resource, .. } => *resource,
        }
    }
}
