//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Download and decode the hero avatar.
    FetchAvatar { url: String },
}
