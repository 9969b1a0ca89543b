//! Events delivered from the backend worker to the UI thread.

/// RGBA pixels ready to upload as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

#[derive(Debug)]
pub enum UiEvent {
    AvatarLoaded { url: String, image: DecodedImage },
    AvatarFailed { url: String, reason: String },
}
