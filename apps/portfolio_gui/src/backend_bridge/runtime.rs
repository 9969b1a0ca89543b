//! Owns the tokio runtime and drains the UI command queue onto it.

use std::{thread, time::Duration};

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;
use tokio::runtime::{Builder, Handle, Runtime};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{DecodedImage, UiEvent};

/// Avatars are painted at most this large.
const AVATAR_MAX_EDGE: u32 = 512;

pub struct BackendRuntime {
    runtime: Runtime,
}

impl BackendRuntime {
    pub fn build() -> anyhow::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .enable_all()
            .thread_name("portfolio-backend")
            .build()
            .context("backend worker startup failure: failed to build runtime")?;
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    /// Starts the worker that forwards commands from `cmd_rx` onto the
    /// runtime. It exits once every command sender is dropped.
    pub fn launch(
        &self,
        cmd_rx: Receiver<BackendCommand>,
        ui_tx: Sender<UiEvent>,
        user_agent: &str,
        request_timeout: Duration,
    ) -> anyhow::Result<()> {
        let http = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(request_timeout)
            .build()
            .context("backend worker startup failure: failed to build HTTP client")?;
        let handle = self.handle();

        thread::Builder::new()
            .name("portfolio-commands".to_string())
            .spawn(move || {
                while let Ok(cmd) = cmd_rx.recv() {
                    handle.spawn(process_command(cmd, http.clone(), ui_tx.clone()));
                }
                tracing::debug!("ui->backend command queue closed");
            })
            .context("backend worker startup failure: failed to spawn command thread")?;
        Ok(())
    }
}

async fn process_command(cmd: BackendCommand, http: HttpClient, ui_tx: Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::FetchAvatar { url } => match download_avatar(&http, &url).await {
            Ok(image) => {
                tracing::info!(%url, width = image.width, height = image.height, "avatar loaded");
                UiEvent::AvatarLoaded { url, image }
            }
            Err(reason) => {
                tracing::warn!(%url, %reason, "avatar unavailable; keeping placeholder");
                UiEvent::AvatarFailed { url, reason }
            }
        },
    };
    if ui_tx.try_send(event).is_err() {
        tracing::debug!("ui event queue unavailable; dropping backend event");
    }
}

pub async fn download_avatar(http: &HttpClient, url: &str) -> Result<DecodedImage, String> {
    let response = http
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| err.to_string())?;
    let bytes = response.bytes().await.map_err(|err| err.to_string())?;
    tokio::task::spawn_blocking(move || decode_avatar_image(&bytes))
        .await
        .map_err(|err| format!("avatar decode task failed: {err}"))?
}

pub fn decode_avatar_image(bytes: &[u8]) -> Result<DecodedImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic
        .thumbnail(AVATAR_MAX_EDGE, AVATAR_MAX_EDGE)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(DecodedImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
