use crate::error::{EtlError, Result};
use reqwest::Client;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tokio::fs;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// What a successful download produced.
#[derive(Debug, Clone)]
pub struct FetchSummary {
    pub url: Url,
    pub path: PathBuf,
    pub bytes: usize,
    pub elapsed: Duration,
}

/// HTTP client for the download. Redirects use reqwest's default policy; no timeout.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET `url` and write the body verbatim to `dest`.
///
/// The whole body is buffered before `dest` is touched, so a non-2xx status
/// or a broken transfer leaves any existing file as it was.
#[tracing::instrument(level = "info", skip(client, url, dest), fields(url = %url, dest = %dest.as_ref().display()))]
pub async fn download_raw(
    client: &Client,
    url: &Url,
    dest: impl AsRef<Path>,
) -> Result<FetchSummary> {
    let dest = dest.as_ref();
    let start = Instant::now();

    let resp = client.get(url.as_str()).send().await?.error_for_status()?;
    debug!(status = %resp.status(), final_url = %resp.url(), "response ok");
    let bytes = resp.bytes().await?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| EtlError::io(parent, e))?;
    }
    fs::write(dest, &bytes)
        .await
        .map_err(|e| EtlError::io(dest, e))?;

    let summary = FetchSummary {
        url: url.clone(),
        path: dest.to_path_buf(),
        bytes: bytes.len(),
        elapsed: start.elapsed(),
    };
    info!(bytes = summary.bytes, elapsed = ?summary.elapsed, "raw data written");
    Ok(summary)
}
