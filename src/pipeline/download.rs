use crate::config::{DatasetCredentials, PipelineConfig};
use crate::error::{AppError, Result};
use futures_util::StreamExt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Fetch the transcript file of the configured dataset into `data_dir`.
///
/// The host may answer with the bare file or with a zip archive holding it;
/// either way the transcript ends up at `config.transcript_path()`.
pub async fn download_transcript(config: &PipelineConfig, credentials: &DatasetCredentials) -> Result<PathBuf> {
    let (owner, slug) = config.dataset_parts()?;
    let url = format!(
        "{}/datasets/download/{}/{}/{}",
        config.dataset_api_url.trim_end_matches('/'),
        owner,
        slug,
        config.transcript_file
    );

    tokio::fs::create_dir_all(&config.data_dir).await?;
    let target = config.transcript_path();
    let partial = target.with_extension("part");

    let placed = match stream_to_file(&url, credentials, &partial).await {
        Ok(bytes) => {
            log::info!("Received {} bytes of {}", bytes, config.dataset);
            let (partial, target, entry) = (partial.clone(), target.clone(), config.transcript_file.clone());
            tokio::task::spawn_blocking(move || place_transcript(&partial, &target, &entry))
                .await
                .map_err(|e| AppError::Other(format!("Transcript extraction task failed: {}", e)))?
        }
        Err(e) => Err(e),
    };
    let _ = tokio::fs::remove_file(&partial).await;

    let bytes = placed?;
    log::info!("Transcript ready at {:?} ({} bytes)", target, bytes);
    Ok(target)
}

/// Stream the response body into `file_path`. Returns the byte count.
async fn stream_to_file(url: &str, credentials: &DatasetCredentials, file_path: &Path) -> Result<u64> {
    log::info!("Fetching {} into {:?}", url, file_path);

    let client = reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(600))
        .build()
        .map_err(|e| AppError::ExternalFetch(format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .basic_auth(&credentials.username, Some(&credentials.key))
        .send()
        .await
        .map_err(|e| AppError::ExternalFetch(format!("Dataset request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::ExternalFetch(format!("Dataset host answered {}", status)));
    }

    let expected = response.content_length();
    let mut body = response.bytes_stream();
    let mut out = tokio::fs::File::create(file_path)
        .await
        .map_err(|e| AppError::Io(format!("Cannot create {}: {}", file_path.display(), e)))?;
    let mut written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| AppError::ExternalFetch(format!("Dataset stream broke off: {}", e)))?;
        out.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    out.flush().await?;

    match expected {
        Some(len) if len != written => Err(AppError::ExternalFetch(format!(
            "Dataset body truncated: {} of {} bytes",
            written, len
        ))),
        _ => Ok(written),
    }
}

/// Move a finished download to `target`, unpacking `entry` first when the
/// download is a zip archive. Returns the size of the transcript.
pub(crate) fn place_transcript(download: &Path, target: &Path, entry: &str) -> Result<u64> {
    if !is_zip(download)? {
        std::fs::rename(download, target)?;
        return Ok(std::fs::metadata(target)?.len());
    }

    let mut archive = zip::ZipArchive::new(File::open(download)?)?;
    let name = archive
        .file_names()
        .find(|name| name.rsplit('/').next() == Some(entry))
        .map(str::to_string)
        .ok_or_else(|| AppError::ExternalFetch(format!("Dataset archive has no {}", entry)))?;
    log::info!("Unpacking {} from dataset archive", name);

    let mut member = archive.by_name(&name)?;
    let unpacking = target.with_extension("unpack");
    let copied = std::fs::File::create(&unpacking).and_then(|mut out| std::io::copy(&mut member, &mut out));
    match copied {
        Ok(bytes) => {
            std::fs::rename(&unpacking, target)?;
            Ok(bytes)
        }
        Err(e) => {
            let _ = std::fs::remove_file(&unpacking);
            Err(AppError::Io(format!("Failed to unpack {}: {}", name, e)))
        }
    }
}

fn is_zip(path: &Path) -> Result<bool> {
    let mut head = [0u8; 4];
    let mut file = File::open(path)?;
    let mut filled = 0;
    while filled < head.len() {
        match file.read(&mut head[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled == head.len() && head == ZIP_MAGIC)
}
