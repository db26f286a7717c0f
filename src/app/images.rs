//! Background image decoding for the map backdrop and place photos.
//!
//! Decoding can take a noticeable fraction of a second for large photos, so
//! each request runs on the blocking pool.  Results come back on a channel
//! that the main loop drains alongside terminal events.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;
use thiserror::Error;
use tokio::sync::mpsc;

use super::state::AppState;

/// Longest edge kept after decoding.  Terminal cells are coarse, so anything
/// larger only costs memory.
const MAX_EDGE: u32 = 320;

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type ImageResult = (PathBuf, Result<Arc<image::RgbaImage>, ImageLoadError>);

/// Decode `path` and shrink it to at most [`MAX_EDGE`] on its longest side.
pub fn decode_thumbnail(path: &Path) -> Result<image::RgbaImage, ImageLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| ImageLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    if rgba.width() <= MAX_EDGE && rgba.height() <= MAX_EDGE {
        return Ok(rgba);
    }
    let scale = MAX_EDGE as f64 / rgba.width().max(rgba.height()) as f64;
    let w = ((rgba.width() as f64) * scale).round().max(1.0) as u32;
    let h = ((rgba.height() as f64) * scale).round().max(1.0) as u32;
    Ok(image::imageops::resize(&rgba, w, h, FilterType::Triangle))
}

/// Hand every queued request in `state` to the blocking pool.
pub fn dispatch_pending(state: &mut AppState, tx: &mpsc::UnboundedSender<ImageResult>) {
    for path in std::mem::take(&mut state.pending_images) {
        let tx = tx.clone();
        tracing::debug!(path = %path.display(), "decoding image");
        tokio::task::spawn_blocking(move || {
            let result = decode_thumbnail(&path).map(Arc::new);
            let _ = tx.send((path, result));
        });
    }
}

/// Store a finished decode.  Failures keep the placeholder and surface a
/// status message.
pub fn apply_result(state: &mut AppState, (path, result): ImageResult) {
    state.loading_images.remove(&path);
    match result {
        Ok(img) => {
            tracing::debug!(path = %path.display(), w = img.width(), h = img.height(), "image ready");
            state.image_cache.insert(path, img);
        }
        Err(e) => {
            tracing::warn!(error = %e, "image load failed");
            state.status_message = Some(e.to_string());
        }
    }
}
