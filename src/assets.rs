//! Pocket artwork loading.
//!
//! The corner and center pocket images are read as two independent tasks.
//! Each completes with an image or an [`AssetError`]; a failed image is logged
//! and left out, and the renderer skips the pockets it has no artwork for.

use crate::config::AssetConfig;
use crate::draw::Image;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading pocket artwork.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode PNG {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: cairo::IoError,
    },

    #[error("Asset task failed: {0}")]
    Join(String),
}

/// The pocket images that loaded successfully.
#[derive(Debug, Default)]
pub struct PocketImages {
    pub corner: Option<Image>,
    pub center: Option<Image>,
}

impl PocketImages {
    /// Keeps the successful loads, logging the failures.
    pub fn from_results(
        corner: Result<Image, AssetError>,
        center: Result<Image, AssetError>,
    ) -> Self {
        Self {
            corner: keep_or_warn("corner", corner),
            center: keep_or_warn("center", center),
        }
    }
}

fn keep_or_warn(kind: &str, result: Result<Image, AssetError>) -> Option<Image> {
    match result {
        Ok(image) => {
            log::debug!(
                "Loaded {} pocket image ({}x{})",
                kind,
                image.width(),
                image.height()
            );
            Some(image)
        }
        Err(err) => {
            log::warn!("{} pocket will not be drawn: {}", kind, err);
            None
        }
    }
}

/// Reads a file on the blocking pool.
async fn read_bytes(path: PathBuf) -> Result<Vec<u8>, AssetError> {
    tokio::fs::read(&path)
        .await
        .map_err(|source| AssetError::Read { path, source })
}

/// Decodes PNG bytes into a drawable image named after the file.
pub fn decode_png(path: &Path, bytes: &[u8]) -> Result<Image, AssetError> {
    let surface =
        cairo::ImageSurface::create_from_png(&mut Cursor::new(bytes)).map_err(|source| {
            AssetError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Image::new(name, surface))
}

/// Loads both pocket images concurrently.
///
/// The two reads run as separate tasks; their completion order does not
/// matter because decoding and drawing happen after both have finished.
pub async fn load_pocket_images(config: &AssetConfig) -> PocketImages {
    let corner_path = config.corner_pocket_path();
    let center_path = config.center_pocket_path();

    let corner_task = tokio::spawn(read_bytes(corner_path.clone()));
    let center_task = tokio::spawn(read_bytes(center_path.clone()));
    let (corner_bytes, center_bytes) = tokio::join!(corner_task, center_task);

    let corner = flatten(corner_bytes).and_then(|bytes| decode_png(&corner_path, &bytes));
    let center = flatten(center_bytes).and_then(|bytes| decode_png(&center_path, &bytes));

    PocketImages::from_results(corner, center)
}

fn flatten(
    joined: Result<Result<Vec<u8>, AssetError>, tokio::task::JoinError>,
) -> Result<Vec<u8>, AssetError> {
    joined.map_err(|err| AssetError::Join(err.to_string()))?
}

/// Loads both pocket images on a dedicated current-thread runtime.
pub fn load_pocket_images_blocking(config: &AssetConfig) -> anyhow::Result<PocketImages> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(load_pocket_images(config)))
}
