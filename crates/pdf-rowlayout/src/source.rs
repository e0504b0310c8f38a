//! Image discovery and decoding

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::types::*;
use image::{DynamicImage, GenericImageView};
use log::debug;
use std::path::{Path, PathBuf};

/// A decoded input image.
///
/// Owns its pixel buffer; dropping it releases the memory.
#[derive(Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub pixels: DynamicImage,
    size: ImageSize,
}

impl SourceImage {
    /// Wrap decoded pixels, rejecting images with a zero dimension
    pub fn new(path: impl Into<PathBuf>, pixels: DynamicImage) -> Result<Self> {
        let path = path.into();
        let (width, height) = pixels.dimensions();
        let size = ImageSize::new(width, height).ok_or_else(|| LayoutError::InvalidDimensions {
            path: path.clone(),
            width,
            height,
        })?;
        Ok(Self { path, pixels, size })
    }

    /// Native pixel dimensions
    pub fn size(&self) -> ImageSize {
        self.size
    }
}

/// Whether `path` has one of the supported image extensions (any case)
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// List the image files directly inside `folder`, in directory order.
///
/// Subdirectories are not descended into.
pub async fn discover_images(folder: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let folder = folder.as_ref();
    let mut entries = tokio::fs::read_dir(folder)
        .await
        .map_err(LayoutError::io(folder))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(LayoutError::io(folder))? {
        let path = entry.path();
        if !is_supported_image(&path) {
            continue;
        }
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(LayoutError::io(&path))?;
        if metadata.is_file() {
            debug!("Found image {}", path.display());
            paths.push(path);
        }
    }

    Ok(paths)
}

/// Decode an in-memory image file
pub fn decode_image(path: impl Into<PathBuf>, bytes: &[u8]) -> Result<SourceImage> {
    let path = path.into();
    let pixels = match image::load_from_memory(bytes) {
        Ok(pixels) => pixels,
        Err(source) => return Err(LayoutError::Decode { path, source }),
    };
    let image = SourceImage::new(path, pixels)?;
    debug!(
        "Decoded {} ({}x{})",
        image.path.display(),
        image.size.width(),
        image.size.height()
    );
    Ok(image)
}

/// Load and decode a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await.map_err(LayoutError::io(&path))?;
    tokio::task::spawn_blocking(move || decode_image(path, &bytes)).await?
}

/// Load and decode one page's worth of images, in order
pub async fn load_group(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(load_image(path).await?);
    }
    Ok(images)
}
