use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("No images to lay out")]
    NoImages,
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid image dimensions {width}x{height} in {}", .path.display())]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl LayoutError {
    /// Build a mapper that attaches `path` to an IO error
    pub(crate) fn io(path: impl AsRef<Path>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.as_ref().to_owned();
        move |source| LayoutError::Io { path, source }
    }

    /// Whether this error came from reading or writing the file system
    pub fn is_io(&self) -> bool {
        matches!(self, LayoutError::Io { .. })
    }

    /// Whether this error came from an unusable input image
    pub fn is_bad_image(&self) -> bool {
        matches!(
            self,
            LayoutError::Decode { .. } | LayoutError::InvalidDimensions { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Native pixel dimensions of a decoded image.
///
/// Both sides are positive; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

/// Statistics about a layout run
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Total number of input images
    pub images: usize,
    /// Number of output pages
    pub pages: usize,
    /// Image count on each page, in page order
    pub images_per_page: Vec<usize>,
}
