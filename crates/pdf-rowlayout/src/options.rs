use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed page size shared by every page of a run.
///
/// The physical size is given in inches; point and pixel sizes are derived
/// from it, pixels at `dpi`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageGeometry {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_in: DEFAULT_PAGE_WIDTH_IN,
            height_in: DEFAULT_PAGE_HEIGHT_IN,
            dpi: DEFAULT_DPI,
        }
    }
}

impl PageGeometry {
    pub fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Page width in points
    pub fn width_pt(&self) -> f64 {
        in_to_pt(self.width_in)
    }

    /// Page height in points
    pub fn height_pt(&self) -> f64 {
        in_to_pt(self.height_in)
    }

    /// Page width in whole pixels at `dpi`, never wider than the page
    pub fn width_px(&self) -> u32 {
        whole_pixels(self.width_in, self.dpi)
    }

    /// Page height in whole pixels at `dpi`, never taller than the page
    pub fn height_px(&self) -> u32 {
        whole_pixels(self.height_in, self.dpi)
    }

    /// Convert a pixel length to points at this page's density
    pub fn px_to_pt(&self, px: f64) -> f64 {
        px_to_pt(px, self.dpi)
    }
}

/// Truncate `inches * dpi` to whole pixels.
///
/// The tolerance keeps sizes like 8.27 in at 300 dpi (2480.9999... in binary
/// floating point) at 2481 px.
fn whole_pixels(inches: f64, dpi: u32) -> u32 {
    (inches * dpi as f64 + PIXEL_TOLERANCE).floor() as u32
}

/// Row layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    pub page: PageGeometry,
    pub max_images_per_page: usize,
    pub output_file_name: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            max_images_per_page: MAX_IMAGES_PER_PAGE,
            output_file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(LayoutError::io(path))?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json)
            .await
            .map_err(LayoutError::io(path))?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.max_images_per_page == 0 {
            return Err(LayoutError::Config(
                "Images per page must be at least 1".to_string(),
            ));
        }

        if self.page.dpi == 0 {
            return Err(LayoutError::Config("DPI must be positive".to_string()));
        }

        // Rejects NaN as well
        if !(self.page.width_in > 0.0 && self.page.height_in > 0.0) {
            return Err(LayoutError::Config(format!(
                "Page size must be positive, got {} x {} in",
                self.page.width_in, self.page.height_in
            )));
        }

        if self.page.width_px() == 0 || self.page.height_px() == 0 {
            return Err(LayoutError::Config(format!(
                "Page is smaller than one pixel at {} dpi",
                self.page.dpi
            )));
        }

        if self.output_file_name.trim().is_empty() {
            return Err(LayoutError::Config(
                "Output file name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
