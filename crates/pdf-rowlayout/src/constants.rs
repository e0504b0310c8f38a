//! Shared constants for row layout
//!
//! Page geometry defaults, unit conversion and input/output naming live here
//! so the rest of the crate never hard-codes them.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Convert a pixel length to points at the given density
#[inline]
pub fn px_to_pt(px: f64, dpi: u32) -> f64 {
    px * POINTS_PER_INCH / dpi as f64
}

// =============================================================================
// Default Page Geometry
// =============================================================================

/// Default page width in inches (A4 landscape)
pub const DEFAULT_PAGE_WIDTH_IN: f64 = 11.69;

/// Default page height in inches (A4 landscape)
pub const DEFAULT_PAGE_HEIGHT_IN: f64 = 8.27;

/// Default raster density used for every pixel/point conversion
pub const DEFAULT_DPI: u32 = 300;

/// Slack when truncating page sizes to whole pixels (pixels)
pub const PIXEL_TOLERANCE: f64 = 1e-6;

/// Largest float error tolerated below the page's bottom edge (points)
pub const PLACEMENT_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Pagination
// =============================================================================

/// Maximum number of images placed on one page
pub const MAX_IMAGES_PER_PAGE: usize = 10;

// =============================================================================
// Files
// =============================================================================

/// File extensions picked up from the source folder (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Name of the document written into the source folder
pub const OUTPUT_FILE_NAME: &str = "Output_RowLayout_Paged.pdf";
