//! Layout data types
//!
//! These types represent the intermediate results between pagination,
//! scaling and rendering.

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// Final on-page pixel size of one image in a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledImage {
    pub width_px: f64,
    pub height_px: f64,
}

/// Scaling result for one page's row of images
#[derive(Debug, Clone, PartialEq)]
pub struct RowScale {
    /// Final sizes, in row order
    pub images: Vec<ScaledImage>,
    /// Row width after height normalization, before the global fit
    pub natural_width_px: u64,
    /// Factor applied to the whole row (1.0 unless the row overflowed)
    pub global_scale: f64,
}

impl RowScale {
    /// Row width after the global fit
    pub fn width_px(&self) -> f64 {
        self.images.iter().map(|image| image.width_px).sum()
    }
}

/// Where one image is drawn on its page
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<T> {
    /// The placed image (or whatever identifies it)
    pub image: T,
    /// Position and size in points
    pub rect: Rect,
}
