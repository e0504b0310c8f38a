//! Row scaling
//!
//! Two passes, in this order:
//! 1. every image is scaled on its own to exactly the page height;
//! 2. if the resulting row is wider than the page, the whole row is shrunk
//!    by one common factor.
//!
//! Both passes scale width and height together, so no image is distorted.
//! A row that already fits is left untouched, not stretched.

use crate::options::PageGeometry;
use crate::types::ImageSize;
use log::warn;

use super::{RowScale, ScaledImage};

/// Width of an image once scaled to `target_height_px`, rounded to whole pixels
pub fn normalized_width(size: ImageSize, target_height_px: u32) -> u64 {
    let width = size.width() as f64 * target_height_px as f64 / size.height() as f64;
    width.round() as u64
}

/// Factor that brings a row of `row_width_px` within `page_width_px`.
///
/// Exactly 1.0 when the row already fits; only ever shrinks.
pub fn global_scale(row_width_px: u64, page_width_px: u32) -> f64 {
    if row_width_px > page_width_px as u64 {
        page_width_px as f64 / row_width_px as f64
    } else {
        1.0
    }
}

/// Compute final pixel sizes for one page's images, in row order
pub fn scale_row(sizes: &[ImageSize], page: &PageGeometry) -> RowScale {
    let page_height_px = page.height_px();

    let widths: Vec<u64> = sizes
        .iter()
        .enumerate()
        .map(|(index, &size)| {
            let width = normalized_width(size, page_height_px);
            if width == 0 {
                warn!(
                    "Image {} ({}x{}) is narrower than one pixel at page height and will not be visible",
                    index,
                    size.width(),
                    size.height()
                );
            }
            width
        })
        .collect();

    let natural_width_px: u64 = widths.iter().sum();
    let global_scale = global_scale(natural_width_px, page.width_px());

    let images = widths
        .into_iter()
        .map(|width| ScaledImage {
            width_px: width as f64 * global_scale,
            height_px: page_height_px as f64 * global_scale,
        })
        .collect();

    RowScale {
        images,
        natural_width_px,
        global_scale,
    }
}
