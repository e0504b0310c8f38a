//! Placement of a scaled row on its page
//!
//! Images are packed left to right from the left edge with no gaps. Each one
//! is centered vertically on its own. Unused width stays on the right.

use crate::constants::PLACEMENT_TOLERANCE;
use crate::options::PageGeometry;

use super::{Placement, Rect, ScaledImage};

/// Convert a scaled image to its rectangle at horizontal position `x` (points)
pub fn place_image(x: f64, image: &ScaledImage, page: &PageGeometry) -> Rect {
    let width = page.px_to_pt(image.width_px);
    let height = page.px_to_pt(image.height_px);

    // Row heights never exceed the page's whole-pixel height, so anything
    // below zero here is float noise from a full-height image
    let y = (page.height_pt() - height) / 2.0;
    let y = if y < 0.0 && y > -PLACEMENT_TOLERANCE { 0.0 } else { y };

    Rect::new(x, y, width, height)
}

/// Place a row of scaled images, keeping the order they come in.
///
/// The row is consumed so that each image travels with its placement.
pub fn place_row<T, I>(row: I, page: &PageGeometry) -> Vec<Placement<T>>
where
    I: IntoIterator<Item = (T, ScaledImage)>,
{
    let mut x = 0.0;
    row.into_iter()
        .map(|(image, scaled)| {
            let rect = place_image(x, &scaled, page);
            x = rect.right();
            Placement { image, rect }
        })
        .collect()
}
