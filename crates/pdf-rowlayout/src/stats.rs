use crate::layout::page_count;
use crate::options::LayoutOptions;
use crate::types::*;

/// Calculate page statistics for `image_count` images without decoding anything
pub fn calculate_statistics(
    image_count: usize,
    options: &LayoutOptions,
) -> Result<LayoutStatistics> {
    options.validate()?;
    page_statistics(image_count, options.max_images_per_page)
}

/// Statistics for `image_count` images at `capacity` per page; `capacity` must be positive
pub(crate) fn page_statistics(image_count: usize, capacity: usize) -> Result<LayoutStatistics> {
    if image_count == 0 {
        return Err(LayoutError::NoImages);
    }

    let pages = page_count(image_count, capacity);

    // Every page is full except possibly the last
    let mut images_per_page = vec![capacity; pages];
    if let Some(last) = images_per_page.last_mut() {
        *last = image_count - capacity * (pages - 1);
    }

    Ok(LayoutStatistics {
        images: image_count,
        pages,
        images_per_page,
    })
}
