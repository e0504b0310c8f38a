//! Splitting the image list into pages

use crate::types::{LayoutError, Result};

/// Split `items` into consecutive groups of at most `capacity`, keeping order.
///
/// Group `i` holds items `[i * capacity, min((i + 1) * capacity, n))`; only
/// the last group can be short. An empty input is an error, as is a zero
/// capacity.
pub fn paginate<T>(items: Vec<T>, capacity: usize) -> Result<Vec<Vec<T>>> {
    if capacity == 0 {
        return Err(LayoutError::Config(
            "Images per page must be at least 1".to_string(),
        ));
    }
    if items.is_empty() {
        return Err(LayoutError::NoImages);
    }

    let mut groups = Vec::with_capacity(page_count(items.len(), capacity));
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        groups.push(items.by_ref().take(capacity).collect());
    }

    Ok(groups)
}

/// Number of pages needed for `count` images at `capacity` per page
pub fn page_count(count: usize, capacity: usize) -> usize {
    count.div_ceil(capacity)
}
