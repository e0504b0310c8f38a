//! Layout calculation modules for row layout
//!
//! This module handles all the geometric calculations:
//! - Pagination (which images share a page)
//! - Row scaling (per-image height normalization, then a global width fit)
//! - Placement (left-to-right positions in points, vertically centered)

mod paginate;
mod placement;
mod scale;
mod types;

pub use paginate::*;
pub use placement::*;
pub use scale::*;
pub use types::*;
