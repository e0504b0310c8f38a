//! The seam between layout and document serialization

use crate::layout::Rect;
use crate::types::Result;

use super::EncodedImage;

/// Identifies a page created by a [`DocumentSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle(pub usize);

/// Something that can receive laid-out pages.
///
/// Pages are created in output order and images are placed on them in row
/// order. Nothing is persisted until [`DocumentSink::finish`].
pub trait DocumentSink {
    /// Start a new page of the given size in points
    fn create_page(&mut self, width_pt: f64, height_pt: f64) -> Result<PageHandle>;

    /// Draw `image` on `page`, scaled to fill `rect`
    fn place_image(&mut self, page: PageHandle, image: EncodedImage, rect: Rect) -> Result<()>;

    /// Finalize the document and return its serialized bytes
    fn finish(self) -> Result<Vec<u8>>;
}
