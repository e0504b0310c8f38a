//! PDF rendering for row layout
//!
//! This module handles all PDF-specific operations:
//! - Encoding decoded images as Image XObjects
//! - The document sink the pipeline draws into
//! - Building pages and serializing the output document

mod pdf;
mod sink;
mod xobject;

pub use pdf::{PdfSink, save_document};
pub use sink::{DocumentSink, PageHandle};
pub use xobject::{EncodedImage, ImageColor, encode_image};
