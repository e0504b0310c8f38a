pub mod constants;
pub mod layout;
mod options;
mod pipeline;
pub mod render;
mod source;
mod stats;
mod types;

pub use layout::{Placement, Rect, RowScale, ScaledImage, paginate, place_row, scale_row};
pub use options::*;
pub use pipeline::{RunOutcome, render_group, run, run_with_sink};
pub use render::{DocumentSink, EncodedImage, PageHandle, PdfSink, encode_image, save_document};
pub use source::{
    SourceImage, decode_image, discover_images, is_supported_image, load_group, load_image,
};
pub use stats::calculate_statistics;
pub use types::*;
