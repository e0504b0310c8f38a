//! Image XObject encoding
//!
//! Decoded pixels are stored as 8-bit samples compressed with FlateDecode.
//! An alpha channel becomes a separate grayscale soft mask.

use crate::types::{LayoutError, Result};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::DynamicImage;
use lopdf::{Dictionary, Object, Stream};
use std::io::Write;

/// Color space of the encoded samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageColor {
    Gray,
    Rgb,
}

impl ImageColor {
    fn pdf_name(self) -> &'static [u8] {
        match self {
            ImageColor::Gray => b"DeviceGray",
            ImageColor::Rgb => b"DeviceRGB",
        }
    }
}

/// An image re-encoded for embedding in the document
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub color: ImageColor,
    /// Flate-compressed color samples
    pub samples: Vec<u8>,
    /// Flate-compressed alpha samples, if the source had transparency
    pub alpha: Option<Vec<u8>>,
}

/// Build an Image XObject stream from already-compressed samples
pub(crate) fn image_stream(
    width: u32,
    height: u32,
    color: ImageColor,
    samples: Vec<u8>,
) -> Stream {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color.pdf_name().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
    Stream::new(dict, samples).with_compression(false)
}

/// Re-encode decoded pixels for embedding
pub fn encode_image(pixels: &DynamicImage) -> Result<EncodedImage> {
    let (width, height) = (pixels.width(), pixels.height());
    let color_type = pixels.color();

    let (color, raw) = if color_type.has_color() {
        (ImageColor::Rgb, pixels.to_rgb8().into_raw())
    } else {
        (ImageColor::Gray, pixels.to_luma8().into_raw())
    };
    let samples = deflate(&raw)?;

    let alpha = if color_type.has_alpha() {
        let alpha: Vec<u8> = pixels.to_rgba8().pixels().map(|p| p.0[3]).collect();
        Some(deflate(&alpha)?)
    } else {
        None
    };

    Ok(EncodedImage {
        width,
        height,
        color,
        samples,
        alpha,
    })
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| LayoutError::Encode(format!("Failed to compress image data: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| LayoutError::Encode(format!("Failed to finish compression: {}", e)))
}
