use flate2::read::ZlibDecoder;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::{Document, Object};
use pdf_rowlayout::render::ImageColor;
use pdf_rowlayout::*;
use std::io::Read;

fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

fn rgb_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 20, 30])))
}

#[test]
fn test_encode_rgb_image() {
    let encoded = encode_image(&rgb_image(3, 2)).unwrap();
    assert_eq!(encoded.width, 3);
    assert_eq!(encoded.height, 2);
    assert_eq!(encoded.color, ImageColor::Rgb);
    assert!(encoded.alpha.is_none());
    assert_eq!(inflate(&encoded.samples), [10, 20, 30].repeat(6));
}

#[test]
fn test_encode_gray_image() {
    let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([77])));
    let encoded = encode_image(&gray).unwrap();
    assert_eq!(encoded.color, ImageColor::Gray);
    assert_eq!(inflate(&encoded.samples), vec![77; 16]);
}

#[test]
fn test_encode_image_with_alpha() {
    let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 128])));
    let encoded = encode_image(&rgba).unwrap();
    assert_eq!(encoded.color, ImageColor::Rgb);
    assert_eq!(inflate(&encoded.samples), [1, 2, 3].repeat(4));
    assert_eq!(inflate(encoded.alpha.as_ref().unwrap()), vec![128; 4]);
}

#[test]
fn test_pdf_sink_writes_pages() {
    let mut sink = PdfSink::new();
    let first = sink.create_page(841.68, 595.44).unwrap();
    let second = sink.create_page(841.68, 595.44).unwrap();
    assert_ne!(first, second);
    assert_eq!(sink.page_count(), 2);

    let image = encode_image(&rgb_image(2, 2)).unwrap();
    sink.place_image(first, image.clone(), Rect::new(0.0, 0.0, 100.0, 50.0))
        .unwrap();
    sink.place_image(first, image.clone(), Rect::new(100.0, 0.0, 100.0, 50.0))
        .unwrap();
    sink.place_image(second, image, Rect::new(0.0, 10.0, 20.0, 30.0))
        .unwrap();

    let bytes = sink.finish().unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 2);

    let first_id = pages[&1];
    let page_dict = doc.get_dictionary(first_id).unwrap();
    let media_box = page_dict.get(b"MediaBox").unwrap().as_array().unwrap();
    assert!((media_box[2].as_float().unwrap() - 841.68).abs() < 0.01);
    assert!((media_box[3].as_float().unwrap() - 595.44).abs() < 0.01);

    let xobjects = page_dict
        .get(b"Resources")
        .and_then(Object::as_dict)
        .and_then(|r| r.get(b"XObject"))
        .and_then(Object::as_dict)
        .unwrap();
    assert_eq!(xobjects.len(), 2);

    let content = String::from_utf8(doc.get_page_content(first_id).unwrap()).unwrap();
    assert!(content.contains("q 100 0 0 50 0 0 cm /Im0 Do Q"));
    assert!(content.contains("q 100 0 0 50 100 0 cm /Im1 Do Q"));

    let content = String::from_utf8(doc.get_page_content(pages[&2]).unwrap()).unwrap();
    assert!(content.contains("q 20 0 0 30 0 10 cm /Im2 Do Q"));
}

#[test]
fn test_pdf_sink_embeds_soft_mask() {
    let mut sink = PdfSink::new();
    let page = sink.create_page(100.0, 100.0).unwrap();
    let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 128])));
    sink.place_image(
        page,
        encode_image(&rgba).unwrap(),
        Rect::new(0.0, 0.0, 10.0, 10.0),
    )
    .unwrap();

    let doc = Document::load_mem(&sink.finish().unwrap()).unwrap();
    let page_id = doc.get_pages()[&1];
    let xobject_ref = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Resources")
        .and_then(Object::as_dict)
        .and_then(|r| r.get(b"XObject"))
        .and_then(Object::as_dict)
        .and_then(|x| x.get(b"Im0"))
        .and_then(Object::as_reference)
        .unwrap();
    let stream = doc.get_object(xobject_ref).unwrap().as_stream().unwrap();

    assert_eq!(
        stream.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
        b"DeviceRGB"
    );
    let smask_ref = stream.dict.get(b"SMask").unwrap().as_reference().unwrap();
    let smask = doc.get_object(smask_ref).unwrap().as_stream().unwrap();
    assert_eq!(
        smask.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
        b"DeviceGray"
    );
}

#[test]
fn test_pdf_sink_rejects_unknown_page() {
    let mut sink = PdfSink::new();
    let image = encode_image(&rgb_image(1, 1)).unwrap();
    let result = sink.place_image(PageHandle(3), image, Rect::default());
    assert!(matches!(result, Err(LayoutError::Pdf(_))));
}

#[test]
fn test_pdf_sink_without_pages_fails() {
    assert!(matches!(
        PdfSink::new().finish(),
        Err(LayoutError::NoImages)
    ));
}
