use pdf_rowlayout::constants::*;
use pdf_rowlayout::*;

#[test]
fn test_default_page_geometry() {
    let page = PageGeometry::default();
    assert_eq!(page.dpi, 300);
    assert_eq!(page.width_px(), 3507);
    assert_eq!(page.height_px(), 2481);
    assert!((page.width_pt() - 841.68).abs() < 1e-9);
    assert!((page.height_pt() - 595.44).abs() < 1e-9);
}

#[test]
fn test_pixel_and_point_sizes_agree() {
    let page = PageGeometry::default();
    assert!((page.px_to_pt(page.width_px() as f64) - page.width_pt()).abs() < 1e-9);
    assert!((page.px_to_pt(page.height_px() as f64) - page.height_pt()).abs() < 1e-9);
}

#[test]
fn test_unit_conversion() {
    assert_eq!(in_to_pt(1.0), 72.0);
    assert_eq!(px_to_pt(300.0, 300), 72.0);
    assert_eq!(px_to_pt(150.0, 150), 72.0);
}

#[test]
fn test_default_options() {
    let options = LayoutOptions::default();
    assert_eq!(options.max_images_per_page, 10);
    assert_eq!(options.output_file_name, "Output_RowLayout_Paged.pdf");
    assert_eq!(options.page, PageGeometry::default());
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_capacity() {
    let options = LayoutOptions {
        max_images_per_page: 0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(LayoutError::Config(_))));
}

#[test]
fn test_validate_rejects_bad_page() {
    let zero_dpi = LayoutOptions {
        page: PageGeometry::new(11.69, 8.27, 0),
        ..Default::default()
    };
    assert!(zero_dpi.validate().is_err());

    let negative = LayoutOptions {
        page: PageGeometry::new(-1.0, 8.27, 300),
        ..Default::default()
    };
    assert!(negative.validate().is_err());

    let not_a_number = LayoutOptions {
        page: PageGeometry::new(f64::NAN, 8.27, 300),
        ..Default::default()
    };
    assert!(not_a_number.validate().is_err());

    let sub_pixel = LayoutOptions {
        page: PageGeometry::new(0.001, 8.27, 72),
        ..Default::default()
    };
    assert!(sub_pixel.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_output_name() {
    let options = LayoutOptions {
        output_file_name: "  ".to_string(),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(LayoutError::Config(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let options = LayoutOptions {
        page: PageGeometry::new(8.5, 11.0, 150),
        max_images_per_page: 4,
        output_file_name: "rows.pdf".to_string(),
    };
    options.save(&path).await.unwrap();

    let loaded = LayoutOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_load_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let result = LayoutOptions::load(&path).await;
    assert!(matches!(result, Err(LayoutError::Config(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = LayoutOptions::load(&path).await.unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_page_pixels_truncate_to_fit() {
    assert_eq!(PageGeometry::new(1.25, 1.25, 10).width_px(), 12);
    assert_eq!(PageGeometry::new(2.99, 1.0, 100).width_px(), 299);
    assert_eq!(PageGeometry::new(8.27, 11.69, 300).width_px(), 2481);

    for page in [
        PageGeometry::new(1.25, 3.33, 10),
        PageGeometry::new(8.5, 11.0, 75),
        PageGeometry::default(),
    ] {
        assert!(page.px_to_pt(page.width_px() as f64) <= page.width_pt() + 1e-9);
        assert!(page.px_to_pt(page.height_px() as f64) <= page.height_pt() + 1e-9);
    }
}
