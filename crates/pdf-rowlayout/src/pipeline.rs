//! Row layout pipeline
//!
//! This module orchestrates a run:
//! 1. Discover image files in the source folder
//! 2. Split them into pages
//! 3. Per page: decode, scale the row, place it, draw it
//! 4. Serialize the document and save it next to the images
//!
//! Pages are handled strictly one after another. A page's decoded images are
//! dropped as soon as they are drawn, so at most one page of pixels is held
//! in memory at a time.

use crate::layout::{paginate, place_row, scale_row};
use crate::options::{LayoutOptions, PageGeometry};
use crate::render::{DocumentSink, PageHandle, PdfSink, encode_image, save_document};
use crate::source::{SourceImage, discover_images, load_group};
use crate::stats::page_statistics;
use crate::types::*;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The folder held no eligible images; nothing was written
    NoImages,
    /// The document was written to `path`
    Saved {
        path: PathBuf,
        statistics: LayoutStatistics,
    },
}

/// Lay out every image in `folder` and save the document into the same folder
pub async fn run(folder: impl AsRef<Path>, options: &LayoutOptions) -> Result<RunOutcome> {
    options.validate()?;

    let folder = folder.as_ref();
    let paths = discover_images(folder).await?;
    if paths.is_empty() {
        info!("No image files found in {}", folder.display());
        return Ok(RunOutcome::NoImages);
    }

    let statistics = page_statistics(paths.len(), options.max_images_per_page)?;
    info!(
        "Laying out {} images on {} pages",
        statistics.images, statistics.pages
    );

    let sink = render_pages(paths, options, PdfSink::new()).await?;
    let bytes = tokio::task::spawn_blocking(move || sink.finish()).await??;

    let path = folder.join(&options.output_file_name);
    save_document(bytes, &path).await?;
    info!("Saved {}", path.display());

    Ok(RunOutcome::Saved { path, statistics })
}

/// Lay out `paths` into `sink`, one page per group, and hand the sink back.
///
/// The sink is not finished; a failure part-way drops it with everything
/// drawn so far.
pub async fn run_with_sink<S>(
    paths: Vec<PathBuf>,
    options: &LayoutOptions,
    sink: S,
) -> Result<S>
where
    S: DocumentSink + Send + 'static,
{
    options.validate()?;
    render_pages(paths, options, sink).await
}

/// Page loop shared by [`run`] and [`run_with_sink`]; options are already validated
async fn render_pages<S>(paths: Vec<PathBuf>, options: &LayoutOptions, mut sink: S) -> Result<S>
where
    S: DocumentSink + Send + 'static,
{
    let groups = paginate(paths, options.max_images_per_page)?;
    let total = groups.len();

    for (index, group) in groups.into_iter().enumerate() {
        let images = load_group(&group).await?;
        let count = images.len();
        let page = options.page;

        sink = tokio::task::spawn_blocking(move || {
            render_group(&mut sink, images, &page)?;
            Ok::<_, LayoutError>(sink)
        })
        .await??;

        info!("Rendered page {}/{} ({} images)", index + 1, total, count);
    }

    Ok(sink)
}

/// Scale, place and draw one page's images onto a new page of `sink`.
///
/// Consumes the images; each one is released right after it is drawn.
pub fn render_group<S: DocumentSink>(
    sink: &mut S,
    images: Vec<SourceImage>,
    page: &PageGeometry,
) -> Result<PageHandle> {
    let sizes: Vec<ImageSize> = images.iter().map(SourceImage::size).collect();
    let row = scale_row(&sizes, page);
    debug!(
        "Row of {} images: natural width {} px, global scale {:.4}",
        sizes.len(),
        row.natural_width_px,
        row.global_scale
    );

    let handle = sink.create_page(page.width_pt(), page.height_pt())?;
    for placement in place_row(images.into_iter().zip(row.images), page) {
        let encoded = encode_image(&placement.image.pixels)?;
        sink.place_image(handle, encoded, placement.rect)?;
    }

    Ok(handle)
}
