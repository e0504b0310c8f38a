//! lopdf-backed document sink

use crate::layout::Rect;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

use super::xobject::image_stream;
use super::{DocumentSink, EncodedImage, ImageColor, PageHandle};

/// A page whose content is still being drawn
struct PendingPage {
    width_pt: f64,
    height_pt: f64,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

/// Builds a PDF document page by page.
///
/// Image data is moved into the document as soon as it is placed; page
/// dictionaries and the page tree are written by [`DocumentSink::finish`].
pub struct PdfSink {
    output: Document,
    pages_tree_id: ObjectId,
    pages: Vec<PendingPage>,
    image_count: usize,
}

impl Default for PdfSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSink {
    pub fn new() -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            output,
            pages_tree_id,
            pages: Vec::new(),
            image_count: 0,
        }
    }

    /// Number of pages created so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn add_image_xobject(&mut self, image: EncodedImage) -> ObjectId {
        let EncodedImage {
            width,
            height,
            color,
            samples,
            alpha,
        } = image;

        let smask_id = alpha.map(|alpha| {
            self.output
                .add_object(image_stream(width, height, ImageColor::Gray, alpha))
        });

        let mut stream = image_stream(width, height, color, samples);
        if let Some(smask_id) = smask_id {
            stream.dict.set("SMask", Object::Reference(smask_id));
        }
        self.output.add_object(stream)
    }

    fn render_page(&mut self, page: PendingPage) -> ObjectId {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width_pt as f32),
                Object::Real(page.height_pt as f32),
            ]),
        );

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(page.xobjects));

        let content = page.content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        self.output.add_object(page_dict)
    }
}

impl DocumentSink for PdfSink {
    fn create_page(&mut self, width_pt: f64, height_pt: f64) -> Result<PageHandle> {
        self.pages.push(PendingPage {
            width_pt,
            height_pt,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        });
        Ok(PageHandle(self.pages.len() - 1))
    }

    fn place_image(&mut self, page: PageHandle, image: EncodedImage, rect: Rect) -> Result<()> {
        if page.0 >= self.pages.len() {
            return Err(LayoutError::Pdf(format!("Unknown page {}", page.0)));
        }

        let xobject_id = self.add_image_xobject(image);
        let xobject_name = format!("Im{}", self.image_count);
        self.image_count += 1;

        let pending = &mut self.pages[page.0];
        pending
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        pending.content_ops.push(placement_command(&xobject_name, &rect));

        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(LayoutError::NoImages);
        }

        let pages = std::mem::take(&mut self.pages);
        let page_refs: Vec<Object> = pages
            .into_iter()
            .map(|page| Object::Reference(self.render_page(page)))
            .collect();

        // Create pages tree
        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        let mut writer = Vec::new();
        self.output
            .save_to(&mut writer)
            .map_err(|e| LayoutError::Pdf(format!("Failed to serialize document: {}", e)))?;
        Ok(writer)
    }
}

/// Content stream command drawing an image XObject into `rect`.
///
/// Image XObjects occupy the unit square, so the matrix scales it to the
/// rectangle's size and moves it to its bottom-left corner.
fn placement_command(xobject_name: &str, rect: &Rect) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}

/// Write serialized document bytes to `path`
pub async fn save_document(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, bytes)
        .await
        .map_err(LayoutError::io(path))?;
    Ok(())
}
