use crate::image::Image;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use id_arena::{Arena, Id};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Filter, Finish, Name, Pdf};

/// Where an image from the document goes on a page
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Images to draw, in order
    pub images: Vec<ImageLayout>,
}

impl Page {
    /// Create an empty page with the given physical size
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::from_size(size.0, size.1),
            images: Vec::default(),
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.images.push(image);
    }

    /// Stretch an image over the entire media box, without any margin
    pub fn add_full_page_image(&mut self, image_id: Id<Image>) {
        self.add_image(ImageLayout {
            image_id,
            position: self.media_box,
        });
    }

    fn render(&self) -> Vec<u8> {
        let mut content = Content::new();
        for layout in self.images.iter() {
            let position = layout.position;
            content.save_state();
            content.transform([
                position.width().0,
                0.0,
                0.0,
                position.height().0,
                position.x1.0,
                position.y1.0,
            ]);
            content.x_object(Name(image_name(layout.image_id).as_bytes()));
            content.restore_state();
        }
        content.finish()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) {
        let id = match refs.get(RefType::Page(page_index)) {
            Some(id) => id,
            None => refs.gen(RefType::Page(page_index)),
        };
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        if let Some(tree) = refs.get(RefType::PageTree) {
            page.parent(tree);
        }

        let mut resources = page.resources();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(image_id.index())) {
                resource_xobjects.pair(Name(image_name(image_id).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let compressed =
            compress_to_vec_zlib(&self.render(), CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);
    }
}

fn image_name(id: Id<Image>) -> String {
    format!("I{}", id.index())
}
