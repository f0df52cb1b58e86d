use crate::error::Result;
use crate::refs::{ObjectReferences, RefType};
use image::{DynamicImage, RgbImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// A raster image that can be placed on a [Page](crate::Page).
///
/// Pixels are stored as 8-bit RGB; any alpha channel is dropped on load.
pub struct Image {
    pub pixels: RgbImage,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image> {
        let data = std::fs::read(path.as_ref())?;
        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;
        log::debug!(
            "loaded {:?} image {}x{} from {}",
            format,
            image.width(),
            image.height(),
            path.as_ref().display()
        );
        Ok(Self::new_raster(image))
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        Self::from_rgb(image.to_rgb8())
    }

    pub fn from_rgb(pixels: RgbImage) -> Image {
        let (width, height) = pixels.dimensions();
        Image {
            pixels,
            width,
            height,
        }
    }

    fn encode(&self) -> Vec<u8> {
        compress_to_vec_zlib(self.pixels.as_raw(), CompressionLevel::DefaultLevel as u8)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mut image = writer.image_xobject(id, encoded.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();
    }
}
