use egui::ColorImage;
use thiserror::Error;

use crate::config::config::{MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH};
use crate::core::artwork::ImageRef;
use crate::core::image_format::ImageFormat;

pub trait ImageLoader {
    fn load(&self, image_ref: &ImageRef) -> Result<ColorImage, LoadError>;
    fn supports_format(&self, format: ImageFormat) -> bool;
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("asset {0} has no image data")]
    Empty(&'static str),
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format for {0}")]
    UnsupportedFormat(&'static str),
}

/// Decodes embedded raster bytes into RGBA pixels for egui.
pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, image_ref: &ImageRef) -> Result<ColorImage, LoadError> {
        let name = image_ref.name();
        let bytes = image_ref.bytes();
        if bytes.is_empty() {
            return Err(LoadError::Empty(name));
        }

        // The factory picked this loader by extension; the decoder itself
        // follows the sniffed bytes and only falls back to the extension.
        let decoded = match image::guess_format(bytes) {
            Ok(format) => image::load_from_memory_with_format(bytes, format),
            Err(_) => match ImageFormat::from_name(name) {
                Some(format) => image::load_from_memory_with_format(bytes, format.to_image_crate()),
                None => return Err(LoadError::UnsupportedFormat(name)),
            },
        };
        let img = decoded.map_err(|source| LoadError::Decode { name, source })?;

        let img = if img.width() > MAX_IMAGE_WIDTH || img.height() > MAX_IMAGE_HEIGHT {
            img.resize(
                MAX_IMAGE_WIDTH,
                MAX_IMAGE_HEIGHT,
                image::imageops::FilterType::Triangle,
            )
        } else {
            img
        };

        let rgba_img = img.to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw()))
    }

    fn supports_format(&self, _format: ImageFormat) -> bool {
        true
    }
}

pub struct ImageLoaderFactory {
    loaders: Vec<Box<dyn ImageLoader>>,
}

impl Default for ImageLoaderFactory {
    fn default() -> Self {
        Self {
            loaders: vec![Box::new(RasterImageLoader)],
        }
    }
}

impl ImageLoaderFactory {
    pub fn load_image(&self, image_ref: &ImageRef) -> Result<ColorImage, LoadError> {
        let name = image_ref.name();
        let format = ImageFormat::from_name(name).ok_or(LoadError::UnsupportedFormat(name))?;

        self.loaders
            .iter()
            .find(|loader| loader.supports_format(format))
            .ok_or(LoadError::UnsupportedFormat(name))?
            .load(image_ref)
    }
}
