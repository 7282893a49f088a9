//! # Image module
//!
//! Module dedicated to the in-memory raster image held by image
//! parts. The [Image] owns decoded pixels together with the format
//! they came from (or should be written to).

use std::{fs, io::Cursor, path::Path};

use image::{DynamicImage, ImageFormat};
use shellexpand_utils::shellexpand_path;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{Error, Result};

/// The in-memory raster image.
///
/// When built from encoded bytes, the source bytes are kept so that
/// writing the image back in its own format neither re-encodes nor
/// loses quality.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    /// The decoded pixels.
    pixels: DynamicImage,

    /// The format of the image.
    format: ImageFormat,

    /// The encoded bytes the pixels were decoded from, if any.
    source: Option<Vec<u8>>,
}

impl Image {
    /// Create a new image from decoded pixels.
    ///
    /// The format is the one used when the image needs to be written
    /// as bytes.
    pub fn new(pixels: impl Into<DynamicImage>, format: ImageFormat) -> Self {
        Self {
            pixels: pixels.into(),
            format,
            source: None,
        }
    }

    /// Decode the given encoded bytes.
    ///
    /// The format is guessed from the magic bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let format = image::guess_format(&bytes).map_err(Error::GuessImageFormatError)?;
        Self::from_bytes_with_format(bytes, format)
    }

    /// Decode the given encoded bytes using the given format.
    pub fn from_bytes_with_format(
        bytes: impl Into<Vec<u8>>,
        format: ImageFormat,
    ) -> Result<Self> {
        let bytes = bytes.into();
        let pixels = image::load_from_memory_with_format(&bytes, format)
            .map_err(|err| Error::DecodeImageError(err, format))?;

        trace!(
            "decoded {format:?} image of {}x{}",
            pixels.width(),
            pixels.height()
        );

        Ok(Self {
            pixels,
            format,
            source: Some(bytes),
        })
    }

    /// Read then decode the image file at the given path.
    ///
    /// The path is shell-expanded first.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = shellexpand_path(path);
        debug!("reading image at {}", path.display());
        let bytes = fs::read(&path).map_err(|err| Error::ReadImageError(err, path.clone()))?;
        Self::from_bytes(bytes)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Change the format the image is written to.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Return the MIME type matching the image format, for example
    /// `image/png`.
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.pixels
    }

    /// Return the encoded bytes the image was decoded from, if any.
    pub fn source(&self) -> Option<&[u8]> {
        self.source.as_deref()
    }

    /// Return the source bytes if they are encoded in the given
    /// format.
    fn source_in(&self, format: ImageFormat) -> Option<&[u8]> {
        match &self.source {
            Some(bytes) if image::guess_format(bytes).ok() == Some(format) => Some(bytes),
            _ => None,
        }
    }

    /// Encode the image to the given format.
    ///
    /// JPEG has no alpha channel, so pixels are flattened to RGB
    /// before being encoded to it. GIF only supports 8-bit channels,
    /// so pixels are converted to RGBA8 before being encoded to it.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        if let Some(bytes) = self.source_in(format) {
            trace!("reusing {format:?} source bytes");
            return Ok(bytes.to_vec());
        }

        let mut bytes = Cursor::new(Vec::new());

        match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(self.pixels.to_rgb8())
                .write_to(&mut bytes, format)
                .map_err(|err| Error::EncodeImageError(err, format))?,
            ImageFormat::Gif => DynamicImage::ImageRgba8(self.pixels.to_rgba8())
                .write_to(&mut bytes, format)
                .map_err(|err| Error::EncodeImageError(err, format))?,
            _ => self
                .pixels
                .write_to(&mut bytes, format)
                .map_err(|err| Error::EncodeImageError(err, format))?,
        }

        trace!("encoded image to {format:?}");
        Ok(bytes.into_inner())
    }

    /// Encode the image to its own format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.encode(self.format)
    }
}
