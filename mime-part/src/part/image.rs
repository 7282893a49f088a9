use std::{
    ffi::OsStr,
    ops::{Deref, DerefMut},
    path::Path,
};

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{image::Image, Result};

use super::{Content, Disposition, MimePart, SinglePart, DEFAULT_IMAGE_CONTENT_TYPE};

/// The image MIME part.
///
/// Holds at most one in-memory [Image] as the payload of a leaf
/// part. Metadata (filename, content id, disposition…) lives in the
/// inner [SinglePart], reachable through [Deref].
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePart {
    part: SinglePart,
    image: Option<Image>,
}

impl Default for ImagePart {
    fn default() -> Self {
        Self {
            part: SinglePart::default().with_content_type(DEFAULT_IMAGE_CONTENT_TYPE),
            image: None,
        }
    }
}

impl ImagePart {
    /// Create a new image part without image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new image part holding the given image.
    pub fn from_image(image: Image) -> Self {
        Self::new().with_image(image)
    }

    /// Create a new image part from the image file at the given
    /// path.
    ///
    /// The filename of the part is the file name of the path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = Image::from_path(path)?;
        let mut part = Self::from_image(image);
        part.set_some_filename(path.file_name().and_then(OsStr::to_str));
        Ok(part)
    }

    /// Set the image of the part.
    ///
    /// The previous image, if any, is dropped. Setting [None] clears
    /// the content of the part.
    pub fn set_image(&mut self, image: impl Into<Option<Image>>) {
        drop(self.replace_image(image));
    }

    pub fn with_image(mut self, image: impl Into<Option<Image>>) -> Self {
        self.set_image(image);
        self
    }

    /// Set the image of the part, handing the previous one back.
    pub fn replace_image(&mut self, image: impl Into<Option<Image>>) -> Option<Image> {
        let image = image.into();

        match &image {
            Some(image) => {
                trace!("setting {} image of {:?}", image.mime_type(), image.dimensions());
                self.part.clear_body();
            }
            None => trace!("clearing image"),
        }

        std::mem::replace(&mut self.image, image)
    }

    /// Move the image out of the part, leaving it empty.
    pub fn take_image(&mut self) -> Option<Image> {
        self.image.take()
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn with_filename(mut self, filename: impl ToString) -> Self {
        self.part.set_filename(filename);
        self
    }

    pub fn with_content_id(mut self, id: impl ToString) -> Self {
        self.part.set_content_id(id);
        self
    }

    pub fn with_description(mut self, description: impl ToString) -> Self {
        self.part.set_description(description);
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.part.set_disposition(disposition);
        self
    }

    /// Set the raw body of the part.
    ///
    /// A part carries one payload: the image, if any, is dropped.
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        if self.image.take().is_some() {
            debug!("raw body set, dropping image");
        }
        self.part.set_body(body);
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.set_body(body);
        self
    }

    /// Return the inner single part, dropping the image.
    pub fn into_single_part(self) -> SinglePart {
        self.part
    }
}

impl From<Image> for ImagePart {
    fn from(image: Image) -> Self {
        Self::from_image(image)
    }
}

impl Deref for ImagePart {
    type Target = SinglePart;

    fn deref(&self) -> &Self::Target {
        &self.part
    }
}

impl DerefMut for ImagePart {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.part
    }
}

impl MimePart for ImagePart {
    /// Return the MIME type of the held image, or the one of the
    /// inner part when empty.
    fn content_type(&self) -> &str {
        match &self.image {
            Some(image) => image.mime_type(),
            None => self.part.content_type(),
        }
    }

    fn content(&self) -> Content<'_> {
        match &self.image {
            Some(image) => Content::Image(image),
            None => Content::None,
        }
    }
}
