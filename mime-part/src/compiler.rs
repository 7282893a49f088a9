//! # Image part to MIME compilation module
//!
//! Module dedicated to image part → MIME part compilation. The
//! compiled part is a [mail_builder::mime::MimePart], which takes
//! care of writing headers and of transfer-encoding the image bytes.

use image::ImageFormat;
use mail_builder::{
    headers::{content_type::ContentType, text::Text},
    mime::MimePart,
    MessageBuilder,
};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{
    part::{Disposition, ImagePart},
    Error, Result,
};

const CONTENT_DESCRIPTION: &str = "Content-Description";
const CONTENT_DISPOSITION: &str = "Content-Disposition";
const FILENAME: &str = "filename";
const NAME: &str = "name";
const NONAME: &str = "noname";

/// The format images are written to when compiled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ImageEncoding {
    /// Keep the format of the image.
    #[default]
    Original,
    Png,
    Jpeg,
    Gif,
}

impl ImageEncoding {
    /// Return the format to encode to, or [None] to keep the one of
    /// the image.
    pub fn format(&self) -> Option<ImageFormat> {
        match self {
            Self::Original => None,
            Self::Png => Some(ImageFormat::Png),
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Gif => Some(ImageFormat::Gif),
        }
    }
}

/// Image part → MIME part compiler.
///
/// The compiler follows the builder pattern, where the build function
/// is named `compile`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", default)
)]
pub struct ImagePartCompiler {
    /// Defines the format images are written to.
    encoding: ImageEncoding,

    /// Defines the disposition of parts that do not define one.
    disposition: Disposition,
}

impl ImagePartCompiler {
    /// Create a new image part compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_encoding(&mut self, encoding: ImageEncoding) {
        self.encoding = encoding;
    }

    pub fn with_encoding(mut self, encoding: ImageEncoding) -> Self {
        self.set_encoding(encoding);
        self
    }

    pub fn set_disposition(&mut self, disposition: Disposition) {
        self.disposition = disposition;
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.set_disposition(disposition);
        self
    }

    /// Compile the given image part to a [MimePart].
    pub fn compile(&self, part: &ImagePart) -> Result<MimePart<'static>> {
        let image = part.image().ok_or(Error::CompileEmptyImagePartError)?;

        let format = self.encoding.format().unwrap_or(image.format());
        let bytes = image.encode(format)?;
        debug!("compiling {format:?} image part of {} bytes", bytes.len());

        let mut ctype = ContentType::new(format.to_mime_type());
        if let Some(name) = part.filename() {
            ctype = ctype.attribute(NAME, name.to_owned());
        }

        let mut mime_part = MimePart::new(ctype, bytes);

        mime_part = match (part.disposition().unwrap_or(self.disposition), part.filename()) {
            (Disposition::Attachment, fname) => {
                mime_part.attachment(fname.unwrap_or(NONAME).to_owned())
            }
            (disposition @ Disposition::Inline, Some(fname)) => mime_part.header(
                CONTENT_DISPOSITION,
                ContentType::new(disposition.as_str()).attribute(FILENAME, fname.to_owned()),
            ),
            (Disposition::Inline, None) => mime_part.inline(),
        };

        if let Some(id) = part.content_id() {
            mime_part = mime_part.cid(id.to_owned());
        }

        if let Some(description) = part.description() {
            mime_part = mime_part.header(CONTENT_DESCRIPTION, Text::new(description.to_owned()));
        }

        Ok(mime_part)
    }

    /// Compile the given image part, then write it as raw MIME
    /// bytes.
    pub fn compile_to_vec(&self, part: &ImagePart) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.compile(part)?
            .write_part(&mut bytes)
            .map_err(Error::WriteCompiledPartToVecError)?;
        Ok(bytes)
    }

    /// Compile the given image part as the body of a new
    /// [MessageBuilder].
    pub fn compile_msg(&self, part: &ImagePart) -> Result<MessageBuilder<'static>> {
        let mime_part = self.compile(part)?;
        Ok(MessageBuilder::new().body(mime_part))
    }
}
