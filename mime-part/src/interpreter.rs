//! # MIME to image part interpretation module
//!
//! Module dedicated to MIME → image part interpretation. Messages are
//! parsed by [mail_parser], then every image leaf part is decoded
//! into an [ImagePart].

use mail_builder::MessageBuilder;
use mail_parser::{Message, MessageParser, MessagePart, MimeHeaders, PartType};
#[allow(unused_imports)]
use tracing::{debug, trace, warn};

use crate::{
    image::Image,
    part::{Disposition, ImagePart, DEFAULT_CONTENT_TYPE},
    Error, Result,
};

const IMAGE_TYPE_PREFIX: &str = "image/";

/// MIME → image part interpreter.
///
/// The interpreter follows the builder pattern, where the build
/// function is named `interpret_*`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", default)
)]
pub struct ImagePartInterpreter {
    /// Defines how the MIME type of a part is found.
    ///
    /// When `true`, the MIME type is detected from the content of the
    /// part. This is useful for images sent as
    /// `application/octet-stream`.
    ///
    /// When `false`, the declared `Content-Type` is trusted.
    sniff_content_type: bool,

    /// Defines the strategy for image parts that cannot be decoded
    /// while interpreting a whole message.
    ///
    /// When `true`, those parts are logged then skipped.
    ///
    /// When `false`, the first decoding error aborts the
    /// interpretation.
    skip_undecodable: bool,
}

impl Default for ImagePartInterpreter {
    fn default() -> Self {
        Self {
            sniff_content_type: false,
            skip_undecodable: true,
        }
    }
}

impl ImagePartInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sniff_content_type(mut self, sniff: bool) -> Self {
        self.sniff_content_type = sniff;
        self
    }

    pub fn with_skip_undecodable(mut self, skip: bool) -> Self {
        self.skip_undecodable = skip;
        self
    }

    /// Interpret the given [MessagePart] as an [ImagePart].
    ///
    /// Returns [None] when the part is not an image leaf part.
    pub fn interpret_part(&self, part: &MessagePart) -> Result<Option<ImagePart>> {
        let data = match &part.body {
            PartType::Binary(data) | PartType::InlineBinary(data) => data.as_ref(),
            _ => return Ok(None),
        };

        let ctype = if self.sniff_content_type {
            tree_magic_mini::from_u8(data).to_owned()
        } else {
            get_ctype(part)
        };

        if !ctype.starts_with(IMAGE_TYPE_PREFIX) {
            trace!("skipping non-image part {ctype}");
            return Ok(None);
        }

        let image = Image::from_bytes(data)?;
        debug!("interpreted {ctype} part as {:?} image", image.format());

        let mut image_part = ImagePart::from_image(image);
        image_part.set_some_filename(part.attachment_name());
        image_part.set_some_content_id(part.content_id());
        image_part.set_some_description(part.content_description());
        image_part.set_some_disposition(get_disposition(part));

        Ok(Some(image_part))
    }

    /// Interpret the given MIME [Message] as the list of its image
    /// parts.
    pub fn interpret_msg(&self, msg: &Message<'_>) -> Result<Vec<ImagePart>> {
        let mut image_parts = Vec::new();

        for part in &msg.parts {
            if let PartType::Message(msg) = &part.body {
                image_parts.extend(self.interpret_msg(msg)?);
                continue;
            }

            match self.interpret_part(part) {
                Ok(Some(image_part)) => image_parts.push(image_part),
                Ok(None) => (),
                Err(err) if self.skip_undecodable => {
                    warn!("cannot interpret image part, skipping it: {err}");
                    debug!("{err:?}");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(image_parts)
    }

    /// Interpret the given MIME message bytes as the list of its
    /// image parts.
    pub fn interpret_bytes(&self, bytes: impl AsRef<[u8]>) -> Result<Vec<ImagePart>> {
        let msg = MessageParser::new()
            .parse(bytes.as_ref())
            .ok_or(Error::ParseMimeMessageError)?;
        self.interpret_msg(&msg)
    }

    /// Interpret the given MIME [MessageBuilder] as the list of its
    /// image parts.
    pub fn interpret_msg_builder(&self, builder: MessageBuilder<'_>) -> Result<Vec<ImagePart>> {
        let bytes = builder.write_to_vec().map_err(Error::WriteMessageError)?;
        self.interpret_bytes(&bytes)
    }
}

fn get_ctype(part: &MessagePart) -> String {
    part.content_type()
        .and_then(|ctype| {
            ctype
                .subtype()
                .map(|stype| format!("{}/{stype}", ctype.ctype()))
        })
        .unwrap_or_else(|| String::from(DEFAULT_CONTENT_TYPE))
        .to_lowercase()
}

fn get_disposition(part: &MessagePart) -> Option<Disposition> {
    let disposition = part.content_disposition()?;

    if disposition.is_attachment() {
        Some(Disposition::Attachment)
    } else if disposition.is_inline() {
        Some(Disposition::Inline)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use concat_with::concat_line;
    use image::{ImageFormat, Rgba, RgbaImage};
    use mail_builder::{mime::MimePart, MessageBuilder};

    use crate::{image::Image, part::Disposition, Error};

    use super::ImagePartInterpreter;

    fn red_png() -> Vec<u8> {
        Image::new(
            RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255])),
            ImageFormat::Png,
        )
        .to_bytes()
        .unwrap()
    }

    #[test_log::test]
    fn attachment() {
        let builder = MessageBuilder::new()
            .text_body("Hello, world!")
            .attachment("image/png", "red.png", red_png());

        let parts = ImagePartInterpreter::new()
            .interpret_msg_builder(builder)
            .unwrap();

        assert_eq!(parts.len(), 1);

        let part = &parts[0];
        assert_eq!(part.filename(), Some("red.png"));
        assert_eq!(part.disposition(), Some(Disposition::Attachment));
        assert_eq!(part.image().map(Image::format), Some(ImageFormat::Png));
        assert_eq!(part.image().and_then(Image::source), Some(red_png().as_slice()));
    }

    #[test_log::test]
    fn inline_with_content_id() {
        let builder = MessageBuilder::new().body(MimePart::new(
            "multipart/related",
            vec![
                MimePart::new("text/html", "<img src=\"cid:red@localhost\">"),
                MimePart::new("image/png", red_png())
                    .inline()
                    .cid("red@localhost"),
            ],
        ));

        let parts = ImagePartInterpreter::new()
            .interpret_msg_builder(builder)
            .unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].content_id(), Some("red@localhost"));
        assert_eq!(parts[0].disposition(), Some(Disposition::Inline));
    }

    #[test_log::test]
    fn sniffed_content_type() {
        let builder = MessageBuilder::new()
            .text_body("Hello, world!")
            .attachment("application/octet-stream", "red.bin", red_png());

        let parts = ImagePartInterpreter::new()
            .interpret_msg_builder(builder.clone())
            .unwrap();

        assert!(parts.is_empty());

        let parts = ImagePartInterpreter::new()
            .with_sniff_content_type(true)
            .interpret_msg_builder(builder)
            .unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].filename(), Some("red.bin"));
        assert_eq!(parts[0].image().map(Image::format), Some(ImageFormat::Png));
    }

    #[test_log::test]
    fn non_image_parts() {
        let msg = concat_line!(
            "From: alice@localhost",
            "To: bob@localhost",
            "Subject: no image",
            "MIME-Version: 1.0",
            "Content-Type: multipart/mixed; boundary=\"boundary\"",
            "",
            "--boundary",
            "Content-Type: text/plain",
            "",
            "Hello, world!",
            "--boundary",
            "Content-Type: application/pdf",
            "Content-Disposition: attachment; filename=\"doc.pdf\"",
            "Content-Transfer-Encoding: base64",
            "",
            "JVBERi0xLjQK",
            "--boundary--",
            "",
        );

        let parts = ImagePartInterpreter::new().interpret_bytes(msg).unwrap();

        assert!(parts.is_empty());
    }

    #[test_log::test]
    fn undecodable_image() {
        let builder = MessageBuilder::new()
            .text_body("Hello, world!")
            .attachment("image/png", "broken.png", b"not a png".to_vec())
            .attachment("image/png", "red.png", red_png());

        let parts = ImagePartInterpreter::new()
            .interpret_msg_builder(builder.clone())
            .unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].filename(), Some("red.png"));

        let err = ImagePartInterpreter::new()
            .with_skip_undecodable(false)
            .interpret_msg_builder(builder)
            .unwrap_err();

        assert!(matches!(err, Error::GuessImageFormatError(_)));
    }
}
