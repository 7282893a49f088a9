//! # Part module
//!
//! A MIME part exposes its payload through the generic
//! [MimePart::content] accessor. Leaf parts are represented by
//! [SinglePart], image leaf parts by [ImagePart], which composes a
//! [SinglePart] and replaces its raw body by an [Image].

mod image;
mod single;

use crate::image::Image;

#[doc(inline)]
pub use self::{image::ImagePart, single::SinglePart};

pub(crate) const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
pub(crate) const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/*";

pub(crate) const ATTACHMENT: &str = "attachment";
pub(crate) const INLINE: &str = "inline";

/// The capability shared by every MIME part.
pub trait MimePart {
    /// Return the MIME type of the part, for example `image/png`.
    fn content_type(&self) -> &str;

    /// Return the payload of the part.
    fn content(&self) -> Content<'_>;
}

/// The generic payload of a MIME part.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Content<'a> {
    /// The part holds nothing.
    #[default]
    None,

    /// The part holds raw bytes.
    Data(&'a [u8]),

    /// The part holds an in-memory image.
    Image(&'a Image),
}

impl<'a> Content<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_data(&self) -> Option<&'a [u8]> {
        match self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&'a Image> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// The presentation of a part, as given by the
/// `Content-Disposition` header.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Disposition {
    /// The part is displayed within the message body.
    #[default]
    Inline,

    /// The part is displayed as a separate attachment.
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => INLINE,
            Self::Attachment => ATTACHMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Disposition;

    #[test_log::test]
    fn disposition_header_values() {
        assert_eq!(Disposition::default(), Disposition::Inline);
        assert_eq!(Disposition::Inline.as_str(), "inline");
        assert_eq!(Disposition::Attachment.as_str(), "attachment");
    }
}
