//! # MIME part
//!
//! Rust library to hold image-typed MIME parts.
//!
//! The core concept of this library is the [ImagePart], a leaf MIME
//! part holding one in-memory [Image] and exposing it through the
//! generic [MimePart::content] accessor:
//!
//! ```rust
//! use mime_part::{Content, DynamicImage, Image, ImageFormat, ImagePart, MimePart};
//!
//! let red = Image::new(DynamicImage::new_rgba8(1, 1), ImageFormat::Png);
//!
//! let mut part = ImagePart::new();
//! assert_eq!(part.content(), Content::None);
//!
//! part.set_image(red.clone());
//! assert_eq!(part.content(), Content::Image(&red));
//! assert_eq!(part.content_type(), "image/png");
//! ```
//!
//! With the `compiler` feature, an [ImagePart] can be compiled into a
//! MIME part using the [ImagePartCompiler] builder. With the
//! `interpreter` feature, image parts can be extracted from a MIME
//! message using the [ImagePartInterpreter] builder.

#[cfg(feature = "compiler")]
pub mod compiler;
mod error;
pub mod image;
#[cfg(feature = "interpreter")]
pub mod interpreter;
pub mod part;

pub use ::image::{DynamicImage, ImageFormat};

#[cfg(feature = "compiler")]
#[doc(inline)]
pub use self::compiler::{ImageEncoding, ImagePartCompiler};
#[cfg(feature = "interpreter")]
#[doc(inline)]
pub use self::interpreter::ImagePartInterpreter;
#[doc(inline)]
pub use self::{
    error::{Error, Result},
    image::Image,
    part::{Content, Disposition, ImagePart, MimePart, SinglePart},
};
