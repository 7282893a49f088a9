use std::{io, path::PathBuf};

use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read image at {1}")]
    ReadImageError(#[source] io::Error, PathBuf),
    #[error("cannot guess image format")]
    GuessImageFormatError(#[source] image::ImageError),
    #[error("cannot decode {1:?} image")]
    DecodeImageError(#[source] image::ImageError, image::ImageFormat),
    #[error("cannot encode image to {1:?}")]
    EncodeImageError(#[source] image::ImageError, image::ImageFormat),

    #[cfg(feature = "compiler")]
    #[error("cannot compile image part: no image set")]
    CompileEmptyImagePartError,
    #[cfg(feature = "compiler")]
    #[error("cannot compile image part to vec")]
    WriteCompiledPartToVecError(#[source] io::Error),

    #[cfg(feature = "interpreter")]
    #[error("cannot parse MIME message")]
    ParseMimeMessageError,
    #[cfg(feature = "interpreter")]
    #[error("cannot build MIME message")]
    WriteMessageError(#[source] io::Error),
}
