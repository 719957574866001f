//! Error types.
//!
//! There are really only two things that can go wrong with an actor: its
//! sprite could not be loaded, or someone asked about the sprite's shape while
//! there isn't one.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// A failure to resolve or decode a sprite image.
#[derive(Debug, Error)]
pub enum LoadError {
  /// Nothing exists at the resolved path.
  #[error("no image found at `{path}`")]
  NotFound {
    /// The path that was requested.
    path: PathBuf,
  },

  /// The file exists, but could not be read.
  #[error("could not read `{path}`")]
  Io {
    /// The path that was requested.
    path: PathBuf,
    /// The underlying I/O error.
    #[source]
    source: io::Error,
  },

  /// The file was read, but is not an image we understand.
  #[error("could not decode `{path}`")]
  Decode {
    /// The path that was requested.
    path: PathBuf,
    /// The underlying decoder error.
    #[source]
    source: image::ImageError,
  },
}

/// The crate-wide error type.
#[derive(Clone, Debug, Error)]
pub enum Error {
  /// An image failed to load.
  ///
  /// The same failure is also kept by the actor that requested it, hence the
  /// `Arc`.
  #[error(transparent)]
  Load(Arc<LoadError>),

  /// An operation needed the sprite's dimensions, but no image is loaded.
  #[error("actor `{path}` has no image loaded")]
  MissingImage {
    /// The path of the image the actor was supposed to have.
    path: String,
  },

  /// A scale factor could not be parsed, or has a zero denominator.
  #[error("invalid scale `{0}`")]
  InvalidScale(String),
}

impl From<LoadError> for Error {
  fn from(e: LoadError) -> Self {
    Self::Load(Arc::new(e))
  }
}
