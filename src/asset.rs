//! Sprite images and the loaders that produce them.
//!
//! Actors never decode anything themselves; they ask an [`ImageLoader`] for a
//! path and hold on to whatever [`Image`] comes back. Loaders hand out
//! `Arc<Image>`s so that many actors can share a single decoded bitmap.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chashmap::CHashMap;
use image::Rgba;
use image::RgbaImage;

use crate::error::LoadError;

/// A decoded RGBA bitmap.
#[derive(Clone, PartialEq, Debug)]
pub struct Image {
  pixels: RgbaImage,
}

impl Image {
  /// Wraps an already-decoded bitmap.
  pub fn new(pixels: RgbaImage) -> Self {
    Self { pixels }
  }

  /// Creates a `width` by `height` image filled with a single color.
  pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
    Self::new(RgbaImage::from_pixel(width, height, Rgba(color)))
  }

  /// Returns the width of this image, in pixels.
  pub fn width(&self) -> i64 {
    self.pixels.width() as i64
  }

  /// Returns the height of this image, in pixels.
  pub fn height(&self) -> i64 {
    self.pixels.height() as i64
  }

  /// Returns the pixel at `(x, y)`, or `None` if it is out of range.
  pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
    if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
      return None;
    }
    Some(*self.pixels.get_pixel(x as u32, y as u32))
  }
}

/// Something that can turn a path into a decoded [`Image`].
pub trait ImageLoader {
  /// Loads the image named by `path`.
  fn load(&self, path: &str) -> Result<Arc<Image>, LoadError>;
}

impl<L: ImageLoader + ?Sized> ImageLoader for &L {
  fn load(&self, path: &str) -> Result<Arc<Image>, LoadError> {
    (**self).load(path)
  }
}

impl<L: ImageLoader + ?Sized> ImageLoader for Box<L> {
  fn load(&self, path: &str) -> Result<Arc<Image>, LoadError> {
    (**self).load(path)
  }
}

/// Loads images from the filesystem, relative to a resource root.
#[derive(Clone, Debug)]
pub struct FsLoader {
  root: PathBuf,
}

impl FsLoader {
  /// Creates a new loader that resolves relative paths against `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Resolves `path` against the resource root.
  ///
  /// Absolute paths are returned unchanged.
  pub fn resolve(&self, path: &str) -> PathBuf {
    self.root.join(path)
  }
}

impl ImageLoader for FsLoader {
  fn load(&self, path: &str) -> Result<Arc<Image>, LoadError> {
    let path = self.resolve(path);
    if !path.is_file() {
      return Err(LoadError::NotFound { path });
    }

    let decoded = match image::open(&path) {
      Ok(img) => img,
      Err(image::ImageError::IoError(source)) => {
        return Err(match source.kind() {
          io::ErrorKind::NotFound => LoadError::NotFound { path },
          _ => LoadError::Io { path, source },
        })
      }
      Err(source) => return Err(LoadError::Decode { path, source }),
    };

    let pixels = decoded.into_rgba8();
    log::debug!(
      "decoded {} ({}x{})",
      path.display(),
      pixels.width(),
      pixels.height()
    );
    Ok(Arc::new(Image::new(pixels)))
  }
}

/// A loader that remembers what it has loaded, so that every request for the
/// same path shares one decoded image.
///
/// Failures are not remembered; asking again retries the inner loader.
pub struct CachingLoader<L> {
  inner: L,
  cache: CHashMap<String, Arc<Image>>,
}

impl<L: ImageLoader> CachingLoader<L> {
  /// Wraps `inner` with a cache.
  pub fn new(inner: L) -> Self {
    Self {
      inner,
      cache: CHashMap::new(),
    }
  }

  /// Returns the number of distinct images currently cached.
  pub fn len(&self) -> usize {
    self.cache.len()
  }

  /// Returns whether the cache is empty.
  pub fn is_empty(&self) -> bool {
    self.cache.is_empty()
  }

  /// Drops every cached image.
  ///
  /// Actors holding an image keep it alive until they let go of it.
  pub fn clear(&self) {
    self.cache.clear();
  }
}

impl<L: ImageLoader> ImageLoader for CachingLoader<L> {
  fn load(&self, path: &str) -> Result<Arc<Image>, LoadError> {
    if let Some(img) = self.cache.get(path) {
      return Ok(Arc::clone(&*img));
    }

    let img = self.inner.load(path)?;
    self.cache.insert(path.to_string(), Arc::clone(&img));
    Ok(img)
  }
}

/// A loader backed by an in-memory table of images.
///
/// Handy for tests, and for generating placeholder sprites when there are no
/// assets on disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
  images: HashMap<String, Arc<Image>>,
}

impl MemoryLoader {
  /// Creates an empty `MemoryLoader`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `image` under `path`, replacing whatever was there.
  pub fn insert(&mut self, path: impl Into<String>, image: Image) {
    self.images.insert(path.into(), Arc::new(image));
  }

  /// Builder-style version of [`MemoryLoader::insert()`].
  pub fn with(mut self, path: impl Into<String>, image: Image) -> Self {
    self.insert(path, image);
    self
  }
}

impl ImageLoader for MemoryLoader {
  fn load(&self, path: &str) -> Result<Arc<Image>, LoadError> {
    self
      .images
      .get(path)
      .cloned()
      .ok_or_else(|| LoadError::NotFound { path: path.into() })
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::path::Path;

  use super::*;

  struct Counting<'a>(MemoryLoader, &'a Cell<u32>);

  impl ImageLoader for Counting<'_> {
    fn load(&self, path: &str) -> Result<Arc<Image>, LoadError> {
      self.1.set(self.1.get() + 1);
      self.0.load(path)
    }
  }

  #[test]
  fn memory_loader_reports_missing_paths() {
    let loader = MemoryLoader::new().with("a.png", Image::solid(2, 3, [0; 4]));
    assert_eq!(loader.load("a.png").unwrap().height(), 3);
    match loader.load("b.png") {
      Err(LoadError::NotFound { path }) => assert_eq!(path, Path::new("b.png")),
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn caching_loader_shares_images() {
    let calls = Cell::new(0);
    let inner =
      MemoryLoader::new().with("a.png", Image::solid(4, 4, [255; 4]));
    let loader = CachingLoader::new(Counting(inner, &calls));

    let a = loader.load("a.png").unwrap();
    let b = loader.load("a.png").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(calls.get(), 1);
    assert_eq!(loader.len(), 1);
  }

  #[test]
  fn caching_loader_retries_failures() {
    let calls = Cell::new(0);
    let loader = CachingLoader::new(Counting(MemoryLoader::new(), &calls));

    assert!(loader.load("nope.png").is_err());
    assert!(loader.load("nope.png").is_err());
    assert_eq!(calls.get(), 2);
    assert!(loader.is_empty());
  }

  #[test]
  fn image_pixel_is_bounds_checked() {
    let img = Image::solid(2, 2, [1, 2, 3, 4]);
    assert_eq!(img.pixel(1, 1), Some(Rgba([1, 2, 3, 4])));
    assert_eq!(img.pixel(2, 0), None);
    assert_eq!(img.pixel(0, -1), None);
  }
}
