use std::fs;
use std::sync::Arc;

use image::Rgba;
use image::RgbaImage;
use tempfile::TempDir;

use sprite_actor::actor::Actor;
use sprite_actor::asset::CachingLoader;
use sprite_actor::asset::FsLoader;
use sprite_actor::asset::Image;
use sprite_actor::asset::ImageLoader;
use sprite_actor::geo::Rect;
use sprite_actor::gfx::Canvas;
use sprite_actor::gfx::Scale;
use sprite_actor::gfx::texel::Color;
use sprite_actor::gfx::texel::Texel;
use sprite_actor::input::Key;
use sprite_actor::Error;
use sprite_actor::LoadError;

/// Lays out a resource root containing `images/actor.png` (20x10) and
/// `images/small.png` (4x4).
fn assets() -> TempDir {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  fs::create_dir(dir.path().join("images")).expect("failed to create images/");
  RgbaImage::from_pixel(20, 10, Rgba([255, 0, 0, 255]))
    .save(dir.path().join("images/actor.png"))
    .expect("failed to write actor.png");
  RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
    .save(dir.path().join("images/small.png"))
    .expect("failed to write small.png");
  dir
}

#[test]
fn moves_right_then_stops() {
  let dir = assets();
  let loader = FsLoader::new(dir.path());

  let mut a = Actor::with_speed(&loader, "images/actor.png", 100, 100, 2);
  a.key_pressed(Key::Right);
  a.act();
  assert_eq!(a.x(), 102);
  assert_eq!(a.dx(), 2);

  a.key_released(Key::Right);
  assert_eq!(a.dx(), 0);
  a.act();
  assert_eq!(a.x(), 102);
}

#[test]
fn up_moves_by_speed() {
  let dir = assets();
  let loader = FsLoader::new(dir.path());

  let mut a = Actor::with_speed(&loader, "images/actor.png", 0, 0, 5);
  a.key_pressed(Key::Up);
  a.act();
  assert_eq!((a.x(), a.y()), (0, -5));
}

#[test]
fn bounds_match_decoded_dimensions() {
  let dir = assets();
  let loader = FsLoader::new(dir.path());

  let a = Actor::at(&loader, "images/actor.png", 30, 40);
  assert_eq!(a.bounds().unwrap(), Rect::at(30, 40, 20, 10));
  assert_eq!((a.width().unwrap(), a.height().unwrap()), (20, 10));
}

#[test]
fn default_actor_loads_default_sprite() {
  let dir = assets();
  let loader = FsLoader::new(dir.path());

  let a = Actor::new(&loader);
  assert_eq!(a.path(), "images/actor.png");
  assert_eq!((a.x(), a.y(), a.speed()), (0, 0, 2));
  assert!(a.image().is_some());
}

#[test]
fn nonexistent_path_is_a_defined_failure() {
  let dir = assets();
  let loader = FsLoader::new(dir.path());

  let a = Actor::at(&loader, "images/missing.png", 5, 6);
  match a.load_error() {
    Some(LoadError::NotFound { path }) => {
      assert_eq!(path, &dir.path().join("images/missing.png"))
    }
    other => panic!("unexpected load error: {:?}", other),
  }

  // Everything else about the actor still works.
  assert_eq!((a.x(), a.y()), (5, 6));
  assert!(matches!(a.width(), Err(Error::MissingImage { .. })));
  assert!(matches!(a.height(), Err(Error::MissingImage { .. })));
  assert!(matches!(a.bounds(), Err(Error::MissingImage { .. })));
}

#[test]
fn undecodable_file_is_a_decode_error() {
  let dir = assets();
  fs::write(dir.path().join("images/junk.png"), b"definitely not a png")
    .expect("failed to write junk.png");
  let loader = FsLoader::new(dir.path());

  let mut a = Actor::new(&loader);
  let err = a.set_image(&loader, "images/junk.png").unwrap_err();
  match err {
    Error::Load(e) => assert!(matches!(*e, LoadError::Decode { .. })),
    other => panic!("unexpected error: {:?}", other),
  }
  assert!(a.image().is_none());

  // A corrected path recovers.
  a.set_image(&loader, "images/small.png").unwrap();
  assert_eq!(a.width().unwrap(), 4);
}

#[test]
fn cached_actors_share_one_image() {
  let dir = assets();
  let loader = CachingLoader::new(FsLoader::new(dir.path()));

  let a = Actor::at(&loader, "images/actor.png", 0, 0);
  let b = Actor::at(&loader, "images/actor.png", 50, 50);
  assert!(Arc::ptr_eq(a.image().unwrap(), b.image().unwrap()));
  assert_eq!(loader.len(), 1);
}

#[test]
fn absolute_paths_ignore_the_root() {
  let dir = assets();
  let loader = FsLoader::new("/definitely/not/here");
  let path = dir.path().join("images/small.png");

  let img = loader.load(path.to_str().unwrap()).unwrap();
  assert_eq!((img.width(), img.height()), (4, 4));
}

#[test]
fn draws_centered_onto_a_canvas() {
  let loader = sprite_actor::asset::MemoryLoader::new()
    .with("dot.png", Image::solid(4, 4, [0, 255, 0, 255]));
  let a = Actor::at(&loader, "dot.png", 10, 10);

  let mut canvas = Canvas::new(20, 20, Texel::empty());
  a.draw(&mut canvas, Scale::ONE).unwrap();

  let green = Color::Rgb(sprite_actor::gfx::texel::Rgb::new(0, 255, 0));
  assert_eq!(canvas.get(8, 8).unwrap().bg(), green);
  assert_eq!(canvas.get(11, 11).unwrap().bg(), green);
  assert_eq!(canvas.get(12, 12).unwrap().bg(), Color::Reset);
  assert_eq!(canvas.get(7, 8).unwrap().bg(), Color::Reset);

  canvas.clear();
  a.draw(&mut canvas, Scale::new(1, 2).unwrap()).unwrap();
  assert_eq!(canvas.get(4, 4).unwrap().bg(), green);
  assert_eq!(canvas.get(5, 5).unwrap().bg(), green);
  assert_eq!(canvas.get(6, 6).unwrap().bg(), Color::Reset);
}
