//! Actors: positioned, drawable, keyboard-driven sprites.

use std::fmt;
use std::sync::Arc;

use log::debug;
use log::error;
use num::traits::WrappingAdd as _;

use crate::asset::Image;
use crate::asset::ImageLoader;
use crate::config::ActorDefaults;
use crate::error::Error;
use crate::error::LoadError;
use crate::geo::Point;
use crate::geo::Rect;
use crate::gfx::Scale;
use crate::gfx::Surface;
use crate::input::InputEvent;
use crate::input::Key;

/// Component: an actor steered by the keyboard.
pub struct Player;

/// A sprite with a position and a velocity.
///
/// Every tick, [`Actor::act()`] moves the actor by its velocity. Directional
/// keys set the velocity on their axis to `±speed`; releasing either key on an
/// axis stops movement on that axis, whichever key was actually driving it.
///
/// The sprite image comes from an [`ImageLoader`]. Failing to load it does not
/// prevent the actor from existing, but anything that needs the sprite's size
/// (drawing, bounds, dimensions) returns [`Error::MissingImage`] until a later
/// [`Actor::set_image()`] succeeds.
pub struct Actor {
  path: String,
  image: Option<Arc<Image>>,
  load_error: Option<Arc<LoadError>>,
  pos: Point,
  vel: Point,
  speed: i64,
}

impl Actor {
  /// Creates an actor at the origin with the default sprite and speed.
  pub fn new<L: ImageLoader + ?Sized>(loader: &L) -> Self {
    Self::from_defaults(loader, &ActorDefaults::default(), 0, 0)
  }

  /// Creates an actor at `(x, y)` with the given sprite and the default speed.
  pub fn at<L: ImageLoader + ?Sized>(
    loader: &L,
    path: impl Into<String>,
    x: i64,
    y: i64,
  ) -> Self {
    Self::with_speed(loader, path, x, y, ActorDefaults::SPEED)
  }

  /// Creates an actor at `(x, y)` with the given sprite and speed.
  pub fn with_speed<L: ImageLoader + ?Sized>(
    loader: &L,
    path: impl Into<String>,
    x: i64,
    y: i64,
    speed: i64,
  ) -> Self {
    let mut actor = Self {
      path: path.into(),
      image: None,
      load_error: None,
      pos: Point::new(x, y),
      vel: Point::zero(),
      speed,
    };
    actor.reload(loader);
    actor
  }

  /// Creates an actor at `(x, y)` using the sprite and speed in `defaults`.
  pub fn from_defaults<L: ImageLoader + ?Sized>(
    loader: &L,
    defaults: &ActorDefaults,
    x: i64,
    y: i64,
  ) -> Self {
    Self::with_speed(loader, defaults.image_path.as_str(), x, y, defaults.speed)
  }

  fn reload<L: ImageLoader + ?Sized>(&mut self, loader: &L) {
    match loader.load(&self.path) {
      Ok(image) => {
        debug!(
          "loaded sprite `{}` ({}x{})",
          self.path,
          image.width(),
          image.height()
        );
        self.image = Some(image);
        self.load_error = None;
      }
      Err(e) => {
        match std::error::Error::source(&e) {
          Some(cause) => error!("failed to load sprite: {}: {}", e, cause),
          None => error!("failed to load sprite: {}", e),
        }
        self.image = None;
        self.load_error = Some(Arc::new(e));
      }
    }
  }

  /// Replaces the sprite with the one at `path`, e.g. to animate.
  ///
  /// On failure the actor is left with no image at all, rather than the
  /// previous one, and the error is both recorded (see
  /// [`Actor::load_error()`]) and returned.
  pub fn set_image<L: ImageLoader + ?Sized>(
    &mut self,
    loader: &L,
    path: impl Into<String>,
  ) -> Result<(), Error> {
    self.path = path.into();
    self.reload(loader);
    match &self.load_error {
      Some(e) => Err(Error::Load(Arc::clone(e))),
      None => Ok(()),
    }
  }

  /// Advances the actor by one tick.
  ///
  /// Positions wrap around at the edges of `i64`.
  pub fn act(&mut self) {
    self.pos = self.pos.wrapping_add(&self.vel);
  }

  /// Responds to a directional key going down.
  ///
  /// The most recent key on an axis wins; non-directional keys are ignored.
  pub fn key_pressed(&mut self, key: Key) {
    let vel = match key {
      Key::Left => self.vel.with_x(-self.speed),
      Key::Right => self.vel.with_x(self.speed),
      Key::Up => self.vel.with_y(-self.speed),
      Key::Down => self.vel.with_y(self.speed),
      Key::Other => return,
    };
    self.steer(vel, key);
  }

  /// Responds to a directional key coming up, stopping its whole axis.
  pub fn key_released(&mut self, key: Key) {
    let vel = match key {
      Key::Left | Key::Right => self.vel.with_x(0),
      Key::Up | Key::Down => self.vel.with_y(0),
      Key::Other => return,
    };
    self.steer(vel, key);
  }

  fn steer(&mut self, vel: Point, key: Key) {
    if vel == self.vel {
      return;
    }
    debug!(
      "`{}` velocity {:?} -> {:?} on {:?}",
      self.path,
      self.vel.coords(),
      vel.coords(),
      key
    );
    self.vel = vel;
  }

  /// Dispatches `event` to [`Actor::key_pressed()`] or
  /// [`Actor::key_released()`].
  pub fn handle(&mut self, event: InputEvent) {
    match event {
      InputEvent::Pressed(key) => self.key_pressed(key),
      InputEvent::Released(key) => self.key_released(key),
    }
  }

  /// Draws the sprite centered on the actor's position.
  ///
  /// The upper-left corner and the dimensions all go through `scale`, so the
  /// sprite grows or shrinks about the origin.
  pub fn draw<S: Surface + ?Sized>(
    &self,
    surface: &mut S,
    scale: Scale,
  ) -> Result<(), Error> {
    let image = self.sprite()?;
    let rect = self.sprite_rect()?;
    surface.draw_image(
      image,
      scale.scale(rect.x()),
      scale.scale(rect.y()),
      scale.scale(rect.width()),
      scale.scale(rect.height()),
    );
    Ok(())
  }

  /// Returns the collision rectangle: the sprite's size, with its upper-left
  /// corner at the actor's position.
  ///
  /// Note that this is *not* where [`Actor::draw()`] puts the sprite; that is
  /// [`Actor::sprite_rect()`], which is shifted up and left by half the
  /// sprite's size.
  pub fn bounds(&self) -> Result<Rect, Error> {
    let image = self.sprite()?;
    Ok(Rect::at(self.x(), self.y(), image.width(), image.height()))
  }

  /// Returns the rectangle the sprite is drawn into, in logical pixels: the
  /// sprite's size, centered on the actor's position.
  pub fn sprite_rect(&self) -> Result<Rect, Error> {
    let image = self.sprite()?;
    Ok(
      Rect::with_dims(image.width(), image.height())
        .centered_on(self.position()),
    )
  }

  /// Checks whether this actor's [`bounds`][Actor::bounds] overlap `other`'s.
  pub fn intersects(&self, other: &Actor) -> Result<bool, Error> {
    Ok(self.bounds()?.intersects(other.bounds()?))
  }

  fn sprite(&self) -> Result<&Image, Error> {
    self.image.as_deref().ok_or_else(|| Error::MissingImage {
      path: self.path.clone(),
    })
  }

  /// Returns the actor's `x` coordinate.
  pub fn x(&self) -> i64 {
    self.pos.x()
  }

  /// Returns the actor's `y` coordinate.
  pub fn y(&self) -> i64 {
    self.pos.y()
  }

  /// Returns the actor's position.
  pub fn position(&self) -> Point {
    self.pos
  }

  /// Returns the per-tick change in `x`.
  pub fn dx(&self) -> i64 {
    self.vel.x()
  }

  /// Sets the per-tick change in `x`.
  pub fn set_dx(&mut self, dx: i64) {
    self.vel = self.vel.with_x(dx);
  }

  /// Returns the per-tick change in `y`.
  pub fn dy(&self) -> i64 {
    self.vel.y()
  }

  /// Sets the per-tick change in `y`.
  pub fn set_dy(&mut self, dy: i64) {
    self.vel = self.vel.with_y(dy);
  }

  /// Returns the velocity, as `(dx, dy)`.
  pub fn velocity(&self) -> Point {
    self.vel
  }

  /// Sets the velocity.
  pub fn set_velocity(&mut self, vel: Point) {
    self.vel = vel;
  }

  /// Returns the speed directional keys apply.
  pub fn speed(&self) -> i64 {
    self.speed
  }

  /// Sets the speed directional keys apply.
  ///
  /// The current velocity is left alone until the next key press.
  pub fn set_speed(&mut self, speed: i64) {
    self.speed = speed;
  }

  /// Returns the sprite's width in logical pixels.
  pub fn width(&self) -> Result<i64, Error> {
    Ok(self.sprite()?.width())
  }

  /// Returns the sprite's height in logical pixels.
  pub fn height(&self) -> Result<i64, Error> {
    Ok(self.sprite()?.height())
  }

  /// Returns the sprite, if one is loaded.
  pub fn image(&self) -> Option<&Arc<Image>> {
    self.image.as_ref()
  }

  /// Returns the path of the sprite this actor wants.
  pub fn path(&self) -> &str {
    &self.path
  }

  /// Returns why the most recent load failed, if it did.
  pub fn load_error(&self) -> Option<&LoadError> {
    self.load_error.as_deref()
  }
}

impl fmt::Debug for Actor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Actor")
      .field("path", &self.path)
      .field("loaded", &self.image.is_some())
      .field("pos", &self.pos)
      .field("vel", &self.vel)
      .field("speed", &self.speed)
      .finish()
  }
}
