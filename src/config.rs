//! Tunables.

use std::path::PathBuf;
use std::time::Duration;

use crate::gfx::Scale;

/// Defaults used when an [`Actor`] is built without spelling everything out.
///
/// [`Actor`]: crate::actor::Actor
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActorDefaults {
  /// The sprite to load, relative to the resource root.
  pub image_path: String,
  /// The magnitude given to velocity components by a directional key.
  pub speed: i64,
}

impl ActorDefaults {
  /// The image path an actor gets when none is given.
  pub const IMAGE_PATH: &'static str = "images/actor.png";
  /// The speed an actor gets when none is given.
  pub const SPEED: i64 = 2;
}

impl Default for ActorDefaults {
  fn default() -> Self {
    Self {
      image_path: Self::IMAGE_PATH.to_string(),
      speed: Self::SPEED,
    }
  }
}

/// Settings for a running game.
#[derive(Clone, PartialEq, Debug)]
pub struct Settings {
  /// Directory that relative image paths are resolved against.
  pub resource_root: PathBuf,
  /// Logical-to-device pixel transform applied when drawing.
  pub scale: Scale,
  /// Frames per second the game loop aims for.
  pub target_fps: u32,
  /// How long a key must go quiet before it counts as released.
  ///
  /// Terminals only report presses, so this has to outlast the keyboard's
  /// auto-repeat delay or held keys stutter. The cost is that a tapped key
  /// keeps the actor moving for this long.
  pub release_delay: Duration,
  /// Defaults for newly created actors.
  pub actors: ActorDefaults,
}

impl Settings {
  /// The default [`Settings::release_delay`]; longer than the usual 250 to
  /// 660 ms auto-repeat delays.
  pub const RELEASE_DELAY: Duration = Duration::from_millis(700);
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      resource_root: PathBuf::from("."),
      scale: Scale::ONE,
      target_fps: 60,
      release_delay: Self::RELEASE_DELAY,
      actors: ActorDefaults::default(),
    }
  }
}
