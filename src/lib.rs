//! Keyboard-driven sprite actors for small 2D games.
//!
//! The centerpiece is [`actor::Actor`]: a sprite with a position, a velocity,
//! and a speed. The game loop feeds it key presses and releases, calls
//! [`actor::Actor::act()`] once per tick, and [`actor::Actor::draw()`] once per
//! frame. Everything an actor depends on from the outside world sits behind a
//! small seam:
//!
//! - images come from an [`asset::ImageLoader`],
//! - drawing goes to a [`gfx::Surface`] through a [`gfx::Scale`],
//! - keys arrive as [`input::InputEvent`]s.
//!
//! The `sprite-actor` binary wires these up to a terminal.

#![warn(missing_docs)]

pub mod actor;
pub mod asset;
pub mod config;
pub mod error;
pub mod geo;
pub mod gfx;
pub mod input;
pub mod logging;
pub mod timing;

pub use error::Error;
pub use error::LoadError;
