//! Input processing utilities.

use std::collections::HashMap;
use std::collections::HashSet;
use std::time::Duration;
use std::time::Instant;

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyEvent;

/// The keys an [`Actor`] cares about.
///
/// [`Actor`]: crate::actor::Actor
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Key {
  /// The left arrow.
  Left,
  /// The right arrow.
  Right,
  /// The up arrow.
  Up,
  /// The down arrow.
  Down,
  /// Anything else.
  Other,
}

impl From<KeyCode> for Key {
  fn from(code: KeyCode) -> Self {
    match code {
      KeyCode::Left => Self::Left,
      KeyCode::Right => Self::Right,
      KeyCode::Up => Self::Up,
      KeyCode::Down => Self::Down,
      _ => Self::Other,
    }
  }
}

/// A discrete key transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum InputEvent {
  /// The key went down.
  Pressed(Key),
  /// The key came back up.
  Released(Key),
}

/// A tracker for a frame's key transitions.
///
/// Terminals only ever report key-presses (plus auto-repeat while a key is
/// held), never releases. This tracker turns that stream into presses and
/// releases: a key counts as held for as long as it keeps repeating, and is
/// released once it has been quiet for `release_delay`.
///
/// At the beginning of each frame [`UserInput::start_frame()`] should be
/// called with that frame's raw key events.
pub struct UserInput {
  release_delay: Duration,
  held: HashMap<KeyCode, Instant>,
  seen: HashSet<KeyCode>,
  events: Vec<InputEvent>,
}

impl UserInput {
  /// Creates a new `UserInput` with the given release delay.
  pub fn new(release_delay: Duration) -> Self {
    Self {
      release_delay,
      held: HashMap::new(),
      seen: HashSet::new(),
      events: Vec::new(),
    }
  }

  /// Checks whether `code` arrived this frame.
  pub fn has_key(&self, code: KeyCode) -> bool {
    self.seen.contains(&code)
  }

  /// Checks whether `code` is currently considered held.
  pub fn is_held(&self, code: KeyCode) -> bool {
    self.held.contains_key(&code)
  }

  /// Returns this frame's transitions: presses in arrival order, then
  /// releases.
  pub fn events(&self) -> &[InputEvent] {
    &self.events
  }

  /// Clears the previous frame's transitions and processes `keys`, which
  /// arrived at `now`.
  pub fn start_frame(
    &mut self,
    keys: impl IntoIterator<Item = KeyEvent>,
    now: Instant,
  ) {
    self.seen.clear();
    self.events.clear();

    for e in keys {
      let code = match e.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        k => k,
      };
      self.seen.insert(code);
      // Auto-repeat of a held key is not a new press.
      if self.held.insert(code, now).is_none() {
        self.events.push(InputEvent::Pressed(code.into()));
      }
    }

    let delay = self.release_delay;
    let events = &mut self.events;
    self.held.retain(|&code, &mut last| {
      let quiet = now.saturating_duration_since(last) >= delay;
      if quiet {
        events.push(InputEvent::Released(code.into()));
      }
      !quiet
    });
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyModifiers;

  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
      code,
      modifiers: KeyModifiers::empty(),
    }
  }

  #[test]
  fn arrows_map_to_directions() {
    assert_eq!(Key::from(KeyCode::Left), Key::Left);
    assert_eq!(Key::from(KeyCode::Down), Key::Down);
    assert_eq!(Key::from(KeyCode::Char('a')), Key::Other);
  }

  #[test]
  fn repeats_are_not_presses() {
    let t0 = Instant::now();
    let delay = Duration::from_millis(100);
    let mut input = UserInput::new(delay);

    input.start_frame(vec![key(KeyCode::Right)], t0);
    assert_eq!(input.events(), &[InputEvent::Pressed(Key::Right)]);

    input.start_frame(vec![key(KeyCode::Right)], t0 + delay / 2);
    assert!(input.events().is_empty());
    assert!(input.is_held(KeyCode::Right));
  }

  #[test]
  fn quiet_keys_are_released() {
    let t0 = Instant::now();
    let delay = Duration::from_millis(100);
    let mut input = UserInput::new(delay);

    input.start_frame(vec![key(KeyCode::Up)], t0);
    input.start_frame(vec![], t0 + delay / 2);
    assert!(input.events().is_empty());

    input.start_frame(vec![], t0 + delay);
    assert_eq!(input.events(), &[InputEvent::Released(Key::Up)]);
    assert!(!input.is_held(KeyCode::Up));
  }

  #[test]
  fn char_keys_are_case_folded() {
    let mut input = UserInput::new(Duration::from_millis(100));
    input.start_frame(vec![key(KeyCode::Char('Q'))], Instant::now());
    assert!(input.has_key(KeyCode::Char('q')));
    assert_eq!(input.events(), &[InputEvent::Pressed(Key::Other)]);
  }
}
