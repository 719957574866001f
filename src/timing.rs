//! Frame pacing.

use std::thread;
use std::time::Duration;
use std::time::Instant;

/// A timer for maintaining a stable frame rate.
pub struct FrameTimer {
  frame_time: Duration,
  frame_count: u64,
  last_frame: Instant,
}

impl FrameTimer {
  /// Creates a new `FrameTimer` aiming for `target_fps` frames per second.
  ///
  /// A target of zero is treated as one.
  pub fn new(target_fps: u32) -> FrameTimer {
    FrameTimer {
      frame_time: Duration::from_secs(1) / target_fps.max(1),
      frame_count: 0,
      last_frame: Instant::now(),
    }
  }

  /// Returns the number of frames timed so far.
  pub fn frame_count(&self) -> u64 {
    self.frame_count
  }

  /// Returns the time budget for a single frame.
  pub fn frame_time(&self) -> Duration {
    self.frame_time
  }

  /// Returns how much of the current frame's budget is left, if any.
  pub fn remaining(&self) -> Option<Duration> {
    self.frame_time.checked_sub(self.last_frame.elapsed())
  }

  /// Ends a frame, blocking until the frame's time budget is used up.
  ///
  /// This function should be called once per frame.
  pub fn end_frame(&mut self) {
    if let Some(time_left) = self.remaining() {
      thread::sleep(time_left);
    }
    self.last_frame = Instant::now();
    self.frame_count += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn frame_time_follows_target() {
    assert_eq!(FrameTimer::new(50).frame_time(), Duration::from_millis(20));
    assert_eq!(FrameTimer::new(0).frame_time(), Duration::from_secs(1));
  }

  #[test]
  fn end_frame_waits_out_the_budget() {
    let mut timer = FrameTimer::new(100);
    let start = Instant::now();
    timer.end_frame();
    assert!(start.elapsed() >= Duration::from_millis(9));
    assert_eq!(timer.frame_count(), 1);
  }
}
