//! Frame pacing.

use std::thread;
use std::time::Duration;
use std::time::Instant;

/// A timer for maintaining a stable FPS.
pub struct FrameTimer {
  target_fps: u32,
  frame_count: u64,
  last_frame: Instant,

  fps: f64,
  last_measurement: Instant,
  last_measurement_frame: u64,
}

impl FrameTimer {
  /// Creates a new `FrameTimer` aiming for `target_fps` frames per second.
  ///
  /// A target of zero is treated as one.
  pub fn new(target_fps: u32) -> FrameTimer {
    FrameTimer {
      target_fps: target_fps.max(1),
      frame_count: 0,
      last_frame: Instant::now(),
      fps: 0.0,
      last_measurement: Instant::now(),
      last_measurement_frame: 0,
    }
  }

  /// Returns the number of frames timed so far.
  pub fn frame_count(&self) -> u64 {
    self.frame_count
  }

  /// Returns the length of a single frame at the target FPS.
  pub fn frame_time(&self) -> Duration {
    Duration::from_secs(1) / self.target_fps
  }

  /// Measures the frames per second at the given measurement interval.
  ///
  /// This function should be called once per frame; once the given interval
  /// has elapsed, the FPS will be computed as the average frame time since the
  /// measurement occured. This function caches the framerate between
  /// measurements.
  pub fn measure_fps(&mut self, measurement_interval: Duration) -> f64 {
    let elapsed = self.last_measurement.elapsed();
    if elapsed < measurement_interval || elapsed.is_zero() {
      return self.fps;
    }

    let frames = (self.frame_count - self.last_measurement_frame) as f64;
    self.fps = frames / elapsed.as_secs_f64();
    self.last_measurement = Instant::now();
    self.last_measurement_frame = self.frame_count;

    self.fps
  }

  /// Ends a frame, blocking until the minimum frame length for the target FPS
  /// is reached.
  ///
  /// This function should be called once per frame.
  pub fn end_frame(&mut self) {
    let frame_time = self.frame_time();
    if let Some(time_left) = frame_time.checked_sub(self.last_frame.elapsed()) {
      thread::sleep(time_left);
    }
    self.last_frame = Instant::now();
    self.frame_count += 1;
  }
}
