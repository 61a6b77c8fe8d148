//! Fixed-timestep frame loop.
//!
//! Frame time is accumulated and drained in fixed simulation steps, so the
//! flight model sees the same `dt` regardless of how frames arrive.

use glider_config::SimConfig;
use tracing::warn;

/// Fixed-timestep accumulator.
#[derive(Debug, Clone)]
pub struct GameLoop {
    fixed_dt: f64,
    max_frame_time: f64,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// Loop stepping at `fixed_dt`, clamping frames longer than `max_frame_time`.
    pub fn new(fixed_dt: f64, max_frame_time: f64) -> Self {
        Self {
            fixed_dt,
            max_frame_time,
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Loop configured from the `sim` section.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.fixed_dt, config.max_frame_time)
    }

    /// Feed one frame of `frame_time` seconds.
    ///
    /// `update_fn(fixed_dt, total_sim_time)` runs zero or more times. Returns
    /// the interpolation alpha in `[0, 1)` for whatever renders the frame.
    pub fn step_frame(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64, f64)) -> f64 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > self.max_frame_time {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                self.max_frame_time * 1000.0
            );
            frame_time = self.max_frame_time;
        }

        self.accumulator += frame_time;

        while self.accumulator >= self.fixed_dt {
            update_fn(self.fixed_dt, self.total_sim_time);
            self.total_sim_time += self.fixed_dt;
            self.accumulator -= self.fixed_dt;
            self.update_count += 1;
        }

        self.frame_count += 1;
        self.alpha()
    }

    /// Interpolation alpha left over from the last frame.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / self.fixed_dt
        } else {
            0.0
        }
    }

    /// Frames fed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulation steps run so far.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Simulated seconds so far.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}
