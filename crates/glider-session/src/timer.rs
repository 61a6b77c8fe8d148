//! Frame-driven one-shot countdown.

/// Countdown that fires once after a delay, advanced by the frame loop.
///
/// Scheduling again replaces the pending countdown; cancelling drops it
/// without firing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneShotTimer {
    remaining: Option<f32>,
}

impl OneShotTimer {
    /// An idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown.
    pub fn schedule(&mut self, delay_secs: f32) {
        self.remaining = Some(delay_secs.max(0.0));
    }

    /// Advance by `dt` seconds. Returns `true` on the tick the countdown
    /// reaches zero and never again until rescheduled.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }

    /// Drop a pending countdown. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    /// True while counting down.
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left, if pending.
    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }
}
