use std::thread;
use std::time::{Duration, Instant};

use game_core::Clock;

use crate::error::ClientError;

/// Blocks the calling thread for real
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepClock;

impl Clock for SleepClock {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Caps the frame loop at a fixed rate
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    started: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Result<Self, ClientError> {
        if fps == 0 {
            return Err(ClientError::InvalidFps(fps));
        }
        Ok(Self {
            frame: Duration::from_secs(1) / fps,
            started: Instant::now(),
        })
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    /// Sleep out the rest of the frame and start the next one
    pub fn wait_for_next_frame(&mut self, clock: &mut dyn Clock) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            clock.wait(remaining);
        }
        self.started = Instant::now();
    }
}
