//! Fixed-rate frame timing
//!
//! The loop runs one tick per frame budget. `wait` blocks until the budget for
//! the current frame has elapsed, then starts the next one.

use std::time::{Duration, Instant};

/// Number of frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Paces the game loop and hands out simulation timestamps
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    frame_start: Instant,
    budget: Duration,
    frame_times: [Duration; FPS_WINDOW],
    frame_index: usize,
    frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            frame_start: now,
            budget: frame_budget(fps),
            frame_times: [Duration::ZERO; FPS_WINDOW],
            frame_index: 0,
            frames: 0,
        }
    }

    /// Duration of one frame
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Milliseconds since the clock was created
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Block until the current frame's budget is used up, then start the next
    pub fn wait(&mut self) {
        let spent = self.frame_start.elapsed();
        if let Some(remaining) = self.budget.checked_sub(spent) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        self.frame_times[self.frame_index] = now - self.frame_start;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames += 1;
        self.frame_start = now;
    }

    /// Average frame rate over the last `FPS_WINDOW` frames
    pub fn fps(&self) -> u32 {
        let counted = (self.frames as usize).min(FPS_WINDOW);
        if counted == 0 {
            return 0;
        }
        let total: Duration = self.frame_times[..counted].iter().sum();
        if total.is_zero() {
            return 0;
        }
        (counted as f64 / total.as_secs_f64()).round() as u32
    }
}

/// Frame duration for a target rate; zero disables pacing
pub fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}
