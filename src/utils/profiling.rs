use log::debug;
use std::time::{Duration, Instant};

/// Timings and counts of the last `update()` call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameProfiler {
    pub integrate_time: Duration,
    pub constraint_time: Duration,
    pub animate_time: Duration,
    pub buffer_write_time: Duration,
    pub total_frame_time: Duration,

    pub strand_count: usize,
    pub particle_count: usize,
    pub physics_frame: bool,
}

impl FrameProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn share(part: Duration, total_us: f32) -> f32 {
        part.as_micros() as f32 / total_us * 100.0
    }

    /// Logs a breakdown of the frame at debug level.
    pub fn report(&self) {
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        debug!(
            "strand frame ({}): {} strands, {} particles, {:.3} ms total",
            if self.physics_frame { "physics" } else { "animated" },
            self.strand_count,
            self.particle_count,
            self.total_frame_time.as_secs_f32() * 1000.0
        );
        debug!(
            "  integrate {:.1}% | constraints {:.1}% | animate {:.1}% | buffer {:.1}%",
            Self::share(self.integrate_time, total_us),
            Self::share(self.constraint_time, total_us),
            Self::share(self.animate_time, total_us),
            Self::share(self.buffer_write_time, total_us),
        );
    }
}

/// Adds the time until drop to `output`.
pub struct PhaseTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
