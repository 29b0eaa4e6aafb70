use log::{log_enabled, trace, warn, Level};
use std::time::{Duration, Instant};

/// Trace-level timer around one phase of a frame. Silent unless tracing is on.
pub struct ScopedTimer<'a> {
    phase: &'a str,
    start: Option<Instant>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(phase: &'a str) -> Self {
        let start = log_enabled!(Level::Trace).then(|| {
            trace!("begin {phase}");
            Instant::now()
        });
        Self { phase, start }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            trace!("end {} ({} µs)", self.phase, start.elapsed().as_micros());
        }
    }
}

/// Warns when a frame update ran longer than `budget_ms`. Returns whether it did.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let spent_ms = duration.as_secs_f32() * 1000.0;
    if spent_ms > budget_ms {
        warn!("strand update exceeded frame budget: {spent_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_check_compares_milliseconds() {
        assert!(warn_if_frame_budget_exceeded(Duration::from_millis(20), 16.0));
        assert!(!warn_if_frame_budget_exceeded(Duration::from_millis(5), 16.0));
    }
}
