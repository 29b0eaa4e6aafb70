//! Utility helpers: trace timers, frame-budget warnings, and per-frame profiling.

pub mod logging;
pub mod profiling;

pub use logging::{warn_if_frame_budget_exceeded, ScopedTimer};
pub use profiling::{FrameProfiler, PhaseTimer};
