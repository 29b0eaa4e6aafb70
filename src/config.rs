//! Global configuration constants for the strand motion engine.

/// Default gravity applied per frame to every non-root particle (Y-up).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -0.00098, 0.0];

/// Default wind displacement applied per frame to every non-root particle.
pub const DEFAULT_WIND: [f32; 3] = [0.002, 0.0, 0.0];

/// Default distance-constraint stiffness.
pub const DEFAULT_STIFFNESS: f32 = 1.0;

/// Default damping. Stored with the parameters but not consumed by the integrator.
pub const DEFAULT_DAMPING: f32 = 0.95;

/// Default rest length between adjacent particles.
pub const DEFAULT_SEGMENT_LENGTH: f32 = 0.02;

/// Default number of particles per strand when slicing a flat position buffer.
pub const DEFAULT_STRAND_LENGTH: usize = 20;

/// Number of distance-constraint relaxation passes performed per frame.
pub const CONSTRAINT_ITERATIONS: u32 = 3;

/// Adjacent particles closer than this are skipped by the constraint pass.
pub const DEGENERATE_DISTANCE_EPSILON: f32 = 1e-6;

/// Fixed increment added to the animation clock on every animated `update()`.
pub const ANIMATION_TIME_STEP: f32 = 1.0 / 60.0;

/// Default phase velocity of the procedural animator.
pub const DEFAULT_WAVE_SPEED: f32 = 2.0;

/// Default amplitude of the procedural animator.
pub const DEFAULT_WAVE_HEIGHT: f32 = 0.02;

/// Phase shift between consecutive particles of a strand.
pub const PHASE_PER_PARTICLE: f32 = 0.2;

/// Frame budget used when warning about slow updates (in milliseconds).
pub const FRAME_BUDGET_MS: f32 = 16.0;
