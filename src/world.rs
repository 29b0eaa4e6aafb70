use std::time::Instant;

use glam::Vec3;
use log::{debug, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    animation::{AnimationMode, AnimationSettings, ProceduralAnimator},
    config::FRAME_BUDGET_MS,
    core::{ParameterStore, ParticleChain, PhysicsParams, SegmentLength, StrandSet},
    dynamics::{ConstraintSolver, Integrator},
    error::Result,
    utils::{
        logging::{warn_if_frame_budget_exceeded, ScopedTimer},
        profiling::{FrameProfiler, PhaseTimer},
    },
};

/// Per-frame driver for one hair model.
///
/// Call [`update`](Self::update) once per rendered frame, then upload
/// [`positions`](Self::positions). With physics enabled each strand is
/// integrated, relaxed, and re-pinned; otherwise the procedural animator moves
/// it. Settings changes land on the next `update()`.
pub struct HairSimulator {
    strands: StrandSet,
    params: ParameterStore,
    integrator: Integrator,
    solver: ConstraintSolver,
    animator: ProceduralAnimator,
    rng: StdRng,
    physics_enabled: bool,
    parallel_enabled: bool,
    profiler: FrameProfiler,
}

impl HairSimulator {
    /// An empty simulator. `seed` drives strand phases and random animation modes.
    pub fn new(seed: u64) -> Self {
        Self {
            strands: StrandSet::empty(),
            params: ParameterStore::default(),
            integrator: Integrator::new(),
            solver: ConstraintSolver::default(),
            animator: ProceduralAnimator::default(),
            rng: StdRng::seed_from_u64(seed),
            physics_enabled: false,
            parallel_enabled: false,
            profiler: FrameProfiler::default(),
        }
    }

    pub fn with_strands(strands: StrandSet, seed: u64) -> Self {
        let mut sim = Self::new(seed);
        sim.load(strands);
        sim
    }

    /// Replaces the whole strand set.
    pub fn load(&mut self, strands: StrandSet) {
        debug!(
            "loading strand set: {} strands, {} particles (replacing {})",
            strands.strand_count(),
            strands.particle_count(),
            self.strands.strand_count()
        );
        self.strands = strands;
    }

    /// Builds and loads a strand set from an importer's flat position buffer,
    /// drawing strand phases from this simulator's generator.
    pub fn load_flat_positions(
        &mut self,
        buffer: &[f32],
        strand_len: usize,
        segment_length: SegmentLength,
    ) -> Result<()> {
        let set = StrandSet::from_flat_positions(buffer, strand_len, segment_length, &mut self.rng)?;
        self.load(set);
        Ok(())
    }

    /// Same as [`load_flat_positions`](Self::load_flat_positions) for per-strand point lists.
    pub fn load_strands(&mut self, strands: Vec<Vec<Vec3>>, segment_length: SegmentLength) -> Result<()> {
        let set = StrandSet::from_strands(strands, segment_length, &mut self.rng)?;
        self.load(set);
        Ok(())
    }

    /// Drops every strand; `update()` becomes a no-op until the next load.
    pub fn clear(&mut self) {
        debug!("clearing strand set");
        self.strands = StrandSet::empty();
    }

    /// Advances one frame and refreshes the position buffer.
    pub fn update(&mut self) {
        if self.strands.is_empty() {
            return;
        }

        let frame_start = Instant::now();
        let _timer = ScopedTimer::new("strands::update");

        self.profiler.reset();
        self.profiler.strand_count = self.strands.strand_count();
        self.profiler.particle_count = self.strands.particle_count();
        self.profiler.physics_frame = self.physics_enabled;

        if self.physics_enabled {
            let params = self.params.snapshot();
            self.step_physics(&params);
        } else {
            let _timer = ScopedTimer::new("strands::animate");
            let _phase = PhaseTimer::new(&mut self.profiler.animate_time);
            self.animator
                .animate(self.strands.chains_mut(), &mut self.rng);
        }

        {
            let _phase = PhaseTimer::new(&mut self.profiler.buffer_write_time);
            self.strands.write_positions();
        }

        self.profiler.total_frame_time = frame_start.elapsed();
        warn_if_frame_budget_exceeded(self.profiler.total_frame_time, FRAME_BUDGET_MS);
    }

    fn step_physics(&mut self, params: &PhysicsParams) {
        #[cfg(feature = "parallel")]
        {
            if self.parallel_enabled {
                let _timer = ScopedTimer::new("strands::physics::parallel");
                let _phase = PhaseTimer::new(&mut self.profiler.integrate_time);
                let stepper =
                    crate::dynamics::ParallelStrandStepper::new(self.integrator, self.solver.clone());
                stepper.step(self.strands.chains_mut(), params);
                return;
            }
        }

        {
            let _timer = ScopedTimer::new("strands::integrate");
            let _phase = PhaseTimer::new(&mut self.profiler.integrate_time);
            self.integrator.step(self.strands.chains_mut(), params);
        }
        {
            let _timer = ScopedTimer::new("strands::constraints");
            let _phase = PhaseTimer::new(&mut self.profiler.constraint_time);
            self.solver.step(self.strands.chains_mut(), params.stiffness);
        }
    }

    /// Replaces gravity, wind, stiffness and damping by value.
    pub fn set_physics_params(&self, gravity: Vec3, wind: Vec3, stiffness: f32, damping: f32) {
        self.params.set_components(gravity, wind, stiffness, damping);
    }

    pub fn physics_params(&self) -> PhysicsParams {
        self.params.snapshot()
    }

    /// Handle to the parameter slot for writers outside the frame loop.
    pub fn parameter_store(&self) -> ParameterStore {
        self.params.handle()
    }

    pub fn set_physics_enabled(&mut self, enabled: bool) {
        if self.physics_enabled != enabled {
            debug!("physics {}", if enabled { "enabled" } else { "disabled" });
        }
        self.physics_enabled = enabled;
    }

    pub fn physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    pub fn set_animation_type(&mut self, mode: AnimationMode) {
        self.animator.set_mode(Some(mode));
    }

    /// Selects a mode by tag. Unknown tags stop all animated motion.
    pub fn set_animation_tag(&mut self, tag: &str) {
        let mode = AnimationMode::from_tag(tag);
        if mode.is_none() {
            warn!("Unknown animation mode '{tag}', strands will hold still");
        }
        self.animator.set_mode(mode);
    }

    pub fn animation_mode(&self) -> Option<AnimationMode> {
        self.animator.mode()
    }

    pub fn set_wave(&mut self, wave_speed: f32, wave_height: f32) {
        self.animator.set_settings(AnimationSettings {
            wave_speed,
            wave_height,
            ..*self.animator.settings()
        });
    }

    pub fn animator(&self) -> &ProceduralAnimator {
        &self.animator
    }

    /// Enables Rayon stepping of the physics path. Ignored without the `parallel` feature.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled && cfg!(feature = "parallel");
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    /// Flat `x, y, z` render buffer as of the last `update()` or load.
    pub fn positions(&self) -> &[f32] {
        self.strands.positions()
    }

    pub fn strands(&self) -> &[ParticleChain] {
        self.strands.strands()
    }

    pub fn strand_set(&self) -> &StrandSet {
        &self.strands
    }

    pub fn strand_set_mut(&mut self) -> &mut StrandSet {
        &mut self.strands
    }

    /// Timings of the last `update()`. Call [`FrameProfiler::report`] to log them.
    pub fn profiler(&self) -> &FrameProfiler {
        &self.profiler
    }
}

impl Default for HairSimulator {
    fn default() -> Self {
        Self::new(0)
    }
}
