//! Strand Motion – secondary motion for hair strands.
//!
//! Each strand is a chain of particles advanced once per frame by Verlet
//! integration, held at a fixed segment length by iterative distance
//! constraints, and pinned at its root. When physics is off, a bank of
//! procedural waveform modes moves the strands instead. The crate only
//! produces positions; loading geometry and uploading buffers are left to the
//! host.

pub mod animation;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec3;

pub use animation::{AnimationMode, AnimationSettings, ParticleEffect, ProceduralAnimator, WaveSample};
pub use crate::core::{ParameterStore, ParticleChain, PhysicsParams, SegmentLength, StrandSet};
#[cfg(feature = "parallel")]
pub use dynamics::ParallelStrandStepper;
pub use dynamics::{ConstraintSolver, Integrator};
pub use error::{Result, StrandError};
pub use utils::profiling::FrameProfiler;
pub use world::HairSimulator;
