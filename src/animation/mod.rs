//! Procedural animation used in place of physics.

pub mod animator;
pub mod modes;

pub use animator::{AnimationSettings, ProceduralAnimator};
pub use modes::{AnimationMode, ParticleEffect, WaveSample};
