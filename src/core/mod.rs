//! Core data: particle chains, the strand set that owns them, and the shared parameters.

pub mod chain;
pub mod params;
pub mod strand_set;

pub use chain::ParticleChain;
pub use params::{ParameterStore, PhysicsParams};
pub use strand_set::{SegmentLength, StrandSet};
