//! Strand dynamics: Verlet integration, distance constraints, and the parallel stepper.

pub mod integrator;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod solver;

pub use integrator::Integrator;
#[cfg(feature = "parallel")]
pub use parallel::ParallelStrandStepper;
pub use solver::ConstraintSolver;
