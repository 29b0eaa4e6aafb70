use rayon::prelude::*;

use crate::core::{chain::ParticleChain, params::PhysicsParams};
use crate::dynamics::{integrator::Integrator, solver::ConstraintSolver};

/// Steps strands on the Rayon pool.
///
/// Strands share no mutable state, so each task runs the full
/// integrate → relax → re-pin sequence on its own chain and the result matches
/// the sequential path exactly.
#[derive(Debug, Clone, Default)]
pub struct ParallelStrandStepper {
    pub integrator: Integrator,
    pub solver: ConstraintSolver,
}

impl ParallelStrandStepper {
    pub fn new(integrator: Integrator, solver: ConstraintSolver) -> Self {
        Self { integrator, solver }
    }

    pub fn step(&self, chains: &mut [ParticleChain], params: &PhysicsParams) {
        chains.par_iter_mut().for_each(|chain| {
            self.integrator.integrate(chain, params);
            self.solver.solve(chain, params.stiffness);
        });
    }
}
