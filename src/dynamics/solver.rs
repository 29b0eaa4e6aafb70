use crate::config::{CONSTRAINT_ITERATIONS, DEGENERATE_DISTANCE_EPSILON};
use crate::core::chain::ParticleChain;

/// Iterative distance-constraint relaxation with a root pin.
///
/// Each pass walks adjacent pairs `(j - 1, j)` in index order, moving both
/// ends halfway toward the rest length scaled by stiffness. The root never
/// receives a direct correction, and after the last pass it is reset to its
/// previous-frame position.
#[derive(Debug, Clone)]
pub struct ConstraintSolver {
    pub iterations: u32,
    pub epsilon: f32,
}

impl Default for ConstraintSolver {
    fn default() -> Self {
        Self::new(CONSTRAINT_ITERATIONS)
    }
}

impl ConstraintSolver {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            epsilon: DEGENERATE_DISTANCE_EPSILON,
        }
    }

    /// Runs every relaxation pass, then re-pins the root. Must follow integration.
    pub fn solve(&self, chain: &mut ParticleChain, stiffness: f32) {
        for _ in 0..self.iterations {
            self.relax(chain, stiffness);
        }
        Self::repin_root(chain);
    }

    /// A single relaxation pass over every adjacent pair.
    pub fn relax(&self, chain: &mut ParticleChain, stiffness: f32) {
        let rest_length = chain.rest_length();
        let points = &mut chain.current;

        for j in 1..points.len() {
            let delta = points[j] - points[j - 1];
            let dist = delta.length();
            // Coincident particles have no direction to correct along.
            if dist < self.epsilon {
                continue;
            }

            let diff = (dist - rest_length) / dist;
            let correction = delta * (0.5 * stiffness * diff);

            if j - 1 != 0 {
                points[j - 1] += correction;
            }
            points[j] -= correction;
        }
    }

    /// Resets the root's current position to its previous-frame snapshot.
    pub fn repin_root(chain: &mut ParticleChain) {
        if let (Some(pos), Some(prev)) = (chain.current.first_mut(), chain.previous.first()) {
            *pos = *prev;
        }
    }

    pub fn step(&self, chains: &mut [ParticleChain], stiffness: f32) {
        for chain in chains.iter_mut() {
            self.solve(chain, stiffness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn stretched_pair_moves_only_the_tip() {
        let mut chain = ParticleChain::new(vec![Vec3::ZERO, Vec3::new(0.0, -0.03, 0.0)], 0.02, 0.0);
        ConstraintSolver::default().relax(&mut chain, 1.0);

        assert_eq!(chain.position(0), Some(Vec3::ZERO));
        // Half of the 0.01 error is removed per pass.
        let tip = chain.position(1).unwrap_or_default();
        assert!((tip.y + 0.025).abs() < 1e-6, "tip = {tip}");
    }

    #[test]
    fn interior_pairs_share_the_correction() {
        let mut chain = ParticleChain::new(
            vec![Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -3.0, 0.0)],
            1.0,
            0.0,
        );
        ConstraintSolver::default().relax(&mut chain, 1.0);

        // Pair (1, 2) is 2.0 apart: each end moves 0.5 toward the other.
        assert_eq!(chain.position(1), Some(Vec3::new(0.0, -1.5, 0.0)));
        assert_eq!(chain.position(2), Some(Vec3::new(0.0, -2.5, 0.0)));
    }

    #[test]
    fn zero_stiffness_leaves_chain_untouched() {
        let points = vec![Vec3::ZERO, Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.0, -2.0, 0.0)];
        let mut chain = ParticleChain::new(points.clone(), 0.02, 0.0);
        ConstraintSolver::default().solve(&mut chain, 0.0);
        assert_eq!(chain.positions(), points.as_slice());
    }

    #[test]
    fn repin_restores_previous_root() {
        let mut chain = ParticleChain::new(vec![Vec3::ONE, Vec3::ZERO], 1.0, 0.0);
        chain.set_position(0, Vec3::new(9.0, 9.0, 9.0));
        ConstraintSolver::repin_root(&mut chain);
        assert_eq!(chain.root(), Some(Vec3::ONE));
    }

    #[test]
    fn empty_and_single_particle_chains_are_safe() {
        let solver = ConstraintSolver::default();
        let mut empty = ParticleChain::new(Vec::new(), 0.02, 0.0);
        solver.solve(&mut empty, 1.0);
        assert!(empty.is_empty());

        let mut single = ParticleChain::new(vec![Vec3::Y], 0.02, 0.0);
        solver.solve(&mut single, 1.0);
        assert_eq!(single.root(), Some(Vec3::Y));
    }
}
