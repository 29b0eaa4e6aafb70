use crate::core::{chain::ParticleChain, params::PhysicsParams};

/// Verlet integrator stepping strands forward by one frame.
///
/// Velocity is implicit (`current - previous`); gravity and wind are added as
/// per-frame displacements. The root is skipped, the solver re-pins it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn new() -> Self {
        Self
    }

    /// Advances every non-root particle of `chain` once.
    ///
    /// Not idempotent: calling twice in a frame applies the forces twice.
    pub fn integrate(&self, chain: &mut ParticleChain, params: &PhysicsParams) {
        let forces = params.gravity + params.wind;
        let ParticleChain {
            current, previous, ..
        } = chain;

        for (pos, prev) in current.iter_mut().zip(previous.iter_mut()).skip(1) {
            let velocity = *pos - *prev;
            *prev = *pos;
            *pos += velocity;
            *pos += forces;
        }
    }

    pub fn step(&self, chains: &mut [ParticleChain], params: &PhysicsParams) {
        for chain in chains.iter_mut() {
            self.integrate(chain, params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn params(gravity: Vec3, wind: Vec3) -> PhysicsParams {
        PhysicsParams::new(gravity, wind, 1.0, 0.95)
    }

    #[test]
    fn root_is_not_integrated() {
        let mut chain = ParticleChain::new(vec![Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0)], 1.0, 0.0);
        Integrator::new().integrate(&mut chain, &params(Vec3::new(0.0, -1.0, 0.0), Vec3::X));
        assert_eq!(chain.position(0), Some(Vec3::ZERO));
        assert_eq!(chain.position(1), Some(Vec3::new(1.0, -2.0, 0.0)));
    }

    #[test]
    fn implicit_velocity_carries_motion() {
        let mut chain = ParticleChain::new(vec![Vec3::ZERO, Vec3::ZERO], 0.0, 0.0);
        chain.set_position(1, Vec3::new(0.5, 0.0, 0.0));
        Integrator::new().integrate(&mut chain, &params(Vec3::ZERO, Vec3::ZERO));

        assert_eq!(chain.previous_positions()[1], Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(chain.position(1), Some(Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn damping_is_not_applied() {
        let start = vec![Vec3::ZERO, Vec3::ZERO];
        let mut damped = ParticleChain::new(start.clone(), 0.0, 0.0);
        let mut undamped = ParticleChain::new(start, 0.0, 0.0);
        damped.set_position(1, Vec3::X);
        undamped.set_position(1, Vec3::X);

        let integrator = Integrator::new();
        integrator.integrate(&mut damped, &PhysicsParams::new(Vec3::ZERO, Vec3::ZERO, 1.0, 0.1));
        integrator.integrate(&mut undamped, &PhysicsParams::new(Vec3::ZERO, Vec3::ZERO, 1.0, 1.0));
        assert_eq!(damped.positions(), undamped.positions());
    }
}
