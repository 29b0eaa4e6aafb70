use glam::Vec3;

/// One hair strand stored as structure-of-arrays.
///
/// `current` and `previous` are index-aligned; particle `0` is the root. The
/// particle count and the rest length are fixed once the chain is built.
#[derive(Debug, Clone)]
pub struct ParticleChain {
    pub(crate) current: Vec<Vec3>,
    pub(crate) previous: Vec<Vec3>,
    pub(crate) rest: Vec<Vec3>,
    rest_length: f32,
    base_angle: f32,
}

impl ParticleChain {
    /// Builds a chain at rest: `previous` starts equal to `current`.
    pub fn new(points: Vec<Vec3>, rest_length: f32, base_angle: f32) -> Self {
        Self {
            previous: points.clone(),
            rest: points.clone(),
            current: points,
            rest_length,
            base_angle,
        }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Per-strand phase constant consumed by the procedural animator.
    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn previous_positions(&self) -> &[Vec3] {
        &self.previous
    }

    /// Construction-time positions, the base for the pure animation modes.
    pub fn rest_positions(&self) -> &[Vec3] {
        &self.rest
    }

    pub fn root(&self) -> Option<Vec3> {
        self.current.first().copied()
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.current.get(index).copied()
    }

    /// Overwrites the current position of a particle. Used by hosts and tests to
    /// perturb the strand; the previous-frame snapshot is left as is.
    pub fn set_position(&mut self, index: usize, position: Vec3) {
        if let Some(slot) = self.current.get_mut(index) {
            *slot = position;
        }
    }

    /// Distance between particle `index - 1` and `index`.
    pub fn segment_distance(&self, index: usize) -> Option<f32> {
        if index == 0 || index >= self.current.len() {
            return None;
        }
        Some(self.current[index].distance(self.current[index - 1]))
    }

    /// Mean adjacent-particle distance of the given points, zero for fewer than two.
    pub fn mean_segment_length(points: &[Vec3]) -> f32 {
        if points.len() < 2 {
            return 0.0;
        }
        let total: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
        total / (points.len() - 1) as f32
    }

    /// Appends this chain's current positions to a flat `x, y, z` buffer.
    pub(crate) fn write_flat(&self, out: &mut Vec<f32>) {
        for p in &self.current {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
    }
}
