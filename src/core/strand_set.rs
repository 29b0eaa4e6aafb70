use std::f32::consts::TAU;

use glam::Vec3;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SEGMENT_LENGTH;
use crate::core::chain::ParticleChain;
use crate::error::{Result, StrandError};

/// Where each strand's rest length comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentLength {
    /// The same rest length for every strand.
    Fixed(f32),
    /// Per strand, the mean adjacent distance of its imported points.
    MeasuredMean,
}

impl Default for SegmentLength {
    fn default() -> Self {
        Self::Fixed(DEFAULT_SEGMENT_LENGTH)
    }
}

impl SegmentLength {
    fn validate(self) -> Result<Self> {
        match self {
            Self::Fixed(value) if !value.is_finite() || value < 0.0 => {
                Err(StrandError::InvalidSegmentLength(value))
            }
            other => Ok(other),
        }
    }

    fn resolve(self, points: &[Vec3]) -> f32 {
        match self {
            Self::Fixed(value) => value,
            Self::MeasuredMean => ParticleChain::mean_segment_length(points),
        }
    }
}

/// Every strand of one loaded hair model plus the flat buffer a renderer uploads.
///
/// The set is built once per geometry and replaced wholesale on reload; strands
/// are never added or removed afterwards.
#[derive(Debug, Clone, Default)]
pub struct StrandSet {
    chains: Vec<ParticleChain>,
    positions: Vec<f32>,
}

impl StrandSet {
    /// A set with no strands. Updating it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slices an importer's flat `x, y, z` buffer into strands of `strand_len` particles.
    pub fn from_flat_positions<R: Rng + ?Sized>(
        buffer: &[f32],
        strand_len: usize,
        segment_length: SegmentLength,
        rng: &mut R,
    ) -> Result<Self> {
        if strand_len == 0 {
            return Err(StrandError::ZeroStrandLength);
        }
        let stride = strand_len * 3;
        if buffer.len() % stride != 0 {
            return Err(StrandError::MisalignedBuffer {
                len: buffer.len(),
                stride,
            });
        }

        let strands = buffer
            .chunks_exact(stride)
            .map(|strand| {
                strand
                    .chunks_exact(3)
                    .map(|xyz| Vec3::new(xyz[0], xyz[1], xyz[2]))
                    .collect()
            })
            .collect();

        Self::from_strands(strands, segment_length, rng)
    }

    /// Builds one chain per point list. Strands may differ in particle count.
    ///
    /// Each strand draws its animator phase from `rng`, so the same seed yields
    /// the same set.
    pub fn from_strands<R: Rng + ?Sized>(
        strands: Vec<Vec<Vec3>>,
        segment_length: SegmentLength,
        rng: &mut R,
    ) -> Result<Self> {
        let segment_length = segment_length.validate()?;

        let mut chains = Vec::with_capacity(strands.len());
        for (index, points) in strands.into_iter().enumerate() {
            if points.is_empty() {
                return Err(StrandError::EmptyStrand { strand: index });
            }
            let rest_length = segment_length.resolve(&points);
            let base_angle = rng.random_range(0.0..TAU);
            chains.push(ParticleChain::new(points, rest_length, base_angle));
        }

        Ok(Self::from_chains(chains))
    }

    /// Wraps already-built chains, keeping their phases and rest lengths.
    pub fn from_chains(chains: Vec<ParticleChain>) -> Self {
        let mut set = Self {
            chains,
            positions: Vec::new(),
        };
        set.write_positions();
        debug!(
            "strand set built: {} strands, {} particles",
            set.strand_count(),
            set.particle_count()
        );
        set
    }

    pub fn strand_count(&self) -> usize {
        self.chains.len()
    }

    pub fn particle_count(&self) -> usize {
        self.chains.iter().map(ParticleChain::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn strands(&self) -> &[ParticleChain] {
        &self.chains
    }

    pub fn strand(&self, index: usize) -> Option<&ParticleChain> {
        self.chains.get(index)
    }

    pub fn strand_mut(&mut self, index: usize) -> Option<&mut ParticleChain> {
        self.chains.get_mut(index)
    }

    pub(crate) fn chains_mut(&mut self) -> &mut [ParticleChain] {
        &mut self.chains
    }

    /// Flat `x, y, z` buffer of every particle in strand order, as of the last write.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Refreshes the render buffer from the chains' current positions.
    pub fn write_positions(&mut self) {
        self.positions.clear();
        self.positions.reserve(self.particle_count() * 3);
        for chain in &self.chains {
            chain.write_flat(&mut self.positions);
        }
    }
}
