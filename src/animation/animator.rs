use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animation::modes::{AnimationMode, ParticleEffect, WaveSample};
use crate::config::{
    ANIMATION_TIME_STEP, DEFAULT_WAVE_HEIGHT, DEFAULT_WAVE_SPEED, PHASE_PER_PARTICLE,
};
use crate::core::chain::ParticleChain;

/// Tunables of the procedural animator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub wave_speed: f32,
    pub wave_height: f32,
    /// Clock increment per animated call, independent of wall-clock time.
    pub time_step: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            wave_speed: DEFAULT_WAVE_SPEED,
            wave_height: DEFAULT_WAVE_HEIGHT,
            time_step: ANIMATION_TIME_STEP,
        }
    }
}

/// Closed-form motion used while physics is disabled.
///
/// Owns the animation clock and the selected mode. The clock only moves when
/// [`ProceduralAnimator::animate`] is called, so playback speed follows the call rate.
#[derive(Debug, Clone)]
pub struct ProceduralAnimator {
    settings: AnimationSettings,
    mode: Option<AnimationMode>,
    elapsed: f32,
}

impl Default for ProceduralAnimator {
    fn default() -> Self {
        Self::new(AnimationSettings::default())
    }
}

impl ProceduralAnimator {
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            settings,
            mode: Some(AnimationMode::default()),
            elapsed: 0.0,
        }
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    pub fn mode(&self) -> Option<AnimationMode> {
        self.mode
    }

    /// Takes effect on the next call to [`animate`](Self::animate); no blending.
    /// `None` freezes every strand where it is.
    pub fn set_mode(&mut self, mode: Option<AnimationMode>) {
        if self.mode != mode {
            debug!(
                "animation mode: {} -> {}",
                self.mode.map_or("none", |m| m.tag()),
                mode.map_or("none", |m| m.tag())
            );
        }
        self.mode = mode;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// `elapsed * wave_speed + index * 0.2 + base_angle`.
    pub fn phase(&self, index: usize, base_angle: f32) -> f32 {
        self.elapsed * self.settings.wave_speed + index as f32 * PHASE_PER_PARTICLE + base_angle
    }

    /// Writes one animated frame into every chain, then advances the clock.
    pub fn animate<R: Rng + ?Sized>(&mut self, chains: &mut [ParticleChain], rng: &mut R) {
        if let Some(mode) = self.mode {
            for chain in chains.iter_mut() {
                self.animate_chain(&mode, chain, rng);
            }
        }
        self.elapsed += self.settings.time_step;
    }

    /// Applies `mode` to every non-root particle of `chain` at the current clock.
    ///
    /// The previous-frame snapshot follows the written position so that
    /// re-enabling physics starts from rest.
    pub fn animate_chain<R: Rng + ?Sized>(
        &self,
        mode: &AnimationMode,
        chain: &mut ParticleChain,
        rng: &mut R,
    ) {
        let count = chain.len();
        let base_angle = chain.base_angle();
        let ParticleChain {
            current,
            previous,
            rest,
            ..
        } = chain;

        for index in 1..count {
            let sample = WaveSample {
                phase: self.phase(index, base_angle),
                index,
                count,
                height: self.settings.wave_height,
            };
            let pos = &mut current[index];
            let base = rest[index];

            match mode.effect(&sample, rng) {
                ParticleEffect::Offset(offset) => *pos = base + offset,
                ParticleEffect::ScaleXZ(scale) => {
                    pos.x *= scale;
                    pos.z *= scale;
                }
                ParticleEffect::OffsetAndLift { offset, lift } => {
                    pos.x = base.x + offset.x;
                    pos.z = base.z + offset.z;
                    pos.y += lift;
                }
            }
            previous[index] = *pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::{rngs::StdRng, SeedableRng};

    fn strand(count: usize, base_angle: f32) -> ParticleChain {
        let points = (0..count)
            .map(|i| Vec3::new(0.1, -(i as f32) * 0.02, 0.1))
            .collect();
        ParticleChain::new(points, 0.02, base_angle)
    }

    #[test]
    fn first_frame_uses_zero_elapsed() {
        let mut animator = ProceduralAnimator::default();
        let mut chains = vec![strand(20, 0.0)];
        animator.animate(&mut chains, &mut StdRng::seed_from_u64(0));

        let rest = chains[0].rest_positions()[5];
        let pos = chains[0].positions()[5];
        let expected = 1.0_f32.sin() * 0.02 * 0.25;
        assert!((pos.x - rest.x - expected).abs() < 1e-6);
        assert!((animator.elapsed() - ANIMATION_TIME_STEP).abs() < 1e-9);
    }

    #[test]
    fn root_is_never_written() {
        let mut animator = ProceduralAnimator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut chains = vec![strand(6, 1.2)];
        for tag in AnimationMode::TAGS {
            animator.set_mode(AnimationMode::from_tag(tag));
            for _ in 0..10 {
                animator.animate(&mut chains, &mut rng);
            }
            assert_eq!(chains[0].root(), Some(Vec3::new(0.1, 0.0, 0.1)), "mode {tag}");
        }
    }

    #[test]
    fn no_mode_freezes_positions_but_advances_clock() {
        let mut animator = ProceduralAnimator::default();
        animator.set_mode(None);
        let mut chains = vec![strand(4, 0.3)];
        let before = chains[0].positions().to_vec();

        animator.animate(&mut chains, &mut StdRng::seed_from_u64(0));
        assert_eq!(chains[0].positions(), before.as_slice());
        assert!(animator.elapsed() > 0.0);
    }

    #[test]
    fn pulse_compounds_across_frames() {
        let mut animator = ProceduralAnimator::default();
        animator.set_mode(AnimationMode::from_tag("pulse"));
        let mut chains = vec![strand(3, 0.0)];
        let mut rng = StdRng::seed_from_u64(0);

        animator.animate(&mut chains, &mut rng);
        // First frame: elapsed 0, so phase = 1 * 0.2.
        let scale = 1.0 + (0.2_f32 * 3.0).sin() * 0.1;
        let first = chains[0].positions()[1];
        assert!((first.x - 0.1 * scale).abs() < 1e-6);
        assert_eq!(first.y, -0.02);

        let next_scale = 1.0 + (animator.phase(1, 0.0) * 3.0).sin() * 0.1;
        animator.animate(&mut chains, &mut rng);
        let second = chains[0].positions()[1];
        assert!((second.x - 0.1 * scale * next_scale).abs() < 1e-6);
    }

    #[test]
    fn previous_tracks_animated_position() {
        let mut animator = ProceduralAnimator::default();
        let mut chains = vec![strand(5, 0.7)];
        animator.animate(&mut chains, &mut StdRng::seed_from_u64(0));
        assert_eq!(chains[0].positions(), chains[0].previous_positions());
    }
}
