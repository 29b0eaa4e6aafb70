use std::fmt;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inputs shared by every mode for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// `elapsed * wave_speed + index * 0.2 + base_angle`.
    pub phase: f32,
    /// Particle index along the strand; never `0`.
    pub index: usize,
    /// Particle count of the strand.
    pub count: usize,
    /// Animator amplitude (`wave_height`).
    pub height: f32,
}

impl WaveSample {
    /// `index / count`: 0 at the root, approaching 1 at the tip.
    pub fn along(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.index as f32 / self.count as f32
    }
}

/// How a mode writes a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleEffect {
    /// `current = rest + offset`.
    Offset(Vec3),
    /// `current.x *= s; current.z *= s`. Accumulates across frames.
    ScaleXZ(f32),
    /// Horizontal offset from rest plus `current.y += lift`. Accumulates across frames.
    OffsetAndLift { offset: Vec3, lift: f32 },
}

/// Stock constants for every mode. `from_tag` builds from these, and they fill
/// any field missing from a serialized mode.
mod stock {
    macro_rules! constants {
        ($($name:ident = $value:expr;)*) => {
            $(pub(super) fn $name() -> f32 { $value })*
        };
    }

    constants! {
        spiral_swing = 0.05;
        noise_amplitude = 0.004;
        breeze_frequency = 0.5;
        breeze_amplitude = 0.01;
        wave_scale = 0.5;
        pulse_frequency = 3.0;
        pulse_amount = 0.1;
        chaos_scale = 0.5;
        chaos_jitter = 0.01;
        ripple_frequency = 3.0;
        ripple_decay = 0.5;
        zigzag_frequency = 2.0;
        flutter_x_frequency = 10.0;
        flutter_z_frequency = 12.0;
        flutter_amplitude = 0.003;
        twist_index_rate = 0.3;
        twist_amplitude = 0.01;
        fountain_spread = 0.1;
        fountain_lift_rate = 0.2;
        fountain_lift = 0.001;
    }
}

/// Procedural stand-ins for physics, each carrying its own constants.
///
/// Serialized internally tagged on `mode`; a bare `{"mode": "spiral"}` takes
/// the stock constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Pendulum,
    Spiral {
        #[serde(default = "stock::spiral_swing")]
        swing: f32,
    },
    Noise {
        #[serde(default = "stock::noise_amplitude")]
        amplitude: f32,
    },
    Breeze {
        #[serde(default = "stock::breeze_frequency")]
        frequency: f32,
        #[serde(default = "stock::breeze_amplitude")]
        amplitude: f32,
    },
    Wave {
        #[serde(default = "stock::wave_scale")]
        scale: f32,
    },
    Pulse {
        #[serde(default = "stock::pulse_frequency")]
        frequency: f32,
        #[serde(default = "stock::pulse_amount")]
        amount: f32,
    },
    Chaos {
        #[serde(default = "stock::chaos_scale")]
        scale: f32,
        #[serde(default = "stock::chaos_jitter")]
        jitter: f32,
    },
    Ripple {
        #[serde(default = "stock::ripple_frequency")]
        frequency: f32,
        #[serde(default = "stock::ripple_decay")]
        decay: f32,
    },
    /// Even indices swing positive unless `invert` is set.
    Zigzag {
        #[serde(default = "stock::zigzag_frequency")]
        frequency: f32,
        #[serde(default)]
        invert: bool,
    },
    Flutter {
        #[serde(default = "stock::flutter_x_frequency")]
        x_frequency: f32,
        #[serde(default = "stock::flutter_z_frequency")]
        z_frequency: f32,
        #[serde(default = "stock::flutter_amplitude")]
        amplitude: f32,
    },
    Twist {
        #[serde(default = "stock::twist_index_rate")]
        index_rate: f32,
        #[serde(default = "stock::twist_amplitude")]
        amplitude: f32,
    },
    Fountain {
        #[serde(default = "stock::fountain_spread")]
        spread: f32,
        #[serde(default = "stock::fountain_lift_rate")]
        lift_rate: f32,
        #[serde(default = "stock::fountain_lift")]
        lift: f32,
    },
}

impl AnimationMode {
    /// Every tag understood by [`AnimationMode::from_tag`].
    pub const TAGS: [&'static str; 12] = [
        "pendulum", "spiral", "noise", "breeze", "wave", "pulse", "chaos", "ripple", "zigzag",
        "flutter", "twist", "fountain",
    ];

    /// Parses a mode tag (case-insensitive) into the mode with its stock constants.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let mode = match tag.trim().to_ascii_lowercase().as_str() {
            "pendulum" => Self::Pendulum,
            "spiral" => Self::Spiral {
                swing: stock::spiral_swing(),
            },
            "noise" => Self::Noise {
                amplitude: stock::noise_amplitude(),
            },
            "breeze" => Self::Breeze {
                frequency: stock::breeze_frequency(),
                amplitude: stock::breeze_amplitude(),
            },
            "wave" => Self::Wave {
                scale: stock::wave_scale(),
            },
            "pulse" => Self::Pulse {
                frequency: stock::pulse_frequency(),
                amount: stock::pulse_amount(),
            },
            "chaos" => Self::Chaos {
                scale: stock::chaos_scale(),
                jitter: stock::chaos_jitter(),
            },
            "ripple" => Self::Ripple {
                frequency: stock::ripple_frequency(),
                decay: stock::ripple_decay(),
            },
            "zigzag" => Self::Zigzag {
                frequency: stock::zigzag_frequency(),
                invert: false,
            },
            "flutter" => Self::Flutter {
                x_frequency: stock::flutter_x_frequency(),
                z_frequency: stock::flutter_z_frequency(),
                amplitude: stock::flutter_amplitude(),
            },
            "twist" => Self::Twist {
                index_rate: stock::twist_index_rate(),
                amplitude: stock::twist_amplitude(),
            },
            "fountain" => Self::Fountain {
                spread: stock::fountain_spread(),
                lift_rate: stock::fountain_lift_rate(),
                lift: stock::fountain_lift(),
            },
            _ => return None,
        };
        Some(mode)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pendulum => "pendulum",
            Self::Spiral { .. } => "spiral",
            Self::Noise { .. } => "noise",
            Self::Breeze { .. } => "breeze",
            Self::Wave { .. } => "wave",
            Self::Pulse { .. } => "pulse",
            Self::Chaos { .. } => "chaos",
            Self::Ripple { .. } => "ripple",
            Self::Zigzag { .. } => "zigzag",
            Self::Flutter { .. } => "flutter",
            Self::Twist { .. } => "twist",
            Self::Fountain { .. } => "fountain",
        }
    }

    /// Modes whose output depends only on (elapsed, index), not on the previous frame.
    pub fn is_pure(&self) -> bool {
        !matches!(self, Self::Pulse { .. } | Self::Fountain { .. })
    }

    /// Effect on one non-root particle. `rng` is only drawn from by random modes,
    /// x before z.
    pub fn effect<R: Rng + ?Sized>(&self, s: &WaveSample, rng: &mut R) -> ParticleEffect {
        let phase = s.phase;
        let h = s.height;
        let along = s.along();

        match *self {
            Self::Pendulum => ParticleEffect::Offset(Vec3::new(phase.sin() * h * along, 0.0, 0.0)),
            Self::Spiral { swing } => {
                let angle = phase.sin() * swing;
                ParticleEffect::Offset(Vec3::new(
                    angle.cos() * h * along,
                    0.0,
                    angle.sin() * h * along,
                ))
            }
            Self::Noise { amplitude } => {
                let x = (rng.random::<f32>() - 0.5) * amplitude;
                let z = (rng.random::<f32>() - 0.5) * amplitude;
                ParticleEffect::Offset(Vec3::new(x, 0.0, z))
            }
            Self::Breeze {
                frequency,
                amplitude,
            } => ParticleEffect::Offset(Vec3::new(
                (phase * frequency).sin() * amplitude * (1.0 - along),
                0.0,
                0.0,
            )),
            Self::Wave { scale } => ParticleEffect::Offset(Vec3::new(0.0, 0.0, phase.sin() * h * scale)),
            Self::Pulse { frequency, amount } => {
                ParticleEffect::ScaleXZ(1.0 + (phase * frequency).sin() * amount)
            }
            Self::Chaos { scale, jitter } => {
                let x = phase.sin() * h * scale + (rng.random::<f32>() - 0.5) * jitter;
                let z = phase.cos() * h * scale + (rng.random::<f32>() - 0.5) * jitter;
                ParticleEffect::Offset(Vec3::new(x, 0.0, z))
            }
            Self::Ripple { frequency, decay } => {
                let falloff = (-(s.index as f32) * decay).exp();
                ParticleEffect::Offset(Vec3::new(
                    (phase * frequency).sin() * h * falloff,
                    0.0,
                    (phase * frequency).cos() * h * falloff,
                ))
            }
            Self::Zigzag { frequency, invert } => {
                let even = s.index % 2 == 0;
                let sign = if even != invert { 1.0 } else { -1.0 };
                ParticleEffect::Offset(Vec3::new(sign * h * (phase * frequency).sin(), 0.0, 0.0))
            }
            Self::Flutter {
                x_frequency,
                z_frequency,
                amplitude,
            } => ParticleEffect::Offset(Vec3::new(
                (phase * x_frequency).sin() * amplitude,
                0.0,
                (phase * z_frequency).cos() * amplitude,
            )),
            Self::Twist {
                index_rate,
                amplitude,
            } => {
                let angle = s.index as f32 * index_rate + phase;
                ParticleEffect::Offset(Vec3::new(angle.sin() * amplitude, 0.0, angle.cos() * amplitude))
            }
            Self::Fountain {
                spread,
                lift_rate,
                lift,
            } => {
                let i = s.index as f32;
                ParticleEffect::OffsetAndLift {
                    offset: Vec3::new((phase + i * spread).sin() * h * (1.0 - along), 0.0, 0.0),
                    lift: (phase + i * lift_rate).sin().abs() * lift,
                }
            }
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}
