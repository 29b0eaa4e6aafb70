//! Error types for strand construction.
//!
//! Only building a [`StrandSet`](crate::core::StrandSet) can fail. The per-frame
//! path never returns errors; degenerate input is handled by local fallbacks.

use std::fmt;

/// Errors raised while turning imported geometry into strands.
#[derive(Debug, Clone, PartialEq)]
pub enum StrandError {
    /// A strand was supplied with no points.
    EmptyStrand { strand: usize },
    /// The requested particles-per-strand count was zero.
    ZeroStrandLength,
    /// A flat position buffer does not divide into whole strands.
    MisalignedBuffer { len: usize, stride: usize },
    /// The fixed segment length was negative or not finite.
    InvalidSegmentLength(f32),
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyStrand { strand } => write!(f, "strand {strand} has no points"),
            Self::ZeroStrandLength => write!(f, "strand length must be at least one particle"),
            Self::MisalignedBuffer { len, stride } => write!(
                f,
                "position buffer of {len} floats is not a multiple of the strand stride {stride}"
            ),
            Self::InvalidSegmentLength(value) => {
                write!(f, "segment length must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for StrandError {}

/// Convenience alias used by the fallible constructors.
pub type Result<T> = std::result::Result<T, StrandError>;
