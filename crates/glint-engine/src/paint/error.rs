use std::fmt;

/// Construction error for stop tables and samplers.
///
/// These are fatal to effect setup: a brush must not be created over an
/// invalid sampler. Everything past construction is infallible arithmetic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SamplerError {
    /// A stop table needs at least two colors to define a ramp.
    TooFewColors { count: usize },
    /// `bounds.0 == bounds.1` would divide by zero in the domain map.
    DegenerateBounds { at: f32 },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::TooFewColors { count } => {
                write!(f, "gradient needs at least 2 colors, got {count}")
            }
            SamplerError::DegenerateBounds { at } => {
                write!(f, "sampler bounds are zero-length at {at}")
            }
        }
    }
}

impl std::error::Error for SamplerError {}
