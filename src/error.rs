use crate::Parameter;
use thiserror::Error;

/// Simulation error.
#[derive(Debug, Error)]
pub enum Error {
    /// The name passed to a parameter lookup is not a known parameter.
    #[error("invalid parameter `{name}`")]
    InvalidParameter {
        /// Name that failed to resolve.
        name: String,
    },

    /// A declared parameter range is empty, non-finite, or has a non-positive step.
    #[error("invalid range for {parameter}: [{min}, {max}] with step {step}")]
    InvalidRange {
        /// Parameter the range was declared for.
        parameter: Parameter,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Slider step.
        step: f64,
    },

    /// The integration time step must be positive and finite.
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    /// The macro interval must span at least one time step.
    #[error("interval {interval} is shorter than one time step of {dt}")]
    InvalidInterval {
        /// Requested macro interval.
        interval: f64,
        /// Integration time step.
        dt: f64,
    },

    /// The wall-clock frame period must be non-zero.
    #[error("frame period must be non-zero")]
    InvalidFramePeriod,

    /// The animation task panicked or was cancelled.
    #[cfg(feature = "rt")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rt")))]
    #[error("animation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type with a default error of [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
