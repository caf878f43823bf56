//! Error type shared by ingestion, buffering, and the aggregate computations.

use thiserror::Error;

/// Everything that can abort a statistics run.
///
/// No variant is retried; the run stops and no summary is produced.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("cannot read input source `{source_name}`")]
    InputUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("memory allocation failed while growing sample buffer to {requested} values")]
    AllocationFailure { requested: usize },

    #[error("no numeric values were read from the input")]
    EmptyInput,

    #[error("harmonic mean undefined: value at sorted position {index} is zero")]
    DivisionByZero { index: usize },

    #[error("harmonic mean undefined: reciprocals sum to zero")]
    ZeroReciprocalSum,

    #[error("harmonic mean not representable: reciprocals or result overflow")]
    NonFiniteHarmonicMean,
}

pub type Result<T> = std::result::Result<T, StatsError>;
