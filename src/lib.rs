pub mod buffer;
pub mod error;
pub mod input;
pub mod math;
pub mod output;
pub mod parser;
pub mod stats;

pub use error::StatsError;
pub use stats::Summary;

/// Runs the whole pipeline over raw input: ingest, sort, then every
/// aggregate.
///
/// Nothing is returned on failure; the partially filled buffer is dropped.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn summarize(bytes: &[u8]) -> error::Result<Summary> {
    let samples = parser::ingest(bytes)?.into_sorted();
    Summary::from_samples(&samples)
}
