//! Tokenizer turning raw input bytes into samples.

use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::error::Result;

/// Yields the numeric tokens of `bytes` in order, split on ASCII whitespace.
///
/// Iteration ends at the first token that does not parse as a finite `f64`
/// (including tokens that are not UTF-8); anything after it is ignored.
pub fn parse_values(bytes: &[u8]) -> impl Iterator<Item = f64> + '_ {
    bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .map_while(|token| {
            let value = std::str::from_utf8(token)
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite());

            if value.is_none() {
                debug!(
                    token = %String::from_utf8_lossy(token),
                    "Stopping at unparseable token"
                );
            }
            value
        })
}

/// Reads every leading numeric token of `bytes` into a fresh [`SampleBuffer`].
///
/// # Errors
///
/// Propagates [`crate::StatsError::AllocationFailure`] from the buffer.
pub fn ingest(bytes: &[u8]) -> Result<SampleBuffer> {
    let mut buffer = SampleBuffer::new();
    buffer.append_all(parse_values(bytes))?;

    debug!(
        count = buffer.len(),
        capacity = buffer.capacity(),
        "Input ingested"
    );
    Ok(buffer)
}
