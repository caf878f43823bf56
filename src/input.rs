//! Input sources: a file path, or `-` for standard input.

use std::io::Read;

use crate::error::{Result, StatsError};

/// Source name that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Loads the full contents of `source`.
///
/// # Errors
///
/// Returns [`StatsError::InputUnavailable`] if the file cannot be opened or
/// read.
#[tracing::instrument]
pub fn read_source(source: &str) -> Result<Vec<u8>> {
    let read = if source == STDIN_SOURCE {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map(|_| bytes)
    } else {
        std::fs::read(source)
    };

    read.map_err(|e| StatsError::InputUnavailable {
        source_name: source.to_string(),
        source: e,
    })
}
