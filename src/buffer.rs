//! Sample storage with an explicit capacity-doubling policy.
//!
//! [`SampleBuffer`] accepts values during ingestion. Sorting consumes it and
//! yields a read-only [`SortedSamples`], so nothing can be appended once the
//! ordering that median and mode rely on has been established.

use tracing::debug;

use crate::error::{Result, StatsError};

/// Capacity of a freshly created buffer.
pub const INITIAL_CAPACITY: usize = 20;

/// Growable buffer of samples. Capacity is tracked here rather than read from
/// the backing `Vec`, so the reported unused capacity follows the doubling law
/// exactly: 20, 40, 80, ...
#[derive(Debug)]
pub struct SampleBuffer {
    values: Vec<f64>,
    capacity: usize,
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Starts with `capacity` slots. A zero capacity is bumped to one, since
    /// doubling zero would never make room.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `value`, doubling the capacity first if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::AllocationFailure`] if the larger storage cannot
    /// be obtained. The buffer is left unchanged in that case.
    pub fn append(&mut self, value: f64) -> Result<()> {
        if self.values.len() == self.capacity {
            self.grow()?;
        }
        self.values.push(value);
        Ok(())
    }

    /// Appends every value from `values`, stopping at the first failure.
    pub fn append_all<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = self
            .capacity
            .checked_mul(2)
            .ok_or(StatsError::AllocationFailure {
                requested: usize::MAX,
            })?;

        self.values
            .try_reserve_exact(new_capacity - self.values.len())
            .map_err(|_| StatsError::AllocationFailure {
                requested: new_capacity,
            })?;

        debug!(
            old_capacity = self.capacity,
            new_capacity,
            len = self.values.len(),
            "Sample buffer grown"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn unused_capacity(&self) -> usize {
        self.capacity - self.values.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Ends ingestion and sorts the samples ascending.
    pub fn into_sorted(self) -> SortedSamples {
        let mut values = self.values;
        values.sort_unstable_by(f64::total_cmp);
        SortedSamples {
            values,
            capacity: self.capacity,
        }
    }
}

/// Samples in ascending order, together with the capacity reached during
/// ingestion.
#[derive(Debug)]
pub struct SortedSamples {
    values: Vec<f64>,
    capacity: usize,
}

impl SortedSamples {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn unused_capacity(&self) -> usize {
        self.capacity - self.values.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
