use crate::sample::Sample;
use std::collections::VecDeque;

/// Default history depth: one hour of samples at 1 Hz.
pub const DEFAULT_CAPACITY: usize = 3600;

/// Fixed-capacity FIFO history of [`Sample`]s, oldest first.
///
/// Exactly one writer (the sampling loop) appends; readers take owned
/// snapshots or per-metric series, so an append can never be half-observed.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer holding at most `capacity` samples
    /// (clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, silently evicting the oldest one at capacity.
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest→newest.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn newest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Owned copy of the current contents, oldest→newest.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }

    /// CPU series, oldest→newest, for graph redraw.
    pub fn cpu_series(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.cpu_percent).collect()
    }

    /// Memory series, oldest→newest.
    pub fn mem_series(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.mem_percent).collect()
    }

    /// Temperature series, oldest→newest, absent readings as the `0.0` sentinel.
    pub fn temp_series(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.temp_or_sentinel()).collect()
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
