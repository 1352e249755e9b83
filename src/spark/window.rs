//! src/spark/window.rs
//!
//! Bounded, order-preserving sample buffer with FIFO eviction.

use std::collections::VecDeque;

/// Whether the window still has room (line right-aligned) or is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    Filling,
    Full,
}

#[derive(Clone, Debug)]
pub struct SampleWindow {
    /// oldest at front, most recent at back
    samples: VecDeque<f64>,
    max_length: usize,
}

impl SampleWindow {
    /// Create a window holding the last `max_length` values of `initial`.
    pub fn new(max_length: usize, initial: &[f64]) -> Self {
        let keep = initial.len().saturating_sub(max_length);
        let mut samples = VecDeque::with_capacity(max_length);
        samples.extend(initial[keep..].iter().copied());
        Self {
            samples,
            max_length,
        }
    }

    /// Append samples in order, dropping the oldest ones past `max_length`.
    ///
    /// Maintains invariant: len() <= max_length.
    pub fn extend(&mut self, new_samples: &[f64]) {
        // only the tail of an oversized batch can survive
        let skip = new_samples.len().saturating_sub(self.max_length);
        for &v in &new_samples[skip..] {
            if self.samples.len() == self.max_length {
                self.samples.pop_front();
            }
            self.samples.push_back(v);
        }
    }

    /// X shift that right-aligns a partially filled window; 0 once full.
    pub fn offset(&self) -> usize {
        self.max_length - self.samples.len()
    }

    pub fn state(&self) -> WindowState {
        if self.samples.len() < self.max_length {
            WindowState::Filling
        } else {
            WindowState::Full
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Owned copy of the window contents, oldest first.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
