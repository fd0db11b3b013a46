//! Layers, the evaluation stages of a [`Network`][crate::Network].

use std::ops::Range;

/// A view into a contiguous range of a network's neurons.
///
/// Layers do not own their neurons. A layer created by resizing the network is empty until it is
/// assigned a range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Layer {
    start: usize,
    count: usize,
}

impl Layer {
    /// Returns a new `Layer` viewing `count` neurons starting at index `start`.
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Returns the index of the first neuron in this `Layer`.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the number of neurons in this `Layer`.
    pub fn num_neurons(&self) -> usize {
        self.count
    }

    /// Returns the index one past the last neuron in this `Layer`.
    ///
    /// Returns `None` on overflow.
    pub fn checked_end(&self) -> Option<usize> {
        self.start.checked_add(self.count)
    }

    /// Returns the index range of the neurons in this `Layer`.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.count
    }

    /// Returns whether this `Layer` contains no neurons.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
