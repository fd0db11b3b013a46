//! The error type for building networks.

use std::{error, fmt};

use crate::neuron::NeuronId;

/// The reason why a network operation was rejected.
///
/// An operation that returns an `Error` leaves the network unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested neuron count is zero.
    InvalidNeuronCount,
    /// The requested layer count is zero.
    InvalidLayerCount,
    /// The requested connection count for a neuron is zero. Contains the ID of the neuron.
    InvalidConnectionCount(NeuronId),
    /// The neuron does not exist in the network.
    NeuronNotFound(NeuronId),
    /// The layer does not exist in the network. Contains the layer index.
    LayerNotFound(usize),
    /// A connection slot index is past the neuron's connection count.
    ConnectionSlotOutOfRange {
        neuron: NeuronId,
        slot: usize,
        len: usize,
    },
    /// A neuron was connected to itself.
    SelfConnection(NeuronId),
    /// A layer range extends past the end of the neuron storage.
    LayerOutOfBounds {
        layer: usize,
        start: usize,
        count: usize,
        len: usize,
    },
    /// Two layers overlap or are out of order. Contains the indices of the two layers.
    OverlappingLayers(usize, usize),
    /// A layer has no neurons where one is required. Contains the layer index.
    EmptyLayer(usize),
    /// The neurons in `start..end` would not belong to any layer.
    UncoveredNeurons { start: usize, end: usize },
    /// The number of weights given for a neuron does not match its connection count.
    WeightCountMismatch {
        neuron: NeuronId,
        expected: usize,
        got: usize,
    },
    /// The number of input values does not match the size of the input layer.
    InputCountMismatch { expected: usize, got: usize },
    /// The lower bound of a weight range is not less than its upper bound.
    InvalidWeightRange,
    /// An index computation overflowed, or a value could not be converted to the weight type.
    Arithmetic,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidNeuronCount => write!(f, "neuron count must be greater than zero"),
            Self::InvalidLayerCount => write!(f, "layer count must be greater than zero"),
            Self::InvalidConnectionCount(id) => write!(
                f,
                "connection count for neuron {} must be greater than zero",
                id.as_usize()
            ),
            Self::NeuronNotFound(id) => write!(f, "neuron {} does not exist", id.as_usize()),
            Self::LayerNotFound(index) => write!(f, "layer {} does not exist", index),
            Self::ConnectionSlotOutOfRange { neuron, slot, len } => write!(
                f,
                "connection slot {} is out of range for neuron {} with {} connections",
                slot,
                neuron.as_usize(),
                len
            ),
            Self::SelfConnection(id) => {
                write!(f, "neuron {} cannot be connected to itself", id.as_usize())
            }
            Self::LayerOutOfBounds {
                layer,
                start,
                count,
                len,
            } => write!(
                f,
                "layer {} with {} neurons starting at {} does not fit in {} neurons",
                layer, count, start, len
            ),
            Self::OverlappingLayers(a, b) => {
                write!(f, "layers {} and {} overlap or are out of order", a, b)
            }
            Self::EmptyLayer(index) => write!(f, "layer {} has no neurons", index),
            Self::UncoveredNeurons { start, end } => {
                write!(f, "neurons {}..{} do not belong to any layer", start, end)
            }
            Self::WeightCountMismatch {
                neuron,
                expected,
                got,
            } => write!(
                f,
                "neuron {} has {} connections, got {} weights",
                neuron.as_usize(),
                expected,
                got
            ),
            Self::InputCountMismatch { expected, got } => {
                write!(f, "expected {} inputs, got {}", expected, got)
            }
            Self::InvalidWeightRange => write!(f, "invalid weight range"),
            Self::Arithmetic => write!(f, "arithmetic overflow or failed numeric conversion"),
        }
    }
}

impl error::Error for Error {}
