//! The scalar units that make up a [`Network`][crate::Network].

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::network::Error;

/// The ID of a [`Neuron`] in a [`Network`][crate::Network].
///
/// This is the neuron's position in the network's neuron storage, so it stays valid for as long
/// as the neuron count of the network is unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeuronId(usize);

impl NeuronId {
    /// Returns a new `NeuronId` with the given id.
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns this `NeuronId` as a `usize`.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for NeuronId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// The rule used to combine the weighted inputs of a [`Neuron`] before the activation function is
/// applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Discriminant {
    /// Sum of each input multiplied by its weight.
    Linear,
}

impl Default for Discriminant {
    fn default() -> Self {
        Discriminant::Linear
    }
}

impl Discriminant {
    /// Combines `(input, weight)` pairs into a single pre-activation value.
    ///
    /// An empty sequence combines to zero.
    pub fn combine<T, I>(&self, pairs: I) -> T
    where
        T: Float,
        I: IntoIterator<Item = (T, T)>,
    {
        match self {
            Discriminant::Linear => pairs
                .into_iter()
                .fold(T::zero(), |sum, (input, weight)| sum + input * weight),
        }
    }
}

/// A neuron.
///
/// Holds the value it produced during the last propagation, its incoming connections and their
/// weights, and the functions used to turn those into a new value.
///
/// Neurons are created and modified only by their [`Network`][crate::Network].
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron<T: Float> {
    // The position of this neuron in the network
    id: NeuronId,
    // The value computed by the last propagation, or assigned directly for input neurons
    output: T,
    // The source of each incoming connection
    // `None` marks a slot that has been allocated but not wired yet
    connections: Vec<Option<NeuronId>>,
    // One weight per connection slot
    weights: Vec<T>,
    activation: Activation,
    discriminant: Discriminant,
}

impl<T: Float> Neuron<T> {
    /// Returns a new `Neuron` with no connections and an output of zero.
    pub(crate) fn new(id: NeuronId) -> Self {
        Self {
            id,
            output: T::zero(),
            connections: Vec::new(),
            weights: Vec::new(),
            activation: Activation::default(),
            discriminant: Discriminant::default(),
        }
    }

    /// Returns the id of this `Neuron`.
    pub fn id(&self) -> NeuronId {
        self.id
    }

    /// Returns the output of this `Neuron`.
    pub fn output(&self) -> T {
        self.output
    }

    /// Sets the output of this `Neuron`.
    pub(crate) fn set_output(&mut self, output: T) {
        self.output = output;
    }

    /// Returns the number of incoming connections of this `Neuron`.
    pub fn num_inputs(&self) -> usize {
        self.connections.len()
    }

    /// Allocates `count` connection slots and weights, replacing any existing ones. All slots
    /// start out unset and all weights start at zero.
    ///
    /// Returns an error and leaves the neuron untouched if `count` is zero.
    pub(crate) fn set_connection_count(&mut self, count: usize) -> Result<(), Error> {
        if count == 0 {
            return Err(Error::InvalidConnectionCount(self.id));
        }

        self.connections = vec![None; count];
        self.weights = vec![T::zero(); count];

        Ok(())
    }

    /// Returns the connection slots of this `Neuron`.
    pub fn connections(&self) -> &[Option<NeuronId>] {
        &self.connections
    }

    /// Returns the source of the connection in `slot` if it is set.
    pub fn connection(&self, slot: usize) -> Option<NeuronId> {
        self.connections.get(slot).copied().flatten()
    }

    pub(crate) fn set_connection(&mut self, slot: usize, source: NeuronId) {
        self.connections[slot] = Some(source);
    }

    /// Returns the weights of this `Neuron`.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns a mutable reference to the weights of this `Neuron`.
    ///
    /// The length of the weights is fixed by [`set_connection_count`][Self::set_connection_count].
    pub(crate) fn weights_mut(&mut self) -> &mut [T] {
        &mut self.weights
    }

    /// Returns the activation function of this `Neuron`.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Sets the activation function of this `Neuron`.
    pub(crate) fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }

    /// Returns the discriminant of this `Neuron`.
    pub fn discriminant(&self) -> Discriminant {
        self.discriminant
    }

    /// Sets the discriminant of this `Neuron`.
    pub(crate) fn set_discriminant(&mut self, discriminant: Discriminant) {
        self.discriminant = discriminant;
    }

    /// Computes the value of this `Neuron` from the outputs of the neurons in `sources`, which
    /// must contain every neuron this one is connected to.
    ///
    /// # Panics
    ///
    /// Panics if a connection slot is unset or points outside of `sources`.
    pub(crate) fn compute(&self, sources: &[Neuron<T>]) -> T {
        let pairs = self
            .connections
            .iter()
            .zip(&self.weights)
            .map(|(connection, &weight)| {
                let source = connection.expect("a neuron connection was never set");
                (sources[source.as_usize()].output, weight)
            });

        self.activation.apply(self.discriminant.combine(pairs))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new() {
        let neuron = Neuron::<f64>::new(NeuronId::new(3));

        assert_eq!(NeuronId::new(3), neuron.id());
        assert_eq!(0.0, neuron.output());
        assert_eq!(0, neuron.num_inputs());
        assert!(neuron.weights().is_empty());
        assert_eq!(Activation::Id, neuron.activation());
        assert_eq!(Discriminant::Linear, neuron.discriminant());
    }

    #[test]
    fn test_set_connection_count() {
        let mut neuron = Neuron::<f64>::new(NeuronId::new(1));

        neuron.set_connection_count(3).unwrap();
        assert_eq!(3, neuron.num_inputs());
        assert_eq!(&[None, None, None], neuron.connections());
        assert_eq!(&[0.0, 0.0, 0.0], neuron.weights());

        // Reallocation drops the previous wiring
        neuron.set_connection(0, NeuronId::new(0));
        neuron.weights_mut()[0] = 2.0;
        neuron.set_connection_count(2).unwrap();
        assert_eq!(&[None, None], neuron.connections());
        assert_eq!(&[0.0, 0.0], neuron.weights());
    }

    #[test]
    fn test_set_connection_count_zero() {
        let mut neuron = Neuron::<f64>::new(NeuronId::new(1));
        neuron.set_connection_count(2).unwrap();
        neuron.weights_mut()[1] = 0.5;
        let old = neuron.clone();

        assert_eq!(
            Err(Error::InvalidConnectionCount(NeuronId::new(1))),
            neuron.set_connection_count(0)
        );
        assert_eq!(old, neuron);
    }

    #[test]
    fn test_linear_discriminant() {
        let pairs = vec![(3.0, 1.0), (4.0, 1.0), (2.0, -0.5)];
        assert_approx_eq!(6.0, Discriminant::Linear.combine(pairs));
        assert_eq!(0.0, Discriminant::Linear.combine(Vec::<(f64, f64)>::new()));
        assert_eq!(0.0, Discriminant::Linear.combine(vec![(100.0, 0.0), (200.0, 0.0)]));
    }

    #[test]
    fn test_compute() {
        let mut sources = vec![
            Neuron::<f64>::new(NeuronId::new(0)),
            Neuron::new(NeuronId::new(1)),
        ];
        sources[0].set_output(2.0);
        sources[1].set_output(3.0);

        let mut neuron = Neuron::new(NeuronId::new(2));
        neuron.set_connection_count(2).unwrap();
        neuron.set_connection(0, NeuronId::new(0));
        neuron.set_connection(1, NeuronId::new(1));
        neuron.weights_mut().copy_from_slice(&[0.5, 2.0]);
        assert_approx_eq!(7.0, neuron.compute(&sources));

        neuron.set_activation(Activation::Pol1);
        assert_approx_eq!(8.0, neuron.compute(&sources));
    }

    #[test]
    #[should_panic(expected = "never set")]
    fn test_compute_unset_connection() {
        let sources = vec![Neuron::<f64>::new(NeuronId::new(0))];
        let mut neuron = Neuron::new(NeuronId::new(1));
        neuron.set_connection_count(1).unwrap();
        neuron.compute(&sources);
    }
}
