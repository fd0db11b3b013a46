//! The neural network struct.

mod error;
mod evaluate;

pub use error::Error;

use num_traits::Float;
use rand::Rng;

use std::ops::Index;

use crate::activation::Activation;
use crate::config::NetworkConfig;
use crate::layer::Layer;
use crate::math;
use crate::neuron::{Discriminant, Neuron, NeuronId};

/// The range that [`Network::initialize_weights`] draws weights from.
pub const DEFAULT_WEIGHT_RANGE: (f64, f64) = (-1.0, 1.0);

/// A layered feed-forward network.
///
/// The network owns a densely indexed array of [`Neuron`]s and an array of [`Layer`]s, each of
/// which views a contiguous range of the neurons. Layer ranges never overlap, are increasing in
/// layer order, and leave no gaps between them. Neurons refer to their inputs by [`NeuronId`], so
/// wiring stays valid for as long as the neuron count is unchanged.
///
/// Neurons can only be modified through the network, so a neuron's ID always matches its position.
///
/// Evaluation assumes that every neuron is only connected to neurons in earlier layers. This is
/// not checked; see [`feedforward`][Self::feedforward].
///
/// # Examples
///
/// ```
/// use ffnet::{Network, NeuronId};
///
/// // Two inputs feeding one output
/// let mut network = Network::<f64>::new();
/// network.set_layout(&[2, 1]).unwrap();
///
/// let output = NeuronId::new(2);
/// network.set_connection_count(output, 2).unwrap();
/// network.connect(output, 0, NeuronId::new(0), 0.5).unwrap();
/// network.connect(output, 1, NeuronId::new(1), 2.0).unwrap();
///
/// assert_eq!(vec![7.0], network.evaluate(&[2.0, 3.0]).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Network<T: Float = f64> {
    // The neurons of the network, indexed by their IDs
    neurons: Vec<Neuron<T>>,
    // Views into `neurons`, in evaluation order
    layers: Vec<Layer>,
}

impl<T: Float> Default for Network<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Network<T> {
    /// Returns a new `Network` with no neurons and no layers.
    pub fn new() -> Self {
        Self {
            neurons: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Returns the number of neurons in this `Network`.
    pub fn num_neurons(&self) -> usize {
        self.neurons.len()
    }

    /// Returns the number of layers in this `Network`.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the neurons of this `Network`, ordered by ID.
    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    /// Returns a reference to the neuron with the given ID if it exists.
    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron<T>> {
        self.neurons.get(id.as_usize())
    }

    fn neuron_mut(&mut self, id: NeuronId) -> Result<&mut Neuron<T>, Error> {
        self.neurons
            .get_mut(id.as_usize())
            .ok_or(Error::NeuronNotFound(id))
    }

    /// Returns the layers of this `Network`.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the layer at `index` if it exists.
    pub fn layer(&self, index: usize) -> Option<Layer> {
        self.layers.get(index).copied()
    }

    /// Returns the neurons viewed by the layer at `index` if it exists.
    pub fn layer_neurons(&self, index: usize) -> Option<&[Neuron<T>]> {
        self.layers.get(index).map(|layer| &self.neurons[layer.range()])
    }

    /// Sets the number of neurons in this `Network`.
    ///
    /// If `count` is the current neuron count, nothing happens: the neuron storage and all wiring
    /// are kept as they are. Otherwise the storage is replaced by `count` fresh neurons with IDs
    /// `0..count`, outputs of zero and no connections, and every layer is reset to an empty view.
    /// Any [`NeuronId`] or [`Layer`] obtained before the change must not be reused.
    ///
    /// Returns an error and leaves the network untouched if `count` is zero.
    pub fn set_neuron_count(&mut self, count: usize) -> Result<(), Error> {
        if count == 0 {
            return Err(Error::InvalidNeuronCount);
        }

        if count == self.neurons.len() {
            return Ok(());
        }

        if self.neurons.iter().any(|neuron| neuron.num_inputs() > 0) {
            log::warn!(
                "resizing network from {} to {} neurons discards existing connections",
                self.neurons.len(),
                count
            );
        }

        self.neurons = (0..count).map(|id| Neuron::new(NeuronId::new(id))).collect();
        for layer in &mut self.layers {
            *layer = Layer::default();
        }

        log::debug!("allocated {} neurons", count);

        Ok(())
    }

    /// Sets the number of layers in this `Network`.
    ///
    /// If `count` is the current layer count, nothing happens. Otherwise the layers are replaced by
    /// `count` empty layers, which must be assigned ranges with [`set_layer`][Self::set_layer].
    ///
    /// Returns an error and leaves the network untouched if `count` is zero.
    pub fn set_layer_count(&mut self, count: usize) -> Result<(), Error> {
        if count == 0 {
            return Err(Error::InvalidLayerCount);
        }

        if count == self.layers.len() {
            return Ok(());
        }

        self.layers = vec![Layer::default(); count];

        log::debug!("allocated {} layers", count);

        Ok(())
    }

    /// Sets the number of connections of a neuron. The neuron's connection slots are all unset and
    /// its weights are all zero afterwards.
    ///
    /// Returns an error and leaves the network untouched if the neuron does not exist or `count`
    /// is zero.
    pub fn set_connection_count(&mut self, id: NeuronId, count: usize) -> Result<(), Error> {
        self.neuron_mut(id)?.set_connection_count(count)
    }

    /// Makes the layer at `index` view `count` neurons starting at `start`.
    ///
    /// The range must lie within the neuron storage and must start after every non-empty layer
    /// before `index` and end before every non-empty layer after it. It must also leave no neurons
    /// between itself and its neighbors: the first layer starts at neuron zero, the last layer ends
    /// at the last neuron, and a non-empty layer at `index - 1` or `index + 1` must be adjacent to
    /// the range. Setting `count` to zero empties the layer.
    pub fn set_layer(&mut self, index: usize, start: usize, count: usize) -> Result<(), Error> {
        if index >= self.layers.len() {
            return Err(Error::LayerNotFound(index));
        }

        if count == 0 {
            self.layers[index] = Layer::default();
            return Ok(());
        }

        let layer = Layer::new(start, count);

        let end = layer.checked_end().ok_or(Error::Arithmetic)?;
        if end > self.neurons.len() {
            return Err(Error::LayerOutOfBounds {
                layer: index,
                start,
                count,
                len: self.neurons.len(),
            });
        }

        for (other_index, other) in self.layers.iter().enumerate() {
            if other_index == index || other.is_empty() {
                continue;
            }

            let ordered = if other_index < index {
                other.range().end <= start
            } else {
                end <= other.start()
            };

            if !ordered {
                return Err(Error::OverlappingLayers(
                    other_index.min(index),
                    other_index.max(index),
                ));
            }
        }

        // Ordering is checked above, so any mismatch here is a gap
        let prev_end = match index.checked_sub(1) {
            Some(prev) => self.layers[prev].range().end,
            None => 0,
        };
        if (index == 0 || !self.layers[index - 1].is_empty()) && start != prev_end {
            return Err(Error::UncoveredNeurons {
                start: prev_end,
                end: start,
            });
        }

        let next_start = match self.layers.get(index + 1) {
            Some(next) if !next.is_empty() => Some(next.start()),
            Some(_) => None,
            None => Some(self.neurons.len()),
        };
        if let Some(next_start) = next_start {
            if end != next_start {
                return Err(Error::UncoveredNeurons {
                    start: end,
                    end: next_start,
                });
            }
        }

        self.layers[index] = layer;

        Ok(())
    }

    /// Sets up neurons and layers for a network with the given number of neurons in each layer,
    /// laid out contiguously in layer order. The first entry is the input layer.
    ///
    /// The neuron and layer counts follow the rules of [`set_neuron_count`][Self::set_neuron_count]
    /// and [`set_layer_count`][Self::set_layer_count], so existing wiring is kept if the total
    /// number of neurons is unchanged.
    pub fn set_layout(&mut self, sizes: &[usize]) -> Result<(), Error> {
        if sizes.is_empty() {
            return Err(Error::InvalidLayerCount);
        }

        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(Error::EmptyLayer(index));
        }

        let total = sizes
            .iter()
            .try_fold(0usize, |total, &size| total.checked_add(size))
            .ok_or(Error::Arithmetic)?;

        // Both counts are non-zero, so nothing below can fail
        self.set_neuron_count(total)?;
        self.set_layer_count(sizes.len())?;

        let mut start = 0;
        for (layer, &size) in self.layers.iter_mut().zip(sizes) {
            *layer = Layer::new(start, size);
            start += size;
        }

        log::debug!("applied layout {:?}", sizes);

        Ok(())
    }

    /// Checks that every layer is non-empty and that the layers cover all neurons without gaps.
    ///
    /// [`set_layer`][Self::set_layer] keeps neighboring layers adjacent, but layers that are still
    /// empty leave holes that only this check finds.
    pub fn check_layers(&self) -> Result<(), Error> {
        if self.layers.is_empty() {
            return Err(Error::LayerNotFound(0));
        }

        let mut end = 0;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.is_empty() {
                return Err(Error::EmptyLayer(index));
            }
            if layer.start() != end {
                return Err(Error::UncoveredNeurons {
                    start: end,
                    end: layer.start(),
                });
            }
            end = layer.range().end;
        }

        if end != self.neurons.len() {
            return Err(Error::UncoveredNeurons {
                start: end,
                end: self.neurons.len(),
            });
        }

        Ok(())
    }

    /// Connects slot `slot` of neuron `target` to the output of neuron `source` with the given
    /// weight.
    ///
    /// Only the existence of both neurons and the slot is checked. It is up to the caller to only
    /// connect neurons to neurons in earlier layers.
    pub fn connect(
        &mut self,
        target: NeuronId,
        slot: usize,
        source: NeuronId,
        weight: T,
    ) -> Result<(), Error> {
        if source.as_usize() >= self.neurons.len() {
            return Err(Error::NeuronNotFound(source));
        }

        if source == target {
            return Err(Error::SelfConnection(target));
        }

        let neuron = self.slot_neuron_mut(target, slot)?;
        neuron.set_connection(slot, source);
        neuron.weights_mut()[slot] = weight;

        Ok(())
    }

    /// Sets the weight of connection slot `slot` of neuron `target`.
    pub fn set_weight(&mut self, target: NeuronId, slot: usize, weight: T) -> Result<(), Error> {
        self.slot_neuron_mut(target, slot)?.weights_mut()[slot] = weight;

        Ok(())
    }

    /// Sets all weights of neuron `target` at once. `weights` must have one entry per connection
    /// slot.
    pub fn set_weights(&mut self, target: NeuronId, weights: &[T]) -> Result<(), Error> {
        let neuron = self.neuron_mut(target)?;

        if weights.len() != neuron.num_inputs() {
            return Err(Error::WeightCountMismatch {
                neuron: target,
                expected: neuron.num_inputs(),
                got: weights.len(),
            });
        }

        neuron.weights_mut().copy_from_slice(weights);

        Ok(())
    }

    /// Sets the output of a neuron directly. Outputs of non-input neurons are overwritten by the
    /// next propagation.
    pub fn set_output(&mut self, id: NeuronId, output: T) -> Result<(), Error> {
        self.neuron_mut(id)?.set_output(output);

        Ok(())
    }

    /// Returns the neuron with a connection slot `slot`.
    fn slot_neuron_mut(&mut self, id: NeuronId, slot: usize) -> Result<&mut Neuron<T>, Error> {
        let neuron = self.neuron_mut(id)?;
        let len = neuron.num_inputs();

        if slot >= len {
            return Err(Error::ConnectionSlotOutOfRange {
                neuron: id,
                slot,
                len,
            });
        }

        Ok(neuron)
    }

    /// Sets the activation function of a neuron.
    pub fn set_activation(&mut self, id: NeuronId, activation: Activation) -> Result<(), Error> {
        self.neuron_mut(id)?.set_activation(activation);

        Ok(())
    }

    /// Sets the discriminant of a neuron.
    pub fn set_discriminant(
        &mut self,
        id: NeuronId,
        discriminant: Discriminant,
    ) -> Result<(), Error> {
        self.neuron_mut(id)?.set_discriminant(discriminant);

        Ok(())
    }

    /// Sets the activation function of every neuron in the layer at `index`.
    pub fn set_layer_activation(
        &mut self,
        index: usize,
        activation: Activation,
    ) -> Result<(), Error> {
        let layer = self.layer(index).ok_or(Error::LayerNotFound(index))?;

        for neuron in &mut self.neurons[layer.range()] {
            neuron.set_activation(activation);
        }

        Ok(())
    }

    /// Sets the outputs of the input layer (layer zero) to `inputs`.
    pub fn set_inputs(&mut self, inputs: &[T]) -> Result<(), Error> {
        let layer = self.layer(0).ok_or(Error::LayerNotFound(0))?;

        if inputs.len() != layer.num_neurons() {
            return Err(Error::InputCountMismatch {
                expected: layer.num_neurons(),
                got: inputs.len(),
            });
        }

        for (neuron, &input) in self.neurons[layer.range()].iter_mut().zip(inputs) {
            neuron.set_output(input);
        }

        Ok(())
    }

    /// Returns the outputs of the neurons in the last layer. Empty if there are no layers.
    pub fn outputs(&self) -> Vec<T> {
        self.layers
            .last()
            .map(|layer| {
                self.neurons[layer.range()]
                    .iter()
                    .map(Neuron::output)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Propagates values through the network, from the input layer to the output layer.
    ///
    /// Layers are processed in order, skipping layer zero, whose outputs must have been set by the
    /// caller. Each neuron's output becomes its activation function applied to the combination of
    /// its connections' outputs and weights. Every non-input neuron is computed exactly once.
    ///
    /// # Panics
    ///
    /// The network must be fully wired: a neuron with an unset connection slot, or a connection to a
    /// neuron that is not in an earlier layer, causes a panic. Cycles cannot be formed without
    /// breaking the latter rule.
    pub fn feedforward(&mut self) {
        for (index, &layer) in self.layers.iter().enumerate().skip(1) {
            evaluate::propagate_layer(&mut self.neurons, layer);
            log::trace!("propagated layer {} ({} neurons)", index, layer.num_neurons());
        }
    }

    /// Sets the inputs, propagates, and returns the outputs of the network.
    ///
    /// Unlike [`feedforward`][Self::feedforward], this first runs
    /// [`check_layers`][Self::check_layers], so a neuron that belongs to no layer is reported
    /// instead of being skipped.
    pub fn evaluate(&mut self, inputs: &[T]) -> Result<Vec<T>, Error> {
        self.check_layers()?;
        self.set_inputs(inputs)?;
        self.feedforward();

        Ok(self.outputs())
    }

    /// Initializes every allocated weight according to `config`.
    ///
    /// If `initial_weights_randomization` is enabled, each weight is drawn uniformly from
    /// [`DEFAULT_WEIGHT_RANGE`]. Otherwise the weights are left as they are.
    pub fn initialize_weights<R: Rng + ?Sized>(
        &mut self,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<(), Error> {
        if !config.initial_weights_randomization {
            return Ok(());
        }

        let (min, max) = DEFAULT_WEIGHT_RANGE;
        let min = T::from(min).ok_or(Error::Arithmetic)?;
        let max = T::from(max).ok_or(Error::Arithmetic)?;

        self.randomize_weights(min, max, rng)
    }

    /// Sets every allocated weight to a uniformly random value in `min..max`.
    pub fn randomize_weights<R: Rng + ?Sized>(
        &mut self,
        min: T,
        max: T,
        rng: &mut R,
    ) -> Result<(), Error> {
        // Also rejects NaN bounds
        if !(min < max) {
            return Err(Error::InvalidWeightRange);
        }

        let span = max - min;
        let num_weights: usize = self.neurons.iter().map(Neuron::num_inputs).sum();
        let samples = (0..num_weights)
            .map(|_| T::from(math::rnd_with(rng)).map(|r| min + span * r))
            .collect::<Option<Vec<T>>>()
            .ok_or(Error::Arithmetic)?;

        let weights = self
            .neurons
            .iter_mut()
            .flat_map(|neuron| neuron.weights_mut().iter_mut());
        for (weight, sample) in weights.zip(samples) {
            *weight = sample;
        }

        log::debug!("randomized {} weights", num_weights);

        Ok(())
    }

    /// Removes all neurons and layers, returning the network to the state of
    /// [`new`][Self::new].
    pub fn clear(&mut self) {
        self.neurons = Vec::new();
        self.layers = Vec::new();
    }
}

#[cfg(feature = "rayon")]
impl<T: Float + Send + Sync> Network<T> {
    /// Like [`feedforward`][Self::feedforward], but evaluates the neurons of each layer in parallel.
    /// Each layer is finished before the next one starts.
    pub fn par_feedforward(&mut self) {
        for (index, &layer) in self.layers.iter().enumerate().skip(1) {
            evaluate::par_propagate_layer(&mut self.neurons, layer);
            log::trace!("propagated layer {} ({} neurons)", index, layer.num_neurons());
        }
    }
}

impl<T: Float> Index<NeuronId> for Network<T> {
    type Output = Neuron<T>;
    fn index(&self, id: NeuronId) -> &Self::Output {
        &self.neurons[id.as_usize()]
    }
}
