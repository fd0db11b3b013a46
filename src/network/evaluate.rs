//! Evaluation of networks.

use num_traits::Float;

use crate::layer::Layer;
use crate::neuron::Neuron;

/// Computes the output of every neuron in `layer`.
///
/// Neurons only read the outputs of neurons before the start of the layer, which are all final by
/// the time the layer is reached when layers are processed in order.
pub fn propagate_layer<T: Float>(neurons: &mut [Neuron<T>], layer: Layer) {
    let (sources, rest) = neurons.split_at_mut(layer.start());

    for neuron in &mut rest[..layer.num_neurons()] {
        let value = neuron.compute(sources);
        neuron.set_output(value);
    }
}

/// Like [`propagate_layer`], but computes the neurons of the layer in parallel. Returns once every
/// neuron of the layer is done.
#[cfg(feature = "rayon")]
pub fn par_propagate_layer<T: Float + Send + Sync>(neurons: &mut [Neuron<T>], layer: Layer) {
    use rayon::prelude::*;

    let (sources, rest) = neurons.split_at_mut(layer.start());
    let sources = &*sources;

    rest[..layer.num_neurons()]
        .par_iter_mut()
        .for_each(|neuron| {
            let value = neuron.compute(sources);
            neuron.set_output(value);
        });
}
