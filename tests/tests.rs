use assert_approx_eq::assert_approx_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ffnet::network::Error;
use ffnet::{activation, Activation, Layer, Network, NetworkConfig, NeuronId};

fn id(id: usize) -> NeuronId {
    NeuronId::new(id)
}

/// Builds a 2-2-1 network by hand, the way it would be wired without `set_layout`.
fn build_2_2_1() -> Network {
    let mut network = Network::new();

    network.set_neuron_count(5).unwrap();
    network.set_layer_count(3).unwrap();
    network.set_layer(0, 0, 2).unwrap();
    network.set_layer(1, 2, 2).unwrap();
    network.set_layer(2, 4, 1).unwrap();

    for target in 2..4 {
        network.set_connection_count(id(target), 2).unwrap();
        network.connect(id(target), 0, id(0), 0.0).unwrap();
        network.connect(id(target), 1, id(1), 0.0).unwrap();
    }
    network.set_connection_count(id(4), 2).unwrap();
    network.connect(id(4), 0, id(2), 0.0).unwrap();
    network.connect(id(4), 1, id(3), 0.0).unwrap();

    network
}

#[test]
fn test_topology() {
    let network = build_2_2_1();

    assert_eq!(5, network.num_neurons());
    assert_eq!(3, network.num_layers());
    assert_eq!(
        vec![2, 2, 1],
        network
            .layers()
            .iter()
            .map(Layer::num_neurons)
            .collect::<Vec<_>>()
    );
    assert_eq!(2, network[id(4)].num_inputs());
    assert_eq!(&[Some(id(2)), Some(id(3))], network[id(4)].connections());
}

#[test]
fn test_propagation() {
    let mut network = build_2_2_1();

    network.set_weights(id(2), &[1.0, 1.0]).unwrap();
    network.set_weights(id(3), &[1.0, -1.0]).unwrap();
    network.set_weights(id(4), &[1.0, 1.0]).unwrap();

    network.set_output(id(0), 1.0).unwrap();
    network.set_output(id(1), 2.0).unwrap();
    network.feedforward();

    assert_approx_eq!(3.0, network[id(2)].output());
    assert_approx_eq!(-1.0, network[id(3)].output());
    assert_approx_eq!(2.0, network[id(4)].output());
    assert_eq!(vec![network[id(4)].output()], network.outputs());
}

#[test]
fn test_propagation_with_activations() {
    let mut network = build_2_2_1();
    network.set_weights(id(2), &[1.0, 1.0]).unwrap();
    network.set_weights(id(3), &[1.0, -1.0]).unwrap();
    network.set_weights(id(4), &[0.5, 2.0]).unwrap();
    network.set_layer_activation(1, Activation::Tanh).unwrap();
    network.set_activation(id(4), Activation::Exp).unwrap();

    let output = network.evaluate(&[1.0, 2.0]).unwrap();

    let h0 = activation(Activation::Tanh, 3.0);
    let h1 = activation(Activation::Tanh, -1.0);
    assert_approx_eq!(activation(Activation::Exp, 0.5 * h0 + 2.0 * h1), output[0]);
}

#[test]
fn test_rewire_after_resize() {
    let mut network = build_2_2_1();
    let ptr = network.neurons().as_ptr();

    // Same size keeps everything
    network.set_neuron_count(5).unwrap();
    network.set_layer_count(3).unwrap();
    assert_eq!(ptr, network.neurons().as_ptr());
    assert_eq!(Some(id(2)), network[id(4)].connection(0));

    // A different size drops all wiring, which must then be rebuilt
    network.set_neuron_count(3).unwrap();
    assert!(network.layers().iter().all(Layer::is_empty));
    assert!(network.neurons().iter().all(|n| n.num_inputs() == 0));

    network.set_layout(&[2, 1]).unwrap();
    network.set_connection_count(id(2), 2).unwrap();
    network.connect(id(2), 0, id(0), 1.0).unwrap();
    network.connect(id(2), 1, id(1), 1.0).unwrap();
    assert_approx_eq!(7.0, network.evaluate(&[3.0, 4.0]).unwrap()[0]);
}

#[test]
fn test_invalid_arguments_leave_network_untouched() {
    let mut network = build_2_2_1();
    let old = network.clone();

    assert_eq!(Err(Error::InvalidNeuronCount), network.set_neuron_count(0));
    assert_eq!(Err(Error::InvalidLayerCount), network.set_layer_count(0));
    assert_eq!(
        Err(Error::InvalidConnectionCount(id(4))),
        network.set_connection_count(id(4), 0)
    );
    assert_eq!(
        Err(Error::NeuronNotFound(id(5))),
        network.set_connection_count(id(5), 2)
    );
    assert_eq!(old, network);
}

#[test]
fn test_initialization_is_seeded() {
    let config = NetworkConfig::default();

    let mut a = build_2_2_1();
    let mut b = build_2_2_1();
    a.initialize_weights(&config, &mut StdRng::seed_from_u64(5))
        .unwrap();
    b.initialize_weights(&config, &mut StdRng::seed_from_u64(5))
        .unwrap();
    assert_eq!(a, b);

    let inputs = [0.25, -0.75];
    assert_eq!(a.evaluate(&inputs).unwrap(), b.evaluate(&inputs).unwrap());
}

#[test]
fn test_error_of_outputs() {
    let mut network = build_2_2_1();
    for target in 2..5 {
        network.set_weights(id(target), &[1.0, 1.0]).unwrap();
    }

    let output = network.evaluate(&[1.0, 1.0]).unwrap();
    let config = NetworkConfig::default();
    assert_approx_eq!(1.0, config.error_type.evaluate(&output, &[3.0]).unwrap());
}

#[test]
fn test_f32_network() {
    let mut network = Network::<f32>::new();
    network.set_layout(&[1, 1]).unwrap();
    network.set_connection_count(id(1), 1).unwrap();
    network.connect(id(1), 0, id(0), 2.0).unwrap();
    network.set_activation(id(1), Activation::Pol2).unwrap();

    assert_approx_eq!(7.0f32, network.evaluate(&[1.0]).unwrap()[0]);
}

#[test]
fn test_layers_cover_every_neuron() {
    let mut network = Network::<f64>::new();
    network.set_neuron_count(3).unwrap();
    network.set_layer_count(2).unwrap();
    network.set_layer(0, 0, 1).unwrap();

    // Leaving neuron 1 out of every layer is rejected
    assert_eq!(
        Err(Error::UncoveredNeurons { start: 1, end: 2 }),
        network.set_layer(1, 2, 1)
    );
    assert_eq!(Err(Error::EmptyLayer(1)), network.evaluate(&[5.0]));

    network.set_layer(1, 1, 2).unwrap();
    for target in 1..3 {
        network.set_connection_count(id(target), 1).unwrap();
        network.connect(id(target), 0, id(0), 1.0).unwrap();
    }
    assert_eq!(vec![5.0, 5.0], network.evaluate(&[5.0]).unwrap());
}

#[test]
fn test_ids_stay_in_place() {
    let mut network = build_2_2_1();
    network.set_output(id(0), 4.0).unwrap();
    network.set_weights(id(2), &[2.0, 3.0]).unwrap();
    network.set_activation(id(3), Activation::Tanh).unwrap();
    network.evaluate(&[1.0, 1.0]).unwrap();

    for (position, neuron) in network.neurons().iter().enumerate() {
        assert_eq!(id(position), neuron.id());
        assert_eq!(id(position), network[id(position)].id());
    }
}
