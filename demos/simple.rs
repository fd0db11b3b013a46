//! An example of configuring, building, and evaluating a network. Requires the `json` feature.

use ffnet::{Activation, Network, NetworkConfig, NeuronId};

fn main() {
    // Read the setup options
    let config = NetworkConfig::load_str(
        r#"{
            "initial_weights_randomization": true,
            "error_type": "l2"
        }"#,
    )
    .unwrap();
    println!("config: {:?}", config);

    // Build a 2-2-1 network
    let mut network = Network::<f64>::new();
    network.set_layout(&[2, 2, 1]).unwrap();

    for &(target, sources) in &[(2, [0, 1]), (3, [0, 1]), (4, [2, 3])] {
        let target = NeuronId::new(target);
        network.set_connection_count(target, 2).unwrap();
        for (slot, &source) in sources.iter().enumerate() {
            network
                .connect(target, slot, NeuronId::new(source), 0.0)
                .unwrap();
        }
    }
    network.set_layer_activation(1, Activation::Tanh).unwrap();
    network.set_layer_activation(2, Activation::Exp).unwrap();

    network
        .initialize_weights(&config, &mut rand::thread_rng())
        .unwrap();

    // Use the network
    let samples = [([0.0, 0.0], 0.0), ([0.0, 1.0], 1.0), ([1.0, 0.0], 1.0), ([1.0, 1.0], 0.0)];
    let mut outputs = Vec::new();
    let mut targets = Vec::new();
    for (inputs, target) in &samples {
        let output = network.evaluate(inputs).unwrap();
        println!("{:?} -> {:?}", inputs, output);
        outputs.push(output[0]);
        targets.push(*target);
    }

    let error = config.error_type.evaluate(&outputs, &targets).unwrap();
    println!("{:?} error: {}", config.error_type, error);

    // Save the options next to the other outputs
    config.to_file("demo_output/config.json", true).unwrap();
}
