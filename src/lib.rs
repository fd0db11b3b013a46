//! Layered feed-forward neural networks. The [`Network`] struct owns its neurons and layers, has
//! methods for building the network incrementally, and evaluates it by propagating values from the
//! input layer to the output layer.
//!
//! # Examples
//!
//! ```
//! use ffnet::{Activation, Network, NetworkConfig, NeuronId};
//!
//! // A 2-2-1 network
//! let mut network = Network::<f64>::new();
//! network.set_layout(&[2, 2, 1]).unwrap();
//!
//! // Fully connect the hidden and output layers to the layer before them
//! for (target, sources) in [(2, [0, 1]), (3, [0, 1]), (4, [2, 3])].iter() {
//!     let target = NeuronId::new(*target);
//!     network.set_connection_count(target, 2).unwrap();
//!     for (slot, &source) in sources.iter().enumerate() {
//!         network.connect(target, slot, NeuronId::new(source), 0.0).unwrap();
//!     }
//! }
//! network.set_layer_activation(1, Activation::Tanh).unwrap();
//!
//! // Draw initial weights as requested by the config
//! let config = NetworkConfig::default();
//! network
//!     .initialize_weights(&config, &mut rand::thread_rng())
//!     .unwrap();
//!
//! // Set the inputs, propagate, and read the output layer
//! let output = network.evaluate(&[1.0, 2.0]).unwrap();
//! assert_eq!(1, output.len());
//! ```

// Neuron storage is only ever resized through `Network`, which replaces it wholesale. Everything
// else refers to neurons by index, so no reference into the storage outlives a resize.

pub mod activation;
pub mod config;
pub mod layer;
pub mod math;
pub mod network;
pub mod neuron;

pub use self::activation::{activation, Activation};
pub use self::config::{ErrorType, NetworkConfig};
pub use self::layer::Layer;
pub use self::network::Network;
pub use self::neuron::{Discriminant, Neuron, NeuronId};
