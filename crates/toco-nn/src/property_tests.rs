//! Property-based tests for layers and networks

use super::*;
use proptest::prelude::*;
use toco_core::{ActivationKind, Tensor};
use toco_kernels::convolve_new;

fn vector(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, len)
}

proptest! {
    #[test]
    fn network_of_one_convolution_matches_kernel(
        (data, kernel, stride) in (3usize..8, 1usize..4, 1usize..3)
            .prop_flat_map(|(n, k, s)| (vector(n * n), vector(k * k), Just(s)))
    ) {
        let n = (data.len() as f64).sqrt() as usize;
        let k = (kernel.len() as f64).sqrt() as usize;
        let input = Tensor::from_vec(data, &[n, n]).unwrap();
        let kernel = Tensor::from_vec(kernel, &[k, k]).unwrap();

        let expected = convolve_new(&input, &kernel, stride).unwrap();
        let mut network = Network::new();
        network.add_layer(ConvolutionLayer::new(kernel, stride).unwrap());

        prop_assert_eq!(network.forward(&input).unwrap(), expected);
    }

    #[test]
    fn activation_layers_keep_shape_and_input(data in vector(12), alpha in 0.0f64..1.0) {
        let input = Tensor::from_vec(data, &[3, 4]).unwrap();
        let mut network = Network::new();
        network
            .add_layer(ActivationLayer::leaky_relu(alpha))
            .add_layer(ActivationLayer::sigmoid());

        let output = network.forward(&input).unwrap();
        prop_assert_eq!(output.shape(), input.shape());
        prop_assert!(output.iter().all(|&x| (0.0..=1.0).contains(&x)));

        let mut direct = input.clone();
        direct.activate(ActivationKind::LeakyReLU, alpha);
        direct.activate(ActivationKind::Sigmoid, 0.0);
        prop_assert_eq!(output, direct);
    }

    #[test]
    fn relu_network_output_is_non_negative(data in prop::collection::vec(-100i32..100, 9)) {
        let input = Tensor::from_vec(data, &[9]).unwrap();
        let mut network = Network::new();
        network
            .add_layer(ConvolutionLayer::new(Tensor::from_vec(vec![1, -1], &[2]).unwrap(), 1).unwrap())
            .add_layer(ActivationLayer::relu());

        let output = network.forward(&input).unwrap();
        prop_assert_eq!(output.len(), 8);
        prop_assert!(output.iter().all(|&x| x >= 0));
    }
}
