//! Property-based tests across the re-exported crates

use crate::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn flatten_then_reshape_restores_convolution(
        data in prop::collection::vec(-50i32..50, 24),
        kernel in prop::collection::vec(-5i32..5, 4),
    ) {
        let tensor = Tensor::from_vec(data, &[4, 6]).unwrap();
        let kernel = Tensor::from_vec(kernel, &[2, 2]).unwrap();
        let expected = convolve_new(&tensor, &kernel, 1).unwrap();

        let mut roundtrip = tensor.clone();
        roundtrip.flatten();
        roundtrip.reshape(&[4, 6]).unwrap();
        prop_assert_eq!(convolve_new(&roundtrip, &kernel, 1).unwrap(), expected);
    }

    #[test]
    fn network_loss_against_itself_is_zero(data in prop::collection::vec(-1.0f64..1.0, 16)) {
        let input = Tensor::from_vec(data, &[4, 4]).unwrap();
        let mut network = Network::new();
        network
            .add_layer(ConvolutionLayer::new(Tensor::<f64>::full(&[3, 3], 0.5).unwrap(), 1).unwrap())
            .add_layer(ActivationLayer::tanh());

        let output = network.forward(&input).unwrap();
        prop_assert_eq!(mse(&output, &output).unwrap(), 0.0);
        prop_assert_eq!(mad(&output, &output).unwrap(), 0.0);
        prop_assert!(output.iter().all(|x| (-1.0..=1.0).contains(x)));
    }
}
