//! Sequential network example for TO-Core
//!
//! This example demonstrates:
//! - Building a network of convolution and activation layers
//! - Sharing a kernel between layers
//! - Fixed and deferred destinations

use std::sync::Arc;
use toco::prelude::*;

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("TO-Core - Sequential Network Example");
    println!("====================================\n");

    let input = Tensor::from_vec(
        vec![
            1.0, 7.0, 9.0, 2.3, 4.0, 1.8, 6.5, 4.5, 3.0, 3.4, 7.3, 8.7, 1.2, 1.6, 1.4, 2.3,
        ],
        &[4, 4],
    )?;
    let kernel = Arc::new(Tensor::from_vec(
        vec![1.0, 3.4, 1.1, 8.4, 7.6, 3.2, 3.7, 4.0, 5.1],
        &[3, 3],
    )?);

    // Example 1: convolution then sigmoid
    println!("1. Convolution + sigmoid");
    println!("------------------------");

    let mut network = Network::new();
    network
        .add_layer(ConvolutionLayer::new(Arc::clone(&kernel), 1)?)
        .add_layer(ActivationLayer::sigmoid());
    println!("{}\n", network.forward(&input)?);

    // Example 2: two convolutions writing into fixed destinations
    println!("2. Chained convolutions");
    println!("-----------------------");

    let mut chained = Network::new();
    chained
        .add_layer(ConvolutionLayer::new(Arc::clone(&kernel), 1)?.with_destination(Tensor::zeros(&[2, 2])?))
        .add_layer(ConvolutionLayer::new(
            Tensor::from_vec(vec![6.0, 9.9, 3.2, 5.3], &[2, 2])?,
            1,
        )?);
    println!("{}\n", chained.forward(&input)?);

    // Example 3: destination supplied by the caller
    println!("3. Deferred destination");
    println!("-----------------------");

    let mut deferred = Network::new();
    deferred
        .add_layer(ConvolutionLayer::new(Arc::clone(&kernel), 1)?.deferred())
        .add_layer(ActivationLayer::leaky_relu(0.01));
    let destination = Tensor::zeros(&output_extents(input.shape(), kernel.shape(), 1)?)?;
    let output = deferred.forward_with_destinations(&input, [destination])?;
    println!("{}", output);

    if let Err(e) = deferred.forward(&input) {
        println!("without a destination: {}", e);
    }

    Ok(())
}
