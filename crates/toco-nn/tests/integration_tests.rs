//! End-to-end network tests across toco-core, toco-kernels and toco-nn

use anyhow::Result;
use std::sync::Arc;
use toco_core::{ErrorKind, Tensor};
use toco_kernels::{mse, output_extents};
use toco_nn::{ActivationLayer, ConvolutionLayer, DestinationPolicy, Network};

fn image() -> Result<Tensor<f64>> {
    Ok(Tensor::from_vec(
        vec![
            1.0, 7.0, 9.0, 2.3, 4.0, 1.8, 6.5, 4.5, 3.0, 3.4, 7.3, 8.7, 1.2, 1.6, 1.4, 2.3,
        ],
        &[4, 4],
    )?)
}

fn kernel() -> Result<Tensor<f64>> {
    Ok(Tensor::from_vec(
        vec![1.0, 3.4, 1.1, 8.4, 7.6, 3.2, 3.7, 4.0, 5.1],
        &[3, 3],
    )?)
}

#[test]
fn test_fixed_destinations_through_two_layers() -> Result<()> {
    let first = ConvolutionLayer::new(kernel()?, 1)?.with_destination(Tensor::zeros(&[2, 2])?);
    let second = ConvolutionLayer::builder()
        .kernel(Tensor::from_vec(vec![6.0, 9.9, 3.2, 5.3], &[2, 2])?)
        .destination(DestinationPolicy::Fixed(Tensor::zeros(&[1, 1])?))
        .build()?;

    let mut network = Network::new();
    network.add_layer(first).add_layer(second);

    let out = network.forward(&image()?)?;
    assert_eq!(out.shape(), &[1, 1]);
    assert!((out.as_slice()[0] - 4239.714).abs() < 1e-9);

    // Running again overwrites the same destinations with the same result
    let again = network.forward(&image()?)?;
    assert_eq!(again, out);
    Ok(())
}

#[test]
fn test_sigmoid_over_ramp() -> Result<()> {
    let input = Tensor::from_vec((0..9).map(f64::from).collect(), &[3, 3])?;
    let mut network = Network::new();
    network.add_layer(ActivationLayer::sigmoid());

    let out = network.forward(&input)?;
    let expected = [
        0.5, 0.731059, 0.880797, 0.952574, 0.982014, 0.993307, 0.997527, 0.999089, 0.999665,
    ];
    for (got, want) in out.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{} vs {}", got, want);
    }
    Ok(())
}

#[test]
fn test_shared_kernel_between_networks() -> Result<()> {
    let shared = Arc::new(kernel()?);
    let mut plain = Network::new();
    plain.add_layer(ConvolutionLayer::new(Arc::clone(&shared), 1)?);

    let mut squashed = Network::new();
    squashed
        .add_layer(ConvolutionLayer::new(Arc::clone(&shared), 1)?)
        .add_layer(ActivationLayer::tanh());

    let raw = plain.forward(&image()?)?;
    let squashed_out = squashed.forward(&image()?)?;
    assert_eq!(raw.shape(), squashed_out.shape());
    assert!(squashed_out.iter().all(|&x| x == 1.0));
    assert!(mse(&raw, &squashed_out)? > 1.0);
    Ok(())
}

#[test]
fn test_deferred_layer_in_float_network() -> Result<()> {
    let mut network = Network::new();
    network
        .add_layer(ConvolutionLayer::new(kernel()?, 1)?.deferred())
        .add_layer(ActivationLayer::leaky_relu(0.5));

    let extents = output_extents(&[4, 4], &[3, 3], 1)?;
    let out = network.forward_with_destinations(&image()?, [Tensor::zeros(&extents)?])?;
    let expected = [164.71, 205.2, 109.65, 163.98];
    for (got, want) in out.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9);
    }

    let err = network.forward(&image()?).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    Ok(())
}

#[test]
fn test_rank_mismatch_surfaces_from_network() -> Result<()> {
    let mut network = Network::new();
    network.add_layer(ConvolutionLayer::new(Tensor::<i32>::ones(&[2])?, 1)?);

    let err = network.forward(&Tensor::<i32>::ones(&[3, 3])?).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RankMismatch);
    Ok(())
}

#[test]
fn test_strided_integer_network() -> Result<()> {
    let input = Tensor::from_vec((1..=16).collect(), &[4, 4])?;
    let mut network = Network::new();
    network
        .add_layer(ConvolutionLayer::new(Tensor::<i32>::ones(&[2, 2])?, 2)?)
        .add_layer(ActivationLayer::leaky_relu(0.5));

    let out = network.forward(&input)?;
    assert_eq!(out.shape(), &[2, 2]);
    // 1+2+5+6, 3+4+7+8, 9+10+13+14, 11+12+15+16
    assert_eq!(out.as_slice(), &[14, 22, 46, 54]);
    Ok(())
}
