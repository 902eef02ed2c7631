//! Integration tests for toco-kernels with toco-core
//!
//! These tests verify that convolution and loss kernels work correctly on
//! tensors built and manipulated through toco-core.

use anyhow::Result;
use toco_core::{elementwise, ErrorKind, Tensor, TensorError};
use toco_kernels::{convolve, convolve_new, huber_loss, mad, mse, output_extents, sad};

#[test]
fn test_convolution_after_reshape() -> Result<()> {
    // A flat buffer reshaped into the 3x3 image
    let mut tensor = Tensor::from_vec(vec![12, 5, -34, 6, 12, -4, -7, 56, 98], &[9])?;
    tensor.reshape(&[3, 3])?;
    let kernel = Tensor::from_vec(vec![6, -2, 3, -7], &[2, 2])?;

    let mut destination = Tensor::<i32>::zeros(&[2, 2])?;
    convolve(&tensor, &kernel, &mut destination, 1)?;
    assert_eq!(destination.as_slice(), &[-4, 162, -401, -438]);

    destination.flatten();
    assert_eq!(destination.shape(), &[4]);
    Ok(())
}

#[test]
fn test_network_style_convolution_float() -> Result<()> {
    let tensor = Tensor::from_vec(
        vec![
            1.0f64, 7.0, 9.0, 2.3, 4.0, 1.8, 6.5, 4.5, 3.0, 3.4, 7.3, 8.7, 1.2, 1.6, 1.4, 2.3,
        ],
        &[4, 4],
    )?;
    let kernel = Tensor::from_vec(vec![1.0, 3.4, 1.1, 8.4, 7.6, 3.2, 3.7, 4.0, 5.1], &[3, 3])?;

    let out = convolve_new(&tensor, &kernel, 1)?;
    let expected = [164.71, 205.2, 109.65, 163.98];
    assert_eq!(out.shape(), &[2, 2]);
    for (got, want) in out.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{} vs {}", got, want);
    }
    Ok(())
}

#[test]
fn test_convolution_3d_volume() -> Result<()> {
    // 3x3x3 volume of ones with a 2x2x2 kernel of ones: every output is 8
    let volume = Tensor::<f32>::ones(&[3, 3, 3])?;
    let kernel = Tensor::<f32>::ones(&[2, 2, 2])?;
    let extents = output_extents(volume.shape(), kernel.shape(), 1)?;
    assert_eq!(&extents[..], &[2, 2, 2]);

    let mut out = Tensor::zeros(&extents)?;
    convolve(&volume, &kernel, &mut out, 1)?;
    assert!(out.iter().all(|&x| x == 8.0));
    Ok(())
}

#[test]
fn test_destination_too_small_keeps_sentinel() -> Result<()> {
    let tensor = Tensor::from_vec(vec![5, -4, 43, -17, 0], &[5])?;
    let kernel = Tensor::from_vec(vec![3, -17], &[2])?;
    let mut destination = Tensor::full(&[3], 777)?;

    let err = convolve(&tensor, &kernel, &mut destination, 1).unwrap_err();
    assert_eq!(err, TensorError::destination_too_small(0, 4, 3));
    assert_eq!(destination.as_slice(), &[777, 777, 777]);
    Ok(())
}

#[test]
fn test_losses_on_convolution_output() -> Result<()> {
    let tensor = Tensor::from_vec((0..16).map(|x| x as f64).collect(), &[4, 4])?;
    let kernel = Tensor::full(&[2, 2], 0.25)?;
    let smoothed = convolve_new(&tensor, &kernel, 2)?;
    assert_eq!(smoothed.as_slice(), &[2.5, 4.5, 10.5, 12.5]);

    let mut target = smoothed.clone();
    elementwise::scalar_apply_assign(&mut target, 1.0, toco_core::BinaryOp::Add)?;

    assert_eq!(mse(&smoothed, &target)?, 1.0);
    assert_eq!(sad(&smoothed, &target)?, 4.0);
    assert_eq!(mad(&smoothed, &target)?, 1.0);
    assert_eq!(huber_loss(&smoothed, &target, 2.0)?, 2.0);
    Ok(())
}

#[test]
fn test_errors_are_typed() {
    let tensor = Tensor::<i32>::ones(&[3, 3]).unwrap();
    let kernel = Tensor::<i32>::ones(&[3]).unwrap();
    let mut destination = Tensor::<i32>::zeros(&[1, 1]).unwrap();

    let err = convolve(&tensor, &kernel, &mut destination, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RankMismatch);
    assert!(err.to_string().contains("convolve"));
}
