//! Basic convolution example for TO-Core
//!
//! This example demonstrates:
//! - Creating and reshaping tensors
//! - Sizing a convolution output
//! - 1D, 2D and strided convolution
//! - Statistics and loss metrics on the result
//!
//! Run with `RUST_LOG=toco_kernels=debug` to see the kernel events.

use toco::prelude::*;

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("TO-Core - Basic Convolution Example");
    println!("===================================\n");

    // Example 1: 1D signal
    println!("1. One-dimensional convolution");
    println!("------------------------------");

    let signal = Tensor::from_vec(vec![5, -4, 43, -17, 0], &[5])?;
    let kernel = Tensor::from_vec(vec![3, -17], &[2])?;
    let response = convolve_new(&signal, &kernel, 1)?;
    println!("{}\n", response);

    // Example 2: 2D image from a flat buffer
    println!("2. Two-dimensional convolution");
    println!("------------------------------");

    let mut image = Tensor::from_vec(vec![12, 5, -34, 6, 12, -4, -7, 56, 98], &[9])?;
    image.reshape(&[3, 3])?;
    let kernel = Tensor::from_vec(vec![6, -2, 3, -7], &[2, 2])?;

    let extents = output_extents(image.shape(), kernel.shape(), 1)?;
    let mut destination = Tensor::zeros(&extents)?;
    convolve(&image, &kernel, &mut destination, 1)?;
    println!("{}", destination);
    println!(
        "arg min = {}, arg max = {}\n",
        destination.arg_min(),
        destination.arg_max()
    );

    // Example 3: strided smoothing of a float ramp
    println!("3. Strided convolution");
    println!("----------------------");

    let ramp = Tensor::from_vec((0..36).map(f64::from).collect(), &[6, 6])?;
    let box_filter = Tensor::full(&[2, 2], 0.25)?;
    let pooled = convolve_new(&ramp, &box_filter, 2)?;
    println!("{}", pooled);
    println!(
        "mean = {:.3}, variance = {:.3}, std = {:.3}\n",
        pooled.mean(),
        pooled.variance(),
        pooled.standard_deviation()
    );

    // Example 4: compare against a shifted target
    println!("4. Loss metrics");
    println!("---------------");

    let mut target = pooled.clone();
    elementwise::scalar_apply_assign(&mut target, 0.5, BinaryOp::Add)?;
    println!("MSE   = {:.4}", mse(&pooled, &target)?);
    println!("SAD   = {:.4}", sad(&pooled, &target)?);
    println!("MAD   = {:.4}", mad(&pooled, &target)?);
    println!("Huber = {:.4}", huber_loss(&pooled, &target, 1.0)?);

    // Example 5: errors are values
    println!("\n5. Error handling");
    println!("-----------------");

    let mut too_small = Tensor::<i32>::zeros(&[1, 1])?;
    match convolve(&image, &kernel, &mut too_small, 1) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("{:?}: {}", e.kind(), e),
    }

    Ok(())
}
