//! Integration tests for the toco facade

use anyhow::Result;
use toco::prelude::*;

#[test]
fn test_prelude_covers_a_full_pipeline() -> Result<()> {
    let mut image = Tensor::from_vec(vec![12, 5, -34, 6, 12, -4, -7, 56, 98], &[9])?;
    image.reshape(&[3, 3])?;
    let kernel = Tensor::from_vec(vec![6, -2, 3, -7], &[2, 2])?;

    let extents = output_extents(image.shape(), kernel.shape(), 1)?;
    let mut response = Tensor::zeros(&extents)?;
    convolve(&image, &kernel, &mut response, 1)?;
    assert_eq!(response.as_slice(), &[-4, 162, -401, -438]);
    assert_eq!(response.arg_min(), 3);
    assert_eq!(response.arg_max(), 1);

    let mut clamped = Tensor::zeros(&extents)?;
    elementwise::clamp(&response, &mut clamped, -100, 100)?;
    assert_eq!(clamped.as_slice(), &[-4, 100, -100, -100]);
    Ok(())
}

#[test]
fn test_errors_convert_into_anyhow() {
    fn run() -> Result<()> {
        let a = Tensor::<f32>::ones(&[2, 2])?;
        let b = Tensor::<f32>::ones(&[4])?;
        mse(&a, &b)?;
        Ok(())
    }

    let err = run().unwrap_err();
    let tensor_err = err.downcast_ref::<TensorError>().expect("tensor error");
    assert_eq!(tensor_err.kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn test_crate_modules_are_reachable() -> Result<()> {
    let tensor = toco::core::Tensor::<f64>::ones(&[2, 2])?;
    let layer = toco::nn::ActivationLayer::sigmoid();
    let mut network = toco::nn::Network::new();
    network.add_layer(layer);
    let out = network.forward(&tensor)?;
    assert!((toco::kernels::sad(&tensor, &out)? - 4.0 * (1.0 - 0.7310585786300049)).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_tracing_config_format_parse() {
    assert_eq!(TracingFormat::parse("compact"), TracingFormat::Compact);
    let config = TracingConfig {
        format: TracingFormat::Json,
        ..TracingConfig::default()
    };
    assert_eq!(config.format, TracingFormat::Json);
}
