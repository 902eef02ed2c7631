//! Integration tests for toco-core
//!
//! These tests verify end-to-end functionality and cross-module interactions.

use anyhow::Result;
use scirs2_core::ndarray_ext::{Array, IxDyn};
use toco_core::{elementwise, ActivationKind, BinaryOp, ErrorKind, Tensor};

#[test]
fn test_create_reshape_index_roundtrip() -> Result<()> {
    let mut tensor = Tensor::<i32>::create(3, &[2, 3, 4])?;
    for (i, x) in tensor.iter_mut().enumerate() {
        *x = i as i32;
    }

    // Multi-index through the jump table lands on the same element as the flat index
    let jumps = tensor.jump_table()?;
    assert_eq!(tensor[&[1, 2, 3]] as usize, jumps[0] + 2 * jumps[1] + 3 * jumps[2]);

    tensor.reshape(&[4, 6])?;
    assert_eq!(tensor[&[3, 5]], 23);
    tensor.reshape(&[2, 3, 4])?;
    assert_eq!(tensor[&[1, 2, 3]], 23);
    Ok(())
}

#[test]
fn test_elementwise_pipeline_then_statistics() -> Result<()> {
    let a = Tensor::from_vec(vec![2.0f64, 4.0, 6.0, 8.0], &[2, 2])?;
    let b = Tensor::full(&[2, 2], 2.0)?;
    let mut tmp = Tensor::zeros(&[2, 2])?;

    elementwise::divide(&a, &b, &mut tmp)?;
    assert_eq!(tmp.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

    elementwise::apply_assign(&mut tmp, &b, BinaryOp::Subtract)?;
    assert_eq!(tmp.as_slice(), &[-1.0, 0.0, 1.0, 2.0]);

    assert_eq!(tmp.mean(), 0.5);
    assert_eq!(tmp.arg_min(), 0);
    assert_eq!(tmp.arg_max(), 3);
    assert!((tmp.standard_deviation() - 1.25f64.sqrt()).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_failed_operations_leave_destination_untouched() -> Result<()> {
    let a = Tensor::from_vec(vec![1, 2, 3], &[3])?;
    let zeros = Tensor::<i32>::zeros(&[3])?;
    let mut dest = Tensor::full(&[3], -7)?;

    let err = elementwise::divide(&a, &zeros, &mut dest).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(dest.as_slice(), &[-7, -7, -7]);

    let wrong = Tensor::<i32>::zeros(&[1, 3])?;
    let err = elementwise::add(&a, &wrong, &mut dest).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    assert_eq!(dest.as_slice(), &[-7, -7, -7]);
    Ok(())
}

#[test]
fn test_ndarray_interop() -> Result<()> {
    let array = Array::from_shape_vec(IxDyn(&[2, 2, 2]), (0..8).map(|x| x as f32).collect())?;
    let mut tensor = Tensor::from_array(&array)?;
    tensor.activate(ActivationKind::ReLU, 0.0);

    let view = tensor.view()?;
    assert_eq!(view.shape(), &[2, 2, 2]);
    assert_eq!(view[[1, 1, 1]], 7.0);
    assert_eq!(tensor.to_array()?, array);
    Ok(())
}

#[test]
fn test_display_renders_metadata_and_data() -> Result<()> {
    let tensor = Tensor::from_vec(vec![12, 5, -34, 6, 12, -4], &[2, 3])?;
    let text = tensor.to_string();
    assert!(text.starts_with("Tensor<int32>"));
    assert!(text.contains(" > Dimensions: 2"));
    assert!(text.contains(" > Elements: 6"));
    assert!(text.ends_with("[[12, 5, -34], [6, 12, -4]]"));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_inconsistent_tensor() {
    let ok: Tensor<f64> = serde_json::from_str(r#"{"shape":[2],"data":[1.0,2.0]}"#).unwrap();
    assert_eq!(ok.shape(), &[2]);
    assert!(serde_json::from_str::<Tensor<f64>>(r#"{"shape":[3],"data":[1.0,2.0]}"#).is_err());
}
