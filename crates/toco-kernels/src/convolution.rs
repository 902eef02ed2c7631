//! N-dimensional convolution (cross-correlation) driven by jump tables
//!
//! A kernel of the same rank as the input slides over the input in steps of
//! `stride` along every axis. At each kernel position the element-wise products
//! of the overlapped region are summed into one output element.
//!
//! # Output extent
//!
//! For every axis `d`:
//!
//! ```text
//! output[d] = (tensor[d] - kernel[d]) / stride + 1
//! ```
//!
//! # Algorithm
//!
//! Two mutually recursive walks share one [`ConvolutionPlan`] holding both
//! buffers and their jump tables:
//!
//! - `move_kernel(axis, anchor)` places the kernel corner along `axis` at every
//!   `i` with `i + kernel[axis] <= tensor[axis]`, stepping by `stride`, and
//!   recurses with `anchor + i * tensor_jump[axis]`. Past the last axis the
//!   anchor addresses one output element and the dot product is started.
//! - `kernel_dot_product(axis, tensor_offset, kernel_offset, outermost)` sums
//!   the recursive products over the kernel extent on `axis`. On the last axis
//!   it computes one contiguous stripe. Only the outermost call writes to the
//!   output; inner calls return partial sums.
//!
//! Outputs are produced in row-major order over the output extents and written
//! to consecutive slots `destination[0..Π output[d]]`. A destination larger than
//! the output keeps its trailing elements unchanged.
//!
//! # Numeric semantics
//!
//! Accumulation stays in the element type. `i32` wraps on overflow; `f32` and
//! `f64` accumulate in their own precision.
//!
//! # Examples
//!
//! ```
//! use toco_core::Tensor;
//! use toco_kernels::convolve;
//!
//! let tensor = Tensor::from_vec(vec![12, 5, -34, 6, 12, -4, -7, 56, 98], &[3, 3]).unwrap();
//! let kernel = Tensor::from_vec(vec![6, -2, 3, -7], &[2, 2]).unwrap();
//! let mut destination = Tensor::<i32>::zeros(&[2, 2]).unwrap();
//!
//! convolve(&tensor, &kernel, &mut destination, 1).unwrap();
//! assert_eq!(destination.as_slice(), &[-4, 162, -401, -438]);
//! ```

use toco_core::{Element, JumpTable, Shape, Tensor, TensorError, TensorResult};
use tracing::{debug, warn};

/// Per-axis output extent of a convolution
///
/// # Errors
///
/// - [`TensorError::InvalidArgument`] if `stride == 0` or the kernel is larger
///   than the tensor on some axis
/// - [`TensorError::RankMismatch`] if the shapes differ in rank
///
/// # Examples
///
/// ```
/// use toco_kernels::output_extents;
///
/// let extents = output_extents(&[28, 28], &[5, 5], 2).unwrap();
/// assert_eq!(&extents[..], &[12, 12]);
/// ```
pub fn output_extents(
    tensor_shape: &[usize],
    kernel_shape: &[usize],
    stride: usize,
) -> TensorResult<Shape> {
    if stride == 0 {
        return Err(TensorError::invalid_argument(
            "convolve",
            "stride must be at least 1",
        ));
    }
    if tensor_shape.len() != kernel_shape.len() {
        return Err(TensorError::rank_mismatch(
            "convolve",
            tensor_shape.len(),
            kernel_shape.len(),
        ));
    }
    let mut extents = Shape::new();
    for (axis, (&t, &k)) in tensor_shape.iter().zip(kernel_shape).enumerate() {
        if k > t {
            return Err(TensorError::invalid_argument(
                "convolve",
                format!(
                    "kernel extent {} exceeds tensor extent {} on axis {}",
                    k, t, axis
                ),
            ));
        }
        extents.push((t - k) / stride + 1);
    }
    Ok(extents)
}

/// Validate every precondition of a convolution and return the output extents
fn check_convolution<T: Element>(
    tensor: &Tensor<T>,
    kernel: &Tensor<T>,
    destination: &Tensor<T>,
    stride: usize,
) -> TensorResult<Shape> {
    let extents = output_extents(tensor.shape(), kernel.shape(), stride)?;
    if destination.rank() != extents.len() {
        return Err(TensorError::shape_mismatch(
            "convolve",
            &extents,
            destination.shape(),
        ));
    }
    for (axis, (&required, &actual)) in extents.iter().zip(destination.shape()).enumerate() {
        if actual < required {
            return Err(TensorError::destination_too_small(axis, required, actual));
        }
    }
    Ok(extents)
}

/// Buffers, shapes and jump tables shared by both recursions
pub(crate) struct ConvolutionPlan<'a, T> {
    tensor: &'a [T],
    kernel: &'a [T],
    tensor_shape: &'a [usize],
    kernel_shape: &'a [usize],
    tensor_jumps: JumpTable,
    kernel_jumps: JumpTable,
    stride: usize,
}

/// Output buffer plus the index of the next element to write
pub(crate) struct OutputCursor<'a, T> {
    out: &'a mut [T],
    next: usize,
}

impl<'a, T: Element> OutputCursor<'a, T> {
    pub(crate) fn new(out: &'a mut [T]) -> Self {
        Self { out, next: 0 }
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.out[self.next] = value;
        self.next += 1;
    }
}

impl<'a, T: Element> ConvolutionPlan<'a, T> {
    pub(crate) fn new(tensor: &'a Tensor<T>, kernel: &'a Tensor<T>, stride: usize) -> TensorResult<Self> {
        Ok(Self {
            tensor: tensor.as_slice(),
            kernel: kernel.as_slice(),
            tensor_shape: tensor.shape(),
            kernel_shape: kernel.shape(),
            tensor_jumps: tensor.jump_table()?,
            kernel_jumps: kernel.jump_table()?,
            stride,
        })
    }

    #[inline]
    fn rank(&self) -> usize {
        self.tensor_shape.len()
    }

    /// Anchor offset of the kernel corner at output row `row` along axis 0
    #[cfg(feature = "parallel")]
    pub(crate) fn row_anchor(&self, row: usize) -> usize {
        row * self.stride * self.tensor_jumps[0]
    }

    /// Slide the kernel along `axis` and every axis after it
    pub(crate) fn move_kernel(&self, axis: usize, anchor: usize, cursor: &mut OutputCursor<'_, T>) {
        if axis == self.rank() {
            self.kernel_dot_product(0, anchor, 0, true, cursor);
            return;
        }
        let mut i = 0;
        while i + self.kernel_shape[axis] <= self.tensor_shape[axis] {
            self.move_kernel(axis + 1, anchor + i * self.tensor_jumps[axis], cursor);
            i += self.stride;
        }
    }

    /// Sum of products between the kernel and the tensor region at `tensor_offset`,
    /// restricted to kernel axes `axis..`
    fn kernel_dot_product(
        &self,
        axis: usize,
        tensor_offset: usize,
        kernel_offset: usize,
        outermost: bool,
        cursor: &mut OutputCursor<'_, T>,
    ) -> T {
        let sum = if axis + 1 == self.rank() {
            self.stripe(tensor_offset, kernel_offset, self.kernel_shape[axis])
        } else {
            let mut acc = T::zero();
            for i in 0..self.kernel_shape[axis] {
                let partial = self.kernel_dot_product(
                    axis + 1,
                    tensor_offset + i * self.tensor_jumps[axis],
                    kernel_offset + i * self.kernel_jumps[axis],
                    false,
                    cursor,
                );
                acc = acc.wrapping_add(partial);
            }
            acc
        };
        if outermost {
            cursor.push(sum);
        }
        sum
    }

    /// One contiguous 1D dot product along the last axis
    #[inline]
    fn stripe(&self, tensor_offset: usize, kernel_offset: usize, width: usize) -> T {
        let kernel = &self.kernel[kernel_offset..kernel_offset + width];
        let mut acc = T::zero();
        for (k, &weight) in kernel.iter().enumerate() {
            // Reads past the end of the tensor contribute zero
            let value = self
                .tensor
                .get(tensor_offset + k)
                .copied()
                .unwrap_or_else(T::zero);
            acc = acc.wrapping_add(value.wrapping_mul(weight));
        }
        acc
    }
}

/// Convolve `tensor` with `kernel`, writing the result into `destination`
///
/// Every precondition is checked before the first element is written; on
/// error `destination` is left exactly as it was.
///
/// # Errors
///
/// - [`TensorError::InvalidArgument`] if `stride == 0` or the kernel is larger
///   than the tensor on some axis
/// - [`TensorError::RankMismatch`] if tensor and kernel ranks differ
/// - [`TensorError::ShapeMismatch`] if the destination rank differs
/// - [`TensorError::DestinationTooSmall`] if the destination is smaller than the
///   output extent on some axis
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_kernels::convolve;
///
/// let tensor = Tensor::from_vec(vec![5, -4, 43, -17, 0], &[5]).unwrap();
/// let kernel = Tensor::from_vec(vec![3, -17], &[2]).unwrap();
/// let mut destination = Tensor::<i32>::zeros(&[4]).unwrap();
///
/// convolve(&tensor, &kernel, &mut destination, 1).unwrap();
/// assert_eq!(destination.as_slice(), &[83, -743, 418, -51]);
/// ```
pub fn convolve<T: Element>(
    tensor: &Tensor<T>,
    kernel: &Tensor<T>,
    destination: &mut Tensor<T>,
    stride: usize,
) -> TensorResult<()> {
    let extents = match check_convolution(tensor, kernel, destination, stride) {
        Ok(extents) => extents,
        Err(e) => {
            warn!(
                tensor = ?tensor.shape(),
                kernel = ?kernel.shape(),
                destination = ?destination.shape(),
                stride,
                error = %e,
                "convolution rejected"
            );
            return Err(e);
        }
    };
    debug!(
        kind = %T::KIND,
        tensor = ?tensor.shape(),
        kernel = ?kernel.shape(),
        output = ?&extents[..],
        stride,
        "convolve"
    );

    let plan = ConvolutionPlan::new(tensor, kernel, stride)?;
    let mut cursor = OutputCursor::new(destination.as_mut_slice());
    plan.move_kernel(0, 0, &mut cursor);
    Ok(())
}

/// Convolve into a freshly allocated destination of exactly the output extent
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_kernels::convolve_new;
///
/// let tensor = Tensor::<f64>::ones(&[4, 4]).unwrap();
/// let kernel = Tensor::<f64>::ones(&[3, 3]).unwrap();
/// let out = convolve_new(&tensor, &kernel, 1).unwrap();
/// assert_eq!(out.shape(), &[2, 2]);
/// assert!(out.iter().all(|&x| x == 9.0));
/// ```
pub fn convolve_new<T: Element>(
    tensor: &Tensor<T>,
    kernel: &Tensor<T>,
    stride: usize,
) -> TensorResult<Tensor<T>> {
    let extents = output_extents(tensor.shape(), kernel.shape(), stride)?;
    let mut destination = Tensor::zeros(&extents)?;
    convolve(tensor, kernel, &mut destination, stride)?;
    Ok(destination)
}

/// Parallel convolution, splitting the output along axis 0
///
/// Each output row along the first axis is an independent slab of
/// `Π output[1..]` consecutive elements, so rows are computed concurrently
/// with the same recursion as [`convolve`]. Results are identical to the
/// serial version.
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_kernels::{convolve, convolve_parallel};
///
/// let tensor = Tensor::from_vec((0..64).map(|x| x as f32).collect(), &[8, 8]).unwrap();
/// let kernel = Tensor::from_vec(vec![1.0f32, -1.0, 0.5, 2.0], &[2, 2]).unwrap();
/// let mut serial = Tensor::<f32>::zeros(&[7, 7]).unwrap();
/// let mut parallel = Tensor::<f32>::zeros(&[7, 7]).unwrap();
///
/// convolve(&tensor, &kernel, &mut serial, 1).unwrap();
/// convolve_parallel(&tensor, &kernel, &mut parallel, 1).unwrap();
/// assert_eq!(serial, parallel);
/// ```
#[cfg(feature = "parallel")]
pub fn convolve_parallel<T: Element>(
    tensor: &Tensor<T>,
    kernel: &Tensor<T>,
    destination: &mut Tensor<T>,
    stride: usize,
) -> TensorResult<()> {
    use scirs2_core::parallel_ops::*;

    let extents = match check_convolution(tensor, kernel, destination, stride) {
        Ok(extents) => extents,
        Err(e) => {
            warn!(error = %e, "parallel convolution rejected");
            return Err(e);
        }
    };
    debug!(
        kind = %T::KIND,
        tensor = ?tensor.shape(),
        kernel = ?kernel.shape(),
        output = ?&extents[..],
        stride,
        "convolve_parallel"
    );

    let plan = ConvolutionPlan::new(tensor, kernel, stride)?;
    let row_len: usize = extents[1..].iter().product();
    let total = row_len * extents[0];

    destination.as_mut_slice()[..total]
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, chunk)| {
            let mut cursor = OutputCursor::new(chunk);
            plan.move_kernel(1, plan.row_anchor(row), &mut cursor);
        });
    Ok(())
}
