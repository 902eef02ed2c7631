//! Layers: convolution and activation steps of a network
//!
//! A [`Layer`] is a closed set of variants. Dispatch is a `match`, so adding a
//! layer kind is a compile-time change that every caller must handle.

use std::sync::Arc;
use toco_core::{ActivationKind, Element, ElementKind, Tensor, TensorError, TensorResult};
use toco_kernels::output_extents;
use tracing::trace;

#[cfg(feature = "parallel")]
use toco_kernels::convolve_parallel as run_convolution;
#[cfg(not(feature = "parallel"))]
use toco_kernels::convolve as run_convolution;

/// Layer variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Convolution,
    Activation,
}

/// Where a convolution layer writes its output
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationPolicy<T> {
    /// Allocate a tensor of exactly the output extent on every forward
    Allocate,
    /// Write into a tensor owned by the layer; its shape must cover the output
    Fixed(Tensor<T>),
    /// Use the destination the caller supplies at forward time
    Deferred,
}

/// Convolution step with a shared kernel
///
/// The kernel is held behind an [`Arc`], so several layers or networks can
/// reuse the same weights without copying them.
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_nn::ConvolutionLayer;
///
/// let kernel = Tensor::from_vec(vec![3, -17], &[2]).unwrap();
/// let mut layer = ConvolutionLayer::new(kernel, 1).unwrap();
///
/// let input = Tensor::from_vec(vec![5, -4, 43, -17, 0], &[5]).unwrap();
/// let output = layer.forward(&input, None).unwrap();
/// assert_eq!(output.as_slice(), &[83, -743, 418, -51]);
/// ```
#[derive(Debug, Clone)]
pub struct ConvolutionLayer<T> {
    kernel: Arc<Tensor<T>>,
    stride: usize,
    destination: DestinationPolicy<T>,
}

impl<T: Element> ConvolutionLayer<T> {
    /// Create a layer that allocates its output on every forward
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidArgument`] if `stride == 0`
    pub fn new(kernel: impl Into<Arc<Tensor<T>>>, stride: usize) -> TensorResult<Self> {
        Self::builder().kernel(kernel).stride(stride).build()
    }

    /// Start building a layer
    pub fn builder() -> ConvolutionLayerBuilder<T> {
        ConvolutionLayerBuilder::default()
    }

    /// Write into `destination` instead of allocating
    pub fn with_destination(mut self, destination: Tensor<T>) -> Self {
        self.destination = DestinationPolicy::Fixed(destination);
        self
    }

    /// Expect the destination to be supplied at forward time
    pub fn deferred(mut self) -> Self {
        self.destination = DestinationPolicy::Deferred;
        self
    }

    pub fn kernel(&self) -> &Tensor<T> {
        &self.kernel
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn destination_policy(&self) -> &DestinationPolicy<T> {
        &self.destination
    }

    /// Convolve `input` with the kernel
    ///
    /// `supplied` is only read by a [`DestinationPolicy::Deferred`] layer; the
    /// returned tensor is that destination after the write.
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidArgument`] if the layer is deferred and no
    ///   destination was supplied
    /// - any error of [`toco_kernels::convolve`]
    pub fn forward(
        &mut self,
        input: &Tensor<T>,
        supplied: Option<Tensor<T>>,
    ) -> TensorResult<Tensor<T>> {
        match &mut self.destination {
            DestinationPolicy::Allocate => {
                let extents = output_extents(input.shape(), self.kernel.shape(), self.stride)?;
                let mut out = Tensor::zeros(&extents)?;
                run_convolution(input, &*self.kernel, &mut out, self.stride)?;
                Ok(out)
            }
            DestinationPolicy::Fixed(destination) => {
                run_convolution(input, &*self.kernel, destination, self.stride)?;
                Ok(destination.clone())
            }
            DestinationPolicy::Deferred => {
                let mut out = supplied.ok_or_else(|| {
                    TensorError::invalid_argument(
                        "ConvolutionLayer::forward",
                        "deferred layer needs a destination supplied at forward time",
                    )
                })?;
                run_convolution(input, &*self.kernel, &mut out, self.stride)?;
                Ok(out)
            }
        }
    }
}

/// Builder for [`ConvolutionLayer`]
#[derive(Debug, Clone)]
pub struct ConvolutionLayerBuilder<T> {
    kernel: Option<Arc<Tensor<T>>>,
    stride: usize,
    destination: DestinationPolicy<T>,
}

impl<T> Default for ConvolutionLayerBuilder<T> {
    fn default() -> Self {
        Self {
            kernel: None,
            stride: 1,
            destination: DestinationPolicy::Allocate,
        }
    }
}

impl<T: Element> ConvolutionLayerBuilder<T> {
    /// Set the kernel
    pub fn kernel(mut self, kernel: impl Into<Arc<Tensor<T>>>) -> Self {
        self.kernel = Some(kernel.into());
        self
    }

    /// Set the stride (default 1)
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Set the destination policy (default [`DestinationPolicy::Allocate`])
    pub fn destination(mut self, destination: DestinationPolicy<T>) -> Self {
        self.destination = destination;
        self
    }

    /// Finish the layer
    ///
    /// # Errors
    ///
    /// - [`TensorError::NullReference`] if no kernel was set
    /// - [`TensorError::InvalidArgument`] if the stride is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::ErrorKind;
    /// use toco_nn::ConvolutionLayer;
    ///
    /// let err = ConvolutionLayer::<f64>::builder().stride(2).build().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NullReference);
    /// ```
    pub fn build(self) -> TensorResult<ConvolutionLayer<T>> {
        let kernel = self
            .kernel
            .ok_or_else(|| TensorError::null_reference("ConvolutionLayer::build", "kernel"))?;
        if self.stride == 0 {
            return Err(TensorError::invalid_argument(
                "ConvolutionLayer::build",
                "stride must be at least 1",
            ));
        }
        Ok(ConvolutionLayer {
            kernel,
            stride: self.stride,
            destination: self.destination,
        })
    }
}

/// Elementwise activation step
///
/// # Examples
///
/// ```
/// use toco_core::{ActivationKind, Tensor};
/// use toco_nn::ActivationLayer;
///
/// let layer = ActivationLayer::leaky_relu(0.1);
/// let mut tensor = Tensor::from_vec(vec![-10.0, 4.0], &[2]).unwrap();
/// layer.forward(&mut tensor);
/// assert_eq!(tensor.as_slice(), &[-1.0, 4.0]);
/// assert_eq!(layer.kind(), ActivationKind::LeakyReLU);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationLayer {
    kind: ActivationKind,
    alpha: f64,
}

impl ActivationLayer {
    /// Activation without a parameter (alpha is 0)
    pub fn new(kind: ActivationKind) -> Self {
        Self { kind, alpha: 0.0 }
    }

    pub fn relu() -> Self {
        Self::new(ActivationKind::ReLU)
    }

    pub fn leaky_relu(alpha: f64) -> Self {
        Self::new(ActivationKind::LeakyReLU).with_alpha(alpha)
    }

    pub fn sigmoid() -> Self {
        Self::new(ActivationKind::Sigmoid)
    }

    pub fn tanh() -> Self {
        Self::new(ActivationKind::Tanh)
    }

    /// Set alpha; only LeakyReLU reads it
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn kind(&self) -> ActivationKind {
        self.kind
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Apply the activation to `tensor` in place
    pub fn forward<T: Element>(&self, tensor: &mut Tensor<T>) {
        tensor.activate(self.kind, self.alpha);
    }
}

/// One step of a [`Network`](crate::Network)
#[derive(Debug, Clone)]
pub enum Layer<T> {
    Convolution(ConvolutionLayer<T>),
    Activation(ActivationLayer),
}

impl<T: Element> Layer<T> {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Convolution(_) => LayerKind::Convolution,
            Layer::Activation(_) => LayerKind::Activation,
        }
    }

    /// Element type the layer operates on
    pub fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    /// Whether forward needs a caller-supplied destination
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            Layer::Convolution(ConvolutionLayer {
                destination: DestinationPolicy::Deferred,
                ..
            })
        )
    }

    /// Run the layer, consuming the current tensor and producing the next one
    pub(crate) fn forward(
        &mut self,
        input: std::borrow::Cow<'_, Tensor<T>>,
        supplied: Option<Tensor<T>>,
    ) -> TensorResult<Tensor<T>> {
        match self {
            Layer::Convolution(layer) => {
                trace!(
                    kernel = ?layer.kernel.shape(),
                    stride = layer.stride,
                    input = ?input.shape(),
                    "convolution layer"
                );
                layer.forward(&input, supplied)
            }
            Layer::Activation(layer) => {
                trace!(activation = %layer.kind, alpha = layer.alpha, "activation layer");
                let mut tensor = input.into_owned();
                layer.forward(&mut tensor);
                Ok(tensor)
            }
        }
    }
}

impl<T> From<ConvolutionLayer<T>> for Layer<T> {
    fn from(layer: ConvolutionLayer<T>) -> Self {
        Layer::Convolution(layer)
    }
}

impl<T> From<ActivationLayer> for Layer<T> {
    fn from(layer: ActivationLayer) -> Self {
        Layer::Activation(layer)
    }
}
