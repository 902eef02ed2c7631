//! Sequential network: an ordered list of layers folded over an input tensor

use crate::layer::{Layer, LayerKind};
use std::borrow::Cow;
use toco_core::{Element, Tensor, TensorResult};
use tracing::{debug, trace, warn};

/// Ordered sequence of layers applied left to right
///
/// Shapes are not checked when layers are added; every convolution validates
/// its operands when it runs.
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_nn::{ActivationLayer, ConvolutionLayer, Network};
///
/// let mut network = Network::new();
/// network
///     .add_layer(ConvolutionLayer::new(Tensor::<f64>::ones(&[2, 2]).unwrap(), 1).unwrap())
///     .add_layer(ActivationLayer::relu());
///
/// let input = Tensor::from_vec(vec![1.0, -2.0, 3.0, -4.0, 5.0, -6.0], &[2, 3]).unwrap();
/// let output = network.forward(&input).unwrap();
/// assert_eq!(output.shape(), &[1, 2]);
/// assert_eq!(output.as_slice(), &[0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Network<T> {
    layers: Vec<Layer<T>>,
}

impl<T> Default for Network<T> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<T: Element> Network<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer
    pub fn add_layer(&mut self, layer: impl Into<Layer<T>>) -> &mut Self {
        let layer = layer.into();
        trace!(index = self.layers.len(), kind = ?layer.kind(), "layer added");
        self.layers.push(layer);
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    /// Mutable access to the layers, e.g. to swap a destination
    pub fn layers_mut(&mut self) -> &mut [Layer<T>] {
        &mut self.layers
    }

    /// Number of convolution layers that need a destination at forward time
    pub fn deferred_count(&self) -> usize {
        self.layers.iter().filter(|layer| layer.is_deferred()).count()
    }

    /// Run every layer in order and return the last output
    ///
    /// The input is borrowed; the first layer that needs to modify data works
    /// on its own copy. An empty network returns a copy of the input.
    ///
    /// # Errors
    ///
    /// - [`toco_core::TensorError::InvalidArgument`] if a deferred convolution layer is
    ///   reached (use [`Network::forward_with_destinations`])
    /// - any error raised by a layer
    pub fn forward(&mut self, input: &Tensor<T>) -> TensorResult<Tensor<T>> {
        self.forward_with_destinations(input, std::iter::empty())
    }

    /// Run every layer, handing `destinations` in order to deferred layers
    ///
    /// # Errors
    ///
    /// - [`toco_core::TensorError::InvalidArgument`] if there are fewer destinations than
    ///   deferred layers
    /// - any error raised by a layer
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    /// use toco_nn::{ConvolutionLayer, Network};
    ///
    /// let kernel = Tensor::from_vec(vec![1, 1], &[2]).unwrap();
    /// let mut network = Network::new();
    /// network.add_layer(ConvolutionLayer::new(kernel, 1).unwrap().deferred());
    ///
    /// let input = Tensor::from_vec(vec![1, 2, 3], &[3]).unwrap();
    /// let destination = Tensor::zeros(&[2]).unwrap();
    /// let output = network.forward_with_destinations(&input, [destination]).unwrap();
    /// assert_eq!(output.as_slice(), &[3, 5]);
    /// ```
    pub fn forward_with_destinations(
        &mut self,
        input: &Tensor<T>,
        destinations: impl IntoIterator<Item = Tensor<T>>,
    ) -> TensorResult<Tensor<T>> {
        debug!(
            layers = self.layers.len(),
            kind = %T::KIND,
            input = ?input.shape(),
            "network forward"
        );
        let mut destinations = destinations.into_iter();
        let mut current = Cow::Borrowed(input);

        for (index, layer) in self.layers.iter_mut().enumerate() {
            let supplied = if layer.is_deferred() {
                destinations.next()
            } else {
                None
            };
            let next = layer.forward(current, supplied).map_err(|e| {
                warn!(index, kind = ?layer.kind(), error = %e, "layer failed");
                e
            })?;
            trace!(index, output = ?next.shape(), "layer done");
            current = Cow::Owned(next);
        }

        if destinations.next().is_some() {
            debug!("unused destinations left after forward");
        }
        Ok(current.into_owned())
    }

    /// Layer kinds in order
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(Layer::kind).collect()
    }
}

impl<T: Element> FromIterator<Layer<T>> for Network<T> {
    fn from_iter<I: IntoIterator<Item = Layer<T>>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> Extend<Layer<T>> for Network<T> {
    fn extend<I: IntoIterator<Item = Layer<T>>>(&mut self, iter: I) {
        self.layers.extend(iter);
    }
}
