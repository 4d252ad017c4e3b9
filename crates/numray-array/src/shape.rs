use crate::error::ArrayError;

/// Describes the logical dimensions of an array.
///
/// A shape is an ordered list of non-negative dimension sizes, one per
/// axis; the number of entries is the rank. Rank must be at least 1. A
/// dimension of size 0 is legal and yields an array with no elements.
///
/// # Examples
///
/// ```
/// use numray_array::Shape;
///
/// let shape = Shape::new(vec![2, 3])?;
/// assert_eq!(shape.rank(), 2);
/// assert_eq!(shape.numel(), 6);
/// assert_eq!(shape.strides(), vec![3, 1]);
/// # Ok::<(), numray_array::ArrayError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a shape from dimension sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyShape`] if `dims` is empty.
    pub fn new(dims: Vec<usize>) -> Result<Self, ArrayError> {
        if dims.is_empty() {
            return Err(ArrayError::EmptyShape);
        }
        Ok(Self { dims })
    }

    /// Creates a shape from signed dimension sizes, as supplied by a
    /// binding layer.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidShape`] naming the first negative
    /// entry, or [`ArrayError::EmptyShape`] if `dims` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::{ArrayError, Shape};
    ///
    /// let shape = Shape::from_signed(&[2, 3])?;
    /// assert_eq!(shape.dims(), &[2, 3]);
    ///
    /// let err = Shape::from_signed(&[2, -3]).unwrap_err();
    /// assert_eq!(err, ArrayError::InvalidShape { axis: 1, size: -3 });
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn from_signed(dims: &[i64]) -> Result<Self, ArrayError> {
        if dims.is_empty() {
            return Err(ArrayError::EmptyShape);
        }
        let mut out = Vec::with_capacity(dims.len());
        for (axis, &size) in dims.iter().enumerate() {
            if size < 0 {
                return Err(ArrayError::InvalidShape { axis, size });
            }
            out.push(size as usize);
        }
        Ok(Self { dims: out })
    }

    /// Crate-internal constructor for dims already known to be valid.
    pub(crate) fn from_dims(dims: Vec<usize>) -> Self {
        debug_assert!(!dims.is_empty(), "shape must have rank >= 1");
        Self { dims }
    }

    /// The dimension sizes, one per axis.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The total number of elements; 0 if any dimension is 0.
    #[inline]
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Computes the row-major strides for this shape.
    ///
    /// The last dimension has stride 1 and each earlier dimension's
    /// stride is the product of all dimensions after it.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![0; self.dims.len()];
        let mut stride = 1;
        for i in (0..self.dims.len()).rev() {
            strides[i] = stride;
            stride *= self.dims[i];
        }
        strides
    }

    /// Maps a multi-index to its flat row-major offset.
    ///
    /// Returns `None` if the index has the wrong rank or any component
    /// is out of bounds for its axis.
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut offset = 0;
        let mut stride = 1;
        for (&idx, &dim) in index.iter().zip(self.dims.iter()).rev() {
            if idx >= dim {
                return None;
            }
            offset += idx * stride;
            stride *= dim;
        }
        Some(offset)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{dim}")?;
        }
        f.write_str("]")
    }
}
