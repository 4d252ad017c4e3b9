use crate::dtype::ArrayElement;
use crate::error::ArrayError;
use crate::shape::Shape;
use crate::storage::ArrayStorage;

/// A multi-dimensional array with exclusively owned, contiguous storage.
///
/// An `Array` combines three pieces: an [`ArrayStorage`] holding the
/// elements in row-major order (last dimension varies fastest), a
/// [`Shape`] describing the logical dimensions, and the precomputed
/// row-major strides. The invariant `storage.len() == shape.numel()`
/// holds for every constructed array; constructors validate their
/// arguments before allocating, so a failed construction never leaks a
/// partial buffer.
///
/// Arrays are produced by the construction algorithms below and are
/// immutable afterwards except through the explicit write accessors
/// ([`set`](Array::set), [`get_mut`](Array::get_mut),
/// [`as_slice_mut`](Array::as_slice_mut), [`iter_mut`](Array::iter_mut)).
/// Clones are deep: no two arrays ever alias the same buffer.
///
/// # Examples
///
/// ```
/// use numray_array::Array;
///
/// let a = Array::<f64>::zeros(&[2, 3])?;
/// assert_eq!(a.shape().dims(), &[2, 3]);
/// assert!(a.iter().all(|&x| x == 0.0));
///
/// let r = Array::<i64>::arange(0, 10, 2)?;
/// assert_eq!(r.as_slice(), &[0, 2, 4, 6, 8]);
/// # Ok::<(), numray_array::ArrayError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Array<T> {
    storage: ArrayStorage<T>,
    shape: Shape,
    strides: Vec<usize>,
}

impl<T: ArrayElement> Array<T> {
    /// Assembles an array from parts whose consistency the caller has
    /// already established.
    fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.numel(), data.len(), "shape/storage size mismatch");
        let strides = shape.strides();
        Self {
            storage: ArrayStorage::from_vec(data),
            shape,
            strides,
        }
    }

    /// Creates an array with the given shape and data.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ShapeMismatch`] if the number of elements
    /// does not match the shape, or [`ArrayError::EmptyShape`] for a
    /// rank-0 shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let a = Array::from_shape_vec(&[2, 2], vec![1i64, 2, 3, 4])?;
    /// assert_eq!(a.get(&[1, 0]), Some(&3));
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self, ArrayError> {
        let shape = Shape::new(shape.to_vec())?;
        if shape.numel() != data.len() {
            return Err(ArrayError::ShapeMismatch {
                expected: shape.numel(),
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Creates an array with the given shape from a slice of data.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_shape_vec`](Array::from_shape_vec).
    pub fn from_shape_slice(shape: &[usize], data: &[T]) -> Result<Self, ArrayError> {
        Self::from_shape_vec(shape, data.to_vec())
    }

    /// Creates a rank-1 array owning the given data.
    pub fn from_vec(data: Vec<T>) -> Self {
        let shape = Shape::from_dims(vec![data.len()]);
        Self::from_parts(shape, data)
    }

    /// Creates a rank-2 array from equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ShapeMismatch`] if the rows have differing
    /// lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, ArrayError> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * m);
        for row in rows {
            if row.len() != m {
                return Err(ArrayError::ShapeMismatch {
                    expected: m,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(Shape::from_dims(vec![n, m]), data))
    }

    /// Creates an array with the given shape and a function generating
    /// each element from its multi-index.
    ///
    /// Elements are generated in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyShape`] for a rank-0 shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let a = Array::<i64>::from_shape_fn(&[2, 2], |idx| (idx[0] * 2 + idx[1]) as i64)?;
    /// assert_eq!(a.as_slice(), &[0, 1, 2, 3]);
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn from_shape_fn<F>(shape: &[usize], f: F) -> Result<Self, ArrayError>
    where
        F: Fn(&[usize]) -> T,
    {
        let shape = Shape::new(shape.to_vec())?;
        let numel = shape.numel();
        let mut index = vec![0usize; shape.rank()];
        let mut data = Vec::with_capacity(numel);
        for _ in 0..numel {
            data.push(f(&index));
            for dim in (0..index.len()).rev() {
                index[dim] += 1;
                if index[dim] < shape.dims()[dim] {
                    break;
                }
                index[dim] = 0;
            }
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Creates an array with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyShape`] for a rank-0 shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let a = Array::full(&[2, 3], 7i64)?;
    /// assert!(a.iter().all(|&x| x == 7));
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn full(shape: &[usize], value: T) -> Result<Self, ArrayError> {
        let shape = Shape::new(shape.to_vec())?;
        let data = vec![value; shape.numel()];
        Ok(Self::from_parts(shape, data))
    }

    /// Creates an array with every element set to the additive identity.
    pub fn zeros(shape: &[usize]) -> Result<Self, ArrayError> {
        Self::full(shape, T::zero())
    }

    /// Creates an array with every element set to the multiplicative
    /// identity.
    pub fn ones(shape: &[usize]) -> Result<Self, ArrayError> {
        Self::full(shape, T::one())
    }

    /// Creates the `n` by `n` identity matrix.
    ///
    /// `eye(0)` is legal and yields an empty `(0, 0)` array.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let id = Array::<f64>::eye(3);
    /// assert_eq!(id.get(&[1, 1]), Some(&1.0));
    /// assert_eq!(id.get(&[1, 2]), Some(&0.0));
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self::from_parts(Shape::from_dims(vec![n, n]), data)
    }

    /// Creates a rank-1 array of values from `start` up to (exclusive)
    /// `stop`, spaced by `step`.
    ///
    /// The length is `ceil((stop - start) / step)` clamped to zero, and
    /// element `k` is `start + k * step`; the values run strictly before
    /// `stop` in the direction of `step`. A range whose direction
    /// opposes its step yields an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRange`] if `step` is zero or the
    /// computed length is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let a = Array::<i64>::arange(0, 10, 2)?;
    /// assert_eq!(a.as_slice(), &[0, 2, 4, 6, 8]);
    ///
    /// let b = Array::<f64>::arange(1.0, 0.0, -0.5)?;
    /// assert_eq!(b.as_slice(), &[1.0, 0.5]);
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn arange(start: T, stop: T, step: T) -> Result<Self, ArrayError> {
        if step == T::zero() {
            return Err(ArrayError::InvalidRange {
                reason: "step must be non-zero",
            });
        }
        let (Some(a), Some(b), Some(s)) = (start.to_f64(), stop.to_f64(), step.to_f64()) else {
            return Err(ArrayError::InvalidRange {
                reason: "range bounds are not representable as f64",
            });
        };
        let count = ((b - a) / s).ceil();
        if count.is_nan() || count == f64::INFINITY {
            return Err(ArrayError::InvalidRange {
                reason: "range length is not finite",
            });
        }
        let len = count.max(0.0) as usize;
        let mut data = Vec::with_capacity(len);
        for k in 0..len {
            let k = T::from(k).ok_or(ArrayError::InvalidRange {
                reason: "range is too long for the element type",
            })?;
            data.push(start + step * k);
        }
        Ok(Self::from_parts(Shape::from_dims(vec![len]), data))
    }

    /// Creates a rank-1 array of `num` evenly spaced values from `start`
    /// towards `stop`.
    ///
    /// With `endpoint` set, the spacing is `(stop - start) / (num - 1)`
    /// and the final element equals `stop` exactly (`num == 1` yields
    /// just `[start]`). Without it, the spacing is
    /// `(stop - start) / num` and `stop` is excluded.
    ///
    /// Samples are computed in `f64` and then cast to `T`. For the
    /// integer element kind this truncates each sample toward zero, so
    /// `linspace(0, 1, 5, true)` over `i64` is `[0, 0, 0, 0, 1]` — the
    /// fractional part is dropped, never rounded.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Cast`] if a sample is not representable in
    /// `T` (a NaN spacing over the integer kind).
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let a = Array::<f64>::linspace(0.0, 1.0, 5, true)?;
    /// assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn linspace(start: T, stop: T, num: usize, endpoint: bool) -> Result<Self, ArrayError> {
        let (Some(a), Some(b)) = (start.to_f64(), stop.to_f64()) else {
            return Err(ArrayError::InvalidRange {
                reason: "range bounds are not representable as f64",
            });
        };
        let mut data = Vec::with_capacity(num);
        if num > 0 {
            let step = if endpoint {
                if num > 1 {
                    (b - a) / (num - 1) as f64
                } else {
                    0.0
                }
            } else {
                (b - a) / num as f64
            };
            for k in 0..num {
                let sample = if endpoint && num > 1 && k == num - 1 {
                    b
                } else {
                    a + step * k as f64
                };
                data.push(T::from(sample).ok_or(ArrayError::Cast {
                    value: sample,
                    dtype: T::DTYPE,
                })?);
            }
        }
        Ok(Self::from_parts(Shape::from_dims(vec![num]), data))
    }

    /// The shape describing the logical dimensions.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The row-major strides, one per axis.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// The number of elements physically stored.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The elements as a slice, in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// The elements as a mutable slice, in row-major order.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Consumes the array and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Returns an iterator over the elements in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_slice_mut().iter_mut()
    }

    /// Gets the element at the given multi-index.
    ///
    /// Returns `None` if the index has the wrong rank or is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::Array;
    ///
    /// let a = Array::from_shape_vec(&[2, 2], vec![1i64, 2, 3, 4])?;
    /// assert_eq!(a.get(&[0, 1]), Some(&2));
    /// assert_eq!(a.get(&[2, 0]), None);
    /// assert_eq!(a.get(&[0]), None);
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.shape
            .offset(index)
            .map(|offset| &self.as_slice()[offset])
    }

    /// Gets a mutable reference to the element at the given multi-index.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        let offset = self.shape.offset(index)?;
        Some(&mut self.as_slice_mut()[offset])
    }

    /// Gets the element at the given multi-index without bounds checks.
    ///
    /// Panics on an index that maps past the end of the buffer; an index
    /// that is invalid but still maps inside the buffer returns an
    /// unrelated element.
    pub fn get_unchecked(&self, index: &[usize]) -> &T {
        let offset = index
            .iter()
            .zip(self.strides.iter())
            .map(|(&idx, &stride)| idx * stride)
            .sum::<usize>();
        &self.as_slice()[offset]
    }

    /// Writes `value` at the given multi-index.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] if the index has the
    /// wrong rank or is out of bounds.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), ArrayError> {
        match self.shape.offset(index) {
            Some(offset) => {
                self.as_slice_mut()[offset] = value;
                Ok(())
            }
            None => Err(ArrayError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.dims().to_vec(),
            }),
        }
    }

    /// Applies a function to each element, producing a new array with
    /// the same shape.
    pub fn map<U, F>(&self, f: F) -> Array<U>
    where
        U: ArrayElement,
        F: Fn(&T) -> U,
    {
        let data: Vec<U> = self.iter().map(f).collect();
        Array::from_parts(self.shape.clone(), data)
    }
}

/// Writes one bracketed group of the nested rendering.
///
/// `depth` is the nesting level of the group, used to indent
/// continuation rows under their opening bracket. Groups at
/// non-innermost levels are separated by one blank line per level of
/// nesting left above them.
fn write_group<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    data: &[T],
    dims: &[usize],
    strides: &[usize],
    offset: usize,
    depth: usize,
) -> std::fmt::Result {
    f.write_str("[")?;
    if dims.len() == 1 {
        for i in 0..dims[0] {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", data[offset + i])?;
        }
        return f.write_str("]");
    }
    for i in 0..dims[0] {
        if i > 0 {
            f.write_str(",")?;
            for _ in 0..dims.len() - 1 {
                f.write_str("\n")?;
            }
            for _ in 0..=depth {
                f.write_str(" ")?;
            }
        }
        write_group(f, data, &dims[1..], &strides[1..], offset + i * strides[0], depth + 1)?;
    }
    f.write_str("]")
}

impl<T: ArrayElement> std::fmt::Display for Array<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_group(f, self.as_slice(), self.shape.dims(), &self.strides, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zeros_shape_and_elements() -> Result<(), ArrayError> {
        let a = Array::<i64>::zeros(&[2, 3])?;
        assert_eq!(a.shape().dims(), &[2, 3]);
        assert_eq!(a.numel(), 6);
        assert!(a.iter().all(|&x| x == 0));

        let b = Array::<f32>::zeros(&[4])?;
        assert!(b.iter().all(|&x| x == 0.0));
        Ok(())
    }

    #[test]
    fn ones_shape_and_elements() -> Result<(), ArrayError> {
        let a = Array::<f64>::ones(&[2, 2, 2])?;
        assert_eq!(a.shape().dims(), &[2, 2, 2]);
        assert!(a.iter().all(|&x| x == 1.0));
        Ok(())
    }

    #[test]
    fn full_fills_value() -> Result<(), ArrayError> {
        let a = Array::full(&[3, 2], 7i64)?;
        assert_eq!(a.as_slice(), &[7, 7, 7, 7, 7, 7]);
        assert_eq!(a.strides(), &[2, 1]);
        Ok(())
    }

    #[test]
    fn zero_sized_dims_are_legal() -> Result<(), ArrayError> {
        let a = Array::<f64>::zeros(&[2, 0, 3])?;
        assert_eq!(a.shape().dims(), &[2, 0, 3]);
        assert_eq!(a.numel(), 0);
        assert!(a.is_empty());
        Ok(())
    }

    #[test]
    fn rank_zero_shape_is_rejected() {
        assert_eq!(Array::<f64>::zeros(&[]), Err(ArrayError::EmptyShape));
    }

    #[test]
    fn eye_diagonal() {
        let a = Array::<i64>::eye(4);
        assert_eq!(a.shape().dims(), &[4, 4]);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(a.get(&[i, j]), Some(&expected));
            }
        }
    }

    #[test]
    fn eye_degenerate_sizes() {
        assert_eq!(Array::<f32>::eye(0).numel(), 0);
        assert_eq!(Array::<f32>::eye(1).as_slice(), &[1.0]);
    }

    #[test]
    fn arange_integers() -> Result<(), ArrayError> {
        let a = Array::<i64>::arange(0, 10, 2)?;
        assert_eq!(a.shape().dims(), &[5]);
        assert_eq!(a.as_slice(), &[0, 2, 4, 6, 8]);

        let b = Array::<i64>::arange(0, 1, 1)?;
        assert_eq!(b.as_slice(), &[0]);

        // length is the ceiling of the span over the step
        let c = Array::<i64>::arange(0, 10, 3)?;
        assert_eq!(c.as_slice(), &[0, 3, 6, 9]);
        Ok(())
    }

    #[test]
    fn arange_negative_step() -> Result<(), ArrayError> {
        let a = Array::<i64>::arange(5, 0, -2)?;
        assert_eq!(a.as_slice(), &[5, 3, 1]);
        Ok(())
    }

    #[test]
    fn arange_empty_when_direction_opposes_step() -> Result<(), ArrayError> {
        let a = Array::<i64>::arange(0, 10, -1)?;
        assert!(a.is_empty());
        assert_eq!(a.shape().dims(), &[0]);

        let b = Array::<f64>::arange(1.0, 1.0, 0.5)?;
        assert!(b.is_empty());
        Ok(())
    }

    #[test]
    fn arange_fractional_step() -> Result<(), ArrayError> {
        let a = Array::<f64>::arange(0.0, 1.0, 0.25)?;
        assert_eq!(a.shape().dims(), &[4]);
        for (got, want) in a.iter().zip([0.0, 0.25, 0.5, 0.75]) {
            assert_relative_eq!(*got, want);
        }
        Ok(())
    }

    #[test]
    fn arange_zero_step_fails() {
        assert_eq!(
            Array::<i64>::arange(0, 10, 0),
            Err(ArrayError::InvalidRange {
                reason: "step must be non-zero"
            })
        );
    }

    #[test]
    fn linspace_endpoint() -> Result<(), ArrayError> {
        let a = Array::<f64>::linspace(0.0, 1.0, 5, true)?;
        assert_eq!(a.shape().dims(), &[5]);
        for (got, want) in a.iter().zip([0.0, 0.25, 0.5, 0.75, 1.0]) {
            assert_relative_eq!(*got, want);
        }
        // the endpoint is written exactly, not resampled
        assert_eq!(a.as_slice()[4], 1.0);
        Ok(())
    }

    #[test]
    fn linspace_no_endpoint() -> Result<(), ArrayError> {
        let a = Array::<f64>::linspace(0.0, 1.0, 5, false)?;
        for (got, want) in a.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8]) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn linspace_single_sample_is_start() -> Result<(), ArrayError> {
        let a = Array::<f64>::linspace(3.5, 7.25, 1, true)?;
        assert_eq!(a.as_slice(), &[3.5]);

        let b = Array::<f64>::linspace(3.5, 7.25, 1, false)?;
        assert_eq!(b.as_slice(), &[3.5]);
        Ok(())
    }

    #[test]
    fn linspace_zero_samples() -> Result<(), ArrayError> {
        let a = Array::<f32>::linspace(0.0, 1.0, 0, true)?;
        assert!(a.is_empty());
        assert_eq!(a.shape().dims(), &[0]);
        Ok(())
    }

    #[test]
    fn linspace_integer_truncates_toward_zero() -> Result<(), ArrayError> {
        // samples 0.0, 2.5, 5.0, 7.5, 10.0 truncate, not round
        let a = Array::<i64>::linspace(0, 10, 5, true)?;
        assert_eq!(a.as_slice(), &[0, 2, 5, 7, 10]);

        let b = Array::<i64>::linspace(0, 1, 5, true)?;
        assert_eq!(b.as_slice(), &[0, 0, 0, 0, 1]);
        Ok(())
    }

    #[test]
    fn linspace_f32_samples() -> Result<(), ArrayError> {
        let a = Array::<f32>::linspace(0.0, 1.0, 5, true)?;
        assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        Ok(())
    }

    #[test]
    fn from_shape_vec_validates_count() {
        let err = Array::from_shape_vec(&[2, 3], vec![1i64, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::ShapeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn from_vec_is_rank_one() {
        let a = Array::from_vec(vec![1i64, 2, 3, 4, 5]);
        assert_eq!(a.shape().dims(), &[5]);
        assert_eq!(a.get(&[2]), Some(&3));
    }

    #[test]
    fn from_rows_builds_matrix() -> Result<(), ArrayError> {
        let a = Array::from_rows(&[vec![1i64, 2, 3], vec![4, 5, 6]])?;
        assert_eq!(a.shape().dims(), &[2, 3]);
        assert_eq!(a.get(&[1, 2]), Some(&6));
        Ok(())
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Array::from_rows(&[vec![1i64, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn from_shape_fn_row_major_order() -> Result<(), ArrayError> {
        let a = Array::<i64>::from_shape_fn(&[2, 3], |idx| (idx[0] * 10 + idx[1]) as i64)?;
        assert_eq!(a.as_slice(), &[0, 1, 2, 10, 11, 12]);
        Ok(())
    }

    #[test]
    fn get_and_set() -> Result<(), ArrayError> {
        let mut a = Array::<i64>::zeros(&[2, 2])?;
        a.set(&[0, 1], 5)?;
        assert_eq!(a.get(&[0, 1]), Some(&5));
        assert_eq!(a.as_slice(), &[0, 5, 0, 0]);

        let err = a.set(&[2, 0], 1).unwrap_err();
        assert_eq!(
            err,
            ArrayError::IndexOutOfBounds {
                index: vec![2, 0],
                shape: vec![2, 2]
            }
        );
        Ok(())
    }

    #[test]
    fn get_checks_rank() -> Result<(), ArrayError> {
        let a = Array::<i64>::zeros(&[2, 2])?;
        assert_eq!(a.get(&[0]), None);
        assert_eq!(a.get(&[0, 0, 0]), None);
        Ok(())
    }

    #[test]
    fn get_unchecked_matches_get() -> Result<(), ArrayError> {
        let a = Array::from_shape_vec(&[2, 2, 3], (0..12).collect::<Vec<i64>>())?;
        assert_eq!(*a.get_unchecked(&[1, 0, 2]), 8);
        assert_eq!(a.get(&[1, 0, 2]), Some(&8));
        Ok(())
    }

    #[test]
    fn clone_is_deep() -> Result<(), ArrayError> {
        let mut a = Array::<i64>::zeros(&[3])?;
        let b = a.clone();
        a.set(&[0], 9)?;
        assert_eq!(a.as_slice(), &[9, 0, 0]);
        assert_eq!(b.as_slice(), &[0, 0, 0]);
        Ok(())
    }

    #[test]
    fn map_preserves_shape() -> Result<(), ArrayError> {
        let a = Array::<i64>::arange(0, 4, 1)?;
        let b: Array<f64> = a.map(|&x| x as f64 * 0.5);
        assert_eq!(b.shape().dims(), &[4]);
        assert_eq!(b.as_slice(), &[0.0, 0.5, 1.0, 1.5]);
        Ok(())
    }

    #[test]
    fn iter_mut_writes_through() -> Result<(), ArrayError> {
        let mut a = Array::<i64>::ones(&[4])?;
        a.iter_mut().for_each(|x| *x *= 3);
        assert_eq!(a.as_slice(), &[3, 3, 3, 3]);
        Ok(())
    }

    #[test]
    fn display_rank_1() -> Result<(), ArrayError> {
        let a = Array::<i64>::arange(0, 10, 2)?;
        assert_eq!(a.to_string(), "[0, 2, 4, 6, 8]");
        Ok(())
    }

    #[test]
    fn display_rank_2() -> Result<(), ArrayError> {
        let a = Array::from_shape_vec(&[2, 3], vec![1i64, 2, 3, 4, 5, 6])?;
        assert_eq!(a.to_string(), "[[1, 2, 3],\n [4, 5, 6]]");
        Ok(())
    }

    #[test]
    fn display_rank_3() -> Result<(), ArrayError> {
        let a = Array::from_shape_vec(&[2, 2, 2], (1..=8).collect::<Vec<i64>>())?;
        let lines = a.to_string().lines().map(str::to_owned).collect::<Vec<_>>();
        #[rustfmt::skip]
        assert_eq!(lines.as_slice(),
        ["[[[1, 2],",
         "  [3, 4]],",
         "",
         " [[5, 6],",
         "  [7, 8]]]"]);
        Ok(())
    }

    #[test]
    fn display_floats() -> Result<(), ArrayError> {
        let a = Array::<f64>::linspace(0.0, 1.0, 5, true)?;
        assert_eq!(a.to_string(), "[0, 0.25, 0.5, 0.75, 1]");
        Ok(())
    }

    #[test]
    fn display_empty() -> Result<(), ArrayError> {
        assert_eq!(Array::<i64>::zeros(&[0])?.to_string(), "[]");
        assert_eq!(Array::<i64>::zeros(&[0, 3])?.to_string(), "[]");
        assert_eq!(
            Array::<i64>::zeros(&[2, 0])?.to_string(),
            "[[],\n []]"
        );
        Ok(())
    }

    #[test]
    fn arrays_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Array<i64>>();
        assert_send_sync::<Array<f32>>();
        assert_send_sync::<Array<f64>>();
    }
}
