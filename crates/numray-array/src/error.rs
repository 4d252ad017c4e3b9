use thiserror::Error;

use crate::dtype::DType;

/// An error type for array construction and access operations.
///
/// Every failure is detected synchronously while validating the caller's
/// arguments, before any buffer is allocated. There are no internal error
/// states: an invariant violation inside the engine is a defect and is
/// guarded by assertions, never surfaced through this type.
#[derive(Error, Debug, PartialEq)]
pub enum ArrayError {
    /// A shape dimension is negative.
    ///
    /// Shapes arriving from a binding layer are signed integers; any
    /// negative entry is rejected here rather than clamped.
    #[error("Invalid shape: axis {axis} has negative size {size}")]
    InvalidShape {
        /// Axis holding the offending entry.
        axis: usize,
        /// The negative size that was supplied.
        size: i64,
    },

    /// The shape has no dimensions.
    #[error("Invalid shape: rank must be at least 1")]
    EmptyShape,

    /// The shape disagrees with the number of elements supplied.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual}")]
    ShapeMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },

    /// A range construction was given inconsistent arguments.
    ///
    /// Raised for a zero `arange` step or a negative `linspace` count.
    #[error("Invalid range: {reason}")]
    InvalidRange {
        /// Why the range cannot be constructed.
        reason: &'static str,
    },

    /// The type token does not name one of the supported element kinds.
    #[error("Unsupported dtype: {0:?}")]
    UnsupportedDtype(String),

    /// A scalar cannot be represented in the requested element kind.
    #[error("Cast failed: {value} is not representable as {dtype}")]
    Cast {
        /// The value that failed to convert.
        value: f64,
        /// The element kind it was converted to.
        dtype: DType,
    },

    /// A multi-index is out of bounds for the array's shape.
    #[error("Index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        /// The rejected multi-index.
        index: Vec<usize>,
        /// The shape it was checked against.
        shape: Vec<usize>,
    },
}
