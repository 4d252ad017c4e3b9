#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `numray-array` is the functional core behind numray's language
//! bindings: a minimal N-dimensional array engine supporting shape
//! declaration, contiguous owned storage, a fixed family of
//! construction algorithms, element access, and deterministic textual
//! rendering. It is a construction-and-storage primitive, not a tensor
//! algebra library: there is no broadcasting, no elementwise
//! arithmetic, and no views.
//!
//! # Architecture
//!
//! - **[`Array<T>`](Array)** — the array type: an owned row-major
//!   buffer plus a [`Shape`] and its strides, generic over the three
//!   supported element kinds.
//! - **[`Shape`]** — dimension list with row-major stride and offset
//!   arithmetic, validated at construction.
//! - **[`ArrayStorage`]** — the exclusively owned element buffer.
//! - **[`DType`] / [`DynArray`]** — runtime element-kind tokens and the
//!   dtype-erased array a binding layer consumes, with the kind
//!   resolved exactly once at construction.
//! - **[`ArrayError`]** — every failure mode, detected before
//!   allocation.
//!
//! # Quick Start
//!
//! Generic construction:
//!
//! ```
//! use numray_array::Array;
//!
//! let a = Array::<f64>::linspace(0.0, 1.0, 5, true)?;
//! assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! let id = Array::<i64>::eye(2);
//! assert_eq!(id.to_string(), "[[1, 0],\n [0, 1]]");
//! # Ok::<(), numray_array::ArrayError>(())
//! ```
//!
//! Runtime dispatch, the way a binding layer drives the engine:
//!
//! ```
//! use numray_array::{DType, DynArray};
//!
//! let dtype = DType::from_token("double")?;
//! let a = DynArray::full(dtype, &[2, 2], 3.5)?;
//! assert_eq!(a.shape(), &[2, 2]);
//! assert_eq!(a.render(), "[[3.5, 3.5],\n [3.5, 3.5]]");
//! # Ok::<(), numray_array::ArrayError>(())
//! ```

/// Array module containing the main array implementation.
///
/// This module provides the core [`array::Array`] struct with its
/// construction algorithms, element access and rendering.
pub mod array;

/// Dtype module containing element-kind tokens and runtime dispatch.
///
/// This module provides the [`dtype::DType`] token, the
/// [`dtype::ArrayElement`] trait and the dtype-erased
/// [`dtype::DynArray`].
pub mod dtype;

/// Error module defining [`error::ArrayError`] for all failure modes.
pub mod error;

/// Serde module for serialization and deserialization.
///
/// This module provides serialization support for arrays when the
/// `serde` feature is enabled.
#[cfg(feature = "serde")]
pub mod serde;

/// Shape module containing the dimension descriptor and row-major
/// index arithmetic.
pub mod shape;

/// Storage module containing the owned contiguous buffer type.
pub mod storage;

pub use crate::array::Array;
pub use crate::dtype::{ArrayElement, DType, DynArray};
pub use crate::error::ArrayError;
pub use crate::shape::Shape;
pub use crate::storage::ArrayStorage;

/// Type alias for an array of 64-bit signed integers.
pub type ArrayI64 = Array<i64>;

/// Type alias for an array of single-precision floats.
pub type ArrayF32 = Array<f32>;

/// Type alias for an array of double-precision floats.
pub type ArrayF64 = Array<f64>;
