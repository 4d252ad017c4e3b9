use num_traits::{Num, NumCast};

use crate::array::Array;
use crate::error::ArrayError;
use crate::shape::Shape;

/// The element kind of an array.
///
/// Exactly three kinds are supported. A binding layer resolves its
/// host-language type token to a `DType` once, at construction; from
/// then on the kind travels with the array and is never re-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    /// 64-bit signed integer elements.
    Int64,
    /// Single-precision floating point elements.
    Float32,
    /// Double-precision floating point elements.
    Float64,
}

impl DType {
    /// Resolves a type token to an element kind.
    ///
    /// Accepts the canonical names (`"int64"`, `"float32"`, `"float64"`)
    /// plus the spellings binding layers commonly hold (`"int"`/`"i64"`,
    /// `"float"`/`"f32"`, `"double"`/`"f64"`).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::UnsupportedDtype`] for any other token.
    ///
    /// # Examples
    ///
    /// ```
    /// use numray_array::DType;
    ///
    /// assert_eq!(DType::from_token("double")?, DType::Float64);
    /// assert!(DType::from_token("complex128").is_err());
    /// # Ok::<(), numray_array::ArrayError>(())
    /// ```
    pub fn from_token(token: &str) -> Result<Self, ArrayError> {
        match token {
            "int64" | "int" | "i64" => Ok(Self::Int64),
            "float32" | "float" | "f32" => Ok(Self::Float32),
            "float64" | "double" | "f64" => Ok(Self::Float64),
            _ => Err(ArrayError::UnsupportedDtype(token.to_string())),
        }
    }

    /// The canonical token for this element kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DType {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// Element types storable in an [`Array`].
///
/// Sealed in practice to the three supported kinds: implementations
/// exist for `i64`, `f32` and `f64` only, each tagged with its runtime
/// [`DType`].
pub trait ArrayElement:
    Num
    + NumCast
    + Copy
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// The runtime kind tag for this element type.
    const DTYPE: DType;
}

impl ArrayElement for i64 {
    const DTYPE: DType = DType::Int64;
}

impl ArrayElement for f32 {
    const DTYPE: DType = DType::Float32;
}

impl ArrayElement for f64 {
    const DTYPE: DType = DType::Float64;
}

/// Casts a binding-supplied scalar into the element type.
///
/// Follows `num-traits` conversion semantics: fractional values
/// truncate toward zero for the integer kind; NaN and out-of-range
/// values are unrepresentable.
fn cast_scalar<T: ArrayElement>(value: f64) -> Result<T, ArrayError> {
    T::from(value).ok_or(ArrayError::Cast {
        value,
        dtype: T::DTYPE,
    })
}

/// A dtype-erased array for binding layers.
///
/// Each constructor resolves the requested [`DType`] to one of the
/// three [`Array`] instantiations exactly once; every later operation
/// dispatches on the variant, never on a token. Shapes and counts
/// arrive as signed integers, the way host languages hold them, and are
/// validated before any allocation.
///
/// # Examples
///
/// ```
/// use numray_array::{DType, DynArray};
///
/// let a = DynArray::arange(DType::Int64, 0.0, 10.0, 2.0)?;
/// assert_eq!(a.shape(), &[5]);
/// assert_eq!(a.render(), "[0, 2, 4, 6, 8]");
/// # Ok::<(), numray_array::ArrayError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum DynArray {
    /// An array of 64-bit signed integers.
    Int64(Array<i64>),
    /// An array of single-precision floats.
    Float32(Array<f32>),
    /// An array of double-precision floats.
    Float64(Array<f64>),
}

impl DynArray {
    /// Creates an array of zeros with the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidShape`] for a negative dimension or
    /// [`ArrayError::EmptyShape`] for a rank-0 shape.
    pub fn zeros(dtype: DType, shape: &[i64]) -> Result<Self, ArrayError> {
        let shape = Shape::from_signed(shape)?;
        Ok(match dtype {
            DType::Int64 => Self::Int64(Array::zeros(shape.dims())?),
            DType::Float32 => Self::Float32(Array::zeros(shape.dims())?),
            DType::Float64 => Self::Float64(Array::zeros(shape.dims())?),
        })
    }

    /// Creates an array of ones with the given shape.
    ///
    /// # Errors
    ///
    /// Same conditions as [`zeros`](DynArray::zeros).
    pub fn ones(dtype: DType, shape: &[i64]) -> Result<Self, ArrayError> {
        let shape = Shape::from_signed(shape)?;
        Ok(match dtype {
            DType::Int64 => Self::Int64(Array::ones(shape.dims())?),
            DType::Float32 => Self::Float32(Array::ones(shape.dims())?),
            DType::Float64 => Self::Float64(Array::ones(shape.dims())?),
        })
    }

    /// Creates an array filled with `value` cast to the element kind.
    ///
    /// # Errors
    ///
    /// Shape errors as for [`zeros`](DynArray::zeros), plus
    /// [`ArrayError::Cast`] if `value` is not representable in the
    /// element kind (for example NaN as `int64`).
    pub fn full(dtype: DType, shape: &[i64], value: f64) -> Result<Self, ArrayError> {
        let shape = Shape::from_signed(shape)?;
        Ok(match dtype {
            DType::Int64 => Self::Int64(Array::full(shape.dims(), cast_scalar(value)?)?),
            DType::Float32 => Self::Float32(Array::full(shape.dims(), cast_scalar(value)?)?),
            DType::Float64 => Self::Float64(Array::full(shape.dims(), cast_scalar(value)?)?),
        })
    }

    /// Creates the `n` by `n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidShape`] if `n` is negative.
    pub fn eye(dtype: DType, n: i64) -> Result<Self, ArrayError> {
        if n < 0 {
            return Err(ArrayError::InvalidShape { axis: 0, size: n });
        }
        let n = n as usize;
        Ok(match dtype {
            DType::Int64 => Self::Int64(Array::eye(n)),
            DType::Float32 => Self::Float32(Array::eye(n)),
            DType::Float64 => Self::Float64(Array::eye(n)),
        })
    }

    /// Creates a range of values from `start` up to (exclusive) `stop`,
    /// spaced by `step`.
    ///
    /// The bounds are cast to the element kind first — truncating
    /// toward zero for `int64` — and the range is generated in the
    /// element type.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRange`] if the step is (or
    /// truncates to) zero, or [`ArrayError::Cast`] if a bound is not
    /// representable in the element kind.
    pub fn arange(dtype: DType, start: f64, stop: f64, step: f64) -> Result<Self, ArrayError> {
        Ok(match dtype {
            DType::Int64 => Self::Int64(Array::arange(
                cast_scalar(start)?,
                cast_scalar(stop)?,
                cast_scalar(step)?,
            )?),
            DType::Float32 => Self::Float32(Array::arange(
                cast_scalar(start)?,
                cast_scalar(stop)?,
                cast_scalar(step)?,
            )?),
            DType::Float64 => Self::Float64(Array::arange(start, stop, step)?),
        })
    }

    /// Creates `num` evenly spaced values from `start` towards `stop`.
    ///
    /// With `endpoint` set, the final sample equals `stop` exactly.
    /// Samples are computed in `f64` and cast to the element kind,
    /// truncating toward zero for `int64`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRange`] if `num` is negative, or
    /// [`ArrayError::Cast`] if a bound or sample is not representable
    /// in the element kind.
    pub fn linspace(
        dtype: DType,
        start: f64,
        stop: f64,
        num: i64,
        endpoint: bool,
    ) -> Result<Self, ArrayError> {
        if num < 0 {
            return Err(ArrayError::InvalidRange {
                reason: "num must be non-negative",
            });
        }
        let num = num as usize;
        Ok(match dtype {
            DType::Int64 => Self::Int64(Array::linspace(
                cast_scalar(start)?,
                cast_scalar(stop)?,
                num,
                endpoint,
            )?),
            DType::Float32 => Self::Float32(Array::linspace(
                cast_scalar(start)?,
                cast_scalar(stop)?,
                num,
                endpoint,
            )?),
            DType::Float64 => Self::Float64(Array::linspace(start, stop, num, endpoint)?),
        })
    }

    /// The element kind chosen at construction.
    pub fn dtype(&self) -> DType {
        match self {
            Self::Int64(_) => DType::Int64,
            Self::Float32(_) => DType::Float32,
            Self::Float64(_) => DType::Float64,
        }
    }

    /// The dimension sizes, one per axis.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Int64(a) => a.shape().dims(),
            Self::Float32(a) => a.shape().dims(),
            Self::Float64(a) => a.shape().dims(),
        }
    }

    /// The number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    /// The total number of elements.
    pub fn numel(&self) -> usize {
        match self {
            Self::Int64(a) => a.numel(),
            Self::Float32(a) => a.numel(),
            Self::Float64(a) => a.numel(),
        }
    }

    /// Renders the contents as a nested bracket string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for DynArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int64(a) => std::fmt::Display::fmt(a, f),
            Self::Float32(a) => std::fmt::Display::fmt(a, f),
            Self::Float64(a) => std::fmt::Display::fmt(a, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_parsing() {
        assert_eq!(DType::from_token("int64"), Ok(DType::Int64));
        assert_eq!(DType::from_token("int"), Ok(DType::Int64));
        assert_eq!(DType::from_token("float"), Ok(DType::Float32));
        assert_eq!(DType::from_token("double"), Ok(DType::Float64));
        assert_eq!(
            DType::from_token("uint8"),
            Err(ArrayError::UnsupportedDtype("uint8".to_string()))
        );
    }

    #[test]
    fn token_roundtrip_via_name() {
        for dtype in [DType::Int64, DType::Float32, DType::Float64] {
            assert_eq!(DType::from_token(dtype.name()), Ok(dtype));
            assert_eq!(dtype.name().parse::<DType>(), Ok(dtype));
        }
    }

    #[test]
    fn zeros_dispatches_on_dtype() -> Result<(), ArrayError> {
        let a = DynArray::zeros(DType::Float32, &[2, 3])?;
        assert_eq!(a.dtype(), DType::Float32);
        assert_eq!(a.shape(), &[2, 3]);
        assert_eq!(a.numel(), 6);
        Ok(())
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let err = DynArray::zeros(DType::Int64, &[2, -1]).unwrap_err();
        assert_eq!(err, ArrayError::InvalidShape { axis: 1, size: -1 });
    }

    #[test]
    fn full_truncates_toward_zero_for_int64() -> Result<(), ArrayError> {
        let a = DynArray::full(DType::Int64, &[2], 7.9)?;
        assert_eq!(a.render(), "[7, 7]");

        let b = DynArray::full(DType::Int64, &[2], -7.9)?;
        assert_eq!(b.render(), "[-7, -7]");
        Ok(())
    }

    #[test]
    fn full_rejects_unrepresentable_value() {
        let err = DynArray::full(DType::Int64, &[2], f64::NAN).unwrap_err();
        assert!(matches!(err, ArrayError::Cast { dtype: DType::Int64, .. }));
    }

    #[test]
    fn eye_rejects_negative_size() {
        let err = DynArray::eye(DType::Float64, -3).unwrap_err();
        assert_eq!(err, ArrayError::InvalidShape { axis: 0, size: -3 });
    }

    #[test]
    fn arange_casts_bounds_first() -> Result<(), ArrayError> {
        // 2.9 truncates to step 2 for the integer kind
        let a = DynArray::arange(DType::Int64, 0.0, 10.0, 2.9)?;
        assert_eq!(a.render(), "[0, 2, 4, 6, 8]");
        Ok(())
    }

    #[test]
    fn arange_step_truncating_to_zero_fails() {
        let err = DynArray::arange(DType::Int64, 0.0, 10.0, 0.5).unwrap_err();
        assert_eq!(
            err,
            ArrayError::InvalidRange {
                reason: "step must be non-zero"
            }
        );
    }

    #[test]
    fn linspace_rejects_negative_num() {
        let err = DynArray::linspace(DType::Float64, 0.0, 1.0, -1, true).unwrap_err();
        assert_eq!(
            err,
            ArrayError::InvalidRange {
                reason: "num must be non-negative"
            }
        );
    }

    #[test]
    fn render_matches_generic_display() -> Result<(), ArrayError> {
        let a = DynArray::linspace(DType::Float64, 0.0, 1.0, 5, true)?;
        assert_eq!(a.render(), "[0, 0.25, 0.5, 0.75, 1]");
        assert_eq!(a.to_string(), a.render());
        Ok(())
    }
}
