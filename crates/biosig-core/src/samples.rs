//! Raw sample input and normalization
//!
//! A record accepts any reasonable numeric container: flat vectors and
//! slices of the primitive numeric types, nested row-major vectors, or an
//! explicit buffer-plus-shape. Normalization coerces the input to a dense
//! `f64` buffer and squeezes axes of length 1; anything still wider than
//! one axis afterwards is rejected.

use crate::error::{RecordError, RecordResult};

/// Scalar types accepted as signal samples
pub trait IntoSample {
    /// Convert the scalar to the record's `f64` sample representation
    fn into_sample(self) -> f64;
}

macro_rules! impl_into_sample {
    ($($t:ty),*) => {$(
        impl IntoSample for $t {
            #[inline]
            fn into_sample(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_into_sample!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl IntoSample for bool {
    #[inline]
    fn into_sample(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

/// Sample input before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawSamples {
    /// One-dimensional input, shape `[n]`
    Flat(Vec<f64>),
    /// Two-dimensional row-major input, shape `[rows, cols]`
    Nested(Vec<Vec<f64>>),
    /// Row-major buffer with an explicit arbitrary-rank shape
    Shaped {
        /// Flattened values in row-major order
        values: Vec<f64>,
        /// Axis lengths, outermost first
        shape: Vec<usize>,
    },
}

impl RawSamples {
    /// Wrap a row-major buffer with an explicit shape, e.g. `[1, 1, 40]`
    pub fn with_shape(values: Vec<f64>, shape: Vec<usize>) -> Self {
        RawSamples::Shaped { values, shape }
    }

    /// Coerce to a dense buffer, squeeze unit axes, and reject anything
    /// that remains wider than one axis
    pub(crate) fn normalize(self) -> RecordResult<Vec<f64>> {
        let (values, shape) = match self {
            RawSamples::Flat(values) => {
                let len = values.len();
                (values, vec![len])
            }
            RawSamples::Nested(rows) => {
                if rows.is_empty() {
                    return Ok(Vec::new());
                }
                let expected = rows[0].len();
                for (row, values) in rows.iter().enumerate() {
                    if values.len() != expected {
                        return Err(RecordError::RaggedInput {
                            row,
                            expected,
                            actual: values.len(),
                        });
                    }
                }
                let shape = vec![rows.len(), expected];
                let values: Vec<f64> = rows.into_iter().flatten().collect();
                (values, shape)
            }
            RawSamples::Shaped { values, shape } => {
                let expected: usize = shape.iter().product();
                if values.len() != expected {
                    return Err(RecordError::ShapeMismatch {
                        shape,
                        values: values.len(),
                    });
                }
                (values, shape)
            }
        };

        // Squeezing drops unit axes only; values stay in row-major order,
        // so the flat buffer is already correct when at most one axis remains.
        let squeezed: Vec<usize> = shape.into_iter().filter(|&dim| dim != 1).collect();
        if squeezed.len() > 1 {
            return Err(RecordError::Shape { shape: squeezed });
        }

        Ok(values)
    }
}

macro_rules! impl_raw_samples_from {
    ($($t:ty),*) => {$(
        impl From<Vec<$t>> for RawSamples {
            fn from(values: Vec<$t>) -> Self {
                RawSamples::Flat(values.into_iter().map(IntoSample::into_sample).collect())
            }
        }

        impl From<&[$t]> for RawSamples {
            fn from(values: &[$t]) -> Self {
                RawSamples::Flat(values.iter().map(|&v| v.into_sample()).collect())
            }
        }

        impl<const N: usize> From<[$t; N]> for RawSamples {
            fn from(values: [$t; N]) -> Self {
                RawSamples::Flat(values.into_iter().map(IntoSample::into_sample).collect())
            }
        }

        impl From<Vec<Vec<$t>>> for RawSamples {
            fn from(rows: Vec<Vec<$t>>) -> Self {
                RawSamples::Nested(
                    rows.into_iter()
                        .map(|row| row.into_iter().map(IntoSample::into_sample).collect())
                        .collect(),
                )
            }
        }
    )*};
}

impl_raw_samples_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, bool);
