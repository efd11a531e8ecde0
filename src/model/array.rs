//! Dense storage of a table: a square N-dimensional `i64` array.
//!
//! - `DenseArray`: owned, row-major storage where every axis has the same length.
//! - `ArrayView`: borrowed sub-array obtained by fixing a prefix of the axes.

use crate::error::TableError;
use std::fmt;

// =#========================================================================#=
// DENSE ARRAY
// =#========================================================================#=
/// A square N-dimensional array of `i64` values stored in row-major order.
///
/// All `ndim` axes have the same length `axis_len`, so the shape is
/// `(axis_len,) * ndim`. Fixing the first `k` axes selects a contiguous
/// block of the flat storage, which is what makes sub-array views cheap.
///
/// # Example
/// ```
/// use densetree::model::DenseArray;
///
/// let array = DenseArray::from_shape_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(array.get(&[1, 0]), Some(3));
/// assert_eq!(array.view(&[1]).unwrap().as_slice(), &[3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseArray {
    /// Length of every axis
    axis_len: usize,
    /// Number of axes
    ndim: usize,
    /// Flat row-major storage
    data: Vec<i64>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl DenseArray {
    /// Creates a zero-filled array with `ndim` axes of length `axis_len`.
    ///
    /// # Panics
    /// Panics if `axis_len^ndim` overflows `usize`.
    pub fn zeros(axis_len: usize, ndim: usize) -> Self {
        let Some(size) = cell_count(axis_len, ndim) else {
            panic!("Array of {ndim} axes of length {axis_len} has too many cells");
        };

        DenseArray { axis_len, ndim, data: vec![0; size] }
    }

    /// Creates an array from a flat row-major buffer.
    ///
    /// # Arguments
    /// * `axis_len` - Length of every axis
    /// * `ndim` - Number of axes
    /// * `data` - Values in row-major order; must hold `axis_len^ndim` values
    ///
    /// # Errors
    /// [TableError::ShapeMismatch] if `data` has the wrong length, or if the
    /// shape holds more cells than fit into memory.
    pub fn from_shape_vec(axis_len: usize, ndim: usize, data: Vec<i64>) -> Result<Self, TableError> {
        let expected = cell_count(axis_len, ndim);
        if expected != Some(data.len()) {
            let expected = match expected {
                Some(expected) => format!("{expected} values"),
                None => "more than usize::MAX values".to_string(),
            };
            return Err(TableError::ShapeMismatch {
                expected: format!("{expected} for shape [{axis_len}; {ndim}]"),
                found: format!("{} values", data.len()),
            });
        }

        Ok(DenseArray { axis_len, ndim, data })
    }

    /// Returns the length shared by all axes.
    pub fn axis_len(&self) -> usize {
        self.axis_len
    }

    /// Returns the number of axes.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Returns the shape, i.e. `ndim` copies of the axis length.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.axis_len; self.ndim]
    }

    /// Returns the total number of cells.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the flat row-major storage.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Returns the value of a single cell, or `None` if `indices` does not
    /// address exactly one in-bounds cell.
    pub fn get(&self, indices: &[usize]) -> Option<i64> {
        if indices.len() != self.ndim {
            return None;
        }
        let range = self.block(indices)?;
        Some(self.data[range.start])
    }

    /// Returns a view of the sub-array selected by fixing the leading axes to
    /// `indices`. An empty `indices` views the whole array; a full index
    /// sequence views a single cell with zero remaining axes.
    pub fn view(&self, indices: &[usize]) -> Option<ArrayView<'_>> {
        let range = self.block(indices)?;
        Some(ArrayView {
            axis_len: self.axis_len,
            ndim: self.ndim - indices.len(),
            data: &self.data[range],
        })
    }

    /// Sets every cell of the sub-array selected by `indices` to `value` and
    /// returns the number of cells written, or `None` if out of bounds.
    pub fn fill(&mut self, indices: &[usize], value: i64) -> Option<usize> {
        let range = self.block(indices)?;
        let block = &mut self.data[range];
        block.fill(value);
        Some(block.len())
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
impl DenseArray {
    /// Flat range covered by fixing the leading axes to `indices`.
    fn block(&self, indices: &[usize]) -> Option<std::ops::Range<usize>> {
        if indices.len() > self.ndim || indices.iter().any(|&i| i >= self.axis_len) {
            return None;
        }

        let block_len = cell_count(self.axis_len, self.ndim - indices.len())?;
        let offset = indices
            .iter()
            .try_fold(0usize, |offset, &i| offset.checked_mul(self.axis_len)?.checked_add(i))?
            .checked_mul(block_len)?;

        Some(offset..offset.checked_add(block_len)?)
    }
}

/// Number of cells of `ndim` axes of length `axis_len`, `None` on overflow.
fn cell_count(axis_len: usize, ndim: usize) -> Option<usize> {
    u32::try_from(ndim).ok().and_then(|ndim| axis_len.checked_pow(ndim))
}

impl fmt::Display for DenseArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.view(&[]).ok_or(fmt::Error)?, f)
    }
}

// =#========================================================================#=
// ARRAY VIEW
// =#========================================================================#=
/// Borrowed sub-array of a [DenseArray], with its own (smaller) number of axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayView<'a> {
    axis_len: usize,
    ndim: usize,
    data: &'a [i64],
}

impl<'a> ArrayView<'a> {
    /// Returns the number of remaining axes.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Returns the shape of the view.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.axis_len; self.ndim]
    }

    /// Returns the viewed values in row-major order.
    pub fn as_slice(&self) -> &'a [i64] {
        self.data
    }

    /// Returns the single value if the view has no remaining axes.
    pub fn as_scalar(&self) -> Option<i64> {
        if self.ndim == 0 { self.data.first().copied() } else { None }
    }

    /// Copies the view into an owned [DenseArray].
    pub fn to_dense(&self) -> DenseArray {
        DenseArray {
            axis_len: self.axis_len,
            ndim: self.ndim,
            data: self.data.to_vec(),
        }
    }
}

impl fmt::Display for ArrayView<'_> {
    /// Writes nested brackets, e.g. `[[1, 2], [3, 4]]`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_block(f: &mut fmt::Formatter, data: &[i64], axis_len: usize, ndim: usize) -> fmt::Result {
            if ndim == 0 {
                return write!(f, "{}", data[0]);
            }

            let block_len = data.len() / axis_len.max(1);
            write!(f, "[")?;
            for i in 0..axis_len {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_block(f, &data[i * block_len..(i + 1) * block_len], axis_len, ndim - 1)?;
            }
            write!(f, "]")
        }

        write_block(f, self.data, self.axis_len, self.ndim)
    }
}
