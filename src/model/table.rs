//! Labeled table module: a fixed-depth tree stored in a dense array.
//!
//! This module provides the core data structure of the crate:
//! - `LabeledTable`: a square N-dimensional array whose axes are all indexed
//!   by the same header vocabulary, navigated with label paths.

use crate::error::TableError;
use crate::model::array::DenseArray;
use crate::model::header_map::{HeaderIndex, HeaderMap};
use crate::model::value::Value;
use crate::path::{complete_path, first_misplaced_label};
use crate::render::{RenderOptions, to_tree_string};
use std::fmt;

// =#========================================================================#=
// LABELED TABLE
// =#========================================================================#=
/// A regular tree of fixed depth, represented by a dense `i64` array.
///
/// Each axis of the array stands for one level of the tree, and each
/// position along an axis for one header of the vocabulary. A path of
/// headers is thus translated into array indices, one per level.
///
/// # Structure
/// - The vocabulary is `(CURRENT, h_1, ..., h_k)`, so every axis has length `k + 1`
/// - [CURRENT](crate::path::CURRENT) at position 0 stands for "the branch itself":
///   the value of branch `A` (ignoring its sub-branches) lives at `(A, CURRENT, ..., CURRENT)`
/// - Values must be stored for every branch, not only for the leaves
///
/// For depth 2 and headers `(A, B)`, with `Crt` for [CURRENT](crate::path::CURRENT):
/// ```text
///         Crt  A    B
///   Crt   1    2    3
///     A   4    5    6
///     B   7    8    9
/// ```
/// Here `1` is the value of the whole tree, `4` the value of branch `A`,
/// and `6` the value of branch `B` under `A`.
///
/// # Reading and writing
/// Reads complete a path ending in [CURRENT](crate::path::CURRENT) to full
/// depth; writes resolve paths as given. Each comes in three flavours:
/// - [read_scalar](Self::read_scalar) / [write_scalar](Self::write_scalar):
///   fail with [TableError::NotAScalar] if the path addresses a whole branch
/// - [read_any](Self::read_any) / [write_any](Self::write_any): accept whole branches
/// - [read](Self::read) / [write](Self::write): strict unless
///   [ignore_item_type](Self::ignore_item_type) is set
///
/// # Example
/// ```
/// use densetree::model::LabeledTable;
/// use densetree::path::CURRENT;
///
/// let mut table = LabeledTable::new(&["A", "B", "C"], 3);
/// table.write_scalar(34, &["C", "A", CURRENT])?;
///
/// assert_eq!(table.read_scalar(&["C", "A", CURRENT])?, 34);
/// // Shorthand: trailing CURRENT is repeated to full depth when reading
/// assert_eq!(table.read_scalar(&["C", CURRENT])?, 0);
/// # Ok::<(), densetree::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LabeledTable {
    /// Vocabulary shared by all axes, [CURRENT](crate::path::CURRENT) first
    headers: HeaderMap,

    /// Number of axes, i.e. maximum path length
    depth: usize,

    /// Values of all branches
    array: DenseArray,

    /// If set, [read](Self::read) and [write](Self::write) accept paths addressing whole branches
    ignore_item_type: bool,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl LabeledTable {
    /// Creates a new zero-filled table.
    ///
    /// # Arguments
    /// * `headers` - Ordered, distinct headers; [CURRENT](crate::path::CURRENT) gets prepended
    /// * `depth` - Number of levels of the tree
    ///
    /// # Panics
    /// Panics if `(headers.len() + 1)^depth` overflows `usize`.
    pub fn new<S: AsRef<str>>(headers: &[S], depth: usize) -> Self {
        let headers = HeaderMap::new(headers);
        let array = DenseArray::zeros(headers.num_headers(), depth);
        tracing::debug!(depth, num_headers = headers.num_headers(), "Created zero-filled labeled table");

        LabeledTable { headers, depth, array, ignore_item_type: false }
    }

    /// Creates a table around an existing array, taking ownership of it.
    ///
    /// The depth of the table is the number of axes of `array`.
    ///
    /// # Arguments
    /// * `array` - Values of all branches; every axis must have length `headers.len() + 1`
    /// * `headers` - Ordered, distinct headers; [CURRENT](crate::path::CURRENT) gets prepended
    ///
    /// # Errors
    /// [TableError::ShapeMismatch] if the axis length of `array` does not
    /// match the number of headers.
    pub fn from_array<S: AsRef<str>>(array: DenseArray, headers: &[S]) -> Result<Self, TableError> {
        let headers = HeaderMap::new(headers);
        if array.axis_len() != headers.num_headers() && array.ndim() > 0 {
            return Err(TableError::ShapeMismatch {
                expected: format!("axes of length {} for headers {headers}", headers.num_headers()),
                found: format!("shape {:?}", array.shape()),
            });
        }

        let depth = array.ndim();
        tracing::debug!(depth, num_headers = headers.num_headers(), "Wrapped array in labeled table");

        Ok(LabeledTable { headers, depth, array, ignore_item_type: false })
    }

    /// Consumes the table, returning its array.
    pub fn into_array(self) -> DenseArray {
        self.array
    }

    /// Returns the header vocabulary, [CURRENT](crate::path::CURRENT) first.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the number of headers, including [CURRENT](crate::path::CURRENT).
    pub fn num_headers(&self) -> usize {
        self.headers.num_headers()
    }

    /// Returns the depth, i.e. the number of axes and maximum path length.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the underlying array.
    pub fn array(&self) -> &DenseArray {
        &self.array
    }

    /// Returns whether [read](Self::read) and [write](Self::write) accept whole branches.
    pub fn ignore_item_type(&self) -> bool {
        self.ignore_item_type
    }

    /// Sets whether [read](Self::read) and [write](Self::write) accept whole branches.
    pub fn set_ignore_item_type(&mut self, ignore_item_type: bool) {
        self.ignore_item_type = ignore_item_type;
    }

    /// Builder-style variant of [set_ignore_item_type(true)](Self::set_ignore_item_type).
    pub fn with_ignore_item_type(mut self) -> Self {
        self.ignore_item_type = true;
        self
    }
}

// ============================================================================
// Addressing (pub)
// ============================================================================
impl LabeledTable {
    /// Translates a path of headers into array indices.
    ///
    /// No completion is applied; a path shorter than the depth resolves to
    /// the indices of a sub-array.
    ///
    /// # Errors
    /// * [TableError::TooManyLabels] if the path is longer than the depth
    /// * [TableError::UnknownLabel] if a label is not a header of this table
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<HeaderIndex>, TableError> {
        if path.len() > self.depth {
            return Err(TableError::TooManyLabels { len: path.len(), depth: self.depth });
        }

        let indices = path
            .iter()
            .map(|label| {
                let label = label.as_ref();
                self.headers
                    .get_index(label)
                    .ok_or_else(|| TableError::UnknownLabel { label: label.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(?indices, "Resolved path");
        Ok(indices)
    }

    /// Completes a path ending with [CURRENT](crate::path::CURRENT) to full depth.
    ///
    /// See [complete_path](crate::path::complete_path).
    pub fn complete<'p, S: AsRef<str>>(&self, path: &'p [S]) -> Vec<&'p str> {
        complete_path(path, self.depth)
    }
}

// ============================================================================
// Reading (pub)
// ============================================================================
impl LabeledTable {
    /// Returns what `path` addresses: a single value or a whole branch.
    ///
    /// A path ending in [CURRENT](crate::path::CURRENT) is first completed
    /// to full depth, so `&[CURRENT]` addresses the root cell
    /// `(CURRENT, ..., CURRENT)` and yields a scalar. Use the empty path `&[]`
    /// to read the whole array.
    ///
    /// # Errors
    /// * [TableError::MisplacedCurrent] if a label follows a [CURRENT](crate::path::CURRENT)
    /// * [TableError::TooManyLabels] / [TableError::UnknownLabel] see [resolve](Self::resolve)
    pub fn read_any<S: AsRef<str>>(&self, path: &[S]) -> Result<Value<'_>, TableError> {
        if let Some(position) = first_misplaced_label(path) {
            return Err(TableError::misplaced_current(path, position));
        }

        let indices = self.resolve(&self.complete(path))?;
        self.value_at(&indices)
    }

    /// Returns the single value addressed by `path`.
    ///
    /// Same as [read_any](Self::read_any), but the path must address one cell.
    ///
    /// # Errors
    /// As [read_any](Self::read_any), and [TableError::NotAScalar] if the path
    /// addresses a whole branch.
    pub fn read_scalar<S: AsRef<str>>(&self, path: &[S]) -> Result<i64, TableError> {
        match self.read_any(path)? {
            Value::Scalar(value) => Ok(value),
            Value::Branch(view) => Err(TableError::not_a_scalar(path, view.ndim())),
        }
    }

    /// Reads `path` like [read_scalar](Self::read_scalar), or like
    /// [read_any](Self::read_any) if [ignore_item_type](Self::ignore_item_type) is set.
    pub fn read<S: AsRef<str>>(&self, path: &[S]) -> Result<Value<'_>, TableError> {
        if self.ignore_item_type {
            let value = self.read_any(path)?;
            if let Value::Branch(view) = value {
                tracing::debug!(remaining_axes = view.ndim(), "Read whole branch, item type ignored");
            }
            Ok(value)
        } else {
            self.read_scalar(path).map(Value::Scalar)
        }
    }
}

// ============================================================================
// Writing (pub)
// ============================================================================
impl LabeledTable {
    /// Sets the single value addressed by `path`.
    ///
    /// No completion is applied: the path must name one label per level,
    /// e.g. `("C", "A", CURRENT)` rather than `("C", "A")` in a tree of depth 3.
    ///
    /// # Errors
    /// * [TableError::TooManyLabels] / [TableError::UnknownLabel] see [resolve](Self::resolve)
    /// * [TableError::NotAScalar] if the path addresses a whole branch
    pub fn write_scalar<S: AsRef<str>>(&mut self, value: i64, path: &[S]) -> Result<(), TableError> {
        self.write_resolved(value, path, true)
    }

    /// Sets all values addressed by `path`, i.e. a single value or every
    /// value of a branch. The empty path overwrites the whole array.
    ///
    /// # Errors
    /// [TableError::TooManyLabels] / [TableError::UnknownLabel] see [resolve](Self::resolve)
    pub fn write_any<S: AsRef<str>>(&mut self, value: i64, path: &[S]) -> Result<(), TableError> {
        self.write_resolved(value, path, false)
    }

    /// Writes like [write_scalar](Self::write_scalar), or like
    /// [write_any](Self::write_any) if [ignore_item_type](Self::ignore_item_type) is set.
    pub fn write<S: AsRef<str>>(&mut self, value: i64, path: &[S]) -> Result<(), TableError> {
        self.write_resolved(value, path, !self.ignore_item_type)
    }
}

// ============================================================================
// Rendering (pub)
// ============================================================================
impl LabeledTable {
    /// Returns the tree as indented text, one line per branch.
    ///
    /// See [render](crate::render) for the format.
    pub fn render(&self, options: &RenderOptions) -> Result<String, TableError> {
        to_tree_string(self, options)
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
impl LabeledTable {
    fn value_at(&self, indices: &[HeaderIndex]) -> Result<Value<'_>, TableError> {
        let view = self.array.view(indices).ok_or_else(|| self.out_of_bounds(indices))?;
        Ok(match view.as_scalar() {
            Some(value) => Value::Scalar(value),
            None => Value::Branch(view),
        })
    }

    fn write_resolved<S: AsRef<str>>(&mut self, value: i64, path: &[S], strict: bool) -> Result<(), TableError> {
        let indices = self.resolve(path)?;

        let remaining_axes = self.depth - indices.len();
        if strict && remaining_axes > 0 {
            return Err(TableError::not_a_scalar(path, remaining_axes));
        }

        let cells = self.array.fill(&indices, value).ok_or_else(|| self.out_of_bounds(&indices))?;
        tracing::debug!(value, ?indices, cells, "Updated table");

        Ok(())
    }

    fn out_of_bounds(&self, indices: &[HeaderIndex]) -> TableError {
        TableError::ShapeMismatch {
            expected: format!("indices {indices:?} within shape"),
            found: format!("shape {:?}", self.array.shape()),
        }
    }
}

impl fmt::Display for LabeledTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "LabeledTable(")?;
        writeln!(f, "    array=(")?;
        writeln!(f, "        size={},", self.array.size())?;
        writeln!(f, "        ndim={},", self.array.ndim())?;
        writeln!(f, "        shape={:?},", self.array.shape())?;
        writeln!(f, "    ),")?;
        writeln!(f, "    headers={},", self.headers)?;
        writeln!(f, "    depth={},", self.depth)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CURRENT;

    #[test]
    fn test_failed_write_leaves_table_untouched() {
        let mut table = LabeledTable::new(&["A", "B"], 2);
        assert!(table.write_scalar(5, &["A"]).is_err());
        assert!(table.write_scalar(5, &["A", "Z"]).is_err());
        assert!(table.array().as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_from_array_rejects_wrong_axis_length() {
        let array = DenseArray::zeros(3, 2);
        let result = LabeledTable::from_array(array, &["A", "B", "C"]);
        assert!(matches!(result, Err(TableError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_display_summary() {
        let table = LabeledTable::new(&["A", "B", "C"], 3);
        let summary = table.to_string();
        assert!(summary.contains("size=64,"));
        assert!(summary.contains("shape=[4, 4, 4],"));
        assert!(summary.contains("depth=3,"));
    }

    #[test]
    fn test_write_mode_follows_flag() {
        let mut table = LabeledTable::new(&["A", "B"], 2);
        assert!(matches!(table.write(3, &["B"]), Err(TableError::NotAScalar { .. })));

        table.set_ignore_item_type(true);
        table.write(3, &["B"]).unwrap();
        assert_eq!(table.read_scalar(&["B", CURRENT]).unwrap(), 3);
        assert_eq!(table.read_scalar(&["B", "A"]).unwrap(), 3);
        assert_eq!(table.read_scalar(&["A", "B"]).unwrap(), 0);
    }
}
