//! Error type for addressing and updating a [LabeledTable](crate::model::LabeledTable).
//!
//! Every fallible operation of this crate returns a [TableError]. Errors are
//! reported as soon as they are detected; a failed write never mutates the
//! table.

use thiserror::Error;

// =#========================================================================#=
// TABLE ERROR
// =#========================================================================#=
/// Errors that can occur while resolving, reading or writing table paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Path has more labels than the table has axes.
    #[error("Too many headers: {len} given for a tree of depth {depth}")]
    TooManyLabels { len: usize, depth: usize },

    /// A path element is not part of the header vocabulary.
    #[error("Header '{label}' not in the tree's headers")]
    UnknownLabel { label: String },

    /// A concrete label follows a `CURRENT` in a read path.
    #[error("CURRENT is only allowed at the end of a path, found label at position {position} in {path:?}")]
    MisplacedCurrent { path: Vec<String>, position: usize },

    /// A strict read or write addresses a sub-array instead of a single cell.
    #[error("Path {path:?} addresses a branch with {remaining_axes} remaining axes, not a single value")]
    NotAScalar { path: Vec<String>, remaining_axes: usize },

    /// Array shape does not match what was expected.
    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    /// Writing rendered output failed.
    #[error("IO error - {0}")]
    Io(String),
}

impl TableError {
    /// Convenience constructor for [TableError::MisplacedCurrent]
    pub(crate) fn misplaced_current<S: AsRef<str>>(path: &[S], position: usize) -> Self {
        TableError::MisplacedCurrent { path: to_owned_path(path), position }
    }

    /// Convenience constructor for [TableError::NotAScalar]
    pub(crate) fn not_a_scalar<S: AsRef<str>>(path: &[S], remaining_axes: usize) -> Self {
        TableError::NotAScalar { path: to_owned_path(path), remaining_axes }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err.to_string())
    }
}

fn to_owned_path<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|label| label.as_ref().to_string()).collect()
}
