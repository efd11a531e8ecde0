//! Densetree is a library for regular, labeled trees of fixed depth,
//! stored in a dense N-dimensional array.
//!
//! A tree of depth `d` over headers `(h_1, ..., h_k)` is a square
//! `d`-dimensional `i64` array whose axes all have length `k + 1`. Instead of
//! integer coordinates, branches are addressed by paths of headers.
//! Core functionality provided:
//! - Paths: Navigate with headers; the blank header [CURRENT] means "this
//!   branch itself, not a deeper one" and may only trail a path.
//!   When reading, a path ending in [CURRENT] is completed to full depth.
//! - Table model: [LabeledTable] with strict (single value) and lenient
//!   (whole branch) reads and writes. See [crate::model] for more details.
//! - Path helpers: validity checks and lazy enumeration of all valid paths,
//!   see [crate::path].
//! - Rendering: print the tree indented, one branch per line, see [crate::render].
//!
//! Limitations:
//! - All branches have the same headers (no ragged trees)
//! - Values are `i64`
//! - No file format; tables live in memory only
//!
//! # Usage patterns
//! ## Example Quick API
//! ```
//! use densetree::{CURRENT, new_table, render_tree};
//!
//! let mut table = new_table(&["A", "B", "C"], 3);
//! table.write_scalar(34, &["C", "A", CURRENT])?;
//!
//! assert_eq!(table.read_scalar(&["C", "A", CURRENT])?, 34);
//! assert!(render_tree(&table)?.contains("      ├─ A: 34\n"));
//! # Ok::<(), densetree::TableError>(())
//! ```
//!
//! ## Example Configuration
//! Wrap an existing array and render only the first level:
//! ```
//! use densetree::model::{DenseArray, LabeledTable};
//! use densetree::render::RenderOptions;
//!
//! let array = DenseArray::from_shape_vec(3, 2, (1..=9).collect())?;
//! let table = LabeledTable::from_array(array, &["A", "B"])?;
//!
//! let options = RenderOptions::new().with_max_level(1).with_indent_size(2);
//! // Level 1 paths without trailing CURRENT address whole branches
//! assert!(table.render(&options).is_err());
//!
//! let table = table.with_ignore_item_type();
//! assert_eq!(table.render(&options)?, "└─ Ω: 1\n  ├─ A: [4, 5, 6]\n  └─ B: [7, 8, 9]\n");
//! # Ok::<(), densetree::TableError>(())
//! ```

pub mod error;
pub mod model;
pub mod path;
pub mod render;

pub use crate::error::TableError;
pub use crate::path::CURRENT;

use crate::model::{DenseArray, LabeledTable};
use crate::render::RenderOptions;

// ============================================================================
// Quick Table API
// ============================================================================
/// Creates a zero-filled [LabeledTable] of the given depth.
///
/// See [`LabeledTable::new`] for full documentation.
///
/// # Panics
/// Panics if `(headers.len() + 1)^depth` overflows `usize`.
pub fn new_table<S: AsRef<str>>(headers: &[S], depth: usize) -> LabeledTable {
    LabeledTable::new(headers, depth)
}

/// Wraps an existing [DenseArray] into a [LabeledTable].
///
/// See [`LabeledTable::from_array`] for full documentation.
pub fn wrap_array<S: AsRef<str>>(array: DenseArray, headers: &[S]) -> Result<LabeledTable, TableError> {
    LabeledTable::from_array(array, headers)
}

// ============================================================================
// Quick Render API
// ============================================================================
/// Renders the full tree with default [RenderOptions].
///
/// See [`render::to_tree_string`] for full documentation.
pub fn render_tree(table: &LabeledTable) -> Result<String, TableError> {
    render::to_tree_string(table, &RenderOptions::default())
}
