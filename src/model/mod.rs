//! Data model for labeled fixed-depth trees.
//!
//! # Tree representation
//! Trees are represented by [LabeledTable], which stores the value of every
//! branch in a [DenseArray]. All axes of the array are indexed by the same
//! [HeaderMap], so a path of headers addresses either a single value or a
//! whole sub-tree, returned as a [Value].
//!
//! | Type | Role |
//! |------|------|
//! | [LabeledTable] | Vocabulary + array; reading, writing and rendering by path |
//! | [HeaderMap] | Headers in axis order, [CURRENT](crate::path::CURRENT) first, with [HeaderIndex] lookup |
//! | [DenseArray] / [ArrayView] | Square row-major `i64` storage and borrowed sub-arrays |
//! | [Value] | Single value or branch returned by reads |

pub mod array;
pub mod header_map;
pub mod table;
pub mod value;

pub use array::{ArrayView, DenseArray};
pub use header_map::{HeaderIndex, HeaderMap};
pub use table::LabeledTable;
pub use value::Value;
