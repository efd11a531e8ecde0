//! Text rendering of a [LabeledTable] as an indented tree.
//!
//! Every valid path up to a maximum level is rendered on its own line, in
//! depth-first, header-ordered fashion:
//! * `<indent><glyph><label>: <value>`
//!
//! where
//! * `label` is the rightmost non-blank header of the path, or the root
//!   marker (`Ω` by default) for the all-[CURRENT](crate::path::CURRENT) path
//! * `indent` is the indentation size times the number of non-blank headers
//! * `glyph` is the "last" glyph for the last header and the root, the
//!   regular branch glyph otherwise
//! * `value` is the value read at the path with [LabeledTable::read]
//!
//! For a tree of depth 2 on headers `(A, B)` this yields:
//! ```text
//! └─ Ω: 1
//!    ├─ A: 4
//!       ├─ A: 5
//!       └─ B: 6
//!    └─ B: 7
//!       ├─ A: 8
//!       └─ B: 9
//! ```
//!
//! # API
//! * [render_lines] - lines as a vector
//! * [to_tree_string] - newline-terminated lines as one string
//! * [write_tree] - stream the lines into any [Write](std::io::Write)
//!
//! All are configured with [RenderOptions].

mod defs;
pub mod writer;

pub use self::writer::{render_lines, to_tree_string, write_tree};

use crate::model::LabeledTable;
use crate::path::ROOT_MARKER;
use self::defs::{BRANCH, BRANCH_LAST, DEFAULT_INDENT_SIZE};

// =#========================================================================#=
// RENDER OPTIONS
// =#========================================================================#=
/// Configuration of tree rendering.
///
/// Defaults:
/// - Render all levels (up to the depth of the table)
/// - Indentation of 3 spaces per level
/// - Glyphs `├─ ` and `└─ `
/// - Root marker `Ω`
///
/// # Example
/// ```
/// use densetree::model::LabeledTable;
/// use densetree::render::RenderOptions;
///
/// let table = LabeledTable::new(&["A", "B"], 1);
/// let options = RenderOptions::new()
///     .with_max_level(1)
///     .with_indent_size(2)
///     .with_branch_glyphs("+ ", "\\ ")
///     .with_root_marker("*");
///
/// assert_eq!(table.render(&options)?, "\\ *: 0\n  + A: 0\n  \\ B: 0\n");
/// # Ok::<(), densetree::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    max_level: Option<usize>,
    indent_size: usize,
    branch: String,
    branch_last: String,
    root_marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_level: None,
            indent_size: DEFAULT_INDENT_SIZE,
            branch: BRANCH.to_string(),
            branch_last: BRANCH_LAST.to_string(),
            root_marker: ROOT_MARKER.to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders paths of `max_level` labels instead of the full depth.
    ///
    /// On a strict table, any level below the depth fails on paths not
    /// ending in [CURRENT](crate::path::CURRENT), since those address whole
    /// branches; see [LabeledTable::with_ignore_item_type].
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Sets the number of spaces per indentation level.
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Sets the glyphs in front of a regular and of a last branch.
    pub fn with_branch_glyphs<S: Into<String>>(mut self, branch: S, branch_last: S) -> Self {
        self.branch = branch.into();
        self.branch_last = branch_last.into();
        self
    }

    /// Sets the label shown for the root.
    pub fn with_root_marker<S: Into<String>>(mut self, root_marker: S) -> Self {
        self.root_marker = root_marker.into();
        self
    }

    /// Returns the level to render for `table`.
    pub fn level_for(&self, table: &LabeledTable) -> usize {
        self.max_level.unwrap_or(table.depth())
    }

    /// Spaces of indentation per non-blank label.
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Glyph in front of a label that has later siblings.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Glyph in front of the last label among its siblings.
    pub fn branch_last(&self) -> &str {
        &self.branch_last
    }

    /// Label shown for paths without any non-blank label.
    pub fn root_marker(&self) -> &str {
        &self.root_marker
    }
}
