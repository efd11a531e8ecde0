//! Default glyphs and sizes for tree rendering.

/// Default number of spaces per indentation level
pub(crate) const DEFAULT_INDENT_SIZE: usize = 3;

/// Default glyph in front of a branch with further siblings below it
pub(crate) const BRANCH: &str = "├─ ";

/// Default glyph in front of the last branch among its siblings
pub(crate) const BRANCH_LAST: &str = "└─ ";

/// Extra chars per line in capacity estimates (glyph, ": ", value digits)
pub(crate) const BUFFER_CHARS_PER_LINE: usize = 16;
