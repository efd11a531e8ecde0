//! Tree text writing for [LabeledTable].

use crate::error::TableError;
use crate::model::LabeledTable;
use crate::path::{count_non_blank, enumerate_paths, rightmost_non_blank};
use crate::render::RenderOptions;
use crate::render::defs::BUFFER_CHARS_PER_LINE;
use std::io::{BufWriter, Write};

/// Returns one line per valid path of the rendered level, in enumeration order.
///
/// # Arguments
/// * `table` - The table to render
/// * `options` - [RenderOptions] for level, indentation, glyphs and root marker
///
/// # Errors
/// Propagates errors of [LabeledTable::read], e.g. [TableError::NotAScalar]
/// when a strict table is rendered below its depth, or
/// [TableError::TooManyLabels] when the level exceeds the depth.
///
/// # Example
/// ```
/// use densetree::model::LabeledTable;
/// use densetree::path::CURRENT;
/// use densetree::render::{RenderOptions, render_lines};
///
/// let mut table = LabeledTable::new(&["Kiwi", "Weka"], 2);
/// table.write_scalar(7, &["Weka", CURRENT])?;
///
/// let lines = render_lines(&table, &RenderOptions::default())?;
/// assert_eq!(lines[0], "└─ Ω: 0");
/// assert_eq!(lines[4], "   └─ Weka: 7");
/// # Ok::<(), densetree::TableError>(())
/// ```
pub fn render_lines(table: &LabeledTable, options: &RenderOptions) -> Result<Vec<String>, TableError> {
    let line_capacity = estimate_line_len(table, options);
    enumerate_paths(table.headers().headers(), options.level_for(table))
        .map(|path| render_line(table, options, &path, line_capacity))
        .collect()
}

/// Returns the rendered tree as a single string, each line terminated by `\n`.
///
/// See [render_lines] for errors.
pub fn to_tree_string(table: &LabeledTable, options: &RenderOptions) -> Result<String, TableError> {
    let mut tree = String::new();
    for line in render_lines(table, options)? {
        tree.push_str(&line);
        tree.push('\n');
    }

    Ok(tree)
}

/// Writes the rendered tree line by line into `writer`.
///
/// Lines are produced lazily, so a failing read stops the output at the
/// offending line.
///
/// # Errors
/// See [render_lines]; I/O failures are reported as [TableError::Io].
///
/// # Example
/// ```
/// use densetree::model::LabeledTable;
/// use densetree::render::{RenderOptions, write_tree};
///
/// let table = LabeledTable::new(&["Kiwi"], 1);
/// let mut out = Vec::new();
/// write_tree(&mut out, &table, &RenderOptions::default())?;
///
/// assert_eq!(String::from_utf8(out).unwrap(), "└─ Ω: 0\n   └─ Kiwi: 0\n");
/// # Ok::<(), densetree::TableError>(())
/// ```
pub fn write_tree<W: Write>(writer: W, table: &LabeledTable, options: &RenderOptions) -> Result<(), TableError> {
    let mut writer = BufWriter::new(writer);
    let line_capacity = estimate_line_len(table, options);
    for path in enumerate_paths(table.headers().headers(), options.level_for(table)) {
        let line = render_line(table, options, &path, line_capacity)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders a single path as `<indent><glyph><label>: <value>`.
fn render_line(table: &LabeledTable, options: &RenderOptions, path: &[&str], capacity: usize) -> Result<String, TableError> {
    let label = rightmost_non_blank(path, options.root_marker());
    // The root marker is no header, so it always counts as last
    let is_last = label == table.headers().last_header() || !table.headers().contains_header(label);
    let glyph = if is_last { options.branch_last() } else { options.branch() };
    let value = table.read(path)?;

    let mut line = String::with_capacity(capacity);
    line.extend(std::iter::repeat_n(' ', options.indent_size() * count_non_blank(path)));
    line.push_str(glyph);
    line.push_str(label);
    line.push_str(": ");
    line.push_str(&value.to_string());

    Ok(line)
}

/// Estimates the length of the longest line of a scalar rendering,
/// used to pre-allocate line capacity.
fn estimate_line_len(table: &LabeledTable, options: &RenderOptions) -> usize {
    let max_header_len = table
        .headers()
        .headers()
        .iter()
        .map(|header| header.len())
        .max()
        .unwrap_or(0)
        .max(options.root_marker().len());

    options.indent_size() * options.level_for(table)
        + options.branch().len().max(options.branch_last().len())
        + max_header_len
        + BUFFER_CHARS_PER_LINE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CURRENT;

    #[test]
    fn test_root_line_uses_last_glyph() {
        let table = LabeledTable::new(&["A", "B"], 2);
        let lines = render_lines(&table, &RenderOptions::default()).unwrap();
        assert_eq!(lines[0], "└─ Ω: 0");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_level_beyond_depth_fails() {
        let table = LabeledTable::new(&["A"], 1);
        let options = RenderOptions::default().with_max_level(2);
        assert!(matches!(render_lines(&table, &options), Err(TableError::TooManyLabels { .. })));
    }

    #[test]
    fn test_lenient_table_renders_branches_below_depth() {
        let mut table = LabeledTable::new(&["A"], 2).with_ignore_item_type();
        table.write_scalar(2, &["A", "A"]).unwrap();
        table.write_scalar(1, &["A", CURRENT]).unwrap();

        let lines = render_lines(&table, &RenderOptions::default().with_max_level(1)).unwrap();
        assert_eq!(lines, vec!["└─ Ω: 0", "   └─ A: [1, 2]"]);
    }
}
