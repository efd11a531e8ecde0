//! Helpers on label paths.
//!
//! A path is an ordered sequence of labels addressing a branch of a
//! [LabeledTable](crate::model::LabeledTable). The blank label [CURRENT]
//! means "stop at this branch" and may only appear as a trailing run:
//! `("A", CURRENT)` is fine, `(CURRENT, "A")` is not.
//!
//! All functions accept anything that derefs to `str` (`&str`, `String`, ...).

/// Special header to take the value of the branch itself, not of a deeper branch.
pub const CURRENT: &str = "";

/// Default label shown for a path without any non-blank label (the whole tree).
pub const ROOT_MARKER: &str = "Ω";

fn is_blank<S: AsRef<str>>(label: &S) -> bool {
    label.as_ref().is_empty()
}

/// Returns the last non-blank label of `path`, or `origin` if there is none.
///
/// # Examples
/// ```
/// use densetree::path::{rightmost_non_blank, CURRENT, ROOT_MARKER};
///
/// assert_eq!(rightmost_non_blank(&["Tui", CURRENT], ROOT_MARKER), "Tui");
/// assert_eq!(rightmost_non_blank(&[CURRENT, CURRENT], ROOT_MARKER), "Ω");
/// ```
pub fn rightmost_non_blank<'a, S: AsRef<str>>(path: &'a [S], origin: &'a str) -> &'a str {
    path.iter()
        .rev()
        .find(|label| !is_blank(*label))
        .map(|label| label.as_ref())
        .unwrap_or(origin)
}

/// Counts the non-blank labels of `path`; used as indentation depth when rendering.
pub fn count_non_blank<S: AsRef<str>>(path: &[S]) -> usize {
    path.iter().filter(|label| !is_blank(*label)).count()
}

/// Returns `true` iff all blanks of `path` form a contiguous suffix.
///
/// An empty path is trivially valid.
///
/// # Examples
/// ```
/// use densetree::path::{is_blank_suffix_only, CURRENT};
///
/// assert!(is_blank_suffix_only(&["Weka", "Kiwi"]));
/// assert!(is_blank_suffix_only(&["Weka", CURRENT, CURRENT]));
/// assert!(!is_blank_suffix_only(&["Weka", CURRENT, "Kiwi"]));
/// assert!(!is_blank_suffix_only(&[CURRENT, "Kiwi"]));
/// ```
pub fn is_blank_suffix_only<S: AsRef<str>>(path: &[S]) -> bool {
    first_misplaced_label(path).is_none()
}

/// Returns the position of the first non-blank label following a blank, if any.
pub fn first_misplaced_label<S: AsRef<str>>(path: &[S]) -> Option<usize> {
    let first_blank = path.iter().position(is_blank)?;
    path[first_blank..]
        .iter()
        .position(|label| !is_blank(label))
        .map(|offset| first_blank + offset)
}

/// Completes `path` to `depth` labels if it ends with [CURRENT].
///
/// A short path ending in [CURRENT] is shorthand for "this branch, held for
/// all remaining levels". Any other path is returned unchanged, as is a
/// path that is already `depth` long or longer.
///
/// # Examples
/// ```
/// use densetree::path::{complete_path, CURRENT};
///
/// assert_eq!(complete_path(&["A", CURRENT], 4), vec!["A", CURRENT, CURRENT, CURRENT]);
/// assert_eq!(complete_path(&["A", "B"], 4), vec!["A", "B"]);
/// ```
pub fn complete_path<S: AsRef<str>>(path: &[S], depth: usize) -> Vec<&str> {
    let mut completed: Vec<&str> = path.iter().map(|label| label.as_ref()).collect();
    if completed.last().is_some_and(|label| label.is_empty()) {
        while completed.len() < depth {
            completed.push(CURRENT);
        }
    }

    completed
}

/// Lazily enumerates every path of exactly `level` labels drawn from
/// `vocabulary` in which blanks only form a suffix.
///
/// Paths are ordered by the vocabulary position of their first label, then
/// recursively by the remainder. With `level` 1, every single label is
/// returned, including a blank one. A `level` of 0 is treated as 1.
///
/// # Examples
/// ```
/// use densetree::path::{enumerate_paths, CURRENT};
///
/// let vocabulary = [CURRENT, "A", "B"];
/// let paths: Vec<Vec<&str>> = enumerate_paths(&vocabulary, 2).collect();
///
/// assert!(paths.contains(&vec!["A", CURRENT]));
/// assert!(paths.contains(&vec!["A", "B"]));
/// assert!(!paths.contains(&vec![CURRENT, "A"]));
/// ```
pub fn enumerate_paths<S: AsRef<str>>(vocabulary: &[S], level: usize) -> PathIter<'_, S> {
    PathIter::new(vocabulary, level)
}

// =#========================================================================#=
// PATH ITERATOR
// =#========================================================================#=
/// Iterator returned by [enumerate_paths].
///
/// Walks the label combinations depth-first like an odometer over
/// vocabulary positions. As soon as a non-blank label would follow a blank,
/// all paths sharing that prefix are skipped at once.
#[derive(Debug, Clone)]
pub struct PathIter<'a, S> {
    vocabulary: &'a [S],
    /// Vocabulary position per path slot
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a, S: AsRef<str>> PathIter<'a, S> {
    fn new(vocabulary: &'a [S], level: usize) -> Self {
        PathIter {
            vocabulary,
            odometer: vec![0; level.max(1)],
            exhausted: vocabulary.is_empty(),
        }
    }

    /// Labels at the current odometer position
    fn current(&self) -> Vec<&'a str> {
        let vocabulary = self.vocabulary;
        self.odometer.iter().map(|&i| vocabulary[i].as_ref()).collect()
    }

    /// Advances slot `slot`, resetting all slots after it.
    fn advance_at(&mut self, slot: usize) {
        for later in &mut self.odometer[slot + 1..] {
            *later = 0;
        }

        let mut slot = slot;
        loop {
            self.odometer[slot] += 1;
            if self.odometer[slot] < self.vocabulary.len() {
                return;
            }
            self.odometer[slot] = 0;
            if slot == 0 {
                self.exhausted = true;
                return;
            }
            slot -= 1;
        }
    }
}

impl<'a, S: AsRef<str>> Iterator for PathIter<'a, S> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let labels = self.current();
            match first_misplaced_label(&labels) {
                None => {
                    self.advance_at(self.odometer.len() - 1);
                    return Some(labels);
                }
                // Nothing with this prefix can be valid
                Some(position) => self.advance_at(position),
            }
        }

        None
    }
}
