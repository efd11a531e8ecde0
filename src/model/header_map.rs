//! Header vocabulary of a labeled table.
//!
//! - `HeaderMap`: ordered headers (prefixed by `CURRENT`) plus lookup of their axis index.

use crate::path::CURRENT;
use std::collections::HashMap;
use std::fmt;

/// Position of a header along every axis of a table.
pub type HeaderIndex = usize;

// =#========================================================================#=
// HEADER MAP
// =#========================================================================#=
/// Maps headers (strings) to their position along the axes of a table.
///
/// [CURRENT] is always the first header, so a map built from `k` headers
/// holds `k + 1` entries, one per position of every axis. Headers are
/// expected to be distinct; should one repeat, lookups resolve to its first
/// position while the repeated entry still occupies an axis position.
///
/// # Example
/// ```
/// use densetree::model::HeaderMap;
/// use densetree::path::CURRENT;
///
/// let headers = HeaderMap::new(&["Kaka", "Kea"]);
///
/// assert_eq!(headers.num_headers(), 3);
/// assert_eq!(headers.get_index(CURRENT), Some(0));
/// assert_eq!(headers.get_index("Kea"), Some(2));
/// assert_eq!(headers.get_header(1), Some("Kaka"));
/// ```
#[derive(Debug, Clone)]
pub struct HeaderMap {
    /// Headers in axis order, [CURRENT] first
    headers: Vec<String>,
    /// Map from header to its first position
    map: HashMap<String, HeaderIndex>,
}

impl HeaderMap {
    /// Creates a new HeaderMap, inserting [CURRENT] in front of `headers`.
    ///
    /// # Arguments
    /// * `headers` - Ordered, distinct headers
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut header_map = HeaderMap {
            headers: Vec::with_capacity(headers.len() + 1),
            map: HashMap::with_capacity(headers.len() + 1),
        };

        header_map.push(CURRENT);
        for header in headers {
            header_map.push(header.as_ref());
        }

        header_map
    }

    /// Retrieves the axis index for a given header.
    ///
    /// # Returns
    /// `Some(index)` of its first position if the header exists, `None` otherwise
    pub fn get_index(&self, header: &str) -> Option<HeaderIndex> {
        self.map.get(header).copied()
    }

    /// Retrieves the header at a given axis index.
    pub fn get_header(&self, index: HeaderIndex) -> Option<&str> {
        self.headers.get(index).map(|s| s.as_str())
    }

    /// Checks if a header exists in the map.
    pub fn contains_header(&self, header: &str) -> bool {
        self.map.contains_key(header)
    }

    /// Returns the number of headers, including [CURRENT]; this is the length
    /// of every axis of the table.
    pub fn num_headers(&self) -> usize {
        self.headers.len()
    }

    /// Returns the last header in axis order.
    pub fn last_header(&self) -> &str {
        self.headers.last().map(|s| s.as_str()).unwrap_or(CURRENT)
    }

    /// Returns all headers in axis order, [CURRENT] first.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn push(&mut self, header: &str) {
        let index = self.headers.len();
        self.headers.push(header.to_string());
        self.map.entry(header.to_string()).or_insert(index);
    }
}

impl fmt::Display for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (idx, header) in self.headers.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{header:?}")?;
        }
        write!(f, ")")
    }
}

impl std::ops::Index<HeaderIndex> for HeaderMap {
    type Output = str;

    fn index(&self, index: HeaderIndex) -> &Self::Output {
        &self.headers[index]
    }
}
