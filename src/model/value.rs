//! Result of reading a path: a single value or a whole branch.

use crate::model::array::ArrayView;
use std::fmt;

/// What a path addresses in a [LabeledTable](crate::model::LabeledTable).
///
/// A path with one label per axis addresses a [Value::Scalar]; a shorter
/// path addresses a [Value::Branch] over the remaining axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Scalar(i64),
    Branch(ArrayView<'a>),
}

impl<'a> Value<'a> {
    /// Returns the number if this is a [Value::Scalar].
    pub fn as_scalar(&self) -> Option<i64> {
        match self {
            Value::Scalar(value) => Some(*value),
            Value::Branch(_) => None,
        }
    }

    /// Returns the sub-array if this is a [Value::Branch].
    pub fn as_branch(&self) -> Option<ArrayView<'a>> {
        match self {
            Value::Scalar(_) => None,
            Value::Branch(view) => Some(*view),
        }
    }

    /// Returns `true` iff this is a [Value::Scalar].
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Scalar(value) => write!(f, "{value}"),
            Value::Branch(view) => write!(f, "{view}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DenseArray;

    #[test]
    fn test_is_scalar() {
        assert!(Value::Scalar(3).is_scalar());

        let array = DenseArray::zeros(2, 2);
        assert!(!Value::Branch(array.view(&[1]).unwrap()).is_scalar());
    }
}
