use std::{error, fmt};

/// Error enumerates over all invariant violations that [`Llrb::validate`]
/// can detect. None of the index operations fail at runtime, these are
/// returned only by the validator.
///
/// [`Llrb::validate`]: crate::Llrb::validate
#[derive(Debug, PartialEq)]
pub enum Error<K> {
    /// Fatal case, a red node has a red child.
    ConsecutiveReds,
    /// Fatal case, left and right sub-trees differ in black height. The
    /// String component of this variant can be used for debugging.
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order, (child, parent).
    SortError(K, K),
    /// Root node is red after a write operation.
    RedRoot,
    /// Red link leaning right, only an error for the bottom-up split mode.
    RightLeaningRed,
    /// Cached subtree size does not match the actual node count.
    SizeMismatch(String),
}

impl<K> fmt::Display for Error<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ConsecutiveReds => write!(f, "consecutive red links"),
            Error::UnbalancedBlacks(s) => write!(f, "unbalanced blacks {}", s),
            Error::SortError(child, parent) => {
                write!(f, "sort error child:{:?} parent:{:?}", child, parent)
            }
            Error::RedRoot => write!(f, "root is red"),
            Error::RightLeaningRed => write!(f, "right leaning red link"),
            Error::SizeMismatch(s) => write!(f, "size mismatch {}", s),
        }
    }
}

impl<K> error::Error for Error<K> where K: fmt::Debug {}
