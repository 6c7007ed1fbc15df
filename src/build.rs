//! Bulk construction of a [`Tree`] from existing sequences of values.
//!
//! The slice-and-count form, [`Tree::build`], mirrors callers that hold a
//! buffer and want a tree of its first `count` elements. Callers consuming
//! a whole iterator can `collect` instead:
//!
//! ```
//! use ordtree::Tree;
//!
//! let tree: Tree<i32> = [3, 1, 2].iter().copied().collect();
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use crate::tree::Tree;

/// Errors triggered by bulk tree construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The requested prefix is longer than the input sequence.
    #[error("requested a prefix of {requested} elements but the input only has {available}")]
    PrefixOutOfRange {
        /// How many elements the caller asked to insert.
        requested: usize,
        /// How many elements the input sequence actually has.
        available: usize,
    },
}

impl<T> Tree<T> {
    /// Builds a tree from the first `count` elements of `elements`,
    /// inserting them one at a time in sequence order. Values that repeat
    /// within the prefix are inserted once (first occurrence wins).
    ///
    /// The resulting shape is fully determined by the input *order*, not
    /// just the input set: different permutations of the same values
    /// generally produce trees of different heights.
    ///
    /// Fails with [`BuildError::PrefixOutOfRange`] when `count` exceeds
    /// the sequence length. The check happens before any insertion, so an
    /// error never leaves a partially built tree behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{BuildError, Tree};
    ///
    /// let values = [4, 2, 6, 3, 1, 5, 7];
    ///
    /// let tree = Tree::build(&values, 3)?;
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
    ///
    /// assert!(matches!(
    ///     Tree::build(&values, 8),
    ///     Err(BuildError::PrefixOutOfRange { requested: 8, available: 7 }),
    /// ));
    /// # Ok::<(), BuildError>(())
    /// ```
    pub fn build(elements: &[T], count: usize) -> Result<Self, BuildError>
    where
        T: Ord + Clone,
    {
        let prefix = elements.get(..count).ok_or(BuildError::PrefixOutOfRange {
            requested: count,
            available: elements.len(),
        })?;

        Ok(prefix.iter().cloned().collect())
    }
}

impl<T> std::iter::FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_takes_a_prefix() {
        let values = [4, 2, 6, 3, 1, 5, 7];

        let tree = Tree::build(&values, 4).unwrap();

        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 6]);
        assert!(tree.search(&1).is_none());
    }

    #[test]
    fn build_of_full_sequence_matches_collect() {
        let values = [4, 2, 6, 3, 1, 5, 7];

        let built = Tree::build(&values, values.len()).unwrap();
        let collected: Tree<i32> = values.iter().copied().collect();

        assert_eq!(built, collected);
    }

    #[test]
    fn build_of_empty_prefix_is_empty() {
        let tree = Tree::build(&[1, 2, 3], 0).unwrap();
        assert!(tree.is_empty());

        let tree: Tree<i32> = Tree::build(&[], 0).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn build_rejects_overlong_prefix() {
        let err = Tree::<i32>::build(&[1, 2, 3], 4).unwrap_err();

        assert_eq!(
            err,
            BuildError::PrefixOutOfRange {
                requested: 4,
                available: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "requested a prefix of 4 elements but the input only has 3"
        );
    }

    #[test]
    fn build_drops_duplicates_in_prefix() {
        let tree = Tree::build(&[2, 1, 2, 3, 1], 5).unwrap();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn extend_inserts_incrementally() {
        let mut tree: Tree<i32> = [5, 3].iter().copied().collect();
        tree.extend(vec![4, 5, 6]);

        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 6]);
    }
}
