//! Lazy truncation of result streams.

use std::iter::{Fuse, FusedIterator};

/// Iterator adaptor yielding at most a fixed number of items.
///
/// Created by [`limit`]. Items are pulled from the inner iterator one at a
/// time; nothing is buffered.
#[derive(Debug, Clone)]
pub struct Limit<I> {
    inner: Fuse<I>,
    /// `None` means unlimited.
    remaining: Option<usize>,
}

/// Produce at most `n` items from `iter`, preserving order.
///
/// `None` and `Some(0)` both mean "no limit": the input passes through
/// unchanged. The result is fused, so once the input is exhausted or the cap
/// is reached every further call to `next` returns `None`.
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        inner: iter.into_iter().fuse(),
        remaining: n.filter(|&n| n > 0),
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining.as_mut() {
            None => self.inner.next(),
            Some(0) => None,
            Some(remaining) => {
                let item = self.inner.next();
                *remaining = if item.is_some() { *remaining - 1 } else { 0 };
                item
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(cap) => (
                lower.min(cap),
                Some(upper.map_or(cap, |upper| upper.min(cap))),
            ),
        }
    }
}

impl<I: Iterator> FusedIterator for Limit<I> {}
