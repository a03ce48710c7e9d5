//! In-place sorting and filtering over a [`Response`].
//!
//! None of these operations can fail; an empty result is still a valid
//! response.

use crate::model::{Definition, Response};

fn normalize_author(author: &str) -> String {
    author.trim().to_lowercase()
}

/// Top-down merge sort that only ever asks `less(right, left)`.
///
/// Works for any strict relation, including partial orders where
/// incomparable elements don't form an equivalence; it never panics.
fn merge_sort<T, F>(mut items: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, less);
    let right = merge_sort(right, less);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}

impl Response {
    /// Reorder using a caller supplied strict "less than" relation
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&Definition, &Definition) -> bool,
    {
        let list = std::mem::take(&mut self.list);
        self.list = merge_sort(list, &mut less);
    }

    /// Most upvoted first
    pub fn sort_by_thumbs_up(&mut self) {
        self.sort_by(|a, b| a.thumbs_up > b.thumbs_up);
    }

    /// Most downvoted first
    pub fn sort_by_thumbs_down(&mut self) {
        self.sort_by(|a, b| a.thumbs_down > b.thumbs_down);
    }

    /// Keep only the definitions matching `predicate`, preserving order
    pub(crate) fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&Definition) -> bool,
    {
        self.list.retain(predicate);
    }

    /// Exact author match after trimming and lowercasing both sides
    pub fn filter_by_author(&mut self, author: &str) {
        let wanted = normalize_author(author);
        self.retain(|def| normalize_author(&def.author) == wanted);
    }

    /// Truncate to the first `n` definitions; no-op when already shorter
    pub fn limit(&mut self, n: usize) {
        self.list.truncate(n);
    }
}
