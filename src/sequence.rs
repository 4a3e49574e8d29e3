//! Immutable ordered sequence with clamp-or-noop positional edits.
//!
//! Every edit returns a new sequence. An edit that changes nothing returns
//! a sequence sharing the same allocation as its input, so callers can
//! detect no-ops with [`ItemSequence::ptr_eq`] instead of comparing items.
//!
//! Indices are signed: stale or negative indices coming from a UI are
//! absorbed by clamping (inserts, move targets) or ignored (removes,
//! replaces, move sources), never reported as errors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Range;
use std::sync::Arc;

/// Ordered, immutable, cheaply cloneable sequence.
#[derive(Debug)]
pub struct ItemSequence<T> {
    items: Arc<[T]>,
}

impl<T> Clone for ItemSequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: PartialEq> PartialEq for ItemSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.items[..] == other.items[..]
    }
}

impl<T> Default for ItemSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemSequence<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// True when both sequences share one allocation (same value, not
    /// merely equal items).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Clamp an insertion index into `0..=len`.
    pub fn insertion_point(&self, index: isize) -> usize {
        clamp(index, self.len())
    }

    /// Resolve an index to an existing position, if any.
    pub fn position(&self, index: isize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.len())
    }

    /// Resolve a move to `(from, to)` positions, or `None` if it moves nothing.
    ///
    /// `from` must name an existing item; `to` is clamped into `0..len`.
    pub fn move_positions(&self, from: isize, to: isize) -> Option<(usize, usize)> {
        if self.is_empty() || from == to {
            return None;
        }
        let from = self.position(from)?;
        let to = clamp(to, self.len() - 1);
        (from != to).then_some((from, to))
    }
}

impl<T: Clone> ItemSequence<T> {
    /// Append an item at the end.
    pub fn push(&self, item: T) -> Self {
        let mut items = self.items.to_vec();
        items.push(item);
        items.into()
    }

    /// Insert at the clamped index, keeping the relative order of the rest.
    pub fn insert_at(&self, index: isize, item: T) -> Self {
        let at = self.insertion_point(index);
        let mut items = self.items.to_vec();
        items.insert(at, item);
        items.into()
    }

    /// Remove the item at `index`; out of range returns `self` unchanged.
    pub fn remove_at(&self, index: isize) -> Self {
        let Some(at) = self.position(index) else {
            return self.clone();
        };
        let mut items = self.items.to_vec();
        items.remove(at);
        items.into()
    }

    /// Substitute the item at `index`; out of range returns `self` unchanged.
    pub fn replace_at(&self, index: isize, item: T) -> Self {
        let Some(at) = self.position(index) else {
            return self.clone();
        };
        let mut items = self.items.to_vec();
        items[at] = item;
        items.into()
    }

    /// Move the item at `from` to the clamped `to` position, shifting the
    /// items in between by one toward the vacated slot.
    pub fn move_item(&self, from: isize, to: isize) -> Self {
        let Some((from, to)) = self.move_positions(from, to) else {
            return self.clone();
        };
        let mut items = self.items.to_vec();
        let item = items.remove(from);
        items.insert(to, item);
        items.into()
    }

    /// Apply `f` to every item inside `range`, leaving the others as they are.
    ///
    /// An empty range returns `self` unchanged.
    pub fn map_range<F>(&self, range: Range<usize>, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let range = range.start.min(self.len())..range.end.min(self.len());
        if range.is_empty() {
            return self.clone();
        }
        let mut items = self.items.to_vec();
        for slot in &mut items[range] {
            *slot = f(slot.clone());
        }
        items.into()
    }
}

fn clamp(index: isize, max: usize) -> usize {
    usize::try_from(index).map_or(0, |i| i.min(max))
}

impl<T> From<Vec<T>> for ItemSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<T> FromIterator<T> for ItemSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a, T> IntoIterator for &'a ItemSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for ItemSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ItemSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[char]) -> ItemSequence<char> {
        items.to_vec().into()
    }

    #[test]
    fn insert_clamps_index() {
        let s = seq(&['a', 'b']);
        assert_eq!(s.insert_at(-5, 'x').as_slice(), &['x', 'a', 'b']);
        assert_eq!(s.insert_at(1, 'x').as_slice(), &['a', 'x', 'b']);
        assert_eq!(s.insert_at(99, 'x').as_slice(), &['a', 'b', 'x']);
    }

    #[test]
    fn insert_into_empty_sequence() {
        let s = ItemSequence::new().insert_at(3, 'x');
        assert_eq!(s.as_slice(), &['x']);
    }

    #[test]
    fn remove_out_of_range_returns_same_value() {
        let s = seq(&['a', 'b']);
        assert!(s.remove_at(-1).ptr_eq(&s));
        assert!(s.remove_at(2).ptr_eq(&s));
        assert_eq!(s.remove_at(0).as_slice(), &['b']);
    }

    #[test]
    fn replace_out_of_range_returns_same_value() {
        let s = seq(&['a', 'b']);
        assert!(s.replace_at(-1, 'x').ptr_eq(&s));
        assert!(s.replace_at(2, 'x').ptr_eq(&s));
        assert_eq!(s.replace_at(1, 'x').as_slice(), &['a', 'x']);
    }

    #[test]
    fn move_forward_and_backward() {
        let s = seq(&['a', 'b', 'c', 'd']);
        assert_eq!(s.move_item(0, 2).as_slice(), &['b', 'c', 'a', 'd']);
        assert_eq!(s.move_item(3, 0).as_slice(), &['d', 'a', 'b', 'c']);
    }

    #[test]
    fn move_clamps_target() {
        let s = seq(&['a', 'b', 'c']);
        assert_eq!(s.move_item(0, 10).as_slice(), &['b', 'c', 'a']);
        assert_eq!(s.move_item(2, -4).as_slice(), &['c', 'a', 'b']);
    }

    #[test]
    fn move_noop_cases_return_same_value() {
        let empty: ItemSequence<char> = ItemSequence::new();
        assert!(empty.move_item(0, 1).ptr_eq(&empty));

        let s = seq(&['a', 'b', 'c']);
        assert!(s.move_item(1, 1).ptr_eq(&s));
        assert!(s.move_item(-1, 0).ptr_eq(&s));
        assert!(s.move_item(3, 0).ptr_eq(&s));
        // target clamps onto the source
        assert!(s.move_item(2, 7).ptr_eq(&s));
    }

    #[test]
    fn edits_do_not_touch_the_input() {
        let s = seq(&['a', 'b', 'c']);
        let _ = s.insert_at(0, 'x');
        let _ = s.remove_at(0);
        let _ = s.move_item(0, 2);
        assert_eq!(s.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn map_range_only_touches_range() {
        let s: ItemSequence<u8> = vec![1, 2, 3, 4].into();
        assert_eq!(s.map_range(1..3, |n| n * 10).as_slice(), &[1, 20, 30, 4]);
        assert!(s.map_range(2..2, |n| n * 10).ptr_eq(&s));
        assert_eq!(s.map_range(3..9, |n| n * 10).as_slice(), &[1, 2, 3, 40]);
    }

    #[test]
    fn sequence_serializes_as_list() {
        let s = seq(&['a', 'b']);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
        let back: ItemSequence<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
