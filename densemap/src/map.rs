//! Implements [`DenseMap`], a flat array of slots addressed by `id - min_id`.

use crate::OutOfRangeError;
use alloc::boxed::Box;
use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Index, IndexMut, Range};
use denseid::int::{self, PrimInt};
use denseid::{DenseId, EquivalentId};
use fixedbitset::FixedBitSet;

/// Panic indicating that a range of ids would exhaust available memory.
#[inline(never)]
#[track_caller]
#[cold]
fn capacity_overflow(min_id: impl PrimInt, max_id: impl PrimInt) -> ! {
    panic!(
        "Storing ids [{}, {}] would exhaust memory",
        int::debug_desc(min_id),
        int::debug_desc(max_id),
    )
}

/// A map from a fixed, inclusive range of ids to values,
/// with one preallocated slot for every id in the range.
///
/// The slot for an id lives at offset `id - min_id`,
/// and a parallel bitset records which slots currently hold a value.
/// Absent slots always hold `V::default()`,
/// so removing a value releases any resources it owns immediately.
///
/// The range is chosen at construction and never changes.
/// Modifying operations reject ids outside of it with an [`OutOfRangeError`],
/// while lookups simply treat them as missing.
///
/// There is no entry API because the overhead of lookups is very small.
/// There is no internal synchronization,
/// so sharing a map between threads that modify it requires an external lock.
#[derive(Clone)]
pub struct DenseMap<K: DenseId, V> {
    values: Box<[V]>,
    presence: FixedBitSet,
    len: usize,
    min_id: K::Int,
    max_id: K::Int,
    marker: PhantomData<K>,
}
impl<K: DenseId, V: Default> DenseMap<K, V> {
    /// Create a new map with no entries, accepting ids in the inclusive range `min_id..=max_id`.
    ///
    /// If `min_id > max_id` the bounds are swapped.
    /// Storage for every id in the range is allocated immediately.
    ///
    /// # Panics
    /// If the number of ids in the range overflows a [`usize`],
    /// which is only possible for 32-bit ids on 32-bit platforms.
    #[track_caller]
    pub fn new(min_id: K, max_id: K) -> Self {
        let (mut min_id, mut max_id) = (min_id.to_int(), max_id.to_int());
        if min_id > max_id {
            core::mem::swap(&mut min_id, &mut max_id);
        }
        let capacity =
            int::span(min_id, max_id).unwrap_or_else(|| capacity_overflow(min_id, max_id));
        DenseMap {
            values: core::iter::repeat_with(V::default).take(capacity).collect(),
            presence: FixedBitSet::with_capacity(capacity),
            len: 0,
            min_id,
            max_id,
            marker: PhantomData,
        }
    }

    /// Remove the value associated with the given id,
    /// returning the previous value if present.
    ///
    /// The slot is reset to `V::default()`.
    /// Removing an id that is in range but missing is not an error.
    ///
    /// # Errors
    /// If the id is outside the range of the map, nothing is removed.
    #[inline]
    pub fn remove(&mut self, id: impl EquivalentId<K>) -> Result<Option<V>, OutOfRangeError<K>> {
        let offset = self.checked_offset(id.as_id())?;
        if !self.presence.contains(offset) {
            return Ok(None);
        }
        self.presence.set(offset, false);
        self.len -= 1;
        Ok(Some(core::mem::take(&mut self.values[offset])))
    }

    /// Clear all entries in the map, resetting every slot to `V::default()`.
    ///
    /// The range and capacity of the map are unchanged.
    pub fn clear(&mut self) {
        for offset in self.presence.ones() {
            self.values[offset] = V::default();
        }
        self.presence.clear();
        self.len = 0;
    }

    /// Iterate over the entries in the map,
    /// removing entries when the callback returns false.
    ///
    /// See also [`std::collections::HashMap::retain`].
    pub fn retain(&mut self, mut func: impl FnMut(K, &mut V) -> bool) {
        for (offset, value) in self.values.iter_mut().enumerate() {
            if !self.presence.contains(offset) {
                continue;
            }
            let key = K::from_int(int::from_offset_wrapping(self.min_id, offset));
            if !func(key, value) {
                *value = V::default();
                self.presence.set(offset, false);
                self.len -= 1;
            }
        }
    }
}
impl<K: DenseId, V> DenseMap<K, V> {
    /// The smallest id accepted by the map.
    #[inline]
    pub fn min_id(&self) -> K {
        K::from_int(self.min_id)
    }

    /// The largest id accepted by the map.
    #[inline]
    pub fn max_id(&self) -> K {
        K::from_int(self.max_id)
    }

    /// The number of slots in the map, which is `max_id - min_id + 1`.
    ///
    /// This never changes after construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// The number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if this map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the specified key is present in the map.
    ///
    /// Ids outside the range of the map are never present.
    #[inline]
    pub fn contains_key(&self, id: impl EquivalentId<K>) -> bool {
        match self.offset_of(id.as_id()) {
            Some(offset) => self.presence.contains(offset),
            None => false,
        }
    }

    /// Get the value associated with the specified key, or `None` if missing.
    ///
    /// Ids outside the range of the map are treated as missing.
    #[inline]
    pub fn get(&self, id: impl EquivalentId<K>) -> Option<&V> {
        let offset = self.offset_of(id.as_id())?;
        if self.presence.contains(offset) {
            Some(&self.values[offset])
        } else {
            None
        }
    }

    /// Get a mutable reference to the value associated with the specified key,
    /// or `None` if missing.
    #[inline]
    pub fn get_mut(&mut self, id: impl EquivalentId<K>) -> Option<&mut V> {
        let offset = self.offset_of(id.as_id())?;
        if self.presence.contains(offset) {
            Some(&mut self.values[offset])
        } else {
            None
        }
    }

    /// Insert a key and a value, returning the previous value.
    ///
    /// Overwriting an existing entry does not change the length.
    ///
    /// # Errors
    /// If the id is outside the range of the map, the map is left unchanged.
    #[inline]
    pub fn insert(&mut self, id: K, value: V) -> Result<Option<V>, OutOfRangeError<K>> {
        let offset = self.checked_offset(id)?;
        let old_value = core::mem::replace(&mut self.values[offset], value);
        if self.presence.put(offset) {
            Ok(Some(old_value))
        } else {
            self.len += 1;
            Ok(None)
        }
    }

    /// Insert every key-value pair from the iterator,
    /// stopping at the first key outside the range of the map.
    ///
    /// Entries inserted before the failing key are kept.
    ///
    /// # Errors
    /// If a key is outside the range of the map.
    pub fn try_extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) -> Result<(), OutOfRangeError<K>> {
        for (key, value) in iter {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// The entry with the smallest id, or `None` if the map is empty.
    ///
    /// This scans the slots from the start, so is `O(capacity)` in the worst case.
    #[inline]
    pub fn first(&self) -> Option<(K, &V)> {
        self.iter().next()
    }

    /// A mutable reference to the entry with the smallest id,
    /// or `None` if the map is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Option<(K, &mut V)> {
        self.iter_mut().next()
    }

    /// The entry with the largest id, or `None` if the map is empty.
    ///
    /// This scans the slots from the end, so is `O(capacity)` in the worst case.
    #[inline]
    pub fn last(&self) -> Option<(K, &V)> {
        self.iter().next_back()
    }

    /// A mutable reference to the entry with the largest id,
    /// or `None` if the map is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Option<(K, &mut V)> {
        self.iter_mut().next_back()
    }

    /// Iterate over the key-value pairs in the map.
    ///
    /// Guaranteed to be sorted by the integer id of the key.
    /// The iterator borrows the map, so entries can't be inserted or removed during iteration.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.iter_slots(0..self.capacity())
    }

    /// Mutably iterate over the key-value pairs in the map.
    ///
    /// Guaranteed to be sorted by the integer id of the key.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.iter_slots_mut(0..self.capacity())
    }

    /// Iterate over the key-value pairs whose ids fall in the inclusive range `lo..=hi`.
    ///
    /// If `lo > hi` the bounds are swapped.
    /// Bounds outside the range of the map are clamped to it rather than rejected,
    /// so the iterator may be empty.
    ///
    /// Guaranteed to be sorted by the integer id of the key.
    #[inline]
    pub fn range(&self, lo: K, hi: K) -> Iter<'_, K, V> {
        let slots = self.clamp_slots(lo, hi);
        self.iter_slots(slots)
    }

    /// Mutably iterate over the key-value pairs whose ids fall in the inclusive range `lo..=hi`.
    ///
    /// Bounds are handled the same way as [`Self::range`].
    #[inline]
    pub fn range_mut(&mut self, lo: K, hi: K) -> IterMut<'_, K, V> {
        let slots = self.clamp_slots(lo, hi);
        self.iter_slots_mut(slots)
    }

    /// Iterate over the keys in the map.
    ///
    /// Guaranteed to be sorted by the integer id of the key.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            source: self.values.iter().enumerate(),
            presence: &self.presence,
            start: 0,
            min_id: self.min_id,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Iterate over the values in the map.
    ///
    /// Guaranteed to be sorted by the integer id of the key.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            source: self.values.iter().enumerate(),
            presence: &self.presence,
            start: 0,
            min_id: self.min_id,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Mutably iterate over the values in the map.
    ///
    /// Guaranteed to be sorted by the integer id of the key.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            source: self.values.iter_mut().enumerate(),
            presence: &self.presence,
            start: 0,
            min_id: self.min_id,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// The offset of the specified id, or `None` if it is out of range.
    #[inline]
    fn offset_of(&self, id: K) -> Option<usize> {
        let id = id.to_int();
        if id > self.max_id {
            None
        } else {
            int::offset_from(id, self.min_id)
        }
    }

    #[inline]
    fn checked_offset(&self, id: K) -> Result<usize, OutOfRangeError<K>> {
        self.offset_of(id)
            .ok_or_else(|| OutOfRangeError::new(id, self.min_id(), self.max_id()))
    }

    /// Normalize and clamp a range of ids to a range of slots,
    /// which is empty if there is no overlap with the map.
    fn clamp_slots(&self, lo: K, hi: K) -> Range<usize> {
        let (mut lo, mut hi) = (lo.to_int(), hi.to_int());
        if lo > hi {
            core::mem::swap(&mut lo, &mut hi);
        }
        let lo = Ord::max(lo, self.min_id);
        let hi = Ord::min(hi, self.max_id);
        match (
            int::offset_from(lo, self.min_id),
            int::offset_from(hi, self.min_id),
        ) {
            (Some(start), Some(end)) if start <= end => start..end + 1,
            _ => 0..0,
        }
    }

    /// Count the entries present in the specified slots.
    #[inline]
    fn count_slots(&self, slots: &Range<usize>) -> usize {
        if slots.start == 0 && slots.end == self.capacity() {
            self.len
        } else {
            self.presence.count_ones(slots.clone())
        }
    }

    fn iter_slots(&self, slots: Range<usize>) -> Iter<'_, K, V> {
        let len = self.count_slots(&slots);
        Iter {
            start: slots.start,
            source: self.values[slots].iter().enumerate(),
            presence: &self.presence,
            min_id: self.min_id,
            len,
            marker: PhantomData,
        }
    }

    fn iter_slots_mut(&mut self, slots: Range<usize>) -> IterMut<'_, K, V> {
        let len = self.count_slots(&slots);
        IterMut {
            start: slots.start,
            source: self.values[slots].iter_mut().enumerate(),
            presence: &self.presence,
            min_id: self.min_id,
            len,
            marker: PhantomData,
        }
    }
}
impl<K: DenseId, V: PartialEq> PartialEq for DenseMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.min_id == other.min_id
            && self.max_id == other.max_id
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}
impl<K: DenseId, V: Eq> Eq for DenseMap<K, V> {}
impl<K: DenseId, V> Index<K> for DenseMap<K, V> {
    type Output = V;

    #[inline]
    #[track_caller]
    fn index(&self, index: K) -> &Self::Output {
        self.get(index).expect("missing entry for id")
    }
}
impl<K: DenseId, V> IndexMut<K> for DenseMap<K, V> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        self.get_mut(index).expect("missing entry for id")
    }
}
impl<'a, K: DenseId, V> Index<&'a K> for DenseMap<K, V> {
    type Output = V;

    #[inline]
    #[track_caller]
    fn index(&self, index: &'a K) -> &Self::Output {
        self.get(*index).expect("missing entry for id")
    }
}
impl<'a, K: DenseId, V> IndexMut<&'a K> for DenseMap<K, V> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: &'a K) -> &mut Self::Output {
        self.get_mut(*index).expect("missing entry for id")
    }
}
impl<K: DenseId, V> IntoIterator for DenseMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            source: self.values.into_vec().into_iter().enumerate(),
            presence: self.presence,
            start: 0,
            min_id: self.min_id,
            len: self.len,
            marker: PhantomData,
        }
    }
}
impl<'a, K: DenseId, V> IntoIterator for &'a DenseMap<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, K: DenseId, V> IntoIterator for &'a mut DenseMap<K, V> {
    type Item = (K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<K: DenseId, V: Debug> Debug for DenseMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
macro_rules! impl_dense_iter {
    ($target:ident<$($l:lifetime,)? $kt:ident, $vt:ident> {
        fn map($k:ident, $v:ident) -> $item_ty:ty {
            $map:expr
        }
    }) => {
        impl<$($l,)* $kt: DenseId, $vt> Iterator for $target<$($l,)* $kt, $vt> {
            type Item = $item_ty;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                loop {
                    let (index, $v) = self.source.next()?;
                    let offset = self.start + index;
                    if self.presence.contains(offset) {
                        let $k = $kt::from_int(int::from_offset_wrapping(self.min_id, offset));
                        self.len -= 1;
                        return Some($map);
                    }
                }
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.len, Some(self.len))
            }
        }
        impl<$($l,)* $kt: DenseId, $vt> DoubleEndedIterator for $target<$($l,)* $kt, $vt> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                loop {
                    let (index, $v) = self.source.next_back()?;
                    let offset = self.start + index;
                    if self.presence.contains(offset) {
                        let $k = $kt::from_int(int::from_offset_wrapping(self.min_id, offset));
                        self.len -= 1;
                        return Some($map);
                    }
                }
            }
        }
        impl<$($l,)* $kt: DenseId, $vt> ExactSizeIterator for $target<$($l,)* $kt, $vt> {}
        impl<$($l,)* $kt: DenseId, $vt> core::iter::FusedIterator for $target<$($l,)* $kt, $vt> {}
    }
}
/// An iterator consuming the entries in a [`DenseMap`].
///
/// Guaranteed to be ordered by the integer value of the key.
pub struct IntoIter<K: DenseId, V> {
    source: core::iter::Enumerate<alloc::vec::IntoIter<V>>,
    presence: FixedBitSet,
    start: usize,
    min_id: K::Int,
    len: usize,
    marker: PhantomData<K>,
}
impl_dense_iter!(IntoIter<K, V> {
    fn map(key, value) -> (K, V) {
        (key, value)
    }
});
/// An iterator over the entries in a [`DenseMap`].
///
/// Guaranteed to be ordered by the integer value of the key.
pub struct Iter<'a, K: DenseId, V> {
    source: core::iter::Enumerate<core::slice::Iter<'a, V>>,
    presence: &'a FixedBitSet,
    /// The offset of the first slot in `source`.
    start: usize,
    min_id: K::Int,
    len: usize,
    marker: PhantomData<K>,
}
impl_dense_iter!(Iter<'a, K, V> {
    fn map(key, value) -> (K, &'a V) {
        (key, value)
    }
});
impl<K: DenseId, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            source: self.source.clone(),
            presence: self.presence,
            start: self.start,
            min_id: self.min_id,
            len: self.len,
            marker: PhantomData,
        }
    }
}

/// A mutable iterator over the entries in a [`DenseMap`].
///
/// Guaranteed to be ordered by the integer value of the key.
pub struct IterMut<'a, K: DenseId, V> {
    source: core::iter::Enumerate<core::slice::IterMut<'a, V>>,
    presence: &'a FixedBitSet,
    start: usize,
    min_id: K::Int,
    len: usize,
    marker: PhantomData<K>,
}
impl_dense_iter!(IterMut<'a, K, V> {
    fn map(key, value) -> (K, &'a mut V) {
        (key, value)
    }
});

/// An iterator over the values in a [`DenseMap`].
///
/// Guaranteed to be ordered by the integer value of the key.
pub struct Values<'a, K: DenseId, V> {
    source: core::iter::Enumerate<core::slice::Iter<'a, V>>,
    presence: &'a FixedBitSet,
    start: usize,
    min_id: K::Int,
    len: usize,
    marker: PhantomData<K>,
}
impl_dense_iter!(Values<'a, K, V> {
    fn map(_key, value) -> &'a V {
        value
    }
});

/// A mutable iterator over the values in a [`DenseMap`].
///
/// Guaranteed to be ordered by the integer value of the key.
pub struct ValuesMut<'a, K: DenseId, V> {
    source: core::iter::Enumerate<core::slice::IterMut<'a, V>>,
    presence: &'a FixedBitSet,
    start: usize,
    min_id: K::Int,
    len: usize,
    marker: PhantomData<K>,
}
impl_dense_iter!(ValuesMut<'a, K, V> {
    fn map(_key, value) -> &'a mut V {
        value
    }
});

/// An iterator over the keys in a [`DenseMap`].
///
/// Guaranteed to be ordered by the integer value of the key.
pub struct Keys<'a, K: DenseId, V> {
    source: core::iter::Enumerate<core::slice::Iter<'a, V>>,
    presence: &'a FixedBitSet,
    start: usize,
    min_id: K::Int,
    len: usize,
    marker: PhantomData<K>,
}
impl_dense_iter!(Keys<'a, K, V> {
    fn map(key, _value) -> K {
        key
    }
});
