use core::fmt::{Debug, Display, Formatter};

use denseid::{int, DenseId};

/// Indicates that an id falls outside the range of a [`DenseMap`](crate::DenseMap).
///
/// Returned by the operations which would modify the map.
/// The map is left unchanged when this error is returned.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct OutOfRangeError<K: DenseId> {
    id: K,
    min_id: K,
    max_id: K,
}
impl<K: DenseId> OutOfRangeError<K> {
    #[cold]
    pub(crate) fn new(id: K, min_id: K, max_id: K) -> Self {
        OutOfRangeError { id, min_id, max_id }
    }

    /// The id which was rejected.
    #[inline]
    pub fn id(&self) -> K {
        self.id
    }

    /// The smallest id accepted by the map.
    #[inline]
    pub fn min_id(&self) -> K {
        self.min_id
    }

    /// The largest id accepted by the map.
    #[inline]
    pub fn max_id(&self) -> K {
        self.max_id
    }

    /// Trigger a descriptive panic due to this error.
    ///
    /// This gives a better panic message than calling [`Result::unwrap`].
    ///
    /// # Panics
    /// Always.
    #[track_caller]
    #[cold]
    pub fn panic(self) -> ! {
        panic!("{self}")
    }
}
impl<K: DenseId> Display for OutOfRangeError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "id {} out of range [{}, {}]",
            int::debug_desc(self.id.to_int()),
            int::debug_desc(self.min_id.to_int()),
            int::debug_desc(self.max_id.to_int()),
        )
    }
}
impl<K: DenseId> Debug for OutOfRangeError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OutOfRangeError")
            .field("id", &self.id)
            .field("min_id", &self.min_id)
            .field("max_id", &self.max_id)
            .finish()
    }
}

#[rustversion::since(1.81)]
impl<K: DenseId> core::error::Error for OutOfRangeError<K> {}

#[rustversion::before(1.81)]
#[cfg(feature = "std")]
impl<K: DenseId> std::error::Error for OutOfRangeError<K> {}
