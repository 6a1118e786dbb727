//! Defines the [`PrimInt`] trait and the offset arithmetic built on top of it.
//!
//! These are module functions rather than trait functions
//! to avoid polluting the primitive integer namespaces.

use core::fmt::{Debug, Display, Formatter};
use core::hash::Hash;

mod sealed;

maybe_trait_bound!(
    MaybeNumTrait,
    cfg(feature = "num-traits"),
    num_traits::PrimInt
);
maybe_trait_bound!(MaybePod, cfg(feature = "bytemuck"), bytemuck::Pod);
maybe_trait_bound!(
    MaybeContiguous,
    cfg(feature = "bytemuck"),
    bytemuck::Contiguous
);

/// A primitive integer that can back a [`DenseId`](crate::DenseId).
///
/// Implemented for `i8`, `i16`, `i32`, `u8`, `u16` and `u32`.
/// Wider integers are excluded, because the distance between two of their values
/// does not reliably fit in a [`usize`].
///
/// Most methods in this trait are only available through the [`denseid::int`](crate::int) module
/// in order to avoid conflict with inherent implementations and other traits.
/// You can get access to more functionality by enabling the `num-traits` or `bytemuck` features,
/// which will add [`num_traits::PrimInt`] and [`bytemuck::Pod`] bounds respectively.
pub trait PrimInt:
    Eq
    + Hash
    + Ord
    + Copy
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + sealed::PrivatePrimInt
    + MaybeNumTrait
    + MaybePod
    + MaybeContiguous
{
}

/// Compute the offset of `id` relative to `base`,
/// returning `None` if `id < base` or the offset overflows a [`usize`].
///
/// The difference is computed in the unsigned integer of the same width,
/// so spanning the full range of a signed type cannot overflow.
///
/// ## Examples
/// ```
/// use denseid_core::int::offset_from;
/// assert_eq!(offset_from(7u16, 3u16), Some(4));
/// assert_eq!(offset_from(i8::MAX, i8::MIN), Some(255));
/// assert_eq!(offset_from(-3i32, 2i32), None);
/// ```
#[inline]
pub fn offset_from<T: PrimInt>(id: T, base: T) -> Option<usize> {
    if id < base {
        None
    } else {
        T::unsigned_distance(base, id)
    }
}

/// The number of ids in the inclusive range `min..=max`,
/// returning `None` if `max < min` or the count overflows a [`usize`].
///
/// ## Examples
/// ```
/// use denseid_core::int::span;
/// assert_eq!(span(1u16, 10u16), Some(10));
/// assert_eq!(span(-5i16, 30i16), Some(36));
/// assert_eq!(span(u8::MIN, u8::MAX), Some(256));
/// assert_eq!(span(4u8, 4u8), Some(1));
/// assert_eq!(span(5u8, 1u8), None);
/// ```
#[inline]
pub fn span<T: PrimInt>(min: T, max: T) -> Option<usize> {
    offset_from(max, min)?.checked_add(1)
}

/// Add an offset to `base`, wrapping around on overflow.
///
/// This is the inverse of [`offset_from`],
/// so `from_offset_wrapping(base, offset_from(id, base).unwrap()) == id`.
///
/// ## Examples
/// ```
/// use denseid_core::int::from_offset_wrapping;
/// assert_eq!(from_offset_wrapping(-5i16, 8), 3);
/// assert_eq!(from_offset_wrapping(i8::MIN, 255), i8::MAX);
/// ```
#[inline]
pub fn from_offset_wrapping<T: PrimInt>(base: T, offset: usize) -> T {
    T::wrapping_add_usize(base, offset)
}

/// Determine the zero value of the specified [`PrimInt`].
#[inline]
pub const fn zero<T: PrimInt>() -> T {
    T::ZERO
}

/// Determine the minimum value of the specified [`PrimInt`].
#[inline]
pub const fn min_value<T: PrimInt>() -> T {
    T::MIN
}

/// Determine the maximum value of the specified [`PrimInt`].
#[inline]
pub const fn max_value<T: PrimInt>() -> T {
    T::MAX
}

/// Attempt to describe the specified [`PrimInt`]
/// in a format suitable for debugging or error messages.
///
/// This differs from the standard `Display` and `Debug` implementation,
/// because `T::MAX` and a nonzero `T::MIN` are special-cased.
///
/// *WARNING*: This representation may change without warning in the future,
/// so the exact representation should not be relied upon.
///
/// ## Examples
/// ```
/// use denseid_core::int::debug_desc;
/// assert_eq!(debug_desc(3u32).to_string(), "3");
/// assert_eq!(debug_desc(-3i8).to_string(), "-3");
/// assert_eq!(debug_desc(u32::MAX).to_string(), "u32::MAX");
/// assert_eq!(debug_desc(i16::MIN).to_string(), "i16::MIN");
/// assert_eq!(debug_desc(0u16).to_string(), "0");
/// ```
#[cold]
pub fn debug_desc<T: PrimInt>(value: T) -> DebugDesc<T> {
    DebugDesc(value)
}

/// The description of an integer returned by [`debug_desc`].
#[derive(Clone)]
pub struct DebugDesc<T: PrimInt>(T);
impl<T: PrimInt> Display for DebugDesc<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.0 == T::MAX {
            f.write_str(T::TYPE_NAME)?;
            f.write_str("::MAX")
        } else if self.0 == T::MIN && T::MIN != T::ZERO {
            f.write_str(T::TYPE_NAME)?;
            f.write_str("::MIN")
        } else {
            <T as Display>::fmt(&self.0, f)
        }
    }
}
impl<T: PrimInt> Debug for DebugDesc<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
