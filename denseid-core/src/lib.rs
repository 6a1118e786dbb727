//! Defines the [`DenseId`] trait, for ids that are backed by a small fixed-width integer.
//!
//! Ids implementing this trait can be stored in a dense lookup table,
//! where the slot for an id is found by subtracting the smallest id of the table.
//! The arithmetic for those offsets lives in the [`int`] module,
//! and is defined for both signed and unsigned integers.
//!
//! The `densemap` crate depends on this crate under the name `denseid`,
//! using [dependency renaming]:
//! ```toml
//! denseid = { version = "0.1", package = "denseid-core" }
//! ```
//!
//! [dependency renaming]: https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#renaming-dependencies-in-cargotoml
#![no_std]

use core::fmt::Debug;

#[macro_use]
mod macros;
mod impls;
pub mod int;

pub use int::PrimInt;

/// An identifier which can be losslessly converted to/from a primitive integer.
///
/// The type should not carry any information beyond that of the integer,
/// and every value of [`Self::Int`] must correspond to exactly one id.
/// This is what allows a table to reconstruct an id from the offset of its slot.
///
/// This is implemented for the primitive integers `i8`, `i16`, `i32`, `u8`, `u16`, and `u32`.
/// Newtype wrappers can implement it using [`define_newtype_id!`].
///
/// Ordering of ids is always determined by [`Self::Int`],
/// even if the type has its own [`Ord`] implementation.
///
/// This type should not have interior mutability.
/// This is guaranteed by the `Copy` bound.
pub trait DenseId: Copy + Eq + Debug + Send + Sync + 'static {
    /// The underlying integer type.
    type Int: int::PrimInt;

    /// Create an id from the underlying integer value.
    ///
    /// This can never fail, since all values of the integer are valid ids.
    fn from_int(id: Self::Int) -> Self;

    /// Convert this id into the underlying integer value.
    fn to_int(self) -> Self::Int;
}

/// A type that can be used for lookup as a [`DenseId`].
///
/// Used for key lookup in maps, similar to [`core::borrow::Borrow`].
/// Lookup in a dense table needs conversion to an integer rather than hashing/equality,
/// so `Borrow` is not suitable.
pub trait EquivalentId<K: DenseId> {
    /// Convert this type to an id `K`.
    fn as_id(&self) -> K;
}
impl<K: DenseId> EquivalentId<K> for K {
    #[inline]
    fn as_id(&self) -> K {
        *self
    }
}
impl<K: DenseId> EquivalentId<K> for &'_ K {
    #[inline]
    fn as_id(&self) -> K {
        **self
    }
}
impl<K: DenseId> EquivalentId<K> for &'_ mut K {
    #[inline]
    fn as_id(&self) -> K {
        **self
    }
}
