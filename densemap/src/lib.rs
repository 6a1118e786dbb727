//! Fixed-capacity maps from a bounded range of integer ids to values.
//!
//! A [`DenseMap`] is configured with an inclusive range of ids when it is created,
//! and allocates one slot for every id in that range up front.
//! Lookups are a subtraction and an array index, without any hashing,
//! and the storage is never reallocated afterwards.
//!
//! This is a good fit for ids that are dense and drawn from a known compact range,
//! like entity ids, slot indices or opcode tables.
//! For sparse or unbounded ids, a hash map is more appropriate.
//!
//! ```
//! use densemap::DenseMap;
//!
//! let mut map = DenseMap::<u16, &str>::new(1, 10);
//! map.insert(3, "x").unwrap();
//! map.insert(7, "y").unwrap();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.capacity(), 10);
//! assert_eq!(map.first(), Some((3, &"x")));
//! assert_eq!(map.last(), Some((7, &"y")));
//! assert!(map.insert(11, "z").is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(
    // triggers for `impl EquivalentId<...>`
    clippy::needless_pass_by_value
)]

extern crate alloc;

mod error;
mod macros;
pub mod map;

pub extern crate denseid;

pub use self::error::OutOfRangeError;
pub use self::map::DenseMap;
