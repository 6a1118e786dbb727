/// Defines a newtype [`DenseId`], which wraps another [`DenseId`].
///
/// Automatically derives implementations of
///  [`Copy`], [`Clone`], [`PartialEq`], [`Eq`], [`PartialOrd`], [`Ord`], [`Hash`], and [`Debug`].
/// These traits are required to implement [`DenseId`],
/// or are expected of any id type.
///
/// ## Examples
/// ```
/// use denseid_core::DenseId;
///
/// denseid_core::define_newtype_id! {
///     /// The id of an entity in the world.
///     pub struct EntityId(u16);
/// }
///
/// assert_eq!(EntityId::from_int(7), EntityId(7));
/// assert_eq!(EntityId(7).to_int(), 7u16);
/// ```
///
/// [`DenseId`]: crate::DenseId
/// [`Hash`]: core::hash::Hash
/// [`Debug`]: core::fmt::Debug
#[macro_export]
macro_rules! define_newtype_id {
    (
        $(#[$ty_attr:meta])*
        $vis:vis struct $name:ident($(#[$field_attr:meta])* $inner_vis:vis $inner:ty);
    ) => {
        $(#[$ty_attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[repr(transparent)]
        $vis struct $name($(#[$field_attr])* $inner_vis $inner);
        impl $crate::DenseId for $name {
            type Int = <$inner as $crate::DenseId>::Int;
            #[inline]
            fn from_int(id: Self::Int) -> Self {
                $name(<$inner as $crate::DenseId>::from_int(id))
            }
            #[inline]
            fn to_int(self) -> Self::Int {
                $crate::DenseId::to_int(self.0)
            }
        }
    };
}

macro_rules! maybe_trait_bound {
    ($name:ident, cfg($flag:meta), $bound:path) => {
        #[cfg($flag)]
        #[doc(hidden)]
        pub trait $name: $bound {}
        #[cfg(not($flag))]
        #[doc(hidden)]
        pub trait $name {}
        #[cfg($flag)]
        impl<T: $bound> $name for T {}
        #[cfg(not($flag))]
        impl<T> $name for T {}
    };
}
