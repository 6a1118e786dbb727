//! Implementations of [`DenseId`](crate::DenseId) for the primitive integers.

macro_rules! impl_primint {
    ($($target:ident),*) => {$(
        impl crate::DenseId for $target {
            type Int = $target;
            #[inline]
            fn from_int(id: Self::Int) -> Self {
                id
            }
            #[inline]
            fn to_int(self) -> Self::Int {
                self
            }
        }
    )*};
}
impl_primint!(u8, u16, u32, i8, i16, i32);
