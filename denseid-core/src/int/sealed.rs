pub trait PrivatePrimInt: Sized {
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;
    /// The type name as a short unqualified string.
    const TYPE_NAME: &'static str;
    /// The distance from `base` up to `id`, assuming `base <= id`.
    fn unsigned_distance(base: Self, id: Self) -> Option<usize>;
    fn wrapping_add_usize(base: Self, offset: usize) -> Self;
}
macro_rules! impl_primint {
    ($($target:ident => $unsigned:ident),*) => ($(
        impl super::PrimInt for $target {}
        impl PrivatePrimInt for $target {
            const TYPE_NAME: &'static str = stringify!($target);
            const ZERO: Self = 0;
            const MIN: Self = $target::MIN;
            const MAX: Self = $target::MAX;
            #[inline]
            #[allow(
                clippy::cast_sign_loss, // two's complement reinterpretation is desired
                clippy::unnecessary_cast, // no-op for unsigned targets
            )]
            fn unsigned_distance(base: Self, id: Self) -> Option<usize> {
                let distance = (id as $unsigned).wrapping_sub(base as $unsigned);
                usize::try_from(distance).ok()
            }
            #[inline]
            #[allow(
                clippy::cast_possible_truncation, // desired functionality
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss,
                clippy::unnecessary_cast,
            )]
            fn wrapping_add_usize(base: Self, offset: usize) -> Self {
                (base as $unsigned).wrapping_add(offset as $unsigned) as $target
            }
        }
    )*);
}
impl_primint!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    i8 => u8,
    i16 => u16,
    i32 => u32
);
