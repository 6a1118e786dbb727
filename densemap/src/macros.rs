/// Creates a [`DenseMap`](crate::DenseMap) over the ids `min..=max` from a set of key-value pairs.
///
/// # Panics
/// If any key is outside the range of the map.
///
/// ```
/// use densemap::densemap;
///
/// let opcodes = densemap!(0x10u8, 0x1F; 0x10 => "load", 0x11 => "store");
/// assert_eq!(opcodes.capacity(), 16);
/// assert_eq!(opcodes[0x11], "store");
/// ```
#[macro_export]
macro_rules! densemap {
    ($min:expr, $max:expr $(;)?) => ($crate::DenseMap::new($min, $max));
    ($min:expr, $max:expr; $($key:expr => $value:expr),+ $(,)?) => ({
        let mut res = $crate::DenseMap::new($min, $max);
        $(
            if let Err(e) = res.insert($key, $value) {
                e.panic();
            }
        )*
        res
    });
}
