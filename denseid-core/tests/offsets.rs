#![allow(missing_docs)]
use denseid_core::int::{
    debug_desc, from_offset_wrapping, max_value, min_value, offset_from, span, zero,
};
use denseid_core::PrimInt;

#[test]
fn unsigned_offsets() {
    assert_eq!(offset_from(1u16, 1u16), Some(0));
    assert_eq!(offset_from(10u16, 1u16), Some(9));
    assert_eq!(offset_from(0u16, 1u16), None);
    assert_eq!(offset_from(u32::MAX, 0u32), usize::try_from(u32::MAX).ok());
}

#[test]
fn signed_offsets() {
    assert_eq!(offset_from(-5i16, -5i16), Some(0));
    assert_eq!(offset_from(30i16, -5i16), Some(35));
    assert_eq!(offset_from(-10i16, -5i16), None);
    assert_eq!(offset_from(i8::MAX, i8::MIN), Some(255));
    assert_eq!(offset_from(0i8, i8::MIN), Some(128));
}

#[test]
fn full_range_span() {
    assert_eq!(span(u8::MIN, u8::MAX), Some(256));
    assert_eq!(span(i8::MIN, i8::MAX), Some(256));
    assert_eq!(span(i16::MIN, i16::MAX), Some(65536));
    assert_eq!(span(7i32, 6i32), None);
}

#[test]
fn offset_inverse() {
    fn check<T: PrimInt>(base: T, ids: &[T]) {
        for &id in ids {
            let offset = offset_from(id, base).unwrap();
            assert_eq!(from_offset_wrapping(base, offset), id);
        }
    }
    check(i8::MIN, &[i8::MIN, -1, 0, 1, i8::MAX]);
    check(-5i16, &[-5, 0, 30, i16::MAX]);
    check(u32::MAX - 3, &[u32::MAX - 3, u32::MAX]);
    check(1u16, &[1, 10, 20, 30]);
}

#[test]
fn constants() {
    assert_eq!(zero::<i32>(), 0);
    assert_eq!(min_value::<i8>(), -128);
    assert_eq!(max_value::<u16>(), u16::MAX);
}

#[test]
fn descriptions() {
    assert_eq!(format!("{}", debug_desc(42u8)), "42");
    assert_eq!(format!("{:?}", debug_desc(u8::MAX)), "u8::MAX");
    assert_eq!(format!("{}", debug_desc(i32::MIN)), "i32::MIN");
    assert_eq!(format!("{}", debug_desc(i32::MAX)), "i32::MAX");
    assert_eq!(format!("{}", debug_desc(u16::MIN)), "0");
}
