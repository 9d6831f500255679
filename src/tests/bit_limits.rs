use crate::bit_limits::BitLimits;

#[test]
fn test_unsigned_limits() {
    assert_eq!(BitLimits::<u8, 1>::MIN, 0);
    assert_eq!(BitLimits::<u8, 1>::MAX, 1);
    assert_eq!(BitLimits::<u8, 8>::MAX, 255);
    assert_eq!(BitLimits::<u16, 12>::MAX, 4095);
    assert_eq!(BitLimits::<u32, 20>::MAX, 0xF_FFFF);
    assert_eq!(BitLimits::<u64, 33>::MAX, 0x1_FFFF_FFFF);
}

#[test]
fn test_unsigned_min_is_zero() {
    assert_eq!(BitLimits::<u16, 9>::MIN, 0);
    assert_eq!(BitLimits::<u64, 64>::MIN, 0);
}

#[test]
fn test_signed_limits() {
    assert_eq!(BitLimits::<i8, 4>::MAX, 7);
    assert_eq!(BitLimits::<i8, 4>::MIN, -8);
    assert_eq!(BitLimits::<i16, 10>::MAX, 511);
    assert_eq!(BitLimits::<i16, 10>::MIN, -512);
    assert_eq!(BitLimits::<i32, 24>::MAX, 8_388_607);
    assert_eq!(BitLimits::<i32, 24>::MIN, -8_388_608);
}

#[test]
fn test_single_bit_signed() {
    // 1-bit two's complement holds exactly {-1, 0}
    assert_eq!(BitLimits::<i8, 1>::MAX, 0);
    assert_eq!(BitLimits::<i8, 1>::MIN, -1);
}

#[test]
fn test_full_width_matches_native_limits() {
    assert_eq!(BitLimits::<u8, 8>::MAX, u8::MAX);
    assert_eq!(BitLimits::<u64, 64>::MAX, u64::MAX);
    assert_eq!(BitLimits::<i8, 8>::MIN, i8::MIN);
    assert_eq!(BitLimits::<i8, 8>::MAX, i8::MAX);
    assert_eq!(BitLimits::<i64, 64>::MIN, i64::MIN);
    assert_eq!(BitLimits::<i64, 64>::MAX, i64::MAX);
}

#[test]
fn test_narrow_width_in_wide_storage() {
    assert_eq!(BitLimits::<u64, 3>::MAX, 7);
    assert_eq!(BitLimits::<i64, 3>::MAX, 3);
    assert_eq!(BitLimits::<i64, 3>::MIN, -4);
}
