//!# Limits of arbitrary-width integers
//!
//! Compile-time minimum/maximum of a value `WIDTH` bits wide packed into a
//! wider integral type, respecting the signedness of that type.
//!
//!```
//!use embedded_util::bit_limits::BitLimits;
//!
//!assert_eq!(BitLimits::<u16, 12>::MAX, 4095);
//!assert_eq!(BitLimits::<i8, 4>::MIN, -8);
//!```
//!
//! A `WIDTH` of zero, or a `WIDTH` exceeding the bit width of the storage
//! type, fails const evaluation, so misuse is a build error.

use core::marker::PhantomData;

/// Numeric limits for a `WIDTH`-bit integer stored inside `T`.
pub struct BitLimits<T, const WIDTH: u32>(PhantomData<T>);

macro_rules! bit_limits_unsigned {
    ($($int:ty),*) => {$(
        impl<const WIDTH: u32> BitLimits<$int, WIDTH> {
            const VALID: () = assert!(
                WIDTH >= 1 && WIDTH <= <$int>::BITS,
                "bit width must be between 1 and the bit width of the storage type"
            );

            /// Largest value representable in `WIDTH` bits.
            pub const MAX: $int = {
                let _ = Self::VALID;
                ((1u128 << WIDTH) - 1) as $int
            };

            /// Smallest value representable in `WIDTH` bits.
            pub const MIN: $int = {
                let _ = Self::VALID;
                0
            };
        }
    )*};
}

macro_rules! bit_limits_signed {
    ($($int:ty),*) => {$(
        impl<const WIDTH: u32> BitLimits<$int, WIDTH> {
            const VALID: () = assert!(
                WIDTH >= 1 && WIDTH <= <$int>::BITS,
                "bit width must be between 1 and the bit width of the storage type"
            );

            /// Largest value representable in `WIDTH` bits, two's complement.
            pub const MAX: $int = {
                let _ = Self::VALID;
                ((1u128 << (WIDTH - 1)) - 1) as $int
            };

            /// Smallest value representable in `WIDTH` bits, two's complement.
            pub const MIN: $int = {
                let _ = Self::VALID;
                (-(1i128 << (WIDTH - 1))) as $int
            };
        }
    )*};
}

bit_limits_unsigned!(u8, u16, u32, u64);
bit_limits_signed!(i8, i16, i32, i64);
