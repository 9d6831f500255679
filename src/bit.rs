//!# Bit-field manipulation
//!
//! Describes contiguous runs of bits inside an unsigned integer with [Mask],
//! reads them back with [extract] and rewrites them through [Value] (an
//! in-memory register image) or [Modify] (a scoped read-modify-write against
//! a live register).
//!
//!```
//!use embedded_util::bit::{self, Mask, Value};
//!
//!const READY: Mask = Mask::bit(31);
//!const BAUD: Mask = Mask::range(0, 7);
//!
//!let status: u32 = 0x8000_0042;
//!assert_eq!(bit::extract(BAUD, status), 0x42);
//!assert_eq!(bit::extract(READY, status), 1);
//!
//!let mut image = Value::new(0u32);
//!image.insert(BAUD, 0x55).set(READY);
//!assert_eq!(image.get(), 0x8000_0055);
//!```

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Deref, DerefMut, Not, Shl, Shr};

/// Unsigned integer types that can back a register image.
///
/// Covers the bitwise and shift operations the field algebra needs, plus
/// truncating conversions between storage widths.
pub trait BitStorage:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of bits in the type
    const BITS: u32;
    const ONE: Self;
    const MAX: Self;

    /// Truncating conversion from a 64 bit value
    fn from_u64(value: u64) -> Self;

    /// Widening conversion into a 64 bit value
    fn into_u64(self) -> u64;
}

macro_rules! bit_storage {
    ($($int:ty),*) => {$(
        impl BitStorage for $int {
            const BITS: u32 = <$int>::BITS;
            const ONE: Self = 1;
            const MAX: Self = <$int>::MAX;

            fn from_u64(value: u64) -> Self {
                value as $int
            }

            fn into_u64(self) -> u64 {
                self as u64
            }
        }
    )*};
}

bit_storage!(u8, u16, u32, u64);

/// A mask of contiguous bits: a start position and a width.
///
/// The mask itself is storage-agnostic. It is only checked against the width
/// of a concrete integer type when applied to one; positions beyond that
/// type are a programmer error caught by debug assertions, release builds
/// shift-truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    /// Bit offset where the mask starts, 0 based
    pub position: u32,
    /// Number of contiguous bits covered, at least 1
    pub width: u32,
}

impl Mask {
    /// Mask spanning the inclusive range between two bit positions.
    ///
    /// The positions may be given in either order. Equal positions produce a
    /// single bit mask.
    ///
    /// ```
    /// use embedded_util::bit::Mask;
    ///
    /// assert_eq!(Mask::range(4, 7), Mask::range(7, 4));
    /// assert_eq!(Mask::range(3, 3), Mask::bit(3));
    /// ```
    pub const fn range(position1: u32, position2: u32) -> Self {
        if position1 < position2 {
            Self {
                position: position1,
                width: 1 + (position2 - position1),
            }
        } else {
            Self {
                position: position2,
                width: 1 + (position1 - position2),
            }
        }
    }

    /// Single bit mask at `position`.
    pub const fn bit(position: u32) -> Self {
        Self { position, width: 1 }
    }

    /// Mask covering the byte at `index` (bits `8 * index` and up).
    pub const fn byte(index: u32) -> Self {
        Self {
            position: index * 8,
            width: 8,
        }
    }

    /// Mask covering the nibble at `index` (bits `4 * index` and up).
    pub const fn nibble(index: u32) -> Self {
        Self {
            position: index * 4,
            width: 4,
        }
    }

    /// The mask as a right-aligned field of ones.
    ///
    /// ```
    /// use embedded_util::bit::Mask;
    ///
    /// assert_eq!(Mask::range(1, 4).origin::<u16>(), 0b1111);
    /// ```
    ///
    /// Widths larger than the storage type saturate to all ones.
    pub fn origin<T: BitStorage>(&self) -> T {
        debug_assert!(self.width >= 1, "mask width must be at least 1");

        if self.width >= T::BITS {
            T::MAX
        } else {
            T::MAX >> (T::BITS - self.width)
        }
    }

    /// The mask shifted into place within the storage type.
    ///
    /// ```
    /// use embedded_util::bit::Mask;
    ///
    /// assert_eq!(Mask::range(1, 4).value::<u16>(), 0b1_1110);
    /// ```
    pub fn value<T: BitStorage>(&self) -> T {
        debug_assert!(self.position < T::BITS, "bit position exceeds register width");

        self.origin::<T>() << self.position
    }
}

/// Extract the field described by `mask`, shifted down to bit 0.
pub fn extract<T: BitStorage>(mask: Mask, value: T) -> T {
    debug_assert!(mask.position < T::BITS, "bit position exceeds register width");

    (value >> mask.position) & mask.origin::<T>()
}

/// An in-memory register image with chainable field operations.
///
/// All operations act purely on the wrapped value. Use [Modify] to apply an
/// accumulated chain to a live register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<T: BitStorage> {
    value: T,
}

impl<T: BitStorage> Value<T> {
    pub const fn new(initial: T) -> Self {
        Self { value: initial }
    }

    /// Set the single bit at the mask's `position`.
    ///
    /// Only one bit is affected regardless of the mask's `width`; use
    /// [insert](Self::insert) for whole-field writes.
    pub fn set(&mut self, mask: Mask) -> &mut Self {
        debug_assert!(mask.position < T::BITS, "bit position exceeds register width");

        self.value = self.value | (T::ONE << mask.position);
        self
    }

    /// Clear the single bit at the mask's `position`.
    ///
    /// Only one bit is affected regardless of the mask's `width`.
    pub fn clear(&mut self, mask: Mask) -> &mut Self {
        debug_assert!(mask.position < T::BITS, "bit position exceeds register width");

        self.value = self.value & !(T::ONE << mask.position);
        self
    }

    /// Toggle the single bit at the mask's `position`.
    ///
    /// Only one bit is affected regardless of the mask's `width`.
    pub fn toggle(&mut self, mask: Mask) -> &mut Self {
        debug_assert!(mask.position < T::BITS, "bit position exceeds register width");

        self.value = self.value ^ (T::ONE << mask.position);
        self
    }

    /// Replace the field described by `mask` with `value`.
    ///
    /// Bits of `value` beyond the mask's `width` are truncated away before
    /// the field is written.
    pub fn insert(&mut self, mask: Mask, value: T) -> &mut Self {
        debug_assert!(mask.position < T::BITS, "bit position exceeds register width");

        let field = mask.value::<T>();
        self.value = (self.value & !field) | ((value << mask.position) & field);
        self
    }

    /// The accumulated register image.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    /// The accumulated register image, truncated or widened into `U`.
    #[must_use]
    pub fn to<U: BitStorage>(&self) -> U {
        U::from_u64(self.value.into_u64())
    }
}

impl<T: BitStorage> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Scoped read-modify-write against a live register.
///
/// Construction copies the register's current value into a working image.
/// The chained mutators (via [Value]) act only on that copy; the register is
/// written back exactly once, when the `Modify` is dropped. The register is
/// untouched in between, so a chain of field updates lands as one write.
///
/// ```
/// use embedded_util::bit::{self, Mask};
///
/// const ENABLE: Mask = Mask::bit(0);
/// const PRESCALER: Mask = Mask::range(4, 7);
///
/// let mut control: u32 = 0;
/// bit::modify(&mut control).insert(PRESCALER, 0xF).set(ENABLE);
/// assert_eq!(control, 0x0000_00F1);
/// ```
///
/// The read-modify-write sequence is not atomic. Callers in contexts with
/// interrupt preemption must guarantee exclusive access to the register for
/// the whole scope.
pub struct Modify<'a, T: BitStorage> {
    image: Value<T>,
    register: &'a mut T,
}

impl<'a, T: BitStorage> Modify<'a, T> {
    pub fn new(register: &'a mut T) -> Self {
        Self {
            image: Value::new(*register),
            register,
        }
    }
}

impl<T: BitStorage> Deref for Modify<'_, T> {
    type Target = Value<T>;

    fn deref(&self) -> &Self::Target {
        &self.image
    }
}

impl<T: BitStorage> DerefMut for Modify<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.image
    }
}

impl<T: BitStorage> Drop for Modify<'_, T> {
    fn drop(&mut self) {
        *self.register = self.image.value;
    }
}

/// Start a scoped read-modify-write of `register`.
pub fn modify<T: BitStorage>(register: &mut T) -> Modify<'_, T> {
    Modify::new(register)
}
