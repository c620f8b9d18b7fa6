use num_bigint::BigInt;

/// Initial value and successor rule for one kind of version value.
pub trait Sequence<T>: Send + Sync {
    fn init(&self) -> T;
    fn next(&self, current: &T) -> T;
}

/// Unbounded sequence over arbitrary-precision integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntSequence;

impl Sequence<BigInt> for BigIntSequence {
    fn init(&self) -> BigInt {
        BigInt::from(1u8)
    }

    fn next(&self, current: &BigInt) -> BigInt {
        current + 1u32
    }
}

/// 8-bit sequence that wraps with `i8::MAX` (127) as the modulus.
///
/// The remainder is truncated, so negative values stay non-positive:
/// `next(126) == 0`, `next(127) == 1`, `next(-5) == -4`. Records persisted by
/// earlier writers depend on this exact cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int8Sequence;

impl Sequence<i8> for Int8Sequence {
    fn init(&self) -> i8 {
        1
    }

    fn next(&self, current: &i8) -> i8 {
        // |(v + 1) % 127| < 127, always fits
        ((i16::from(*current) + 1) % i16::from(i8::MAX)) as i8
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int32Sequence;

impl Sequence<i32> for Int32Sequence {
    fn init(&self) -> i32 {
        1
    }

    fn next(&self, current: &i32) -> i32 {
        current.wrapping_add(1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int64Sequence;

impl Sequence<i64> for Int64Sequence {
    fn init(&self) -> i64 {
        1
    }

    fn next(&self, current: &i64) -> i64 {
        current.wrapping_add(1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int16Sequence;

impl Sequence<i16> for Int16Sequence {
    fn init(&self) -> i16 {
        1
    }

    fn next(&self, current: &i16) -> i16 {
        current.wrapping_add(1)
    }
}
