//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.

use super::slice::*;
use super::small_powers::*;
use alloc::vec::Vec;
use core::{cmp, mem};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. 64-bit limbs are used on targets with
//  native 64x64->128 multiplication, see `build.rs`.

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) const POW5_LIMB: &[Limb] = &POW5_32;

#[cfg(limb_width_32)]
pub(crate) const POW10_LIMB: &[Limb] = &POW10_32;

#[cfg(limb_width_32)]
type Wide = u64;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) const POW5_LIMB: &[Limb] = &POW5_64;

#[cfg(limb_width_64)]
pub(crate) const POW10_LIMB: &[Limb] = &POW10_64;

#[cfg(limb_width_64)]
type Wide = u128;

const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

// SPLIT
// -----

/// Split u64 into limbs, in little-endian order.
#[inline]
#[cfg(limb_width_32)]
fn split_u64(x: u64) -> [Limb; 2] {
    [x as Limb, (x >> 32) as Limb]
}

/// Split u64 into limbs, in little-endian order.
#[inline]
#[cfg(limb_width_64)]
fn split_u64(x: u64) -> [Limb; 1] {
    [x as Limb]
}

// HI64
// ----

/// Check if any of the remaining bits are non-zero.
#[inline]
fn nonzero(x: &[Limb], rindex: usize) -> bool {
    let len = x.len();
    let slc = &x[..len - rindex];
    slc.iter().rev().any(|&x| x != 0)
}

/// Shift 64-bit integer to high 64-bits.
#[inline]
fn u64_to_hi64_1(r0: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    (r0 << ls, false)
}

/// Shift 2 64-bit integers to high 64-bits.
#[inline]
fn u64_to_hi64_2(r0: u64, r1: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    let rs = 64 - ls;
    let v = match ls {
        0 => r0,
        _ => (r0 << ls) | (r1 >> rs),
    };
    let n = r1 << ls != 0;
    (v, n)
}

/// Get the high 64 bits from a normalized little-endian slice, and whether
/// any lower bits were truncated.
#[inline]
#[cfg(limb_width_32)]
fn hi64(x: &[Limb]) -> (u64, bool) {
    let rview = x.rview();
    match x.len() {
        0 => (0, false),
        1 => u64_to_hi64_1(rview[0] as u64),
        2 => u64_to_hi64_1(((rview[0] as u64) << 32) | rview[1] as u64),
        _ => {
            let r0 = rview[0] as u64;
            let r1 = (rview[1] as u64) << 32;
            let r2 = rview[2] as u64;
            let (v, n) = u64_to_hi64_2(r0, r1 | r2);
            (v, n || nonzero(x, 3))
        }
    }
}

/// Get the high 64 bits from a normalized little-endian slice, and whether
/// any lower bits were truncated.
#[inline]
#[cfg(limb_width_64)]
fn hi64(x: &[Limb]) -> (u64, bool) {
    let rview = x.rview();
    match x.len() {
        0 => (0, false),
        1 => u64_to_hi64_1(rview[0]),
        _ => {
            let (v, n) = u64_to_hi64_2(rview[0], rview[1]);
            (v, n || nonzero(x, 2))
        }
    }
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

mod scalar {
    use super::*;

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let (v, overflow) = x.overflowing_add(y);
        *x = v;
        overflow
    }

    /// Multiply two small integers (with carry), returning the high
    /// limb of the result.
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        // Cannot overflow, as long as wide is 2x as wide.
        let z = (*x as Wide) * (y as Wide) + (carry as Wide);
        *x = z as Limb;
        (z >> LIMB_BITS) as Limb
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

mod small {
    use super::*;

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        if x.is_empty() {
            x.push(y);
            return;
        }

        let mut carry = scalar::iadd(&mut x[0], y);
        let mut size = 1;
        while carry && size < x.len() {
            carry = scalar::iadd(&mut x[size], 1);
            size += 1;
        }

        // Overflowed the buffer entirely.
        if carry {
            x.push(1);
        }
    }

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        if carry != 0 {
            x.push(carry);
        }
    }

    /// MulAssign by a power of 5.
    ///
    /// Multiplying by the largest small power that fits in a limb beats
    /// exponentiation by squaring for the operand sizes produced by the
    /// digit buffer.
    pub fn imul_pow5(x: &mut Vec<Limb>, n: u32) {
        let small_powers = POW5_LIMB;
        let step = small_powers.len() - 1;
        let power = small_powers[step];
        let mut n = n as usize;
        while n >= step {
            imul(x, power);
            n -= step;
        }

        imul(x, small_powers[n]);
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        let nlz = if x.is_empty() {
            0
        } else {
            x.rindex(0).leading_zeros() as usize
        };
        LIMB_BITS
            .checked_mul(x.len())
            .map_or(usize::MAX, |v| v - nlz)
    }

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS`.
    #[inline]
    fn ishl_bits(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // For each limb, shift left by n and carry in the bits shifted out
        // of the previous limb.
        let rshift = LIMB_BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut Vec<Limb>, n: usize) {
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishl_bits(x, rem);
        if div != 0 && !x.is_empty() {
            // Pad with zero limbs at the least significant end.
            let len = x.len();
            x.resize(len + div, 0);
            x.rotate_right(div);
        }
    }

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while !x.is_empty() && *x.rindex(0) == 0 {
            x.pop();
        }
    }
}

// LARGE
// -----

/// Compare `x` to `y`, in little-endian order.
#[inline]
fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
    x.len().cmp(&y.len()).then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

// TRAITS
// ------

/// Traits for shared operations for big integers.
///
/// None of these are implemented using normal traits, since these
/// are very expensive operations, and we want to deliberately
/// and explicitly use these functions.
pub(crate) trait Math: Clone + Sized + Default {
    /// Get access to the underlying data
    fn data(&self) -> &Vec<Limb>;

    /// Get access to the underlying data
    fn data_mut(&mut self) -> &mut Vec<Limb>;

    /// Compare self to y.
    #[inline]
    fn compare(&self, y: &Self) -> cmp::Ordering {
        compare(self.data(), y.data())
    }

    /// Get the high 64-bits from the bigint and if there are remaining bits.
    #[inline]
    fn hi64(&self) -> (u64, bool) {
        hi64(self.data())
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    fn bit_length(&self) -> usize {
        small::bit_length(self.data())
    }

    /// Create new big integer from u64.
    #[inline]
    fn from_u64(x: u64) -> Self {
        let mut v = Self::default();
        v.data_mut().extend(split_u64(x));
        v.normalize();
        v
    }

    /// Normalize the integer, so any leading zero values are removed.
    #[inline]
    fn normalize(&mut self) {
        small::normalize(self.data_mut());
    }

    /// AddAssign small integer.
    #[inline]
    fn iadd_small(&mut self, y: Limb) {
        small::iadd(self.data_mut(), y);
    }

    /// MulAssign small integer.
    #[inline]
    fn imul_small(&mut self, y: Limb) {
        small::imul(self.data_mut(), y);
    }

    /// Multiply by a power of 2.
    #[inline]
    fn imul_pow2(&mut self, n: u32) {
        small::ishl(self.data_mut(), n as usize);
    }

    /// Multiply by a power of 5.
    #[inline]
    fn imul_pow5(&mut self, n: u32) {
        small::imul_pow5(self.data_mut(), n);
    }

    /// MulAssign by a power of 10.
    #[inline]
    fn imul_pow10(&mut self, n: u32) {
        self.imul_pow5(n);
        self.imul_pow2(n);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Bigint {
        data: Vec<Limb>,
    }

    impl Math for Bigint {
        fn data(&self) -> &Vec<Limb> {
            &self.data
        }

        fn data_mut(&mut self) -> &mut Vec<Limb> {
            &mut self.data
        }
    }

    #[cfg(limb_width_32)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        x.to_vec()
    }

    #[cfg(limb_width_64)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        x.chunks(2)
            .map(|xi| match *xi {
                [lo] => lo as u64,
                [lo, hi] => ((hi as u64) << 32) | lo as u64,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn compare_test() {
        let x = Bigint {
            data: from_u32(&[1]),
        };
        let y = Bigint {
            data: from_u32(&[2]),
        };
        assert_eq!(x.compare(&y), cmp::Ordering::Less);
        assert_eq!(x.compare(&x), cmp::Ordering::Equal);
        assert_eq!(y.compare(&x), cmp::Ordering::Greater);

        // Longer buffers are larger once normalized.
        let x = Bigint {
            data: from_u32(&[5, 1]),
        };
        let y = Bigint {
            data: from_u32(&[2]),
        };
        assert_eq!(x.compare(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare(&x), cmp::Ordering::Less);

        // The most significant limb decides first.
        let x = Bigint {
            data: from_u32(&[0, 1, 9]),
        };
        let y = Bigint {
            data: from_u32(&[4294967295, 0, 9]),
        };
        assert_eq!(x.compare(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare(&x), cmp::Ordering::Less);
    }

    #[test]
    fn hi64_test() {
        assert_eq!(Bigint::from_u64(0xA).hi64(), (0xA000000000000000, false));
        assert_eq!(Bigint::from_u64(0xAB).hi64(), (0xAB00000000000000, false));
        assert_eq!(
            Bigint::from_u64(0xA23456789A).hi64(),
            (0xA23456789A000000, false)
        );

        let mut x = Bigint::from_u64(0xFFFFFFFFFFFFFFFF);
        x.imul_pow2(4);
        x.iadd_small(1);
        assert_eq!(x.hi64(), (0xFFFFFFFFFFFFFFFF, true));
    }

    #[test]
    fn bit_length_test() {
        let x = Bigint {
            data: from_u32(&[0, 0, 0, 1]),
        };
        assert_eq!(x.bit_length(), 97);

        let x = Bigint {
            data: from_u32(&[0, 0, 0, 3]),
        };
        assert_eq!(x.bit_length(), 98);

        let x = Bigint {
            data: from_u32(&[1 << 31]),
        };
        assert_eq!(x.bit_length(), 32);
    }

    #[test]
    fn iadd_small_test() {
        let mut x = Bigint {
            data: from_u32(&[5]),
        };
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = Bigint::from_u64(0x80000000FFFFFFFF);
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = Bigint::from_u64(0xFFFFFFFFFFFFFFFF);
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[6, 0, 1]));
    }

    #[test]
    fn imul_small_test() {
        let mut x = Bigint {
            data: from_u32(&[5]),
        };
        x.imul_small(7);
        assert_eq!(x.data, from_u32(&[35]));

        let mut x = Bigint::from_u64(0x4000000040000);
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[0x00140000, 0x140000]));

        // Overflow into a new limb.
        let mut x = Bigint {
            data: from_u32(&[0x33333334]),
        };
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[4, 1]));
    }

    #[test]
    fn imul_pow10_test() {
        let mut x = Bigint::from_u64(1);
        x.imul_pow10(20);
        // 10^20 = 0x56BC75E2D63100000
        assert_eq!(x.data, from_u32(&[0x63100000, 0x6BC75E2D, 5]));

        let mut x = Bigint::from_u64(3);
        x.imul_pow5(27);
        let mut y = Bigint::from_u64(7450580596923828125);
        y.imul_small(3);
        assert_eq!(x.compare(&y), cmp::Ordering::Equal);
    }

    #[test]
    fn ishl_test() {
        let mut x = Bigint {
            data: from_u32(&[0xD2210408]),
        };
        x.imul_pow2(5);
        assert_eq!(x.data, from_u32(&[0x44208100, 0x1A]));

        let mut x = Bigint {
            data: from_u32(&[0xD2210408]),
        };
        x.imul_pow2(64);
        assert_eq!(x.data, from_u32(&[0, 0, 0xD2210408]));
    }
}
