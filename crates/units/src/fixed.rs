//! Deterministic fixed-point arithmetic.
//!
//! Every quantity that feeds star system generation is carried as a
//! [`FixedF`]: a signed 64-bit integer holding `FRAC` fractional bits.
//! Products and quotients go through `i128` intermediates and saturate to
//! the `i64` range instead of wrapping, so the same sequence of operations
//! yields the same bit pattern on every target.
//!
//! Native floating point is only produced at the edges, through
//! [`FixedF::to_f64`], for presentation-side consumers.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A signed fixed-point number with `FRAC` fractional bits.
///
/// # Examples
///
/// ```rust
/// use units::Fixed;
///
/// let half = Fixed::from_ratio(1, 2);
/// let three = Fixed::from_int(3);
/// assert_eq!((half * three).to_f64(), 1.5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedF<const FRAC: u32>(i64);

/// Standard precision: 32 integer bits, 32 fractional bits.
pub type Fixed = FixedF<32>;

/// Widened fractional precision for very small magnitudes.
pub type Fixed48 = FixedF<48>;

#[inline]
fn saturate(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

#[inline]
fn saturating_div(num: i128, den: i128) -> i64 {
    match den {
        0 => match num.signum() {
            1 => i64::MAX,
            -1 => i64::MIN,
            _ => 0,
        },
        _ => saturate(num / den),
    }
}

/// Integer square root (floor) of a 64-bit unsigned value.
pub fn isqrt(n: u64) -> u64 {
    isqrt_u128(n as u128) as u64
}

fn isqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

impl<const FRAC: u32> FixedF<FRAC> {
    pub const FRAC_BITS: u32 = FRAC;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << FRAC);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// 103993/33102, a close rational approximation of π.
    pub const PI: Self = Self::from_ratio_const(103993, 33102);

    /// Builds a value from its raw bit pattern.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw bit pattern.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// `num / den` evaluated at compile time. The caller guarantees
    /// `den != 0` and that the result fits.
    pub const fn from_ratio_const(num: i64, den: i64) -> Self {
        Self((((num as i128) << FRAC) / den as i128) as i64)
    }

    /// An integer, saturating when it does not fit the integer bits.
    pub fn from_int(value: i64) -> Self {
        Self(saturate((value as i128) << FRAC))
    }

    /// The rational `num / den`, truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Fixed;
    ///
    /// assert_eq!(Fixed::from_ratio(3, 4).to_f64(), 0.75);
    /// ```
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self(saturating_div((num as i128) << FRAC, den as i128))
    }

    /// The ratio of two values of another precision, computed directly at
    /// this precision so that small quotients keep all their bits.
    pub fn quotient<const A: u32>(num: FixedF<A>, den: FixedF<A>) -> Self {
        Self(saturating_div((num.0 as i128) << FRAC, den.0 as i128))
    }

    /// Boundary conversion from floating point input (IEEE rounding is
    /// deterministic, so this is reproducible). Non-finite input gives zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self((value * (1u64 << FRAC) as f64).round() as i64)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC) as f64
    }

    /// Integer part, rounded toward negative infinity.
    pub fn to_i64(self) -> i64 {
        self.0 >> FRAC
    }

    /// Integer part, rounded toward negative infinity and clamped to `i32`.
    pub fn to_i32(self) -> i32 {
        self.to_i64().clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// The same value at a different precision.
    pub fn convert<const G: u32>(self) -> FixedF<G> {
        if G >= FRAC {
            FixedF(saturate((self.0 as i128) << (G - FRAC)))
        } else {
            FixedF(self.0 >> (FRAC - G))
        }
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Square root. Non-positive input gives zero.
    pub fn sqrt(self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        Self(isqrt_u128((self.0 as u128) << FRAC) as i64)
    }

    /// Cube root by Newton iteration from a power-of-two estimate.
    pub fn cbrt(self) -> Self {
        if self.0 == 0 {
            return Self::ZERO;
        }
        if self.0 < 0 {
            return -(-self).cbrt();
        }

        // 2^floor(log2(x) / 3) lies within a factor of two below the root.
        let log2 = 63 - self.0.leading_zeros() as i32 - FRAC as i32;
        let shift = FRAC as i32 + log2.div_euclid(3);
        let mut x = Self(1i64 << shift.clamp(0, 62));

        for _ in 0..12 {
            let x2 = x * x;
            if x2.is_zero() {
                break;
            }
            x = (x * 2 + self / x2) / 3;
        }
        x
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<const FRAC: u32> Add for FixedF<FRAC> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl<const FRAC: u32> Sub for FixedF<FRAC> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl<const FRAC: u32> Mul for FixedF<FRAC> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(saturate((self.0 as i128 * rhs.0 as i128) >> FRAC))
    }
}

impl<const FRAC: u32> Div for FixedF<FRAC> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(saturating_div((self.0 as i128) << FRAC, rhs.0 as i128))
    }
}

impl<const FRAC: u32> Neg for FixedF<FRAC> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl<const FRAC: u32> Add<i64> for FixedF<FRAC> {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self + Self::from_int(rhs)
    }
}

impl<const FRAC: u32> Sub<i64> for FixedF<FRAC> {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        self - Self::from_int(rhs)
    }
}

impl<const FRAC: u32> Mul<i64> for FixedF<FRAC> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(saturate(self.0 as i128 * rhs as i128))
    }
}

impl<const FRAC: u32> MulAssign<i64> for FixedF<FRAC> {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl<const FRAC: u32> Div<i64> for FixedF<FRAC> {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self(saturating_div(self.0 as i128, rhs as i128))
    }
}

impl<const FRAC: u32> Mul<FixedF<FRAC>> for i64 {
    type Output = FixedF<FRAC>;

    fn mul(self, rhs: FixedF<FRAC>) -> FixedF<FRAC> {
        rhs * self
    }
}

impl<const FRAC: u32> Shr<u32> for FixedF<FRAC> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        Self(self.0 >> rhs.min(63))
    }
}

impl<const FRAC: u32> Shl<u32> for FixedF<FRAC> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        Self(saturate((self.0 as i128) << rhs.min(64)))
    }
}

impl<const FRAC: u32> AddAssign for FixedF<FRAC> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> SubAssign for FixedF<FRAC> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> MulAssign for FixedF<FRAC> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const FRAC: u32> DivAssign for FixedF<FRAC> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const FRAC: u32> std::iter::Sum for FixedF<FRAC> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

// ============================================================================
// Formatting and serialization
// ============================================================================

impl<const FRAC: u32> fmt::Display for FixedF<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.to_f64()),
            None => write!(f, "{}", self.to_f64()),
        }
    }
}

impl<const FRAC: u32> fmt::Debug for FixedF<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FixedF<{}>({})", FRAC, self.to_f64())
    }
}

impl<const FRAC: u32> Serialize for FixedF<FRAC> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

/// Accepted input forms: a plain number, or an exact `[num, den]` ratio.
#[derive(Deserialize)]
#[serde(untagged)]
enum FixedRepr {
    Ratio(i64, i64),
    Number(f64),
}

impl<'de, const FRAC: u32> Deserialize<'de> for FixedF<FRAC> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FixedRepr::deserialize(deserializer)? {
            FixedRepr::Ratio(_, 0) => Err(serde::de::Error::custom(
                "fixed-point ratio has a zero denominator",
            )),
            FixedRepr::Ratio(num, den) => Ok(Self::from_ratio(num, den)),
            FixedRepr::Number(value) => Ok(Self::from_f64(value)),
        }
    }
}
