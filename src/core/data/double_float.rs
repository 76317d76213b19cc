//! Double-float ("double-single" / "double-double") arithmetic.
//!
//! A [`DoubleFloat`] stores a value as the unevaluated sum `hi + lo` of two
//! limbs with `|lo| <= ulp(hi) / 2`. The error-free transforms below are the
//! classic Knuth two-sum and Dekker split/two-product, which keep the rounding
//! error of every primary operation in the low limb. With `f32` limbs this
//! gives roughly 14 significant decimal digits, with `f64` limbs roughly 31.
//!
//! Nothing here may be compiled with fused multiply-add contraction or
//! reassociation; Rust guarantees neither happens implicitly.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A floating-point type usable as one half of a [`DoubleFloat`].
pub trait Limb:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    const ZERO: Self;

    /// Dekker splitting constant, `2^ceil(p/2) + 1` for a `p`-bit significand.
    const SPLITTER: Self;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn is_finite(self) -> bool;
}

impl Limb for f32 {
    const ZERO: Self = 0.0;
    /// Dekker split constant `2^12 + 1` for a 24-bit significand; f64 limbs
    /// would use `2^27 + 1`.
    const SPLITTER: Self = 4097.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Limb for f64 {
    const ZERO: Self = 0.0;
    // 53-bit significand
    const SPLITTER: Self = 134_217_729.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DoubleFloat<L: Limb> {
    pub hi: L,
    pub lo: L,
}

/// Knuth's branch-free error-free sum: `s + e == a + b` exactly.
#[inline]
#[must_use]
pub fn two_sum<L: Limb>(a: L, b: L) -> (L, L) {
    let s = a + b;
    let v = s - a;
    let e = (a - (s - v)) + (b - v);
    (s, e)
}

/// Error-free sum assuming `|a| >= |b|`.
#[inline]
#[must_use]
pub fn quick_two_sum<L: Limb>(a: L, b: L) -> (L, L) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// Dekker split of `a` into two non-overlapping halves with `hi + lo == a`.
#[inline]
#[must_use]
pub fn split<L: Limb>(a: L) -> (L, L) {
    let t = L::SPLITTER * a;
    let hi = t - (t - a);
    let lo = a - hi;
    (hi, lo)
}

/// Error-free product: `p + e == a * b` exactly (barring overflow/underflow).
#[inline]
#[must_use]
pub fn two_prod<L: Limb>(a: L, b: L) -> (L, L) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let e = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, e)
}

impl<L: Limb> DoubleFloat<L> {
    pub const ZERO: Self = Self {
        hi: L::ZERO,
        lo: L::ZERO,
    };

    #[inline]
    #[must_use]
    pub fn from_float(a: L) -> Self {
        Self { hi: a, lo: L::ZERO }
    }

    /// Lowers a wider value, keeping the part `hi` cannot hold in `lo`.
    #[inline]
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        let hi = L::from_f64(value);
        let lo = L::from_f64(value - hi.to_f64());
        Self { hi, lo }
    }

    #[inline]
    #[must_use]
    pub fn to_float(self) -> L {
        self.hi + self.lo
    }

    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.hi.to_f64() + self.lo.to_f64()
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }

    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        let (s, e) = two_sum(self.hi, other.hi);
        let e = e + (self.lo + other.lo);
        let (hi, lo) = quick_two_sum(s, e);
        Self { hi, lo }
    }

    #[inline]
    #[must_use]
    pub fn add_float(self, other: L) -> Self {
        let (s, e) = two_sum(self.hi, other);
        let e = e + self.lo;
        let (hi, lo) = quick_two_sum(s, e);
        Self { hi, lo }
    }

    #[inline]
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        self.add(other.neg())
    }

    #[inline]
    #[must_use]
    pub fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }

    #[inline]
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        let (p, e) = two_prod(self.hi, other.hi);
        let e = e + (self.hi * other.lo + self.lo * other.hi);
        let (hi, lo) = quick_two_sum(p, e);
        Self { hi, lo }
    }

    #[inline]
    #[must_use]
    pub fn mul_float(self, other: L) -> Self {
        let (p, e) = two_prod(self.hi, other);
        let e = e + self.lo * other;
        let (hi, lo) = quick_two_sum(p, e);
        Self { hi, lo }
    }
}

impl<L: Limb> Add for DoubleFloat<L> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DoubleFloat::add(self, other)
    }
}

impl<L: Limb> Add<L> for DoubleFloat<L> {
    type Output = Self;

    fn add(self, other: L) -> Self {
        self.add_float(other)
    }
}

impl<L: Limb> Sub for DoubleFloat<L> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        DoubleFloat::sub(self, other)
    }
}

impl<L: Limb> Mul for DoubleFloat<L> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        DoubleFloat::mul(self, other)
    }
}

impl<L: Limb> Mul<L> for DoubleFloat<L> {
    type Output = Self;

    fn mul(self, other: L) -> Self {
        self.mul_float(other)
    }
}

impl<L: Limb> Neg for DoubleFloat<L> {
    type Output = Self;

    fn neg(self) -> Self {
        DoubleFloat::neg(self)
    }
}

impl<L: Limb> From<L> for DoubleFloat<L> {
    fn from(value: L) -> Self {
        Self::from_float(value)
    }
}

/// A complex number with both parts in double-float precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexDoubleFloat<L: Limb> {
    pub real: DoubleFloat<L>,
    pub imag: DoubleFloat<L>,
}

impl<L: Limb> ComplexDoubleFloat<L> {
    pub const ZERO: Self = Self {
        real: DoubleFloat::ZERO,
        imag: DoubleFloat::ZERO,
    };

    #[inline]
    #[must_use]
    pub fn new(real: DoubleFloat<L>, imag: DoubleFloat<L>) -> Self {
        Self { real, imag }
    }

    #[inline]
    #[must_use]
    pub fn from_f64(real: f64, imag: f64) -> Self {
        Self {
            real: DoubleFloat::from_f64(real),
            imag: DoubleFloat::from_f64(imag),
        }
    }

    /// `(x + iy)^2 = (x^2 - y^2) + i(2xy)`
    #[inline]
    #[must_use]
    pub fn square(self) -> Self {
        let xx = self.real.mul(self.real);
        let yy = self.imag.mul(self.imag);
        let xy = self.real.mul(self.imag);

        Self {
            real: xx.sub(yy),
            imag: xy.add(xy),
        }
    }

    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            real: self.real.add(other.real),
            imag: self.imag.add(other.imag),
        }
    }

    /// Squared magnitude demoted to a single limb; only used for threshold tests.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> L {
        let x = self.real.to_float();
        let y = self.imag.to_float();
        x * x + y * y
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}
