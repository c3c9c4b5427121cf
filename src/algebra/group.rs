use core::fmt;

use crate::algebra::monoid::{repeated_product, Monoid};
use crate::modular::NoSolution;

/// Abstract group: a monoid in which every element has an inverse.
///
/// Laws (you should test these for concrete types):
/// - associativity: (ab)c = a(bc)
/// - identity: e * a = a * e = a
/// - inverse: a * a⁻¹ = a⁻¹ * a = e
pub trait Group: Monoid {
    /// Inverse element a⁻¹.
    fn inverse(&self) -> Self;

    /// Exponentiation by a non-negative integer using square-and-multiply.
    fn pow(&self, exp: u64) -> Self {
        repeated_product(Self::identity(), self.clone(), exp)
    }

    /// Exponentiation by a possibly negative integer.
    ///
    /// Computes `self^|exp|` and inverts the result once at the end when
    /// `exp < 0`. This uses `(a^k)⁻¹ = a^-k`, which holds in any group,
    /// and never computes an inverse for `exp == 0`.
    fn pow_signed(&self, exp: i64) -> Self {
        let result = self.pow(exp.unsigned_abs());
        if exp < 0 {
            result.inverse()
        } else {
            result
        }
    }

    /// Exponentiation by a tagged [`Exponent`].
    ///
    /// The default implementation handles integer exponents and rejects
    /// reciprocals; groups with root-extraction semantics override this.
    fn rep(&self, exp: Exponent) -> Result<Self, PowerError> {
        match exp {
            Exponent::Int(n) => Ok(self.pow_signed(n)),
            Exponent::Reciprocal(k) => Err(PowerError::UnsupportedExponent {
                exponent: 1.0 / k as f64,
            }),
        }
    }
}

/// Largest reciprocal denominator recognized by [`Exponent::try_from_f64`].
///
/// Above 2^52 a `round()` on the reciprocal no longer distinguishes
/// neighboring integers, so recognition would be meaningless.
const MAX_RECIPROCAL: f64 = (1u64 << 52) as f64;

/// Relative tolerance when matching `1/x` against an integer.
///
/// Deliberately approximate: a hair above the relative spacing of f64
/// values near 1, so round-tripped reciprocals pass and anything else
/// fails.
const RECIPROCAL_TOLERANCE: f64 = 2e-16;

/// An exponent for [`Group::rep`]: either an exact integer `n`,
/// or the reciprocal `1/k` of a positive integer `k` (a kth-root request).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exponent {
    /// `a^n` for integer `n` (may be negative).
    Int(i64),
    /// `a^(1/k)`: the kth root of `a`, for `k >= 1`.
    Reciprocal(u64),
}

impl Exponent {
    /// Classify a floating-point exponent.
    ///
    /// Exact integers become [`Exponent::Int`]. Otherwise the value is
    /// accepted as `1/k` when `k = round(1/value)` is a positive integer
    /// below 2^52 and the relative error is under 2e-16; this keeps values
    /// like `1/e` from being silently misread as a root request.
    pub fn try_from_f64(value: f64) -> Result<Self, PowerError> {
        if value.trunc() == value && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Ok(Exponent::Int(value as i64));
        }
        let r = 1.0 / value;
        let k = r.round();
        if k > 0.0 && k < MAX_RECIPROCAL && ((k - r) / k).abs() < RECIPROCAL_TOLERANCE {
            return Ok(Exponent::Reciprocal(k as u64));
        }
        Err(PowerError::UnsupportedExponent { exponent: value })
    }
}

impl From<i64> for Exponent {
    fn from(n: i64) -> Self {
        Exponent::Int(n)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Int(n) => write!(f, "{}", n),
            Exponent::Reciprocal(k) => write!(f, "1/{}", k),
        }
    }
}

/// Error type for [`Group::rep`].
#[derive(Debug, Clone, PartialEq)]
pub enum PowerError {
    /// The exponent is neither an exact integer nor, where the group
    /// supports roots, a recognizable reciprocal of one.
    UnsupportedExponent { exponent: f64 },
    /// A root computation produced mutually incompatible congruences.
    NoSolution(NoSolution),
    /// Even-root request on a dihedral reflection: even powers are always
    /// rotations, so no even root of a reflection exists.
    NoEvenRoot,
}

impl fmt::Display for PowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerError::UnsupportedExponent { exponent } => {
                write!(f, "cannot handle exponent {}", exponent)
            }
            PowerError::NoSolution(e) => write!(f, "{}", e),
            PowerError::NoEvenRoot => write!(f, "reflections have no even roots"),
        }
    }
}

impl std::error::Error for PowerError {}

impl From<NoSolution> for PowerError {
    fn from(e: NoSolution) -> Self {
        PowerError::NoSolution(e)
    }
}
