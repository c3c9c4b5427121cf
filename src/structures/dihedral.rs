use core::fmt;
use core::ops::Mul;

use crate::algebra::group::{Exponent, Group, PowerError};
use crate::algebra::monoid::Monoid;
use crate::modular::crt;

/// Element of the dihedral group D_N: the symmetries of a regular N-gon.
///
/// An element is either the rotation by `index` steps, or that rotation
/// composed with a fixed reflection. The group has order `2N`.
///
/// Integer powers go through square-and-multiply; reciprocal exponents
/// (`a^(1/k)`) are solved exactly, reducing a kth-root of a rotation to a
/// linear congruence handled by [`crt`] in O(log N) instead of an O(N)
/// search.
///
/// # Example
///
/// ```
/// use grupp::{Dih, Exponent, Group};
///
/// type D5 = Dih<5>;
///
/// let r = D5::rotation(2);
/// let cube_root = r.rep(Exponent::Reciprocal(3)).unwrap();
/// assert_eq!(cube_root.pow(3), r);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dih<const N: u64> {
    rotation: bool,
    index: u64,
}

#[cfg(feature = "rand")]
impl<const N: u64> rand::distributions::Distribution<Dih<N>> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Dih<N> {
        let i = rng.gen_range(0..2 * N);
        if i < N {
            Dih::rotation(i)
        } else {
            Dih::reflection(i - N)
        }
    }
}

#[cfg(feature = "serde")]
impl<const N: u64> serde::Serialize for Dih<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.rotation, self.index).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: u64> serde::Deserialize<'de> for Dih<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (rotation, index) = <(bool, u64)>::deserialize(deserializer)?;
        Ok(if rotation {
            Self::rotation(index)
        } else {
            Self::reflection(index)
        })
    }
}

impl<const N: u64> Dih<N> {
    /// Rotation by `index` steps (reduced mod N).
    pub fn rotation(index: u64) -> Self {
        debug_assert!(N > 0, "dihedral degree N={} must be at least 1", N);
        Self {
            rotation: true,
            index: index % N,
        }
    }

    /// The reflection composed with rotation by `index` steps (reduced mod N).
    pub fn reflection(index: u64) -> Self {
        debug_assert!(N > 0, "dihedral degree N={} must be at least 1", N);
        Self {
            rotation: false,
            index: index % N,
        }
    }

    /// `true` for a rotation, `false` for a reflection.
    pub const fn is_rotation(self) -> bool {
        self.rotation
    }

    /// Rotation index in `[0, N)`.
    pub const fn index(self) -> u64 {
        self.index
    }

    /// The degree `N` of the underlying polygon.
    pub const fn degree() -> u64 {
        N
    }

    /// The group order `2N`.
    pub const fn order() -> u64 {
        2 * N
    }

    /// Validate that the degree `N` is positive.
    ///
    /// Call this at application startup for early failure on
    /// misconfiguration.
    pub const fn validate_degree() -> Result<(), &'static str> {
        if N == 0 {
            return Err("dihedral degree N must be at least 1");
        }
        Ok(())
    }

    /// All `2N` elements: rotations by increasing index, then reflections
    /// by increasing index.
    pub fn elements() -> impl Iterator<Item = Self> {
        (0..N).map(Self::rotation).chain((0..N).map(Self::reflection))
    }

    /// The kth root, for `0 < k < 2^52` (the same band
    /// [`Exponent::try_from_f64`] recognizes; `Exponent::Reciprocal` can
    /// be built directly, so the bound is re-checked here rather than
    /// trusted).
    ///
    /// For a rotation at `i` this solves `k*j ≡ i (mod N)` via [`crt`];
    /// the combined residue is divisible by `k` whenever a solution
    /// exists. A reflection is its own kth root for odd `k` (its square is
    /// the identity), and has no even roots at all.
    fn root(self, k: u64) -> Result<Self, PowerError> {
        if k == 0 || k >= (1 << 52) {
            return Err(PowerError::UnsupportedExponent {
                exponent: 1.0 / k as f64,
            });
        }
        if self.rotation {
            let (c, _) = crt(self.index as i64, N as i64, 0, k as i64)?;
            let j = (c / k as i64) as u64;
            debug_assert!(j < N, "root index {} out of range for degree {}", j, N);
            Ok(Self {
                rotation: true,
                index: j,
            })
        } else if k % 2 == 1 {
            Ok(self)
        } else {
            Err(PowerError::NoEvenRoot)
        }
    }
}

impl<const N: u64> Monoid for Dih<N> {
    fn identity() -> Self {
        Self::rotation(0)
    }

    /// Composition: a reflection on the left inverts the orientation of
    /// the right operand, so its index is negated before the indices add.
    /// The result is a rotation iff both operands agree in kind.
    fn op(&self, rhs: &Self) -> Self {
        let j = if self.rotation {
            rhs.index
        } else {
            (N - rhs.index) % N
        };
        Self {
            rotation: self.rotation == rhs.rotation,
            index: (self.index + j) % N,
        }
    }
}

impl<const N: u64> Group for Dih<N> {
    fn inverse(&self) -> Self {
        if self.rotation {
            Self {
                rotation: true,
                index: (N - self.index) % N,
            }
        } else {
            *self
        }
    }

    fn rep(&self, exp: Exponent) -> Result<Self, PowerError> {
        match exp {
            Exponent::Int(n) => Ok(self.pow_signed(n)),
            Exponent::Reciprocal(k) => self.root(k),
        }
    }
}

impl<const N: u64> Mul for Dih<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.op(&rhs)
    }
}

impl<const N: u64> fmt::Debug for Dih<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dih<{}>({})", N, self)
    }
}

impl<const N: u64> fmt::Display for Dih<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.rotation { 'r' } else { 's' }, self.index)
    }
}
