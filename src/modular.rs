//! Extended Euclidean algorithm and the Chinese Remainder Theorem.
//!
//! These free functions underpin root extraction in the dihedral group,
//! where a kth-root of a rotation reduces to the linear congruence
//! `k*j ≡ i (mod n)`.

use core::fmt;

/// Greatest common divisor of two unsigned integers.
pub const fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Find `(x, y, g)` such that `a*x + b*y = g` with `|g| = gcd(a, b)`.
///
/// Iterative extended Euclid, updating the two coefficient pairs alongside
/// the remainders (the pairs trace the continued-fraction convergents of
/// `a/b`). Always succeeds, for any inputs including zero and negatives;
/// `g == 0` iff both inputs are zero. The sign of `g` follows the
/// algorithm, so callers wanting a nonnegative gcd normalize `(x, y, g)`
/// by negating all three together. Arithmetic is plain `i64`, so the one
/// input pair whose quotient overflows, `(i64::MIN, -1)`, is unsupported.
pub fn bezout(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }
    (old_x, old_y, old_r)
}

/// Error type for [`crt`]: the two congruences disagree modulo `gcd(m, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSolution {
    /// Residue of the first congruence.
    pub a: i64,
    /// Residue of the second congruence.
    pub b: i64,
    /// The gcd of the two moduli, modulo which the residues disagree.
    pub modulus: i64,
}

impl fmt::Display for NoSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no solution: {} ≢ {} (mod {})",
            self.a, self.b, self.modulus
        )
    }
}

impl std::error::Error for NoSolution {}

/// Find `(c, lcm(m, n))` such that `c ≡ a (mod m)` and `c ≡ b (mod n)`.
///
/// Requires `m >= 1` and `n >= 1`, with `lcm(m, n)` itself fitting in
/// `i64`. This is the general two-modulus CRT: the moduli need not be
/// coprime, and `c` is returned in the canonical range `[0, lcm(m, n))`.
///
/// # Errors
///
/// Returns [`NoSolution`] when `a ≢ b (mod gcd(m, n))`, in which case no
/// integer satisfies both congruences.
pub fn crt(a: i64, m: i64, b: i64, n: i64) -> Result<(i64, i64), NoSolution> {
    debug_assert!(m >= 1, "crt modulus m={} must be at least 1", m);
    debug_assert!(n >= 1, "crt modulus n={} must be at least 1", n);

    let (mut x, mut y, mut g) = bezout(m, n);
    if g < 0 {
        (x, y, g) = (-x, -y, -g);
    }
    if a.rem_euclid(g) != b.rem_euclid(g) {
        return Err(NoSolution { a, b, modulus: g });
    }

    // a*y*n + b*x*m is always divisible by g here: with m = g*m' and
    // n = g*n', the bezout identity gives x*m' + y*n' = 1.
    let l = m / g * n;
    let c = (a as i128 * y as i128 * n as i128 + b as i128 * x as i128 * m as i128) / g as i128;
    Ok((c.rem_euclid(l as i128) as i64, l))
}
