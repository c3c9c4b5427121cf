/// Abstract monoid with a single binary operation, written multiplicatively.
///
/// Laws (you should test these for concrete types):
/// - associativity: (ab)c = a(bc)
/// - identity: e * a = a * e = a
pub trait Monoid: Sized + Clone + Eq {
    /// Identity element `e`.
    fn identity() -> Self;

    /// Monoid operation `*` (often written as `·` in math).
    fn op(&self, rhs: &Self) -> Self;
}

/// Compute `seed * base^exp` using square-and-multiply.
///
/// Works in any monoid: no inverses are required, so negative exponents
/// are ruled out by the `u64` type. Time complexity: O(log exp) operations.
pub fn repeated_product<M: Monoid>(seed: M, base: M, exp: u64) -> M {
    let mut acc = seed;
    let mut base = base;

    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            acc = acc.op(&base);
        }
        base = base.op(&base);
        e >>= 1;
    }
    acc
}
