//! Ward quasigroups: finite structures defined by a division operation.
//!
//! Morgan Ward (1930). "Postulates for the inverse operations in a group."
//! Transactions of the American Mathematical Society, 32 (3): 520–526.

/// A finite Ward quasigroup: a carrier set together with a division
/// operation `a / b` satisfying Ward's postulates.
///
/// The algebra here is a direct pass-through to the supplied division
/// function; the interesting part is that a full group can be recovered
/// from division alone, via [`mul`](WardQuasigroup::mul),
/// [`inverse`](WardQuasigroup::inverse) and
/// [`right_identity`](WardQuasigroup::right_identity).
pub struct WardQuasigroup<T, D> {
    carrier: Vec<T>,
    div: D,
}

impl<T, D> WardQuasigroup<T, D>
where
    T: Clone + Eq,
    D: Fn(&T, &T) -> T,
{
    /// Quasigroup over a nonempty carrier with the given division.
    ///
    /// # Panics
    ///
    /// Panics when the carrier is empty.
    pub fn new(carrier: Vec<T>, div: D) -> Self {
        assert!(!carrier.is_empty(), "a Ward quasigroup needs a nonempty carrier");
        Self { carrier, div }
    }

    /// Number of elements in the carrier.
    pub fn len(&self) -> usize {
        self.carrier.len()
    }

    /// Always `false`: the carrier is nonempty by construction.
    pub fn is_empty(&self) -> bool {
        self.carrier.is_empty()
    }

    /// Iterate over the carrier.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.carrier.iter()
    }

    /// Carrier membership.
    pub fn contains(&self, value: &T) -> bool {
        self.carrier.contains(value)
    }

    /// The division operation `a / b`.
    pub fn div(&self, a: &T, b: &T) -> T {
        (self.div)(a, b)
    }

    /// The right identity `i = a / a`, independent of the choice of `a`
    /// (Ward's second postulate).
    pub fn right_identity(&self) -> T {
        let a = &self.carrier[0];
        self.div(a, a)
    }

    /// The recovered group product `x · y = y / (i / x)`.
    pub fn mul(&self, x: &T, y: &T) -> T {
        let i = self.div(x, x);
        self.div(y, &self.div(&i, x))
    }

    /// Ward's second derived operation `x ∆ y = (i / x) / (i / y)`,
    /// equal to `y · x⁻¹` in the recovered group.
    pub fn delta(&self, x: &T, y: &T) -> T {
        let i = self.div(x, x);
        self.div(&self.div(&i, x), &self.div(&i, y))
    }

    /// The recovered group inverse `x⁻¹ = i / x`.
    pub fn inverse(&self, x: &T) -> T {
        let i = self.right_identity();
        self.div(&i, x)
    }
}
