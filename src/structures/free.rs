use core::fmt;
use core::ops::Mul;

use crate::algebra::group::Group;
use crate::algebra::monoid::Monoid;

/// A reduced word in a free group: a sequence of `(generator, exponent)`
/// terms with every exponent nonzero and no two adjacent terms sharing a
/// generator. The empty word is the identity.
///
/// The representation is canonical, so `Eq` and `Hash` are plain
/// structural comparisons: two words are equal as group elements iff their
/// term sequences are equal term-by-term. Operations never mutate a word
/// in place; multiplication builds a fresh sequence.
///
/// # Example
///
/// ```
/// use grupp::{Group, Monoid, Word};
///
/// let a = Word::generator('a');
/// let b = Word::generator('b');
///
/// // a b a⁻¹ · a b⁻¹ a⁻¹ collapses completely.
/// let left = a.op(&b).op(&a.inverse());
/// let right = a.op(&b.inverse()).op(&a.inverse());
/// assert!(left.op(&right).is_identity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word<T> {
    terms: Vec<(T, i64)>,
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Word<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.terms.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Word<T>
where
    T: Clone + Eq + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Arbitrary term sequences are re-reduced, so deserialization can
        // never produce a non-canonical word.
        let terms = Vec::<(T, i64)>::deserialize(deserializer)?;
        Ok(Word::from_terms(terms))
    }
}

impl<T: Clone + Eq> Word<T> {
    /// The empty word.
    pub fn identity() -> Self {
        Self { terms: Vec::new() }
    }

    /// The length-one word `symbol^1`.
    pub fn generator(symbol: T) -> Self {
        Self {
            terms: vec![(symbol, 1)],
        }
    }

    /// Build a word from an arbitrary term sequence, reducing as it goes.
    ///
    /// Zero exponents are dropped and adjacent terms over the same
    /// generator are merged or cancelled, so the result is always in
    /// canonical form.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let mut acc = Self::identity();
        for (g, e) in terms {
            if e == 0 {
                continue;
            }
            acc = acc.op(&Self { terms: vec![(g, e)] });
        }
        acc
    }

    /// The backing term sequence, in canonical reduced form.
    pub fn terms(&self) -> &[(T, i64)] {
        &self.terms
    }

    /// Number of terms (not the total generator count).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// `true` for the identity element.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `true` for the identity element.
    pub fn is_identity(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<T: Clone + Eq> Monoid for Word<T> {
    fn identity() -> Self {
        Word::identity()
    }

    /// Multiplication with boundary cancellation.
    ///
    /// Scans inward from the seam: the trailing term of the remaining
    /// left prefix against the leading term of the remaining right suffix.
    /// Differing generators end the scan; matching generators either merge
    /// (nonzero exponent sum) or cancel outright and the scan continues,
    /// so cancellation cascades across as many as `min(|a|, |b|)` terms.
    /// Both inputs being reduced makes the output reduced.
    fn op(&self, rhs: &Self) -> Self {
        let a = &self.terms;
        let b = &rhs.terms;
        if a.is_empty() {
            return rhs.clone();
        }
        if b.is_empty() {
            return self.clone();
        }

        let mut i = a.len();
        let mut j = 0;
        while i > 0 && j < b.len() {
            let (x, m) = &a[i - 1];
            let (y, n) = &b[j];
            if x != y {
                break;
            }
            let k = m + n;
            if k != 0 {
                let mut terms = Vec::with_capacity(i + b.len() - j);
                terms.extend_from_slice(&a[..i - 1]);
                terms.push((x.clone(), k));
                terms.extend_from_slice(&b[j + 1..]);
                return Word { terms };
            }
            i -= 1;
            j += 1;
        }

        let mut terms = Vec::with_capacity(i + b.len() - j);
        terms.extend_from_slice(&a[..i]);
        terms.extend_from_slice(&b[j..]);
        Word { terms }
    }
}

impl<T: Clone + Eq> Group for Word<T> {
    /// Reverse the word and negate each exponent. A reduced input stays
    /// reduced: reversal cannot create new adjacent matches.
    fn inverse(&self) -> Self {
        Word {
            terms: self
                .terms
                .iter()
                .rev()
                .map(|(g, e)| (g.clone(), -e))
                .collect(),
        }
    }
}

impl<T: Clone + Eq> Mul for Word<T> {
    type Output = Word<T>;

    fn mul(self, rhs: Word<T>) -> Word<T> {
        self.op(&rhs)
    }
}

impl<T: Clone + Eq> Mul for &Word<T> {
    type Output = Word<T>;

    fn mul(self, rhs: &Word<T>) -> Word<T> {
        self.op(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Word<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("1");
        }
        for (idx, (g, e)) in self.terms.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            if *e == 1 {
                write!(f, "{}", g)?;
            } else {
                write!(f, "{}^{}", g, e)?;
            }
        }
        Ok(())
    }
}

/// The free group on a finite set of generator symbols.
///
/// Holds the symbols and hands out length-one [`Word`]s; all the algebra
/// lives on the words themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeGroup<T> {
    symbols: Vec<T>,
}

impl<T: Clone + Eq> FreeGroup<T> {
    /// Free group on the given generator symbols.
    ///
    /// # Panics
    ///
    /// Panics when the symbol list is empty or contains duplicates.
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let symbols: Vec<T> = symbols.into_iter().collect();
        assert!(!symbols.is_empty(), "a free group needs at least one generator");
        for (i, s) in symbols.iter().enumerate() {
            assert!(!symbols[..i].contains(s), "duplicate generator symbol");
        }
        Self { symbols }
    }

    /// Number of generators.
    pub fn rank(&self) -> usize {
        self.symbols.len()
    }

    /// A free group of positive rank is infinite, so there is no finite
    /// order to report.
    pub fn order(&self) -> Option<u64> {
        None
    }

    /// The generator symbols, in construction order.
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// The empty word.
    pub fn identity(&self) -> Word<T> {
        Word::identity()
    }

    /// Length-one words for each generator, in construction order.
    pub fn generators(&self) -> impl Iterator<Item = Word<T>> + '_ {
        self.symbols.iter().cloned().map(Word::generator)
    }
}
