use proptest::prelude::*;

use grupp::{axioms, Exponent, FreeGroup, Group, Monoid, PowerError, Word};

const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

/// Random words over the first `rank` symbols, built from short raw term
/// sequences (reduction happens in `Word::from_terms`).
fn arb_word(rank: usize) -> impl Strategy<Value = Word<char>> {
    prop::collection::vec((0..rank, -3i64..=3), 0..8)
        .prop_map(|terms| Word::from_terms(terms.into_iter().map(|(i, e)| (SYMBOLS[i], e))))
}

/// The canonical-form invariant: no zero exponents, no two adjacent terms
/// over the same generator.
fn assert_reduced(word: &Word<char>) {
    for (_, e) in word.terms() {
        assert_ne!(*e, 0, "zero exponent in {}", word);
    }
    for pair in word.terms().windows(2) {
        assert_ne!(pair[0].0, pair[1].0, "adjacent terms share a generator in {}", word);
    }
}

// ===== Canonical form =====

proptest! {
    #[test]
    fn construction_produces_reduced_words(w in arb_word(3)) {
        assert_reduced(&w);
    }
}

proptest! {
    #[test]
    fn multiplication_preserves_reduction(a in arb_word(3), b in arb_word(3)) {
        assert_reduced(&a.op(&b));
    }
}

proptest! {
    #[test]
    fn inversion_preserves_reduction(a in arb_word(2)) {
        assert_reduced(&a.inverse());
    }
}

// ===== Group laws =====

proptest! {
    #[test]
    fn associative(a in arb_word(3), b in arb_word(3), c in arb_word(3)) {
        prop_assert_eq!(a.op(&b).op(&c), a.op(&b.op(&c)));
    }
}

proptest! {
    #[test]
    fn identity_laws(a in arb_word(3)) {
        let e: Word<char> = Word::identity();
        prop_assert_eq!(&e.op(&a), &a);
        prop_assert_eq!(&a.op(&e), &a);
    }
}

proptest! {
    #[test]
    fn inverse_laws(a in arb_word(3)) {
        prop_assert!(a.op(&a.inverse()).is_identity());
        prop_assert!(a.inverse().op(&a).is_identity());
    }
}

proptest! {
    #[test]
    fn double_inverse(a in arb_word(3)) {
        prop_assert_eq!(a.inverse().inverse(), a);
    }
}

proptest! {
    #[test]
    fn product_inverse_reverses(a in arb_word(2), b in arb_word(2)) {
        prop_assert_eq!(a.op(&b).inverse(), b.inverse().op(&a.inverse()));
    }
}

// ===== Powers =====

proptest! {
    #[test]
    fn pow_matches_repeated_op(a in arb_word(2), k in 0u64..8) {
        let mut expected = Word::identity();
        for _ in 0..k {
            expected = expected.op(&a);
        }
        prop_assert_eq!(a.pow(k), expected);
    }
}

proptest! {
    #[test]
    fn pow_signed_negative_is_inverse_of_pow(a in arb_word(2), k in 0i64..8) {
        prop_assert_eq!(a.pow_signed(-k), a.pow(k as u64).inverse());
    }
}

proptest! {
    #[test]
    fn rep_rejects_roots(a in arb_word(2), k in 2u64..10) {
        let rejected = matches!(
            a.rep(Exponent::Reciprocal(k)),
            Err(PowerError::UnsupportedExponent { .. })
        );
        prop_assert!(rejected);
    }
}

// ===== Rank-1 free groups are infinite cyclic, hence abelian =====

proptest! {
    #[test]
    fn rank_one_commutes(a in arb_word(1), b in arb_word(1)) {
        prop_assert_eq!(a.op(&b), b.op(&a));
    }
}

// ===== Exhaustive checks over short generated subsets =====

/// All products of up to three generator-or-inverse factors.
fn generated_subset(fg: &FreeGroup<char>) -> Vec<Word<char>> {
    let mut factors: Vec<Word<char>> = fg.generators().collect();
    let inverses: Vec<Word<char>> = factors.iter().map(|g| g.inverse()).collect();
    factors.extend(inverses);

    let mut elems = vec![fg.identity()];
    for a in &factors {
        elems.push(a.clone());
        for b in &factors {
            elems.push(a.op(b));
            for c in &factors {
                elems.push(a.op(b).op(c));
            }
        }
    }
    elems
}

#[test]
fn axioms_over_generated_subsets() {
    for rank in 1..=3 {
        let fg = FreeGroup::new(SYMBOLS[..rank].iter().copied());
        let elems = generated_subset(&fg);
        let e = fg.identity();
        axioms::is_identity(&e, |a: &Word<char>, b: &Word<char>| a.op(b), &elems);
        axioms::has_inverses(
            &e,
            |a: &Word<char>, b: &Word<char>| a.op(b),
            |a: &Word<char>| a.inverse(),
            &elems,
        );
        for w in &elems {
            assert_reduced(w);
        }
    }
}

#[test]
fn associativity_over_rank_two_subset() {
    // Cubic in the subset size, so only the rank-2 subset is checked here;
    // the proptest above covers rank 3.
    let fg = FreeGroup::new(['a', 'b']);
    let mut elems = generated_subset(&fg);
    elems.truncate(40);
    axioms::is_associative(|a: &Word<char>, b: &Word<char>| a.op(b), &elems);
}

// ===== Concrete scenario =====

#[test]
fn conjugate_product_collapses() {
    // (a b a⁻¹)(a b⁻¹ a⁻¹) → a b b⁻¹ a⁻¹ → a a⁻¹ → 1
    let fg = FreeGroup::new(['a', 'b']);
    let gens: Vec<Word<char>> = fg.generators().collect();
    let (a, b) = (&gens[0], &gens[1]);

    let left = a.op(b).op(&a.inverse());
    let right = a.op(&b.inverse()).op(&a.inverse());
    assert!(left.op(&right).is_identity());
}
