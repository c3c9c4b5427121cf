//! Exhaustive axiom checks over small finite element sets.
//!
//! Each check panics with a diagnostic naming the first violating
//! instance. Intended for test suites that enumerate every element of a
//! small structure; cubic in the element count, so keep the sets small.

use core::fmt::Debug;

/// Assert `f(f(a, b), c) == f(a, f(b, c))` for all triples.
pub fn is_associative<T, F>(f: F, elements: &[T])
where
    T: PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    for a in elements {
        for b in elements {
            for c in elements {
                let left = f(&f(a, b), c);
                let right = f(a, &f(b, c));
                assert!(
                    left == right,
                    "f(f({:?}, {:?}), {:?}) == {:?} != {:?} == f({:?}, f({:?}, {:?}))",
                    a, b, c, left, right, a, b, c
                );
            }
        }
    }
}

/// Assert `f(a, b) == f(b, a)` for all pairs.
pub fn is_commutative<T, F>(f: F, elements: &[T])
where
    T: PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    for a in elements {
        for b in elements {
            let left = f(a, b);
            let right = f(b, a);
            assert!(
                left == right,
                "f({:?}, {:?}) == {:?} != {:?} == f({:?}, {:?})",
                a, b, left, right, b, a
            );
        }
    }
}

/// Assert `f(e, a) == a` for all elements.
pub fn is_left_identity<T, F>(e: &T, f: F, elements: &[T])
where
    T: PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    for a in elements {
        let result = f(e, a);
        assert!(
            result == *a,
            "f({:?}, {:?}) == {:?} != {:?}",
            e, a, result, a
        );
    }
}

/// Assert `f(a, e) == a` for all elements.
pub fn is_right_identity<T, F>(e: &T, f: F, elements: &[T])
where
    T: PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    for a in elements {
        let result = f(a, e);
        assert!(
            result == *a,
            "f({:?}, {:?}) == {:?} != {:?}",
            a, e, result, a
        );
    }
}

/// Assert `e` is a two-sided identity.
pub fn is_identity<T, F>(e: &T, f: F, elements: &[T])
where
    T: PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    is_left_identity(e, &f, elements);
    is_right_identity(e, &f, elements);
}

/// Assert `f(a, inv(a)) == e == f(inv(a), a)` for all elements.
pub fn has_inverses<T, F, I>(e: &T, f: F, inv: I, elements: &[T])
where
    T: PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
    for a in elements {
        let b = inv(a);
        assert!(
            f(a, &b) == *e,
            "f({:?}, {:?}) != {:?}",
            a, b, e
        );
        assert!(
            f(&b, a) == *e,
            "f({:?}, {:?}) != {:?}",
            b, a, e
        );
    }
}
