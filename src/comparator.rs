//! Ready-made comparators for [`TopK`](crate::TopK).
//!
//! A comparator is any `Fn(&T, &T) -> bool` returning whether the first
//! argument ranks strictly below the second. It must be a strict weak
//! ordering; the ranking is unspecified otherwise.

use std::cmp::Ordering;

/// Numeric ascending for integers, lexicographic ascending for strings.
pub fn ascending<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Keeps the smallest elements instead of the largest.
pub fn descending<T: PartialOrd>(a: &T, b: &T) -> bool {
    b < a
}

/// Ascending under [`f32::total_cmp`], so `NaN` ranks above `+inf`.
pub fn ascending_f32(a: &f32, b: &f32) -> bool {
    a.total_cmp(b).is_lt()
}

/// Ascending under [`f64::total_cmp`], so `NaN` ranks above `+inf`.
pub fn ascending_f64(a: &f64, b: &f64) -> bool {
    a.total_cmp(b).is_lt()
}

pub fn lexicographic<S: AsRef<str>>(a: &S, b: &S) -> bool {
    a.as_ref() < b.as_ref()
}

/// Ranks elements by a derived key.
pub fn by_key<T, K: PartialOrd>(f: impl Fn(&T) -> K) -> impl Fn(&T, &T) -> bool {
    move |a, b| f(a) < f(b)
}

pub fn reverse<T>(less: impl Fn(&T, &T) -> bool) -> impl Fn(&T, &T) -> bool {
    move |a, b| less(b, a)
}

/// Lifts a strict `less` into an [`Ordering`]. Incomparable pairs are `Equal`.
pub(crate) fn ordering<T>(less: &impl Fn(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert!(ascending(&5, &6));
        assert!(!ascending(&6, &5));
        assert!(!ascending(&2, &2));
        assert!(descending(&6, &5));
        assert!(ascending(&"apple", &"banana"));
        assert!(lexicographic(&String::from("a"), &String::from("b")));
        assert!(!lexicographic(&"b", &"a"));
    }

    #[test]
    fn floats_are_total() {
        assert!(ascending_f64(&1.0, &2.0));
        assert!(ascending_f64(&f64::INFINITY, &f64::NAN));
        assert!(!ascending_f64(&f64::NAN, &f64::NAN));
        assert!(ascending_f32(&-0.0, &0.0));
        assert!(!ascending_f32(&0.5, &-0.5));
    }

    #[test]
    fn adapters() {
        let by_len = by_key(|s: &&str| s.len());
        assert!(by_len(&"zz", &"aaa"));
        assert!(!by_len(&"aaa", &"bbb"));
        let rev = reverse(ascending::<i32>);
        assert!(rev(&3, &1));
        assert_eq!(ordering(&ascending::<i32>, &1, &2), Ordering::Less);
        assert_eq!(ordering(&ascending::<i32>, &2, &1), Ordering::Greater);
        assert_eq!(ordering(&ascending::<i32>, &2, &2), Ordering::Equal);
    }
}
