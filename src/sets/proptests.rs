use proptest::prelude::*;

use super::{DenseSet, Set, SetOps};

// Small element domain so that generated sets overlap often.
fn values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..48, 0..32)
}

fn set() -> impl Strategy<Value = Set<u8>> {
    values().prop_map(Set::from_values)
}

fn to_dense(set: &Set<u8>) -> DenseSet {
    set.iter().map(|&v| v as usize).collect()
}

fn to_wide(set: &Set<u8>) -> Set<usize> {
    set.iter().map(|&v| v as usize).collect()
}

fn from_dense(set: &DenseSet) -> Set<usize> {
    set.iter().collect()
}

proptest! {
    #[test]
    fn has_after_add(mut a in set(), x in any::<u8>()) {
        a.add(x);
        prop_assert!(a.has(&x));
    }

    #[test]
    fn not_has_after_remove(mut a in set(), x in any::<u8>()) {
        a.remove(&x);
        prop_assert!(!a.has(&x));
    }

    #[test]
    fn add_and_remove_are_idempotent(mut a in set(), x in any::<u8>()) {
        a.add(x);
        let size = a.size();
        a.add(x);
        prop_assert_eq!(a.size(), size);

        a.remove(&x);
        let size = a.size();
        a.remove(&x);
        prop_assert_eq!(a.size(), size);
    }

    #[test]
    fn from_values_counts_distinct(v in values()) {
        let distinct = v.iter().collect::<std::collections::BTreeSet<_>>().len();
        prop_assert_eq!(Set::from_values(v).size(), distinct);
    }

    // Set operations are commutative
    #[test]
    fn union_commutative(a in set(), b in set()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn intersection_commutative(a in set(), b in set()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn symmetric_difference_commutative(a in set(), b in set()) {
        prop_assert_eq!(a.symmetric_difference(&b), b.symmetric_difference(&a));
    }

    // Set operations are associative
    #[test]
    fn union_associative(a in set(), b in set(), c in set()) {
        prop_assert_eq!(a.union(&b.union(&c)), a.union(&b).union(&c));
    }

    #[test]
    fn intersection_associative(a in set(), b in set(), c in set()) {
        prop_assert_eq!(a.intersection(&b.intersection(&c)), a.intersection(&b).intersection(&c));
    }

    // Identity elements
    #[test]
    fn empty_identities(a in set()) {
        prop_assert_eq!(a.union(&Set::new()), a.clone());
        prop_assert!(a.intersection(&Set::new()).is_empty());
        prop_assert_eq!(a.difference(&Set::new()), a.clone());
        prop_assert!(Set::new().difference(&a).is_empty());
    }

    #[test]
    fn symmetric_difference_is_union_of_differences(a in set(), b in set()) {
        prop_assert_eq!(a.symmetric_difference(&b), a.difference(&b).union(&b.difference(&a)));
    }

    #[test]
    fn cardinality_bounds(a in set(), b in set()) {
        let union = a.union(&b);
        prop_assert!(union.size() <= a.size() + b.size());
        prop_assert_eq!(union.size() == a.size() + b.size(), a.is_disjoint(&b));
        prop_assert!(a.intersection(&b).size() <= a.size().min(b.size()));
        prop_assert!(a.difference(&b).size() <= a.size());
    }

    #[test]
    fn membership_predicates(a in set(), b in set(), x in 0u8..48) {
        prop_assert_eq!(a.union(&b).has(&x), a.has(&x) || b.has(&x));
        prop_assert_eq!(a.intersection(&b).has(&x), a.has(&x) && b.has(&x));
        prop_assert_eq!(a.difference(&b).has(&x), a.has(&x) && !b.has(&x));
        prop_assert_eq!(a.symmetric_difference(&b).has(&x), a.has(&x) != b.has(&x));
    }

    #[test]
    fn operands_are_not_mutated(a in set(), b in set()) {
        let (before_a, before_b) = (a.clone(), b.clone());
        let _ = (a.union(&b), a.intersection(&b), a.difference(&b), a.symmetric_difference(&b));
        prop_assert_eq!(a.size(), before_a.size());
        prop_assert_eq!(b.size(), before_b.size());
        prop_assert_eq!(a, before_a);
        prop_assert_eq!(b, before_b);
    }

    #[test]
    fn inplace_matches_allocating(a in set(), b in set()) {
        prop_assert_eq!(a.clone().union_inplace(&b).clone(), a.union(&b));
        prop_assert_eq!(a.clone().intersection_inplace(&b).clone(), a.intersection(&b));
        prop_assert_eq!(a.clone().difference_inplace(&b).clone(), a.difference(&b));
        prop_assert_eq!(a.clone().symmetric_difference_inplace(&b).clone(), a.symmetric_difference(&b));
    }

    #[test]
    fn operators_match_methods(a in set(), b in set()) {
        prop_assert_eq!(&a | &b, a.union(&b));
        prop_assert_eq!(&a & &b, a.intersection(&b));
        prop_assert_eq!(&a - &b, a.difference(&b));
        prop_assert_eq!(&a ^ &b, a.symmetric_difference(&b));
    }

    #[test]
    fn subset_relations(a in set(), b in set()) {
        prop_assert!(a.intersection(&b).is_subset(&a));
        prop_assert!(a.union(&b).is_superset(&b));
        prop_assert!(a.difference(&b).is_disjoint(&b));
        prop_assert_eq!(a.is_subset(&b), a.difference(&b).is_empty());
    }

    #[test]
    fn dense_agrees_with_hashed(a in set(), b in set()) {
        let (da, db) = (to_dense(&a), to_dense(&b));
        let (wa, wb) = (to_wide(&a), to_wide(&b));

        prop_assert_eq!(da.size(), a.size());
        prop_assert_eq!(from_dense(&da.union(&db)), wa.union(&wb));
        prop_assert_eq!(from_dense(&da.intersection(&db)), wa.intersection(&wb));
        prop_assert_eq!(from_dense(&da.difference(&db)), wa.difference(&wb));
        prop_assert_eq!(from_dense(&da.symmetric_difference(&db)), wa.symmetric_difference(&wb));
        prop_assert_eq!(da.is_subset(&db), wa.is_subset(&wb));
        prop_assert_eq!(da.is_disjoint(&db), wa.is_disjoint(&wb));
    }

    #[test]
    fn generic_over_set_ops(a in set(), b in set()) {
        fn check<S: SetOps<T> + PartialEq + std::fmt::Debug, T>(a: &S, b: &S) -> std::result::Result<(), TestCaseError> {
            prop_assert_eq!(a.symmetric_difference(b), a.union(b).difference(&a.intersection(b)));
            prop_assert_eq!(a.is_superset(b), b.is_subset(a));
            Ok(())
        }
        check::<_, u8>(&a, &b)?;
        check::<_, usize>(&to_dense(&a), &to_dense(&b))?;
    }
}
