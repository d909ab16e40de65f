use std::borrow::Borrow;
use std::collections::hash_set;

use crate::prelude::*;

/// An unordered collection of distinct values, backed by a hash table.
///
/// Membership is decided by the element's own `Eq` and `Hash`; iteration order is unspecified
/// and may change between mutations.
#[derive(Clone, Debug)]
pub struct Set<T> {
    members: HashSet<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set { members: HashSet::new() }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Constructs an empty set.
    pub fn new() -> Set<T> {
        Set::default()
    }

    /// Constructs an empty set with room for at least `capacity` members.
    pub fn with_capacity(capacity: usize) -> Set<T> {
        Set { members: HashSet::with_capacity(capacity) }
    }

    /// Constructs a set from a sequence of values; repeated values collapse into one member.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Set<T> {
        values.into_iter().collect()
    }

    /// Inserts a value. Adding a value that is already a member changes nothing.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.members.insert(value);
        self
    }

    /// Whether or not the value is currently a member.
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(value)
    }

    /// Removes a value if it is a member; removing an absent value is a no-op.
    pub fn remove<Q>(&mut self, value: &Q) -> &mut Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.remove(value);
        self
    }

    /// The number of distinct members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.members.clear();
        self
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.members.iter()
    }

    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.size() <= other.size() && self.iter().all(|v| other.has(v))
    }

    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        let (smaller, larger) = Set::by_size(self, other);
        !smaller.iter().any(|v| larger.has(v))
    }

    pub fn intersection_inplace(&mut self, other: &Set<T>) -> &mut Self {
        self.members.retain(|v| other.has(v));
        self
    }

    pub fn difference_inplace(&mut self, other: &Set<T>) -> &mut Self {
        if other.size() < self.size() {
            other.iter().for_each(|v| {
                self.members.remove(v);
            });
        } else {
            self.members.retain(|v| !other.has(v));
        }
        self
    }

    /// Orders two sets as (smaller, larger) so that scans run over the cheaper side.
    #[inline]
    fn by_size<'a>(lhs: &'a Set<T>, rhs: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
        if lhs.size() <= rhs.size() { (lhs, rhs) } else { (rhs, lhs) }
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Every value that is a member of either set.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let (smaller, larger) = Set::by_size(self, other);
        let mut s = larger.clone();
        s.members.extend(smaller.iter().cloned());
        s
    }

    pub fn union_inplace(&mut self, other: &Set<T>) -> &mut Self {
        self.members.extend(other.iter().cloned());
        self
    }

    /// Every value that is a member of both sets.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let (smaller, larger) = Set::by_size(self, other);
        smaller.iter().filter(|v| larger.has(*v)).cloned().collect()
    }

    /// Every member of this set that is not a member of the other.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.iter().filter(|v| !other.has(*v)).cloned().collect()
    }

    /// Every value that is a member of exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        let mut s = self.difference(other);
        s.members.extend(other.iter().filter(|v| !self.has(*v)).cloned());
        s
    }

    pub fn symmetric_difference_inplace(&mut self, other: &Set<T>) -> &mut Self {
        other.iter().for_each(|v| {
            if !self.members.remove(v) {
                self.members.insert(v.clone());
            }
        });
        self
    }
}

impl<T: Eq + Hash + Clone> SetOps<T> for Set<T> {
    fn has(&self, value: &T) -> bool {
        Set::has(self, value)
    }

    fn size(&self) -> usize {
        Set::size(self)
    }

    fn is_empty(&self) -> bool {
        Set::is_empty(self)
    }

    fn add(&mut self, value: T) -> &mut Self {
        Set::add(self, value)
    }

    fn remove(&mut self, value: &T) -> &mut Self {
        Set::remove(self, value)
    }

    fn union(&self, other: &Self) -> Self {
        Set::union(self, other)
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        Set::union_inplace(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Set::intersection(self, other)
    }

    fn intersection_inplace(&mut self, other: &Self) -> &mut Self {
        Set::intersection_inplace(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        Set::difference(self, other)
    }

    fn difference_inplace(&mut self, other: &Self) -> &mut Self {
        Set::difference_inplace(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        Set::symmetric_difference(self, other)
    }

    fn symmetric_difference_inplace(&mut self, other: &Self) -> &mut Self {
        Set::symmetric_difference_inplace(self, other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        Set::is_subset(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Set::is_disjoint(self, other)
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.is_subset(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set { members: HashSet::from_iter(iter) }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        Set::from_values(values)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        Set::from_values(values)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type IntoIter = hash_set::IntoIter<T>;
    type Item = T;
    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type IntoIter = hash_set::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// &A op &B

impl<T: Eq + Hash + Clone> std::ops::BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn bitor(self, rhs: &Set<T>) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Eq + Hash + Clone> std::ops::BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn bitand(self, rhs: &Set<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone> std::ops::Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn sub(self, rhs: &Set<T>) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Eq + Hash + Clone> std::ops::BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn bitxor(self, rhs: &Set<T>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}
