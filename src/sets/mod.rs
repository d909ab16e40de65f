mod denseset;
mod hashset;

#[cfg(test)]
mod proptests;

pub use denseset::{DenseSet, DenseSetIterator};
pub use hashset::Set;

/// The set algebra shared by every set in the crate.
///
/// Binary operations borrow both operands and hand back a freshly owned set; only the
/// `_inplace` variants touch the receiver, and none of them ever touch the argument.
pub trait SetOps<T>: Clone {
    fn has(&self, value: &T) -> bool;
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn add(&mut self, value: T) -> &mut Self;
    fn remove(&mut self, value: &T) -> &mut Self;

    fn union(&self, other: &Self) -> Self {
        let mut s = self.clone();
        s.union_inplace(other);
        s
    }
    fn union_inplace(&mut self, other: &Self) -> &mut Self;

    fn intersection(&self, other: &Self) -> Self {
        let mut s = self.clone();
        s.intersection_inplace(other);
        s
    }
    fn intersection_inplace(&mut self, other: &Self) -> &mut Self;

    fn difference(&self, other: &Self) -> Self {
        let mut s = self.clone();
        s.difference_inplace(other);
        s
    }
    fn difference_inplace(&mut self, other: &Self) -> &mut Self;

    fn symmetric_difference(&self, other: &Self) -> Self {
        let mut s = self.clone();
        s.symmetric_difference_inplace(other);
        s
    }
    fn symmetric_difference_inplace(&mut self, other: &Self) -> &mut Self;

    fn is_subset(&self, other: &Self) -> bool;

    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    fn is_disjoint(&self, other: &Self) -> bool;
}
