use crate::prelude::SetOps;
use crate::utils::prelude::*;

type Word = u64;
const WORD_SIZE: usize = Word::BITS as usize;

/// A set of small unsigned integers stored as a growable bit vector.
///
/// Storage grows to fit the largest member ever added and is never shrunk, so two sets with
/// the same members may carry different numbers of trailing empty words. Values from untrusted
/// input should go through [`DenseSet::try_add`], which refuses anything above
/// [`DenseSet::MAX_VALUE`] instead of attempting the allocation.
#[derive(Clone, Debug, Default)]
pub struct DenseSet(Vec<Word>);

impl DenseSet {
    /// The largest value `try_add` accepts; a set holding it occupies 2MiB.
    pub const MAX_VALUE: usize = (1 << 24) - 1;

    #[inline]
    fn _index(value: usize) -> (usize, usize) {
        (value / WORD_SIZE, value % WORD_SIZE)
    }

    /// The word at the given offset, treating missing words as empty.
    #[inline]
    fn _word(&self, i: usize) -> Word {
        self.0.get(i).copied().unwrap_or(0)
    }

    fn _grow(&mut self, words: usize) {
        if self.0.len() < words {
            log::trace!("growing dense set storage from {} to {} words", self.0.len(), words);
            self.0.resize(words, 0);
        }
    }

    fn _try_grow(&mut self, words: usize) -> Result<()> {
        if self.0.len() < words {
            self.0
                .try_reserve_exact(words - self.0.len())
                .with_context(|| format!("could not grow dense set storage to {words} words"))?;
            self._grow(words);
        }
        Ok(())
    }

    /// Constructs an empty set.
    pub fn new() -> DenseSet {
        DenseSet::default()
    }

    /// Constructs an empty set that can hold every value below `universe` without growing.
    pub fn with_universe(universe: usize) -> DenseSet {
        DenseSet(vec![0; universe.div_ceil(WORD_SIZE)])
    }

    pub fn clear(&mut self) -> &mut Self {
        self.0.iter_mut().for_each(|w| *w = 0);
        self
    }

    /// Inserts a value, failing instead of growing past `MAX_VALUE` or past what the allocator
    /// can provide.
    pub fn try_add(&mut self, value: usize) -> Result<&mut Self> {
        if value > DenseSet::MAX_VALUE {
            return Err(anyhow!("{value} exceeds the dense set limit of {}", DenseSet::MAX_VALUE));
        }
        let (ia, ib) = DenseSet::_index(value);
        self._try_grow(ia + 1)?;
        self.0[ia] |= (1 as Word) << ib;
        Ok(self)
    }

    /// Iterates over members in ascending order.
    pub fn iter(&self) -> DenseSetIterator<'_> {
        DenseSetIterator::new(&self.0)
    }
}

impl SetOps<usize> for DenseSet {
    fn has(&self, value: &usize) -> bool {
        let (ia, ib) = DenseSet::_index(*value);
        (self._word(ia) >> ib) & 1 == 1
    }

    fn size(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn add(&mut self, value: usize) -> &mut Self {
        let (ia, ib) = DenseSet::_index(value);
        self._grow(ia + 1);
        self.0[ia] |= (1 as Word) << ib;
        self
    }

    fn remove(&mut self, value: &usize) -> &mut Self {
        let (ia, ib) = DenseSet::_index(*value);
        if let Some(w) = self.0.get_mut(ia) {
            *w &= !((1 as Word) << ib);
        }
        self
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        self._grow(other.0.len());
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l |= r;
        });
        self
    }

    fn intersection_inplace(&mut self, other: &Self) -> &mut Self {
        self.0.iter_mut().enumerate().for_each(|(i, l)| {
            *l &= other._word(i);
        });
        self
    }

    fn difference_inplace(&mut self, other: &Self) -> &mut Self {
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l &= !r;
        });
        self
    }

    fn symmetric_difference_inplace(&mut self, other: &Self) -> &mut Self {
        self._grow(other.0.len());
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l ^= r;
        });
        self
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.0.iter().enumerate().all(|(i, l)| l & !other._word(i) == 0)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(l, r)| l & r == 0)
    }
}

impl PartialEq for DenseSet {
    fn eq(&self, other: &Self) -> bool {
        let words = self.0.len().max(other.0.len());
        (0..words).all(|i| self._word(i) == other._word(i))
    }
}

impl Eq for DenseSet {}

impl<'a> FromIterator<&'a usize> for DenseSet {
    fn from_iter<T: IntoIterator<Item = &'a usize>>(iter: T) -> Self {
        let mut s = DenseSet::default();
        iter.into_iter().for_each(|&i| {
            s.add(i);
        });
        s
    }
}

impl FromIterator<usize> for DenseSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut s = DenseSet::default();
        iter.into_iter().for_each(|i| {
            s.add(i);
        });
        s
    }
}

impl Extend<usize> for DenseSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        iter.into_iter().for_each(|i| {
            self.add(i);
        });
    }
}

pub struct DenseSetIterator<'a> {
    data: &'a [Word],
    mask: Word,
    current_word: usize,
}

impl<'a> DenseSetIterator<'a> {
    pub fn new(data: &'a [Word]) -> DenseSetIterator<'a> {
        DenseSetIterator { data, mask: Word::MAX, current_word: 0 }
    }
}

impl Iterator for DenseSetIterator<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word >= self.data.len() {
                return None;
            }

            let subject = self.data[self.current_word] & self.mask;
            let tz = subject.trailing_zeros() as usize;

            if tz == WORD_SIZE {
                self.current_word += 1;
                self.mask = Word::MAX;
                continue;
            } else {
                let value = self.current_word * WORD_SIZE + tz;
                self.mask ^= (1 as Word) << tz; // knock the found bit out of the next scan
                return Some(value);
            }
        }
    }
}

impl<'a> IntoIterator for &'a DenseSet {
    type IntoIter = DenseSetIterator<'a>;
    type Item = usize;
    fn into_iter(self) -> Self::IntoIter {
        DenseSetIterator::new(&self.0)
    }
}
