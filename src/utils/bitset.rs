use std::fmt::{self, Debug};

const BLOCK_BITS: usize = u64::BITS as usize;

/// A set of argument identifiers backed by machine words.
///
/// The capacity is fixed at creation time and is expected to be the number of
/// arguments of the framework the set refers to.
/// Two sets compare equal iff they have the same capacity and the same members.
///
/// # Example
///
/// ```
/// # use redukt::utils::BitSet;
/// let mut set = BitSet::new(8);
/// set.insert(1);
/// set.insert(5);
/// assert_eq!(2, set.len());
/// assert_eq!(vec![1, 5], set.iter().collect::<Vec<usize>>());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitSet {
    n_bits: usize,
    blocks: Vec<u64>,
}

impl BitSet {
    /// Builds an empty set with the given capacity.
    pub fn new(n_bits: usize) -> Self {
        BitSet {
            n_bits,
            blocks: vec![0; n_bits.div_ceil(BLOCK_BITS)],
        }
    }

    /// Builds a set containing all indices below the capacity.
    pub fn full(n_bits: usize) -> Self {
        let mut result = Self::new(n_bits);
        for b in result.blocks.iter_mut() {
            *b = u64::MAX;
        }
        result.mask_tail();
        result
    }

    /// Builds a set with the given capacity and members.
    ///
    /// # Panics
    ///
    /// Panics if a member is out of the capacity range.
    pub fn from_indices(n_bits: usize, indices: &[usize]) -> Self {
        let mut result = Self::new(n_bits);
        indices.iter().for_each(|i| result.insert(*i));
        result
    }

    fn mask_tail(&mut self) {
        let tail = self.n_bits % BLOCK_BITS;
        if tail != 0 {
            if let Some(last) = self.blocks.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }
    }

    /// Returns the capacity of the set.
    pub fn capacity(&self) -> usize {
        self.n_bits
    }

    /// Grows the capacity of the set, keeping its members.
    ///
    /// Shrinking is not supported; a smaller capacity leaves the set unchanged.
    pub fn grow(&mut self, n_bits: usize) {
        if n_bits > self.n_bits {
            self.n_bits = n_bits;
            self.blocks.resize(n_bits.div_ceil(BLOCK_BITS), 0);
        }
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns `true` iff the set has no member.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| *b == 0)
    }

    /// Adds an index to the set.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of the capacity range.
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.n_bits, "index out of capacity range");
        self.blocks[index / BLOCK_BITS] |= 1 << (index % BLOCK_BITS);
    }

    /// Removes an index from the set.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of the capacity range.
    pub fn remove(&mut self, index: usize) {
        assert!(index < self.n_bits, "index out of capacity range");
        self.blocks[index / BLOCK_BITS] &= !(1 << (index % BLOCK_BITS));
    }

    /// Returns `true` iff the index belongs to the set.
    pub fn contains(&self, index: usize) -> bool {
        index < self.n_bits && self.blocks[index / BLOCK_BITS] & (1 << (index % BLOCK_BITS)) != 0
    }

    /// Adds all the members of another set to this one.
    pub fn union_with(&mut self, other: &BitSet) {
        self.zip_blocks(other, |a, b| a | b);
    }

    /// Removes the members not belonging to another set.
    pub fn intersect_with(&mut self, other: &BitSet) {
        self.zip_blocks(other, |a, b| a & b);
    }

    /// Removes all the members of another set from this one.
    pub fn subtract(&mut self, other: &BitSet) {
        self.zip_blocks(other, |a, b| a & !b);
    }

    fn zip_blocks<F>(&mut self, other: &BitSet, f: F)
    where
        F: Fn(u64, u64) -> u64,
    {
        assert_eq!(self.n_bits, other.n_bits, "capacity mismatch");
        self.blocks
            .iter_mut()
            .zip(other.blocks.iter())
            .for_each(|(a, b)| *a = f(*a, *b));
    }

    /// Returns the union of this set and another one.
    pub fn union(&self, other: &BitSet) -> BitSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Returns the set of indices below the capacity that do not belong to this set.
    pub fn complement(&self) -> BitSet {
        let mut result = BitSet {
            n_bits: self.n_bits,
            blocks: self.blocks.iter().map(|b| !b).collect(),
        };
        result.mask_tail();
        result
    }

    /// Returns `true` iff every member of this set belongs to the other one.
    ///
    /// # Panics
    ///
    /// Panics if the two sets have different capacities.
    pub fn is_subset_of(&self, other: &BitSet) -> bool {
        assert_eq!(self.n_bits, other.n_bits, "capacity mismatch");
        self.blocks
            .iter()
            .zip(other.blocks.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Returns `true` iff the two sets have no common member.
    ///
    /// # Panics
    ///
    /// Panics if the two sets have different capacities.
    pub fn is_disjoint_with(&self, other: &BitSet) -> bool {
        assert_eq!(self.n_bits, other.n_bits, "capacity mismatch");
        self.blocks
            .iter()
            .zip(other.blocks.iter())
            .all(|(a, b)| a & b == 0)
    }

    /// Returns an iterator over the members, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().enumerate().flat_map(|(block_index, b)| {
            let base = block_index * BLOCK_BITS;
            let mut block = *b;
            std::iter::from_fn(move || {
                if block == 0 {
                    None
                } else {
                    let offset = block.trailing_zeros() as usize;
                    block &= block - 1;
                    Some(base + offset)
                }
            })
        })
    }

    /// Returns an iterator over all the subsets of this set, the empty set included.
    ///
    /// The subsets are produced in a canonical deterministic order: the members
    /// are mapped onto the bits of a counter (lowest member first) which is
    /// enumerated in increasing numeric order.
    /// The number of subsets is exponential in the number of members.
    pub fn iter_subsets(&self) -> SubsetIter {
        let members: Vec<usize> = self.iter().collect();
        let counter = vec![0; members.len().div_ceil(BLOCK_BITS).max(1)];
        SubsetIter {
            n_bits: self.n_bits,
            members,
            counter,
            done: false,
        }
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A lazy iterator over the subsets of a [`BitSet`].
///
/// Built by [`BitSet::iter_subsets`].
pub struct SubsetIter {
    n_bits: usize,
    members: Vec<usize>,
    counter: Vec<u64>,
    done: bool,
}

impl Iterator for SubsetIter {
    type Item = BitSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut subset = BitSet::new(self.n_bits);
        for (position, member) in self.members.iter().enumerate() {
            if self.counter[position / BLOCK_BITS] & (1 << (position % BLOCK_BITS)) != 0 {
                subset.insert(*member);
            }
        }
        self.increment();
        Some(subset)
    }
}

impl SubsetIter {
    fn increment(&mut self) {
        let mut carry = true;
        for block in self.counter.iter_mut() {
            if !carry {
                break;
            }
            let (incremented, overflowed) = block.overflowing_add(1);
            *block = incremented;
            carry = overflowed;
        }
        // the enumeration is over once the counter reaches 2^n_members
        let n_members = self.members.len();
        let wrapped = carry && self.counter.iter().all(|b| *b == 0);
        let tail_bits = n_members % BLOCK_BITS;
        let tail_overflow =
            tail_bits != 0 && self.counter[n_members / BLOCK_BITS] >> tail_bits != 0;
        if wrapped || tail_overflow || (n_members == 0 && self.counter[0] != 0) {
            self.done = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut set = BitSet::new(70);
        assert!(set.is_empty());
        set.insert(0);
        set.insert(69);
        assert!(set.contains(0));
        assert!(set.contains(69));
        assert!(!set.contains(1));
        assert_eq!(2, set.len());
        set.remove(0);
        assert!(!set.contains(0));
        assert_eq!(1, set.len());
    }

    #[test]
    #[should_panic(expected = "index out of capacity range")]
    fn test_insert_out_of_range() {
        let mut set = BitSet::new(4);
        set.insert(4);
    }

    #[test]
    fn test_full_and_complement() {
        let full = BitSet::full(66);
        assert_eq!(66, full.len());
        assert!(full.complement().is_empty());
        let set = BitSet::from_indices(66, &[0, 65]);
        let complement = set.complement();
        assert_eq!(64, complement.len());
        assert!(!complement.contains(0));
        assert!(!complement.contains(65));
        assert!(complement.contains(1));
    }

    #[test]
    fn test_set_operations() {
        let a = BitSet::from_indices(8, &[0, 1, 2]);
        let b = BitSet::from_indices(8, &[2, 3]);
        assert_eq!(BitSet::from_indices(8, &[0, 1, 2, 3]), a.union(&b));
        let mut c = a.clone();
        c.intersect_with(&b);
        assert_eq!(BitSet::from_indices(8, &[2]), c);
        let mut d = a.clone();
        d.subtract(&b);
        assert_eq!(BitSet::from_indices(8, &[0, 1]), d);
        assert!(c.is_subset_of(&a));
        assert!(!a.is_subset_of(&b));
        assert!(d.is_disjoint_with(&b));
        assert!(!a.is_disjoint_with(&b));
    }

    #[test]
    #[should_panic(expected = "capacity mismatch")]
    fn test_subset_of_capacity_mismatch() {
        let a = BitSet::from_indices(65, &[2, 64]);
        let b = BitSet::from_indices(64, &[2]);
        a.is_subset_of(&b);
    }

    #[test]
    #[should_panic(expected = "capacity mismatch")]
    fn test_disjoint_with_capacity_mismatch() {
        let a = BitSet::from_indices(65, &[64]);
        let b = BitSet::new(64);
        a.is_disjoint_with(&b);
    }

    #[test]
    fn test_iter_order() {
        let set = BitSet::from_indices(130, &[129, 0, 64, 7]);
        assert_eq!(vec![0, 7, 64, 129], set.iter().collect::<Vec<usize>>());
    }

    #[test]
    fn test_subsets_of_empty() {
        let set = BitSet::new(5);
        let subsets: Vec<BitSet> = set.iter_subsets().collect();
        assert_eq!(1, subsets.len());
        assert!(subsets[0].is_empty());
    }

    #[test]
    fn test_subsets_count_and_order() {
        let set = BitSet::from_indices(6, &[1, 3, 4]);
        let subsets: Vec<BitSet> = set.iter_subsets().collect();
        assert_eq!(8, subsets.len());
        assert!(subsets[0].is_empty());
        assert_eq!(BitSet::from_indices(6, &[1]), subsets[1]);
        assert_eq!(BitSet::from_indices(6, &[3]), subsets[2]);
        assert_eq!(BitSet::from_indices(6, &[1, 3]), subsets[3]);
        assert_eq!(BitSet::from_indices(6, &[1, 3, 4]), subsets[7]);
        assert!(subsets.iter().all(|s| s.is_subset_of(&set)));
    }
}
