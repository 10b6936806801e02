//! Miscellaneous components used in the library.

mod bitset;
pub use bitset::BitSet;
pub use bitset::SubsetIter;
