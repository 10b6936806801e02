//! This module contains the equivalence kernels and the strong equivalence
//! checker built on top of them.

mod kernels;
pub use kernels::EquivalenceKernel;

mod strong_equivalence;
pub use strong_equivalence::are_strongly_equivalent;
