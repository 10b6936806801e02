//! A library for reasoning in abstract argumentation, built around the
//! serialisability of semantics.
//!
//! The entry point is the [`AAFramework`](aa::AAFramework) type, a directed
//! attack graph over labelled arguments.
//! The [`reasoners`] module computes the extensions of the classical Dung
//! semantics, while the [`serialisation`] module renders a semantics as a
//! transition system over initial sets and enumerates its extensions as
//! serialisation sequences.
//! The [`equivalence`] module checks strong equivalence through kernels, and
//! the [`divisions`] module splits frameworks along mandatory and forbidden
//! arguments.
//!
//! # Example
//!
//! ```
//! # use redukt::aa::{AAFramework, ArgumentSet, Semantics};
//! # use redukt::reasoners::ExtensionSetComputer;
//! # use redukt::serialisation::SerialisedExtensionReasoner;
//! let labels = vec!["a", "b", "c"];
//! let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
//! af.new_attack(&"a", &"b").unwrap();
//! af.new_attack(&"b", &"c").unwrap();
//! let mut reasoner = SerialisedExtensionReasoner::new(&af, Semantics::GR).unwrap();
//! let extensions = reasoner.compute_extensions();
//! assert_eq!(1, extensions.len());
//! assert_eq!("{a,c}", extensions[0].format(&af));
//! ```

#![warn(missing_docs)]

pub mod aa;
pub mod divisions;
pub mod equivalence;

mod error;
pub use error::Error;
pub use error::Result;

pub mod reasoners;
pub mod serialisation;
pub mod utils;
