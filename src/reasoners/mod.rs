//! This module contains the reasoners dedicated to the base acceptability
//! semantics, and the acceptability predicates they rely on.

mod grounded_reasoner;
pub use grounded_reasoner::grounded_extension;
pub use grounded_reasoner::GroundedReasoner;

mod naive_reasoner;
pub use naive_reasoner::NaiveExtensionReasoner;

mod predicates;
pub use predicates::characteristic_function;
pub use predicates::defends;
pub use predicates::is_admissible;
pub use predicates::is_complete;
pub use predicates::is_conflict_free;
pub use predicates::is_preferred;
pub use predicates::is_stable;
pub(crate) use predicates::{has_unattacked_argument, is_admissible_in};

mod specs;
pub use specs::require_extension;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionSetComputer;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;
