//! This module contains the serialisation machinery: initial sets, the
//! transition system they induce, and the reasoner enumerating extensions as
//! serialisation sequences.

mod graph;
pub use graph::SerialisationGraph;

mod initial_sets;
pub use initial_sets::InitialSetKind;
pub use initial_sets::InitialSets;

mod reasoner;
pub use reasoner::SerialisedExtensionReasoner;

mod sequence;
pub use sequence::SerialisationSequence;

mod transition;
pub use transition::TransitionState;
