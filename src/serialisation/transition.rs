use crate::aa::{AAFramework, Extension, LabelType};
use crate::utils::BitSet;

/// A state of the serialisation process.
///
/// A state pairs the set of arguments still standing in the residual
/// framework with the extension constructed so far.
/// The residual framework is never materialized: the state keeps a mask over
/// the arguments of the root framework and the predicates are evaluated
/// through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionState {
    alive: BitSet,
    constructed: Extension,
}

impl TransitionState {
    /// Builds the initial state of a framework, in which all the arguments are
    /// standing and nothing has been constructed yet.
    pub fn initial<T>(af: &AAFramework<T>) -> Self
    where
        T: LabelType,
    {
        TransitionState {
            alive: af.all_arguments_mask(),
            constructed: Extension::new(af.n_arguments()),
        }
    }

    /// Applies a transition: the chosen set joins the constructed extension
    /// while it and the arguments it attacks leave the residual framework.
    pub fn transit<T>(&self, af: &AAFramework<T>, chosen: &Extension) -> Self
    where
        T: LabelType,
    {
        let mut alive = self.alive.clone();
        alive.subtract(chosen.members());
        for id in chosen.members().iter() {
            alive.subtract(af.attacked_by_mask(id));
        }
        TransitionState {
            alive,
            constructed: self.constructed.union(chosen),
        }
    }

    /// Returns the mask of the arguments standing in the residual framework.
    pub fn alive(&self) -> &BitSet {
        &self.alive
    }

    /// Returns the extension constructed so far.
    pub fn constructed(&self) -> &Extension {
        &self.constructed
    }

    /// Materializes the residual framework as a standalone framework.
    ///
    /// The arguments of the result are re-indexed; use the masks of this state
    /// when identifiers relative to the root framework are needed.
    pub fn residual<T>(&self, af: &AAFramework<T>) -> AAFramework<T>
    where
        T: LabelType,
    {
        af.induced_subgraph(&self.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn framework_of(
        labels: &[&'static str],
        attacks: &[(&'static str, &'static str)],
    ) -> AAFramework<&'static str> {
        let args = ArgumentSet::new_with_labels(labels);
        let mut af = AAFramework::new_with_argument_set(args);
        for (from, to) in attacks {
            af.new_attack(from, to).unwrap();
        }
        af
    }

    #[test]
    fn test_initial_state() {
        let af = framework_of(&["a", "b"], &[("a", "b")]);
        let state = TransitionState::initial(&af);
        assert_eq!(2, state.alive().len());
        assert!(state.constructed().is_empty());
    }

    #[test]
    fn test_transit_removes_chosen_and_attacked() {
        let af = framework_of(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let state = TransitionState::initial(&af);
        let next = state.transit(&af, &Extension::from_ids(3, &[0]));
        assert_eq!(BitSet::from_indices(3, &[2]), *next.alive());
        assert_eq!(Extension::from_ids(3, &[0]), *next.constructed());
    }

    #[test]
    fn test_transit_accumulates() {
        let af = framework_of(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let state = TransitionState::initial(&af)
            .transit(&af, &Extension::from_ids(3, &[0]))
            .transit(&af, &Extension::from_ids(3, &[2]));
        assert!(state.alive().is_empty());
        assert_eq!(Extension::from_ids(3, &[0, 2]), *state.constructed());
    }

    #[test]
    fn test_residual_is_reindexed() {
        let af = framework_of(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let state = TransitionState::initial(&af).transit(&af, &Extension::from_ids(3, &[0]));
        let residual = state.residual(&af);
        assert_eq!(1, residual.n_arguments());
        assert_eq!(0, residual.n_attacks());
        assert_eq!(&"c", residual.argument_set().get_argument_by_id(0).label());
    }
}
