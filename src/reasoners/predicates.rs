//! The Dung acceptability predicates, as pure functions over a framework and a
//! candidate set of argument ids.
//!
//! Each predicate also exists in a crate-internal variant parameterized by an
//! "alive" mask, which evaluates the predicate in the subframework induced by
//! the mask without materializing it.
//! The serialisation engine relies on these variants to work on residual
//! frameworks that share the attack index of the root framework.

use crate::aa::{AAFramework, LabelType};
use crate::utils::BitSet;

/// Returns `true` iff no member of the candidate set attacks another member.
///
/// # Example
///
/// ```
/// # use redukt::aa::{AAFramework, ArgumentSet};
/// # use redukt::reasoners::is_conflict_free;
/// # use redukt::utils::BitSet;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// assert!(is_conflict_free(&af, &BitSet::from_indices(2, &[0])));
/// assert!(!is_conflict_free(&af, &BitSet::from_indices(2, &[0, 1])));
/// ```
pub fn is_conflict_free<T>(af: &AAFramework<T>, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    candidate
        .iter()
        .all(|id| af.attacked_by_mask(id).is_disjoint_with(candidate))
}

/// Returns `true` iff the candidate set defends the given argument, i.e.
/// attacks each of its attackers.
pub fn defends<T>(af: &AAFramework<T>, candidate: &BitSet, arg_id: usize) -> bool
where
    T: LabelType,
{
    defends_in(af, &af.all_arguments_mask(), candidate, arg_id)
}

pub(crate) fn defends_in<T>(
    af: &AAFramework<T>,
    alive: &BitSet,
    candidate: &BitSet,
    arg_id: usize,
) -> bool
where
    T: LabelType,
{
    let mut attackers = af.attackers_of_mask(arg_id).clone();
    attackers.intersect_with(alive);
    let all_countered = attackers
        .iter()
        .all(|attacker| !af.attackers_of_mask(attacker).is_disjoint_with(candidate));
    all_countered
}

/// Returns `true` iff the candidate set is conflict-free and defends each of
/// its members.
pub fn is_admissible<T>(af: &AAFramework<T>, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    is_admissible_in(af, &af.all_arguments_mask(), candidate)
}

pub(crate) fn is_admissible_in<T>(af: &AAFramework<T>, alive: &BitSet, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    is_conflict_free(af, candidate)
        && candidate
            .iter()
            .all(|id| defends_in(af, alive, candidate, id))
}

/// Returns the set of arguments defended by the candidate set (the
/// characteristic function of the framework applied to the candidate).
pub fn characteristic_function<T>(af: &AAFramework<T>, candidate: &BitSet) -> BitSet
where
    T: LabelType,
{
    characteristic_function_in(af, &af.all_arguments_mask(), candidate)
}

pub(crate) fn characteristic_function_in<T>(
    af: &AAFramework<T>,
    alive: &BitSet,
    candidate: &BitSet,
) -> BitSet
where
    T: LabelType,
{
    let mut result = BitSet::new(af.n_arguments());
    alive
        .iter()
        .filter(|id| defends_in(af, alive, candidate, *id))
        .for_each(|id| result.insert(id));
    result
}

/// Returns `true` iff the candidate set is admissible and contains every
/// argument it defends.
pub fn is_complete<T>(af: &AAFramework<T>, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    is_complete_in(af, &af.all_arguments_mask(), candidate)
}

pub(crate) fn is_complete_in<T>(af: &AAFramework<T>, alive: &BitSet, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    is_admissible_in(af, alive, candidate)
        && characteristic_function_in(af, alive, candidate).is_subset_of(candidate)
}

/// Returns `true` iff the candidate set is conflict-free and attacks every
/// argument outside of it.
pub fn is_stable<T>(af: &AAFramework<T>, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    is_stable_in(af, &af.all_arguments_mask(), candidate)
}

pub(crate) fn is_stable_in<T>(af: &AAFramework<T>, alive: &BitSet, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    if !is_conflict_free(af, candidate) {
        return false;
    }
    let mut outside = alive.clone();
    outside.subtract(candidate);
    let all_attacked = outside
        .iter()
        .all(|id| !af.attackers_of_mask(id).is_disjoint_with(candidate));
    all_attacked
}

/// Returns `true` iff the candidate set is admissible and no proper superset
/// of it is admissible.
///
/// The maximality check enumerates the supersets of the candidate; its cost is
/// exponential in the number of arguments outside the candidate.
pub fn is_preferred<T>(af: &AAFramework<T>, candidate: &BitSet) -> bool
where
    T: LabelType,
{
    if !is_admissible(af, candidate) {
        return false;
    }
    !candidate
        .complement()
        .iter_subsets()
        .filter(|addition| !addition.is_empty())
        .any(|addition| is_admissible(af, &candidate.union(&addition)))
}

/// Returns `true` iff the subframework induced by the alive mask contains an
/// argument with no attacker in that subframework.
pub(crate) fn has_unattacked_argument<T>(af: &AAFramework<T>, alive: &BitSet) -> bool
where
    T: LabelType,
{
    alive
        .iter()
        .any(|id| af.attackers_of_mask(id).is_disjoint_with(alive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn framework_of(
        labels: &[&'static str],
        attacks: &[(usize, usize)],
    ) -> AAFramework<&'static str> {
        let args = ArgumentSet::new_with_labels(labels);
        let mut af = AAFramework::new_with_argument_set(args);
        for (from, to) in attacks {
            af.new_attack_by_ids(*from, *to).unwrap();
        }
        af
    }

    fn set(n: usize, ids: &[usize]) -> BitSet {
        BitSet::from_indices(n, ids)
    }

    #[test]
    fn test_conflict_free() {
        let af = framework_of(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        assert!(is_conflict_free(&af, &set(3, &[])));
        assert!(is_conflict_free(&af, &set(3, &[0, 2])));
        assert!(!is_conflict_free(&af, &set(3, &[0, 1])));
    }

    #[test]
    fn test_conflict_free_self_attack() {
        let af = framework_of(&["a"], &[(0, 0)]);
        assert!(!is_conflict_free(&af, &set(1, &[0])));
    }

    #[test]
    fn test_defends() {
        let af = framework_of(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        assert!(defends(&af, &set(3, &[0]), 2));
        assert!(!defends(&af, &set(3, &[]), 2));
        // an unattacked argument is defended by anything
        assert!(defends(&af, &set(3, &[]), 0));
    }

    #[test]
    fn test_admissible() {
        let af = framework_of(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        assert!(is_admissible(&af, &set(3, &[])));
        assert!(is_admissible(&af, &set(3, &[0])));
        assert!(is_admissible(&af, &set(3, &[0, 2])));
        assert!(!is_admissible(&af, &set(3, &[2])));
    }

    #[test]
    fn test_complete() {
        let af = framework_of(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        assert!(!is_complete(&af, &set(3, &[])));
        assert!(!is_complete(&af, &set(3, &[0])));
        assert!(is_complete(&af, &set(3, &[0, 2])));
    }

    #[test]
    fn test_stable() {
        let af = framework_of(&["a", "b"], &[(0, 1)]);
        assert!(is_stable(&af, &set(2, &[0])));
        assert!(!is_stable(&af, &set(2, &[])));
        assert!(!is_stable(&af, &set(2, &[1])));
    }

    #[test]
    fn test_preferred() {
        let af = framework_of(&["a", "b"], &[(0, 1), (1, 0)]);
        assert!(is_preferred(&af, &set(2, &[0])));
        assert!(is_preferred(&af, &set(2, &[1])));
        assert!(!is_preferred(&af, &set(2, &[])));
    }

    #[test]
    fn test_defense_against_multiple_attackers() {
        // d is attacked by both b and c, so its defense needs both countered
        let af = framework_of(&["a", "b", "c", "d"], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(defends(&af, &set(4, &[0]), 3));
        assert!(!defends(&af, &set(4, &[1]), 3));
        assert!(is_stable(&af, &set(4, &[0, 3])));
        assert!(!is_stable(&af, &set(4, &[0])));
    }

    #[test]
    fn test_predicates_in_subframework() {
        // a -> b -> c; without a, b is unattacked
        let af = framework_of(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        let alive = set(3, &[1, 2]);
        assert!(is_admissible_in(&af, &alive, &set(3, &[1])));
        assert!(!is_admissible_in(&af, &alive, &set(3, &[2])));
        assert!(is_complete_in(&af, &alive, &set(3, &[1])));
        assert!(is_stable_in(&af, &alive, &set(3, &[1])));
    }

    #[test]
    fn test_has_unattacked_argument() {
        let af = framework_of(&["a", "b", "c"], &[(0, 1), (1, 2), (2, 0)]);
        assert!(!has_unattacked_argument(&af, &af.all_arguments_mask()));
        let af2 = framework_of(&["a", "b"], &[(0, 1)]);
        assert!(has_unattacked_argument(&af2, &af2.all_arguments_mask()));
    }
}
