use crate::aa::{AAFramework, LabelType, Semantics};
use crate::error::{Error, Result};
use crate::serialisation::InitialSets;
use crate::utils::BitSet;
use std::collections::HashSet;
use strum_macros::EnumIter;

/// The equivalence kernels.
///
/// A kernel maps a framework to one with the same arguments and a subset of
/// its attacks, such that two frameworks are strongly equivalent with respect
/// to a semantics if and only if their kernels for it are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum EquivalenceKernel {
    /// The kernel characterizing strong equivalence under the stable semantics.
    Stable,
    /// The kernel characterizing strong equivalence under the admissible and
    /// preferred semantics.
    Admissible,
    /// The kernel characterizing strong equivalence under the complete
    /// semantics.
    Complete,
    /// The kernel characterizing strong equivalence under the grounded
    /// semantics.
    Grounded,
    /// The kernel characterizing strong equivalence under the strongly
    /// admissible semantics.
    StronglyAdmissible,
    /// The kernel characterizing strong equivalence under the unchallenged
    /// semantics.
    Unchallenged,
}

impl EquivalenceKernel {
    /// Returns the kernel characterizing strong equivalence under the given
    /// semantics.
    ///
    /// No kernel exists for [CF](Semantics::CF); an
    /// [`UnsupportedSemantics`](Error::UnsupportedSemantics) error is returned
    /// for it.
    pub fn for_semantics(semantics: Semantics) -> Result<Self> {
        match semantics {
            Semantics::ST => Ok(EquivalenceKernel::Stable),
            Semantics::ADM | Semantics::PR => Ok(EquivalenceKernel::Admissible),
            Semantics::CO => Ok(EquivalenceKernel::Complete),
            Semantics::GR => Ok(EquivalenceKernel::Grounded),
            Semantics::SAD => Ok(EquivalenceKernel::StronglyAdmissible),
            Semantics::UC => Ok(EquivalenceKernel::Unchallenged),
            Semantics::CF => Err(Error::UnsupportedSemantics(semantics.to_string())),
        }
    }

    /// Returns the attacks of the framework the kernel removes, as pairs of
    /// argument identifiers.
    pub fn useless_attacks<T>(&self, af: &AAFramework<T>) -> Vec<(usize, usize)>
    where
        T: LabelType,
    {
        match self {
            EquivalenceKernel::Unchallenged => unchallenged_useless_attacks(af),
            _ => af
                .iter_attack_ids()
                .filter(|(from, to)| from != to && self.removes(af, *from, *to))
                .collect(),
        }
    }

    fn removes<T>(&self, af: &AAFramework<T>, from: usize, to: usize) -> bool
    where
        T: LabelType,
    {
        let from_self = af.is_self_attacking(from);
        let to_self = af.is_self_attacking(to);
        let back_attack = af.contains_attack_by_ids(to, from);
        match self {
            EquivalenceKernel::Stable => from_self,
            EquivalenceKernel::Admissible => from_self && (to_self || back_attack),
            EquivalenceKernel::Complete => from_self && to_self,
            EquivalenceKernel::Grounded => to_self && (from_self || back_attack),
            EquivalenceKernel::StronglyAdmissible => {
                from_self
                    || (to_self && back_attack)
                    || (from_self && to_self)
                    || (to_self && (from_self || back_attack))
            }
            EquivalenceKernel::Unchallenged => unreachable!(),
        }
    }

    /// Computes the kernel of a framework: a framework with the same
    /// arguments, minus the useless attacks.
    ///
    /// # Example
    ///
    /// ```
    /// # use redukt::aa::{AAFramework, ArgumentSet};
    /// # use redukt::equivalence::EquivalenceKernel;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// af.new_attack(&"a", &"a").unwrap();
    /// af.new_attack(&"a", &"b").unwrap();
    /// let kernel = EquivalenceKernel::Stable.kernel(&af);
    /// assert_eq!(1, kernel.n_attacks());
    /// ```
    pub fn kernel<T>(&self, af: &AAFramework<T>) -> AAFramework<T>
    where
        T: LabelType,
    {
        let useless: HashSet<(usize, usize)> = self.useless_attacks(af).into_iter().collect();
        framework_without_attacks(af, &useless)
    }
}

fn framework_without_attacks<T>(
    af: &AAFramework<T>,
    removed: &HashSet<(usize, usize)>,
) -> AAFramework<T>
where
    T: LabelType,
{
    let mut result = AAFramework::new_with_argument_set(af.argument_set().clone());
    for (from, to) in af.iter_attack_ids() {
        if !removed.contains(&(from, to)) {
            result
                .new_attack_by_ids(from, to)
                .unwrap_or_else(|_| unreachable!("the attack comes from the same argument set"));
        }
    }
    result
}

/// The unchallenged kernel has no known closed form; an attack is removed iff,
/// over every residual framework reachable by serialising initial sets, its
/// source never belongs to an initial set and its removal never changes the
/// family of initial sets.
fn unchallenged_useless_attacks<T>(af: &AAFramework<T>) -> Vec<(usize, usize)>
where
    T: LabelType,
{
    let reachable = reachable_alive_masks(af);
    af.iter_attack_ids()
        .filter(|(from, to)| {
            if from == to {
                return false;
            }
            let mut removed = HashSet::new();
            removed.insert((*from, *to));
            let without = framework_without_attacks(af, &removed);
            reachable.iter().all(|alive| {
                let initial_sets = InitialSets::compute_in(af, alive);
                initial_sets.iter_all().all(|s| !s.contains(*from))
                    && initial_set_family(&initial_sets)
                        == initial_set_family(&InitialSets::compute_in(&without, alive))
            })
        })
        .collect()
}

fn initial_set_family(initial_sets: &InitialSets) -> HashSet<BitSet> {
    initial_sets.iter_all().map(|s| s.members().clone()).collect()
}

fn reachable_alive_masks<T>(af: &AAFramework<T>) -> Vec<BitSet>
where
    T: LabelType,
{
    let mut seen = HashSet::new();
    let mut queue = vec![af.all_arguments_mask()];
    seen.insert(queue[0].clone());
    let mut n_processed = 0;
    while n_processed < queue.len() {
        let alive = queue[n_processed].clone();
        n_processed += 1;
        for chosen in InitialSets::compute_in(af, &alive).iter_all() {
            let mut next = alive.clone();
            next.subtract(chosen.members());
            for id in chosen.members().iter() {
                next.subtract(af.attacked_by_mask(id));
            }
            if seen.insert(next.clone()) {
                queue.push(next);
            }
        }
    }
    queue
}
