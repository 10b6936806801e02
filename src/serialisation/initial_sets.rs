use crate::aa::{AAFramework, Extension, LabelType};
use crate::reasoners::is_admissible_in;
use crate::utils::BitSet;

/// The three flavors of initial sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitialSetKind {
    /// An initial set whose members have no attacker at all.
    Unattacked,
    /// An initial set that is attacked, but by no other initial set.
    Unchallenged,
    /// An initial set attacked by another initial set.
    Challenged,
}

/// The initial sets of a framework, partitioned by kind.
///
/// An initial set is a non-empty admissible set that is minimal with respect
/// to set inclusion.
/// The partition drives the serialisation process: each semantics selects the
/// kinds it is allowed to pick its next transition from.
///
/// # Example
///
/// ```
/// # use redukt::aa::{AAFramework, ArgumentSet};
/// # use redukt::serialisation::InitialSets;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
/// af.new_attack(&"a", &"b").unwrap();
/// af.new_attack(&"b", &"a").unwrap();
/// let initial_sets = InitialSets::compute(&af);
/// assert!(initial_sets.unattacked().iter().any(|e| e.format(&af) == "{c}"));
/// assert_eq!(2, initial_sets.challenged().len());
/// ```
pub struct InitialSets {
    unattacked: Vec<Extension>,
    unchallenged: Vec<Extension>,
    challenged: Vec<Extension>,
}

impl InitialSets {
    /// Computes the initial sets of a framework.
    ///
    /// The cost of the enumeration is exponential in the number of arguments.
    pub fn compute<T>(af: &AAFramework<T>) -> Self
    where
        T: LabelType,
    {
        Self::compute_in(af, &af.all_arguments_mask())
    }

    /// Computes the initial sets of the subframework induced by an alive mask.
    pub(crate) fn compute_in<T>(af: &AAFramework<T>, alive: &BitSet) -> Self
    where
        T: LabelType,
    {
        let minimal_admissible = minimal_admissible_sets(af, alive);
        let mut unattacked = Vec::new();
        let mut unchallenged = Vec::new();
        let mut challenged = Vec::new();
        for members in &minimal_admissible {
            let attackers = alive_attackers_of(af, alive, members);
            let extension = Extension::from(members.clone());
            if attackers.is_empty() {
                unattacked.push(extension);
            } else if minimal_admissible
                .iter()
                .any(|other| other != members && !other.is_disjoint_with(&attackers))
            {
                challenged.push(extension);
            } else {
                unchallenged.push(extension);
            }
        }
        InitialSets {
            unattacked,
            unchallenged,
            challenged,
        }
    }

    /// Returns the unattacked initial sets.
    pub fn unattacked(&self) -> &[Extension] {
        &self.unattacked
    }

    /// Returns the unchallenged initial sets.
    pub fn unchallenged(&self) -> &[Extension] {
        &self.unchallenged
    }

    /// Returns the challenged initial sets.
    pub fn challenged(&self) -> &[Extension] {
        &self.challenged
    }

    /// Returns the initial sets of the given kind.
    pub fn of_kind(&self, kind: InitialSetKind) -> &[Extension] {
        match kind {
            InitialSetKind::Unattacked => &self.unattacked,
            InitialSetKind::Unchallenged => &self.unchallenged,
            InitialSetKind::Challenged => &self.challenged,
        }
    }

    /// Iterates over all the initial sets, whatever their kind.
    pub fn iter_all(&self) -> impl Iterator<Item = &Extension> + '_ {
        self.unattacked
            .iter()
            .chain(self.unchallenged.iter())
            .chain(self.challenged.iter())
    }

    /// Returns `true` iff the framework has no initial set at all.
    pub fn is_empty(&self) -> bool {
        self.unattacked.is_empty() && self.unchallenged.is_empty() && self.challenged.is_empty()
    }
}

fn minimal_admissible_sets<T>(af: &AAFramework<T>, alive: &BitSet) -> Vec<BitSet>
where
    T: LabelType,
{
    let admissible: Vec<BitSet> = alive
        .iter_subsets()
        .filter(|candidate| !candidate.is_empty() && is_admissible_in(af, alive, candidate))
        .collect();
    admissible
        .iter()
        .filter(|candidate| {
            !admissible
                .iter()
                .any(|other| *other != **candidate && other.is_subset_of(candidate))
        })
        .cloned()
        .collect()
}

fn alive_attackers_of<T>(af: &AAFramework<T>, alive: &BitSet, members: &BitSet) -> BitSet
where
    T: LabelType,
{
    let mut attackers = BitSet::new(af.n_arguments());
    for id in members.iter() {
        attackers.union_with(af.attackers_of_mask(id));
    }
    attackers.intersect_with(alive);
    attackers
}
