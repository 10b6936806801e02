use super::specs::{
    CredulousAcceptanceComputer, ExtensionSetComputer, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, Extension, LabelType, Semantics};
use crate::utils::BitSet;

/// Computes the grounded extension of an AF.
///
/// The grounded extension is the least fixpoint of the characteristic
/// function; it is computed here by propagating from the unattacked arguments
/// in time linear in the size of the framework.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Extension
where
    T: LabelType,
{
    Extension::from(grounded_mask_in(af, &af.all_arguments_mask()))
}

pub(crate) fn grounded_mask_in<T>(af: &AAFramework<T>, alive: &BitSet) -> BitSet
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut n_alive_attackers = vec![0_usize; n];
    let mut ext = BitSet::new(n);
    let mut queue = Vec::new();
    for id in alive.iter() {
        let mut attackers = af.attackers_of_mask(id).clone();
        attackers.intersect_with(alive);
        let count = attackers.len();
        n_alive_attackers[id] = count;
        if count == 0 {
            ext.insert(id);
            queue.push(id);
        }
    }
    let mut defeated = BitSet::new(n);
    let mut n_processed = 0;
    while n_processed < queue.len() {
        let id = queue[n_processed];
        n_processed += 1;
        for attacked in af.attacked_by_mask(id).iter() {
            if !alive.contains(attacked) || defeated.contains(attacked) {
                continue;
            }
            defeated.insert(attacked);
            for defended in af.attacked_by_mask(attacked).iter() {
                if alive.contains(defended)
                    && !defeated.contains(defended)
                    && !ext.contains(defended)
                {
                    n_alive_attackers[defended] -= 1;
                    if n_alive_attackers[defended] == 0 {
                        ext.insert(defended);
                        queue.push(defended);
                    }
                }
            }
        }
    }
    ext
}

/// A reasoner dedicated to the grounded semantics.
///
/// The grounded extension always exists and is unique, so
/// `compute_extensions` returns exactly one extension and credulous and
/// skeptical acceptance coincide.
pub struct GroundedReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a grounded reasoner for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionSetComputer<T> for GroundedReasoner<'_, T>
where
    T: LabelType,
{
    fn semantics(&self) -> Semantics {
        Semantics::GR
    }

    fn compute_extensions(&mut self) -> Vec<Extension> {
        vec![grounded_extension(self.af)]
    }
}

impl<T> SingleExtensionComputer<T> for GroundedReasoner<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Extension> {
        Some(grounded_extension(self.af))
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedReasoner<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        grounded_extension(self.af).contains(arg.id())
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedReasoner<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        grounded_extension(self.af).contains(arg.id())
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

    fn grounded_labels(af: &AAFramework<&'static str>) -> Vec<&'static str> {
        let mut labels: Vec<&str> = grounded_extension(af)
            .labels(af)
            .iter()
            .map(|l| **l)
            .collect();
        labels.sort_unstable();
        labels
    }

    #[test]
    fn test_grounded_extension_chain() {
        let af = framework_of(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("b", "d"),
                ("c", "e"),
                ("d", "e"),
                ("e", "f"),
            ],
        );
        assert_eq!(vec!["a", "c", "d", "f"], grounded_labels(&af));
    }

    #[test]
    fn test_grounded_extension_with_head() {
        let af = framework_of(
            &["x", "a", "b", "c", "d", "e", "f"],
            &[
                ("x", "a"),
                ("a", "b"),
                ("b", "c"),
                ("b", "d"),
                ("c", "e"),
                ("d", "e"),
                ("e", "f"),
            ],
        );
        assert_eq!(vec!["b", "e", "x"], grounded_labels(&af));
    }

    #[test]
    fn test_grounded_extension_of_mutual_attack_is_empty() {
        let af = framework_of(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert!(grounded_extension(&af).is_empty());
    }

    #[test]
    fn test_grounded_in_subframework() {
        // a -> b -> c: in the subframework without a, b is unattacked
        let af = framework_of(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let alive = BitSet::from_indices(3, &[1, 2]);
        assert_eq!(BitSet::from_indices(3, &[1]), grounded_mask_in(&af, &alive));
    }

    #[test]
    fn test_grounded_reasoner_acceptance() {
        let af = framework_of(&["a", "b"], &[("a", "b")]);
        let mut reasoner = GroundedReasoner::new(&af);
        assert_eq!(1, reasoner.compute_extensions().len());
        let arg_a = af.argument_set().get_argument(&"a").unwrap();
        let arg_b = af.argument_set().get_argument(&"b").unwrap();
        assert!(reasoner.is_credulously_accepted(arg_a));
        assert!(!reasoner.is_skeptically_accepted(arg_b));
    }
}
