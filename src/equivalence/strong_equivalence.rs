use super::kernels::EquivalenceKernel;
use crate::aa::{AAFramework, LabelType};
use std::collections::HashSet;

/// Checks the strong equivalence of two frameworks with respect to a kernel.
///
/// Two frameworks are strongly equivalent under a semantics when they keep the
/// same extensions whatever common set of arguments and attacks is added to
/// both; this holds exactly when their kernels are equal.
/// The frameworks are compared through their labels, so the insertion order of
/// the arguments is irrelevant.
///
/// # Example
///
/// ```
/// # use redukt::aa::{AAFramework, ArgumentSet};
/// # use redukt::equivalence::{are_strongly_equivalent, EquivalenceKernel};
/// let mut af1 = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af1.new_attack(&"a", &"a").unwrap();
/// af1.new_attack(&"a", &"b").unwrap();
/// let mut af2 = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af2.new_attack(&"a", &"a").unwrap();
/// assert!(are_strongly_equivalent(EquivalenceKernel::Stable, &af1, &af2));
/// ```
pub fn are_strongly_equivalent<T>(
    kernel: EquivalenceKernel,
    af1: &AAFramework<T>,
    af2: &AAFramework<T>,
) -> bool
where
    T: LabelType,
{
    let labels1: HashSet<&T> = af1.argument_set().iter().map(|a| a.label()).collect();
    let labels2: HashSet<&T> = af2.argument_set().iter().map(|a| a.label()).collect();
    if labels1 != labels2 {
        return false;
    }
    attack_labels(&kernel.kernel(af1)) == attack_labels(&kernel.kernel(af2))
}

fn attack_labels<T>(af: &AAFramework<T>) -> HashSet<(T, T)>
where
    T: LabelType,
{
    af.iter_attack_labels()
        .map(|(from, to)| (from.clone(), to.clone()))
        .collect()
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
    fn test_equal_frameworks_are_strongly_equivalent() {
        let af1 = framework_of(&["a", "b"], &[("a", "b")]);
        let af2 = framework_of(&["b", "a"], &[("a", "b")]);
        assert!(are_strongly_equivalent(EquivalenceKernel::Stable, &af1, &af2));
    }

    #[test]
    fn test_different_argument_sets_are_never_equivalent() {
        let af1 = framework_of(&["a"], &[]);
        let af2 = framework_of(&["a", "b"], &[]);
        assert!(!are_strongly_equivalent(
            EquivalenceKernel::Stable,
            &af1,
            &af2
        ));
    }

    #[test]
    fn test_useless_attack_does_not_break_equivalence() {
        let af1 = framework_of(&["a", "b"], &[("a", "a"), ("a", "b")]);
        let af2 = framework_of(&["a", "b"], &[("a", "a")]);
        assert!(are_strongly_equivalent(EquivalenceKernel::Stable, &af1, &af2));
        // the admissible kernel keeps (a,b) since b does not strike back
        assert!(!are_strongly_equivalent(
            EquivalenceKernel::Admissible,
            &af1,
            &af2
        ));
    }

    #[test]
    fn test_effective_attack_breaks_equivalence() {
        let af1 = framework_of(&["a", "b"], &[("a", "b")]);
        let af2 = framework_of(&["a", "b"], &[]);
        assert!(!are_strongly_equivalent(
            EquivalenceKernel::Grounded,
            &af1,
            &af2
        ));
    }
}
