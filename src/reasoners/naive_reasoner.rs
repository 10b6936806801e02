use super::predicates::{is_admissible, is_complete, is_conflict_free, is_stable};
use super::specs::{
    CredulousAcceptanceComputer, ExtensionSetComputer, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, Extension, LabelType, Semantics};
use crate::error::{Error, Result};
use crate::reasoners::grounded_reasoner::grounded_extension;
use crate::utils::BitSet;

/// A reasoner that enumerates the extensions of a framework by exhaustive
/// search over the subsets of its arguments.
///
/// This reasoner is intended for small frameworks and as a reference point for
/// the other reasoners; its cost is exponential in the number of arguments for
/// every semantics but the grounded one.
///
/// # Example
///
/// ```
/// # use redukt::aa::{AAFramework, ArgumentSet, Semantics};
/// # use redukt::reasoners::{ExtensionSetComputer, NaiveExtensionReasoner};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let mut reasoner = NaiveExtensionReasoner::new(&af, Semantics::ST).unwrap();
/// let extensions = reasoner.compute_extensions();
/// assert_eq!(1, extensions.len());
/// assert_eq!("{a}", extensions[0].format(&af));
/// ```
pub struct NaiveExtensionReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    semantics: Semantics,
}

impl<'a, T> NaiveExtensionReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a naive reasoner for the given framework and semantics.
    ///
    /// The supported semantics are [CF](Semantics::CF), [ADM](Semantics::ADM),
    /// [CO](Semantics::CO), [GR](Semantics::GR), [PR](Semantics::PR) and
    /// [ST](Semantics::ST); an [`UnsupportedSemantics`](Error::UnsupportedSemantics)
    /// error is returned for any other.
    pub fn new(af: &'a AAFramework<T>, semantics: Semantics) -> Result<Self> {
        match semantics {
            Semantics::CF
            | Semantics::ADM
            | Semantics::CO
            | Semantics::GR
            | Semantics::PR
            | Semantics::ST => Ok(Self { af, semantics }),
            _ => Err(Error::UnsupportedSemantics(semantics.to_string())),
        }
    }

    fn compute_masks(&self) -> Vec<BitSet> {
        match self.semantics {
            Semantics::CF => self.filter_subsets(|m| is_conflict_free(self.af, m)),
            Semantics::ADM => self.filter_subsets(|m| is_admissible(self.af, m)),
            Semantics::CO => self.filter_subsets(|m| is_complete(self.af, m)),
            Semantics::ST => self.filter_subsets(|m| is_stable(self.af, m)),
            Semantics::GR => vec![grounded_extension(self.af).members().clone()],
            Semantics::PR => {
                let admissible = self.filter_subsets(|m| is_admissible(self.af, m));
                admissible
                    .iter()
                    .filter(|m| {
                        !admissible
                            .iter()
                            .any(|other| *m != other && m.is_subset_of(other))
                    })
                    .cloned()
                    .collect()
            }
            _ => unreachable!(),
        }
    }

    fn filter_subsets<F>(&self, predicate: F) -> Vec<BitSet>
    where
        F: Fn(&BitSet) -> bool,
    {
        self.af
            .all_arguments_mask()
            .iter_subsets()
            .filter(predicate)
            .collect()
    }
}

impl<T> ExtensionSetComputer<T> for NaiveExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn semantics(&self) -> Semantics {
        self.semantics
    }

    fn compute_extensions(&mut self) -> Vec<Extension> {
        self.compute_masks().into_iter().map(Extension::from).collect()
    }
}

impl<T> SingleExtensionComputer<T> for NaiveExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Extension> {
        self.compute_masks().into_iter().next().map(Extension::from)
    }
}

impl<T> CredulousAcceptanceComputer<T> for NaiveExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_masks().iter().any(|m| m.contains(arg.id()))
    }
}

impl<T> SkepticalAcceptanceComputer<T> for NaiveExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_masks().iter().all(|m| m.contains(arg.id()))
    }
}
