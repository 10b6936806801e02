use crate::aa::{AAFramework, Argument, LabelType};
use crate::error::Result;
use crate::utils::BitSet;

/// A set of arguments considered jointly acceptable.
///
/// Extensions are produced by reasoners or by composing serialisation
/// sequences; they are plain values once returned, and two extensions are
/// equal iff their member sets are equal.
/// Members are stored as argument identifiers of the framework the extension
/// was computed against.
///
/// # Example
///
/// ```
/// # use redukt::aa::{AAFramework, ArgumentSet, Extension};
/// let labels = vec!["a", "b"];
/// let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
/// let ext = Extension::from_labels(&af, &["a"]).unwrap();
/// assert!(ext.contains(0));
/// assert_eq!(vec![&"a"], ext.labels(&af));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extension {
    members: BitSet,
}

impl Extension {
    /// Builds an empty extension for a framework with the given number of arguments.
    pub fn new(n_arguments: usize) -> Self {
        Extension {
            members: BitSet::new(n_arguments),
        }
    }

    /// Builds an extension from the ids of its members.
    ///
    /// # Panics
    ///
    /// Panics if a member id is not lower than the number of arguments.
    pub fn from_ids(n_arguments: usize, ids: &[usize]) -> Self {
        Extension {
            members: BitSet::from_indices(n_arguments, ids),
        }
    }

    /// Builds an extension from argument labels of a framework.
    ///
    /// An unknown label yields a [`MalformedGraph`](crate::error::Error::MalformedGraph) error.
    pub fn from_labels<T>(af: &AAFramework<T>, labels: &[T]) -> Result<Self>
    where
        T: LabelType,
    {
        let mut members = BitSet::new(af.n_arguments());
        for label in labels {
            members.insert(af.argument_set().get_argument_index(label)?);
        }
        Ok(Extension { members })
    }

    /// Returns the member set of the extension.
    pub fn members(&self) -> &BitSet {
        &self.members
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` iff the extension has no member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` iff the argument with the given id belongs to the extension.
    pub fn contains(&self, id: usize) -> bool {
        self.members.contains(id)
    }

    /// Returns `true` iff every member of this extension belongs to the other one.
    pub fn is_subset_of(&self, other: &Extension) -> bool {
        self.members.is_subset_of(&other.members)
    }

    /// Returns the extension containing the members of this one and the other one.
    pub fn union(&self, other: &Extension) -> Extension {
        Extension {
            members: self.members.union(&other.members),
        }
    }

    /// Returns the member arguments, in id order.
    pub fn arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.members
            .iter()
            .map(|id| af.argument_set().get_argument_by_id(id))
            .collect()
    }

    /// Returns the member labels, in id order.
    pub fn labels<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a T>
    where
        T: LabelType,
    {
        self.arguments(af).iter().map(|a| a.label()).collect()
    }

    /// Renders the extension against a framework, as a brace-delimited label list.
    pub fn format<T>(&self, af: &AAFramework<T>) -> String
    where
        T: LabelType,
    {
        let mut result = String::from("{");
        for (i, label) in self.labels(af).iter().enumerate() {
            if i > 0 {
                result.push(',');
            }
            result.push_str(&label.to_string());
        }
        result.push('}');
        result
    }
}

impl From<BitSet> for Extension {
    fn from(members: BitSet) -> Self {
        Extension { members }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn toy_af() -> AAFramework<&'static str> {
        let labels = vec!["a", "b", "c"];
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels))
    }

    #[test]
    fn test_from_labels() {
        let af = toy_af();
        let ext = Extension::from_labels(&af, &["a", "c"]).unwrap();
        assert_eq!(2, ext.len());
        assert!(ext.contains(0));
        assert!(!ext.contains(1));
        assert!(ext.contains(2));
        assert_eq!(vec![&"a", &"c"], ext.labels(&af));
    }

    #[test]
    fn test_from_unknown_label() {
        let af = toy_af();
        assert!(Extension::from_labels(&af, &["d"]).is_err());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let af = toy_af();
        let first = Extension::from_labels(&af, &["a", "c"]).unwrap();
        let second = Extension::from_labels(&af, &["c", "a"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_union_and_subset() {
        let af = toy_af();
        let first = Extension::from_labels(&af, &["a"]).unwrap();
        let second = Extension::from_labels(&af, &["c"]).unwrap();
        let union = first.union(&second);
        assert!(first.is_subset_of(&union));
        assert!(second.is_subset_of(&union));
        assert_eq!(Extension::from_labels(&af, &["a", "c"]).unwrap(), union);
    }

    #[test]
    fn test_format() {
        let af = toy_af();
        let ext = Extension::from_labels(&af, &["a", "c"]).unwrap();
        assert_eq!("{a,c}", ext.format(&af));
        assert_eq!("{}", Extension::new(af.n_arguments()).format(&af));
    }
}
