use crate::aa::{AAFramework, Extension, LabelType};

/// A serialisation sequence: the ordered record of the initial sets chosen
/// along an accepted run of the serialisation process.
///
/// The union of the elements of the sequence is the extension the run
/// constructs; two distinct sequences may construct the same extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialisationSequence {
    sets: Vec<Extension>,
}

impl SerialisationSequence {
    /// Builds an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a set to the sequence.
    ///
    /// # Panics
    ///
    /// The chosen sets of a run are nonempty and pairwise disjoint; this
    /// function panics if the new set is empty or intersects a previous one.
    pub fn push(&mut self, set: Extension) {
        assert!(!set.is_empty(), "cannot serialise an empty set");
        assert!(
            self.sets
                .iter()
                .all(|s| s.members().is_disjoint_with(set.members())),
            "the sets of a serialisation sequence must be pairwise disjoint"
        );
        self.sets.push(set);
    }

    pub(crate) fn pop(&mut self) -> Option<Extension> {
        self.sets.pop()
    }

    /// Returns the number of sets in the sequence.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` iff the sequence contains no set.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterates over the sets of the sequence, in serialisation order.
    pub fn iter(&self) -> impl Iterator<Item = &Extension> + '_ {
        self.sets.iter()
    }

    /// Returns the extension constructed by the sequence, i.e. the union of
    /// its sets.
    pub fn extension(&self, n_arguments: usize) -> Extension {
        self.sets
            .iter()
            .fold(Extension::new(n_arguments), |acc, s| acc.union(s))
    }

    /// Formats the sequence using the labels of the underlying framework.
    pub fn format<T>(&self, af: &AAFramework<T>) -> String
    where
        T: LabelType,
    {
        let mut result = String::from("(");
        for (i, s) in self.sets.iter().enumerate() {
            if i > 0 {
                result.push(',');
            }
            result.push_str(&s.format(af));
        }
        result.push(')');
        result
    }
}
