//! This module contains the division of frameworks into mandatory and
//! forbidden parts, and the cache for the standard divisions.

use crate::aa::{AAFramework, Extension, LabelType, Semantics};
use crate::error::{Error, Result};
use crate::reasoners::{ExtensionSetComputer, NaiveExtensionReasoner};
use crate::utils::BitSet;
use std::collections::HashMap;

/// A division of a framework: a set of arguments that must be accepted and a
/// set of arguments that must be rejected.
///
/// # Example
///
/// ```
/// # use redukt::aa::Extension;
/// # use redukt::divisions::Division;
/// # use redukt::utils::BitSet;
/// let division = Division::new(
///     &BitSet::from_indices(3, &[0]),
///     &BitSet::from_indices(3, &[1]),
/// ).unwrap();
/// assert!(division.is_valid(&Extension::from_ids(3, &[0, 2])));
/// assert!(!division.is_valid(&Extension::from_ids(3, &[0, 1])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    p: BitSet,
    v: BitSet,
}

impl Division {
    /// Builds a division from its mandatory part `p` and its forbidden part
    /// `v`.
    ///
    /// A [`MalformedGraph`](Error::MalformedGraph) error is returned if the
    /// two parts have different capacities or share an argument.
    pub fn new(p: &BitSet, v: &BitSet) -> Result<Self> {
        if p.capacity() != v.capacity() {
            return Err(Error::MalformedGraph(format!(
                "the parts of a division must range over the same arguments (got capacities {} and {})",
                p.capacity(),
                v.capacity()
            )));
        }
        if !p.is_disjoint_with(v) {
            return Err(Error::MalformedGraph(
                "the parts of a division must be disjoint".to_string(),
            ));
        }
        Ok(Division {
            p: p.clone(),
            v: v.clone(),
        })
    }

    /// Builds the standard division of an extension: the extension itself is
    /// mandatory and every other argument is forbidden.
    pub fn from_extension(ext: &Extension) -> Self {
        Division {
            p: ext.members().clone(),
            v: ext.members().complement(),
        }
    }

    /// Returns all the divisions an extension agrees with: the pairs made of
    /// a mandatory part taken inside the extension and a forbidden part taken
    /// outside of it.
    ///
    /// Their number is exponential in the capacity of the extension.
    pub fn divisions_for_extension(ext: &Extension) -> Vec<Division> {
        let mut result = Vec::new();
        for p in ext.members().iter_subsets() {
            for v in ext.members().complement().iter_subsets() {
                result.push(Division { p: p.clone(), v });
            }
        }
        result
    }

    /// Returns the mandatory part of the division.
    pub fn p(&self) -> &BitSet {
        &self.p
    }

    /// Returns the forbidden part of the division.
    pub fn v(&self) -> &BitSet {
        &self.v
    }

    /// Returns `true` iff an extension agrees with the division, i.e.
    /// contains its whole mandatory part and none of its forbidden part.
    pub fn is_valid(&self, ext: &Extension) -> bool {
        self.p.is_subset_of(ext.members()) && self.v.is_disjoint_with(ext.members())
    }

    /// Returns `true` iff the subframework induced by the mask is a divider
    /// of the division, i.e. keeps the whole mandatory part and none of the
    /// forbidden part.
    pub fn is_divider_mask(&self, mask: &BitSet) -> bool {
        self.p.is_subset_of(mask) && self.v.is_disjoint_with(mask)
    }

    /// Returns the masks of the dividers of the division.
    pub fn divider_masks<T>(&self, af: &AAFramework<T>) -> Vec<BitSet>
    where
        T: LabelType,
    {
        af.all_arguments_mask()
            .iter_subsets()
            .filter(|mask| self.is_divider_mask(mask))
            .collect()
    }

    /// Materializes the dividers of the division as induced subframeworks.
    ///
    /// The cost of the enumeration is exponential in the number of arguments
    /// outside the division.
    pub fn dividers<T>(&self, af: &AAFramework<T>) -> Vec<AAFramework<T>>
    where
        T: LabelType,
    {
        self.divider_masks(af)
            .iter()
            .map(|mask| af.induced_subgraph(mask))
            .collect()
    }

    /// Returns `true` iff no subframework is a divider of both divisions.
    pub fn is_disjoint_with(&self, other: &Division) -> bool {
        let mandatory = self.p.union(&other.p);
        let forbidden = self.v.union(&other.v);
        !mandatory.is_disjoint_with(&forbidden)
    }

    /// Returns `true` iff every subframework is a divider of at least one of
    /// the given divisions.
    pub fn is_exhaustive(divisions: &[Division], n_arguments: usize) -> bool {
        BitSet::full(n_arguments)
            .iter_subsets()
            .all(|mask| divisions.iter().any(|d| d.is_divider_mask(&mask)))
    }
}

type FrameworkSignature = (usize, Vec<(usize, usize)>);

/// A cache for the standard divisions of frameworks.
///
/// The standard divisions of a framework are the standard divisions of its
/// complete extensions.
/// Computing them requires a full extension enumeration, so callers issuing
/// repeated queries own a cache and pass it along; the cache is keyed by the
/// structure of the framework (argument count and attack relation).
#[derive(Default)]
pub struct DivisionCache {
    cache: HashMap<FrameworkSignature, Vec<Division>>,
}

impl DivisionCache {
    /// Builds an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the standard divisions of the framework, computing them on the
    /// first query and reusing them afterwards.
    pub fn standard_divisions<T>(&mut self, af: &AAFramework<T>) -> &[Division]
    where
        T: LabelType,
    {
        self.cache
            .entry(signature(af))
            .or_insert_with(|| compute_standard_divisions(af))
    }

    /// Returns the number of frameworks with cached divisions.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` iff the cache holds no entry.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forgets all the cached divisions.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

fn signature<T>(af: &AAFramework<T>) -> FrameworkSignature
where
    T: LabelType,
{
    let mut attacks: Vec<(usize, usize)> = af.iter_attack_ids().collect();
    attacks.sort_unstable();
    (af.n_arguments(), attacks)
}

fn compute_standard_divisions<T>(af: &AAFramework<T>) -> Vec<Division>
where
    T: LabelType,
{
    log::debug!(
        "computing the standard divisions of a framework with {} arguments",
        af.n_arguments()
    );
    let mut reasoner = NaiveExtensionReasoner::new(af, Semantics::CO)
        .unwrap_or_else(|_| unreachable!("the complete semantics is supported"));
    reasoner
        .compute_extensions()
        .iter()
        .map(Division::from_extension)
        .collect()
}
