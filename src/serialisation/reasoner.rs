use super::graph::SerialisationGraph;
use super::initial_sets::InitialSets;
use super::sequence::SerialisationSequence;
use super::transition::TransitionState;
use crate::aa::{AAFramework, Argument, Extension, LabelType, Semantics};
use crate::error::{Error, Result};
use crate::reasoners::{
    has_unattacked_argument, CredulousAcceptanceComputer, ExtensionSetComputer,
    SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use std::collections::HashSet;

/// A reasoner computing extensions by serialisation.
///
/// The reasoner explores the transition system of the framework: at each
/// state, the initial sets of the residual framework the semantics allows are
/// the possible next transitions, and the states at which the termination
/// rule of the semantics holds yield the extensions.
///
/// The selection and termination rules are:
///
/// | semantics | selected kinds | termination |
/// |-----------|----------------|-------------|
/// | ADM | all | always |
/// | CO | all | no unattacked argument remains |
/// | PR | all | no initial set remains |
/// | ST | all | no argument remains |
/// | GR | unattacked | no unattacked argument remains |
/// | SAD | unattacked | always |
/// | UC | unattacked, unchallenged | no unattacked nor unchallenged set remains |
///
/// # Example
///
/// ```
/// # use redukt::aa::{AAFramework, ArgumentSet, Semantics};
/// # use redukt::reasoners::ExtensionSetComputer;
/// # use redukt::serialisation::SerialisedExtensionReasoner;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let mut reasoner = SerialisedExtensionReasoner::new(&af, Semantics::CO).unwrap();
/// let extensions = reasoner.compute_extensions();
/// assert_eq!(1, extensions.len());
/// assert_eq!("{a}", extensions[0].format(&af));
/// ```
pub struct SerialisedExtensionReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    semantics: Semantics,
}

impl<'a, T> SerialisedExtensionReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a serialised reasoner for the given framework and semantics.
    ///
    /// Every semantics but [CF](Semantics::CF) is serialisable; an
    /// [`UnsupportedSemantics`](Error::UnsupportedSemantics) error is returned
    /// for it.
    pub fn new(af: &'a AAFramework<T>, semantics: Semantics) -> Result<Self> {
        if semantics == Semantics::CF {
            return Err(Error::UnsupportedSemantics(semantics.to_string()));
        }
        Ok(Self { af, semantics })
    }

    fn candidates(&self, initial_sets: &InitialSets) -> Vec<Extension> {
        let mut result: Vec<Extension> = initial_sets.unattacked().to_vec();
        match self.semantics {
            Semantics::GR | Semantics::SAD => {}
            Semantics::UC => result.extend_from_slice(initial_sets.unchallenged()),
            _ => {
                result.extend_from_slice(initial_sets.unchallenged());
                result.extend_from_slice(initial_sets.challenged());
            }
        }
        result
    }

    fn is_terminal(&self, state: &TransitionState, initial_sets: &InitialSets) -> bool {
        match self.semantics {
            Semantics::ADM | Semantics::SAD => true,
            Semantics::CO | Semantics::GR => !has_unattacked_argument(self.af, state.alive()),
            Semantics::PR => initial_sets.is_empty(),
            Semantics::ST => state.alive().is_empty(),
            Semantics::UC => {
                initial_sets.unattacked().is_empty() && initial_sets.unchallenged().is_empty()
            }
            Semantics::CF => unreachable!(),
        }
    }

    /// Computes the serialisation sequences of the framework.
    ///
    /// Each sequence is an accepted run of the transition system; distinct
    /// sequences may construct the same extension.
    pub fn sequences(&self) -> Vec<SerialisationSequence> {
        log::debug!(
            "enumerating the {} serialisation sequences of a framework with {} arguments",
            self.semantics,
            self.af.n_arguments()
        );
        let mut result = Vec::new();
        let mut current = SerialisationSequence::new();
        self.collect_sequences(&TransitionState::initial(self.af), &mut current, &mut result);
        result
    }

    fn collect_sequences(
        &self,
        state: &TransitionState,
        current: &mut SerialisationSequence,
        result: &mut Vec<SerialisationSequence>,
    ) {
        let initial_sets = InitialSets::compute_in(self.af, state.alive());
        if self.is_terminal(state, &initial_sets) {
            log::trace!("accepted a sequence constructing {:?}", state.constructed());
            result.push(current.clone());
        }
        for chosen in self.candidates(&initial_sets) {
            let next = state.transit(self.af, &chosen);
            current.push(chosen);
            self.collect_sequences(&next, current, result);
            current.pop();
        }
    }

    fn first_terminal(&self, state: &TransitionState) -> Option<Extension> {
        let initial_sets = InitialSets::compute_in(self.af, state.alive());
        if self.is_terminal(state, &initial_sets) {
            return Some(state.constructed().clone());
        }
        self.candidates(&initial_sets)
            .iter()
            .find_map(|chosen| self.first_terminal(&state.transit(self.af, chosen)))
    }

    /// Builds the graph of all the states reachable by the serialisation
    /// process, with the accepted states marked.
    pub fn graph(&self) -> SerialisationGraph {
        let mut graph = SerialisationGraph::new(self.semantics, self.af.n_arguments());
        let mut expanded = HashSet::new();
        self.expand_graph(&TransitionState::initial(self.af), &mut graph, &mut expanded);
        graph
    }

    fn expand_graph(
        &self,
        state: &TransitionState,
        graph: &mut SerialisationGraph,
        expanded: &mut HashSet<usize>,
    ) {
        let node = graph.node_index_or_insert(state.constructed());
        if !expanded.insert(node) {
            return;
        }
        let initial_sets = InitialSets::compute_in(self.af, state.alive());
        if self.is_terminal(state, &initial_sets) {
            graph.mark_accepted(node);
        }
        for chosen in self.candidates(&initial_sets) {
            let next = state.transit(self.af, &chosen);
            let next_node = graph.node_index_or_insert(next.constructed());
            graph.add_edge(node, next_node, chosen);
            self.expand_graph(&next, graph, expanded);
        }
    }
}

impl<T> ExtensionSetComputer<T> for SerialisedExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn semantics(&self) -> Semantics {
        self.semantics
    }

    fn compute_extensions(&mut self) -> Vec<Extension> {
        let n = self.af.n_arguments();
        let mut seen = HashSet::new();
        self.sequences()
            .iter()
            .map(|s| s.extension(n))
            .filter(|ext| seen.insert(ext.clone()))
            .collect()
    }
}

impl<T> SingleExtensionComputer<T> for SerialisedExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Extension> {
        self.first_terminal(&TransitionState::initial(self.af))
    }
}

impl<T> CredulousAcceptanceComputer<T> for SerialisedExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_extensions()
            .iter()
            .any(|ext| ext.contains(arg.id()))
    }
}

impl<T> SkepticalAcceptanceComputer<T> for SerialisedExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_extensions()
            .iter()
            .all(|ext| ext.contains(arg.id()))
    }
}
