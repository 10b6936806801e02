use crate::aa::{Argument, ArgumentSet, Extension, LabelType};
use crate::error::{Error, Result};
use crate::utils::BitSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework owns its arguments and the attacks between them.
/// Attack adjacency is also kept as per-argument bitmasks, which gives O(1)
/// membership tests to the reasoners and lets derived structures share the
/// attack index of the framework they were built from.
#[derive(Default, Clone)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attackers_of: Vec<BitSet>,
    attacked_by: Vec<BitSet>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use redukt::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// assert_eq!(0, framework.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let n = arguments.len();
        AAFramework {
            arguments,
            attacks: vec![],
            attackers_of: (0..n).map(|_| BitSet::new(n)).collect(),
            attacked_by: (0..n).map(|_| BitSet::new(n)).collect(),
        }
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// If an argument with the same label is already defined, nothing changes.
    pub fn new_argument(&mut self, label: T) {
        let old_len = self.arguments.len();
        self.arguments.new_argument(label);
        let new_len = self.arguments.len();
        if new_len > old_len {
            self.attackers_of.iter_mut().for_each(|m| m.grow(new_len));
            self.attacked_by.iter_mut().for_each(|m| m.grow(new_len));
            self.attackers_of.push(BitSet::new(new_len));
            self.attacked_by.push(BitSet::new(new_len));
        }
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If one of the arguments is undefined, a [`MalformedGraph`](Error::MalformedGraph)
    /// error is returned and the framework is left unchanged.
    /// Adding an attack that already exists has no effect: the attack relation
    /// is a set.
    ///
    /// # Example
    ///
    /// ```
    /// # use redukt::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.iter_attacks().count());
    /// assert!(framework.new_attack(&"d", &labels[0]).is_err());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let attacker_id = self.arguments.get_argument_index(from).map_err(|e| {
            Error::MalformedGraph(format!(
                "cannot add an attack from {:?} to {:?}: {}",
                from, to, e
            ))
        })?;
        let attacked_id = self.arguments.get_argument_index(to).map_err(|e| {
            Error::MalformedGraph(format!(
                "cannot add an attack from {:?} to {:?}: {}",
                from, to, e
            ))
        })?;
        self.register_attack(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new attack given the ids of the source and destination arguments.
    ///
    /// If one of the ids is out of range, a [`MalformedGraph`](Error::MalformedGraph)
    /// error is returned.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(Error::MalformedGraph(format!(
                "cannot add an attack from identifiers {} to {}; max id is {}",
                from,
                to,
                n_arguments as isize - 1
            )));
        }
        self.register_attack(from, to);
        Ok(())
    }

    fn register_attack(&mut self, from: usize, to: usize) {
        if !self.attacked_by[from].contains(to) {
            self.attacks.push((from, to));
            self.attacked_by[from].insert(to);
            self.attackers_of[to].insert(from);
        }
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Provides an iterator to the attacks, in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use redukt::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack_by_ids(0, 1).unwrap();
    /// let attack = framework.iter_attacks().next().unwrap();
    /// assert_eq!("a", *attack.attacker().label());
    /// assert_eq!("b", *attack.attacked().label());
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Provides an iterator to the attacks as pairs of argument ids, in
    /// insertion order.
    pub fn iter_attack_ids(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.attacks.iter().copied()
    }

    /// Provides an iterator to the arguments attacking the given one.
    pub fn iter_attackers_of<'a>(
        &'a self,
        arg: &Argument<T>,
    ) -> impl Iterator<Item = &'a Argument<T>> + 'a {
        self.attackers_of[arg.id()]
            .iter()
            .map(|id| self.arguments.get_argument_by_id(id))
    }

    /// Provides an iterator to the arguments attacked by the given one.
    pub fn iter_attacked_by<'a>(
        &'a self,
        arg: &Argument<T>,
    ) -> impl Iterator<Item = &'a Argument<T>> + 'a {
        self.attacked_by[arg.id()]
            .iter()
            .map(|id| self.arguments.get_argument_by_id(id))
    }

    /// Returns the set of ids of the arguments attacking the one with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn attackers_of_mask(&self, id: usize) -> &BitSet {
        &self.attackers_of[id]
    }

    /// Returns the set of ids of the arguments attacked by the one with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn attacked_by_mask(&self, id: usize) -> &BitSet {
        &self.attacked_by[id]
    }

    /// Returns `true` iff the framework contains an attack between the arguments
    /// with the given ids.
    pub fn contains_attack_by_ids(&self, from: usize, to: usize) -> bool {
        from < self.n_arguments() && self.attacked_by[from].contains(to)
    }

    /// Returns `true` iff the argument with the given id attacks itself.
    pub fn is_self_attacking(&self, id: usize) -> bool {
        self.contains_attack_by_ids(id, id)
    }

    /// Returns the set containing the ids of all the arguments.
    pub fn all_arguments_mask(&self) -> BitSet {
        BitSet::full(self.n_arguments())
    }

    /// Builds the subgraph induced by a set of argument ids.
    ///
    /// The result is a new framework containing the arguments whose id belongs
    /// to the set (with fresh dense ids, in the same relative order) and the
    /// attacks with both endpoints in the set.
    ///
    /// # Panics
    ///
    /// Panics if the capacity of the set differs from the number of arguments.
    pub fn induced_subgraph(&self, kept: &BitSet) -> AAFramework<T> {
        assert_eq!(
            self.n_arguments(),
            kept.capacity(),
            "induced subgraph mask does not match the framework"
        );
        let labels: Vec<T> = kept
            .iter()
            .map(|id| self.arguments.get_argument_by_id(id).label().clone())
            .collect();
        let mut result = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        let mut old_to_new = vec![usize::MAX; self.n_arguments()];
        kept.iter().enumerate().for_each(|(new_id, old_id)| {
            old_to_new[old_id] = new_id;
        });
        for (from, to) in &self.attacks {
            if kept.contains(*from) && kept.contains(*to) {
                result.register_attack(old_to_new[*from], old_to_new[*to]);
            }
        }
        result
    }

    /// Provides a lazy iterator over the subgraphs induced by all the subsets
    /// of the argument set.
    ///
    /// The number of subgraphs is exponential in the number of arguments; this
    /// entry point exists for the brute-force reasoners and for small-framework
    /// analyses.
    /// Callers needing scalability must rely on the incremental reasoners
    /// instead.
    pub fn iter_induced_subgraphs(&self) -> impl Iterator<Item = AAFramework<T>> + '_ {
        self.all_arguments_mask()
            .iter_subsets()
            .map(|kept| self.induced_subgraph(&kept))
    }

    /// Returns the set of argument ids surviving the reduct of this framework
    /// with respect to a set of argument ids: everything except the set itself
    /// and the arguments it attacks.
    pub fn reduct_mask(&self, removed_set: &BitSet) -> BitSet {
        let mut surviving = self.all_arguments_mask();
        surviving.subtract(removed_set);
        removed_set
            .iter()
            .for_each(|id| surviving.subtract(&self.attacked_by[id]));
        surviving
    }

    /// Builds the reduct of this framework with respect to an extension.
    ///
    /// The reduct is the residual framework obtained by removing the members of
    /// the extension, the arguments attacked by it, and every attack incident
    /// to a removed argument.
    /// The reduct with respect to the empty extension is the framework itself.
    ///
    /// # Example
    ///
    /// ```
    /// # use redukt::aa::{ArgumentSet, AAFramework, Extension};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"b").unwrap();
    /// framework.new_attack(&"b", &"c").unwrap();
    /// let ext = Extension::from_labels(&framework, &["a"]).unwrap();
    /// let reduct = framework.reduct(&ext);
    /// assert_eq!(1, reduct.n_arguments());
    /// assert!(reduct.argument_set().get_argument(&"c").is_ok());
    /// ```
    pub fn reduct(&self, ext: &Extension) -> AAFramework<T> {
        self.induced_subgraph(&self.reduct_mask(ext.members()))
    }

    /// Provides an iterator to the label couples of the attacks.
    pub fn iter_attack_labels(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.attacks.iter().map(|(a, b)| {
            (
                self.arguments.get_argument_by_id(*a).label(),
                self.arguments.get_argument_by_id(*b).label(),
            )
        })
    }
}
