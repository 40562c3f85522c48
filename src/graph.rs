//! Breadth-first exploration of the equivalence graph.
//!
//! Starting from a source formula, every round expands the whole frontier
//! with [`Logic::one_step_equivalents`] and keeps the formulas not seen
//! before as the next frontier. Laws such as `ReverseDoubleNegative` make the
//! reachable set infinite, so the search is cut off after a fixed number of
//! rounds.
//!
//! Nodes are deduplicated by formula handle. Since handles are hash-consed and
//! display strings are unambiguous, this is the same as deduplicating by the
//! display symbol.
//!
//! # Examples
//!
//! ```
//! use equiv_rs::graph::explore_from;
//! use equiv_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_atom("p").unwrap();
//! let q = logic.mk_atom("q").unwrap();
//! let f = logic.mk_and(p, q);
//!
//! let graph = explore_from(&logic, f, 1);
//! assert_eq!(graph.rounds(), 1);
//! assert!(graph.contains(logic.mk_and(q, p)));
//! for edge in graph.edges(&logic) {
//!     assert!(graph.contains(edge.to));
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::law::Law;
use crate::logic::Logic;
use crate::reference::Ref;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of expansion rounds (default: 20).
    pub round_budget: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { round_budget: 20 }
    }
}

impl SearchConfig {
    pub fn with_round_budget(mut self, round_budget: usize) -> Self {
        self.round_budget = round_budget;
        self
    }
}

/// A discovered formula.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GraphNode {
    pub formula: Ref,
    /// Display string of the formula.
    pub symbol: String,
    /// Round in which the formula was discovered, `0` for the source.
    pub round: usize,
    /// Whether the one-step equivalents of the formula were explored.
    pub expanded: bool,
}

/// A rewrite from one node to another, licensed by `law`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Edge {
    pub from: Ref,
    pub to: Ref,
    pub law: Law,
}

/// The result of a search: discovered nodes in discovery order.
#[derive(Debug, Clone)]
pub struct EquivalenceGraph {
    source: Ref,
    nodes: Vec<GraphNode>,
    index: HashMap<Ref, usize>,
    rounds: usize,
    closed: bool,
}

impl EquivalenceGraph {
    fn new(logic: &Logic, source: Ref) -> Self {
        let mut graph = Self {
            source,
            nodes: Vec::new(),
            index: HashMap::new(),
            rounds: 0,
            closed: false,
        };
        graph.discover(logic, source, 0);
        graph
    }

    /// Adds `f` as a new node, returning `false` if it was already present.
    fn discover(&mut self, logic: &Logic, f: Ref, round: usize) -> bool {
        if self.index.contains_key(&f) {
            return false;
        }
        self.index.insert(f, self.nodes.len());
        self.nodes.push(GraphNode {
            formula: f,
            symbol: logic.symbol(f),
            round,
            expanded: false,
        });
        true
    }

    fn mark_expanded(&mut self, f: Ref) {
        if let Some(&i) = self.index.get(&f) {
            self.nodes[i].expanded = true;
        }
    }

    pub fn source(&self) -> Ref {
        self.source
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, f: Ref) -> bool {
        self.index.contains_key(&f)
    }

    pub fn node(&self, f: Ref) -> Option<&GraphNode> {
        self.index.get(&f).map(|&i| &self.nodes[i])
    }

    /// Number of rounds actually run.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns `true` if the search ran out of new formulas before the budget
    /// was spent, i.e. the node set is the whole reachable component.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The outgoing edges of `f`, if it is an expanded node.
    ///
    /// Parallel edges licensed by different laws are all kept.
    pub fn edges_from(&self, logic: &Logic, f: Ref) -> Vec<Edge> {
        match self.node(f) {
            Some(node) if node.expanded => logic
                .one_step_equivalents(f)
                .iter()
                .map(|&(to, law)| Edge { from: f, to, law })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// All edges out of expanded nodes. Both endpoints of every edge are in the graph.
    pub fn edges(&self, logic: &Logic) -> Vec<Edge> {
        self.nodes
            .iter()
            .flat_map(|node| self.edges_from(logic, node.formula))
            .collect()
    }

    /// Number of edges licensed by each law.
    pub fn laws_used(&self, logic: &Logic) -> BTreeMap<Law, usize> {
        let mut counts = BTreeMap::new();
        for edge in self.edges(logic) {
            *counts.entry(edge.law).or_insert(0) += 1;
        }
        counts
    }
}

/// Explores the formulas reachable from `source` in at most `round_budget` rounds.
pub fn explore_from(logic: &Logic, source: Ref, round_budget: usize) -> EquivalenceGraph {
    explore_with_config(logic, source, &SearchConfig::default().with_round_budget(round_budget))
}

pub fn explore_with_config(logic: &Logic, source: Ref, config: &SearchConfig) -> EquivalenceGraph {
    debug!(
        "explore(source = {}, round_budget = {})",
        logic.display(source),
        config.round_budget
    );

    let mut graph = EquivalenceGraph::new(logic, source);
    let mut frontier = vec![source];
    let mut remaining = config.round_budget;

    while !frontier.is_empty() && remaining > 0 {
        let round = graph.rounds + 1;
        let mut next = Vec::new();

        for &f in frontier.iter() {
            for &(g, _) in logic.one_step_equivalents(f).iter() {
                if graph.discover(logic, g, round) {
                    next.push(g);
                }
            }
            graph.mark_expanded(f);
        }

        debug!(
            "round {}: expanded {}, discovered {}, total {}",
            round,
            frontier.len(),
            next.len(),
            graph.len()
        );

        graph.rounds = round;
        remaining -= 1;
        frontier = next;
    }

    graph.closed = frontier.is_empty();
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    #[test]
    fn test_default_config() {
        assert_eq!(SearchConfig::default().round_budget, 20);
        assert_eq!(SearchConfig::default().with_round_budget(3).round_budget, 3);
    }

    #[test]
    fn test_zero_budget() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();

        let graph = explore_from(&logic, p, 0);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.rounds(), 0);
        assert!(!graph.is_closed());
        assert!(!graph.nodes()[0].expanded);
        assert_eq!(graph.nodes()[0].symbol, "p");
        assert!(graph.edges(&logic).is_empty());
    }

    #[test]
    fn test_single_round() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let f = logic.mk_and(p, q);

        let graph = explore_from(&logic, f, 1);
        let symbols = graph.nodes().iter().map(|n| n.symbol.as_str()).collect::<Vec<_>>();
        assert_eq!(
            symbols,
            vec!["(p ∧ q)", "(q ∧ p)", "~~(p ∧ q)", "(~~p ∧ q)", "(p ∧ ~~q)"]
        );
        assert_eq!(graph.source(), f);
        assert_eq!(graph.node(f).map(|n| n.round), Some(0));
        assert_eq!(graph.node(logic.mk_and(q, p)).map(|n| n.round), Some(1));
        assert!(graph.node(f).unwrap().expanded);
        assert!(!graph.node(logic.mk_and(q, p)).unwrap().expanded);
    }

    #[test]
    fn test_edges() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let f = logic.mk_and(p, q);
        let swapped = logic.mk_and(q, p);

        let graph = explore_from(&logic, f, 2);
        let edges = graph.edges(&logic);
        assert!(edges.contains(&Edge { from: f, to: swapped, law: Law::Commutative }));
        assert!(edges.contains(&Edge { from: swapped, to: f, law: Law::Commutative }));
        for edge in &edges {
            assert!(graph.contains(edge.from));
            assert!(graph.contains(edge.to));
        }
        assert_eq!(graph.edges_from(&logic, f).len(), logic.one_step_equivalents(f).len());
    }

    #[test]
    fn test_edges_from_unexpanded() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let f = logic.mk_or(p, q);

        let graph = explore_from(&logic, f, 1);
        assert!(graph.edges_from(&logic, logic.mk_or(q, p)).is_empty());
        assert!(graph.edges_from(&logic, logic.mk_and(p, q)).is_empty());
    }

    #[test]
    fn test_unique_symbols() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let f = logic.mk_or(p, logic.mk_and(p, q));

        let graph = explore_from(&logic, f, 3);
        let symbols = graph.nodes().iter().map(|n| &n.symbol).collect::<HashSet<_>>();
        assert_eq!(symbols.len(), graph.len());
        assert!(graph.rounds() <= 3);
        assert!(graph.nodes().iter().all(|n| n.round <= graph.rounds()));
        // Absorption is one step away.
        assert_eq!(graph.node(p).map(|n| n.round), Some(1));
    }

    #[test]
    fn test_laws_used() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();

        let graph = explore_from(&logic, p, 1);
        let counts = graph.laws_used(&logic);
        assert_eq!(counts.get(&Law::ReverseDoubleNegative), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), graph.edges(&logic).len());
    }
}
