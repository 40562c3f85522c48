//! Boolean evaluation and truth tables.
//!
//! A formula is evaluated against an [`Assignment`], a map from variable
//! symbols to truth values. Truth tables enumerate every assignment over the
//! formula's free variables in textbook order: variables sorted by symbol,
//! rows running from all-true down to all-false.
//!
//! # Examples
//!
//! ```
//! use equiv_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_atom("p").unwrap();
//! let q = logic.mk_atom("q").unwrap();
//! let f = logic.mk_or(p, q);
//!
//! let table = logic.truth_table(f).unwrap();
//! assert_eq!(table.values().collect::<Vec<_>>(), [true, true, true, false]);
//!
//! // `~(p ∧ q)` and `~p ∨ ~q` agree on every row.
//! let lhs = logic.mk_not(logic.mk_and(p, q));
//! let rhs = logic.mk_or(logic.mk_not(p), logic.mk_not(q));
//! assert!(logic.truth_equivalent(lhs, rhs).unwrap());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use log::debug;

use crate::error::{Error, Result};
use crate::logic::Logic;
use crate::node::Node;
use crate::reference::Ref;
use crate::types::Symbol;

/// A mapping from variable symbols to truth values.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment(BTreeMap<Symbol, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an assignment from raw symbols, validating each one.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, bool)>) -> Result<Self> {
        pairs
            .into_iter()
            .map(|(s, v)| Symbol::new(s).map(|s| (s, v)))
            .collect()
    }

    pub fn insert(&mut self, symbol: Symbol, value: bool) -> Option<bool> {
        self.0.insert(symbol, value)
    }

    pub fn get(&self, symbol: &str) -> Option<bool> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.0.iter().map(|(s, &v)| (s, v))
    }
}

impl FromIterator<(Symbol, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Symbol, bool)>>(iter: I) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

/// Every assignment over `variables`, in truth-table row order.
///
/// Variable `j` of `n` is true in row `i` iff bit `n - 1 - j` of `i` is clear,
/// so the first variable changes slowest and the first row is all-true.
///
/// # Panics
///
/// Panics if there are `usize::BITS` variables or more, since the row count
/// does not fit in a `usize`.
pub fn assignments(variables: &[Symbol]) -> impl Iterator<Item = Assignment> + '_ {
    let n = variables.len();
    assert!(n < usize::BITS as usize, "Too many variables: {}", n);
    (0..1usize << n).map(move |row| {
        variables
            .iter()
            .enumerate()
            .map(|(j, s)| (s.clone(), (row >> (n - 1 - j)) & 1 == 0))
            .collect()
    })
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    pub value: bool,
}

/// The full table of a formula over an ordered set of variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Symbol>,
    rows: Vec<Row>,
}

impl TruthTable {
    pub fn variables(&self) -> &[Symbol] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, always `2^variables().len()`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The value column.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.value)
    }
}

impl Logic {
    /// Evaluates `f` under `assignment`.
    ///
    /// Both operands of a junction are always evaluated, so a variable missing
    /// from the assignment is reported wherever it occurs.
    pub fn value(&self, f: Ref, assignment: &Assignment) -> Result<bool> {
        match self.node(f) {
            Node::Constant(c) => Ok(c.value()),
            Node::Atom(v) => {
                let symbol = self.var_symbol(v);
                assignment
                    .get(symbol.as_str())
                    .ok_or_else(|| Error::UnboundVariable(symbol.to_string()))
            }
            Node::Not(a) => Ok(!self.value(a, assignment)?),
            Node::Junction(j, a, b) => {
                let lhs = self.value(a, assignment)?;
                let rhs = self.value(b, assignment)?;
                Ok(j.combine(lhs, rhs))
            }
        }
    }

    /// The distinct variable symbols occurring in `f`.
    pub fn free_variables(&self, f: Ref) -> BTreeSet<Symbol> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![f];
        while let Some(g) = stack.pop() {
            match self.node(g) {
                Node::Constant(_) => {}
                Node::Atom(v) => {
                    vars.insert(self.var_symbol(v));
                }
                node => stack.extend(node.children()),
            }
        }
        vars
    }

    /// The truth table of `f` over its own free variables.
    ///
    /// Computed once per formula and shared afterwards.
    pub fn truth_table(&self, f: Ref) -> Result<Rc<TruthTable>> {
        if let Some(table) = self.truth_tables.borrow_mut().get(&f) {
            debug!("cache: truth_table({})", f);
            return Ok(Rc::clone(table));
        }

        let variables = self.free_variables(f).into_iter().collect::<Vec<_>>();
        let table = Rc::new(self.truth_table_over(f, &variables)?);
        debug!("computed: truth_table({}) with {} rows", f, table.len());
        self.truth_tables.borrow_mut().insert(f, Rc::clone(&table));
        Ok(table)
    }

    /// The truth table of `f` over `variables`, which must cover its free variables.
    ///
    /// Variables are sorted and deduplicated first, so tables of different
    /// formulas over the same set line up row by row.
    pub fn truth_table_over(&self, f: Ref, variables: &[Symbol]) -> Result<TruthTable> {
        let mut variables = variables.to_vec();
        variables.sort();
        variables.dedup();

        // Row indices are `usize`, so the configured limit is capped below its width.
        let limit = self
            .config()
            .max_truth_table_variables
            .min(usize::BITS as usize - 1);
        if variables.len() > limit {
            return Err(Error::TooManyVariables {
                count: variables.len(),
                limit,
            });
        }

        let rows = assignments(&variables)
            .map(|assignment| {
                let value = self.value(f, &assignment)?;
                Ok(Row { assignment, value })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TruthTable { variables, rows })
    }

    /// Checks whether `f` and `g` agree under every assignment of their combined variables.
    pub fn truth_equivalent(&self, f: Ref, g: Ref) -> Result<bool> {
        let fv = self.free_variables(f);
        let gv = self.free_variables(g);
        if fv == gv {
            let lhs = self.truth_table(f)?;
            let rhs = self.truth_table(g)?;
            return Ok(lhs.values().eq(rhs.values()));
        }

        let variables = fv.union(&gv).cloned().collect::<Vec<_>>();
        let lhs = self.truth_table_over(f, &variables)?;
        let rhs = self.truth_table_over(g, &variables)?;
        Ok(lhs.values().eq(rhs.values()))
    }

    pub fn is_tautology(&self, f: Ref) -> Result<bool> {
        Ok(self.truth_table(f)?.values().all(|v| v))
    }

    pub fn is_contradiction(&self, f: Ref) -> Result<bool> {
        Ok(!self.is_satisfiable(f)?)
    }

    pub fn is_satisfiable(&self, f: Ref) -> Result<bool> {
        Ok(self.truth_table(f)?.values().any(|v| v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicConfig;

    use test_log::test;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    #[test]
    fn test_value_atom() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();

        let t = Assignment::from_pairs([("p", true)]).unwrap();
        let f = Assignment::from_pairs([("p", false)]).unwrap();
        assert_eq!(logic.value(p, &t), Ok(true));
        assert_eq!(logic.value(p, &f), Ok(false));
    }

    #[test]
    fn test_value_unbound() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();

        let only_p = Assignment::from_pairs([("p", false)]).unwrap();
        assert_eq!(
            logic.value(q, &only_p),
            Err(Error::UnboundVariable("q".to_string()))
        );
        // `p ∧ q` is false already from `p`, but `q` is still evaluated.
        assert_eq!(
            logic.value(logic.mk_and(p, q), &only_p),
            Err(Error::UnboundVariable("q".to_string()))
        );
    }

    #[test]
    fn test_value_constants() {
        let logic = Logic::default();
        let empty = Assignment::new();

        assert_eq!(logic.value(logic.tautology(), &empty), Ok(true));
        assert_eq!(logic.value(logic.contradiction(), &empty), Ok(false));
        assert_eq!(logic.value(logic.mk_not(logic.tautology()), &empty), Ok(false));
    }

    #[test]
    fn test_value_connectives() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let and = logic.mk_and(p, q);
        let or = logic.mk_or(p, q);
        let not = logic.mk_not(p);

        for (a, b) in [(true, true), (true, false), (false, true), (false, false)] {
            let asg = Assignment::from_pairs([("p", a), ("q", b)]).unwrap();
            assert_eq!(logic.value(and, &asg), Ok(a && b));
            assert_eq!(logic.value(or, &asg), Ok(a || b));
            assert_eq!(logic.value(not, &asg), Ok(!a));
        }
    }

    #[test]
    fn test_free_variables() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let f = logic.mk_or(logic.mk_and(q, p), logic.mk_not(logic.mk_and(p, logic.tautology())));

        let vars = logic.free_variables(f).into_iter().collect::<Vec<_>>();
        assert_eq!(vars, vec![sym("p"), sym("q")]);
        assert!(logic.free_variables(logic.contradiction()).is_empty());
    }

    #[test]
    fn test_assignments_order() {
        let vars = [sym("p"), sym("q")];
        let rows = assignments(&vars)
            .map(|a| (a.get("p").unwrap(), a.get("q").unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![(true, true), (true, false), (false, true), (false, false)]
        );
    }

    #[test]
    fn test_assignments_empty() {
        let rows = assignments(&[]).collect::<Vec<_>>();
        assert_eq!(rows, vec![Assignment::new()]);
    }

    #[test]
    fn test_truth_table() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let r = logic.mk_atom("r").unwrap();
        let f = logic.mk_and(r, logic.mk_or(p, q));

        let table = logic.truth_table(f).unwrap();
        assert_eq!(table.variables(), &[sym("p"), sym("q"), sym("r")]);
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.values().collect::<Vec<_>>(),
            vec![true, false, true, false, true, false, false, false]
        );
    }

    #[test]
    fn test_truth_table_is_cached() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let f = logic.mk_and(p, q);

        let first = logic.truth_table(f).unwrap();
        let second = logic.truth_table(f).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(logic.truth_table_cache().len(), 1);
        assert_eq!(logic.truth_table_cache().misses(), 1);
        assert_eq!(logic.truth_table_cache().hits(), 1);
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_truth_table_of_constant() {
        let logic = Logic::default();
        let table = logic.truth_table(logic.contradiction()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.variables().is_empty());
        assert_eq!(table.values().collect::<Vec<_>>(), vec![false]);
    }

    #[test]
    fn test_truth_table_limit() {
        let logic = Logic::new(LogicConfig::default().with_max_truth_table_variables(2));
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();
        let r = logic.mk_atom("r").unwrap();
        let f = logic.mk_and(p, logic.mk_and(q, r));

        assert_eq!(
            logic.truth_table(f),
            Err(Error::TooManyVariables { count: 3, limit: 2 })
        );
        assert!(logic.truth_table(logic.mk_and(p, q)).is_ok());
    }

    #[test]
    fn test_truth_table_limit_capped_by_row_width() {
        let logic = Logic::new(LogicConfig::default().with_max_truth_table_variables(100));
        let width = usize::BITS as usize;
        let f = (1..width)
            .map(|i| logic.mk_atom(&format!("v{}", i)).unwrap())
            .fold(logic.mk_atom("v0").unwrap(), |acc, v| logic.mk_and(acc, v));

        assert_eq!(
            logic.truth_table(f),
            Err(Error::TooManyVariables {
                count: width,
                limit: width - 1
            })
        );
    }

    #[test]
    #[should_panic(expected = "Too many variables")]
    fn test_assignments_too_wide() {
        let vars = (0..usize::BITS)
            .map(|i| sym(&format!("v{}", i)))
            .collect::<Vec<_>>();
        let _ = assignments(&vars);
    }

    #[test]
    fn test_truth_table_over_superset() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();

        let table = logic.truth_table_over(p, &[sym("q"), sym("p"), sym("q")]).unwrap();
        assert_eq!(table.variables(), &[sym("p"), sym("q")]);
        assert_eq!(table.values().collect::<Vec<_>>(), vec![true, true, false, false]);
    }

    #[test]
    fn test_truth_table_over_missing_variable() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();

        assert_eq!(
            logic.truth_table_over(logic.mk_or(p, q), &[sym("p")]),
            Err(Error::UnboundVariable("q".to_string()))
        );
    }

    #[test]
    fn test_truth_equivalent() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let q = logic.mk_atom("q").unwrap();

        assert!(logic.truth_equivalent(logic.mk_and(p, q), logic.mk_and(q, p)).unwrap());
        assert!(!logic.truth_equivalent(logic.mk_and(p, q), logic.mk_or(p, q)).unwrap());
        // Different variable sets: `p ∨ (q ∧ ~q)` only depends on `p`.
        let g = logic.mk_or(p, logic.mk_and(q, logic.mk_not(q)));
        assert!(logic.truth_equivalent(p, g).unwrap());
        assert!(!logic.truth_equivalent(p, q).unwrap());
        // `p ∨ ~p` against the constant.
        let excluded_middle = logic.mk_or(p, logic.mk_not(p));
        assert!(logic.truth_equivalent(excluded_middle, logic.tautology()).unwrap());
    }

    #[test]
    fn test_tautology_and_contradiction() {
        let logic = Logic::default();
        let p = logic.mk_atom("p").unwrap();
        let not_p = logic.mk_not(p);

        assert_eq!(logic.is_tautology(logic.mk_or(p, not_p)), Ok(true));
        assert_eq!(logic.is_contradiction(logic.mk_and(p, not_p)), Ok(true));
        assert_eq!(logic.is_tautology(p), Ok(false));
        assert_eq!(logic.is_contradiction(p), Ok(false));
        assert_eq!(logic.is_satisfiable(p), Ok(true));
        assert_eq!(logic.is_satisfiable(logic.contradiction()), Ok(false));
    }
}
