//! The formula manager.
//!
//! Every formula lives in a [`Logic`] manager and is addressed by a [`Ref`].
//! Construction goes through the manager, which hash-conses nodes: building
//! the same formula twice yields the same handle, so structural equality of
//! formulas is plain equality of handles. Nothing is ever mutated in place.
//!
//! # Examples
//!
//! ```
//! use equiv_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_atom("p").unwrap();
//! let q = logic.mk_atom("q").unwrap();
//!
//! let f = logic.mk_and(p, logic.mk_not(q));
//! assert_eq!(logic.symbol(f), "(p ∧ ~q)");
//!
//! // Same structure, same handle.
//! assert_eq!(f, logic.mk_and(p, logic.mk_not(q)));
//! // Different order, different formula.
//! assert_ne!(f, logic.mk_and(logic.mk_not(q), p));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Write};
use std::rc::Rc;

use log::debug;

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::eval::TruthTable;
use crate::law::Law;
use crate::node::Node;
use crate::reference::Ref;
use crate::table::Table;
use crate::types::{Connective, Constant, Junction, Symbol, Var};

/// Configuration of a [`Logic`] manager.
///
/// # Examples
///
/// ```
/// use equiv_rs::logic::{Logic, LogicConfig};
///
/// let config = LogicConfig::default().with_max_truth_table_variables(8);
/// let logic = Logic::new(config);
/// assert_eq!(logic.config().max_truth_table_variables, 8);
/// ```
#[derive(Debug, Clone)]
pub struct LogicConfig {
    /// Log2 of the number of hash buckets in the node table (default: 16, at most 31).
    pub storage_bits: usize,
    /// Largest number of variables a truth table may range over (default: 16).
    pub max_truth_table_variables: usize,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            storage_bits: 16,
            max_truth_table_variables: 16,
        }
    }
}

impl LogicConfig {
    pub fn with_storage_bits(mut self, storage_bits: usize) -> Self {
        self.storage_bits = storage_bits;
        self
    }

    pub fn with_max_truth_table_variables(mut self, limit: usize) -> Self {
        self.max_truth_table_variables = limit;
        self
    }
}

pub struct Logic {
    storage: RefCell<Table<Node>>,
    variables: RefCell<Vec<Symbol>>,
    variable_index: RefCell<HashMap<Symbol, Var>>,
    pub(crate) truth_tables: RefCell<Cache<Ref, Rc<TruthTable>>>,
    pub(crate) equivalents: RefCell<Cache<Ref, Rc<[(Ref, Law)]>>>,
    config: LogicConfig,
    top: Ref,
    bottom: Ref,
}

impl Logic {
    pub fn new(config: LogicConfig) -> Self {
        assert!(
            config.storage_bits <= 31,
            "Storage bits should be in the range 0..=31"
        );

        let mut storage = Table::new(config.storage_bits);
        let top = Ref::new(storage.put(Node::Constant(Constant::Tautology)) as u32);
        let bottom = Ref::new(storage.put(Node::Constant(Constant::Contradiction)) as u32);
        let cache_bits = config.storage_bits.min(12);

        Self {
            storage: RefCell::new(storage),
            variables: RefCell::new(Vec::new()),
            variable_index: RefCell::new(HashMap::new()),
            truth_tables: RefCell::new(Cache::new(cache_bits)),
            equivalents: RefCell::new(Cache::new(cache_bits)),
            config,
            top,
            bottom,
        }
    }

    pub fn config(&self) -> &LogicConfig {
        &self.config
    }

    /// Memoized truth tables, keyed by formula.
    pub fn truth_table_cache(&self) -> std::cell::Ref<'_, Cache<Ref, Rc<TruthTable>>> {
        self.truth_tables.borrow()
    }

    /// Memoized one-step equivalents, keyed by formula.
    pub fn equivalents_cache(&self) -> std::cell::Ref<'_, Cache<Ref, Rc<[(Ref, Law)]>>> {
        self.equivalents.borrow()
    }
}

impl Default for Logic {
    fn default() -> Self {
        Logic::new(LogicConfig::default())
    }
}

impl Debug for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logic")
            .field("nodes", &self.num_nodes())
            .field("variables", &self.num_variables())
            .field("truth_tables", &self.truth_tables.borrow().len())
            .field("equivalents", &self.equivalents.borrow().len())
            .finish()
    }
}

// Construction
impl Logic {
    /// The constant that is true under every assignment.
    pub fn tautology(&self) -> Ref {
        self.top
    }

    /// The constant that is false under every assignment.
    pub fn contradiction(&self) -> Ref {
        self.bottom
    }

    pub fn mk_constant(&self, constant: Constant) -> Ref {
        match constant {
            Constant::Tautology => self.top,
            Constant::Contradiction => self.bottom,
        }
    }

    pub fn mk_node(&self, node: Node) -> Ref {
        let i = self.storage.borrow_mut().put(node);
        let res = Ref::new(i as u32);
        debug!("mk({:?}) -> {}", node, res);
        res
    }

    /// Interns `symbol` and returns the atom for it.
    pub fn mk_var(&self, symbol: &Symbol) -> Ref {
        let existing = self.variable_index.borrow().get(symbol).copied();
        let var = match existing {
            Some(var) => var,
            None => {
                let mut variables = self.variables.borrow_mut();
                let var = Var::new(variables.len() as u32);
                variables.push(symbol.clone());
                self.variable_index.borrow_mut().insert(symbol.clone(), var);
                var
            }
        };
        self.mk_node(Node::Atom(var))
    }

    /// Creates an atom, failing if `symbol` is reserved.
    pub fn mk_atom(&self, symbol: &str) -> Result<Ref> {
        let symbol = Symbol::new(symbol)?;
        Ok(self.mk_var(&symbol))
    }

    pub fn mk_not(&self, f: Ref) -> Ref {
        self.mk_node(Node::Not(f))
    }

    pub fn mk_junction(&self, junction: Junction, lhs: Ref, rhs: Ref) -> Ref {
        self.mk_node(Node::Junction(junction, lhs, rhs))
    }

    pub fn mk_and(&self, lhs: Ref, rhs: Ref) -> Ref {
        self.mk_junction(Junction::And, lhs, rhs)
    }

    pub fn mk_or(&self, lhs: Ref, rhs: Ref) -> Ref {
        self.mk_junction(Junction::Or, lhs, rhs)
    }

    /// Applies `connective` to `operands`, checking the arity first.
    ///
    /// # Examples
    ///
    /// ```
    /// use equiv_rs::error::Error;
    /// use equiv_rs::logic::Logic;
    /// use equiv_rs::types::Connective;
    ///
    /// let logic = Logic::default();
    /// let p = logic.mk_atom("p").unwrap();
    ///
    /// assert!(matches!(
    ///     logic.mk_connective(Connective::AND, &[p]),
    ///     Err(Error::Arity { expected: 2, actual: 1, .. })
    /// ));
    /// assert_eq!(logic.mk_connective(Connective::Not, &[p]), Ok(logic.mk_not(p)));
    /// ```
    pub fn mk_connective(&self, connective: Connective, operands: &[Ref]) -> Result<Ref> {
        match (connective, operands) {
            (Connective::Not, &[a]) => Ok(self.mk_not(a)),
            (Connective::Junction(j), &[a, b]) => Ok(self.mk_junction(j, a, b)),
            _ => Err(Error::Arity {
                connective,
                expected: connective.arity(),
                actual: operands.len(),
            }),
        }
    }
}

// Accessors
impl Logic {
    pub fn node(&self, f: Ref) -> Node {
        *self.storage.borrow().value(f.index())
    }

    pub fn num_nodes(&self) -> usize {
        self.storage.borrow().size()
    }

    pub fn num_variables(&self) -> usize {
        self.variables.borrow().len()
    }

    pub fn var_symbol(&self, var: Var) -> Symbol {
        self.variables.borrow()[var.id() as usize].clone()
    }

    pub fn is_atom(&self, f: Ref) -> bool {
        matches!(self.node(f), Node::Atom(_))
    }
    pub fn is_constant(&self, f: Ref) -> bool {
        matches!(self.node(f), Node::Constant(_))
    }
    pub fn is_negation(&self, f: Ref) -> bool {
        matches!(self.node(f), Node::Not(_))
    }
    pub fn is_junction(&self, f: Ref) -> bool {
        matches!(self.node(f), Node::Junction(..))
    }

    pub fn constant(&self, f: Ref) -> Option<Constant> {
        match self.node(f) {
            Node::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn junction(&self, f: Ref) -> Option<Junction> {
        match self.node(f) {
            Node::Junction(j, _, _) => Some(j),
            _ => None,
        }
    }

    /// The operand of a negation.
    pub fn negated(&self, f: Ref) -> Option<Ref> {
        match self.node(f) {
            Node::Not(a) => Some(a),
            _ => None,
        }
    }

    pub fn children(&self, f: Ref) -> Vec<Ref> {
        self.node(f).children()
    }

    /// Number of nodes in the formula tree, counting shared subterms once per occurrence.
    pub fn size(&self, f: Ref) -> usize {
        1 + self
            .children(f)
            .into_iter()
            .map(|c| self.size(c))
            .sum::<usize>()
    }

    pub fn depth(&self, f: Ref) -> usize {
        1 + self
            .children(f)
            .into_iter()
            .map(|c| self.depth(c))
            .max()
            .unwrap_or(0)
    }
}

// Display
impl Logic {
    /// The canonical display string of `f`, such as `(p ∧ ~q)`.
    ///
    /// Distinct formulas always print differently, so this string can serve as
    /// a node key wherever a textual key is wanted.
    pub fn symbol(&self, f: Ref) -> String {
        let mut s = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_symbol(&mut s, f);
        s
    }

    pub fn display(&self, f: Ref) -> FormulaDisplay<'_> {
        FormulaDisplay { logic: self, f }
    }

    fn write_symbol(&self, out: &mut impl Write, f: Ref) -> fmt::Result {
        match self.node(f) {
            Node::Constant(c) => out.write_str(c.symbol()),
            Node::Atom(v) => out.write_str(self.var_symbol(v).as_str()),
            Node::Not(a) => {
                out.write_str(crate::types::NOT_SYMBOL)?;
                self.write_symbol(out, a)
            }
            Node::Junction(j, a, b) => {
                out.write_char('(')?;
                self.write_symbol(out, a)?;
                write!(out, " {} ", j)?;
                self.write_symbol(out, b)?;
                out.write_char(')')
            }
        }
    }
}

/// Borrowed [`Display`] adapter for a formula.
pub struct FormulaDisplay<'a> {
    logic: &'a Logic,
    f: Ref,
}

impl Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.logic.write_symbol(f, self.f)
    }
}
