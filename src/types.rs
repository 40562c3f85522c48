//! Type-safe wrappers for variable symbols and connectives.
//!
//! This module provides the small vocabulary the rest of the crate is built
//! from: validated variable [`Symbol`]s, the two binary [`Junction`]s, the two
//! [`Constant`]s, and the [`Connective`] tag used by arity-checked construction.
use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};

pub const AND_SYMBOL: &str = "∧";
pub const OR_SYMBOL: &str = "∨";
pub const NOT_SYMBOL: &str = "~";
pub const IMPLIES_SYMBOL: &str = "->";

pub const TAUTOLOGY_SYMBOL: &str = "t";
pub const CONTRADICTION_SYMBOL: &str = "c";

/// Symbols that can never name a variable.
pub const RESERVED_SYMBOLS: [&str; 6] = [
    AND_SYMBOL,
    NOT_SYMBOL,
    OR_SYMBOL,
    IMPLIES_SYMBOL,
    TAUTOLOGY_SYMBOL,
    CONTRADICTION_SYMBOL,
];

/// A propositional variable symbol, such as `p` or `q1`.
///
/// # Invariants
///
/// - The symbol is non-empty and is not one of [`RESERVED_SYMBOLS`].
/// - It contains no whitespace, no parentheses and no connective glyph, so the
///   display string of any formula is unambiguous.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol, rejecting reserved or ambiguous names.
    pub fn new(symbol: impl Into<String>) -> Result<Self> {
        let symbol = symbol.into();
        if Self::is_valid(&symbol) {
            Ok(Symbol(symbol))
        } else {
            Err(Error::ReservedSymbol(symbol))
        }
    }

    fn is_valid(symbol: &str) -> bool {
        if symbol.is_empty() || RESERVED_SYMBOLS.contains(&symbol) {
            return false;
        }
        let glyphs = [AND_SYMBOL, OR_SYMBOL, NOT_SYMBOL, IMPLIES_SYMBOL];
        !symbol
            .chars()
            .any(|c| c.is_whitespace() || c == '(' || c == ')')
            && !glyphs.iter().any(|g| symbol.contains(g))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Symbol::new(value)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Index of an interned variable symbol inside a manager.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    pub(crate) fn new(id: u32) -> Self {
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Junction {
    And,
    Or,
}

impl Junction {
    /// Returns `Or` for `And` and vice versa.
    pub fn opposite(self) -> Self {
        match self {
            Junction::And => Junction::Or,
            Junction::Or => Junction::And,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Junction::And => AND_SYMBOL,
            Junction::Or => OR_SYMBOL,
        }
    }

    /// Combines two truth values with this connective.
    pub fn combine(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Junction::And => lhs && rhs,
            Junction::Or => lhs || rhs,
        }
    }

    /// The constant that leaves the other operand unchanged (`a ∧ t = a`, `a ∨ c = a`).
    pub fn identity(self) -> Constant {
        match self {
            Junction::And => Constant::Tautology,
            Junction::Or => Constant::Contradiction,
        }
    }

    /// The constant that absorbs the other operand (`a ∧ c = c`, `a ∨ t = t`).
    pub fn absorbing(self) -> Constant {
        self.identity().negate()
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the two formulas that do not depend on any assignment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Constant {
    Tautology,
    Contradiction,
}

impl Constant {
    pub fn value(self) -> bool {
        matches!(self, Constant::Tautology)
    }

    pub fn negate(self) -> Self {
        match self {
            Constant::Tautology => Constant::Contradiction,
            Constant::Contradiction => Constant::Tautology,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Tautology => TAUTOLOGY_SYMBOL,
            Constant::Contradiction => CONTRADICTION_SYMBOL,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Connective tag for arity-checked construction, see
/// [`Logic::mk_connective`][crate::logic::Logic::mk_connective].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    Not,
    Junction(Junction),
}

impl Connective {
    pub const AND: Connective = Connective::Junction(Junction::And);
    pub const OR: Connective = Connective::Junction(Junction::Or);

    /// Number of operands the connective takes.
    pub fn arity(self) -> usize {
        match self {
            Connective::Not => 1,
            Connective::Junction(_) => 2,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::Not => f.write_str(NOT_SYMBOL),
            Connective::Junction(j) => write!(f, "{}", j),
        }
    }
}
