//! Error types for formula construction, evaluation and rewriting.

use thiserror::Error;

use crate::law::Law;
use crate::types::Connective;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A variable was given a reserved or ambiguous symbol.
    #[error("'{0}' cannot be used as a variable symbol")]
    ReservedSymbol(String),

    /// A connective was given the wrong number of operands.
    #[error("connective {connective} takes {expected} operand(s), got {actual}")]
    Arity {
        connective: Connective,
        expected: usize,
        actual: usize,
    },

    /// Evaluation reached a variable missing from the assignment.
    #[error("variable '{0}' is not bound in the assignment")]
    UnboundVariable(String),

    /// A law was applied to a formula it is not eligible for.
    #[error("{law} is not applicable to {formula}")]
    LawNotApplicable { law: Law, formula: String },

    /// The truth table would have more rows than the configured bound allows.
    #[error("truth table over {count} variables exceeds the limit of {limit}")]
    TooManyVariables { count: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
