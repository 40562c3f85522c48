//! The catalog of equivalence laws.
//!
//! Each [`Law`] pairs an eligibility test with a structural transform. Laws
//! are pure: they only construct new formulas through the manager and never
//! touch their input. In the notation below `•` is the outer connective of a
//! junction and `∘` is its opposite.
//!
//! | Law | Rewrite |
//! |---|---|
//! | Commutative | `a•b → b•a` |
//! | Associative | `(a•b)•c → a•(b•c)` |
//! | ReverseAssociative | `a•(b•c) → (a•b)•c` |
//! | Distributive | `a•(b∘c) → (a•b)∘(a•c)`, `a` an atom |
//! | ReverseDistributive | `(a∘b)•(a∘c) → a∘(b•c)` |
//! | Identity | `a∧t → a`, `a∨c → a` |
//! | UniversalBound | `a∨t → t`, `a∧c → c` |
//! | NegationLaw | `a∨~a → t`, `a∧~a → c` |
//! | DoubleNegative | `~~a → a` |
//! | ReverseDoubleNegative | `a → ~~a`, `a` not a negation |
//! | Idempotent | `a•a → a` |
//! | DeMorgan | `~(a•b) → ~a∘~b` |
//! | ReverseDeMorgan | `~a•~b → ~(a∘b)` |
//! | Absorption | `a•(a∘b) → a`, `a ≠ b` |
//! | ContradictionNegation | `~c → t` |
//! | TautologyNegation | `~t → c` |

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::logic::Logic;
use crate::node::Node;
use crate::reference::Ref;
use crate::types::{Constant, Junction};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Law {
    Commutative,
    Associative,
    ReverseAssociative,
    Distributive,
    ReverseDistributive,
    Identity,
    UniversalBound,
    NegationLaw,
    DoubleNegative,
    ReverseDoubleNegative,
    Idempotent,
    DeMorgan,
    ReverseDeMorgan,
    Absorption,
    ContradictionNegation,
    TautologyNegation,
}

impl Law {
    /// Every law, in the order rewrites are generated.
    pub const ALL: [Law; 16] = [
        Law::Commutative,
        Law::Associative,
        Law::ReverseAssociative,
        Law::Distributive,
        Law::ReverseDistributive,
        Law::Identity,
        Law::UniversalBound,
        Law::NegationLaw,
        Law::DoubleNegative,
        Law::ReverseDoubleNegative,
        Law::Idempotent,
        Law::DeMorgan,
        Law::ReverseDeMorgan,
        Law::Absorption,
        Law::ContradictionNegation,
        Law::TautologyNegation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Law::Commutative => "Commutative Law",
            Law::Associative => "Associative Law",
            Law::ReverseAssociative => "Reverse Associative Law",
            Law::Distributive => "Distributive Law",
            Law::ReverseDistributive => "Reverse Distributive Law",
            Law::Identity => "Identity Law",
            Law::UniversalBound => "Universal Bound Law",
            Law::NegationLaw => "Negation Law",
            Law::DoubleNegative => "Double Negative Law",
            Law::ReverseDoubleNegative => "Reverse Double Negative Law",
            Law::Idempotent => "Idempotent Law",
            Law::DeMorgan => "De Morgan's Law",
            Law::ReverseDeMorgan => "Reverse De Morgan's Law",
            Law::Absorption => "Absorption Law",
            Law::ContradictionNegation => "Contradiction Negation",
            Law::TautologyNegation => "Tautology Negation",
        }
    }

    /// Short label, suitable for graph edges.
    pub fn short_name(self) -> &'static str {
        match self {
            Law::Commutative => "COM",
            Law::Associative => "AS",
            Law::ReverseAssociative => "RAS",
            Law::Distributive => "DIS",
            Law::ReverseDistributive => "RDIS",
            Law::Identity => "ID",
            Law::UniversalBound => "UB",
            Law::NegationLaw => "NEG",
            Law::DoubleNegative => "DN",
            Law::ReverseDoubleNegative => "RDN",
            Law::Idempotent => "IDEM",
            Law::DeMorgan => "DM",
            Law::ReverseDeMorgan => "RDM",
            Law::Absorption => "ABS",
            Law::ContradictionNegation => "CN",
            Law::TautologyNegation => "TN",
        }
    }

    /// Checks whether the law can be applied at the root of `f`.
    pub fn eligible(self, logic: &Logic, f: Ref) -> bool {
        self.transform(logic, f, false).is_some()
    }

    /// Applies the law at the root of `f`.
    ///
    /// Fails with [`Error::LawNotApplicable`] when `f` does not have the shape
    /// the law rewrites.
    ///
    /// # Examples
    ///
    /// ```
    /// use equiv_rs::law::Law;
    /// use equiv_rs::logic::Logic;
    ///
    /// let logic = Logic::default();
    /// let p = logic.mk_atom("p").unwrap();
    /// let q = logic.mk_atom("q").unwrap();
    ///
    /// let f = Law::Commutative.apply(&logic, logic.mk_and(p, q)).unwrap();
    /// assert_eq!(logic.symbol(f), "(q ∧ p)");
    /// assert!(Law::DeMorgan.apply(&logic, p).is_err());
    /// ```
    pub fn apply(self, logic: &Logic, f: Ref) -> Result<Ref> {
        self.try_apply(logic, f).ok_or_else(|| Error::LawNotApplicable {
            law: self,
            formula: logic.symbol(f),
        })
    }

    /// Applies the law at the root of `f`, or returns `None` if it is not eligible.
    pub fn try_apply(self, logic: &Logic, f: Ref) -> Option<Ref> {
        let res = self.transform(logic, f, true)?;
        debug!("{}: {} -> {}", self.short_name(), logic.display(f), logic.display(res));
        Some(res)
    }

    /// Matches `f` against the law's pattern, building the rewritten formula
    /// only when `build` is set. With `build == false` the returned handle is
    /// `f` itself and nothing is interned.
    fn transform(self, logic: &Logic, f: Ref, build: bool) -> Option<Ref> {
        let node = logic.node(f);
        let done = |make: &dyn Fn() -> Ref| if build { make() } else { f };

        match self {
            Law::Commutative => {
                let (j, a, b) = as_junction(node)?;
                Some(done(&|| logic.mk_junction(j, b, a)))
            }

            Law::Associative => {
                let (j, l, c) = as_junction(node)?;
                let (jl, a, b) = as_junction(logic.node(l))?;
                (jl == j).then(|| done(&|| logic.mk_junction(j, a, logic.mk_junction(j, b, c))))
            }

            Law::ReverseAssociative => {
                let (j, a, r) = as_junction(node)?;
                let (jr, b, c) = as_junction(logic.node(r))?;
                (jr == j).then(|| done(&|| logic.mk_junction(j, logic.mk_junction(j, a, b), c)))
            }

            Law::Distributive => {
                let (j, a, r) = as_junction(node)?;
                let (o, b, c) = as_junction(logic.node(r))?;
                (logic.is_atom(a) && o == j.opposite()).then(|| {
                    done(&|| logic.mk_junction(o, logic.mk_junction(j, a, b), logic.mk_junction(j, a, c)))
                })
            }

            Law::ReverseDistributive => {
                let (o, l, r) = as_junction(node)?;
                let (jl, a, b) = as_junction(logic.node(l))?;
                let (jr, a2, c) = as_junction(logic.node(r))?;
                (jl == o.opposite() && jr == jl && a == a2)
                    .then(|| done(&|| logic.mk_junction(jl, a, logic.mk_junction(o, b, c))))
            }

            Law::Identity => {
                let (j, a, r) = as_junction(node)?;
                (logic.constant(r) == Some(j.identity())).then(|| done(&|| a))
            }

            Law::UniversalBound => {
                let (j, _, r) = as_junction(node)?;
                let bound = j.absorbing();
                (logic.constant(r) == Some(bound)).then(|| done(&|| logic.mk_constant(bound)))
            }

            Law::NegationLaw => {
                let (j, a, r) = as_junction(node)?;
                (logic.negated(r) == Some(a)).then(|| done(&|| logic.mk_constant(j.absorbing())))
            }

            Law::DoubleNegative => {
                let inner = as_not(node)?;
                let a = logic.negated(inner)?;
                Some(done(&|| a))
            }

            Law::ReverseDoubleNegative => {
                as_not(node)
                    .is_none()
                    .then(|| done(&|| logic.mk_not(logic.mk_not(f))))
            }

            Law::Idempotent => {
                let (_, a, b) = as_junction(node)?;
                (a == b).then(|| done(&|| a))
            }

            Law::DeMorgan => {
                let inner = as_not(node)?;
                let (j, a, b) = as_junction(logic.node(inner))?;
                Some(done(&|| {
                    logic.mk_junction(j.opposite(), logic.mk_not(a), logic.mk_not(b))
                }))
            }

            Law::ReverseDeMorgan => {
                let (j, l, r) = as_junction(node)?;
                let a = logic.negated(l)?;
                let b = logic.negated(r)?;
                Some(done(&|| logic.mk_not(logic.mk_junction(j.opposite(), a, b))))
            }

            Law::Absorption => {
                let (j, a, r) = as_junction(node)?;
                let (o, a2, b) = as_junction(logic.node(r))?;
                (o == j.opposite() && a == a2 && a != b).then(|| done(&|| a))
            }

            Law::ContradictionNegation => {
                let inner = as_not(node)?;
                (logic.constant(inner) == Some(Constant::Contradiction)).then(|| done(&|| logic.tautology()))
            }

            Law::TautologyNegation => {
                let inner = as_not(node)?;
                (logic.constant(inner) == Some(Constant::Tautology)).then(|| done(&|| logic.contradiction()))
            }
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn as_junction(node: Node) -> Option<(Junction, Ref, Ref)> {
    match node {
        Node::Junction(j, a, b) => Some((j, a, b)),
        _ => None,
    }
}

fn as_not(node: Node) -> Option<Ref> {
    match node {
        Node::Not(a) => Some(a),
        _ => None,
    }
}
