//! # equiv-rs: Laws of Logical Equivalence in Rust
//!
//! **`equiv-rs`** is a small term-rewriting engine for propositional formulas.
//! It knows a fixed catalog of equivalence laws (commutativity, De Morgan's
//! laws, absorption and friends) and explores the space of formulas reachable
//! from a starting formula by applying them one step at a time.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All formulas are built through the [`Logic`][crate::logic::Logic] manager. It hash-conses nodes, so structurally equal formulas share one [`Ref`][crate::reference::Ref] handle.
//! - **Truth Tables**: Evaluation under an assignment, textbook-ordered truth tables and truth-equivalence checks, memoized per formula.
//! - **Law Catalog**: Sixteen laws in a closed [`Law`][crate::law::Law] enum, each with an eligibility test and a transform.
//! - **Equivalence Graph**: Breadth-first exploration with a round budget, keeping which law licensed each edge.
//!
//! ## Basic Usage
//!
//! ```rust
//! use equiv_rs::graph::explore_from;
//! use equiv_rs::law::Law;
//! use equiv_rs::logic::Logic;
//!
//! // 1. Initialize the manager
//! let logic = Logic::default();
//!
//! // 2. Create atoms and build a formula: ~(p ∧ q)
//! let p = logic.mk_atom("p").unwrap();
//! let q = logic.mk_atom("q").unwrap();
//! let f = logic.mk_not(logic.mk_and(p, q));
//! assert_eq!(logic.symbol(f), "~(p ∧ q)");
//!
//! // 3. Apply a law
//! let g = Law::DeMorgan.apply(&logic, f).unwrap();
//! assert_eq!(logic.symbol(g), "(~p ∨ ~q)");
//! assert!(logic.truth_equivalent(f, g).unwrap());
//!
//! // 4. Explore everything two rewrites away
//! let graph = explore_from(&logic, f, 2);
//! assert!(graph.contains(g));
//! ```
//!
//! ## Core Components
//!
//! - **[`logic`]**: The [`Logic`][crate::logic::Logic] manager: construction, accessors and display.
//! - **[`eval`]**: Assignments, evaluation and truth tables.
//! - **[`law`]**: The catalog of equivalence laws.
//! - **[`rewrite`]**: One-step equivalents at the root and inside subterms.
//! - **[`graph`]**: The equivalence-graph search.

pub mod cache;
pub mod error;
pub mod eval;
pub mod graph;
pub mod law;
pub mod logic;
pub mod node;
pub mod reference;
pub mod rewrite;
pub mod table;
pub mod types;
pub mod utils;
