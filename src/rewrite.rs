//! One-step rewriting.
//!
//! A one-step equivalent of a formula is obtained by applying a single law,
//! either at the root or at exactly one subterm. The generated sequence keeps
//! the law that justified each rewrite, so the same target may appear more
//! than once with different laws.

use std::rc::Rc;

use log::debug;

use crate::law::Law;
use crate::logic::Logic;
use crate::node::Node;
use crate::reference::Ref;

impl Logic {
    /// Laws eligible at the root of `f`, in catalog order.
    pub fn eligible_laws(&self, f: Ref) -> Vec<Law> {
        Law::ALL
            .into_iter()
            .filter(|law| law.eligible(self, f))
            .collect()
    }

    /// Rewrites of `f` at its root, one per eligible law.
    pub fn simple_equivalents(&self, f: Ref) -> Vec<(Ref, Law)> {
        Law::ALL
            .into_iter()
            .filter_map(|law| law.try_apply(self, f).map(|g| (g, law)))
            .collect()
    }

    /// Every formula reachable from `f` by one law application.
    ///
    /// Root rewrites come first, followed by rewrites inside the left child
    /// and then inside the right child, each rebuilt around the unchanged
    /// sibling. Rewrites under a negation are rewrapped in the negation.
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
    /// let f = logic.mk_and(p, q);
    ///
    /// let equivalents = logic.one_step_equivalents(f);
    /// assert_eq!(equivalents[0], (logic.mk_and(q, p), Law::Commutative));
    /// assert!(equivalents.contains(&(logic.mk_and(logic.mk_not(logic.mk_not(p)), q), Law::ReverseDoubleNegative)));
    /// ```
    pub fn one_step_equivalents(&self, f: Ref) -> Rc<[(Ref, Law)]> {
        if let Some(res) = self.equivalents.borrow_mut().get(&f) {
            return Rc::clone(res);
        }

        let mut res = self.simple_equivalents(f);
        match self.node(f) {
            Node::Junction(j, a, b) => {
                for &(g, law) in self.one_step_equivalents(a).iter() {
                    res.push((self.mk_junction(j, g, b), law));
                }
                for &(g, law) in self.one_step_equivalents(b).iter() {
                    res.push((self.mk_junction(j, a, g), law));
                }
            }
            Node::Not(a) => {
                for &(g, law) in self.one_step_equivalents(a).iter() {
                    res.push((self.mk_not(g), law));
                }
            }
            Node::Atom(_) | Node::Constant(_) => {}
        }

        debug!("one_step_equivalents({}) -> {} rewrites", self.display(f), res.len());
        let res: Rc<[(Ref, Law)]> = res.into();
        self.equivalents.borrow_mut().insert(f, Rc::clone(&res));
        res
    }
}
