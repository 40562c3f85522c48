use crate::reference::Ref;
use crate::types::{Constant, Junction, Var};
use crate::utils::{scramble, MyHash};

/// One level of a formula, with children stored as handles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Constant(Constant),
    Atom(Var),
    Not(Ref),
    Junction(Junction, Ref, Ref),
}

impl Node {
    /// Children in left-to-right order.
    pub fn children(&self) -> Vec<Ref> {
        match *self {
            Node::Constant(_) | Node::Atom(_) => vec![],
            Node::Not(a) => vec![a],
            Node::Junction(_, a, b) => vec![a, b],
        }
    }

    fn tag(&self) -> u64 {
        match self {
            Node::Constant(Constant::Tautology) => 0,
            Node::Constant(Constant::Contradiction) => 1,
            Node::Atom(_) => 2,
            Node::Not(_) => 3,
            Node::Junction(Junction::And, _, _) => 4,
            Node::Junction(Junction::Or, _, _) => 5,
        }
    }
}

impl MyHash for Node {
    fn hash(&self) -> u64 {
        let tag = self.tag();
        match *self {
            Node::Constant(_) => tag,
            Node::Atom(v) => scramble(v.id() as u64).wrapping_add(tag),
            Node::Not(a) => scramble(MyHash::hash(&a)).wrapping_add(tag),
            Node::Junction(_, a, b) => MyHash::hash(&(tag, MyHash::hash(&a), MyHash::hash(&b))),
        }
    }
}
