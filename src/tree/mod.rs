mod forest;
mod node;
mod ops;
mod traverse;

pub use self::forest::{Forest, SplayTree};
pub use self::node::{Node, NodeId};
pub use self::traverse::InOrder;
