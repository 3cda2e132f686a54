//! Pre-order element traversal.

use crate::{DomTree, NodeId, NodeType};

/// Lazy pre-order iterator over the element nodes of a subtree.
///
/// Created by [`DomTree::elements`]. Non-element nodes are never yielded;
/// the document node is descended through but not yielded. Each element is
/// visited exactly once, parents before children, siblings in order.
///
/// Cloning the iterator snapshots its position, so a partially consumed
/// walk can be forked or replayed.
#[derive(Clone)]
pub struct Elements<'a> {
    tree: &'a DomTree,
    /// Nodes still to visit; the top of the stack is visited next.
    pending: Vec<NodeId>,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(tree: &'a DomTree, start: NodeId) -> Self {
        let pending = if tree.get(start).is_some() {
            vec![start]
        } else {
            Vec::new()
        };
        Self { tree, pending }
    }
}

impl Iterator for Elements<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.pending.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            match node.node_type {
                NodeType::Element(_) => {
                    self.pending.extend(node.children.iter().rev());
                    return Some(id);
                }
                NodeType::Document => self.pending.extend(node.children.iter().rev()),
                NodeType::Text(_) | NodeType::Comment(_) => {}
            }
        }
        None
    }
}
