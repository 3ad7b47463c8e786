//! Arena-backed search tree for introspection of explored lines.
//!
//! Nodes live in one `Vec` and refer to each other by index. A node is owned
//! by the arena alone; the parent link is a non-owning lookup index, so there
//! are no back-pointers to outlive their owner and no reference cycles.

/// Index of a node inside a [`SearchTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A state visited during search.
#[derive(Debug, Clone)]
pub struct Node<S, V> {
    /// Snapshot of the state at this node.
    pub state: S,
    /// Static evaluation of the state, from its side to move.
    pub cost: V,
    /// Backed-up search value, from this node's side to move.
    pub score: V,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Tree of [`Node`]s recorded along the searched best path.
#[derive(Debug, Clone)]
pub struct SearchTree<S, V> {
    nodes: Vec<Node<S, V>>,
}

impl<S, V> Default for SearchTree<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> SearchTree<S, V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the root node, if any has been inserted.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    /// Insert the root. Must be the first insertion.
    pub fn insert_root(&mut self, state: S, cost: V, score: V) -> NodeId {
        debug_assert!(self.nodes.is_empty(), "root must be inserted first");
        self.nodes.push(Node {
            state,
            cost,
            score,
            parent: None,
            children: Vec::new(),
        });
        NodeId(0)
    }

    /// Insert a child of `parent` and link it into the parent's child list.
    pub fn insert_child(&mut self, parent: NodeId, state: S, cost: V, score: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            cost,
            score,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<S, V> {
        &self.nodes[id.0]
    }

    /// Non-owning lookup link to the parent.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Node ids from the root down to `id`, inclusive.
    pub fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut cursor = id;
        while let Some(parent) = self.nodes[cursor.0].parent {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        path
    }
}
