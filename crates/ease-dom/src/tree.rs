//! DOM Tree (arena-based allocation)
//!
//! Slot 0 always holds the document node. Removed nodes stay in the arena,
//! detached, so their ids remain valid.

use crate::events::DomEvent;
use crate::{DomError, DomResult, Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    mutations: Vec<DomEvent>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            mutations: Vec::new(),
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.next_sibling).filter(|s| s.is_valid())
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.prev_sibling).filter(|s| s.is_valid())
    }

    /// Iterate over the children of a node, in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Iterate from the parent of `id` up to the document
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Every node below `id` in document order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let mut children: Vec<NodeId> = self.children(node).collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// Whether the node is reachable from the document
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.ancestors(id).any(|a| a == NodeId::ROOT)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` under `parent` before `reference` (at the end if `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        let parent_node = self.node(parent)?;
        if parent_node.is_text() {
            return Err(DomError::NotAnElement(parent));
        }
        let child_node = self.node(child)?;
        if child_node.is_document() || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, node: child });
        }
        if let Some(reference) = reference {
            if reference == child {
                return Err(DomError::HierarchyRequest { parent, node: child });
            }
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotFound(reference));
            }
        }

        self.detach(child);

        let (prev, next) = match reference {
            Some(reference) => (self.nodes[reference.0 as usize].prev_sibling, reference),
            None => (self.nodes[parent.0 as usize].last_child, NodeId::NONE),
        };

        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = child;
        } else {
            self.nodes[parent.0 as usize].last_child = child;
        }

        self.mutations.push(DomEvent::node_inserted(child, parent));
        Ok(child)
    }

    /// Insert `node` right after `reference`, under the same parent
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> DomResult<NodeId> {
        self.node(reference)?;
        let parent = self.parent(reference).ok_or(DomError::Detached(reference))?;
        if reference == node {
            return Err(DomError::HierarchyRequest { parent, node });
        }
        let next = match self.next_sibling(reference) {
            Some(next) if next == node => self.next_sibling(node),
            other => other,
        };
        self.insert_before(parent, node, next)
    }

    /// Detach a node from its parent. Returns false if it had none.
    pub fn remove(&mut self, id: NodeId) -> DomResult<bool> {
        self.node(id)?;
        let Some(parent) = self.parent(id) else {
            return Ok(false);
        };
        self.detach(id);
        self.mutations.push(DomEvent::node_removed(id, parent));
        Ok(true)
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.0 as usize];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }
        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Record an attribute change
    pub(crate) fn record(&mut self, event: DomEvent) {
        self.mutations.push(event);
    }

    /// Mutation records since the last call
    pub fn take_mutations(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.mutations)
    }

    /// Concatenated text of the node and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Child iterator
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self
            .tree
            .get(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

/// Ancestor iterator
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
