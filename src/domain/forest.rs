//! Arena-backed forest of named nodes.
//!
//! Nodes live in a generational arena and reference each other by index, so a
//! structural edit only touches the affected node and its parent's child list.
//! An `id -> index` map is kept in step with every structural change.

use std::collections::{HashMap, HashSet};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::{normalize_name, ChildSpec, NodeId, NodeView};
use crate::domain::error::{DomainError, DomainResult};

/// Tree node in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    /// Children have been fetched (or the node was created locally)
    pub loaded: bool,
    pub expanded: bool,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in display order
    pub children: Vec<Index>,
}

/// Ordered collection of independent trees.
///
/// `Clone` gives a full copy; clone before mutating when the previous version
/// must be kept around (undo).
#[derive(Debug, Clone, Default)]
pub struct Forest {
    arena: Arena<TreeNode>,
    roots: Vec<Index>,
    index: HashMap<NodeId, Index>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest from nested views, keeping their flags.
    pub fn from_views(views: Vec<NodeView>) -> DomainResult<Self> {
        let mut forest = Self::new();
        for view in views {
            forest.insert_view(view, None)?;
        }
        Ok(forest)
    }

    fn insert_view(&mut self, view: NodeView, parent: Option<Index>) -> DomainResult<()> {
        if self.index.contains_key(&view.id) {
            return Err(DomainError::DuplicateId(view.id));
        }
        let idx = self.alloc(view.id, view.name, view.loaded, parent);
        if let Some(node) = self.arena.get_mut(idx) {
            node.expanded = view.expanded;
        }
        for child in view.children {
            self.insert_view(child, Some(idx))?;
        }
        Ok(())
    }

    /// Allocate a node and append it to `parent` (or the roots).
    fn alloc(&mut self, id: NodeId, name: String, loaded: bool, parent: Option<Index>) -> Index {
        let node = TreeNode {
            id: id.clone(),
            name,
            loaded,
            expanded: false,
            parent: None,
            children: Vec::new(),
        };
        let idx = self.arena.insert(node);
        self.index.insert(id, idx);
        self.attach(idx, parent);
        idx
    }

    fn attach(&mut self, idx: Index, parent: Option<Index>) {
        match parent {
            Some(parent_idx) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    parent.children.push(idx);
                }
            }
            None => self.roots.push(idx),
        }
        if let Some(node) = self.arena.get_mut(idx) {
            node.parent = parent;
        }
    }

    fn detach(&mut self, idx: Index) {
        let parent = self.arena.get(idx).and_then(|n| n.parent);
        let siblings = match parent {
            Some(parent_idx) => match self.arena.get_mut(parent_idx) {
                Some(parent) => &mut parent.children,
                None => return,
            },
            None => &mut self.roots,
        };
        siblings.retain(|&i| i != idx);
        if let Some(node) = self.arena.get_mut(idx) {
            node.parent = None;
        }
    }

    fn lookup(&self, id: &NodeId) -> DomainResult<Index> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DomainError::NodeNotFound(id.clone()))
    }

    /// Append a new, loaded, childless node under `parent` or at the root level.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, parent: Option<&NodeId>, name: &str) -> DomainResult<NodeId> {
        let name = normalize_name(name).ok_or(DomainError::EmptyName)?;
        let parent_idx = parent.map(|p| self.lookup(p)).transpose()?;
        let id = NodeId::generate();
        self.alloc(id.clone(), name, true, parent_idx);
        debug!("inserted {}", id);
        Ok(id)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn rename(&mut self, id: &NodeId, name: &str) -> DomainResult<()> {
        let name = normalize_name(name).ok_or(DomainError::EmptyName)?;
        let idx = self.lookup(id)?;
        if let Some(node) = self.arena.get_mut(idx) {
            node.name = name;
        }
        Ok(())
    }

    /// Remove a node together with its subtree. Returns the number of nodes removed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &NodeId) -> DomainResult<usize> {
        let idx = self.lookup(id)?;
        self.detach(idx);

        let mut stack = vec![idx];
        let mut removed = 0;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                self.index.remove(&node.id);
                stack.extend(node.children);
                removed += 1;
            }
        }
        debug!("removed {} node(s) under {}", removed, id);
        Ok(removed)
    }

    /// Re-parent a node, appending it to the target's children (or the roots).
    ///
    /// Both ends are resolved before anything is detached, so a failed move
    /// leaves the forest untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(&mut self, id: &NodeId, target: Option<&NodeId>) -> DomainResult<()> {
        let idx = self.lookup(id)?;
        let target_idx = match target {
            Some(t) => {
                let t_idx = self.lookup(t)?;
                if t_idx == idx || self.is_descendant_idx(t_idx, idx) {
                    return Err(DomainError::CycleDetected {
                        node: id.clone(),
                        target: t.clone(),
                    });
                }
                Some(t_idx)
            }
            None => None,
        };
        self.detach(idx);
        self.attach(idx, target_idx);
        Ok(())
    }

    /// Flip the expanded flag. Returns the new state.
    #[instrument(level = "trace", skip(self))]
    pub fn toggle(&mut self, id: &NodeId) -> DomainResult<bool> {
        let idx = self.lookup(id)?;
        let node = self
            .arena
            .get_mut(idx)
            .ok_or_else(|| DomainError::NodeNotFound(id.clone()))?;
        node.expanded = !node.expanded;
        Ok(node.expanded)
    }

    pub fn set_expanded(&mut self, id: &NodeId, expanded: bool) -> DomainResult<()> {
        let idx = self.lookup(id)?;
        if let Some(node) = self.arena.get_mut(idx) {
            node.expanded = expanded;
        }
        Ok(())
    }

    /// Append lazily fetched children to a node and mark it loaded.
    ///
    /// All ids are checked first; on a collision nothing is installed.
    #[instrument(level = "debug", skip(self))]
    pub fn install_children(&mut self, id: &NodeId, children: Vec<ChildSpec>) -> DomainResult<()> {
        let idx = self.lookup(id)?;
        let mut seen = HashSet::new();
        for child in &children {
            if self.index.contains_key(&child.id) || !seen.insert(&child.id) {
                return Err(DomainError::DuplicateId(child.id.clone()));
            }
        }
        for child in children {
            self.alloc(child.id, child.name, false, Some(idx));
        }
        if let Some(node) = self.arena.get_mut(idx) {
            node.loaded = true;
        }
        Ok(())
    }

    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        self.index.get(id).and_then(|&idx| self.arena.get(idx))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        let node = self.get(id)?;
        node.parent
            .and_then(|p| self.arena.get(p))
            .map(|parent| &parent.id)
    }

    pub fn children_of(&self, id: &NodeId) -> Option<Vec<&TreeNode>> {
        let node = self.get(id)?;
        Some(self.resolve(&node.children))
    }

    pub fn roots(&self) -> Vec<&TreeNode> {
        self.resolve(&self.roots)
    }

    fn resolve(&self, indices: &[Index]) -> Vec<&TreeNode> {
        indices.iter().filter_map(|&i| self.arena.get(i)).collect()
    }

    /// True when `ancestor` lies on the parent chain of `id`.
    pub fn is_ancestor(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        match (self.index.get(id), self.index.get(ancestor)) {
            (Some(&node), Some(&anc)) => self.is_descendant_idx(node, anc),
            _ => false,
        }
    }

    fn is_descendant_idx(&self, node: Index, ancestor: Index) -> bool {
        let mut current = self.arena.get(node).and_then(|n| n.parent);
        while let Some(idx) = current {
            if idx == ancestor {
                return true;
            }
            current = self.arena.get(idx).and_then(|n| n.parent);
        }
        false
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order traversal across all trees, roots left to right.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Depth of the deepest tree; 0 for an empty forest.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        if let Some(node) = self.arena.get(idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Names of all childless nodes in pre-order.
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|node| node.children.is_empty())
            .map(|node| node.name.clone())
            .collect()
    }

    pub fn view(&self, id: &NodeId) -> Option<NodeView> {
        self.index.get(id).and_then(|&idx| self.view_idx(idx))
    }

    fn view_idx(&self, idx: Index) -> Option<NodeView> {
        let node = self.arena.get(idx)?;
        Some(NodeView {
            id: node.id.clone(),
            name: node.name.clone(),
            loaded: node.loaded,
            expanded: node.expanded,
            children: node
                .children
                .iter()
                .filter_map(|&c| self.view_idx(c))
                .collect(),
        })
    }

    /// Nested copy of the whole forest.
    pub fn snapshot(&self) -> Vec<NodeView> {
        self.roots.iter().filter_map(|&r| self.view_idx(r)).collect()
    }
}

pub struct PreOrderIterator<'a> {
    forest: &'a Forest,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(forest: &'a Forest) -> Self {
        let stack = forest.roots.iter().rev().copied().collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.forest.arena.get(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some(node);
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    forest: &'a Forest,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(forest: &'a Forest) -> Self {
        let stack = forest.roots.iter().rev().map(|&r| (r, false)).collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.forest.arena.get(current) {
                if visited {
                    return Some(node);
                }
                self.stack.push((current, true));
                for &child in node.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}
