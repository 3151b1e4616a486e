use crate::clipper::constants::UNASSIGNED;
use crate::geometry::polygon::{Path, Paths};

/// One contour of a [`PolyTree`]. `parent` is [`UNASSIGNED`] for top-level contours.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyNode {
    contour: Path,
    childs: Vec<usize>,
    parent: usize,
    index: usize,
    is_open: bool,
}

impl PolyNode {
    fn new(contour: Path, is_open: bool) -> Self {
        Self {
            contour,
            childs: Vec::new(),
            parent: UNASSIGNED,
            index: 0,
            is_open,
        }
    }

    pub fn contour(&self) -> &Path {
        &self.contour
    }

    pub fn childs(&self) -> &[usize] {
        &self.childs
    }

    pub fn child_count(&self) -> usize {
        self.childs.len()
    }

    pub fn parent(&self) -> Option<usize> {
        (self.parent != UNASSIGNED).then_some(self.parent)
    }

    /// Position among the parent's children.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Nesting of clipped contours: outers contain holes, holes contain outers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyTree {
    nodes: Vec<PolyNode>,
    childs: Vec<usize>,
}

impl PolyTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            childs: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.childs.clear();
    }

    /// Number of contours in the tree.
    pub fn total(&self) -> usize {
        self.nodes.len()
    }

    pub fn child_count(&self) -> usize {
        self.childs.len()
    }

    /// Top-level contours.
    pub fn childs(&self) -> &[usize] {
        &self.childs
    }

    pub fn node(&self, index: usize) -> &PolyNode {
        &self.nodes[index]
    }

    pub fn contour(&self, index: usize) -> &Path {
        &self.nodes[index].contour
    }

    pub fn get_first(&self) -> Option<usize> {
        self.childs.first().copied()
    }

    /// Depth-first successor of `index`.
    pub fn get_next(&self, index: usize) -> Option<usize> {
        match self.nodes[index].childs.first() {
            Some(&child) => Some(child),
            None => self.get_next_sibling_up(index),
        }
    }

    fn get_next_sibling_up(&self, index: usize) -> Option<usize> {
        let node = &self.nodes[index];
        let siblings = self.siblings(node.parent);

        if node.index + 1 < siblings.len() {
            Some(siblings[node.index + 1])
        } else if node.parent == UNASSIGNED {
            None
        } else {
            self.get_next_sibling_up(node.parent)
        }
    }

    fn siblings(&self, parent: usize) -> &[usize] {
        if parent == UNASSIGNED {
            &self.childs
        } else {
            &self.nodes[parent].childs
        }
    }

    /// Holes sit at odd depth below the root.
    pub fn is_hole(&self, index: usize) -> bool {
        let mut result = false;
        let mut parent = self.nodes[index].parent;

        while parent != UNASSIGNED {
            result = !result;
            parent = self.nodes[parent].parent;
        }

        result
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.nodes[index].is_open
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.nodes[index].parent()
    }

    pub(crate) fn add_node(&mut self, contour: Path, is_open: bool) -> usize {
        self.nodes.push(PolyNode::new(contour, is_open));
        self.nodes.len() - 1
    }

    /// Attaches `child` under `parent`, or at the top level when `parent` is [`UNASSIGNED`].
    pub(crate) fn add_child(&mut self, parent: usize, child: usize) {
        let siblings = if parent == UNASSIGNED {
            &mut self.childs
        } else {
            &mut self.nodes[parent].childs
        };

        let index = siblings.len();
        siblings.push(child);
        self.nodes[child].parent = parent;
        self.nodes[child].index = index;
    }

    /// Drops the single top-level contour and promotes its children to the top level.
    /// Leaves the tree empty when there is not exactly one top-level contour.
    pub(crate) fn promote_outer(&mut self) {
        if self.childs.len() != 1 {
            self.clear();
            return;
        }

        let outer = self.childs[0];
        let mut result = PolyTree::new();

        for &child in &self.nodes[outer].childs {
            self.copy_subtree(child, UNASSIGNED, &mut result);
        }

        *self = result;
    }

    fn copy_subtree(&self, index: usize, parent: usize, target: &mut PolyTree) {
        let node = &self.nodes[index];
        let copy = target.add_node(node.contour.clone(), node.is_open);
        target.add_child(parent, copy);

        for &child in &node.childs {
            self.copy_subtree(child, copy, target);
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum NodeKind {
    Any,
    Closed,
}

fn add_poly_node_to_paths(tree: &PolyTree, index: usize, kind: NodeKind, paths: &mut Paths) {
    let node = tree.node(index);
    let matches = match kind {
        NodeKind::Any => true,
        NodeKind::Closed => !node.is_open,
    };

    if matches && !node.contour.is_empty() {
        paths.push(node.contour.clone());
    }

    for &child in &node.childs {
        add_poly_node_to_paths(tree, child, kind, paths);
    }
}

pub fn poly_tree_to_paths(tree: &PolyTree) -> Paths {
    let mut result = Vec::with_capacity(tree.total());

    for &child in tree.childs() {
        add_poly_node_to_paths(tree, child, NodeKind::Any, &mut result);
    }

    result
}

pub fn closed_paths_from_poly_tree(tree: &PolyTree) -> Paths {
    let mut result = Vec::with_capacity(tree.total());

    for &child in tree.childs() {
        add_poly_node_to_paths(tree, child, NodeKind::Closed, &mut result);
    }

    result
}

/// Open contours only ever appear at the top level.
pub fn open_paths_from_poly_tree(tree: &PolyTree) -> Paths {
    tree.childs()
        .iter()
        .filter(|&&child| tree.is_open(child))
        .map(|&child| tree.contour(child).clone())
        .collect()
}
