use crate::geometry::point::IntPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectRecord {
    pub edge1: usize,
    pub edge2: usize,
    pub pt: IntPoint,
}

/// Pending edge crossings of the current scanbeam.
#[derive(Debug, Default)]
pub struct IntersectNode {
    nodes: Vec<IntersectRecord>,
}

impl IntersectNode {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, edge1: usize, edge2: usize, pt: IntPoint) {
        self.nodes.push(IntersectRecord { edge1, edge2, pt });
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> IntersectRecord {
        self.nodes[index]
    }

    pub fn edges(&self, index: usize) -> (usize, usize) {
        (self.nodes[index].edge1, self.nodes[index].edge2)
    }

    /// Bottom-most crossings first.
    pub fn sort(&mut self) {
        self.nodes.sort_by(|a, b| b.pt.y.cmp(&a.pt.y));
    }

    pub fn swap(&mut self, index1: usize, index2: usize) {
        self.nodes.swap(index1, index2);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
