use crate::clipper::constants::UNASSIGNED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMinimum {
    pub y: i64,
    pub left_bound: usize,
    pub right_bound: usize,
}

/// Local minima of every added path, consumed bottom-up (largest Y first) during a sweep.
#[derive(Debug, Default)]
pub struct LocalMinima {
    minima: Vec<LocalMinimum>,
    current: usize,
}

impl LocalMinima {
    pub fn new() -> Self {
        Self {
            minima: Vec::new(),
            current: 0,
        }
    }

    pub fn push(&mut self, y: i64, left_bound: usize, right_bound: usize) {
        self.minima.push(LocalMinimum {
            y,
            left_bound,
            right_bound,
        });
    }

    pub fn len(&self) -> usize {
        self.minima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minima.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalMinimum> {
        self.minima.iter()
    }

    pub fn clear(&mut self) {
        self.minima.clear();
        self.current = 0;
    }

    /// Sorts by descending Y and rewinds the cursor. Stable, so equal minima keep insertion order.
    pub fn reset(&mut self) {
        self.minima.sort_by(|a, b| b.y.cmp(&a.y));
        self.current = 0;
    }

    pub fn pop(&mut self, y: i64) -> Option<LocalMinimum> {
        match self.minima.get(self.current) {
            Some(minimum) if minimum.y == y => {
                self.current += 1;
                Some(*minimum)
            }
            _ => None,
        }
    }
}

impl LocalMinimum {
    pub fn has_left_bound(&self) -> bool {
        self.left_bound != UNASSIGNED
    }

    pub fn has_right_bound(&self) -> bool {
        self.right_bound != UNASSIGNED
    }
}
