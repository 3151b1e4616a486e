use std::collections::BinaryHeap;

/// Y values at which the sweep must stop, popped from the largest down.
#[derive(Debug, Default)]
pub struct Scanbeam {
    heap: BinaryHeap<i64>,
}

impl Scanbeam {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, y: i64) {
        self.heap.push(y);
    }

    /// Removes the largest Y along with any duplicates of it.
    pub fn pop(&mut self) -> Option<i64> {
        let y = self.heap.pop()?;
        while self.heap.peek() == Some(&y) {
            self.heap.pop();
        }

        Some(y)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clean(&mut self) {
        self.heap.clear();
    }
}
