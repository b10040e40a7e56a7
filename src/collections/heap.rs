//! Binary min-heap keyed by tentative distance.
//!
//! Entries live in a dense `Vec` laid out as a complete binary tree:
//! `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`.
//!
//! There is no decrease-key. Pushing the same item twice is allowed; Dijkstra
//! discards the stale copy when it is popped.

/// An item paired with its priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry<T> {
    /// The payload, usually a vertex.
    pub item: T,
    /// Priority; smaller pops first.
    pub dist: f64,
}

impl<T> HeapEntry<T> {
    pub fn new(item: T, dist: f64) -> Self {
        Self { item, dist }
    }
}

/// Min-heap over [`HeapEntry`] values.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<HeapEntry<T>>,
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<&HeapEntry<T>> {
        self.elements.first()
    }

    /// Append an entry and restore the heap property upward.
    pub fn push(&mut self, item: T, dist: f64) {
        self.elements.push(HeapEntry::new(item, dist));
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the minimum entry. `None` when the heap is empty.
    pub fn pop(&mut self) -> Option<HeapEntry<T>> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        self.sift_down(0);
        min
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.elements[index].dist < self.elements[parent].dist {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let (l, r) = (left(index), right(index));
            if l >= len {
                return;
            }
            // Ties go to the left child.
            let child = if r < len && self.elements[r].dist < self.elements[l].dist {
                r
            } else {
                l
            };
            if self.elements[index].dist > self.elements[child].dist {
                self.elements.swap(index, child);
                index = child;
            } else {
                return;
            }
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len())
            .all(|i| self.elements[parent(i)].dist <= self.elements[i].dist)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}
