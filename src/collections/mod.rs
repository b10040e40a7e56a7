//! Traversal-support containers: min-heap, stack and queue.

pub mod heap;
pub mod queue;
pub mod stack;

pub use heap::{HeapEntry, MinHeap};
pub use queue::Queue;
pub use stack::Stack;
