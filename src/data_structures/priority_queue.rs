use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(vertex, priority)` entries without decrease-key.
///
/// Lowering a vertex's priority is done by pushing a second entry for it. The
/// older entry stays in the heap and surfaces later with a priority above the
/// vertex's recorded distance; callers must recognise and drop it on `pop`.
/// Ties on priority are broken by vertex order.
#[derive(Debug, Clone)]
pub struct LazyMinHeap<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
    pushes: usize,
    pops: usize,
}

impl<V, P> LazyMinHeap<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        LazyMinHeap {
            heap: BinaryHeap::new(),
            pushes: 0,
            pops: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        LazyMinHeap {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
            pops: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an entry. Existing entries for the same vertex are left alone.
    pub fn push(&mut self, vertex: V, priority: P) {
        self.pushes += 1;
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        let entry = self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority));
        if entry.is_some() {
            self.pops += 1;
        }
        entry
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (vertex, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Total number of entries ever pushed
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Total number of entries ever popped
    pub fn pops(&self) -> usize {
        self.pops
    }
}

impl<V, P> Default for LazyMinHeap<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut queue = LazyMinHeap::new();
        queue.push("c", 7u64);
        queue.push("a", 1);
        queue.push("b", 4);

        assert_eq!(queue.peek(), Some((&"a", 1)));
        assert_eq!(queue.pop(), Some(("a", 1)));
        assert_eq!(queue.pop(), Some(("b", 4)));
        assert_eq!(queue.pop(), Some(("c", 7)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn duplicate_entries_coexist() {
        let mut queue = LazyMinHeap::new();
        queue.push(3usize, 10u32);
        queue.push(3, 2);
        assert_eq!(queue.len(), 2);

        // The fresher, cheaper entry surfaces first; the old one is still queued.
        assert_eq!(queue.pop(), Some((3, 2)));
        assert_eq!(queue.pop(), Some((3, 10)));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_priorities_break_ties_by_vertex() {
        let mut queue = LazyMinHeap::new();
        queue.push('z', 5u8);
        queue.push('m', 5);
        queue.push('b', 5);

        let order: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec!['b', 'm', 'z']);
    }

    #[test]
    fn counts_operations() {
        let mut queue: LazyMinHeap<u32, u32> = LazyMinHeap::with_capacity(4);
        queue.push(1, 1);
        queue.push(2, 2);
        queue.pop();
        queue.pop();
        queue.pop();

        assert_eq!(queue.pushes(), 2);
        assert_eq!(queue.pops(), 2);

        queue.push(9, 9);
        queue.clear();
        assert!(queue.is_empty());
    }
}
