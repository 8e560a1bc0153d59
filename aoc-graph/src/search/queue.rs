//! Sorted-vector priority queue.

/// Min-priority queue backed by a vector kept sorted in descending order, so
/// the smallest priority is always at the end and `pop` is O(1).
///
/// Entries with equal priority come out in insertion order. There is no
/// decrease-key: pushing an item again with a better priority leaves the old
/// entry in place, and the consumer skips it when it surfaces.
///
/// # Example
///
/// ```
/// use aoc_graph::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push("far", 9);
/// queue.push("near", 1);
/// queue.push("also near", 1);
///
/// assert_eq!(queue.pop(), Some(("near", 1)));
/// assert_eq!(queue.pop(), Some(("also near", 1)));
/// assert_eq!(queue.pop(), Some(("far", 9)));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    entries: Vec<(T, P)>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `item`, keeping the vector sorted.
    pub fn push(&mut self, item: T, priority: P) {
        // New entries go in front of existing equal ones so older ones pop first
        let index = self.entries.partition_point(|(_, p)| *p > priority);
        self.entries.insert(index, (item, priority));
    }

    /// Removes the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<(&T, &P)> {
        self.entries.last().map(|(item, priority)| (item, priority))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        for (item, priority) in iter {
            queue.push(item, priority);
        }
        queue
    }
}
