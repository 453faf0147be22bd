use std::{cmp::Ordering, collections::BinaryHeap};

/// A path discovered so far, ending at `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub title: String,
    pub path: Vec<String>,
}

impl SearchNode {
    pub fn origin(title: &str) -> Self {
        Self {
            title: title.to_string(),
            path: vec![title.to_string()],
        }
    }

    pub fn extend(&self, title: &str) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(title.to_string());

        Self {
            title: title.to_string(),
            path,
        }
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

#[derive(Debug, Clone)]
struct FrontierEntry {
    priority: f32,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.title.cmp(&self.node.title))
    }
}

/// Nodes waiting to be expanded, lowest priority first, ties by title.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: f32, node: SearchNode) {
        self.heap.push(FrontierEntry { priority, node });
    }

    pub fn pop(&mut self) -> Option<(f32, SearchNode)> {
        self.heap
            .pop()
            .map(|FrontierEntry { priority, node }| (priority, node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
