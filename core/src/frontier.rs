use std::collections::VecDeque;

use crate::graph::VertexId;

/// Discovered-but-unprocessed vertices. The take order is the only thing
/// that distinguishes BFS from DFS.
pub trait Frontier: Default {
    fn push(&mut self, vertex: VertexId);
    fn take(&mut self) -> Option<VertexId>;
    fn is_empty(&self) -> bool;
}

/// FIFO frontier.
#[derive(Debug, Default)]
pub struct Queue(VecDeque<VertexId>);

impl Frontier for Queue {
    fn push(&mut self, vertex: VertexId) {
        self.0.push_back(vertex);
    }

    fn take(&mut self) -> Option<VertexId> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// LIFO frontier.
#[derive(Debug, Default)]
pub struct Stack(Vec<VertexId>);

impl Frontier for Stack {
    fn push(&mut self, vertex: VertexId) {
        self.0.push(vertex);
    }

    fn take(&mut self) -> Option<VertexId> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
