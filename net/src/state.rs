use std::sync::{Arc, Mutex, PoisonError};

use graph_search_core::Readable;

/// Graph shared by every connection handler.
///
/// The core engine takes no locks, so every request runs with this mutex
/// held for its whole duration: a traversal never observes a half-applied
/// `Add`/`Remove` from another connection.
#[derive(Clone)]
pub struct SharedGraph {
    inner: Arc<Mutex<Box<dyn Readable + Send>>>,
}

impl SharedGraph {
    pub fn new(graph: Box<dyn Readable + Send>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    /// Run `f` with exclusive access to the graph.
    ///
    /// A lock poisoned by a panicking handler is recovered, not propagated.
    pub fn with_graph<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut dyn Readable) -> R,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut **guard)
    }

    pub fn vertex_count(&self) -> usize {
        self.with_graph(|g| g.size())
    }
}
