use crate::error::SearchError;
use crate::frontier::{Frontier, Queue, Stack};
use crate::graph::{Edge, Readable, VertexId};

/// Discovery state of a vertex. Only ever advances White → Gray → Black
/// within one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Undiscovered.
    #[default]
    White,
    /// Discovered, still on the frontier.
    Gray,
    /// Fully processed.
    Black,
}

/// Complete record of one BFS/DFS run. All per-vertex arrays are sized to
/// the graph's vertex count at the time of the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traversal {
    pub color: Vec<Color>,
    /// Vertices in the order they turned Black.
    pub vertex_ordering: Vec<VertexId>,
    /// Every edge examined, including edges into already-discovered vertices.
    pub edge_ordering: Vec<Edge>,
    /// Search-tree predecessor. `None` for the source and for vertices never reached.
    pub parent: Vec<Option<VertexId>>,
    /// Hops along the discovery path. Shortest for BFS only.
    pub distance: Vec<usize>,
}

impl Traversal {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            color: vec![Color::White; vertex_count],
            vertex_ordering: Vec::new(),
            edge_ordering: Vec::new(),
            parent: vec![None; vertex_count],
            distance: vec![0; vertex_count],
        }
    }

    /// The first vertex finalized, i.e. where the search started.
    pub fn source(&self) -> Option<VertexId> {
        self.vertex_ordering.first().copied()
    }

    /// True if the search discovered `vertex` (Gray or Black).
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.color.get(vertex).is_some_and(|&c| c != Color::White)
    }

    /// Walk parent pointers from `target` back to the source.
    /// Returns the route source-first, or None if `target` was never reached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reached(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

fn check_vertex<G: Readable + ?Sized>(graph: &G, vertex: VertexId) -> Result<(), SearchError> {
    let size = graph.size();
    if vertex >= size {
        return Err(SearchError::OutOfRangeVertex { vertex, size });
    }
    Ok(())
}

/// Shared search loop. The frontier's take order decides BFS vs DFS.
///
/// A vertex is finalized (appended to `vertex_ordering`, colored Black) when
/// it leaves the frontier. If it is the destination the search stops before
/// scanning its neighbors.
fn search<F, G>(
    graph: &G,
    source: VertexId,
    destination: Option<VertexId>,
) -> Result<Traversal, SearchError>
where
    F: Frontier,
    G: Readable + ?Sized,
{
    check_vertex(graph, source)?;
    if let Some(d) = destination {
        check_vertex(graph, d)?;
    }

    let mut t = Traversal::new(graph.size());
    t.color[source] = Color::Gray;
    t.parent[source] = None;
    t.distance[source] = 0;

    let mut frontier = F::default();
    frontier.push(source);

    while let Some(u) = frontier.take() {
        t.vertex_ordering.push(u);
        t.color[u] = Color::Black;
        if destination == Some(u) {
            return Ok(t);
        }

        for k in 0..graph.len(u) {
            let v = graph.get(u, k);
            t.edge_ordering.push(Edge { u, v });
            if t.color[v] == Color::White {
                t.color[v] = Color::Gray;
                t.parent[v] = Some(u);
                t.distance[v] = t.distance[u] + 1;
                frontier.push(v);
            }
        }
    }

    Ok(t)
}

/// Breadth-first search from `source`. With a `destination`, stops as soon
/// as it is dequeued; with `None`, visits the whole reachable set.
pub fn bfs<G: Readable + ?Sized>(
    graph: &G,
    source: VertexId,
    destination: Option<VertexId>,
) -> Result<Traversal, SearchError> {
    search::<Queue, G>(graph, source, destination)
}

/// Depth-first search from `source`, same contract as `bfs` with a LIFO frontier.
pub fn dfs<G: Readable + ?Sized>(
    graph: &G,
    source: VertexId,
    destination: Option<VertexId>,
) -> Result<Traversal, SearchError> {
    search::<Stack, G>(graph, source, destination)
}
