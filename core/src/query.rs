use crate::error::SearchError;
use crate::graph::{Readable, VertexId};
use crate::traversal::{bfs, Color, Traversal};

/// Partition the graph by forward reachability.
///
/// Scans vertex ids in order and starts `traverse` from every vertex still
/// White in the scan-wide color array, then folds that run's Black vertices
/// back into the array so they are never used as seeds again. One
/// `Traversal` per seed, in seeding order.
///
/// Edges are followed forward only, so this is not a strongly-connected
/// component decomposition: a later seed may reach vertices an earlier run
/// already finalized, and those vertices show up in both traversals.
pub fn component_scan<G, F>(graph: &G, traverse: F) -> Result<Vec<Traversal>, SearchError>
where
    G: Readable + ?Sized,
    F: Fn(&G, VertexId, Option<VertexId>) -> Result<Traversal, SearchError>,
{
    let mut color = vec![Color::White; graph.size()];
    let mut components = Vec::new();

    for seed in 0..graph.size() {
        if color[seed] != Color::White {
            continue;
        }
        let t = traverse(graph, seed, None)?;
        for (global, &local) in color.iter_mut().zip(&t.color) {
            if local == Color::Black {
                *global = Color::Black;
            }
        }
        tracing::trace!(seed, reached = t.vertex_ordering.len(), "component seeded");
        components.push(t);
    }

    tracing::debug!(
        vertices = graph.size(),
        components = components.len(),
        "component scan complete"
    );
    Ok(components)
}

/// Unweighted shortest path from `source` to `target`.
///
/// Runs BFS with an early stop at `target`; `distance[target]` of the result
/// is the hop count and `path_to(target)` the route. Returns None when
/// either id is out of range or `target` is unreachable.
///
/// Weighted graphs are searched the same way: edge weights are ignored.
pub fn shortest_path<G>(graph: &G, source: VertexId, target: VertexId) -> Option<Traversal>
where
    G: Readable + ?Sized,
{
    let size = graph.size();
    if source >= size || target >= size {
        tracing::debug!(source, target, size, "shortest path endpoint out of range");
        return None;
    }

    // TODO: dispatch weighted graphs to Dijkstra once non-negative weights are validated on load.
    if graph.as_weighted().is_some() {
        tracing::debug!(source, target, "weighted graph: searching by hop count");
    }

    let t = bfs(graph, source, Some(target)).ok()?;
    if t.color[target] == Color::White {
        return None;
    }
    Some(t)
}
