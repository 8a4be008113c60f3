use graph_search_core::{
    bfs, dfs, edge_to_adjacency_list, shortest_path, Color, IntEdgeList, Readable, VertexId,
};
use proptest::prelude::*;

/// Hop counts from `source` by edge relaxation, independent of the engine.
fn reference_hops(graph: &dyn Readable, source: VertexId) -> Vec<Option<usize>> {
    let n = graph.size();
    let mut hops = vec![None; n];
    hops[source] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for u in 0..n {
            let Some(du) = hops[u] else { continue };
            for k in 0..graph.len(u) {
                let v = graph.get(u, k);
                if hops[v].map_or(true, |dv| du + 1 < dv) {
                    hops[v] = Some(du + 1);
                    changed = true;
                }
            }
        }
    }
    hops
}

fn raw_edges() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec((0i64..40, 0i64..40), 1..60)
}

proptest! {
    #[test]
    fn test_normalization_is_deterministic(edges in raw_edges()) {
        let data = IntEdgeList::from(edges);
        let a = edge_to_adjacency_list(&data).unwrap();
        let b = edge_to_adjacency_list(&data).unwrap();
        prop_assert_eq!(&a.ids, &b.ids);
        for u in 0..a.graph.size() {
            let ra: Vec<_> = (0..a.graph.len(u)).map(|k| a.graph.get(u, k)).collect();
            let rb: Vec<_> = (0..b.graph.len(u)).map(|k| b.graph.get(u, k)).collect();
            prop_assert_eq!(ra, rb);
        }
    }

    #[test]
    fn test_full_traversal_colors_reachable_black(edges in raw_edges(), seed in 0usize..80) {
        let n = edge_to_adjacency_list(&IntEdgeList::from(edges)).unwrap();
        let g = n.graph.as_ref();
        let source = seed % g.size();
        let hops = reference_hops(g, source);

        for t in [bfs(g, source, None).unwrap(), dfs(g, source, None).unwrap()] {
            for v in 0..g.size() {
                let expected = if hops[v].is_some() { Color::Black } else { Color::White };
                prop_assert_eq!(t.color[v], expected, "vertex {}", v);
            }
            prop_assert_eq!(
                t.vertex_ordering.len(),
                hops.iter().filter(|h| h.is_some()).count()
            );
        }
    }

    #[test]
    fn test_bfs_distance_is_minimum_hops(edges in raw_edges(), seed in 0usize..80) {
        let n = edge_to_adjacency_list(&IntEdgeList::from(edges)).unwrap();
        let g = n.graph.as_ref();
        let source = seed % g.size();
        let hops = reference_hops(g, source);
        let t = bfs(g, source, None).unwrap();
        for v in 0..g.size() {
            if let Some(h) = hops[v] {
                prop_assert_eq!(t.distance[v], h, "vertex {}", v);
            }
        }
    }

    #[test]
    fn test_early_stop_truncates_at_destination(
        edges in raw_edges(),
        seed in 0usize..80,
        target in 0usize..80,
    ) {
        let n = edge_to_adjacency_list(&IntEdgeList::from(edges)).unwrap();
        let g = n.graph.as_ref();
        let source = seed % g.size();
        let d = target % g.size();

        let full = bfs(g, source, None).unwrap();
        let partial = bfs(g, source, Some(d)).unwrap();
        prop_assert!(full.edge_ordering.starts_with(&partial.edge_ordering));
        prop_assert!(full.vertex_ordering.starts_with(&partial.vertex_ordering));

        if full.color[d] == Color::Black {
            prop_assert_eq!(partial.vertex_ordering.last(), Some(&d));
            prop_assert!(partial.edge_ordering.iter().all(|e| e.u != d));
        } else {
            prop_assert_eq!(partial, full);
        }
    }

    #[test]
    fn test_shortest_path_matches_reference(
        edges in raw_edges(),
        seed in 0usize..80,
        target in 0usize..80,
    ) {
        let n = edge_to_adjacency_list(&IntEdgeList::from(edges)).unwrap();
        let g = n.graph.as_ref();
        let source = seed % g.size();
        let d = target % g.size();
        let hops = reference_hops(g, source);

        match (shortest_path(g, source, d), hops[d]) {
            (Some(t), Some(h)) => prop_assert_eq!(t.distance[d], h),
            (None, None) => {}
            (got, want) => prop_assert!(false, "got {:?}, reference {:?}", got.map(|t| t.distance[d]), want),
        }
        prop_assert!(shortest_path(g, source, g.size()).is_none());
    }
}
