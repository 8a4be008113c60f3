use std::collections::HashMap;

use crate::error::ConversionError;
use crate::graph::{
    AdjacencyList, EdgeListView, RawId, Readable, VertexId, WeightedAdjacencyList,
};

/// Bijection between raw edge-list ids and dense vertex ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    to_dense: HashMap<RawId, VertexId>,
    to_raw: Vec<RawId>,
}

impl IdMap {
    pub fn get(&self, raw: RawId) -> Option<VertexId> {
        self.to_dense.get(&raw).copied()
    }

    pub fn raw(&self, dense: VertexId) -> Option<RawId> {
        self.to_raw.get(dense).copied()
    }

    pub fn len(&self) -> usize {
        self.to_raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_raw.is_empty()
    }

    /// `(dense, raw)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, RawId)> + '_ {
        self.to_raw.iter().copied().enumerate()
    }
}

/// Output of `edge_to_adjacency_list`.
pub struct Normalized {
    /// `WeightedAdjacencyList` when the input was weighted, `AdjacencyList`
    /// otherwise. Query `graph.as_weighted()` to tell them apart.
    pub graph: Box<dyn Readable + Send>,
    pub ids: IdMap,
}

impl std::fmt::Debug for Normalized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalized")
            .field("vertices", &self.graph.size())
            .field("weighted", &self.graph.as_weighted().is_some())
            .field("ids", &self.ids)
            .finish()
    }
}

/// Re-arrange an edge list with arbitrary raw ids into a dense adjacency list.
///
/// Ids are assigned in first-encounter order (U before V, edges in input
/// order), so the same input always yields the same mapping. Duplicate
/// edges and self-loops are kept.
pub fn edge_to_adjacency_list<E>(edges: &E) -> Result<Normalized, ConversionError>
where
    E: EdgeListView + ?Sized,
{
    // Pass 1: read every edge once and validate its endpoints.
    let mut pairs: Vec<(RawId, RawId)> = Vec::with_capacity(edges.len());
    for i in 0..edges.len() {
        let (u, v) = edges.get(i);
        for id in [u, v] {
            if id < 0 {
                return Err(ConversionError::NegativeId { edge: i, id });
            }
        }
        pairs.push((u, v));
    }

    // Pass 2: dense ids in first-encounter order.
    let mut to_dense: HashMap<RawId, VertexId> = HashMap::with_capacity(pairs.len());
    let mut to_raw = Vec::new();
    let mut dense_pairs: Vec<(VertexId, VertexId)> = Vec::with_capacity(pairs.len());
    for &(u, v) in &pairs {
        let mut assign = |id: RawId| {
            *to_dense.entry(id).or_insert_with(|| {
                to_raw.push(id);
                to_raw.len() - 1
            })
        };
        let du = assign(u);
        let dv = assign(v);
        dense_pairs.push((du, dv));
    }

    let ids = IdMap { to_dense, to_raw };
    let n = ids.len();

    let graph: Box<dyn Readable + Send> = match edges.as_weighted() {
        Some(weighted) => {
            let mut g = WeightedAdjacencyList::with_vertices(n);
            for (i, &(u, v)) in dense_pairs.iter().enumerate() {
                g.add_weighted(u, v, weighted.weight(i));
            }
            Box::new(g)
        }
        None => {
            let mut rows: Vec<Vec<VertexId>> = vec![Vec::new(); n];
            for &(u, v) in &dense_pairs {
                rows[u].push(v);
            }
            Box::new(AdjacencyList::from(rows))
        }
    };

    tracing::debug!(
        edges = dense_pairs.len(),
        vertices = n,
        weighted = graph.as_weighted().is_some(),
        "normalized edge list"
    );

    Ok(Normalized { graph, ids })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{IntEdgeList, IntWeightedEdgeList, StringEdgeList, StringId};

    fn rows_of(g: &dyn Readable) -> Vec<Vec<VertexId>> {
        (0..g.size())
            .map(|u| (0..g.len(u)).map(|k| g.get(u, k)).collect())
            .collect()
    }

    #[test]
    fn test_first_encounter_order() {
        let data = IntEdgeList::from(vec![(15, 25), (15, 50), (25, 50)]);
        let n = edge_to_adjacency_list(&data).unwrap();
        assert_eq!(n.ids.get(15), Some(0));
        assert_eq!(n.ids.get(25), Some(1));
        assert_eq!(n.ids.get(50), Some(2));
        assert_eq!(n.ids.get(30), None);
        assert_eq!(rows_of(n.graph.as_ref()), vec![vec![1, 2], vec![2], vec![]]);
    }

    #[test]
    fn test_target_seen_before_source() {
        // 7 first appears as a target, then as a source.
        let data = IntEdgeList::from(vec![(3, 7), (7, 1)]);
        let n = edge_to_adjacency_list(&data).unwrap();
        let order: Vec<RawId> = n.ids.iter().map(|(_, raw)| raw).collect();
        assert_eq!(order, vec![3, 7, 1]);
        assert_eq!(n.ids.raw(2), Some(1));
        assert_eq!(rows_of(n.graph.as_ref()), vec![vec![1], vec![2], vec![]]);
    }

    #[test]
    fn test_duplicates_and_self_loops_preserved() {
        let data = IntEdgeList::from(vec![(9, 9), (9, 4), (9, 4)]);
        let n = edge_to_adjacency_list(&data).unwrap();
        assert_eq!(rows_of(n.graph.as_ref()), vec![vec![0, 1, 1], vec![]]);
    }

    #[test]
    fn test_empty_edge_list() {
        let n = edge_to_adjacency_list(&IntEdgeList::default()).unwrap();
        assert_eq!(n.graph.size(), 0);
        assert!(n.ids.is_empty());
    }

    #[test]
    fn test_weighted_input_yields_weighted_graph() {
        let data = IntWeightedEdgeList::from(vec![(15, 25, 5), (25, 30, 8), (50, 75, 10)]);
        let n = edge_to_adjacency_list(&data).unwrap();
        let w = n.graph.as_weighted().expect("weighted output");
        assert_eq!(w.size(), 5);
        assert_eq!(w.get(1, 0), 2);
        assert_eq!(w.weight(1, 0), 8);
        assert_eq!(w.weight(3, 0), 10);
    }

    #[test]
    fn test_unweighted_input_yields_plain_graph() {
        let data = IntEdgeList::from(vec![(1, 2)]);
        let n = edge_to_adjacency_list(&data).unwrap();
        assert!(n.graph.as_weighted().is_none());
    }

    #[test]
    fn test_string_ids_use_raw_id() {
        let data = StringEdgeList(vec![
            (StringId::new("Test", 15), StringId::new("Test", 25)),
            (StringId::new("Test", 15), StringId::new("Test", 50)),
        ]);
        let n = edge_to_adjacency_list(&data).unwrap();
        assert_eq!(n.ids.get(50), Some(2));
    }

    #[test]
    fn test_negative_id_rejected() {
        let data = IntEdgeList::from(vec![(1, 2), (2, -4)]);
        let err = edge_to_adjacency_list(&data).unwrap_err();
        assert_eq!(err, ConversionError::NegativeId { edge: 1, id: -4 });
    }

    /// Edge view that answers differently every time it is asked.
    struct Drifting {
        calls: std::cell::Cell<RawId>,
    }

    impl EdgeListView for Drifting {
        fn len(&self) -> usize {
            2
        }

        fn get(&self, i: usize) -> (RawId, RawId) {
            let call = self.calls.get();
            self.calls.set(call + 1);
            let base = call * 100 + i as RawId * 10;
            (base, base + 1)
        }
    }

    #[test]
    fn test_each_edge_read_once() {
        let data = Drifting {
            calls: std::cell::Cell::new(0),
        };
        let n = edge_to_adjacency_list(&data).unwrap();
        assert_eq!(data.calls.get(), 2);
        let order: Vec<RawId> = n.ids.iter().map(|(_, raw)| raw).collect();
        assert_eq!(order, vec![0, 1, 110, 111]);
        assert_eq!(rows_of(n.graph.as_ref()), vec![vec![1], vec![], vec![3], vec![]]);
    }

    #[test]
    fn test_deterministic() {
        let data = IntEdgeList::from(vec![(40, 10), (10, 20), (20, 40), (99, 10)]);
        let a = edge_to_adjacency_list(&data).unwrap();
        let b = edge_to_adjacency_list(&data).unwrap();
        assert_eq!(a.ids, b.ids);
        assert_eq!(rows_of(a.graph.as_ref()), rows_of(b.graph.as_ref()));
    }
}
