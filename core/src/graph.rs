use std::collections::HashMap;

/// Dense vertex identifier (0..n-1 after normalization).
pub type VertexId = usize;

/// Vertex identifier as it appears in an edge list (sparse, externally assigned).
pub type RawId = i64;

/// Edge weight.
pub type Weight = i64;

/// Weight given to edges added through the unweighted `Modifiable::add`.
pub const DEFAULT_WEIGHT: Weight = 1;

/// A directed edge from `u` to `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        Self { u, v }
    }
}

/// A directed edge carrying an integer weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// The minimal contract a graph must satisfy to be searched.
///
/// `get(v, k)` is the k-th neighbor of `v`, `len(v)` the out-degree of `v`,
/// `size()` the vertex count. Every traversal goes through these three calls.
///
/// The `as_*` methods are capability queries: a representation that also
/// carries weights or supports mutation overrides them to hand out the
/// richer view. Callers branch on the answer instead of on concrete types.
pub trait Readable {
    fn get(&self, vertex: VertexId, k: usize) -> VertexId;
    fn size(&self) -> usize;
    fn len(&self, vertex: VertexId) -> usize;

    fn as_weighted(&self) -> Option<&dyn Weighted> {
        None
    }

    fn as_modifiable(&mut self) -> Option<&mut dyn Modifiable> {
        None
    }
}

/// Weight of the k-th outgoing edge of a vertex.
pub trait Weighted: Readable {
    fn weight(&self, vertex: VertexId, k: usize) -> Weight;
}

/// In-place mutation.
pub trait Modifiable: Readable {
    /// Append the directed edge `u -> v`.
    fn add(&mut self, u: VertexId, v: VertexId);
    /// Delete `vertex` and every edge referencing it.
    fn remove(&mut self, vertex: VertexId);
}

/// A flat list of raw `(u, v)` pairs.
pub trait EdgeListView {
    fn len(&self) -> usize;
    fn get(&self, i: usize) -> (RawId, RawId);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_weighted(&self) -> Option<&dyn WeightedEdgeListView> {
        None
    }
}

pub trait WeightedEdgeListView: EdgeListView {
    fn weight(&self, i: usize) -> Weight;
}

// ---------------------------------------------------------------------------
// Adjacency representations
// ---------------------------------------------------------------------------

/// Dense adjacency list: `rows[u]` holds the targets of `u`'s outgoing edges
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    rows: Vec<Vec<VertexId>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known vertex count; every vertex starts isolated.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); vertex_count],
        }
    }

    pub fn rows(&self) -> &[Vec<VertexId>] {
        &self.rows
    }

    fn grow_to(&mut self, vertex: VertexId) {
        if vertex >= self.rows.len() {
            self.rows.resize_with(vertex + 1, Vec::new);
        }
    }
}

impl From<Vec<Vec<VertexId>>> for AdjacencyList {
    fn from(rows: Vec<Vec<VertexId>>) -> Self {
        Self { rows }
    }
}

impl Readable for AdjacencyList {
    fn get(&self, vertex: VertexId, k: usize) -> VertexId {
        self.rows[vertex][k]
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    fn len(&self, vertex: VertexId) -> usize {
        self.rows[vertex].len()
    }

    fn as_modifiable(&mut self) -> Option<&mut dyn Modifiable> {
        Some(self)
    }
}

impl Modifiable for AdjacencyList {
    /// Grows the vertex range so both endpoints exist.
    fn add(&mut self, u: VertexId, v: VertexId) {
        self.grow_to(u.max(v));
        self.rows[u].push(v);
    }

    /// Removes the row, drops every edge into `vertex`, and shifts higher ids
    /// down by one so the id range stays dense. Unknown vertices are ignored.
    fn remove(&mut self, vertex: VertexId) {
        if vertex >= self.rows.len() {
            return;
        }
        self.rows.remove(vertex);
        for row in &mut self.rows {
            row.retain(|&t| t != vertex);
            for t in row.iter_mut() {
                if *t > vertex {
                    *t -= 1;
                }
            }
        }
    }
}

/// Adjacency list whose edges carry weights. `rows[u][k] = (target, weight)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedAdjacencyList {
    rows: Vec<Vec<(VertexId, Weight)>>,
}

impl WeightedAdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); vertex_count],
        }
    }

    pub fn rows(&self) -> &[Vec<(VertexId, Weight)>] {
        &self.rows
    }

    pub fn add_weighted(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        let top = u.max(v);
        if top >= self.rows.len() {
            self.rows.resize_with(top + 1, Vec::new);
        }
        self.rows[u].push((v, weight));
    }

    /// Outgoing edges of `vertex` as `WeightedEdge`s, in adjacency order.
    pub fn edges_from(&self, vertex: VertexId) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.rows[vertex]
            .iter()
            .map(move |&(v, weight)| WeightedEdge { u: vertex, v, weight })
    }
}

impl Readable for WeightedAdjacencyList {
    fn get(&self, vertex: VertexId, k: usize) -> VertexId {
        self.rows[vertex][k].0
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    fn len(&self, vertex: VertexId) -> usize {
        self.rows[vertex].len()
    }

    fn as_weighted(&self) -> Option<&dyn Weighted> {
        Some(self)
    }

    fn as_modifiable(&mut self) -> Option<&mut dyn Modifiable> {
        Some(self)
    }
}

impl Weighted for WeightedAdjacencyList {
    fn weight(&self, vertex: VertexId, k: usize) -> Weight {
        self.rows[vertex][k].1
    }
}

impl Modifiable for WeightedAdjacencyList {
    fn add(&mut self, u: VertexId, v: VertexId) {
        self.add_weighted(u, v, DEFAULT_WEIGHT);
    }

    fn remove(&mut self, vertex: VertexId) {
        if vertex >= self.rows.len() {
            return;
        }
        self.rows.remove(vertex);
        for row in &mut self.rows {
            row.retain(|&(t, _)| t != vertex);
            for (t, _) in row.iter_mut() {
                if *t > vertex {
                    *t -= 1;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Edge-list representations
// ---------------------------------------------------------------------------

/// Unweighted edge list of raw integer ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntEdgeList(pub Vec<(RawId, RawId)>);

impl From<Vec<(RawId, RawId)>> for IntEdgeList {
    fn from(edges: Vec<(RawId, RawId)>) -> Self {
        Self(edges)
    }
}

impl EdgeListView for IntEdgeList {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, i: usize) -> (RawId, RawId) {
        self.0[i]
    }
}

/// Weighted edge list: `(u, v, weight)` triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntWeightedEdgeList(pub Vec<(RawId, RawId, Weight)>);

impl From<Vec<(RawId, RawId, Weight)>> for IntWeightedEdgeList {
    fn from(edges: Vec<(RawId, RawId, Weight)>) -> Self {
        Self(edges)
    }
}

impl EdgeListView for IntWeightedEdgeList {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, i: usize) -> (RawId, RawId) {
        let (u, v, _) = self.0[i];
        (u, v)
    }

    fn as_weighted(&self) -> Option<&dyn WeightedEdgeListView> {
        Some(self)
    }
}

impl WeightedEdgeListView for IntWeightedEdgeList {
    fn weight(&self, i: usize) -> Weight {
        self.0[i].2
    }
}

/// A string-keyed vertex with its externally assigned raw id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringId {
    pub name: String,
    pub id: RawId,
}

impl StringId {
    pub fn new(name: impl Into<String>, id: RawId) -> Self {
        Self { name: name.into(), id }
    }
}

/// Edge list whose endpoints are string-keyed vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringEdgeList(pub Vec<(StringId, StringId)>);

impl StringEdgeList {
    /// Build from plain string keys, deriving raw ids by interning: the first
    /// time a key is seen it gets the next id.
    pub fn from_keys<'a, I>(pairs: I) -> (Self, KeyInterner)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut interner = KeyInterner::new();
        let edges = pairs
            .into_iter()
            .map(|(from, to)| {
                let u = StringId::new(from, interner.intern(from));
                let v = StringId::new(to, interner.intern(to));
                (u, v)
            })
            .collect();
        (Self(edges), interner)
    }
}

impl EdgeListView for StringEdgeList {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, i: usize) -> (RawId, RawId) {
        let (u, v) = &self.0[i];
        (u.id, v.id)
    }
}

/// Interns string keys to raw ids (avoids re-deriving ids for repeated keys).
#[derive(Debug, Clone, Default)]
pub struct KeyInterner {
    keys: Vec<String>,
    ids: HashMap<String, RawId>,
}

impl KeyInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, key: &str) -> RawId {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }
        let id = self.keys.len() as RawId;
        self.keys.push(key.to_string());
        self.ids.insert(key.to_string(), id);
        id
    }

    pub fn resolve(&self, key: &str) -> Option<RawId> {
        self.ids.get(key).copied()
    }

    /// Resolve an id back to its key. Returns None for ids never handed out.
    pub fn key(&self, id: RawId) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|i| self.keys.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
