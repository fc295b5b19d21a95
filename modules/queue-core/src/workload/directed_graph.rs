
/// Vertex count used by the traversal benchmarks.
pub const DEFAULT_VERTEX_COUNT: usize = 10_000;

/// Dense synthetic directed graph where every vertex `v` has an edge to each vertex below it.
///
/// Nothing is materialized; vertices, edges and neighbors are produced lazily.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectedGraph {
  vertex_count: usize,
}

impl DirectedGraph {
  /// Creates a graph with `vertex_count` vertices numbered from zero.
  #[must_use]
  pub const fn new(vertex_count: usize) -> Self {
    Self { vertex_count }
  }

  /// Returns the number of vertices.
  #[must_use]
  pub const fn vertex_count(&self) -> usize {
    self.vertex_count
  }

  /// Yields every vertex in ascending order.
  pub fn vertices(&self) -> impl Iterator<Item = usize> + use<> {
    0..self.vertex_count
  }

  /// Yields the targets of the edges leaving `vertex`, i.e. every vertex below it.
  pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + use<> {
    0..vertex.min(self.vertex_count)
  }

  /// Yields every edge as a `(source, target)` pair, grouped by source.
  pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
    let graph = *self;
    self.vertices().flat_map(move |source| graph.neighbors(source).map(move |target| (source, target)))
  }
}

impl Default for DirectedGraph {
  fn default() -> Self {
    Self::new(DEFAULT_VERTEX_COUNT)
  }
}
