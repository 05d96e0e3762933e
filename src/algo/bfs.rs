//! Predicate-driven breadth-first search

use crate::graph::{Edge, EdgeId, GraphStore, TraversalIndex, Vertex, VertexId};

/// A path found by BFS: an alternating vertex/edge sequence.
///
/// `vertices` always holds one more entry than `edges`; a zero-hop path is
/// a single vertex satisfying both predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

impl Path {
    /// Number of edge hops
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

/// Breadth-first search from a source vertex set to a target vertex set.
///
/// Mirrors the fluent surface of the demo it reproduces:
///
/// ```
/// use trellis::algo::Bfs;
/// use trellis::graph::{Edge, GraphStore, Vertex};
///
/// let store = GraphStore::new(
///     vec![
///         Vertex::new("101").with_property("name", "Trina"),
///         Vertex::new("301").with_property("name", "Ajay"),
///     ],
///     vec![Edge::new("101", "301")],
/// )
/// .unwrap();
/// let index = store.traversal_index();
///
/// let paths = Bfs::new(
///     &store,
///     &index,
///     |v| v.get_property("name").and_then(|p| p.as_string()) == Some("Trina"),
///     |v| v.get_property("name").and_then(|p| p.as_string()) == Some("Ajay"),
/// )
/// .max_path_length(3)
/// .run();
/// assert_eq!(paths.len(), 1);
/// ```
pub struct Bfs<'g> {
    store: &'g GraphStore,
    index: &'g TraversalIndex,
    from: Box<dyn Fn(&Vertex) -> bool + 'g>,
    to: Box<dyn Fn(&Vertex) -> bool + 'g>,
    edge_filter: Option<Box<dyn Fn(&Edge) -> bool + 'g>>,
    max_path_length: Option<usize>,
}

impl<'g> Bfs<'g> {
    /// Start a search selecting sources with `from` and targets with `to`
    pub fn new(
        store: &'g GraphStore,
        index: &'g TraversalIndex,
        from: impl Fn(&Vertex) -> bool + 'g,
        to: impl Fn(&Vertex) -> bool + 'g,
    ) -> Self {
        Bfs {
            store,
            index,
            from: Box::new(from),
            to: Box::new(to),
            edge_filter: None,
            max_path_length: None,
        }
    }

    /// Restrict traversal to edges satisfying `filter`
    pub fn edge_filter(mut self, filter: impl Fn(&Edge) -> bool + 'g) -> Self {
        self.edge_filter = Some(Box::new(filter));
        self
    }

    /// Bound the number of hops (default unbounded)
    pub fn max_path_length(mut self, hops: usize) -> Self {
        self.max_path_length = Some(hops);
        self
    }

    /// Run the search.
    ///
    /// Traversal is level-synchronous from the union of sources over
    /// outgoing edges; the first level containing any target ends the
    /// search and every shortest path of that length is reported. A source
    /// already satisfying the target predicate yields a zero-hop path. No
    /// reachable target is a normal outcome: the result is empty, not an
    /// error.
    pub fn run(self) -> Vec<Path> {
        let n = self.store.vertex_count();
        let sources: Vec<usize> = (0..n)
            .filter(|&pos| (self.from)(self.store.vertex_at(pos)))
            .collect();
        if sources.is_empty() {
            return Vec::new();
        }

        // Zero-hop hits short-circuit: nothing can be shorter.
        let zero_hop: Vec<Path> = sources
            .iter()
            .filter(|&&pos| (self.to)(self.store.vertex_at(pos)))
            .map(|&pos| Path {
                vertices: vec![self.store.id_at(pos).clone()],
                edges: Vec::new(),
            })
            .collect();
        if !zero_hop.is_empty() {
            return zero_hop;
        }

        let mut dist = vec![usize::MAX; n];
        let mut parents: Vec<Vec<(usize, EdgeId)>> = vec![Vec::new(); n];
        for &s in &sources {
            dist[s] = 0;
        }

        let mut frontier = sources;
        let mut level = 0usize;

        loop {
            if let Some(max) = self.max_path_length {
                if level >= max {
                    return Vec::new();
                }
            }
            level += 1;

            let mut next = Vec::new();
            for &u in &frontier {
                for &edge_id in self.index.out_edges(u) {
                    let Some(edge) = self.store.edge(edge_id) else {
                        continue;
                    };
                    if let Some(filter) = &self.edge_filter {
                        if !filter(edge) {
                            continue;
                        }
                    }
                    let Some(v) = self.store.position_of(&edge.dst) else {
                        continue;
                    };
                    if dist[v] == usize::MAX {
                        dist[v] = level;
                        parents[v].push((u, edge_id));
                        next.push(v);
                    } else if dist[v] == level {
                        // Equal-length path through a different parent/edge
                        parents[v].push((u, edge_id));
                    }
                }
            }

            if next.is_empty() {
                return Vec::new();
            }

            let hits: Vec<usize> = next
                .iter()
                .copied()
                .filter(|&v| (self.to)(self.store.vertex_at(v)))
                .collect();
            if !hits.is_empty() {
                let mut paths = Vec::new();
                for target in hits {
                    self.collect_paths(target, &dist, &parents, &mut Vec::new(), &mut paths);
                }
                return paths;
            }

            frontier = next;
        }
    }

    /// Walk the shortest-path DAG backward from `v`, emitting every path
    /// once a source (distance 0) is reached.
    fn collect_paths(
        &self,
        v: usize,
        dist: &[usize],
        parents: &[Vec<(usize, EdgeId)>],
        suffix: &mut Vec<(usize, EdgeId)>,
        paths: &mut Vec<Path>,
    ) {
        if dist[v] == 0 {
            let mut vertices = vec![self.store.id_at(v).clone()];
            let mut edges = Vec::with_capacity(suffix.len());
            for &(vertex, edge) in suffix.iter().rev() {
                vertices.push(self.store.id_at(vertex).clone());
                edges.push(edge);
            }
            paths.push(Path { vertices, edges });
            return;
        }
        for &(parent, edge) in &parents[v] {
            suffix.push((v, edge));
            self.collect_paths(parent, dist, parents, suffix, paths);
            suffix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn demo_store() -> GraphStore {
        GraphStore::new(
            vec![
                Vertex::new("101").with_property("name", "Trina").with_property("age", 27i64),
                Vertex::new("201").with_property("name", "Raman").with_property("age", 45i64),
                Vertex::new("301").with_property("name", "Ajay").with_property("age", 32i64),
                Vertex::new("401").with_property("name", "Sima").with_property("age", 23i64),
            ],
            vec![
                Edge::new("101", "301").with_property("relationship", "Colleague"),
                Edge::new("101", "401").with_property("relationship", "Friends"),
                Edge::new("401", "201").with_property("relationship", "Reports"),
                Edge::new("301", "201").with_property("relationship", "Reports"),
                Edge::new("201", "101").with_property("relationship", "Reports"),
            ],
        )
        .unwrap()
    }

    fn named<'a>(name: &'a str) -> impl Fn(&Vertex) -> bool + 'a {
        move |v| v.get_property("name").and_then(|p| p.as_string()) == Some(name)
    }

    fn older_than(age: i64) -> impl Fn(&Vertex) -> bool {
        move |v| {
            v.get_property("age")
                .and_then(|a| a.as_integer())
                .is_some_and(|a| a > age)
        }
    }

    #[test]
    fn test_bfs_finds_one_hop_path() {
        let store = demo_store();
        let index = store.traversal_index();

        // Trina -> age > 27: 101->301 (Ajay, 32) at one hop
        let paths = Bfs::new(&store, &index, named("Trina"), older_than(27)).run();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].hops(), 1);
        assert_eq!(
            paths[0].vertices,
            vec![VertexId::new("101"), VertexId::new("301")]
        );
    }

    #[test]
    fn test_bfs_edge_filter_forces_detour() {
        let store = demo_store();
        let index = store.traversal_index();

        // Trina -> age > 30 without Colleague edges: 101->401->201 (Raman)
        let paths = Bfs::new(&store, &index, named("Trina"), older_than(30))
            .edge_filter(|e| {
                e.get_property("relationship").and_then(|r| r.as_string()) != Some("Colleague")
            })
            .max_path_length(3)
            .run();

        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].vertices,
            vec![VertexId::new("101"), VertexId::new("401"), VertexId::new("201")]
        );
    }

    #[test]
    fn test_bfs_max_path_length_cuts_off() {
        let store = demo_store();
        let index = store.traversal_index();

        let paths = Bfs::new(&store, &index, named("Trina"), older_than(30))
            .edge_filter(|e| {
                e.get_property("relationship").and_then(|r| r.as_string()) != Some("Colleague")
            })
            .max_path_length(1)
            .run();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_bfs_zero_hop_when_source_is_target() {
        let store = demo_store();
        let index = store.traversal_index();

        let paths = Bfs::new(&store, &index, named("Raman"), older_than(40)).run();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].hops(), 0);
        assert_eq!(paths[0].vertices, vec![VertexId::new("201")]);
    }

    #[test]
    fn test_bfs_reports_all_shortest_ties() {
        // Two distinct length-2 routes from a to d
        let store = GraphStore::new(
            vec![
                Vertex::new("a"),
                Vertex::new("b"),
                Vertex::new("c"),
                Vertex::new("d").with_property("goal", true),
            ],
            vec![
                Edge::new("a", "b"),
                Edge::new("a", "c"),
                Edge::new("b", "d"),
                Edge::new("c", "d"),
            ],
        )
        .unwrap();
        let index = store.traversal_index();

        let paths = Bfs::new(
            &store,
            &index,
            |v| v.id == VertexId::new("a"),
            |v| v.get_property("goal").and_then(|g| g.as_boolean()) == Some(true),
        )
        .run();

        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.hops() == 2));
    }

    #[test]
    fn test_bfs_parallel_edges_are_distinct_paths() {
        let store = GraphStore::new(
            vec![Vertex::new("a"), Vertex::new("b")],
            vec![Edge::new("a", "b"), Edge::new("a", "b")],
        )
        .unwrap();
        let index = store.traversal_index();

        let paths = Bfs::new(
            &store,
            &index,
            |v| v.id == VertexId::new("a"),
            |v| v.id == VertexId::new("b"),
        )
        .run();

        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0].edges, paths[1].edges);
    }

    #[test]
    fn test_bfs_no_route_is_empty_not_error() {
        let store = demo_store();
        let index = store.traversal_index();

        // Nobody is older than 50
        let paths = Bfs::new(&store, &index, named("Trina"), older_than(50)).run();
        assert!(paths.is_empty());
    }
}
