use anyhow::Result;
use trellis::algo::{
    connected_components, label_propagation, page_rank, shortest_paths, triangle_count, Bfs,
    LabelPropagationConfig, PageRankConfig,
};
use trellis::graph::{Edge, GraphStore, PropertyValue, Vertex, VertexId};
use trellis::motif::{find_motif, Motif};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Trellis Graph Engine v{}", trellis::version());
    println!("==========================================");
    println!();

    let store = build_social_graph()?;
    let index = store.traversal_index();

    println!("=== Demo 1: Graph Snapshot ===");
    for vertex in store.vertices() {
        println!(
            "  ({}) name={} age={}",
            vertex.id,
            display(vertex.get_property("name")),
            display(vertex.get_property("age")),
        );
    }
    for edge in store.edges() {
        println!(
            "  {} -[{}]-> {}",
            edge.src,
            display(edge.get_property("relationship")),
            edge.dst,
        );
    }

    println!("\n=== Demo 2: Degrees and Edge Filters ===");
    let mut in_degrees: Vec<_> = index.in_degree_table(&store).into_iter().collect();
    in_degrees.sort();
    for (id, degree) in in_degrees {
        println!("  in-degree of {id}: {degree}");
    }

    let youngest = store
        .vertices()
        .filter_map(|v| v.get_property("age").and_then(|a| a.as_integer()))
        .min();
    if let Some(age) = youngest {
        println!("  youngest age: {age}");
    }

    let friendships = store.filter_edges(|e| {
        e.get_property("relationship").and_then(|r| r.as_string()) == Some("Friends")
    });
    println!("  Friends relationships: {}", friendships.edge_count());

    println!("\n=== Demo 3: Motif Finding ===");
    let motif = Motif::parse("(a)-[e]->(b)")?;
    let seniors: Vec<_> = find_motif(&store, &index, &motif)
        .into_iter()
        .filter(|m| {
            m.vertex("b", &store)
                .and_then(|v| v.get_property("age"))
                .and_then(|a| a.as_integer())
                .is_some_and(|age| age > 40)
        })
        .collect();
    for binding in &seniors {
        if let (Some(a), Some(b)) = (binding.vertex("a", &store), binding.vertex("b", &store)) {
            println!(
                "  (a)-[e]->(b) with b.age > 40: a={} b={}",
                display(a.get_property("name")),
                display(b.get_property("name")),
            );
        }
    }

    println!("\n=== Demo 4: Subgraphs ===");
    let over_30 = store.filter_vertices(|v| {
        v.get_property("age").and_then(|a| a.as_integer()).is_some_and(|age| age > 30)
    });
    let reports = over_30.filter_edges(|e| {
        e.get_property("relationship").and_then(|r| r.as_string()) == Some("Reports")
    });
    println!(
        "  age > 30, Reports only: {} vertices, {} edges",
        reports.vertex_count(),
        reports.edge_count(),
    );

    // Triplet filter: Reports edges pointing at an older vertex
    let upward_reports = triplet_filter(&store, &index, &motif)?;
    println!(
        "  Reports to someone older: {} vertices, {} edges",
        upward_reports.vertex_count(),
        upward_reports.edge_count(),
    );

    println!("\n=== Demo 5: Breadth-First Search ===");
    let paths = Bfs::new(&store, &index, named("Trina"), older_than(27)).run();
    for path in &paths {
        println!("  Trina to age > 27: {}", join_path(&path.vertices));
    }

    let paths = Bfs::new(&store, &index, named("Trina"), older_than(30))
        .edge_filter(|e| {
            e.get_property("relationship").and_then(|r| r.as_string()) != Some("Colleague")
        })
        .max_path_length(3)
        .run();
    for path in &paths {
        println!(
            "  Trina to age > 30, avoiding Colleague edges: {}",
            join_path(&path.vertices),
        );
    }

    println!("\n=== Demo 6: Connected Components ===");
    let mut components: Vec<_> = connected_components(&store).into_iter().collect();
    components.sort();
    for (id, component) in components {
        println!("  {id} in component {component}");
    }

    println!("\n=== Demo 7: Label Propagation ===");
    let mut labels: Vec<_> =
        label_propagation(&store, &index, LabelPropagationConfig { max_iter: 5 })
            .into_iter()
            .collect();
    labels.sort();
    for (id, label) in labels {
        println!("  {id} labeled {label}");
    }

    println!("\n=== Demo 8: PageRank ===");
    let result = page_rank(
        &store,
        &index,
        PageRankConfig {
            reset_probability: 0.15,
            tol: 0.01,
            ..PageRankConfig::default()
        },
    )?;
    let mut ranks: Vec<_> = result.ranks.into_iter().collect();
    ranks.sort_by(|a, b| a.0.cmp(&b.0));
    for (id, rank) in ranks {
        println!("  rank of {id}: {rank:.4}");
    }
    for (edge, weight) in store.edges().iter().zip(&result.edge_weights) {
        println!("  {} -> {} weight {weight:.2}", edge.src, edge.dst);
    }

    println!("\n=== Demo 9: Shortest Paths ===");
    let landmarks = vec![VertexId::new("101"), VertexId::new("401")];
    let mut distances: Vec<_> = shortest_paths(&store, &index, &landmarks)?
        .into_iter()
        .collect();
    distances.sort_by(|a, b| a.0.cmp(&b.0));
    for (id, per_landmark) in distances {
        let mut entries: Vec<_> = per_landmark.into_iter().collect();
        entries.sort();
        let rendered: Vec<String> = entries
            .iter()
            .map(|(landmark, d)| format!("{landmark}: {d}"))
            .collect();
        println!("  distances from {id}: {{{}}}", rendered.join(", "));
    }

    println!("\n=== Demo 10: Triangle Count ===");
    let mut triangles: Vec<_> = triangle_count(&store, &index).into_iter().collect();
    triangles.sort();
    for (id, count) in triangles {
        println!("  {id} participates in {count} triangle(s)");
    }

    Ok(())
}

fn build_social_graph() -> Result<GraphStore> {
    let store = GraphStore::new(
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
    )?;
    Ok(store)
}

/// Keep all vertices, but only Reports edges whose source is younger than
/// its destination.
fn triplet_filter(
    store: &GraphStore,
    index: &trellis::graph::TraversalIndex,
    motif: &Motif,
) -> Result<GraphStore> {
    let edges: Vec<Edge> = find_motif(store, index, motif)
        .into_iter()
        .filter(|m| {
            m.edge("e", store)
                .and_then(|e| e.get_property("relationship"))
                .and_then(|r| r.as_string())
                == Some("Reports")
        })
        .filter(|m| {
            let src_age = m
                .vertex("a", store)
                .and_then(|v| v.get_property("age"))
                .and_then(|a| a.as_integer());
            let dst_age = m
                .vertex("b", store)
                .and_then(|v| v.get_property("age"))
                .and_then(|a| a.as_integer());
            matches!((src_age, dst_age), (Some(a), Some(b)) if a < b)
        })
        .filter_map(|m| m.edge("e", store).cloned())
        .collect();

    let vertices = store.vertices().cloned().collect();
    Ok(GraphStore::subgraph(vertices, edges)?)
}

fn named(name: &str) -> impl Fn(&Vertex) -> bool + '_ {
    move |v| v.get_property("name").and_then(|p| p.as_string()) == Some(name)
}

fn older_than(age: i64) -> impl Fn(&Vertex) -> bool {
    move |v| {
        v.get_property("age")
            .and_then(|a| a.as_integer())
            .is_some_and(|a| a > age)
    }
}

fn display(value: Option<&PropertyValue>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "<unset>".to_string(),
    }
}

fn join_path(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
