//! End-to-end tests driving the graph from an externally sourced edge list.

use ramus_core::{Graph, GraphBuilder, GraphError, Orientation, Weighting};

/// An edge list as a file-parsing collaborator would supply it.
fn route_edges() -> Vec<(&'static str, &'static str, u32)> {
    vec![
        ("depot", "north", 3),
        ("depot", "south", 2),
        ("north", "east", 4),
        ("south", "east", 1),
        ("east", "harbour", 5),
        ("island-a", "island-b", 7),
    ]
}

fn route_graph() -> Graph<&'static str, u32> {
    let mut graph = Graph::undirected();
    for (source, target, weight) in route_edges() {
        graph
            .add_weighted_edge(source, target, weight)
            .expect("edge list is valid");
    }
    graph
}

#[test]
fn the_full_query_surface_works_on_one_graph() {
    let graph = route_graph();
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 6);

    let reachable: Vec<&str> = graph.bfs(&"depot").expect("present").copied().collect();
    assert_eq!(
        reachable,
        vec!["depot", "north", "south", "east", "harbour"]
    );

    let found = graph
        .shortest_path(&"depot", &"harbour")
        .expect("valid query")
        .expect("reachable");
    assert_eq!(found.path(), ["depot", "south", "east", "harbour"]);
    assert_eq!(found.total_weight(), 8);

    let components = graph.connected_components();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1], vec!["island-a", "island-b"]);

    let forest = graph.minimum_spanning_tree().expect("undirected");
    assert_eq!(forest.component_count(), 2);
    assert_eq!(forest.edges().len(), graph.vertex_count() - 2);
}

#[test]
fn mutating_the_graph_keeps_queries_consistent() {
    let mut graph = route_graph();

    graph.remove_vertex(&"east").expect("present");
    assert_eq!(
        graph.shortest_path(&"depot", &"harbour").expect("valid"),
        None
    );
    assert_eq!(graph.connected_components().len(), 3);

    graph
        .add_weighted_edge("south", "harbour", 9)
        .expect("valid edge");
    let found = graph
        .shortest_path(&"depot", &"harbour")
        .expect("valid")
        .expect("reconnected");
    assert_eq!(found.total_weight(), 11);
}

#[test]
fn queries_run_under_a_tracing_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let graph = route_graph();
        let found = graph
            .shortest_path(&"depot", &"east")
            .expect("valid query")
            .expect("reachable");
        assert_eq!(found.total_weight(), 3);
        assert!(graph.minimum_spanning_tree().is_ok());
    });
}

#[test]
fn an_unweighted_directed_graph_counts_hops() {
    let mut graph: Graph<u8, u32> = GraphBuilder::new()
        .with_orientation(Orientation::Directed)
        .with_weighting(Weighting::Unweighted)
        .build();
    for (source, target) in [(1, 2), (2, 3), (3, 4), (1, 4)] {
        graph.add_edge(source, target).expect("valid edge");
    }

    let found = graph
        .shortest_path(&1, &4)
        .expect("valid query")
        .expect("reachable");
    assert_eq!(found.path(), [1, 4]);
    assert_eq!(found.total_weight(), 1);

    assert_eq!(
        graph.minimum_spanning_tree(),
        Err(GraphError::MstRequiresUndirected)
    );
}
