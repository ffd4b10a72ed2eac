//! Unit tests for the graph component.

use proptest::prelude::*;
use rstest::rstest;

use super::{Graph, GraphBuilder, Orientation, Weighting};
use crate::error::GraphError;

fn undirected_from(edges: &[(u32, u32, u32)]) -> Graph<u32, u32> {
    let mut graph = Graph::undirected();
    for &(source, target, weight) in edges {
        graph
            .add_weighted_edge(source, target, weight)
            .expect("valid edge");
    }
    graph
}

/// Checks the spanning forest is acyclic and counts its components, the
/// same way a sequential union-find oracle would.
fn check_forest_invariants(graph: &Graph<u32, u32>, forest: &super::SpanningForest<u32, u32>) {
    let vertices: Vec<u32> = graph.vertices().copied().collect();
    let position = |vertex: u32| {
        vertices
            .iter()
            .position(|&existing| existing == vertex)
            .expect("forest edges reference graph vertices")
    };

    let mut parent: Vec<usize> = (0..vertices.len()).collect();

    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    let mut total = 0;
    for edge in forest.edges() {
        let left = find(&mut parent, position(*edge.source()));
        let right = find(&mut parent, position(*edge.target()));
        assert_ne!(left, right, "spanning forest contains a cycle");
        parent[right] = left;
        total += edge.weight();
    }
    assert_eq!(forest.total_weight(), total);

    let mut roots: Vec<usize> = (0..vertices.len())
        .map(|node| find(&mut parent, node))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    assert_eq!(forest.component_count(), roots.len());
}

#[test]
fn duplicate_vertex_insertion_is_a_no_op() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    assert!(graph.add_vertex(1));
    assert!(!graph.add_vertex(1));
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.neighbors(&1).expect("present").count(), 0);
}

#[test]
fn add_edge_creates_missing_endpoints_and_mirrors() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    graph.add_edge(1, 2).expect("valid edge");
    graph.add_edge(1, 3).expect("valid edge");

    assert!(graph.has_vertex(&1) && graph.has_vertex(&2) && graph.has_vertex(&3));
    let of_one: Vec<u32> = graph.neighbors(&1).expect("present").map(|(v, _)| *v).collect();
    let of_two: Vec<u32> = graph.neighbors(&2).expect("present").map(|(v, _)| *v).collect();
    assert_eq!(of_one, vec![2, 3]);
    assert_eq!(of_two, vec![1]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn directed_edges_are_one_way() {
    let mut graph: Graph<u32, u32> = Graph::directed();
    graph.add_weighted_edge(1, 2, 5).expect("valid edge");
    assert!(graph.has_edge(&1, &2));
    assert!(!graph.has_edge(&2, &1));
    assert_eq!(graph.neighbors(&2).expect("present").count(), 0);
}

#[test]
fn parallel_edge_updates_weight_in_place() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    assert_eq!(graph.add_weighted_edge(1, 2, 5).expect("valid"), None);
    assert_eq!(graph.add_weighted_edge(1, 2, 9).expect("valid"), Some(5));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&1, &2), Some(&9));
    // the mirrored entry tracks the update
    assert_eq!(graph.edge_weight(&2, &1), Some(&9));
}

#[test]
fn self_loops_are_rejected_without_mutation() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    let err = graph.add_edge(7, 7).expect_err("self-loop must fail");
    assert!(matches!(err, GraphError::SelfLoop { .. }));
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn unweighted_graphs_reject_explicit_weights() {
    let mut graph: Graph<u32, u32> = GraphBuilder::new()
        .with_weighting(Weighting::Unweighted)
        .build();
    let err = graph
        .add_weighted_edge(1, 2, 3)
        .expect_err("explicit weight must fail");
    assert_eq!(err, GraphError::UnweightedGraph);
    assert_eq!(graph.vertex_count(), 0);

    graph.add_edge(1, 2).expect("unit edge");
    assert_eq!(graph.edge_weight(&1, &2), Some(&1));
}

#[test]
fn remove_edge_removes_both_mirrored_entries() {
    let mut graph = undirected_from(&[(1, 2, 4), (2, 3, 5)]);
    assert_eq!(graph.remove_edge(&1, &2), Ok(4));
    assert!(!graph.has_edge(&1, &2));
    assert!(!graph.has_edge(&2, &1));
    assert_eq!(graph.edge_count(), 1);

    assert!(matches!(
        graph.remove_edge(&1, &2),
        Err(GraphError::EdgeNotFound { .. })
    ));
    assert!(matches!(
        graph.remove_edge(&1, &9),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn remove_vertex_scrubs_neighbour_lists() {
    let mut graph = undirected_from(&[(1, 2, 1), (1, 3, 1), (2, 3, 1)]);
    graph.remove_vertex(&1).expect("present");

    assert!(!graph.has_vertex(&1));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    let of_two: Vec<u32> = graph.neighbors(&2).expect("present").map(|(v, _)| *v).collect();
    assert_eq!(of_two, vec![3]);

    assert!(matches!(
        graph.remove_vertex(&1),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn remove_vertex_scrubs_inbound_directed_edges() {
    let mut graph: Graph<u32, u32> = Graph::directed();
    graph.add_weighted_edge(1, 3, 1).expect("valid");
    graph.add_weighted_edge(2, 3, 1).expect("valid");
    graph.add_weighted_edge(3, 2, 1).expect("valid");

    graph.remove_vertex(&3).expect("present");
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.neighbors(&1).expect("present").count(), 0);
    assert_eq!(graph.neighbors(&2).expect("present").count(), 0);
}

#[test]
fn neighbors_of_missing_vertex_is_an_error() {
    let graph: Graph<u32, u32> = Graph::undirected();
    assert!(matches!(
        graph.neighbors(&1),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn bfs_visits_in_breadth_order_without_revisiting() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    for (source, target) in [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)] {
        graph.add_edge(source, target).expect("valid edge");
    }
    let order: Vec<u32> = graph.bfs(&1).expect("present").copied().collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
}

#[test]
fn dfs_follows_first_inserted_neighbour_first() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    for (source, target) in [(1, 2), (1, 3), (2, 4), (3, 4)] {
        graph.add_edge(source, target).expect("valid edge");
    }
    let order: Vec<u32> = graph.dfs(&1).expect("present").copied().collect();
    assert_eq!(order, vec![1, 2, 4, 3]);
}

#[rstest]
#[case::bfs(true)]
#[case::dfs(false)]
fn traversal_from_missing_start_is_an_error(#[case] breadth: bool) {
    let graph: Graph<u32, u32> = Graph::undirected();
    let err = if breadth {
        graph.bfs(&1).map(|_| ()).expect_err("missing start")
    } else {
        graph.dfs(&1).map(|_| ()).expect_err("missing start")
    };
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
}

#[test]
fn directed_traversal_respects_orientation() {
    let mut graph: Graph<u32, u32> = Graph::directed();
    graph.add_edge(1, 2).expect("valid edge");
    graph.add_edge(3, 1).expect("valid edge");
    let order: Vec<u32> = graph.bfs(&1).expect("present").copied().collect();
    assert_eq!(order, vec![1, 2]);
}

#[test]
fn shortest_path_prefers_the_lighter_detour() {
    let graph = undirected_from(&[(1, 2, 1), (2, 3, 2), (1, 3, 4)]);
    let found = graph
        .shortest_path(&1, &3)
        .expect("valid query")
        .expect("reachable");
    assert_eq!(found.path(), [1, 2, 3]);
    assert_eq!(found.total_weight(), 3);
}

#[test]
fn shortest_path_to_unreachable_vertex_is_none() {
    let graph = undirected_from(&[(1, 2, 1), (3, 4, 1)]);
    assert_eq!(graph.shortest_path(&1, &4).expect("valid query"), None);
}

#[test]
fn shortest_path_from_a_vertex_to_itself_is_trivial() {
    let graph = undirected_from(&[(1, 2, 3)]);
    let found = graph
        .shortest_path(&1, &1)
        .expect("valid query")
        .expect("reachable");
    assert_eq!(found.path(), [1]);
    assert_eq!(found.total_weight(), 0);
}

#[test]
fn shortest_path_rejects_negative_weights_before_searching() {
    let mut graph: Graph<u32, i32> = Graph::undirected();
    graph.add_weighted_edge(1, 2, 3).expect("valid");
    graph.add_weighted_edge(2, 3, -1).expect("valid");

    let err = graph
        .shortest_path(&1, &3)
        .expect_err("negative weight must fail");
    assert!(matches!(err, GraphError::NegativeWeight { .. }));
    // the query never mutates the graph
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight(&2, &3), Some(&-1));
}

#[rstest]
#[case::missing_start(9, 2)]
#[case::missing_end(1, 9)]
fn shortest_path_requires_both_endpoints(#[case] start: u32, #[case] end: u32) {
    let graph = undirected_from(&[(1, 2, 1)]);
    assert!(matches!(
        graph.shortest_path(&start, &end),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn two_disjoint_triangles_form_two_components() {
    let graph = undirected_from(&[
        (1, 2, 1),
        (2, 3, 1),
        (3, 1, 1),
        (10, 11, 1),
        (11, 12, 1),
        (12, 10, 1),
    ]);
    let components = graph.connected_components();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0], vec![1, 2, 3]);
    assert_eq!(components[1], vec![10, 11, 12]);
}

#[test]
fn isolated_vertices_form_singleton_components() {
    let mut graph = undirected_from(&[(1, 2, 1)]);
    graph.add_vertex(7);
    let components = graph.connected_components();
    assert_eq!(components, vec![vec![1, 2], vec![7]]);
}

#[test]
fn mst_on_a_cycle_drops_the_heaviest_edge() {
    let graph = undirected_from(&[(1, 2, 1), (2, 3, 2), (3, 4, 3), (4, 1, 4)]);
    let forest = graph.minimum_spanning_tree().expect("undirected");

    assert_eq!(forest.edges().len(), 3);
    assert_eq!(forest.total_weight(), 6);
    assert!(forest.is_spanning_tree());
    check_forest_invariants(&graph, &forest);
}

#[test]
fn mst_of_a_directed_graph_is_rejected() {
    let mut graph: Graph<u32, u32> = Graph::directed();
    graph.add_weighted_edge(1, 2, 1).expect("valid");
    assert_eq!(
        graph.minimum_spanning_tree(),
        Err(GraphError::MstRequiresUndirected)
    );
}

#[test]
fn mst_of_a_disconnected_graph_is_a_forest() {
    let graph = undirected_from(&[(1, 2, 1), (2, 3, 2), (10, 11, 5)]);
    let forest = graph.minimum_spanning_tree().expect("undirected");
    assert_eq!(forest.component_count(), 2);
    assert!(!forest.is_spanning_tree());
    assert_eq!(forest.edges().len(), graph.vertex_count() - 2);
    check_forest_invariants(&graph, &forest);
}

#[test]
fn mst_of_an_empty_graph_is_empty() {
    let graph: Graph<u32, u32> = Graph::undirected();
    let forest = graph.minimum_spanning_tree().expect("undirected");
    assert!(forest.edges().is_empty());
    assert_eq!(forest.component_count(), 0);
}

#[test]
fn mst_is_deterministic_under_equal_weights() {
    let graph = undirected_from(&[
        (0, 1, 1),
        (0, 2, 1),
        (0, 3, 1),
        (1, 2, 1),
        (2, 3, 1),
        (1, 3, 1),
    ]);
    let first = graph.minimum_spanning_tree().expect("undirected");
    let second = graph.minimum_spanning_tree().expect("undirected");
    assert_eq!(first, second);
    assert_eq!(first.edges().len(), 3);
    check_forest_invariants(&graph, &first);
}

#[test]
fn builder_configuration_is_reported_back() {
    let builder = GraphBuilder::new()
        .with_orientation(Orientation::Directed)
        .with_weighting(Weighting::Unweighted);
    assert_eq!(builder.orientation(), Orientation::Directed);
    assert_eq!(builder.weighting(), Weighting::Unweighted);

    let graph = builder.build::<u32, u32>();
    assert_eq!(graph.orientation(), Orientation::Directed);
    assert_eq!(graph.weighting(), Weighting::Unweighted);
}

fn edge_list_strategy() -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
    proptest::collection::vec((0u8..12, 0u8..12, any::<u8>()), 0..40)
}

fn graph_from_random_edges(edges: &[(u8, u8, u8)]) -> Graph<u8, u32> {
    let mut graph = Graph::undirected();
    for &(source, target, weight) in edges {
        if source != target {
            graph
                .add_weighted_edge(source, target, u32::from(weight))
                .expect("validated edge");
        }
    }
    graph
}

proptest! {
    #[test]
    fn mst_component_count_matches_partition(edges in edge_list_strategy()) {
        let graph = graph_from_random_edges(&edges);
        let forest = graph.minimum_spanning_tree().expect("undirected");
        let components = graph.connected_components();

        prop_assert_eq!(forest.component_count(), components.len());
        prop_assert_eq!(
            forest.edges().len(),
            graph.vertex_count() - components.len()
        );
    }

    #[test]
    fn unit_weight_dijkstra_agrees_with_bfs_depth(edges in edge_list_strategy()) {
        let mut graph: Graph<u8, u32> = Graph::undirected();
        for &(source, target, _) in &edges {
            if source != target {
                graph.add_edge(source, target).expect("validated edge");
            }
        }
        let Some(&start) = graph.vertices().next() else {
            return Ok(());
        };

        // breadth-first depth oracle
        let mut depth = std::collections::HashMap::new();
        depth.insert(start, 0u32);
        let mut frontier = std::collections::VecDeque::from([start]);
        while let Some(vertex) = frontier.pop_front() {
            let reached = depth[&vertex];
            let next: Vec<u8> = graph
                .neighbors(&vertex)
                .expect("roster vertex")
                .map(|(neighbour, _)| *neighbour)
                .collect();
            for neighbour in next {
                depth.entry(neighbour).or_insert_with(|| {
                    frontier.push_back(neighbour);
                    reached + 1
                });
            }
        }

        for vertex in graph.vertices() {
            let found = graph.shortest_path(&start, vertex).expect("valid query");
            match depth.get(vertex) {
                Some(&expected) => {
                    let found = found.expect("reachable by bfs");
                    prop_assert_eq!(found.total_weight(), expected);
                }
                None => prop_assert!(found.is_none()),
            }
        }
    }
}
