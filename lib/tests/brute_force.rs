// lib/tests/brute_force.rs

//! Cross-checks both queries against exhaustive search on small random graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wgraph::{Edge, NodeId, WeightedEdge, WeightedGraph};

type RawEdge = (NodeId, NodeId, f64);

fn random_edges(rng: &mut StdRng, node_count: usize, edge_count: usize) -> Vec<RawEdge> {
    (0..edge_count)
        .map(|_| {
            let from = rng.gen_range(0..node_count);
            let to = rng.gen_range(0..node_count);
            (from, to, rng.gen_range(1..=20) as f64)
        })
        .collect()
}

/// A random spanning chain over all nodes plus `extra` random edges.
fn random_connected_edges(rng: &mut StdRng, node_count: usize, extra: usize) -> Vec<RawEdge> {
    let mut edges: Vec<RawEdge> = (1..node_count)
        .map(|node| (rng.gen_range(0..node), node, rng.gen_range(1..=20) as f64))
        .collect();
    edges.extend(random_edges(rng, node_count, extra));
    edges
}

fn build(node_count: usize, edges: &[RawEdge]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(node_count);
    for &(from, to, weight) in edges {
        graph.add_edge(Edge::new(from, to, weight).unwrap()).unwrap();
    }
    graph
}

/// Cheapest simple path cost by depth-first enumeration.
fn brute_force_cost(node_count: usize, edges: &[RawEdge], from: NodeId, to: NodeId) -> Option<f64> {
    fn walk(
        edges: &[RawEdge],
        node: NodeId,
        to: NodeId,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if node == to {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for &(a, b, weight) in edges {
            let next = if a == node {
                b
            } else if b == node {
                a
            } else {
                continue;
            };
            if on_path[next] {
                continue;
            }
            on_path[next] = true;
            walk(edges, next, to, cost + weight, on_path, best);
            on_path[next] = false;
        }
    }

    let mut on_path = vec![false; node_count];
    on_path[from] = true;
    let mut best = None;
    walk(edges, from, to, 0.0, &mut on_path, &mut best);
    best
}

fn is_forest(node_count: usize, edges: &[RawEdge]) -> bool {
    let mut parent: Vec<usize> = (0..node_count).collect();
    fn root(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            x = parent[x];
        }
        x
    }
    for &(a, b, _) in edges {
        let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}

/// Cheapest spanning tree weight over all subsets of `node_count - 1` edges.
fn brute_force_tree_weight(node_count: usize, edges: &[RawEdge]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != node_count - 1 {
            continue;
        }
        let chosen: Vec<RawEdge> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, e)| *e)
            .collect();
        if !is_forest(node_count, &chosen) {
            continue;
        }
        let weight: f64 = chosen.iter().map(|e| e.2).sum();
        if best.map_or(true, |b| weight < b) {
            best = Some(weight);
        }
    }
    best
}

#[test]
fn shortest_path_matches_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let node_count = rng.gen_range(1..=6);
        let edge_count = rng.gen_range(0..=9);
        let edges = random_edges(&mut rng, node_count, edge_count);
        let graph = build(node_count, &edges);

        for from in 0..node_count {
            for to in 0..node_count {
                let expected = brute_force_cost(node_count, &edges, from, to);
                let path = graph.shortest_path(from, to).unwrap();
                assert_eq!(path.as_ref().map(|p| p.cost()), expected, "{from} -> {to} in {edges:?}");

                if let Some(path) = path {
                    let nodes = path.nodes();
                    assert_eq!(nodes.first(), Some(&from));
                    assert_eq!(nodes.last(), Some(&to));
                    let summed: f64 = path.iter().map(|e| e.weight()).sum();
                    assert_eq!(summed, path.cost());
                }
            }
        }
    }
}

#[test]
fn spanning_tree_matches_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let node_count = rng.gen_range(2..=6);
        let extra = rng.gen_range(0..=4);
        let edges = random_connected_edges(&mut rng, node_count, extra);
        let graph = build(node_count, &edges);

        let tree = graph.minimum_spanning_tree().unwrap();
        let tree_edges: Vec<RawEdge> = tree.iter().map(|e| (e.from(), e.to(), e.weight())).collect();

        assert_eq!(tree.len(), node_count - 1);
        assert!(is_forest(node_count, &tree_edges), "cycle in {tree_edges:?}");
        assert_eq!(Some(tree.total_weight()), brute_force_tree_weight(node_count, &edges));
    }
}

#[test]
fn spanning_tree_covers_root_component_of_disconnected_graph() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let node_count = rng.gen_range(1..=7);
        let edge_count = rng.gen_range(0..=8);
        let edges = random_edges(&mut rng, node_count, edge_count);
        let graph = build(node_count, &edges);

        let reachable: Vec<NodeId> = (0..node_count)
            .filter(|&n| graph.shortest_path(0, n).unwrap().is_some())
            .collect();
        let tree = graph.minimum_spanning_tree().unwrap();

        assert_eq!(tree.len(), reachable.len() - 1);
        for edge in &tree {
            assert!(reachable.contains(&edge.from()));
            assert!(reachable.contains(&edge.to()));
        }
    }
}
