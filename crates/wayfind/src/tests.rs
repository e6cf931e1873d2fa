//! Cross-algorithm properties checked on seeded random graphs.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind_geom::{CharGrid, Point};

use crate::distance::manhattan;
use crate::{
    Edge, EdgeProvider, GridEdges, Stop, Traversal, Unweighted, astar, bfs, bfs_iter, dijkstra,
    dijkstra_iter, never,
};

type Graph = HashMap<u32, Vec<Edge<u32>>>;

/// Random digraph on `0..n` with integer weights in `1..=9`.
fn random_graph(rng: &mut StdRng, n: u32, edges: usize) -> Graph {
    let mut g: Graph = HashMap::new();
    for _ in 0..edges {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        let w = rng.random_range(1..10u32);
        g.entry(from).or_default().push(Edge::new(to, f64::from(w)));
    }
    g
}

/// Bellman-Ford shortest costs from `src`, unreachable ids omitted.
fn reference_costs(g: &Graph, n: u32, src: u32, unit: bool) -> HashMap<u32, f64> {
    let mut dist: HashMap<u32, f64> = HashMap::new();
    dist.insert(src, 0.0);
    for _ in 0..n {
        for (from, out) in g {
            let Some(&d) = dist.get(from) else {
                continue;
            };
            for e in out {
                let nd = d + if unit { 1.0 } else { e.weight };
                if dist.get(&e.to).is_none_or(|&old| nd < old) {
                    dist.insert(e.to, nd);
                }
            }
        }
    }
    dist
}

fn unweighted(g: &Graph) -> HashMap<u32, Vec<u32>> {
    g.iter()
        .map(|(k, out)| (*k, out.iter().map(|e| e.to).collect()))
        .collect()
}

fn assert_valid_paths<P: EdgeProvider<u32>>(t: &Traversal<u32>, edges: &P, unit: bool) {
    let mut buf = Vec::new();
    for v in t {
        let path = t.path(v);
        assert!(path[0].is_source());
        assert_eq!(path.last().map(|p| p.id), Some(v.id));
        let mut total = 0.0;
        for pair in path.windows(2) {
            buf.clear();
            edges.edges(&pair[0].id, &mut buf);
            let w = buf
                .iter()
                .filter(|e| e.to == pair[1].id)
                .map(|e| if unit { 1.0 } else { e.weight })
                .fold(f64::INFINITY, f64::min);
            assert!(w.is_finite(), "{} -> {} is not an edge", pair[0].id, pair[1].id);
            total += w;
        }
        assert!((total - v.cost).abs() < 1e-9);
    }
}

#[test]
fn bfs_costs_are_hop_counts() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let g = random_graph(&mut rng, 30, 60);
        let adj = unweighted(&g);
        let t = bfs([0], Unweighted(&adj), never);
        assert_eq!(t.costs(), reference_costs(&g, 30, 0, true));
        assert_eq!(t.costs().len(), t.len());
        assert_valid_paths(&t, &Unweighted(&adj), true);
    }
}

#[test]
fn dijkstra_matches_reference() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let g = random_graph(&mut rng, 40, 120);
        let t = dijkstra([0], &g, never);
        assert_eq!(t.costs(), reference_costs(&g, 40, 0, false));
        assert_valid_paths(&t, &g, false);
    }
}

#[test]
fn zero_heuristic_astar_is_dijkstra() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let g = random_graph(&mut rng, 40, 120);
        let d = dijkstra([0], &g, never);
        let a = astar([0], |_: &u32| 0.0, &g, never);
        assert_eq!(d.costs(), a.costs());
        let d_order: Vec<u32> = d.iter().map(|v| v.id).collect();
        let a_order: Vec<u32> = a.iter().map(|v| v.id).collect();
        assert_eq!(d_order, a_order);
    }
}

#[test]
fn admissible_heuristic_keeps_optimal_cost() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let mut grid = CharGrid::filled(16, 16, '.');
        for _ in 0..60 {
            let p = Point::new(rng.random_range(0..16), rng.random_range(0..16));
            grid.set(p, '#');
        }
        let start = Point::new(0, 0);
        let goal = Point::new(15, 15);
        grid.set(start, '.');
        grid.set(goal, '.');
        let edges = GridEdges::cardinal(&grid, |ch| ch == '.');

        let d = dijkstra([start], &edges, |p| *p == goal);
        let a = astar([start], |p| manhattan(*p, goal) as f64, &edges, |p| *p == goal);
        assert_eq!(a.cost(&goal), d.cost(&goal));
        assert_eq!(a.stop(), d.stop());
    }
}

#[test]
fn repeated_calls_agree() {
    let mut rng = StdRng::seed_from_u64(19);
    let g = random_graph(&mut rng, 50, 150);
    let adj = unweighted(&g);

    assert_eq!(
        bfs([0], Unweighted(&adj), never).costs(),
        bfs([0], Unweighted(&adj), never).costs()
    );
    assert_eq!(dijkstra([0], &g, never).costs(), dijkstra([0], &g, never).costs());
    let h = |n: &u32| f64::from(*n % 2);
    let first = astar([0], h, &g, |n| *n == 49);
    let second = astar([0], h, &g, |n| *n == 49);
    assert_eq!(first.costs(), second.costs());
}

#[test]
fn lazy_and_eager_agree() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..10 {
        let g = random_graph(&mut rng, 40, 100);
        let adj = unweighted(&g);

        let eager = bfs([0], Unweighted(&adj), never);
        let lazy: HashMap<u32, f64> = bfs_iter([0], Unweighted(&adj))
            .map(|v| (v.id, v.cost))
            .collect();
        assert_eq!(eager.costs(), lazy);

        let eager = dijkstra([0], &g, never);
        let lazy: HashMap<u32, f64> = dijkstra_iter([0], &g).map(|v| (v.id, v.cost)).collect();
        assert_eq!(eager.costs(), lazy);
    }
}

#[test]
fn no_id_settled_twice() {
    let mut rng = StdRng::seed_from_u64(29);
    let g = random_graph(&mut rng, 30, 200);
    let mut seen = std::collections::HashSet::new();
    for v in dijkstra_iter([0, 1, 2], &g) {
        assert!(seen.insert(v.id), "{} settled twice", v.id);
    }
}

#[test]
fn corner_to_corner_on_3x3() {
    let grid = CharGrid::filled(3, 3, '.');
    let edges = GridEdges::cardinal(&grid, |_| true);
    let start = Point::new(0, 0);
    let goal = Point::new(2, 2);

    let b = bfs([start], &edges, |p| *p == goal);
    let d = dijkstra([start], &edges, |p| *p == goal);
    let a = astar([start], |p| manhattan(*p, goal) as f64, &edges, |p| *p == goal);
    for t in [&b, &d, &a] {
        assert_eq!(t.stop(), Stop::Goal);
        assert_eq!(t.steps_to(&goal), Some(4));
        let path = t.path_to(&goal).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0].id, start);
        assert_eq!(path[4].id, goal);
    }
}

#[test]
fn dynamic_and_static_providers_agree() {
    let mut rng = StdRng::seed_from_u64(31);
    let g = random_graph(&mut rng, 30, 90);
    let dynamic = crate::from_fn(|n: &u32| g.get(n).cloned().unwrap_or_default());
    assert_eq!(
        dijkstra([0], &g, never).costs(),
        dijkstra([0], &dynamic, never).costs()
    );
}
