//! Single source Dijkstra over the Euclidean lengths of the links.
use log::debug;

use crate::graph::HubMap;
use crate::statistics::SearchStats;
use crate::util::math::euclidean;

use super::frontier::{Frontier, FrontierStrategy, HeapFrontier, LinearFrontier};

/// Computes distance and path of every hub reachable from the source of a [`HubMap`].
///
/// Works on the distances and paths already stored in the map, the source has
/// to be initialised with distance `0` and the path `[source]`.
pub(crate) struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a mut HubMap,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a mut HubMap) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn run(&mut self) {
        let num_hubs = self.g.hubs.len();
        match self.g.strategy {
            FrontierStrategy::LinearScan => self.run_with(LinearFrontier::new(num_hubs)),
            FrontierStrategy::BinaryHeap => self.run_with(HeapFrontier::new(num_hubs)),
        }
    }

    fn run_with<F: Frontier>(&mut self, mut frontier: F) {
        self.stats.init();

        let g = &mut *self.g;
        let mut settled = vec![false; g.hubs.len()];

        let source = g.source;
        frontier.push(source, g.hubs[source.index()].distance());

        while let Some(current) = frontier.pop_min(&g.hubs) {
            settled[current.index()] = true;
            self.stats.hubs_settled += 1;

            let current_hub = &g.hubs[current.index()];
            let current_distance = current_hub.distance();
            let current_location = current_hub.location();
            debug!("Settled {} at {:.3}", current_hub, current_distance);

            for &neighbor in g.adjacency[current.index()].iter() {
                if settled[neighbor.index()] {
                    continue;
                }

                let neighbor_hub = &g.hubs[neighbor.index()];
                let candidate =
                    current_distance + euclidean(current_location, neighbor_hub.location());

                if candidate < neighbor_hub.distance() {
                    let current_path = g.hubs[current.index()].path();
                    let mut path = Vec::with_capacity(current_path.len() + 1);
                    path.extend_from_slice(current_path);
                    path.push(neighbor);

                    let neighbor_hub = &mut g.hubs[neighbor.index()];
                    neighbor_hub.set_distance(candidate);
                    neighbor_hub.set_path(path);

                    self.stats.relaxations += 1;
                    frontier.push(neighbor, candidate);
                } else if !frontier.contains(neighbor) {
                    frontier.push(neighbor, neighbor_hub.distance());
                }
            }
        }

        self.stats.finish();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use hub_reader::{HubDef, Link};
    use proptest::prelude::*;

    use crate::{
        constants::{Weight, UNREACHABLE},
        graph::HubMap,
        search::{assert_no_path, assert_path, FrontierStrategy},
        util::{
            math::euclidean,
            test_graphs::{campus_network, generate_campus_graph, generate_line_graph, map_from},
        },
    };

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const STRATEGIES: [FrontierStrategy; 2] =
        [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap];

    #[test]
    fn line_through_b() {
        // A(0,0) - B(3,4) - C(6,8)    D(100,100)
        init_log();
        let g = generate_line_graph();

        assert_path(vec!["A"], 0.0, g.find_path("A"));
        assert_path(vec!["A", "B"], 5.0, g.find_path("B"));
        assert_path(vec!["A", "B", "C"], 10.0, g.find_path("C"));
    }

    #[test]
    fn disconnected_hub() {
        let g = generate_line_graph();

        let d = g.hub("D").unwrap();
        assert_eq!(d.distance(), UNREACHABLE);
        assert!(d.path().is_empty());
        assert!(!d.is_reachable());
        assert_no_path(g.find_path("D"));
        assert_eq!(g.reachable_count(), 3);
    }

    #[test]
    fn unknown_destination() {
        let g = generate_line_graph();
        assert!(matches!(
            g.find_path("E"),
            Err(crate::error::HubMapError::HubNotFound(name)) if name == "E"
        ));
    }

    #[test]
    fn go_around() {
        // A         B
        // |         |
        // C -- D -- E
        // No A-B link, B is reached along the bottom row
        let g = map_from(
            &[("A", 0, 0), ("B", 8, 0), ("C", 0, 3), ("D", 4, 3), ("E", 8, 3)],
            &[("A", "C"), ("C", "D"), ("D", "E"), ("E", "B")],
            "A",
        );

        assert_path(vec!["A", "C", "D", "E", "B"], 14.0, g.find_path("B"));
    }

    #[test]
    fn straight_route_beats_detour() {
        //   B(5,12)
        //  /       \
        // A(0,0) - C(10,0) - E(20,0)
        //          |
        //          D(10,1)
        let g = map_from(
            &[("A", 0, 0), ("B", 5, 12), ("C", 10, 0), ("D", 10, 1), ("E", 20, 0)],
            &[("A", "B"), ("B", "E"), ("A", "C"), ("C", "E"), ("C", "D")],
            "A",
        );

        assert_path(vec!["A", "C"], 10.0, g.find_path("C"));
        assert_path(vec!["A", "C", "D"], 11.0, g.find_path("D"));
        assert_path(vec!["A", "C", "E"], 20.0, g.find_path("E"));
        assert_path(vec!["A", "B"], 13.0, g.find_path("B"));
    }

    #[test]
    fn coincident_hubs_have_zero_distance() {
        let g = map_from(
            &[("A", 1, 1), ("B", 1, 1), ("C", 4, 5)],
            &[("A", "B"), ("B", "C")],
            "A",
        );

        assert_path(vec!["A", "B"], 0.0, g.find_path("B"));
        assert_path(vec!["A", "B", "C"], 5.0, g.find_path("C"));
    }

    #[test]
    fn ties_follow_link_order() {
        // A - B
        // |   |
        // C - D
        // Both routes to D are 2.0 long, the hub that entered the frontier first wins
        let hubs = [("A", 0, 0), ("B", 1, 0), ("C", 0, 1), ("D", 1, 1)];

        for strategy in STRATEGIES {
            let g = map_with(&hubs, &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")], strategy);
            assert_path(vec!["A", "B", "D"], 2.0, g.find_path("D"));

            let g = map_with(&hubs, &[("A", "C"), ("A", "B"), ("C", "D"), ("B", "D")], strategy);
            assert_path(vec!["A", "C", "D"], 2.0, g.find_path("D"));
        }
    }

    #[test]
    fn campus() {
        init_log();
        let g = generate_campus_graph();

        assert_path(vec!["Library", "Quad", "Lab"], 8.0, g.find_path("Lab"));
        assert_path(vec!["Library", "Quad", "Office"], 4.0, g.find_path("Office"));
        assert_path(vec!["Library", "Gym", "Dorm"], 13.0, g.find_path("Dorm"));
        assert_no_path(g.find_path("Annex"));
    }

    #[test]
    fn rerun_changes_nothing() {
        for strategy in STRATEGIES {
            let (hubs, links) = campus_network().into_parts();
            let mut g = HubMap::with_strategy(hubs, links, "Library", strategy).unwrap();
            let before = g.clone();

            let stats = g.build_paths().clone();

            assert_eq!(stats.relaxations, 0);
            assert_eq!(stats.hubs_settled, g.reachable_count());
            assert_same_paths(&before, &g);
        }
    }

    fn map_with(
        hubs: &[(&str, i32, i32)],
        links: &[(&str, &str)],
        strategy: FrontierStrategy,
    ) -> HubMap {
        HubMap::with_strategy(
            hubs.iter().map(|(n, x, y)| HubDef::new(*n, *x, *y)).collect(),
            links.iter().map(|(a, b)| Link::new(*a, *b)).collect(),
            hubs[0].0,
            strategy,
        )
        .unwrap()
    }

    fn assert_same_paths(a: &HubMap, b: &HubMap) {
        for (x, y) in a.hubs().zip(b.hubs()) {
            assert_eq!(x.name(), y.name());
            assert_eq!(x.distance(), y.distance());
            assert_eq!(x.path(), y.path());
        }
    }

    /// Distances by repeated relaxation of every link until nothing changes
    fn bellman_ford(g: &HubMap) -> Vec<Weight> {
        let mut distances = vec![UNREACHABLE; g.num_hubs()];
        distances[g.source_index().index()] = 0.0;

        let mut changed = true;
        while changed {
            changed = false;
            for a in g.hub_indices() {
                for b in g.neighbors(a) {
                    let candidate = distances[a.index()]
                        + euclidean(g.hub_at(a).unwrap().location(), g.hub_at(b).unwrap().location());
                    if candidate + 1e-9 < distances[b.index()] {
                        distances[b.index()] = candidate;
                        changed = true;
                    }
                }
            }
        }
        distances
    }

    fn check_paths(g: &HubMap) {
        let expected = bellman_ford(g);
        let source = g.source_index();

        assert_eq!(g.source().distance(), 0.0);
        assert_eq!(g.source().path(), &[source]);

        for hub_idx in g.hub_indices() {
            let hub = g.hub_at(hub_idx).unwrap();

            if !hub.is_reachable() {
                assert_eq!(expected[hub_idx.index()], UNREACHABLE);
                assert!(hub.path().is_empty());
                continue;
            }

            assert_abs_diff_eq!(hub.distance(), expected[hub_idx.index()], epsilon = 1e-6);

            let path = hub.path();
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&hub_idx));

            let mut length = 0.0;
            for pair in path.windows(2) {
                assert!(g.is_linked(pair[0], pair[1]));
                length += euclidean(
                    g.hub_at(pair[0]).unwrap().location(),
                    g.hub_at(pair[1]).unwrap().location(),
                );
            }
            assert_abs_diff_eq!(hub.distance(), length, epsilon = 1e-9);
        }
    }

    fn random_network() -> impl Strategy<Value = (Vec<(i32, i32)>, Vec<(usize, usize)>)> {
        (
            proptest::collection::vec((-50i32..50, -50i32..50), 1..25),
            proptest::collection::vec((0usize..25, 0usize..25), 0..60),
        )
    }

    fn build(coords: &[(i32, i32)], links: &[(usize, usize)], strategy: FrontierStrategy) -> HubMap {
        let hubs = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| HubDef::new(format!("H{}", i), *x, *y))
            .collect();
        // Indices past the last hub become links to unknown hubs
        let links = links
            .iter()
            .map(|(a, b)| Link::new(format!("H{}", a), format!("H{}", b)))
            .collect();

        HubMap::with_strategy(hubs, links, "H0", strategy).unwrap()
    }

    #[test]
    fn random_networks_have_shortest_paths() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&random_network(), |(coords, links)| {
                for strategy in STRATEGIES {
                    check_paths(&build(&coords, &links, strategy));
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn strategies_agree() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&random_network(), |(coords, links)| {
                let scan = build(&coords, &links, FrontierStrategy::LinearScan);
                let heap = build(&coords, &links, FrontierStrategy::BinaryHeap);
                assert_same_paths(&scan, &heap);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn rerun_on_random_networks_changes_nothing() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&random_network(), |(coords, links)| {
                for strategy in STRATEGIES {
                    let mut g = build(&coords, &links, strategy);
                    let before = g.clone();
                    g.build_paths();
                    assert_same_paths(&before, &g);
                }
                Ok(())
            })
            .unwrap();
    }
}
