use std::collections::BTreeSet;

use mazewalk_core::generator::MazeGenerator;
use mazewalk_core::graph::{traverse, Graph, GraphProvider};
use mazewalk_core::walk::{random_walk, seeded_rng, RootSelection, WalkOptions};
use proptest::prelude::*;

/// Ring over `n` nodes plus extra chords, as symmetric adjacency lists
fn ring_with_chords(n: usize, chords: &[(usize, usize)]) -> Graph {
    let mut adjacency: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for i in 0..n {
        adjacency[i].insert((i + 1) % n);
        adjacency[(i + 1) % n].insert(i);
    }
    for &(a, b) in chords {
        let (a, b) = (a % n, b % n);
        if a != b {
            adjacency[a].insert(b);
            adjacency[b].insert(a);
        }
    }
    let lists: Vec<Vec<usize>> = adjacency.into_iter().map(|s| s.into_iter().collect()).collect();
    Graph::from_adjacency(&lists).unwrap()
}

fn root_selection() -> impl Strategy<Value = RootSelection> {
    prop_oneof![Just(RootSelection::FirstLoop), Just(RootSelection::FirstNode)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn grid_mazes_are_spanning_trees(
        width in 2usize..14,
        height in 2usize..14,
        seed in any::<u64>(),
        root in root_selection(),
    ) {
        let generator = MazeGenerator::new(WalkOptions { root, ..Default::default() });
        let maze = generator.generate(width, height, &mut seeded_rng(seed)).unwrap();
        let nodes = width * height;

        prop_assert_eq!(maze.edges.len(), 2 * (nodes - 1));
        prop_assert!(maze.edges.is_symmetric());
        prop_assert_eq!(traverse(&maze.grid, &maze.edges).unwrap(), nodes);
        prop_assert!(maze.stats.walk_count as usize <= nodes);
    }

    #[test]
    fn seeded_generation_is_deterministic(
        width in 2usize..10,
        height in 2usize..10,
        seed in any::<u64>(),
    ) {
        let generator = MazeGenerator::default();
        let a = generator.generate(width, height, &mut seeded_rng(seed)).unwrap();
        let b = generator.generate(width, height, &mut seeded_rng(seed)).unwrap();

        prop_assert_eq!(&a.edges, &b.edges);
        prop_assert_eq!(a.stats, b.stats);
        prop_assert_eq!(a.root, b.root);
    }

    #[test]
    fn corner_paths_are_simple(
        width in 2usize..12,
        height in 2usize..12,
        seed in any::<u64>(),
    ) {
        let maze = MazeGenerator::default()
            .generate(width, height, &mut seeded_rng(seed))
            .unwrap();
        let result = maze.find_path((0, 0), (width - 1, height - 1)).unwrap();

        prop_assert!(result.found);
        let coords = maze.coords_of(&result.path);
        prop_assert_eq!(coords.first().copied(), Some((0, 0)));
        prop_assert_eq!(coords.last().copied(), Some((width - 1, height - 1)));
        let unique: BTreeSet<_> = coords.iter().collect();
        prop_assert_eq!(unique.len(), coords.len());
    }

    #[test]
    fn chorded_rings_are_spanned(
        n in 3usize..40,
        chords in proptest::collection::vec((any::<usize>(), any::<usize>()), 0..30),
        seed in any::<u64>(),
    ) {
        let graph = ring_with_chords(n, &chords);
        let outcome = random_walk(&graph, &mut seeded_rng(seed), &WalkOptions::default()).unwrap();

        prop_assert_eq!(outcome.edges.len(), 2 * (graph.node_count() - 1));
        prop_assert!(outcome.edges.is_symmetric());
        prop_assert_eq!(traverse(&graph, &outcome.edges).unwrap(), n);
    }
}
