//! End-to-end properties of batch and step-by-step generation.

use std::collections::{HashSet, VecDeque};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tilemaze_gen::rules::{connects, frontier_target, unconnected_paths};
use tilemaze_gen::tilemaze_core::{Grid, TilePos, TileType};
use tilemaze_gen::{
    Generator, GeneratorConfig, RejiggerConfig, SequenceRandom, StepOutcome, MAX_PLACEMENT_TRIALS,
};

/// Positions reachable from `start` by following connecting tiles.
fn connected_region(grid: &Grid, start: TilePos) -> HashSet<TilePos> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for neighbour in grid.neighbour_positions(pos).into_iter().flatten() {
            if connects(grid, pos, neighbour) && seen.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    seen
}

#[test]
fn batch_generation_terminates_for_every_size() {
    for size in 1..=10 {
        for seed in 0..3 {
            let rng = SmallRng::seed_from_u64(seed);
            let generator = Generator::with_size(rng, size, false).unwrap();
            let stats = generator.stats();
            assert!(
                stats.placements < size * size,
                "size {size} seed {seed}: {} placements on {} tiles",
                stats.placements,
                size * size
            );
        }
    }
}

#[test]
fn centre_is_the_only_seeded_tile() {
    for size in 1..=8 {
        let rng = SmallRng::seed_from_u64(size as u64);
        let generator = Generator::with_size(rng, size, true).unwrap();
        let centre_index = (size * size / 2) as usize;

        for (index, tile) in generator.tiles().enumerate() {
            if index == centre_index {
                assert_eq!(tile.kind(), TileType::Cross, "size {size}");
                assert_eq!(tile.rotation(), 0, "size {size}");
                assert!((1..=2).contains(&tile.shape()), "size {size}");
            } else {
                assert!(tile.is_blank(), "size {size}: tile {index} placed early");
            }
        }
    }
}

#[test]
fn scripted_sequence_replays_verbatim_on_three_by_three() {
    // Seed shape 1. Trial 1 draws bend, shape offset 0, rotation 3, which
    // presents no connector back to the centre. Trial 2 draws bend, shape
    // offset 1, rotation 2 and is accepted.
    let rng = SequenceRandom::new(vec![1, 2, 0, 3, 2, 1, 2]);
    let mut generator = Generator::with_size(rng, 3, true).unwrap();

    let centre = TilePos::new(1, 1);
    let seeded = generator.grid().tile(centre).unwrap();
    assert_eq!(seeded.kind().code(), 4);
    assert_eq!(seeded.rotation(), 0);
    assert_eq!(seeded.shape(), 1);

    let StepOutcome::Placed(placement) = generator.step() else {
        panic!("first step should place a tile");
    };
    assert_eq!(placement.origin, centre);
    assert_eq!(placement.target, TilePos::new(1, 2));
    assert_eq!(placement.trials, 2);
    assert!(!placement.forced_dead_end);

    let placed = generator.grid().tile(placement.target).unwrap();
    assert_eq!(placed.kind().code(), 2);
    assert_eq!(placed.shape(), 2);
    assert_eq!(placed.rotation(), 2);
    assert!(connects(generator.grid(), centre, placement.target));
}

#[test]
fn placed_tiles_are_never_overwritten() {
    for seed in 0..5 {
        let rng = SmallRng::seed_from_u64(seed);
        let mut generator = Generator::with_size(rng, 8, true).unwrap();

        for _ in 0..200 {
            let before = generator.grid().clone();
            let outcome = generator.step();
            for pos in before.positions() {
                let old = before.tile(pos).unwrap();
                if !old.is_blank() {
                    assert_eq!(generator.grid().tile(pos), Some(old), "seed {seed}");
                }
            }
            match outcome {
                StepOutcome::Placed(placement) => {
                    assert!(before.tile(placement.target).unwrap().is_blank());
                    assert!(connects(
                        generator.grid(),
                        placement.origin,
                        placement.target
                    ));
                    assert!(placement.trials <= MAX_PLACEMENT_TRIALS);
                }
                StepOutcome::FrontierExhausted => break,
                StepOutcome::NoBlankNeighbour => {
                    assert_eq!(generator.grid(), &before);
                }
            }
        }
    }
}

#[test]
fn every_placed_tile_joins_the_centre() {
    for seed in 0..10 {
        let rng = SmallRng::seed_from_u64(seed);
        let generator = Generator::with_size(rng, 9, false).unwrap();
        let grid = generator.grid();

        let region = connected_region(grid, grid.centre().unwrap());
        for pos in grid.positions() {
            if !grid.tile(pos).unwrap().is_blank() {
                assert!(
                    region.contains(&pos),
                    "seed {seed}: ({}, {}) is not linked to the centre",
                    pos.x,
                    pos.y
                );
            }
        }
    }
}

#[test]
fn rejigger_keeps_every_placed_tile_joined_to_the_centre() {
    for seed in 0..20 {
        let config = GeneratorConfig {
            size: 9,
            rejigger: RejiggerConfig {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let generator = Generator::new(SmallRng::seed_from_u64(seed), config).unwrap();
        let grid = generator.grid();

        let region = connected_region(grid, grid.centre().unwrap());
        for pos in grid.positions() {
            let tile = grid.tile(pos).unwrap();
            if !tile.is_blank() {
                assert!(
                    region.contains(&pos),
                    "seed {seed}: ({}, {}) is not linked to the centre",
                    pos.x,
                    pos.y
                );
                assert!((1..=2).contains(&tile.shape()), "seed {seed}");
            }
        }
    }
}

#[test]
fn remaining_open_tiles_cannot_grow() {
    for seed in 0..10 {
        let rng = SmallRng::seed_from_u64(seed);
        let generator = Generator::with_size(rng, 7, false).unwrap();
        for pos in generator.open_tiles() {
            assert!(
                frontier_target(generator.grid(), pos).is_none(),
                "seed {seed}: open tile ({}, {}) still leads to a blank tile",
                pos.x,
                pos.y
            );
        }
    }
}

#[test]
fn unconnected_paths_query_is_stable() {
    let rng = SmallRng::seed_from_u64(99);
    let generator = Generator::with_size(rng, 6, false).unwrap();
    let grid = generator.grid();
    for pos in grid.positions() {
        assert_eq!(unconnected_paths(grid, pos), unconnected_paths(grid, pos));
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = Generator::with_size(SmallRng::seed_from_u64(17), 9, false).unwrap();
    let b = Generator::with_size(SmallRng::seed_from_u64(17), 9, false).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.stats(), b.stats());
}
