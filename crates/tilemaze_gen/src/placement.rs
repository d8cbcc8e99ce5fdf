//! The placement step: grow the network by one tile.
//!
//! The entry point is [`place_next_tile`]. Each call picks an open tile,
//! finds the blank neighbour its first unconnected path leads to, and commits
//! a locally consistent variant there. Committed tiles are never rolled back.

use log::debug;
use tilemaze_core::{Grid, TilePos, TileType};

use crate::rules::{
    connects, frontier_target, open_tiles, paths_connecting_to_tile, tile_has_blocked_path,
};
use crate::{RandomSource, ShapeRange, MAX_NEIGHBOUR_RETRIES, MAX_PLACEMENT_TRIALS};

/// A tile committed by one placement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The open tile the step grew from.
    pub origin: TilePos,
    /// The previously blank tile that was placed.
    pub target: TilePos,
    /// Trial variants drawn, including the accepted one.
    pub trials: u32,
    /// `true` when no trial was accepted and the tile became a dead end.
    pub forced_dead_end: bool,
}

/// The result of one call to [`place_next_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Placed(Placement),
    /// No placed tile holds an unconnected path.
    FrontierExhausted,
    /// No sampled open tile led to a blank neighbour. Nothing was changed.
    NoBlankNeighbour,
}

/// Place one tile next to a randomly chosen open tile.
pub fn place_next_tile(
    grid: &mut Grid,
    rng: &mut impl RandomSource,
    shape: ShapeRange,
) -> StepOutcome {
    let open = open_tiles(grid);
    if open.is_empty() {
        return StepOutcome::FrontierExhausted;
    }

    let Some((origin, target)) = select_target(grid, &open, rng) else {
        return StepOutcome::NoBlankNeighbour;
    };

    for trial in 1..=MAX_PLACEMENT_TRIALS {
        draw_variant(grid, target, rng, shape);
        if !tile_has_blocked_path(grid, target) && connects(grid, origin, target) {
            debug!(
                "placed {:?} at ({}, {}) from ({}, {}) after {} trials",
                grid.tile(target).map(|t| t.kind()),
                target.x,
                target.y,
                origin.x,
                origin.y,
                trial
            );
            return StepOutcome::Placed(Placement {
                origin,
                target,
                trials: trial,
                forced_dead_end: false,
            });
        }
    }

    force_dead_end(grid, origin, target);
    debug!(
        "no consistent variant at ({}, {}) after {} trials, placed a dead end",
        target.x, target.y, MAX_PLACEMENT_TRIALS
    );
    StepOutcome::Placed(Placement {
        origin,
        target,
        trials: MAX_PLACEMENT_TRIALS,
        forced_dead_end: true,
    })
}

/// Sample open tiles until one leads to a blank neighbour.
fn select_target(
    grid: &Grid,
    open: &[TilePos],
    rng: &mut impl RandomSource,
) -> Option<(TilePos, TilePos)> {
    for _ in 0..MAX_NEIGHBOUR_RETRIES {
        let origin = open[rng.pick_index(open.len())];
        if let Some(target) = frontier_target(grid, origin) {
            return Some((origin, target));
        }
    }
    None
}

/// Write one random trial variant to `target`.
///
/// The tile is reset to blank first so it does not influence the converging
/// count; more than two converging neighbours size a junction, otherwise a
/// simple passage is drawn.
fn draw_variant(grid: &mut Grid, target: TilePos, rng: &mut impl RandomSource, shape: ShapeRange) {
    if let Some(tile) = grid.tile_mut(target) {
        tile.set_variant(TileType::Blank, 0, 0);
    }

    let converging = paths_connecting_to_tile(grid, target).len();
    let kind = if converging > 2 {
        TileType::junction(converging).unwrap_or(TileType::Cross)
    } else {
        TileType::passage(rng.between(1, 2))
    };
    let shape = draw_shape(rng, shape);
    let rotation = rng.between(0, 3) as u8;

    if let Some(tile) = grid.tile_mut(target) {
        tile.set_variant(kind, shape, rotation);
    }
}

/// A shape in `range`, drawn as an offset from its lower bound.
pub(crate) fn draw_shape(rng: &mut impl RandomSource, range: ShapeRange) -> u8 {
    let offset = rng.between(0, range.max as i32 - range.min as i32);
    range.min.saturating_add(offset as u8)
}

/// Turn `target` into a dead end, facing `origin` when any rotation does.
///
/// The last trial's shape is kept, and so is its rotation if none connects.
fn force_dead_end(grid: &mut Grid, origin: TilePos, target: TilePos) {
    let Some(tile) = grid.tile_mut(target) else {
        return;
    };
    let shape = tile.shape();
    let fallback = tile.rotation();
    tile.set_variant(TileType::DeadEnd, shape, fallback);

    if !turn_to_fit(grid, target, |grid| connects(grid, origin, target)) {
        if let Some(tile) = grid.tile_mut(target) {
            tile.set_rotation(fallback);
        }
    }
}

/// Try each rotation of the tile at `pos` until `fits` holds.
///
/// Returns `false`, leaving the last rotation tried, when none does.
pub(crate) fn turn_to_fit(grid: &mut Grid, pos: TilePos, fits: impl Fn(&Grid) -> bool) -> bool {
    for rotation in 0..4 {
        if let Some(tile) = grid.tile_mut(pos) {
            tile.set_rotation(rotation);
        }
        if fits(grid) {
            return true;
        }
    }
    false
}
