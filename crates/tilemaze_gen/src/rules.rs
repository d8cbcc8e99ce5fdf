//! Connectivity rules: pure queries over a [`Grid`].
//!
//! Nothing in this module mutates the grid. Every query takes a tile by
//! position; a position outside the grid behaves like a blank tile with no
//! connectors.

use tilemaze_core::{Direction, Grid, PathSet, TilePos};

/// Whether `a` and `b` are adjacent and present facing connectors.
///
/// Returns `false` for tiles that are not grid neighbours.
pub fn connects(grid: &Grid, a: TilePos, b: TilePos) -> bool {
    let Some(direction) = grid.direction_to(a, b) else {
        return false;
    };
    let (Some(tile_a), Some(tile_b)) = (grid.tile(a), grid.tile(b)) else {
        return false;
    };
    let a_paths = tile_a.open_paths();
    let b_paths = tile_b.open_paths();

    match direction {
        // b is north of a
        Direction::North => {
            a_paths.contains(Direction::South) && b_paths.contains(Direction::North)
        }
        // b is east of a
        Direction::East => a_paths.contains(Direction::West) && b_paths.contains(Direction::East),
        // b is south of a
        Direction::South => {
            a_paths.contains(Direction::North) && b_paths.contains(Direction::South)
        }
        // b is west of a
        Direction::West => a_paths.contains(Direction::East) && b_paths.contains(Direction::West),
    }
}

/// The connectors of the tile at `pos` not matched by a connecting neighbour.
///
/// The open paths are inverted to find the neighbour slot each connector
/// faces, filtered down to the slots that are off-grid or do not connect, and
/// inverted back so the result is in the same frame as `open_paths()`.
pub fn unconnected_paths(grid: &Grid, pos: TilePos) -> PathSet {
    let Some(tile) = grid.tile(pos) else {
        return PathSet::EMPTY;
    };
    let neighbours = grid.neighbour_positions(pos);

    let unconnected: PathSet = tile
        .open_paths()
        .inverted()
        .iter()
        .filter(|path| match neighbours[path.index()] {
            None => true,
            Some(neighbour) => !connects(grid, pos, neighbour),
        })
        .collect();

    unconnected.inverted()
}

pub fn has_unconnected_paths(grid: &Grid, pos: TilePos) -> bool {
    !unconnected_paths(grid, pos).is_empty()
}

/// Neighbours of `pos` holding an unconnected path that points back at it.
///
/// Only the count is used by placement, to size junctions.
pub fn paths_connecting_to_tile(grid: &Grid, pos: TilePos) -> Vec<TilePos> {
    grid.neighbour_positions(pos)
        .into_iter()
        .enumerate()
        .filter_map(|(slot, neighbour)| {
            let neighbour = neighbour?;
            unconnected_paths(grid, neighbour)
                .contains(Direction::from_index(slot))
                .then_some(neighbour)
        })
        .collect()
}

/// Whether the tile at `pos` has an unconnected path that can never be
/// resolved, because the tile it leads to is off-grid or already placed.
pub fn tile_has_blocked_path(grid: &Grid, pos: TilePos) -> bool {
    let neighbours = grid.neighbour_positions(pos);
    unconnected_paths(grid, pos).iter().any(|path| {
        match neighbours[path.inverted().index()].and_then(|n| grid.tile(n)) {
            None => true,
            Some(tile) => !tile.is_blank(),
        }
    })
}

/// Placed tiles that still hold at least one unconnected path, in creation
/// order.
pub fn open_tiles(grid: &Grid) -> Vec<TilePos> {
    grid.positions()
        .filter(|&pos| {
            grid.tile(pos).is_some_and(|t| !t.is_blank()) && has_unconnected_paths(grid, pos)
        })
        .collect()
}

/// The blank tile the first unconnected path of `pos` leads to, if any.
pub fn frontier_target(grid: &Grid, pos: TilePos) -> Option<TilePos> {
    let path = unconnected_paths(grid, pos).first()?;
    let target = grid.neighbour_positions(pos)[path.inverted().index()]?;
    grid.tile(target)
        .is_some_and(|t| t.is_blank())
        .then_some(target)
}

/// Whether any open tile can still grow the network.
///
/// When this is `false` every remaining open tile points off-grid or at a
/// placed tile, and no placement step can succeed.
pub fn frontier_can_extend(grid: &Grid) -> bool {
    open_tiles(grid)
        .into_iter()
        .any(|pos| frontier_target(grid, pos).is_some())
}
