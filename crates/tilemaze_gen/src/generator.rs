//! The generation driver.

use log::{debug, info, warn};
use tilemaze_core::{Grid, Tile, TilePos, TileType};

use crate::placement::{draw_shape, place_next_tile, turn_to_fit, StepOutcome};
use crate::rules::{connects, frontier_can_extend, open_tiles, tile_has_blocked_path};
use crate::{GeneratorConfig, GeneratorError, RandomSource, MAX_IDLE_STEPS};

/// Counters describing a generator's work so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Placement steps invoked.
    pub steps: u32,
    /// Steps that committed a tile.
    pub placements: u32,
    /// Placements that fell back to a dead end.
    pub forced_dead_ends: u32,
    /// Steps that found no blank neighbour and changed nothing.
    pub abandoned_steps: u32,
    /// Blank-region reduction passes run.
    pub rejigger_passes: u32,
}

/// Grows a connected network of path tiles over a square grid.
///
/// Construction seeds a four-way junction at the centre tile. In batch mode
/// (the default) it then places tiles until no placed tile holds an
/// unconnected path, or until no open tile can grow any further. In
/// step-by-step mode the caller drives [`step`](Self::step) and polls
/// [`is_complete`](Self::is_complete).
///
/// Steps mutate shared grid state and must not run concurrently.
pub struct Generator<R: RandomSource> {
    grid: Grid,
    rng: R,
    config: GeneratorConfig,
    stats: GenerationStats,
}

impl<R: RandomSource> Generator<R> {
    /// Build a generator from a validated config.
    pub fn new(rng: R, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;

        let mut generator = Self {
            grid: Grid::new(config.size),
            rng,
            config,
            stats: GenerationStats::default(),
        };
        generator.seed();

        if !generator.config.step_by_step {
            generator.run_to_completion();
        }
        Ok(generator)
    }

    /// Build a generator with default settings for a grid of `size`.
    pub fn with_size(rng: R, size: u32, step_by_step: bool) -> Result<Self, GeneratorError> {
        let config = GeneratorConfig {
            size,
            step_by_step,
            ..Default::default()
        };
        Self::new(rng, config)
    }

    /// Make the centre tile the junction the network grows from.
    fn seed(&mut self) {
        let Some(centre) = self.grid.centre() else {
            return;
        };
        let shape = self
            .rng
            .between(self.config.shape.min as i32, self.config.shape.max as i32)
            as u8;
        if let Some(tile) = self.grid.tile_mut(centre) {
            tile.set_variant(TileType::Cross, shape, 0);
        }
        debug!("seeded junction at ({}, {})", centre.x, centre.y);
    }

    /// Run a single placement step.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = place_next_tile(&mut self.grid, &mut self.rng, self.config.shape);
        self.stats.steps += 1;
        match outcome {
            StepOutcome::Placed(placement) => {
                self.stats.placements += 1;
                if placement.forced_dead_end {
                    self.stats.forced_dead_ends += 1;
                }
            }
            StepOutcome::NoBlankNeighbour => self.stats.abandoned_steps += 1,
            StepOutcome::FrontierExhausted => {}
        }
        outcome
    }

    /// Place tiles until the frontier is closed or can no longer grow, then
    /// run the blank-region reduction pass if it is enabled.
    pub fn run_to_completion(&mut self) -> GenerationStats {
        self.run_frontier();

        if self.config.rejigger.enabled {
            self.run_rejigger();
        }

        info!(
            "generated {}x{} grid: {} placements ({} dead ends), {} open tiles left, {} blank",
            self.grid.size(),
            self.grid.size(),
            self.stats.placements,
            self.stats.forced_dead_ends,
            self.open_tiles().len(),
            self.grid.blank_tiles().len()
        );
        self.stats
    }

    fn run_frontier(&mut self) {
        let mut idle = 0;
        loop {
            if self.is_complete() {
                return;
            }
            if !self.can_extend() {
                warn!(
                    "frontier stalled with {} open tiles that cannot be resolved",
                    self.open_tiles().len()
                );
                return;
            }
            match self.step() {
                StepOutcome::Placed(_) => idle = 0,
                StepOutcome::NoBlankNeighbour => {
                    idle += 1;
                    if idle >= MAX_IDLE_STEPS {
                        warn!("no tile placed in {} consecutive steps, stopping", idle);
                        return;
                    }
                }
                StepOutcome::FrontierExhausted => return,
            }
        }
    }

    fn run_rejigger(&mut self) {
        let settings = self.config.rejigger;
        while self.grid.blank_tiles().len() >= settings.blank_threshold
            && self.stats.rejigger_passes < settings.max_passes
        {
            if !self.rejigger() {
                break;
            }
        }
    }

    /// One blank-region reduction pass.
    ///
    /// Places a simple passage on a random blank tile bordering the network,
    /// turned so it links to a placed neighbour with no blocked connector,
    /// then runs up to `steps_per_pass` placement steps while the frontier is
    /// open. Candidates no rotation fits are left blank. Returns `false` when
    /// no bordering blank tile takes a passage.
    pub fn rejigger(&mut self) -> bool {
        let mut candidates: Vec<TilePos> = self
            .grid
            .blank_tiles()
            .into_iter()
            .filter(|&pos| {
                self.grid
                    .neighbours(pos)
                    .iter()
                    .flatten()
                    .any(|n| !n.is_blank())
            })
            .collect();

        let placed = loop {
            if candidates.is_empty() {
                return false;
            }
            let pos = candidates.swap_remove(self.rng.pick_index(candidates.len()));
            if self.try_passage(pos) {
                break pos;
            }
        };

        self.stats.rejigger_passes += 1;
        debug!(
            "rejigger placed {:?} at ({}, {})",
            self.grid.tile(placed).map(|t| t.kind()),
            placed.x,
            placed.y
        );

        for _ in 0..self.config.rejigger.steps_per_pass {
            if self.is_complete() {
                break;
            }
            self.step();
        }
        true
    }

    /// Put a random simple passage on the blank tile at `pos` and turn it to
    /// join the network. Restores the blank tile when no rotation fits.
    fn try_passage(&mut self, pos: TilePos) -> bool {
        let kind = TileType::passage(self.rng.between(1, 2));
        let shape = draw_shape(&mut self.rng, self.config.shape);
        let Some(tile) = self.grid.tile_mut(pos) else {
            return false;
        };
        tile.set_variant(kind, shape, 0);

        let joined = turn_to_fit(&mut self.grid, pos, |grid| {
            !tile_has_blocked_path(grid, pos)
                && grid
                    .neighbour_positions(pos)
                    .into_iter()
                    .flatten()
                    .any(|n| connects(grid, pos, n))
        });
        if !joined {
            if let Some(tile) = self.grid.tile_mut(pos) {
                tile.set_variant(TileType::Blank, 0, 0);
            }
        }
        joined
    }

    /// `true` once no placed tile holds an unconnected path.
    pub fn is_complete(&self) -> bool {
        self.open_tiles().is_empty()
    }

    /// `true` while some open tile leads to a blank neighbour.
    pub fn can_extend(&self) -> bool {
        frontier_can_extend(&self.grid)
    }

    /// Placed tiles that still hold an unconnected path.
    pub fn open_tiles(&self) -> Vec<TilePos> {
        open_tiles(&self.grid)
    }

    /// All tiles in creation (row-major) order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.tiles()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }
}
