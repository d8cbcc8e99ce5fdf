//! Frontier-driven generation of connected path-tile grids.
//!
//! The primary entry point is [`Generator`], which seeds a junction at the
//! grid centre and grows a network of tiles outward from it, one blank
//! neighbour at a time, until no placed tile holds an unresolved connector.
//!
//! ```rust,ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//! use tilemaze_gen::Generator;
//!
//! let rng = SmallRng::seed_from_u64(7);
//! let generator = Generator::with_size(rng, 9, false)?;
//! for tile in generator.tiles() {
//!     println!("{} {} {:?} {} {}", tile.x(), tile.y(), tile.kind(), tile.shape(), tile.rotation());
//! }
//! ```
//!
//! It operates on plain data from `tilemaze_core` using a caller-supplied
//! random source.

mod config;
mod error;
mod generator;
pub mod placement;
mod random;
pub mod rules;

pub use config::{GeneratorConfig, RejiggerConfig, ShapeRange};
pub use error::GeneratorError;
pub use generator::{GenerationStats, Generator};
pub use placement::{place_next_tile, Placement, StepOutcome};
pub use random::{RandomSource, SequenceRandom};

pub use tilemaze_core;

/// Number of frontier tiles sampled per step while looking for one whose
/// first unconnected path leads to a blank neighbour.
pub const MAX_NEIGHBOUR_RETRIES: u32 = 10;

/// Number of rejected trial variants before a placement falls back to a
/// dead end.
///
/// The fallback commits regardless of connectivity, so every placement step
/// finishes within this many trials.
pub const MAX_PLACEMENT_TRIALS: u32 = 500;

/// Consecutive abandoned steps after which batch generation stops.
///
/// An abandoned step places nothing. As long as any open tile can still
/// extend, a run of this length is vanishingly unlikely with a uniform
/// source; the cap bounds the loop for scripted or degenerate sources.
pub const MAX_IDLE_STEPS: u32 = 1000;
