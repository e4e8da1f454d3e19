//! Cell-by-cell grid generation from trained adjacency state
//!
//! Cells are visited in row-major order. Each cell draws from a candidate
//! pool carried over from its left neighbor (or reseeded at the start of a
//! row), shuffles it deterministically from the caller's seed, and accepts
//! the first candidate that satisfies the placed top/left constraints and a
//! two-column lookahead. What happens when no candidate survives is the
//! mode's policy: quality aborts and reports partial completion, fill forces
//! a seeded sample and keeps going.

use std::hash::Hash;
use std::str::FromStr;

use crate::algorithm::cache::QueryCache;
use crate::error::{Error, Result};
use crate::graph::{Axis, Flag, NO_FLAG};
use crate::math::random::{seeded_index, seeded_shuffle};
use crate::spatial::Grid;
use crate::training::trainer::Trainer;

/// Policy for cells where no candidate satisfies the constraints
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationMode {
    /// Abort at the first unresolvable cell; the score reports how much of
    /// the grid was completed
    #[default]
    Quality,
    /// Force a seeded sample into every unresolvable cell; never aborts,
    /// score is always 1.0
    Fill,
}

impl FromStr for GenerationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quality" => Ok(Self::Quality),
            "fill" => Ok(Self::Fill),
            _ => Err(Error::UnknownMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Parameters for one generation run
#[derive(Clone, Debug)]
pub struct GenerationRequest<E> {
    /// Target row count
    pub rows: usize,
    /// Target column count
    pub cols: usize,
    /// Element substituted for unresolved cells in the output grid
    pub ambient_fill: E,
    /// Caller seed; identical seeds reproduce identical output
    pub seed: u64,
    /// Fallback policy
    pub mode: GenerationMode,
}

impl<E> GenerationRequest<E> {
    /// Create a request with the default quality mode
    pub const fn new(rows: usize, cols: usize, ambient_fill: E, seed: u64) -> Self {
        Self {
            rows,
            cols,
            ambient_fill,
            seed,
            mode: GenerationMode::Quality,
        }
    }

    /// Set the fallback policy
    #[must_use]
    pub const fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Outcome of one generation run
#[derive(Clone, Debug)]
pub struct Generation<E> {
    /// The synthesized grid, reverse-mapped through the registry
    pub grid: Grid<E>,
    /// The raw flag grid; unresolved cells hold [`NO_FLAG`]
    pub flags: Grid<Flag>,
    /// Completion quality: placed cells / total cells
    pub score: f64,
    /// Cells assigned a value, including fill-mode forced cells
    pub cells_placed: usize,
    /// Cells that only fill mode's forced sampling could resolve
    pub forced_cells: usize,
}

impl<E: Clone + Eq + Hash> Trainer<E> {
    /// Generate a grid with a cache scoped to this call
    ///
    /// # Errors
    ///
    /// Propagates grid addressing errors; these cannot occur for the
    /// coordinates the algorithm visits.
    pub fn generate(&self, request: &GenerationRequest<E>) -> Result<Generation<E>> {
        let mut cache = QueryCache::new();
        self.generate_with_cache(request, &mut cache)
    }

    /// Generate a grid reusing a caller-owned persistent cache
    ///
    /// The cache speeds up repeated generation against unchanged trained
    /// state. It is not invalidated automatically: after any further
    /// `train`/`ally`/`load` on this trainer, the caller must
    /// [`QueryCache::clear`] it before generating again.
    ///
    /// # Errors
    ///
    /// Propagates grid addressing errors; these cannot occur for the
    /// coordinates the algorithm visits.
    pub fn generate_with_cache(
        &self,
        request: &GenerationRequest<E>,
        cache: &mut QueryCache,
    ) -> Result<Generation<E>> {
        let rows = request.rows;
        let cols = request.cols;
        let total = rows * cols;

        let mut flags: Grid<Flag> = Grid::zeros(rows, cols);
        let all_flags: Vec<Flag> = (1..=self.registry().len() as Flag).collect();
        let mut pool = all_flags.clone();
        let mut placed = 0usize;
        let mut forced = 0usize;

        'cells: for index in 0..total {
            let row = index / cols;
            let col = index % cols;

            if col == 0 && row > 0 {
                let head = *flags.get(row - 1, 0)?;
                pool = cache.expanded_neighbors(self, Axis::Down, head).to_vec();
            }

            let mut ordered = pool.clone();
            seeded_shuffle(&mut ordered, request.seed, index as u64);

            let top = if row > 0 { *flags.get(row - 1, col)? } else { NO_FLAG };
            let left = if col > 0 { *flags.get(row, col - 1)? } else { NO_FLAG };

            let mut accepted = None;
            for &sub in &ordered {
                let x_aliases = cache.expanded_neighbors(self, Axis::Right, sub);
                let y_aliases = cache.expanded_neighbors(self, Axis::Down, sub);

                // A candidate with no continuation on either axis poisons the
                // rest of this ordering as well
                if x_aliases.is_empty() || y_aliases.is_empty() {
                    break;
                }

                if top != NO_FLAG && left != NO_FLAG {
                    let from_left = cache.expanded_neighbors(self, Axis::Right, left);
                    let from_top = cache.expanded_neighbors(self, Axis::Down, top);
                    if !from_left.contains(sub) || !from_top.contains(sub) {
                        continue;
                    }
                }

                // Lookahead: the cell two columns ahead inherits a top
                // constraint from the diagonal; a candidate whose rightward
                // expansion cannot meet it is a provable dead end
                if row > 0 && col + 2 < cols {
                    let diagonal = *flags.get(row - 1, col + 1)?;
                    if diagonal != NO_FLAG {
                        let below_diagonal =
                            cache.expanded_neighbors(self, Axis::Down, diagonal);
                        if !below_diagonal.intersects(&x_aliases) {
                            continue;
                        }
                    }
                }

                accepted = Some((sub, x_aliases));
                break;
            }

            match accepted {
                Some((sub, x_aliases)) => {
                    flags.set(row, col, sub)?;
                    placed += 1;
                    pool = x_aliases.to_vec();
                }
                None => match request.mode {
                    GenerationMode::Quality => break 'cells,
                    GenerationMode::Fill => {
                        let sampled = if pool.is_empty() {
                            seeded_index(request.seed, index as u64, all_flags.len())
                                .and_then(|i| all_flags.get(i).copied())
                        } else {
                            seeded_index(request.seed, index as u64, pool.len())
                                .and_then(|i| pool.get(i).copied())
                        };
                        match sampled {
                            Some(flag) => {
                                flags.set(row, col, flag)?;
                                pool = cache
                                    .expanded_neighbors(self, Axis::Right, flag)
                                    .to_vec();
                            }
                            // No flags are known at all; the cell stays
                            // unresolved but fill mode still never aborts
                            None => pool = Vec::new(),
                        }
                        placed += 1;
                        forced += 1;
                    }
                },
            }
        }

        let score = if total == 0 {
            1.0
        } else {
            placed as f64 / total as f64
        };
        let grid = self.registry().restore(&flags, &request.ambient_fill);

        Ok(Generation {
            grid,
            flags,
            score,
            cells_placed: placed,
            forced_cells: forced,
        })
    }
}
