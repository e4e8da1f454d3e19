//! Fixed-size row-major grid with bounds-checked addressing
//!
//! The shape invariant `len == rows * cols` is enforced at construction and
//! preserved by every operation; nothing here can change a grid's shape
//! after it exists. Flat indices map to coordinates as
//! `index = row * cols + col`.

use ndarray::Array2;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Fixed-size row-major 2D container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Create a grid from a row-major element sequence
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when `elements.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, elements: Vec<T>) -> Result<Self> {
        if elements.len() != rows * cols {
            return Err(Error::SizeMismatch {
                rows,
                cols,
                actual: elements.len(),
            });
        }
        match Array2::from_shape_vec((rows, cols), elements) {
            Ok(cells) => Ok(Self { cells }),
            Err(_) => Err(Error::SizeMismatch {
                rows,
                cols,
                actual: rows * cols,
            }),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total cell count
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside `[0, rows) x [0, cols)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.cells.get((row, col)).ok_or(Error::IndexOutOfRange {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Overwrite the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside `[0, rows) x [0, cols)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (rows, cols) = (self.rows(), self.cols());
        match self.cells.get_mut((row, col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    /// Row coordinate of a flat index
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlatIndexOutOfRange`] when `index >= len`.
    pub fn row_of(&self, index: usize) -> Result<usize> {
        self.check_flat(index)?;
        Ok(index / self.cols())
    }

    /// Column coordinate of a flat index
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlatIndexOutOfRange`] when `index >= len`.
    pub fn col_of(&self, index: usize) -> Result<usize> {
        self.check_flat(index)?;
        Ok(index % self.cols())
    }

    fn check_flat(&self, index: usize) -> Result<()> {
        if index < self.len() && self.cols() > 0 {
            Ok(())
        } else {
            Err(Error::FlatIndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Elementwise combination of two same-shaped grids
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the operand shapes differ.
    pub fn zip_with<U, V, F>(&self, other: &Grid<U>, mut op: F) -> Result<Grid<V>>
    where
        F: FnMut(&T, &U) -> V,
    {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(Error::ShapeMismatch {
                left: (self.rows(), self.cols()),
                right: (other.rows(), other.cols()),
            });
        }
        let combined = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op(a, b))
            .collect();
        Grid::new(self.rows(), self.cols(), combined)
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), fill),
        }
    }

    /// Create a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] when any row's length differs from the
    /// first row's.
    pub fn from_nested(rows: &[Vec<T>]) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        let mut elements = Vec::with_capacity(rows.len() * expected);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::RaggedRows {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
            elements.extend_from_slice(cells);
        }
        Self::new(rows.len(), expected, elements)
    }

    /// Copy of row `i`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `i >= rows`.
    pub fn row(&self, i: usize) -> Result<Vec<T>> {
        if i >= self.rows() {
            return Err(Error::IndexOutOfRange {
                row: i,
                col: 0,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.cells.row(i).to_vec())
    }

    /// Copy of column `j`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `j >= cols`.
    pub fn col(&self, j: usize) -> Result<Vec<T>> {
        if j >= self.cols() {
            return Err(Error::IndexOutOfRange {
                row: 0,
                col: j,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.cells.column(j).to_vec())
    }

    /// Reset every cell to `fill`
    pub fn clear(&mut self, fill: T) {
        self.cells.fill(fill);
    }

    /// Extract a window centered at (row, col)
    ///
    /// Window cells falling outside the source grid take `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] unless both window dimensions are
    /// positive odd integers, and [`Error::IndexOutOfRange`] when the center
    /// is outside the grid.
    pub fn local_window(
        &self,
        row: usize,
        col: usize,
        win_rows: usize,
        win_cols: usize,
        fill: T,
    ) -> Result<Self> {
        if win_rows == 0 || win_cols == 0 || win_rows % 2 == 0 || win_cols % 2 == 0 {
            return Err(Error::InvalidWindowSize { win_rows, win_cols });
        }
        self.get(row, col)?;

        let half_rows = (win_rows / 2) as isize;
        let half_cols = (win_cols / 2) as isize;
        let mut elements = Vec::with_capacity(win_rows * win_cols);
        for wi in 0..win_rows as isize {
            for wj in 0..win_cols as isize {
                let src_row = row as isize + wi - half_rows;
                let src_col = col as isize + wj - half_cols;
                let cell = if src_row < 0 || src_col < 0 {
                    None
                } else {
                    self.cells.get((src_row as usize, src_col as usize))
                };
                elements.push(cell.cloned().unwrap_or_else(|| fill.clone()));
            }
        }
        Self::new(win_rows, win_cols, elements)
    }

    /// Clone the cells into a row-major vector
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Zero + Clone> Grid<T> {
    /// Create a grid of zero-valued cells
    ///
    /// Used for flag grids, where zero is the unresolved-cell sentinel.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }
}
