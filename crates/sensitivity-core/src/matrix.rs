// File: crates/sensitivity-core/src/matrix.rs
// Summary: Dense row-major matrix indexed by (row, col); rows follow y keys, columns follow x keys.

use std::ops::Index;

/// Rectangular grid where every cell is defined.
/// Contract: `cells.len() == rows * cols`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Matrix<T> {
    /// 0x0 matrix.
    pub fn empty() -> Self {
        Self { rows: 0, cols: 0, cells: Vec::new() }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Overwrite one cell. Returns false when (row, col) is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Row `row` as a slice, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }

    /// Every cell with its (row, col) position, in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, v)| (i / cols, i % cols, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix { rows: self.rows, cols: self.cols, cells: self.cells.iter().map(f).collect() }
    }
}

impl<T: Clone> Matrix<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self { rows, cols, cells: vec![value; rows * cols] }
    }

    /// Nested `Vec` form, one inner `Vec` per row.
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    /// Build from nested rows. Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let n = rows.len();
        let cells = rows.into_iter().flatten().collect::<Vec<_>>();
        // A list of empty rows carries no cells; treat it as 0x0.
        if cells.is_empty() {
            return Some(Self::empty());
        }
        Some(Self { rows: n, cols, cells })
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "matrix index ({row}, {col}) out of bounds for {}x{}", self.rows, self.cols);
        &self.cells[row * self.cols + col]
    }
}
