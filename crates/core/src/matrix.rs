//! Matrix module - immutable rectangular grids of cells
//!
//! Every operation returns a new `Matrix`; nothing mutates in place.
//! Storage is a flat row-major vector (`row * width + col`), the same layout the
//! board has always used, which keeps row slicing and line clearing cheap.
//!
//! Geometry preconditions (`submatrix`, `mask`, `intersects`) are contract
//! checks: violating them is a bug in the caller, so they panic instead of
//! returning an error.

use crate::types::{Cell, Position};

/// Dimensions of a matrix, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

impl Size {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Rectangular grid of optional cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Create an all-empty matrix.
    pub fn empty(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "matrix dimensions must be non-zero, got {height}x{width}"
        );
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Build a matrix from rows. Panics on empty or ragged input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        assert!(
            height > 0 && width > 0,
            "matrix dimensions must be non-zero, got {height}x{width}"
        );

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "row {y} has length {}, expected {width}", row.len());
            cells.extend_from_slice(row);
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.height, self.width)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.height,
            self.width
        );
        row * self.width + col
    }

    /// Cell at (row, col). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Flat row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every (row, col) index in row-major order.
    ///
    /// The iterator is recomputed on each call and holds no reference to the
    /// matrix, so it can be restarted freely.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    /// Extract the region of `size` whose top-left corner is `origin`.
    pub fn submatrix(&self, origin: Position, size: Size) -> Matrix {
        let (row0, col0) = self.checked_region(origin, size);

        let mut cells = Vec::with_capacity(size.rows * size.cols);
        for row in row0..row0 + size.rows {
            let start = row * self.width + col0;
            cells.extend_from_slice(&self.cells[start..start + size.cols]);
        }

        Matrix {
            width: size.cols,
            height: size.rows,
            cells,
        }
    }

    /// Overlay `overlay` onto a copy of `self` with its top-left at `origin`.
    ///
    /// Non-empty overlay cells win; empty overlay cells are transparent.
    pub fn mask(&self, overlay: &Matrix, origin: Position) -> Matrix {
        let (row0, col0) = self.checked_region(origin, overlay.size());

        let mut cells = self.cells.clone();
        for (row, col) in overlay.coordinates() {
            if let Some(kind) = overlay.get(row, col) {
                cells[(row0 + row) * self.width + col0 + col] = Some(kind);
            }
        }

        Matrix {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// True iff some index is non-empty in both matrices.
    pub fn intersects(&self, other: &Matrix) -> bool {
        assert_eq!(
            self.size(),
            other.size(),
            "intersects requires matrices of equal size"
        );
        self.cells
            .iter()
            .zip(other.cells.iter())
            .any(|(a, b)| a.is_some() && b.is_some())
    }

    /// Rotate 90° clockwise. Width and height swap.
    pub fn rotate_clockwise(&self) -> Matrix {
        let (w, h) = (self.width, self.height);
        let mut cells = Vec::with_capacity(self.cells.len());
        // new[r][c] = old[h - 1 - c][r]
        for row in 0..w {
            for col in 0..h {
                cells.push(self.get(h - 1 - col, row));
            }
        }
        Matrix {
            width: h,
            height: w,
            cells,
        }
    }

    /// Rotate 90° counterclockwise. Width and height swap.
    pub fn rotate_counterclockwise(&self) -> Matrix {
        let (w, h) = (self.width, self.height);
        let mut cells = Vec::with_capacity(self.cells.len());
        // new[r][c] = old[c][w - 1 - r]
        for row in 0..w {
            for col in 0..h {
                cells.push(self.get(col, w - 1 - row));
            }
        }
        Matrix {
            width: h,
            height: w,
            cells,
        }
    }

    /// Validate that a region lies inside the matrix and return its origin as indices.
    fn checked_region(&self, origin: Position, size: Size) -> (usize, usize) {
        let fits = origin.row >= 0
            && origin.col >= 0
            && origin.row as usize + size.rows <= self.height
            && origin.col as usize + size.cols <= self.width;
        assert!(
            fits,
            "region {}x{} at ({}, {}) does not fit in {}x{} matrix",
            size.rows,
            size.cols,
            origin.row,
            origin.col,
            self.height,
            self.width
        );
        (origin.row as usize, origin.col as usize)
    }
}
