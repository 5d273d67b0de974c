/*!
 * Generic matrix type.
 *
 * A [Matrix] stores its elements contiguously in row major order, so every row of the matrix is
 * a contiguous slice of its data. This is what allows [row ranges](rows) to hand out views of
 * each row without copying anything.
 */

use std::fmt;

pub mod element_types;
pub mod errors;
pub mod rows;
pub mod views;

use crate::matrices::rows::RowRange;

/**
 * A general purpose dense matrix of some type.
 *
 * The elements are stored in row major order, such that the element at `(row, column)` is at
 * index `row * columns + column` of the data. A matrix may have 0 rows or 0 columns, in which
 * case it stores no elements.
 */
#[derive(Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: Row,
    columns: Column,
}

/// The maximum row and column lengths are usize, due to the internal storage being backed by Vec
pub type Row = usize;
/// The maximum row and column lengths are usize, due to the internal storage being backed by Vec
pub type Column = usize;

/**
 * Methods for matrices of any type, including non numerical types such as bool.
 */
impl<T> Matrix<T> {
    /**
     * Creates a row vector (1xN) from a list
     */
    pub fn row(values: Vec<T>) -> Matrix<T> {
        let columns = values.len();
        Matrix {
            data: values,
            rows: 1,
            columns,
        }
    }

    /**
     * Creates a column vector (Nx1) from a list
     */
    pub fn column(values: Vec<T>) -> Matrix<T> {
        let rows = values.len();
        Matrix {
            data: values,
            rows,
            columns: 1,
        }
    }

    /**
     * Creates a matrix from a nested array of values, each inner vector
     * being a row, and hence the outer vector containing all rows in sequence, the
     * same way as when writing matrices in mathematics.
     *
     * Example of a 2 x 3 matrix in both notations:
     * ```ignore
     *   [
     *      1, 2, 4
     *      8, 9, 3
     *   ]
     * ```
     * ```
     * use row_range::matrices::Matrix;
     * let matrix = Matrix::from(vec![
     *     vec![ 1, 2, 4 ],
     *     vec![ 8, 9, 3 ]]);
     * assert_eq!((2, 3), matrix.size());
     * ```
     *
     * An empty outer vector creates a 0x0 matrix.
     *
     * # Panics
     *
     * If the inner vectors are not all the same length.
     */
    #[track_caller]
    pub fn from(values: Vec<Vec<T>>) -> Matrix<T> {
        let rows = values.len();
        let columns = values.first().map(|row| row.len()).unwrap_or(0);
        assert!(
            values.iter().all(|row| row.len() == columns),
            "Inconsistent size"
        );
        Matrix {
            data: values.into_iter().flatten().collect(),
            rows,
            columns,
        }
    }

    /**
     * Creates a matrix of the provided size from a flat list of values in row major order.
     *
     * ```
     * use row_range::matrices::Matrix;
     * let matrix = Matrix::from_flat_row_major((2, 2), vec![ 1, 2, 3, 4 ]);
     * assert_eq!(matrix, Matrix::from(vec![ vec![ 1, 2 ], vec![ 3, 4 ] ]));
     * ```
     *
     * # Panics
     *
     * If the number of values is not `rows * columns`.
     */
    #[track_caller]
    pub fn from_flat_row_major(size: (Row, Column), values: Vec<T>) -> Matrix<T> {
        assert_eq!(
            size.0 * size.1,
            values.len(),
            "Length of values must match the size {:?}",
            size
        );
        Matrix {
            data: values,
            rows: size.0,
            columns: size.1,
        }
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows, self.columns)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.rows
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.columns
    }

    /**
     * Gets a reference to the value at this row and column if the index is in range.
     * Otherwise returns None.
     */
    pub fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.data.get(self.index(row, column))
        } else {
            None
        }
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        match self.try_get_reference(row, column) {
            Some(reference) => reference,
            None => panic!(
                "Index ({}, {}) not in range, Matrix size is {:?}.",
                row,
                column,
                self.size()
            ),
        }
    }

    /**
     * Gets a mutable reference to the value at this row and column if the index is in range.
     * Otherwise returns None.
     */
    pub fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            let index = self.index(row, column);
            self.data.get_mut(index)
        } else {
            None
        }
    }

    /**
     * Gets a mutable reference to the value at this row and column. Rows and Columns are
     * 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn get_reference_mut(&mut self, row: Row, column: Column) -> &mut T {
        let size = self.size();
        match self.try_get_reference_mut(row, column) {
            Some(reference) => reference,
            None => panic!(
                "Index ({}, {}) not in range, Matrix size is {:?}.",
                row, column, size
            ),
        }
    }

    /**
     * Sets a new value to this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn set(&mut self, row: Row, column: Column, value: T) {
        *self.get_reference_mut(row, column) = value;
    }

    /**
     * Returns the contiguous slice of values making up a row, if the row is in range.
     * Rows are 0 indexed.
     */
    pub fn row_slice(&self, row: Row) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.columns;
            self.data.get(start..start + self.columns)
        } else {
            None
        }
    }

    /**
     * Returns the contiguous mutable slice of values making up a row, if the row is in range.
     * Rows are 0 indexed.
     */
    pub fn row_slice_mut(&mut self, row: Row) -> Option<&mut [T]> {
        if row < self.rows {
            let start = row * self.columns;
            self.data.get_mut(start..start + self.columns)
        } else {
            None
        }
    }

    /**
     * Returns all values of this matrix in row major order.
     */
    pub fn as_row_major_slice(&self) -> &[T] {
        &self.data
    }

    /**
     * Returns all values of this matrix in row major order, mutably.
     */
    pub fn as_row_major_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /**
     * Consumes the matrix, yielding its values in row major order.
     */
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /**
     * Returns a [RowRange] over the rows of this matrix, sharing its storage.
     *
     * ```
     * use row_range::matrices::Matrix;
     * let matrix = Matrix::from(vec![
     *     vec![ 1, 2 ],
     *     vec![ 3, 4 ]]);
     * let firsts: Vec<i32> = matrix.row_range().iter().map(|row| row[0]).collect();
     * assert_eq!(firsts, vec![ 1, 3 ]);
     * ```
     */
    pub fn row_range(&self) -> RowRange<T, &Matrix<T>> {
        RowRange::from(self)
    }

    /**
     * Returns a [RowRange] over the rows of this matrix that can write to each row.
     *
     * ```
     * use row_range::matrices::Matrix;
     * let mut matrix = Matrix::column(vec![ 0, 0, 0 ]);
     * for (i, mut row) in matrix.row_range_mut().iter_mut().enumerate() {
     *     row.fill(i);
     * }
     * assert_eq!(matrix, Matrix::column(vec![ 0, 1, 2 ]));
     * ```
     */
    pub fn row_range_mut(&mut self) -> RowRange<T, &mut Matrix<T>> {
        RowRange::from(self)
    }

    fn index(&self, row: Row, column: Column) -> usize {
        row * self.columns + column
    }
}

/**
 * Methods for matrices with types that can be copied, but still not neccessarily numerical.
 */
impl<T: Clone> Matrix<T> {
    /**
     * Creates a matrix of the provided size with all elements initialised to the provided value
     */
    pub fn empty(value: T, size: (Row, Column)) -> Matrix<T> {
        Matrix {
            data: vec![value; size.0 * size.1],
            rows: size.0,
            columns: size.1,
        }
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn get(&self, row: Row, column: Column) -> T {
        self.get_reference(row, column).clone()
    }
}

/**
 * Any matrix of a Cloneable type implements Clone.
 */
impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Matrix {
            data: self.data.clone(),
            rows: self.rows,
            columns: self.columns,
        }
    }
}

/**
 * PartialEq is implemented as two matrices are equal if and only if all their elements
 * are equal and they have the same size.
 */
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.data == other.data
    }
}

/**
 * Any matrix of a Displayable type implements Display, printing one row per line.
 */
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, "  ")?;
            }
            let values = &self.data[row * self.columns..(row + 1) * self.columns];
            format_values(values, f)?;
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        write!(f, " ]")
    }
}

// Comma separated values of a single row, shared with the row views' Display implementations
pub(crate) fn format_values<T: fmt::Display>(
    values: &[T],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

#[test]
fn test_from_nested() {
    let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!((3, 2), matrix.size());
    assert_eq!(4, matrix.get(1, 1));
    assert_eq!(Some(&[5, 6][..]), matrix.row_slice(2));
    assert_eq!(None, matrix.row_slice(3));
}

#[test]
fn test_empty_nested() {
    let matrix: Matrix<f32> = Matrix::from(vec![]);
    assert_eq!((0, 0), matrix.size());
    assert_eq!(None, matrix.try_get_reference(0, 0));
}

#[test]
fn test_zero_columns() {
    let matrix: Matrix<u8> = Matrix::from_flat_row_major((3, 0), vec![]);
    assert_eq!((3, 0), matrix.size());
    assert_eq!(Some(&[][..]), matrix.row_slice(2));
}

#[test]
#[should_panic]
fn test_inconsistent_size() {
    Matrix::from(vec![vec![1, 2], vec![3]]);
}

#[test]
#[should_panic]
fn test_wrong_flat_size() {
    Matrix::from_flat_row_major((2, 2), vec![1, 2, 3]);
}

#[test]
fn test_set() {
    let mut matrix = Matrix::empty(0, (2, 3));
    matrix.set(1, 2, 7);
    assert_eq!(matrix.as_row_major_slice(), &[0, 0, 0, 0, 0, 7]);
    assert_eq!(matrix.row_slice_mut(1), Some(&mut [0, 0, 7][..]));
}

#[test]
fn test_display() {
    let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!("[ 1, 2\n  3, 4 ]", matrix.to_string());
}
