/*!
 * Generic sources of matrix data.
 *
 * Row ranges are generic over where their matrix comes from. Anything implementing [MatrixRef]
 * can be iterated by row, and anything implementing [MatrixMut] can additionally have its rows
 * written to. This means a row range can borrow a matrix, share it through a reference counted
 * pointer, or own it outright, all without copying the matrix's data.
 */

use crate::matrices::{Column, Row};

mod traits;

/**
 * A shared/immutable reference to a matrix of some type, stored in row major order.
 *
 * # Indexing
 *
 * Valid rows range from 0 inclusive to `view_rows` exclusive. Each row is a contiguous slice
 * of exactly `view_columns` values within [row_major_data](MatrixRef::row_major_data).
 *
 * # Invariants
 *
 * Implementations must return exactly `view_rows * view_columns` values from
 * `row_major_data`, and the size they report may not change through a shared reference.
 * Code looping through the rows of a MatrixRef relies on the range of valid rows staying the
 * same for as long as it holds a reference. Breaking this cannot cause undefined behavior,
 * since all row accesses are bounds checked slice accesses, but will cause panics.
 */
pub trait MatrixRef<T> {
    /**
     * The number of rows that this reference can view.
     */
    fn view_rows(&self) -> Row;

    /**
     * The number of columns that this reference can view.
     */
    fn view_columns(&self) -> Column;

    /**
     * All the values that this reference can view, in row major order.
     */
    fn row_major_data(&self) -> &[T];

    /**
     * The size of the matrix that this reference can view.
     */
    fn view_size(&self) -> (Row, Column) {
        (self.view_rows(), self.view_columns())
    }

    /**
     * Gets the contiguous slice of values making up a row if the row is in range. Otherwise
     * returns None.
     */
    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        if row >= self.view_rows() {
            return None;
        }
        let columns = self.view_columns();
        let start = row * columns;
        self.row_major_data().get(start..start + columns)
    }
}

/**
 * A unique/mutable reference to a matrix of some type, stored in row major order.
 *
 * See [MatrixRef] for the invariants implementations must uphold.
 */
pub trait MatrixMut<T>: MatrixRef<T> {
    /**
     * All the values that this reference can view in row major order, mutably.
     */
    fn row_major_data_mut(&mut self) -> &mut [T];

    /**
     * Gets the contiguous mutable slice of values making up a row if the row is in range.
     * Otherwise returns None.
     */
    fn try_get_row_mut(&mut self, row: Row) -> Option<&mut [T]> {
        if row >= self.view_rows() {
            return None;
        }
        let columns = self.view_columns();
        let start = row * columns;
        self.row_major_data_mut().get_mut(start..start + columns)
    }
}
