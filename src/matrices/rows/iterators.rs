use std::iter::{ExactSizeIterator, FusedIterator};

use crate::matrices::rows::{RowView, RowViewMut};
use crate::matrices::views::{MatrixMut, MatrixRef};
use crate::matrices::{Column, Row};

/**
 * An iterator over views of each row in a matrix.
 *
 * For a 3x2 matrix such as `[ 1, 2; 3, 4; 5, 6 ]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 *   5, 6
 * ]
 * ```
 * The rows will be iterated through as `[ 1, 2 ]`, `[ 3, 4 ]`, `[ 5, 6 ]`.
 *
 * Each row view borrows its values from the matrix, nothing is copied. The iterator can also be
 * iterated from the back, which visits the rows in reverse order.
 */
#[derive(Debug)]
pub struct RowIterator<'a, T> {
    // rows front to back, in row major order
    values: &'a [T],
    columns: Column,
    front: Row,
    back: Row,
}

impl<'a, T> RowIterator<'a, T> {
    /**
     * Constructs a row iterator over a source.
     *
     * # Panics
     *
     * If the source has fewer values than its size says it should.
     */
    #[track_caller]
    pub fn from<S>(source: &'a S) -> RowIterator<'a, T>
    where
        S: MatrixRef<T> + ?Sized,
    {
        let (rows, columns) = source.view_size();
        RowIterator {
            values: &source.row_major_data()[..rows * columns],
            columns,
            front: 0,
            back: rows,
        }
    }
}

impl<'a, T> Iterator for RowIterator<'a, T> {
    type Item = RowView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // Rows are split off the remaining values instead of looked up with try_get_row, the
        // same as RowIteratorMut which can only hand out disjoint mutable rows this way.
        // Both yield exactly the slice RowView::from_source gives for the same row.
        let (row, rest) = self.values.split_at(self.columns);
        self.values = rest;
        let view = RowView::new(row, self.front);
        self.front += 1;

        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RowIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let (rest, row) = self.values.split_at(self.values.len() - self.columns);
        self.values = rest;
        self.back -= 1;

        Some(RowView::new(row, self.back))
    }
}

impl<T> FusedIterator for RowIterator<'_, T> {}
impl<T> ExactSizeIterator for RowIterator<'_, T> {}

impl<T> Clone for RowIterator<'_, T> {
    fn clone(&self) -> Self {
        RowIterator {
            values: self.values,
            columns: self.columns,
            front: self.front,
            back: self.back,
        }
    }
}

/**
 * An iterator over mutable views of each row in a matrix.
 *
 * Each row view borrows its values from the matrix, so writing to a row view writes to the
 * matrix. Every view is of a different row, so all of them can be held at once.
 *
 * ```
 * use row_range::matrices::Matrix;
 * let mut matrix = Matrix::from(vec![
 *     vec![ 1, 2 ],
 *     vec![ 3, 4 ]]);
 * {
 *     let mut range = matrix.row_range_mut();
 *     let mut rows: Vec<_> = range.iter_mut().collect();
 *     let (first, second) = rows.split_at_mut(1);
 *     std::mem::swap(&mut first[0][0], &mut second[0][1]);
 * }
 * assert_eq!(matrix, Matrix::from(vec![
 *     vec![ 4, 2 ],
 *     vec![ 3, 1 ]]));
 * ```
 */
#[derive(Debug)]
pub struct RowIteratorMut<'a, T> {
    // rows front to back, in row major order
    values: &'a mut [T],
    columns: Column,
    front: Row,
    back: Row,
}

impl<'a, T> RowIteratorMut<'a, T> {
    /**
     * Constructs a mutable row iterator over a source.
     *
     * # Panics
     *
     * If the source has fewer values than its size says it should.
     */
    #[track_caller]
    pub fn from<S>(source: &'a mut S) -> RowIteratorMut<'a, T>
    where
        S: MatrixMut<T> + ?Sized,
    {
        let (rows, columns) = source.view_size();
        RowIteratorMut {
            values: &mut source.row_major_data_mut()[..rows * columns],
            columns,
            front: 0,
            back: rows,
        }
    }
}

impl<'a, T> Iterator for RowIteratorMut<'a, T> {
    type Item = RowViewMut<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // take the remaining values out so the row we split off can keep the 'a lifetime
        let values = std::mem::take(&mut self.values);
        let (row, rest) = values.split_at_mut(self.columns);
        self.values = rest;
        let view = RowViewMut::new(row, self.front);
        self.front += 1;

        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RowIteratorMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let values = std::mem::take(&mut self.values);
        let split = values.len() - self.columns;
        let (rest, row) = values.split_at_mut(split);
        self.values = rest;
        self.back -= 1;

        Some(RowViewMut::new(row, self.back))
    }
}

impl<T> FusedIterator for RowIteratorMut<'_, T> {}
impl<T> ExactSizeIterator for RowIteratorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::Matrix;

    #[test]
    fn test_exact_size() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let mut iterator = RowIterator::from(&matrix);
        assert_eq!(iterator.size_hint(), (3, Some(3)));
        assert_eq!(iterator.next().unwrap(), [1, 2]);
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.next_back().unwrap(), [5, 6]);
        assert_eq!(iterator.len(), 1);
        let middle = iterator.next().unwrap();
        assert_eq!(middle, [3, 4]);
        assert_eq!(1, middle.row());
        assert_eq!(iterator.size_hint(), (0, Some(0)));
        assert!(iterator.next().is_none());
        assert!(iterator.next_back().is_none());
    }

    #[test]
    fn test_zero_columns() {
        let matrix: Matrix<f64> = Matrix::from_flat_row_major((4, 0), vec![]);
        let rows: Vec<Row> = RowIterator::from(&matrix).map(|row| row.row()).collect();
        assert_eq!(vec![0, 1, 2, 3], rows);
        let mut matrix = matrix;
        let empty_rows = RowIteratorMut::from(&mut matrix)
            .rev()
            .filter(|row| row.is_empty())
            .count();
        assert_eq!(4, empty_rows);
    }

    #[test]
    fn test_rows_match_source_lookup() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        for view in RowIterator::from(&matrix).rev() {
            let looked_up = RowView::from_source(&matrix, view.row());
            assert!(view.aliases(&looked_up));
            assert!(std::ptr::eq(view.as_slice(), matrix.try_get_row(view.row()).unwrap()));
        }
    }

    #[test]
    fn test_empty() {
        let matrix: Matrix<u8> = Matrix::from(vec![]);
        assert_eq!(0, RowIterator::from(&matrix).count());
    }

    #[test]
    fn test_mutable_from_back() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        for (i, mut row) in RowIteratorMut::from(&mut matrix).rev().enumerate() {
            assert_eq!(2 - i, row.row());
            row.fill(i);
        }
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![2, 2], vec![1, 1], vec![0, 0]])
        );
    }
}
