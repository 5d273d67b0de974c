use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::matrices::Row;
use crate::matrices::rows::{RowView, RowViewMut};
use crate::matrices::views::{MatrixMut, MatrixRef};

/**
 * A position within the rows of a matrix, from 0 up to and including the number of rows.
 *
 * A cursor moves forward one row at a time with [`advance`](RowCursor::advance), and
 * dereferences to a view of the row it is positioned at with [`get`](RowCursor::get), or
 * [`get_mut`](RowCursor::get_mut) if its source is a [MatrixMut]. The row view is created from
 * the source each time the cursor is dereferenced, so it always corresponds to the cursor's
 * current position, and two dereferences at the same position view the same values in memory.
 *
 * The position equal to the number of rows is the end of the matrix. A cursor at the end can
 * be compared with other cursors but not dereferenced. Cursors compare by position only, and
 * only cursors over the same matrix should be compared.
 *
 * ```
 * use row_range::matrices::Matrix;
 * use row_range::matrices::rows::RowCursor;
 * let matrix = Matrix::from(vec![
 *     vec![ 1, 2 ],
 *     vec![ 3, 4 ],
 *     vec![ 5, 6 ]]);
 * let mut cursor = RowCursor::new(&matrix, 0);
 * let start = cursor.post_advance();
 * assert_eq!(0, start.position());
 * assert_eq!(cursor.get(), [ 3, 4 ]);
 * assert!(start < cursor);
 * cursor.advance().advance();
 * assert!(cursor.is_end());
 * assert!(cursor == RowCursor::new(&matrix, 3));
 * ```
 */
#[derive(Debug)]
pub struct RowCursor<T, S> {
    source: S,
    position: Row,
    _type: PhantomData<T>,
}

impl<T, S> RowCursor<T, S>
where
    S: MatrixRef<T>,
{
    /**
     * Creates a cursor over a source, positioned at a row.
     *
     * # Panics
     *
     * The position must not be greater than the number of rows in the source, this is
     * checked with a debug assertion.
     */
    #[track_caller]
    pub fn new(source: S, position: Row) -> RowCursor<T, S> {
        debug_assert!(
            position <= source.view_rows(),
            "Cursor position {} out of range, source has {} rows",
            position,
            source.view_rows()
        );
        RowCursor {
            source,
            position,
            _type: PhantomData,
        }
    }

    /**
     * The row this cursor is positioned at.
     */
    pub fn position(&self) -> Row {
        self.position
    }

    /**
     * The number of rows in the source, which is the end position.
     */
    pub fn rows(&self) -> Row {
        self.source.view_rows()
    }

    /**
     * Returns true if this cursor is positioned one past the last row.
     */
    pub fn is_end(&self) -> bool {
        self.position >= self.rows()
    }

    /**
     * Returns a view of the row this cursor is positioned at.
     *
     * # Panics
     *
     * Dereferencing a cursor positioned at the end is a bug in the caller, checked with a
     * debug assertion. Release builds still panic rather than read out of bounds.
     */
    #[track_caller]
    pub fn get(&self) -> RowView<'_, T> {
        debug_assert!(!self.is_end(), "End cursor cannot be dereferenced");
        RowView::from_source(&self.source, self.position)
    }

    /**
     * Moves this cursor forward by one row, returning it for further use.
     *
     * # Panics
     *
     * Advancing a cursor positioned at the end is a bug in the caller, checked with a debug
     * assertion.
     */
    #[track_caller]
    pub fn advance(&mut self) -> &mut Self {
        debug_assert!(!self.is_end(), "End cursor cannot be advanced");
        self.position += 1;
        self
    }

    /**
     * Moves this cursor forward by one row, returning the position it was at before it was
     * moved.
     *
     * Unlike [`post_advance`](RowCursor::post_advance) this does not need to copy the cursor,
     * so it is also available for cursors which can write to their source.
     *
     * # Panics
     *
     * Advancing a cursor positioned at the end is a bug in the caller, checked with a debug
     * assertion.
     */
    #[track_caller]
    pub fn post_advance_position(&mut self) -> Row {
        let previous = self.position;
        self.advance();
        previous
    }

    #[track_caller]
    fn compare<S2>(&self, other: &RowCursor<T, S2>) -> Ordering
    where
        S2: MatrixRef<T>,
    {
        debug_assert_eq!(
            self.rows(),
            other.rows(),
            "Cursors over matrices of different sizes cannot be compared"
        );
        self.position.cmp(&other.position)
    }

    /**
     * Gives a reference to the cursor's source.
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }

    /**
     * Consumes the cursor, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }
}

impl<T, S> RowCursor<T, S>
where
    S: MatrixRef<T> + Clone,
{
    /**
     * Moves this cursor forward by one row, returning a copy of the cursor from before it
     * was moved.
     *
     * # Panics
     *
     * Advancing a cursor positioned at the end is a bug in the caller, checked with a debug
     * assertion.
     */
    #[track_caller]
    pub fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }
}

impl<T, S> RowCursor<T, S>
where
    S: MatrixMut<T>,
{
    /**
     * Returns a view of the row this cursor is positioned at, which can write to the row.
     *
     * # Panics
     *
     * Dereferencing a cursor positioned at the end is a bug in the caller, checked with a
     * debug assertion. Release builds still panic rather than write out of bounds.
     */
    #[track_caller]
    pub fn get_mut(&mut self) -> RowViewMut<'_, T> {
        debug_assert!(!self.is_end(), "End cursor cannot be dereferenced");
        RowViewMut::from_source(&mut self.source, self.position)
    }
}

impl<T, S> Clone for RowCursor<T, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        RowCursor {
            source: self.source.clone(),
            position: self.position,
            _type: PhantomData,
        }
    }
}

impl<T, S> Copy for RowCursor<T, S> where S: Copy {}

/**
 * Cursors are equal if they are at the same position. Cursors over different kinds of source
 * can be compared, such as a cursor over a `&Matrix` and one over a `&mut Matrix`, but they
 * should be over the same matrix.
 */
impl<T, S1, S2> PartialEq<RowCursor<T, S2>> for RowCursor<T, S1>
where
    S1: MatrixRef<T>,
    S2: MatrixRef<T>,
{
    #[track_caller]
    fn eq(&self, other: &RowCursor<T, S2>) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<T, S> Eq for RowCursor<T, S> where S: MatrixRef<T> {}

/**
 * Cursors are ordered by their positions.
 */
impl<T, S1, S2> PartialOrd<RowCursor<T, S2>> for RowCursor<T, S1>
where
    S1: MatrixRef<T>,
    S2: MatrixRef<T>,
{
    #[track_caller]
    fn partial_cmp(&self, other: &RowCursor<T, S2>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T, S> Ord for RowCursor<T, S>
where
    S: MatrixRef<T>,
{
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::Matrix;

    #[test]
    fn test_dereference_recomputes_at_each_position() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let mut cursor = RowCursor::new(&matrix, 0);
        let first = cursor.get();
        let again = cursor.get();
        assert!(first.aliases(&again));
        assert_eq!(0, first.row());
        cursor.advance();
        assert_eq!(cursor.get(), [3, 4]);
        assert_eq!(1, cursor.get().row());
    }

    #[test]
    fn test_mutable_dereference() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        {
            let mut cursor = RowCursor::new(&mut matrix, 1);
            cursor.get_mut().set(0, 30);
            assert_eq!(cursor.get(), [30, 4]);
            assert_eq!(cursor.get_mut()[0], 30);
        }
        assert_eq!(30, matrix.get(1, 0));
    }

    #[test]
    fn test_ordering() {
        let matrix = Matrix::column(vec![1, 2, 3]);
        let a = RowCursor::new(&matrix, 0);
        let b = RowCursor::new(&matrix, 2);
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert_eq!(Ordering::Less, a.cmp(&b));
        assert_eq!(std::cmp::max(a, b), b);
    }

    #[test]
    fn test_compare_across_source_kinds() {
        let matrix = Matrix::column(vec![1, 2, 3]);
        let borrowed = RowCursor::new(&matrix, 3);
        let owned = RowCursor::new(matrix.clone(), 3);
        assert!(borrowed == owned);
    }

    #[test]
    fn test_mutable_post_advance_position() {
        let mut matrix = Matrix::column(vec![1, 2, 3]);
        let mut cursor = RowCursor::new(&mut matrix, 0);
        let previous = cursor.post_advance_position();
        assert_eq!(0, previous);
        assert_eq!(1, cursor.position());
        cursor.get_mut().set(0, 20);
        assert_eq!(1, cursor.post_advance_position());
        assert_eq!(20, matrix.get(1, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Cursors over matrices of different sizes cannot be compared")]
    fn test_total_order_checks_source_sizes() {
        let small = Matrix::column(vec![1, 2]);
        let large = Matrix::column(vec![1, 2, 3]);
        let a = RowCursor::new(&small, 0);
        let b = RowCursor::new(&large, 0);
        let _ = a.cmp(&b);
    }

    #[test]
    #[should_panic]
    fn test_dereference_end() {
        let matrix = Matrix::column(vec![1, 2, 3]);
        RowCursor::new(&matrix, 3).get();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_position_past_end() {
        let matrix = Matrix::column(vec![1, 2, 3]);
        RowCursor::new(&matrix, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_advance_past_end() {
        let matrix = Matrix::column(vec![1, 2, 3]);
        RowCursor::new(&matrix, 3).advance();
    }
}
