/*!
 * Ranges over the rows of a matrix.
 *
 * A [RowRange] wraps some source of matrix data (anything implementing
 * [MatrixRef](crate::matrices::views::MatrixRef)) and walks its rows in order, producing a
 * [RowView] for each row. Row views are slices of the source's storage, so no values are ever
 * copied, and writing through a [RowViewMut] changes the source matrix.
 *
 * There are two ways to walk a RowRange:
 *
 * - [cursors](RowCursor), positioned at a row index from 0 up to and including the number of
 * rows. [`begin`](RowRange::begin) gives a cursor at the first row and [`end`](RowRange::end)
 * a cursor one past the last row. The end cursor is only for comparisons and is never
 * dereferenced.
 * - [iterators](RowIterator), which are the same traversal as a Rust `Iterator`, and can be
 * used in for loops or reversed.
 *
 * ```
 * use row_range::matrices::Matrix;
 * use row_range::matrices::rows::row_range;
 * let matrix = Matrix::column(vec![ 10, 20, 30 ]);
 * let range = row_range(&matrix);
 *
 * let mut values = Vec::new();
 * let mut cursor = range.begin();
 * while cursor != range.end() {
 *     values.push(cursor.get()[0]);
 *     cursor.advance();
 * }
 * assert_eq!(values, vec![ 10, 20, 30 ]);
 * assert_eq!(3, range.end().position());
 *
 * let reversed: Vec<i32> = range.iter().rev().map(|row| row[0]).collect();
 * assert_eq!(reversed, vec![ 30, 20, 10 ]);
 * ```
 */

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::matrices::element_types::{DataType, UntypedMatrix};
use crate::matrices::errors::ElementTypeMismatch;
use crate::matrices::views::{MatrixMut, MatrixRef};
use crate::matrices::{Column, Matrix, Row, format_values};

mod cursors;
mod iterators;

pub use cursors::*;
pub use iterators::*;

/**
 * A view of a single row of a matrix.
 *
 * The view borrows the row's values from the matrix it was created from, it does not own or
 * copy them. A RowView behaves like a 1xN matrix of the same element type and number of
 * columns as its source, and also dereferences to a slice of the row's values.
 */
#[derive(Debug)]
pub struct RowView<'a, T> {
    values: &'a [T],
    row: Row,
}

/**
 * A view of a single row of a matrix that can write to the row.
 *
 * Any changes made through the view are made to the matrix it was created from.
 */
#[derive(Debug)]
pub struct RowViewMut<'a, T> {
    values: &'a mut [T],
    row: Row,
}

impl<'a, T> RowView<'a, T> {
    /**
     * Creates a view of a row of some source. Rows are 0 indexed.
     *
     * ```
     * use row_range::matrices::Matrix;
     * use row_range::matrices::rows::RowView;
     * let matrix = Matrix::from(vec![
     *     vec![ 1, 2 ],
     *     vec![ 3, 4 ]]);
     * let row = RowView::from_source(&matrix, 1);
     * assert_eq!(row, [ 3, 4 ]);
     * assert_eq!((1, 2), row.size());
     * ```
     *
     * # Panics
     *
     * Requesting a row that is not less than the number of rows in the source is a bug in the
     * caller. This is checked with a debug assertion, and release builds will still panic
     * rather than read out of bounds.
     */
    #[track_caller]
    pub fn from_source<S>(source: &'a S, row: Row) -> RowView<'a, T>
    where
        S: MatrixRef<T> + ?Sized,
    {
        debug_assert!(
            row < source.view_rows(),
            "Row {} out of range, source has {} rows",
            row,
            source.view_rows()
        );
        match source.try_get_row(row) {
            Some(values) => RowView { values, row },
            None => panic!(
                "Unable to view row {}, source size is {:?}.",
                row,
                source.view_size()
            ),
        }
    }

    pub(crate) fn new(values: &'a [T], row: Row) -> RowView<'a, T> {
        RowView { values, row }
    }

    /**
     * The index of the row this view was created for.
     */
    pub fn row(&self) -> Row {
        self.row
    }

    /**
     * Gets the number of columns in this row, which is the number of columns in the source.
     */
    pub fn columns(&self) -> Column {
        self.values.len()
    }

    /**
     * Returns the dimensionality of this view in Row, Column format, which is always 1 row.
     */
    pub fn size(&self) -> (Row, Column) {
        (1, self.columns())
    }

    /**
     * Gets a reference to the value at this column if the column is in range. Otherwise
     * returns None.
     */
    pub fn try_get_reference(&self, column: Column) -> Option<&'a T> {
        self.values.get(column)
    }

    /**
     * Gets a reference to the value at this column. Columns are 0 indexed.
     *
     * # Panics
     *
     * If the column is out of range.
     */
    #[track_caller]
    pub fn get_reference(&self, column: Column) -> &'a T {
        match self.values.get(column) {
            Some(reference) => reference,
            None => panic!(
                "Column {} not in range, row has {} columns.",
                column,
                self.columns()
            ),
        }
    }

    /**
     * Returns an iterator over references to the values in this row.
     */
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.values.iter()
    }

    /**
     * Returns the values in this row, borrowed from the source.
     */
    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }

    /**
     * Checks if this view and another one are looking at the very same values in memory,
     * rather than just equal ones.
     *
     * Views of different rows never alias. Rows with no columns have no values to compare,
     * so two such views of the same row index are treated as aliasing.
     */
    pub fn aliases(&self, other: &RowView<'_, T>) -> bool {
        self.row == other.row && std::ptr::eq(self.values, other.values)
    }
}

impl<T: Clone> RowView<'_, T> {
    /**
     * Gets a copy of the value at this column. Columns are 0 indexed.
     *
     * # Panics
     *
     * If the column is out of range.
     */
    #[track_caller]
    pub fn get(&self, column: Column) -> T {
        self.get_reference(column).clone()
    }

    /**
     * Copies the values in this row into a new 1xN matrix.
     */
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::row(self.values.to_vec())
    }
}

impl<T> Clone for RowView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowView<'_, T> {}

impl<'a, T> RowViewMut<'a, T> {
    /**
     * Creates a mutable view of a row of some source. Rows are 0 indexed.
     *
     * ```
     * use row_range::matrices::Matrix;
     * use row_range::matrices::rows::RowViewMut;
     * let mut matrix = Matrix::from(vec![
     *     vec![ 1, 2 ],
     *     vec![ 3, 4 ]]);
     * RowViewMut::from_source(&mut matrix, 0).set(1, 5);
     * assert_eq!(matrix, Matrix::from(vec![
     *     vec![ 1, 5 ],
     *     vec![ 3, 4 ]]));
     * ```
     *
     * # Panics
     *
     * Requesting a row that is not less than the number of rows in the source is a bug in the
     * caller. This is checked with a debug assertion, and release builds will still panic
     * rather than write out of bounds.
     */
    #[track_caller]
    pub fn from_source<S>(source: &'a mut S, row: Row) -> RowViewMut<'a, T>
    where
        S: MatrixMut<T> + ?Sized,
    {
        let size = source.view_size();
        debug_assert!(
            row < size.0,
            "Row {} out of range, source has {} rows",
            row,
            size.0
        );
        match source.try_get_row_mut(row) {
            Some(values) => RowViewMut { values, row },
            None => panic!("Unable to view row {}, source size is {:?}.", row, size),
        }
    }

    pub(crate) fn new(values: &'a mut [T], row: Row) -> RowViewMut<'a, T> {
        RowViewMut { values, row }
    }

    /**
     * The index of the row this view was created for.
     */
    pub fn row(&self) -> Row {
        self.row
    }

    /**
     * Gets the number of columns in this row, which is the number of columns in the source.
     */
    pub fn columns(&self) -> Column {
        self.values.len()
    }

    /**
     * Returns the dimensionality of this view in Row, Column format, which is always 1 row.
     */
    pub fn size(&self) -> (Row, Column) {
        (1, self.columns())
    }

    /**
     * Gets a reference to the value at this column if the column is in range. Otherwise
     * returns None.
     */
    pub fn try_get_reference(&self, column: Column) -> Option<&T> {
        self.values.get(column)
    }

    /**
     * Gets a reference to the value at this column. Columns are 0 indexed.
     *
     * # Panics
     *
     * If the column is out of range.
     */
    #[track_caller]
    pub fn get_reference(&self, column: Column) -> &T {
        let columns = self.columns();
        match self.values.get(column) {
            Some(reference) => reference,
            None => panic!("Column {} not in range, row has {} columns.", column, columns),
        }
    }

    /**
     * Gets a mutable reference to the value at this column if the column is in range.
     * Otherwise returns None.
     */
    pub fn try_get_reference_mut(&mut self, column: Column) -> Option<&mut T> {
        self.values.get_mut(column)
    }

    /**
     * Gets a mutable reference to the value at this column. Columns are 0 indexed.
     *
     * # Panics
     *
     * If the column is out of range.
     */
    #[track_caller]
    pub fn get_reference_mut(&mut self, column: Column) -> &mut T {
        let columns = self.columns();
        match self.values.get_mut(column) {
            Some(reference) => reference,
            None => panic!("Column {} not in range, row has {} columns.", column, columns),
        }
    }

    /**
     * Sets a new value to this column of the row. Columns are 0 indexed.
     *
     * # Panics
     *
     * If the column is out of range.
     */
    #[track_caller]
    pub fn set(&mut self, column: Column, value: T) {
        *self.get_reference_mut(column) = value;
    }

    /**
     * Returns an iterator over references to the values in this row.
     */
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /**
     * Returns an iterator over mutable references to the values in this row.
     */
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    /**
     * Returns the values in this row.
     */
    pub fn as_slice(&self) -> &[T] {
        &*self.values
    }

    /**
     * Returns the values in this row, mutably.
     */
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.values
    }

    /**
     * Consumes the view, yielding the values of the row borrowed for as long as the source
     * was.
     */
    pub fn into_slice(self) -> &'a mut [T] {
        self.values
    }

    /**
     * Returns a read only view of the same row.
     */
    pub fn as_view(&self) -> RowView<'_, T> {
        RowView::new(&*self.values, self.row)
    }
}

impl<T: Clone> RowViewMut<'_, T> {
    /**
     * Gets a copy of the value at this column. Columns are 0 indexed.
     *
     * # Panics
     *
     * If the column is out of range.
     */
    #[track_caller]
    pub fn get(&self, column: Column) -> T {
        self.get_reference(column).clone()
    }

    /**
     * Sets every value in this row to the provided value.
     */
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }

    /**
     * Copies all the provided values into this row.
     *
     * # Panics
     *
     * If the number of values is not the number of columns in this row.
     */
    #[track_caller]
    pub fn copy_from(&mut self, values: &[T]) {
        assert_eq!(
            self.columns(),
            values.len(),
            "Row has {} columns but {} values were provided",
            self.columns(),
            values.len()
        );
        self.values.clone_from_slice(values);
    }

    /**
     * Applies a function to all values in the row, modifying the source matrix.
     */
    pub fn map_mut(&mut self, mapping_function: impl Fn(T) -> T) {
        for value in self.values.iter_mut() {
            *value = mapping_function(value.clone());
        }
    }

    /**
     * Copies the values in this row into a new 1xN matrix.
     */
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::row(self.values.to_vec())
    }
}

impl<T> Deref for RowView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.values
    }
}

impl<T> Deref for RowViewMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &*self.values
    }
}

impl<T> DerefMut for RowViewMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.values
    }
}

/**
 * Indexing a row view by column gives the value at that column.
 */
impl<T> Index<Column> for RowView<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, column: Column) -> &T {
        self.get_reference(column)
    }
}

/**
 * Indexing a row view by column gives the value at that column.
 */
impl<T> Index<Column> for RowViewMut<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, column: Column) -> &T {
        self.get_reference(column)
    }
}

/**
 * Indexing a mutable row view by column gives the value at that column, which can be changed.
 */
impl<T> IndexMut<Column> for RowViewMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, column: Column) -> &mut T {
        self.get_reference_mut(column)
    }
}

/**
 * Two row views are equal if their values are equal, regardless of which rows or matrices
 * they were created from.
 */
impl<T, U> PartialEq<RowView<'_, U>> for RowView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RowView<'_, U>) -> bool {
        self.values == other.values
    }
}

impl<T, U> PartialEq<RowViewMut<'_, U>> for RowViewMut<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RowViewMut<'_, U>) -> bool {
        *self.values == *other.values
    }
}

impl<T, U> PartialEq<RowViewMut<'_, U>> for RowView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RowViewMut<'_, U>) -> bool {
        *self.values == *other.values
    }
}

impl<T, U> PartialEq<[U]> for RowView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        *self.values == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for RowView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self.values == other[..]
    }
}

impl<T, U> PartialEq<[U]> for RowViewMut<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        *self.values == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for RowViewMut<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self.values == other[..]
    }
}

/**
 * A row view is equal to a matrix if the matrix is a 1xN row vector with equal values.
 */
impl<T: PartialEq> PartialEq<Matrix<T>> for RowView<'_, T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        other.size() == self.size() && other.as_row_major_slice() == self.values
    }
}

impl<T: PartialEq> PartialEq<Matrix<T>> for RowViewMut<'_, T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        other.size() == self.size() && other.as_row_major_slice() == &*self.values
    }
}

impl<T: fmt::Display> fmt::Display for RowView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        format_values(self.values, f)?;
        write!(f, " ]")
    }
}

impl<T: fmt::Display> fmt::Display for RowViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        format_values(&*self.values, f)?;
        write!(f, " ]")
    }
}

impl<'a, T> IntoIterator for RowView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for RowViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

/**
 * A row view is a 1xN source of matrix data, so a row of a matrix can itself be given to
 * anything taking a MatrixRef.
 */
impl<T> MatrixRef<T> for RowView<'_, T> {
    fn view_rows(&self) -> Row {
        1
    }

    fn view_columns(&self) -> Column {
        self.values.len()
    }

    fn row_major_data(&self) -> &[T] {
        self.values
    }
}

impl<T> MatrixRef<T> for RowViewMut<'_, T> {
    fn view_rows(&self) -> Row {
        1
    }

    fn view_columns(&self) -> Column {
        self.values.len()
    }

    fn row_major_data(&self) -> &[T] {
        &*self.values
    }
}

impl<T> MatrixMut<T> for RowViewMut<'_, T> {
    fn row_major_data_mut(&mut self) -> &mut [T] {
        &mut *self.values
    }
}

/**
 * A range over the rows of a matrix.
 *
 * The RowRange holds a source of matrix data, which may be a reference to a matrix, a reference
 * counted pointer to one, or an owned matrix. Cursors and iterators created from the range
 * borrow this source, and every [RowView] they produce borrows its values from it.
 *
 * The valid cursor positions are 0 up to and including [`rows`](RowRange::rows), making
 * `begin()..end()` a half open range over every row.
 *
 * See the [module level documentation](self) for examples.
 */
#[derive(Debug)]
pub struct RowRange<T, S> {
    source: S,
    _type: PhantomData<T>,
}

/**
 * Cloning a RowRange clones its source, which for a reference or reference counted pointer
 * copies only the handle. The element type does not need to be Clone.
 */
impl<T, S> Clone for RowRange<T, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        RowRange {
            source: self.source.clone(),
            _type: PhantomData,
        }
    }
}

impl<T, S> Copy for RowRange<T, S> where S: Copy {}

/**
 * Creates a RowRange over the rows of some source of matrix data.
 *
 * This is the same as [`RowRange::from`](RowRange::from).
 */
pub fn row_range<T, S>(source: S) -> RowRange<T, S>
where
    S: MatrixRef<T>,
{
    RowRange::from(source)
}

impl<T, S> RowRange<T, S>
where
    S: MatrixRef<T>,
{
    /**
     * Creates a RowRange over the rows of a source whose element type is already known.
     *
     * ```
     * use std::rc::Rc;
     * use row_range::matrices::Matrix;
     * use row_range::matrices::rows::RowRange;
     * let matrix = Rc::new(Matrix::from(vec![
     *     vec![ 1.0, 2.0 ],
     *     vec![ 3.0, 4.0 ]]));
     * // cloning the Rc shares the matrix rather than copying it
     * let range = RowRange::from(Rc::clone(&matrix));
     * assert_eq!(2, range.rows());
     * assert_eq!(2, Rc::strong_count(&matrix));
     * ```
     */
    pub fn from(source: S) -> RowRange<T, S> {
        RowRange {
            source,
            _type: PhantomData,
        }
    }

    /**
     * Gets the number of rows in the source, which is the position of the end cursor.
     */
    pub fn rows(&self) -> Row {
        self.source.view_rows()
    }

    /**
     * Gets the number of columns in the source, which is the number of columns in every
     * row view.
     */
    pub fn columns(&self) -> Column {
        self.source.view_columns()
    }

    /**
     * The number of row views this range will produce, which is the number of rows.
     */
    pub fn len(&self) -> usize {
        self.rows()
    }

    /**
     * Returns true if the source has no rows, in which case `begin() == end()`.
     */
    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /**
     * Returns a cursor positioned at the first row.
     */
    pub fn begin(&self) -> RowCursor<T, &S> {
        RowCursor::new(&self.source, 0)
    }

    /**
     * Returns a cursor positioned one past the last row. This cursor can be compared with
     * others to check if they have reached the end of the range, but must not be dereferenced.
     */
    pub fn end(&self) -> RowCursor<T, &S> {
        RowCursor::new(&self.source, self.rows())
    }

    /**
     * Returns a read only cursor positioned at the first row. This is the same as
     * [`begin`](RowRange::begin).
     */
    pub fn cbegin(&self) -> RowCursor<T, &S> {
        self.begin()
    }

    /**
     * Returns a read only cursor positioned one past the last row. This is the same as
     * [`end`](RowRange::end).
     */
    pub fn cend(&self) -> RowCursor<T, &S> {
        self.end()
    }

    /**
     * Returns an iterator over views of each row in order.
     */
    pub fn iter(&self) -> RowIterator<'_, T> {
        RowIterator::from(&self.source)
    }

    /**
     * Consumes the RowRange, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the RowRange's source.
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }
}

impl<T, S> RowRange<T, S>
where
    S: MatrixMut<T>,
{
    /**
     * Returns a cursor positioned at the first row, which can write to the row it is
     * positioned at.
     *
     * While this cursor exists the range is mutably borrowed, so the end of the range is found
     * with [`is_end`](RowCursor::is_end) rather than by comparing with `end()`.
     *
     * ```
     * use row_range::matrices::Matrix;
     * use row_range::matrices::rows::row_range;
     * let mut matrix = Matrix::from(vec![
     *     vec![ 1, 2 ],
     *     vec![ 3, 4 ]]);
     * let mut range = row_range(&mut matrix);
     * let mut cursor = range.begin_mut();
     * while !cursor.is_end() {
     *     cursor.get_mut().map_mut(|x| x * 10);
     *     cursor.advance();
     * }
     * assert_eq!(matrix, Matrix::from(vec![
     *     vec![ 10, 20 ],
     *     vec![ 30, 40 ]]));
     * ```
     */
    pub fn begin_mut(&mut self) -> RowCursor<T, &mut S> {
        RowCursor::new(&mut self.source, 0)
    }

    /**
     * Returns an iterator over mutable views of each row in order.
     */
    pub fn iter_mut(&mut self) -> RowIteratorMut<'_, T> {
        RowIteratorMut::from(&mut self.source)
    }

    /**
     * Gives a mutable reference to the RowRange's source.
     */
    pub fn source_ref_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<'a, T> RowRange<T, &'a Matrix<T>>
where
    T: DataType,
{
    /**
     * Creates a RowRange over the rows of an untyped matrix, checking that the matrix actually
     * stores elements of type T.
     *
     * ```
     * use row_range::matrices::Matrix;
     * use row_range::matrices::element_types::{ElementType, UntypedMatrix};
     * use row_range::matrices::errors::ElementTypeMismatch;
     * use row_range::matrices::rows::RowRange;
     * let untyped = UntypedMatrix::from(Matrix::row(vec![ 1.0_f64, 2.0 ]));
     * assert!(RowRange::<f64, _>::try_from_untyped(&untyped).is_ok());
     * assert_eq!(
     *     RowRange::<f32, _>::try_from_untyped(&untyped).map(|_| ()),
     *     Err(ElementTypeMismatch { expected: ElementType::F32, actual: ElementType::F64 })
     * );
     * ```
     */
    pub fn try_from_untyped(source: &'a UntypedMatrix) -> Result<Self, ElementTypeMismatch> {
        match source.typed::<T>() {
            Ok(matrix) => {
                log::trace!(
                    "Viewing {}x{} untyped matrix as rows of {}",
                    matrix.rows(),
                    matrix.columns(),
                    T::ELEMENT_TYPE
                );
                Ok(RowRange::from(matrix))
            }
            Err(error) => {
                log::debug!("Rejected row range over untyped matrix: {}", error);
                Err(error)
            }
        }
    }

    /**
     * Creates a RowRange over the rows of an untyped matrix.
     *
     * # Panics
     *
     * If the untyped matrix does not store elements of type T. Viewing the data as the wrong
     * type is never allowed to continue.
     */
    #[track_caller]
    pub fn from_untyped(source: &'a UntypedMatrix) -> Self {
        match RowRange::try_from_untyped(source) {
            Ok(range) => range,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T> RowRange<T, &'a mut Matrix<T>>
where
    T: DataType,
{
    /**
     * Creates a RowRange over the rows of an untyped matrix that can write to each row,
     * checking that the matrix actually stores elements of type T.
     */
    pub fn try_from_untyped_mut(
        source: &'a mut UntypedMatrix,
    ) -> Result<Self, ElementTypeMismatch> {
        match source.typed_mut::<T>() {
            Ok(matrix) => {
                log::trace!(
                    "Viewing {}x{} untyped matrix as mutable rows of {}",
                    matrix.rows(),
                    matrix.columns(),
                    T::ELEMENT_TYPE
                );
                Ok(RowRange::from(matrix))
            }
            Err(error) => {
                log::debug!("Rejected mutable row range over untyped matrix: {}", error);
                Err(error)
            }
        }
    }

    /**
     * Creates a RowRange over the rows of an untyped matrix that can write to each row.
     *
     * # Panics
     *
     * If the untyped matrix does not store elements of type T.
     */
    #[track_caller]
    pub fn from_untyped_mut(source: &'a mut UntypedMatrix) -> Self {
        match RowRange::try_from_untyped_mut(source) {
            Ok(range) => range,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a RowRange<T, S>
where
    S: MatrixRef<T>,
{
    type Item = RowView<'a, T>;
    type IntoIter = RowIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S> IntoIterator for &'a mut RowRange<T, S>
where
    S: MatrixMut<T>,
{
    type Item = RowViewMut<'a, T>;
    type IntoIter = RowIteratorMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/**
 * A RowRange over a borrowed matrix can be consumed into an iterator that borrows the matrix
 * for as long as the range did.
 */
impl<'a, T> IntoIterator for RowRange<T, &'a Matrix<T>> {
    type Item = RowView<'a, T>;
    type IntoIter = RowIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RowIterator::from(self.source)
    }
}

impl<'a, T> IntoIterator for RowRange<T, &'a mut Matrix<T>> {
    type Item = RowViewMut<'a, T>;
    type IntoIter = RowIteratorMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RowIteratorMut::from(self.source)
    }
}

#[test]
fn test_row_view_aliases_source() {
    let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let first = RowView::from_source(&matrix, 1);
    let second = RowView::from_source(&matrix, 1);
    assert!(first.aliases(&second));
    assert_eq!(first, second);
    assert_eq!(first.as_slice().as_ptr(), matrix.get_reference(1, 0) as *const i32);
    assert_eq!(3, first.columns());
    assert_eq!(1, first.row());
    assert_eq!(5, first.get(1));
    assert_eq!(None, first.try_get_reference(3));
}

#[test]
fn test_row_view_mut_writes_source() {
    let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    {
        let mut row = RowViewMut::from_source(&mut matrix, 2);
        row[0] = 50;
        row.set(1, 60);
        assert_eq!(row, [50, 60]);
        assert_eq!(row.as_view().to_matrix(), Matrix::row(vec![50, 60]));
    }
    {
        let mut row = RowViewMut::from_source(&mut matrix, 0);
        row.copy_from(&[7, 8]);
    }
    assert_eq!(
        matrix,
        Matrix::from(vec![vec![7, 8], vec![3, 4], vec![50, 60]])
    );
}

#[test]
#[should_panic]
fn test_row_view_mut_copy_from_wrong_length() {
    let mut matrix = Matrix::from(vec![vec![1, 2]]);
    RowViewMut::from_source(&mut matrix, 0).copy_from(&[1, 2, 3]);
}

#[test]
#[should_panic]
fn test_row_view_past_last_row() {
    let matrix = Matrix::column(vec![1, 2]);
    RowView::from_source(&matrix, 2);
}

#[test]
fn test_row_view_is_matrix_source() {
    let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let row = RowView::from_source(&matrix, 0);
    let range = row_range(row);
    assert_eq!(1, range.rows());
    assert_eq!(3, range.columns());
    assert_eq!(range.begin().get(), [1, 2, 3]);
    assert_eq!(row, Matrix::row(vec![1, 2, 3]));
    assert_eq!("[ 1, 2, 3 ]", row.to_string());
}

#[test]
fn test_row_range_owned_source() {
    let range = RowRange::from(Matrix::from(vec![vec![1.5, 2.5], vec![3.5, 4.5]]));
    let sums: Vec<f64> = range.iter().map(|row| row.iter().sum()).collect();
    assert_eq!(vec![4.0, 8.0], sums);
    let matrix = range.source();
    assert_eq!((2, 2), matrix.size());
}

#[test]
fn test_into_iterator_forms() {
    let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    for mut row in matrix.row_range_mut() {
        row.map_mut(|x| x + 1);
    }
    let mut range = RowRange::from(&mut matrix);
    for mut row in &mut range {
        row.fill(row.row() as i32);
    }
    let mut rows = 0;
    for row in &range {
        assert_eq!(row, [row.row() as i32; 2]);
        rows += 1;
    }
    assert_eq!(2, rows);
    let collected: Vec<Vec<i32>> = matrix
        .row_range()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();
    assert_eq!(vec![vec![0, 0], vec![1, 1]], collected);
}

#[test]
fn test_zero_column_rows_do_not_alias() {
    let matrix: Matrix<u8> = Matrix::from_flat_row_major((3, 0), vec![]);
    let first = RowView::from_source(&matrix, 0);
    let last = RowView::from_source(&matrix, 2);
    assert!(!first.aliases(&last));
    assert!(first.aliases(&RowView::from_source(&matrix, 0)));
}

#[test]
fn test_clone_range_of_non_clone_elements() {
    #[derive(Debug, PartialEq)]
    struct Label(u32);

    let matrix = Matrix::row(vec![Label(1), Label(2)]);
    let range = matrix.row_range();
    let copy = range.clone();
    let also_copy = range;
    assert!(std::ptr::eq(*copy.source_ref(), *also_copy.source_ref()));
    assert_eq!(copy.begin().get(), [Label(1), Label(2)]);
    assert_eq!(range.rows(), also_copy.rows());
}
