/*!
 * Trait implementations for [MatrixRef](MatrixRef) and [MatrixMut](MatrixMut).
 *
 * These implementations are written here but Rust docs will display them on the
 * traits' pages.
 *
 * An owned or referenced [Matrix](Matrix) is a MatrixRef, and a MatrixMut if not a shared
 * reference, Therefore, you can pass a Matrix to any function which takes a MatrixRef.
 *
 * Boxed MatrixRef and MatrixMut values also implement MatrixRef and MatrixMut respectively,
 * and reference counted MatrixRef values implement MatrixRef, which allows many row ranges
 * to share one matrix without borrowing it.
 */

use std::rc::Rc;
use std::sync::Arc;

use crate::matrices::views::{MatrixMut, MatrixRef};
use crate::matrices::{Column, Matrix, Row};

/**
 * An owned Matrix implements MatrixRef.
 */
impl<T> MatrixRef<T> for Matrix<T> {
    fn view_rows(&self) -> Row {
        Matrix::rows(self)
    }

    fn view_columns(&self) -> Column {
        Matrix::columns(self)
    }

    fn row_major_data(&self) -> &[T] {
        Matrix::as_row_major_slice(self)
    }

    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        Matrix::row_slice(self, row)
    }
}

/**
 * An owned Matrix implements MatrixMut.
 */
impl<T> MatrixMut<T> for Matrix<T> {
    fn row_major_data_mut(&mut self) -> &mut [T] {
        Matrix::as_row_major_slice_mut(self)
    }

    fn try_get_row_mut(&mut self, row: Row) -> Option<&mut [T]> {
        Matrix::row_slice_mut(self, row)
    }
}

/**
 * If some type implements MatrixRef, then a reference to it implements MatrixRef as well
 */
impl<'source, T, S> MatrixRef<T> for &'source S
where
    S: MatrixRef<T> + ?Sized,
{
    fn view_rows(&self) -> Row {
        MatrixRef::view_rows(*self)
    }

    fn view_columns(&self) -> Column {
        MatrixRef::view_columns(*self)
    }

    fn row_major_data(&self) -> &[T] {
        MatrixRef::row_major_data(*self)
    }

    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        MatrixRef::try_get_row(*self, row)
    }
}

/**
 * If some type implements MatrixRef, then an exclusive reference to it implements MatrixRef
 * as well
 */
impl<'source, T, S> MatrixRef<T> for &'source mut S
where
    S: MatrixRef<T> + ?Sized,
{
    fn view_rows(&self) -> Row {
        MatrixRef::view_rows(*self)
    }

    fn view_columns(&self) -> Column {
        MatrixRef::view_columns(*self)
    }

    fn row_major_data(&self) -> &[T] {
        MatrixRef::row_major_data(*self)
    }

    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        MatrixRef::try_get_row(*self, row)
    }
}

/**
 * If some type implements MatrixMut, then an exclusive reference to it implements MatrixMut
 * as well
 */
impl<'source, T, S> MatrixMut<T> for &'source mut S
where
    S: MatrixMut<T> + ?Sized,
{
    fn row_major_data_mut(&mut self) -> &mut [T] {
        MatrixMut::row_major_data_mut(*self)
    }

    fn try_get_row_mut(&mut self, row: Row) -> Option<&mut [T]> {
        MatrixMut::try_get_row_mut(*self, row)
    }
}

/**
 * A box of a MatrixRef also implements MatrixRef.
 */
impl<T, S> MatrixRef<T> for Box<S>
where
    S: MatrixRef<T> + ?Sized,
{
    fn view_rows(&self) -> Row {
        self.as_ref().view_rows()
    }

    fn view_columns(&self) -> Column {
        self.as_ref().view_columns()
    }

    fn row_major_data(&self) -> &[T] {
        self.as_ref().row_major_data()
    }

    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        self.as_ref().try_get_row(row)
    }
}

/**
 * A box of a MatrixMut also implements MatrixMut.
 */
impl<T, S> MatrixMut<T> for Box<S>
where
    S: MatrixMut<T> + ?Sized,
{
    fn row_major_data_mut(&mut self) -> &mut [T] {
        self.as_mut().row_major_data_mut()
    }

    fn try_get_row_mut(&mut self, row: Row) -> Option<&mut [T]> {
        self.as_mut().try_get_row_mut(row)
    }
}

/**
 * A reference counted MatrixRef also implements MatrixRef. Cloning the Rc only clones the
 * pointer, so every clone views the same data.
 */
impl<T, S> MatrixRef<T> for Rc<S>
where
    S: MatrixRef<T> + ?Sized,
{
    fn view_rows(&self) -> Row {
        self.as_ref().view_rows()
    }

    fn view_columns(&self) -> Column {
        self.as_ref().view_columns()
    }

    fn row_major_data(&self) -> &[T] {
        self.as_ref().row_major_data()
    }

    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        self.as_ref().try_get_row(row)
    }
}

/**
 * An atomically reference counted MatrixRef also implements MatrixRef. Cloning the Arc only
 * clones the pointer, so every clone views the same data, which may be shared across threads
 * for read only iteration.
 */
impl<T, S> MatrixRef<T> for Arc<S>
where
    S: MatrixRef<T> + ?Sized,
{
    fn view_rows(&self) -> Row {
        self.as_ref().view_rows()
    }

    fn view_columns(&self) -> Column {
        self.as_ref().view_columns()
    }

    fn row_major_data(&self) -> &[T] {
        self.as_ref().row_major_data()
    }

    fn try_get_row(&self, row: Row) -> Option<&[T]> {
        self.as_ref().try_get_row(row)
    }
}

#[test]
fn test_sources_agree() {
    let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let boxed: Box<dyn MatrixRef<i32>> = Box::new(matrix.clone());
    let shared = Rc::new(matrix.clone());
    assert_eq!((2, 3), boxed.view_size());
    assert_eq!(Some(&[4, 5, 6][..]), boxed.try_get_row(1));
    assert_eq!(Some(&[1, 2, 3][..]), (&shared).try_get_row(0));
    assert_eq!(None, MatrixRef::try_get_row(&matrix, 2));
}

#[test]
fn test_mutable_sources() {
    let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    {
        let source = &mut matrix;
        source.try_get_row_mut(1).unwrap()[0] = 30;
        assert_eq!(&[1, 2, 30, 4], source.row_major_data());
    }
    let mut boxed = Box::new(matrix);
    boxed.row_major_data_mut()[1] = 20;
    assert_eq!(Some(&[1, 20][..]), boxed.try_get_row(0));
    assert_eq!(None, boxed.try_get_row_mut(2));
}
