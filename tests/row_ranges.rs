extern crate rand;
extern crate rand_chacha;
extern crate row_range;

#[cfg(test)]
mod row_ranges {
    use std::rc::Rc;
    use std::sync::Arc;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use row_range::matrices::rows::{RowCursor, RowRange, row_range};
    use row_range::matrices::{Matrix, Row};

    fn random_matrix(random_generator: &mut ChaCha8Rng) -> Matrix<i32> {
        let rows = random_generator.random_range(0..8);
        let columns = random_generator.random_range(0..5);
        let values = (0..rows * columns)
            .map(|_| random_generator.random_range(-100..100))
            .collect();
        Matrix::from_flat_row_major((rows, columns), values)
    }

    #[test]
    fn test_column_vector_scenario() {
        let matrix = Matrix::column(vec![10, 20, 30]);
        let range = row_range(&matrix);
        let mut values = Vec::new();
        let mut cursor = range.cbegin();
        while cursor != range.cend() {
            values.push(cursor.get().get(0));
            cursor.advance();
        }
        assert_eq!(vec![10, 20, 30], values);
        assert_eq!(3, range.end().position());
        assert_eq!(
            vec![10, 20, 30],
            range.iter().map(|row| row[0]).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_every_row_matches_source() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..50 {
            let matrix = random_matrix(&mut random_generator);
            let range = row_range(&matrix);
            let mut cursor = range.begin();
            for i in 0..matrix.rows() {
                let row = cursor.get();
                assert_eq!(matrix.columns(), row.columns());
                assert_eq!(i, row.row());
                for j in 0..matrix.columns() {
                    assert_eq!(matrix.get(i, j), row.get(j));
                }
                cursor.advance();
            }
            assert!(cursor == range.end());
        }
    }

    #[test]
    fn test_begin_equals_end_only_when_empty() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..50 {
            let matrix = random_matrix(&mut random_generator);
            let range = row_range(&matrix);
            assert_eq!(matrix.rows() == 0, range.begin() == range.end());
            assert_eq!(matrix.rows() == 0, range.is_empty());
        }
        let empty: Matrix<i32> = Matrix::from(vec![]);
        let range = empty.row_range();
        assert!(range.begin() == range.end());
        assert_eq!(0, range.iter().count());
    }

    #[test]
    fn test_advancing_rows_times_reaches_end() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]]);
        let range = matrix.row_range();
        let mut cursor = range.begin();
        for _ in 0..range.rows() {
            assert!(cursor < range.end());
            cursor.advance();
        }
        assert!(cursor == range.end());
        assert!(cursor.is_end());
        assert_eq!(range.len(), cursor.position());
    }

    #[test]
    fn test_post_advance_returns_previous_position() {
        let matrix = Matrix::column(vec![1, 2, 3]);
        let range = matrix.row_range();
        let mut cursor = range.begin();
        let previous = cursor.post_advance();
        assert!(previous == range.begin());
        assert_eq!(1, cursor.position());
        assert_eq!(previous.get(), [1]);
        assert_eq!(cursor.get(), [2]);
    }

    #[test]
    fn test_repeated_dereference_aliases_storage() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let range = matrix.row_range();
        let cursor = range.begin();
        let first = cursor.get();
        let second = cursor.get();
        assert_eq!(first, second);
        assert!(first.aliases(&second));
        assert!(std::ptr::eq(
            first.as_slice().as_ptr(),
            matrix.get_reference(0, 0)
        ));
    }

    #[test]
    fn test_mutable_cursor_writes_are_visible() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        {
            let mut range = row_range(&mut matrix);
            let mut cursor = range.begin_mut();
            cursor.get_mut().set(0, 10);
            // a second dereference at the same position sees the first one's write
            assert_eq!(10, cursor.get_mut().get(0));
            assert_eq!(cursor.get(), [10, 2]);
        }
        assert_eq!(10, matrix.get(0, 0));
    }

    #[test]
    fn test_writing_each_row_has_no_cross_row_corruption() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let mut matrix = random_matrix(&mut random_generator);
            let columns = matrix.columns();
            let mut range = matrix.row_range_mut();
            let mut cursor = range.begin_mut();
            while !cursor.is_end() {
                let value = cursor.position() as i32 * 1000;
                cursor.get_mut().fill(value);
                cursor.advance();
            }
            for (i, row) in range.iter().enumerate() {
                assert_eq!(row, vec![i as i32 * 1000; columns][..]);
            }
        }
    }

    #[test]
    fn test_iter_mut_writes_each_row() {
        let mut matrix = Matrix::empty(0_u8, (5, 3));
        for mut row in matrix.row_range_mut().iter_mut() {
            let value = row.row() as u8;
            row.copy_from(&[value, value + 1, value + 2]);
        }
        for i in 0..5 {
            let expected = i as u8;
            assert_eq!(
                matrix.row_slice(i),
                Some(&[expected, expected + 1, expected + 2][..])
            );
        }
    }

    #[test]
    fn test_reverse_iteration() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let rows: Vec<Row> = matrix
            .row_range()
            .iter()
            .rev()
            .map(|row| row.row())
            .collect();
        assert_eq!(vec![2, 1, 0], rows);
        assert_eq!(3, matrix.row_range().iter().len());
    }

    #[test]
    fn test_shared_handles_do_not_copy() {
        let matrix = Rc::new(Matrix::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
        let range = RowRange::from(Rc::clone(&matrix));
        let copy = range.clone();
        assert_eq!(3, Rc::strong_count(&matrix));
        let first = range.begin().get().as_slice().as_ptr();
        let also_first = copy.begin().get().as_slice().as_ptr();
        assert_eq!(first, also_first);
        assert_eq!(first, matrix.as_row_major_slice().as_ptr());
    }

    #[test]
    fn test_clone_shared_range_of_non_clone_elements() {
        #[derive(Debug, PartialEq)]
        struct Name(&'static str);

        let matrix = Rc::new(Matrix::column(vec![Name("a"), Name("b")]));
        let range = RowRange::from(Rc::clone(&matrix));
        let copy = range.clone();
        assert_eq!(3, Rc::strong_count(&matrix));
        let mut cursor = copy.begin();
        cursor.advance();
        assert_eq!(cursor.get(), [Name("b")]);
        assert_eq!(range.iter().count(), copy.iter().count());
    }

    #[test]
    fn test_read_only_iteration_across_threads() {
        let matrix = Arc::new(Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]));
        let handles: Vec<_> = (0..3)
            .map(|_| {
                let range = RowRange::from(Arc::clone(&matrix));
                std::thread::spawn(move || {
                    range
                        .iter()
                        .map(|row| row.iter().sum::<i32>())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(vec![3, 7, 11], handle.join().unwrap());
        }
    }

    #[test]
    fn test_cursor_over_boxed_source() {
        let boxed = Box::new(Matrix::row(vec![1, 2, 3]));
        let mut range = RowRange::from(boxed);
        range.begin_mut().get_mut()[2] = 30;
        assert_eq!(range.begin().get(), [1, 2, 30]);
        let cursor = RowCursor::<i32, _>::new(range.source_ref(), 1);
        assert!(cursor.is_end());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_cursor_beyond_end() {
        let matrix = Matrix::column(vec![1, 2]);
        RowCursor::new(&matrix, 3);
    }

    #[test]
    #[should_panic]
    fn test_dereference_end() {
        let matrix = Matrix::column(vec![1, 2]);
        let range = matrix.row_range();
        range.end().get();
    }
}
