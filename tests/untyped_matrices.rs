extern crate row_range;

#[cfg(test)]
mod untyped_matrices {
    use row_range::matrices::Matrix;
    use row_range::matrices::element_types::{ElementType, UntypedMatrix};
    use row_range::matrices::errors::ElementTypeMismatch;
    use row_range::matrices::rows::RowRange;

    #[test]
    fn test_matching_type_views_rows() {
        let untyped = UntypedMatrix::from(Matrix::from(vec![
            vec![1.0_f32, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ]));
        let range = RowRange::<f32, _>::try_from_untyped(&untyped).unwrap();
        assert_eq!((2, 3), (range.rows(), range.columns()));
        let mut cursor = range.begin();
        assert_eq!(cursor.get(), [1.0, 2.0, 3.0]);
        cursor.advance();
        assert_eq!(cursor.get(), [4.0, 5.0, 6.0]);
        cursor.advance();
        assert!(cursor == range.end());
    }

    #[test]
    fn test_mismatched_type_is_rejected() {
        let mut untyped = UntypedMatrix::from(Matrix::row(vec![1.0_f64, 2.0]));
        let expected = ElementTypeMismatch {
            expected: ElementType::F32,
            actual: ElementType::F64,
        };
        assert_eq!(
            Some(expected),
            RowRange::<f32, _>::try_from_untyped(&untyped).err()
        );
        assert_eq!(
            Some(expected),
            RowRange::<f32, _>::try_from_untyped_mut(&mut untyped).err()
        );
        // same size in bytes is still a different type
        assert!(RowRange::<i32, _>::try_from_untyped(&untyped).is_err());
        assert!(untyped.typed::<i8>().is_err());
    }

    #[test]
    #[should_panic(expected = "cannot be viewed as a matrix of f32 elements")]
    fn test_mismatched_type_panics() {
        let untyped = UntypedMatrix::from(Matrix::row(vec![1.0_f64, 2.0]));
        RowRange::<f32, _>::from_untyped(&untyped);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_mutable_type_panics() {
        let mut untyped = UntypedMatrix::from(Matrix::row(vec![1_u8, 2]));
        untyped.row_range_mut::<i8>();
    }

    #[test]
    fn test_writes_through_untyped_matrix() {
        let mut untyped =
            UntypedMatrix::from(Matrix::from(vec![vec![1_i16, 2], vec![3, 4]]));
        {
            let mut range = RowRange::<i16, _>::from_untyped_mut(&mut untyped);
            let mut cursor = range.begin_mut();
            while !cursor.is_end() {
                cursor.get_mut().map_mut(|x| -x);
                cursor.advance();
            }
        }
        let matrix: Matrix<i16> = untyped.into_typed().unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![-1, -2], vec![-3, -4]]));
    }

    #[test]
    fn test_empty_untyped_matrix() {
        let untyped = UntypedMatrix::from(Matrix::<u16>::from(vec![]));
        let range = untyped.row_range::<u16>();
        assert!(range.begin() == range.end());
        assert!(range.is_empty());
    }

    #[test]
    fn test_into_typed_returns_matrix_on_mismatch() {
        let untyped = UntypedMatrix::from(Matrix::column(vec![7_u8, 8]));
        let (untyped, error) = untyped.into_typed::<f64>().unwrap_err();
        assert_eq!(ElementType::F64, error.expected);
        assert_eq!(ElementType::U8, error.actual);
        assert_eq!((2, 1), untyped.size());
        assert!(untyped.into_typed::<u8>().is_ok());
    }
}
