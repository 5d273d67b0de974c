extern crate row_range;

#[cfg(test)]
mod tests {
    use row_range::matrices::Matrix;

    #[test]
    fn check_dimensionality() {
        let row_vector = Matrix::row(vec![1, 2, 3]);
        let column_vector = Matrix::column(vec![1, 2, 3]);
        println!("{:?} {:?}", row_vector, column_vector);
        assert_eq!((1, 3), row_vector.size());
        assert_eq!((3, 1), column_vector.size());
    }

    #[test]
    fn check_dimensionality_matrix() {
        let column_vector = Matrix::from(vec![vec![1], vec![2], vec![3]]);
        assert_eq!(column_vector, Matrix::column(vec![1, 2, 3]));
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!((3, 2), matrix.size());
        assert_eq!(matrix.as_row_major_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn check_equality_needs_same_size() {
        let row_vector = Matrix::row(vec![1, 2, 3]);
        let column_vector = Matrix::column(vec![1, 2, 3]);
        assert_ne!(row_vector, column_vector);
        assert_eq!(row_vector.clone(), row_vector);
    }

    #[test]
    fn check_get_set() {
        let mut matrix = Matrix::empty(0.0, (2, 2));
        matrix.set(0, 1, 2.5);
        *matrix.get_reference_mut(1, 0) = -1.0;
        assert_eq!(2.5, matrix.get(0, 1));
        assert_eq!(Some(&-1.0), matrix.try_get_reference(1, 0));
        assert_eq!(None, matrix.try_get_reference(2, 0));
        assert_eq!(vec![0.0, 2.5, -1.0, 0.0], matrix.into_vec());
    }

    #[test]
    #[should_panic]
    fn check_get_out_of_range() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        println!("{:?}", matrix.get(0, 2));
    }
}
