/*!
 * Zero copy row ranges over dense matrices.
 *
 * If this is your first time using this crate you should check out the
 * [rows](./matrices/rows/index.html) module for how to walk over the rows of a
 * [Matrix](./matrices/struct.Matrix.html), and the
 * [element_types](./matrices/element_types/index.html) module for matrices whose element type is
 * only known at runtime.
 *
 * # Example
 *
 * ```
 * use row_range::matrices::Matrix;
 * let mut matrix = Matrix::from(vec![
 *     vec![ 1, 2, 3 ],
 *     vec![ 4, 5, 6 ]]);
 * for mut row in matrix.row_range_mut() {
 *     let total: i32 = row.iter().sum();
 *     row.fill(total);
 * }
 * assert_eq!(matrix, Matrix::from(vec![
 *     vec![ 6, 6, 6 ],
 *     vec![ 15, 15, 15 ]]));
 * ```
 */

pub mod matrices;
