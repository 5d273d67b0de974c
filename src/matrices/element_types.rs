/*!
 * Runtime element type tags and matrices whose element type is only known at runtime.
 *
 * An [UntypedMatrix] can hold a [Matrix] of any of the element types listed in [ElementType].
 * Code that receives one must state which element type it expects before it can read any
 * values, and asking for the wrong type is reported as an
 * [ElementTypeMismatch] rather than silently reinterpreting the data.
 *
 * ```
 * use row_range::matrices::Matrix;
 * use row_range::matrices::element_types::{ElementType, UntypedMatrix};
 * let untyped = UntypedMatrix::from(Matrix::row(vec![ 1.5_f64, 2.5 ]));
 * assert_eq!(ElementType::F64, untyped.element_type());
 * assert!(untyped.typed::<f64>().is_ok());
 * assert!(untyped.typed::<f32>().is_err());
 * ```
 */

use std::fmt;

use crate::matrices::errors::ElementTypeMismatch;
use crate::matrices::rows::RowRange;
use crate::matrices::{Column, Matrix, Row};

/**
 * The element types an [UntypedMatrix] can store.
 */
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ElementType {
    U8,
    I8,
    U16,
    I16,
    I32,
    F32,
    F64,
}

impl ElementType {
    /**
     * The size in bytes of a single element of this type.
     */
    pub fn size_of(&self) -> usize {
        match self {
            ElementType::U8 | ElementType::I8 => 1,
            ElementType::U16 | ElementType::I16 => 2,
            ElementType::I32 | ElementType::F32 => 4,
            ElementType::F64 => 8,
        }
    }

    /**
     * The name of the Rust primitive corresponding to this element type.
     */
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::U8 => "u8",
            ElementType::I8 => "i8",
            ElementType::U16 => "u16",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum UntypedData {
    U8(Matrix<u8>),
    I8(Matrix<i8>),
    U16(Matrix<u16>),
    I16(Matrix<i16>),
    I32(Matrix<i32>),
    F32(Matrix<f32>),
    F64(Matrix<f64>),
}

/**
 * A matrix of one of the [ElementType]s, with the element type checked at runtime.
 *
 * Any `Matrix<T>` where T implements [DataType] can be converted into an UntypedMatrix
 * with `From`/`Into`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct UntypedMatrix {
    data: UntypedData,
}

mod private {
    pub trait Sealed {}
}

/**
 * A type which can be stored in an [UntypedMatrix], associating the Rust type with its runtime
 * [ElementType] tag.
 *
 * This trait is sealed, it is implemented for exactly the primitives listed in [ElementType].
 */
pub trait DataType: private::Sealed + Sized {
    /**
     * The runtime tag for this type.
     */
    const ELEMENT_TYPE: ElementType;

    /**
     * Erases the element type of a matrix.
     */
    fn into_untyped(matrix: Matrix<Self>) -> UntypedMatrix;

    /**
     * Returns the typed matrix if the untyped matrix stores this type.
     */
    fn from_untyped(untyped: &UntypedMatrix) -> Option<&Matrix<Self>>;

    /**
     * Returns the typed matrix if the untyped matrix stores this type.
     */
    fn from_untyped_mut(untyped: &mut UntypedMatrix) -> Option<&mut Matrix<Self>>;

    /**
     * Returns the typed matrix if the untyped matrix stores this type, or gives the untyped
     * matrix back otherwise.
     */
    fn from_untyped_owned(untyped: UntypedMatrix) -> Result<Matrix<Self>, UntypedMatrix>;
}

macro_rules! data_type {
    ($T:ty, $variant:ident) => {
        impl private::Sealed for $T {}

        impl DataType for $T {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            fn into_untyped(matrix: Matrix<$T>) -> UntypedMatrix {
                UntypedMatrix {
                    data: UntypedData::$variant(matrix),
                }
            }

            fn from_untyped(untyped: &UntypedMatrix) -> Option<&Matrix<$T>> {
                match &untyped.data {
                    UntypedData::$variant(matrix) => Some(matrix),
                    _ => None,
                }
            }

            fn from_untyped_mut(untyped: &mut UntypedMatrix) -> Option<&mut Matrix<$T>> {
                match &mut untyped.data {
                    UntypedData::$variant(matrix) => Some(matrix),
                    _ => None,
                }
            }

            fn from_untyped_owned(untyped: UntypedMatrix) -> Result<Matrix<$T>, UntypedMatrix> {
                match untyped.data {
                    UntypedData::$variant(matrix) => Ok(matrix),
                    data => Err(UntypedMatrix { data }),
                }
            }
        }
    };
}

data_type!(u8, U8);
data_type!(i8, I8);
data_type!(u16, U16);
data_type!(i16, I16);
data_type!(i32, I32);
data_type!(f32, F32);
data_type!(f64, F64);

impl<T: DataType> From<Matrix<T>> for UntypedMatrix {
    fn from(matrix: Matrix<T>) -> UntypedMatrix {
        T::into_untyped(matrix)
    }
}

impl UntypedMatrix {
    /**
     * The element type of the matrix stored.
     */
    pub fn element_type(&self) -> ElementType {
        match self.data {
            UntypedData::U8(_) => ElementType::U8,
            UntypedData::I8(_) => ElementType::I8,
            UntypedData::U16(_) => ElementType::U16,
            UntypedData::I16(_) => ElementType::I16,
            UntypedData::I32(_) => ElementType::I32,
            UntypedData::F32(_) => ElementType::F32,
            UntypedData::F64(_) => ElementType::F64,
        }
    }

    /**
     * Returns the dimensionality of the matrix stored in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        match &self.data {
            UntypedData::U8(matrix) => matrix.size(),
            UntypedData::I8(matrix) => matrix.size(),
            UntypedData::U16(matrix) => matrix.size(),
            UntypedData::I16(matrix) => matrix.size(),
            UntypedData::I32(matrix) => matrix.size(),
            UntypedData::F32(matrix) => matrix.size(),
            UntypedData::F64(matrix) => matrix.size(),
        }
    }

    /**
     * Gets the number of rows in the matrix stored.
     */
    pub fn rows(&self) -> Row {
        self.size().0
    }

    /**
     * Gets the number of columns in the matrix stored.
     */
    pub fn columns(&self) -> Column {
        self.size().1
    }

    /**
     * Returns the matrix stored if its element type is T.
     */
    pub fn typed<T: DataType>(&self) -> Result<&Matrix<T>, ElementTypeMismatch> {
        let actual = self.element_type();
        T::from_untyped(self).ok_or(ElementTypeMismatch {
            expected: T::ELEMENT_TYPE,
            actual,
        })
    }

    /**
     * Returns the matrix stored if its element type is T.
     */
    pub fn typed_mut<T: DataType>(&mut self) -> Result<&mut Matrix<T>, ElementTypeMismatch> {
        let actual = self.element_type();
        T::from_untyped_mut(self).ok_or(ElementTypeMismatch {
            expected: T::ELEMENT_TYPE,
            actual,
        })
    }

    /**
     * Consumes the untyped matrix, returning the matrix stored if its element type is T.
     * Otherwise the untyped matrix is given back along with the mismatch.
     */
    pub fn into_typed<T: DataType>(
        self,
    ) -> Result<Matrix<T>, (UntypedMatrix, ElementTypeMismatch)> {
        let actual = self.element_type();
        T::from_untyped_owned(self).map_err(|untyped| {
            (
                untyped,
                ElementTypeMismatch {
                    expected: T::ELEMENT_TYPE,
                    actual,
                },
            )
        })
    }

    /**
     * Returns a [RowRange] over the rows of the matrix stored, viewing its elements as T.
     *
     * ```
     * use row_range::matrices::Matrix;
     * use row_range::matrices::element_types::UntypedMatrix;
     * let untyped = UntypedMatrix::from(Matrix::column(vec![ 10_i32, 20, 30 ]));
     * let values: Vec<i32> = untyped.row_range::<i32>().iter().map(|row| row[0]).collect();
     * assert_eq!(values, vec![ 10, 20, 30 ]);
     * ```
     *
     * # Panics
     *
     * If the element type of the matrix stored is not T. See
     * [RowRange::try_from_untyped] for a non panicking version.
     */
    #[track_caller]
    pub fn row_range<T: DataType>(&self) -> RowRange<T, &Matrix<T>> {
        RowRange::from_untyped(self)
    }

    /**
     * Returns a [RowRange] over the rows of the matrix stored that can write to each row,
     * viewing its elements as T.
     *
     * # Panics
     *
     * If the element type of the matrix stored is not T. See
     * [RowRange::try_from_untyped_mut] for a non panicking version.
     */
    #[track_caller]
    pub fn row_range_mut<T: DataType>(&mut self) -> RowRange<T, &mut Matrix<T>> {
        RowRange::from_untyped_mut(self)
    }
}

#[test]
fn test_element_type_tags() {
    assert_eq!(ElementType::U8, u8::ELEMENT_TYPE);
    assert_eq!(ElementType::I16, i16::ELEMENT_TYPE);
    assert_eq!(ElementType::F64, f64::ELEMENT_TYPE);
    assert_eq!(std::mem::size_of::<u16>(), u16::ELEMENT_TYPE.size_of());
    assert_eq!(std::mem::size_of::<f32>(), f32::ELEMENT_TYPE.size_of());
    assert_eq!("i8", ElementType::I8.to_string());
}

#[test]
fn test_typed_access() {
    let mut untyped = UntypedMatrix::from(Matrix::from(vec![vec![1_u16, 2], vec![3, 4]]));
    assert_eq!((2, 2), untyped.size());
    assert_eq!(ElementType::U16, untyped.element_type());
    assert_eq!(
        Err(ElementTypeMismatch {
            expected: ElementType::I16,
            actual: ElementType::U16
        }),
        untyped.typed::<i16>().map(|_| ())
    );
    untyped.typed_mut::<u16>().unwrap().set(0, 0, 9);
    assert_eq!(9, untyped.typed::<u16>().unwrap().get(0, 0));
}

#[test]
fn test_into_typed_gives_back_matrix() {
    let untyped = UntypedMatrix::from(Matrix::row(vec![1.0_f32, 2.0]));
    let (untyped, error) = untyped.into_typed::<f64>().unwrap_err();
    assert_eq!(ElementType::F64, error.expected);
    assert_eq!(ElementType::F32, error.actual);
    let matrix = untyped.into_typed::<f32>().unwrap();
    assert_eq!(Matrix::row(vec![1.0, 2.0]), matrix);
}
