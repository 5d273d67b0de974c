use std::error::Error;
use std::fmt;

use crate::matrices::element_types::ElementType;

/**
 * An error indicating failure to treat an untyped matrix as a matrix of some element type,
 * because the element type the matrix was created with is a different one.
 */
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ElementTypeMismatch {
    /// The element type that was requested.
    pub expected: ElementType,
    /// The element type the matrix actually stores.
    pub actual: ElementType,
}

impl Error for ElementTypeMismatch {}

impl fmt::Display for ElementTypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix of {} elements cannot be viewed as a matrix of {} elements",
            self.actual, self.expected
        )
    }
}

#[test]
fn test_display() {
    let error = ElementTypeMismatch {
        expected: ElementType::F32,
        actual: ElementType::F64,
    };
    assert_eq!(
        "Matrix of f64 elements cannot be viewed as a matrix of f32 elements",
        error.to_string()
    );
}
