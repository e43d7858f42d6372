//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_degenerate_vector_display() {
    let err = Error::DegenerateVector("zero-length up vector".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate vector"));
    assert!(display.contains("zero-length up vector"));
}

#[test]
fn test_not_orthonormal_display() {
    let err = Error::NotOrthonormal("x and y are not orthogonal".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Frame not orthonormal"));
    assert!(display.contains("x and y are not orthogonal"));
}

#[test]
fn test_not_right_handed_display() {
    let err = Error::NotRightHanded;
    assert_eq!(format!("{}", err), "Frame is not right-handed");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::NotRightHanded;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::DegenerateVector("v".to_string()));
    assert!(debug1.contains("DegenerateVector"));

    let debug2 = format!("{:?}", Error::NotOrthonormal("f".to_string()));
    assert!(debug2.contains("NotOrthonormal"));

    let debug3 = format!("{:?}", Error::NotRightHanded);
    assert!(debug3.contains("NotRightHanded"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::NotOrthonormal("axes".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::NotRightHanded);
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_ok() {
    fn returns_ok() -> Result<i32> {
        Ok(42)
    }

    assert_eq!(returns_ok().unwrap(), 42);
}

#[test]
fn test_result_type_err() {
    fn returns_error() -> Result<i32> {
        Err(Error::NotRightHanded)
    }

    let result = returns_error();
    assert!(result.is_err());

    if let Err(e) = result {
        assert_eq!(format!("{}", e), "Frame is not right-handed");
    }
}

#[test]
fn test_question_mark_propagation() {
    fn inner() -> Result<()> {
        Err(Error::DegenerateVector("inner".to_string()))
    }

    fn outer() -> Result<()> {
        inner()?;
        Ok(())
    }

    assert!(matches!(outer(), Err(Error::DegenerateVector(_))));
}
