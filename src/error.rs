//! Error type for stack operations.

use thiserror::Error;

/// Returned by `pop` and `peek` when the stack holds no elements.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stack is empty")]
pub struct EmptyStackError;

#[test]
fn test_display() {
    assert_eq!(EmptyStackError.to_string(), "stack is empty");
}
