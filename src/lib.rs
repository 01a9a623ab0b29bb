//! Singly-linked LIFO stack.
//!
//! Provides [`Stack`], a last-in-first-out container built from
//! individually boxed nodes, and [`EmptyStackError`], returned when
//! popping or peeking an empty stack.

mod error;
mod stack;

pub use error::EmptyStackError;
pub use stack::Stack;
