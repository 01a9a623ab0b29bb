//! Singly-linked stack data structure.

use std::fmt::{self, Debug, Formatter};

use log::*;

use crate::error::EmptyStackError;

/// Single-linked LIFO stack.
///
/// Each element lives in its own heap node, and each node exclusively
/// owns its successor, so the chain below `top` is finite and acyclic
/// by construction.
#[repr(transparent)]
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Stack<T> {
        Stack { top: None }
    }

    /// Create a stack holding a single value.
    pub fn of(value: T) -> Stack<T> {
        Stack {
            top: Some(Box::new(Node { value, next: None })),
        }
    }

    pub fn is_empty(&self) -> bool {
        return self.top.is_none();
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }))
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        match self.top.take() {
            Some(node) => {
                self.top = node.next;
                Ok(node.value)
            }
            None => {
                debug!("pop called on empty stack");
                Err(EmptyStackError)
            }
        }
    }

    /// Borrow the top value without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        match &self.top {
            Some(node) => Ok(&node.value),
            None => {
                debug!("peek called on empty stack");
                Err(EmptyStackError)
            }
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cur = self.top.as_deref();
        while let Some(node) = cur {
            list.entry(&node.value);
            cur = node.next.as_deref();
        }
        list.finish()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // unlink iteratively; the derived recursive drop overflows the
        // call stack on a deep chain
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

#[test]
fn test_empty() {
    let stack: Stack<i32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), Err(EmptyStackError));
}

#[test]
fn test_empty_pop() {
    let mut stack: Stack<i32> = Stack::new();
    assert_eq!(stack.pop(), Err(EmptyStackError));
}

#[test]
fn test_of_single() {
    let stack = Stack::of(5);
    assert!(!stack.is_empty());
    assert_eq!(stack.peek(), Ok(&5));
}

#[test]
fn test_push_one() {
    let mut stack = Stack::new();
    stack.push(3);
    assert!(!stack.is_empty());
    assert_eq!(stack.peek(), Ok(&3));
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.peek(), Err(EmptyStackError));
    assert_eq!(stack.pop(), Err(EmptyStackError));
}

#[test]
fn test_push_updates_top() {
    let mut stack = Stack::of("foo");
    assert_eq!(stack.peek(), Ok(&"foo"));
    stack.push("bar");
    assert_eq!(stack.peek(), Ok(&"bar"));
    assert!(!stack.is_empty());
}

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    for n in 1..=5 {
        stack.push(n);
    }
    for n in (1..=5).rev() {
        assert_eq!(stack.pop(), Ok(n));
    }
    assert!(stack.is_empty());
}

#[test]
fn test_push_pop_cancel() {
    let mut stack = Stack::of(1);
    stack.push(2);
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.peek(), Ok(&1));
    assert!(!stack.is_empty());
}

#[test]
fn test_push_relinks_top_node() {
    // the old top node must survive a push/pop cycle in place, not be
    // copied into a fresh allocation
    let mut stack = Stack::of(7);
    let before = stack.peek().unwrap() as *const i32;
    stack.push(8);
    assert_eq!(stack.pop(), Ok(8));
    let after = stack.peek().unwrap() as *const i32;
    assert_eq!(before, after);
}

#[test]
fn test_pop_returns_seed() {
    let mut stack = Stack::of(42);
    assert_eq!(stack.pop(), Ok(42));
    assert!(stack.is_empty());
}

#[test]
fn test_pop_then_peek() {
    let mut stack = Stack::of("foo");
    stack.push("bar");
    assert_eq!(stack.pop(), Ok("bar"));
    assert_eq!(stack.peek(), Ok(&"foo"));
}

#[test]
fn test_debug_lists_top_first() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(format!("{:?}", stack), "[3, 2, 1]");
}

#[test]
fn test_deep_drop() {
    let mut stack = Stack::new();
    for n in 0..100_000 {
        stack.push(n);
    }
    drop(stack);
}
