//! Stacks whose storage strategy is chosen at run time.

use crate::{ArrayStack, Error, LinkedStack, Stack};
use core::fmt::{self, Display};

/// Either an array stack or a linked stack.
///
/// ~~~
/// use lifo::{AnyStack, ArrayStack, LinkedStack, Stack};
/// let linked = true;
/// let mut stack: AnyStack<u8> = if linked {
///     LinkedStack::new().into()
/// } else {
///     ArrayStack::new().into()
/// };
/// stack.push(1);
/// assert_eq!(stack.len(), 1);
/// ~~~
#[derive(Debug)]
pub enum AnyStack<T> {
    Array(ArrayStack<T>),
    Linked(LinkedStack<T>),
}

impl<T> Stack<T> for AnyStack<T> {
    fn push(&mut self, x: T) {
        match self {
            Self::Array(s) => s.push(x),
            Self::Linked(s) => s.push(x),
        }
    }

    fn pop(&mut self) -> Result<T, Error> {
        match self {
            Self::Array(s) => s.pop(),
            Self::Linked(s) => s.pop(),
        }
    }

    fn peek(&self) -> Result<&T, Error> {
        match self {
            Self::Array(s) => s.peek(),
            Self::Linked(s) => s.peek(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Array(s) => s.len(),
            Self::Linked(s) => s.len(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Array(s) => s.is_empty(),
            Self::Linked(s) => s.is_empty(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Array(s) => s.clear(),
            Self::Linked(s) => s.clear(),
        }
    }
}

impl<T: Display> Display for AnyStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Array(s) => Display::fmt(s, f),
            Self::Linked(s) => Display::fmt(s, f),
        }
    }
}

impl<T> From<ArrayStack<T>> for AnyStack<T> {
    fn from(s: ArrayStack<T>) -> Self {
        Self::Array(s)
    }
}

impl<T> From<LinkedStack<T>> for AnyStack<T> {
    fn from(s: LinkedStack<T>) -> Self {
        Self::Linked(s)
    }
}
