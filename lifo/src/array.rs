//! A stack that stores its elements in a contiguous buffer.

use crate::{Error, Stack};
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::iter::FromIterator;

/// Capacity of an array stack constructed with [`ArrayStack::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor by which the capacity of a full array stack is multiplied.
pub const GROWTH_FACTOR: f64 = 1.5;

/// A stack that stores its elements in a contiguous buffer.
///
/// The bottom of the stack is at the start of the buffer and
/// the top of the stack is at the end of the buffer.
/// When an element is pushed onto a full stack,
/// a new buffer with a capacity larger by [`GROWTH_FACTOR`] is allocated and
/// all elements are moved to it.
/// The capacity never shrinks, not even when the stack is cleared.
///
/// ~~~
/// use lifo::{ArrayStack, Error, Stack};
/// let mut stack = ArrayStack::with_capacity(2)?;
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.capacity(), 2);
/// stack.push('c');
/// assert_eq!(stack.capacity(), 3);
/// assert_eq!(stack.peek(), Ok(&'c'));
/// # Ok::<_, Error>(())
/// ~~~
#[derive(Clone)]
pub struct ArrayStack<T> {
    buf: Vec<T>,
    /// number of elements the buffer can hold before it has to grow
    cap: usize,
}

impl<T> ArrayStack<T> {
    /// Create an empty stack with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty stack that can hold `cap` elements before growing.
    ///
    /// Fails if `cap` is zero.
    ///
    /// ~~~
    /// use lifo::{ArrayStack, Error};
    /// assert_eq!(ArrayStack::<u8>::with_capacity(0).err(), Some(Error::InvalidArgument));
    /// ~~~
    pub fn with_capacity(cap: usize) -> Result<Self, Error> {
        if cap == 0 {
            return Err(Error::InvalidArgument);
        }
        Ok(Self {
            buf: Vec::with_capacity(cap),
            cap,
        })
    }

    /// Return the number of elements the stack can hold before growing.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Move all elements to a new, larger buffer.
    fn grow(&mut self) {
        // for a capacity of 1, multiplying by the growth factor alone would not grow
        let cap = ((self.cap as f64 * GROWTH_FACTOR) as usize).max(self.cap + 1);
        trace!("Grow array stack from {} to {}", self.cap, cap);
        let mut buf = Vec::with_capacity(cap);
        buf.extend(self.buf.drain(..));
        self.buf = buf;
        self.cap = cap;
    }

    /// Iterate through the elements of the stack starting from the top.
    fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, x: T) {
        if self.buf.len() == self.cap {
            self.grow()
        }
        self.buf.push(x)
    }

    fn pop(&mut self) -> Result<T, Error> {
        self.buf.pop().ok_or(Error::Empty)
    }

    fn peek(&self) -> Result<&T, Error> {
        self.buf.last().ok_or(Error::Empty)
    }

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn clear(&mut self) {
        debug!("Clear array stack with {} elements", self.buf.len());
        self.buf.clear()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
            cap: DEFAULT_CAPACITY,
        }
    }
}

impl<T: Display> Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        crate::fmt::top_down(f, self.iter())
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| self.push(x))
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
