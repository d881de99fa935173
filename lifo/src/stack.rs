//! Operations common to all stacks.

use crate::Error;

/// A last-in-first-out collection.
///
/// The element returned by [`peek`](Stack::peek) and [`pop`](Stack::pop)
/// is always the element most recently pushed and not yet popped.
/// Operations on an empty stack that need an element fail with [`Error::Empty`]
/// and leave the stack unchanged.
pub trait Stack<T> {
    /// Add an element to the top of the stack.
    fn push(&mut self, x: T);

    /// Remove and return the element on top of the stack.
    fn pop(&mut self) -> Result<T, Error>;

    /// Return the element on top of the stack without removing it.
    fn peek(&self) -> Result<&T, Error>;

    /// Return the number of elements on the stack.
    fn len(&self) -> usize;

    /// Return true if the stack contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements from the stack.
    fn clear(&mut self);
}
