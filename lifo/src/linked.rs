//! A stack that stores every element in its own node.

use crate::{Error, Stack};
use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::iter::FromIterator;

struct Node<T> {
    x: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A stack that stores every element in its own node.
///
/// The stack owns its top node, and every node owns the node below it.
/// Pushing allocates exactly one node and popping releases exactly one node;
/// there is no notion of capacity.
///
/// ~~~
/// use lifo::{Error, LinkedStack, Stack};
/// let mut stack: LinkedStack<_> = ["Java", "Stack", "Implementation"].into_iter().collect();
/// assert_eq!(stack.to_string(), "[Implementation, Stack, Java]");
/// stack.clear();
/// assert!(stack.is_empty());
/// assert_eq!(stack.peek(), Err(Error::Empty));
/// ~~~
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Default::default()
    }

    /// Iterate through the elements of the stack starting from the top.
    fn iter(&self) -> impl Iterator<Item = &T> {
        let mut cur = self.top.as_deref();
        core::iter::from_fn(move || {
            let node = cur?;
            cur = node.next.as_deref();
            Some(&node.x)
        })
    }

    /// Release all nodes one after the other.
    ///
    /// Dropping the top node directly would drop its successors recursively,
    /// which can exhaust the call stack for long chains.
    fn unlink(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, x: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { x, next }));
        self.len += 1;
    }

    fn pop(&mut self) -> Result<T, Error> {
        let node = self.top.take().ok_or(Error::Empty)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.x)
    }

    fn peek(&self) -> Result<&T, Error> {
        self.top.as_ref().map(|node| &node.x).ok_or(Error::Empty)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    fn clear(&mut self) {
        debug!("Clear linked stack with {} elements", self.len);
        self.unlink()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self { top: None, len: 0 }
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.unlink()
    }
}

impl<T: Display> Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        crate::fmt::top_down(f, self.iter())
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| self.push(x))
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    /// Count the nodes reachable from the top.
    fn chain_len<T>(stack: &LinkedStack<T>) -> usize {
        stack.iter().count()
    }

    #[test]
    fn lifo() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::Empty));

        stack.push(2);
        stack.push(3);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert!(stack.is_empty());
    }

    #[test]
    fn chain_matches_len() {
        let mut stack: LinkedStack<_> = (0..7).collect();
        assert_eq!(chain_len(&stack), 7);
        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.len(), 5);
        assert_eq!(chain_len(&stack), 5);
        stack.clear();
        assert_eq!(chain_len(&stack), 0);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn empty() {
        let mut stack = LinkedStack::<i32>::new();
        assert_eq!(stack.pop(), Err(Error::Empty));
        assert_eq!(stack.peek(), Err(Error::Empty));
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.to_string(), "[]");
    }

    #[test]
    fn display() {
        let mut stack = LinkedStack::new();
        stack.extend(["Java", "Stack", "Implementation"]);
        assert_eq!(stack.to_string(), "[Implementation, Stack, Java]");
        assert_eq!(
            alloc::format!("{:?}", stack),
            r#"["Implementation", "Stack", "Java"]"#
        );
    }

    #[test]
    fn long_chain() {
        let mut stack: LinkedStack<_> = (0..1_000_000).collect();
        stack.clear();
        assert!(stack.is_empty());
        let stack: LinkedStack<_> = (0..1_000_000).collect();
        drop(stack);
    }
}
