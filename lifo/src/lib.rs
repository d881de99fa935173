#![no_std]
#![forbid(unsafe_code)]

//! Last-in-first-out stacks with interchangeable storage.
//!
//! # Usage
//!
//! All stacks implement the [`Stack`] trait, which provides
//! pushing, popping and peeking at the top element.
//! Popping from or peeking into an empty stack yields [`Error::Empty`];
//! all other operations cannot fail.
//!
//! There are two storage strategies:
//! * [`ArrayStack`] stores its elements in a contiguous buffer that
//!   grows by a factor of [`GROWTH_FACTOR`] whenever it is full, and
//! * [`LinkedStack`] stores every element in its own node,
//!   each node owning the node below it.
//!
//! Both strategies behave in exactly the same way,
//! so it is possible to write code generic over [`Stack`].
//! If the strategy is only known at run time, [`AnyStack`] can hold either.
//!
//! ~~~
//! use lifo::{ArrayStack, Error, LinkedStack, Stack};
//!
//! fn fill<S: Stack<u32>>(stack: &mut S) -> Result<u32, Error> {
//!     stack.push(10);
//!     stack.push(20);
//!     stack.push(30);
//!     stack.pop()
//! }
//!
//! let mut array = ArrayStack::new();
//! let mut linked = LinkedStack::new();
//! assert_eq!(fill(&mut array)?, 30);
//! assert_eq!(fill(&mut linked)?, 30);
//! assert_eq!(array.to_string(), "[20, 10]");
//! assert_eq!(linked.to_string(), "[20, 10]");
//! # Ok::<_, Error>(())
//! ~~~

extern crate alloc;
#[macro_use]
extern crate log;

mod any;
mod array;
pub mod error;
mod fmt;
mod linked;
mod stack;

pub use any::AnyStack;
pub use array::{ArrayStack, DEFAULT_CAPACITY, GROWTH_FACTOR};
pub use error::Error;
pub use linked::LinkedStack;
pub use stack::Stack;
