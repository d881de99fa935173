use clap::{Parser, ValueEnum};
use lifo::{AnyStack, ArrayStack, LinkedStack};

/// How a stack stores its elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Contiguous buffer that grows when full
    Array,
    /// One node per element
    Linked,
}

impl Strategy {
    /// Name of the stack type implementing the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "ArrayStack",
            Self::Linked => "LinkedStack",
        }
    }
}

#[derive(Clone, Debug, Parser)]
/// Demonstrate last-in-first-out stacks
pub struct Opt {
    /// Store elements of all demonstrations with the given strategy
    ///
    /// If this option is omitted, numbers are stored in an array stack,
    /// strings in a linked stack, and
    /// errors are provoked on an array stack.
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Initial capacity of array stacks
    ///
    /// The capacity must be positive.
    /// When an array stack is full, its capacity grows by a factor of 1.5.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Strings to push in the string demonstration
    #[arg(value_name = "WORD", default_values = ["Java", "Stack", "Implementation"])]
    pub words: Vec<String>,
}

impl Opt {
    /// Return the strategy to use, falling back to `default` if none was given.
    pub fn strategy_or(&self, default: Strategy) -> Strategy {
        self.strategy.unwrap_or(default)
    }

    /// Construct an empty stack with the given strategy.
    ///
    /// Fails if array stacks were given an invalid capacity.
    pub fn stack<T>(&self, strategy: Strategy) -> Result<AnyStack<T>, lifo::Error> {
        Ok(match strategy {
            Strategy::Array => match self.capacity {
                Some(cap) => ArrayStack::with_capacity(cap)?.into(),
                None => ArrayStack::new().into(),
            },
            Strategy::Linked => LinkedStack::new().into(),
        })
    }
}
