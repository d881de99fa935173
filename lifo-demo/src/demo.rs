//! Individual demonstrations.
//!
//! Every demonstration writes a header followed by its output to `out`.
//! Errors that are provoked on purpose are caught and reported;
//! only errors in setting up a stack or in writing are returned.

use crate::{Error, Opt, Strategy};
use lifo::{AnyStack, Stack};
use std::fmt::Display;
use std::io::Write;

/// Print contents, size and top of a non-empty stack.
fn summary<T: Display, W: Write>(stack: &AnyStack<T>, out: &mut W) -> Result<(), Error> {
    writeln!(out, "Stack: {}", stack)?;
    writeln!(out, "Size: {}", stack.len())?;
    writeln!(out, "Top: {}", stack.peek()?)?;
    Ok(())
}

/// Push numbers, then pop them until the stack is empty.
pub fn numbers<W: Write>(opt: &Opt, out: &mut W) -> Result<(), Error> {
    let strategy = opt.strategy_or(Strategy::Array);
    log::info!("Demonstrate {} with numbers", strategy.name());
    writeln!(out, "=== {} demonstration ===", strategy.name())?;

    let mut stack: AnyStack<i32> = opt.stack(strategy)?;
    writeln!(out, "Push elements: 10, 20, 30")?;
    for x in [10, 20, 30] {
        stack.push(x)
    }
    summary(&stack, out)?;

    writeln!(out)?;
    writeln!(out, "Pop elements:")?;
    while !stack.is_empty() {
        writeln!(out, "Popped: {}", stack.pop()?)?;
        writeln!(out, "Current stack: {}", stack)?;
    }
    Ok(())
}

/// Push strings, then clear the stack.
pub fn words<W: Write>(opt: &Opt, out: &mut W) -> Result<(), Error> {
    let strategy = opt.strategy_or(Strategy::Linked);
    log::info!("Demonstrate {} with strings", strategy.name());
    writeln!(out, "=== {} demonstration ===", strategy.name())?;

    let mut stack: AnyStack<&str> = opt.stack(strategy)?;
    writeln!(out, "Push strings: {}", opt.words.join(", "))?;
    for word in &opt.words {
        stack.push(word.as_str())
    }
    summary(&stack, out)?;

    stack.clear();
    writeln!(out)?;
    writeln!(out, "After clear:")?;
    writeln!(out, "Empty: {}", stack.is_empty())?;
    writeln!(out, "Size: {}", stack.len())?;
    Ok(())
}

/// Pop from and peek into an empty stack.
pub fn errors<W: Write>(opt: &Opt, out: &mut W) -> Result<(), Error> {
    let strategy = opt.strategy_or(Strategy::Array);
    log::info!("Demonstrate errors with {}", strategy.name());
    writeln!(out, "=== Error demonstration ===")?;

    let mut stack: AnyStack<i32> = opt.stack(strategy)?;
    if let Err(e) = stack.pop() {
        caught("pop", e, out)?
    }
    if let Err(e) = stack.peek() {
        caught("peek", e, out)?
    }
    Ok(())
}

fn caught<W: Write>(op: &str, e: lifo::Error, out: &mut W) -> Result<(), Error> {
    log::warn!("Caught error in {}: {}", op, e);
    writeln!(out, "Caught error: {}", e)?;
    Ok(())
}
