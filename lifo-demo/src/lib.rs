//! Demonstration of last-in-first-out stacks.

pub mod demo;
mod error;
mod opt;

pub use error::Error;
pub use opt::{Opt, Strategy};

use std::io::Write;

/// Run all demonstrations, separated by blank lines.
pub fn run<W: Write>(opt: &Opt, out: &mut W) -> Result<(), Error> {
    demo::numbers(opt, out)?;
    writeln!(out)?;
    demo::words(opt, out)?;
    writeln!(out)?;
    demo::errors(opt, out)
}
