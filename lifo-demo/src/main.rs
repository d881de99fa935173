//! Demonstrate last-in-first-out stacks on the console.

use clap::Parser;
use lifo_demo::{Error, Opt};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();
    log::debug!("{:?}", opt);

    let stdout = std::io::stdout();
    lifo_demo::run(&opt, &mut stdout.lock())
}
