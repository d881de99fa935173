use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Stack(lifo::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<lifo::Error> for Error {
    fn from(err: lifo::Error) -> Self {
        Self::Stack(err)
    }
}
