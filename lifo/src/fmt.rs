use core::fmt::{self, Display};

/// Write elements given from top to bottom as `[x1, x2, ...]`.
///
/// An empty iterator is written as `[]`.
pub fn top_down<'a, T: Display + 'a>(
    f: &mut fmt::Formatter,
    iter: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, x) in iter.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", x)?;
    }
    write!(f, "]")
}
