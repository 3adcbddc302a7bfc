//! Reading translation input and gauging it against the length limit.

mod reader;

pub use reader::{InputReader, LengthLevel, length_level};
