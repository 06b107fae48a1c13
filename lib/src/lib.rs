pub mod block;
pub mod diff;
pub mod error;
pub mod parser;
pub mod source;

pub use block::Block;
pub use diff::{missing_lines, Difference, Missing};
pub use error::Error;
pub use source::Source;
