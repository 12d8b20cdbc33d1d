mod index;
mod sink;
pub(crate) mod source;

pub use index::*;
pub use sink::*;
pub use source::*;
