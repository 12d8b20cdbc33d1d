#![doc = include_str!("../README.md")]

mod error;
mod list;
mod object;
mod traits;
mod view;

pub use error::*;
pub use list::*;
pub use object::*;
pub use traits::*;
pub use view::*;
