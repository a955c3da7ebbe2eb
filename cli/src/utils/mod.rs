pub mod parsers;
pub mod send_utils;

pub use parsers::*;
pub use send_utils::*;
