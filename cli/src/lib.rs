pub mod client;
pub mod consts;
pub mod error;
pub mod utils;

pub use client::*;
pub use error::*;
