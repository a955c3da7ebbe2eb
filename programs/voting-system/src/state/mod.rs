pub mod election;
pub mod voter_record;

pub use election::*;
pub use voter_record::*;
