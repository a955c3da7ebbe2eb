pub mod init_election;
pub mod vote;

pub use init_election::*;
pub use vote::*;
