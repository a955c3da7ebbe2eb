#![allow(ambiguous_glob_reexports)]
#![allow(unexpected_cfgs)] // See: https://solana.stackexchange.com/a/19845

pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("EegM6rnjZrrqfkHYBmDiJtjeHg2xqqN8eYhmzBCEQk83");

#[program]
pub mod voting_system {
    use super::*;

    pub fn init_election(ctx: Context<InitElection>, candidate_names: Vec<String>) -> Result<()> {
        init_election::handler(ctx, candidate_names)
    }

    pub fn vote(ctx: Context<Vote>, candidate_index: u8) -> Result<()> {
        vote::handler(ctx, candidate_index)
    }
}
