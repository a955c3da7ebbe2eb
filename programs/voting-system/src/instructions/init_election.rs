use anchor_lang::prelude::*;

use crate::{Candidate, Election};

#[derive(Accounts)]
pub struct InitElection<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        space = 8 + Election::INIT_SPACE
    )]
    pub election: Box<Account<'info, Election>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitElection>, candidate_names: Vec<String>) -> Result<()> {
    Election::validate_candidate_names(&candidate_names)?;

    let clock = Clock::get()?;
    let election = &mut ctx.accounts.election;

    election.authority = ctx.accounts.payer.key();
    election.slot_created = clock.slot;
    election.candidates = candidate_names.into_iter().map(Candidate::new).collect();
    election.total_votes = 0;

    msg!(
        "Election {} deployed with {} candidates",
        election.key(),
        election.candidates.len()
    );

    Ok(())
}
