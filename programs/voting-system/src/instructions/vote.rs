use anchor_lang::prelude::*;

use crate::{error::ErrorCode, Election, VoterRecord};

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub voter: Signer<'info>,
    #[account(mut)]
    pub election: Box<Account<'info, Election>>,
    #[account(
        init_if_needed,
        seeds = [
            b"VoterRecord".as_ref(),
            election.key().as_ref(),
            voter.key().as_ref()
        ],
        bump,
        payer = payer,
        space = 8 + VoterRecord::INIT_SPACE
    )]
    pub voter_record: Box<Account<'info, VoterRecord>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Vote>, candidate_index: u8) -> Result<()> {
    let voter_record = &mut ctx.accounts.voter_record;
    require!(!voter_record.has_voted, ErrorCode::AlreadyVoted);

    let election = &mut ctx.accounts.election;
    election.record_vote(candidate_index)?;

    let clock = Clock::get()?;
    voter_record.election = election.key();
    voter_record.voter = ctx.accounts.voter.key();
    voter_record.has_voted = true;
    voter_record.candidate_index = candidate_index;
    voter_record.slot_voted = clock.slot;
    voter_record.bump = ctx.bumps.voter_record;

    Ok(())
}
