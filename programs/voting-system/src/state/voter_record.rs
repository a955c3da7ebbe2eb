use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct VoterRecord {
    /// Election this record belongs to
    pub election: Pubkey,
    /// The voter
    pub voter: Pubkey,
    /// Set once the voter has cast their vote
    pub has_voted: bool,
    /// Index of the candidate voted for
    pub candidate_index: u8,
    /// The slot the voter voted
    pub slot_voted: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl VoterRecord {
    pub fn pda(election: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[b"VoterRecord", election.as_ref(), voter.as_ref()],
            &crate::ID,
        )
    }
}
