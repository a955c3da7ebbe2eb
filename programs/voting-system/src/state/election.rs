use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const MAX_CANDIDATES: usize = 16;
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;

#[account]
#[derive(InitSpace, Debug)]
pub struct Election {
    /// Account that paid for and deployed the election
    pub authority: Pubkey,
    /// Slot when the election was deployed
    pub slot_created: u64,
    /// Candidates in ballot order. Fixed at deployment.
    #[max_len(MAX_CANDIDATES)]
    pub candidates: Vec<Candidate>,
    /// Number of votes cast across all candidates
    pub total_votes: u64,
}

impl Election {
    /// Checks a candidate list before it is written to a new election.
    pub fn validate_candidate_names(candidate_names: &[String]) -> Result<()> {
        require!(!candidate_names.is_empty(), ErrorCode::NoCandidates);
        require!(
            candidate_names.len() <= MAX_CANDIDATES,
            ErrorCode::TooManyCandidates
        );
        require!(
            candidate_names
                .iter()
                .all(|name| name.len() <= MAX_CANDIDATE_NAME_LEN),
            ErrorCode::CandidateNameTooLong
        );
        Ok(())
    }

    pub fn candidate(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn record_vote(&mut self, candidate_index: u8) -> Result<()> {
        let candidate = self
            .candidates
            .get_mut(candidate_index as usize)
            .ok_or(ErrorCode::InvalidCandidateIndex)?;
        candidate.vote_count = candidate
            .vote_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.total_votes = self
            .total_votes
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Candidate with the highest vote count. Ties go to the lowest index, so an
    /// election without votes is led by its first candidate.
    pub fn winner(&self) -> Option<&Candidate> {
        let mut winner: Option<&Candidate> = None;
        for candidate in &self.candidates {
            match winner {
                Some(leader) if candidate.vote_count <= leader.vote_count => {}
                _ => winner = Some(candidate),
            }
        }
        winner
    }
}

/// Inner struct of Election
#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone, InitSpace, PartialEq, Eq)]
pub struct Candidate {
    /// Display name, set at deployment
    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub name: String,
    /// Number of votes received
    pub vote_count: u64,
}

impl Candidate {
    pub fn new(name: String) -> Self {
        Self {
            name,
            vote_count: 0,
        }
    }
}
