use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You have already voted")]
    AlreadyVoted,
    #[msg("Invalid candidate index")]
    InvalidCandidateIndex,
    #[msg("At least one candidate is required")]
    NoCandidates,
    #[msg("Too many candidates")]
    TooManyCandidates,
    #[msg("Candidate name too long")]
    CandidateNameTooLong,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
