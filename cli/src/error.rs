use anchor_client::{solana_sdk::pubkey::Pubkey, ClientError};
use thiserror::Error;
use voting_system::error::ErrorCode;

#[derive(Debug, Error)]
pub enum VotingError {
    #[error("Election deployment failed: {0}")]
    Deployment(String),
    #[error("Election query failed: {0}")]
    Query(String),
    #[error("Voter {0} has already voted")]
    AlreadyVoted(Pubkey),
    #[error("Transaction submission failed: {0}")]
    Submission(#[from] ClientError),
}

impl VotingError {
    /// Maps a failed `vote` transaction onto the error taxonomy using the
    /// program's revert reason.
    pub fn from_vote_failure(err: ClientError, voter: Pubkey) -> Self {
        match find_rejection(&err.to_string()) {
            Some(Rejection::AlreadyVoted) => VotingError::AlreadyVoted(voter),
            Some(Rejection::InvalidCandidateIndex) => VotingError::Query(err.to_string()),
            None => VotingError::Submission(err),
        }
    }
}

/// Program rejections the client distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    AlreadyVoted,
    InvalidCandidateIndex,
}

impl Rejection {
    fn error_code(self) -> ErrorCode {
        match self {
            Rejection::AlreadyVoted => ErrorCode::AlreadyVoted,
            Rejection::InvalidCandidateIndex => ErrorCode::InvalidCandidateIndex,
        }
    }

    /// Matches either the error message from the program logs or the custom
    /// error code carried by the transaction error.
    fn matches(self, message: &str) -> bool {
        let code = self.error_code();
        let custom_error = format!("custom program error: {:#x}", u32::from(code));
        message.contains(&code.to_string()) || message.contains(&custom_error)
    }
}

pub fn find_rejection(message: &str) -> Option<Rejection> {
    [Rejection::AlreadyVoted, Rejection::InvalidCandidateIndex]
        .into_iter()
        .find(|rejection| rejection.matches(message))
}
