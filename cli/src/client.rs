use anchor_client::solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use log::info;
use voting_system::{Candidate, Election, VoterRecord};

use crate::{
    error::VotingError,
    utils::{send_init_election, send_vote, TxSender},
};

/// Reference to one deployed election.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElectionHandle {
    /// Address of the election account
    pub address: Pubkey,
    /// Deployment transaction, if this handle was produced by a deployment
    pub deploy_signature: Option<Signature>,
}

impl ElectionHandle {
    /// Handle to an election that was deployed earlier.
    pub fn attach(address: Pubkey) -> Self {
        Self {
            address,
            deploy_signature: None,
        }
    }
}

/// Confirmation of an accepted vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub candidate_index: u8,
    pub signature: Signature,
}

/// Typed access to elections run by the voting program. Holds no state beyond
/// the transaction sender; every call goes to the cluster.
pub struct VotingClient<'a> {
    tx_sender: TxSender<'a>,
}

impl<'a> VotingClient<'a> {
    pub fn new(tx_sender: TxSender<'a>) -> Self {
        Self { tx_sender }
    }

    pub fn deploy_election(
        &self,
        candidate_names: &[String],
    ) -> Result<ElectionHandle, VotingError> {
        if candidate_names.is_empty() {
            return Err(VotingError::Deployment(
                "at least one candidate is required".to_string(),
            ));
        }

        let election = Keypair::new();
        let signature =
            send_init_election(&self.tx_sender, &election, candidate_names.to_vec())
                .map_err(|e| VotingError::Deployment(e.to_string()))?;
        info!("Election deployed to {} ({})", election.pubkey(), signature);

        Ok(ElectionHandle {
            address: election.pubkey(),
            deploy_signature: Some(signature),
        })
    }

    pub fn fetch_election(&self, handle: &ElectionHandle) -> Result<Election, VotingError> {
        self.tx_sender
            .program
            .account::<Election>(handle.address)
            .map_err(|e| {
                VotingError::Query(format!("failed to fetch election {}: {}", handle.address, e))
            })
    }

    pub fn fetch_voter_record(
        &self,
        handle: &ElectionHandle,
        voter: &Pubkey,
    ) -> Result<VoterRecord, VotingError> {
        let voter_record_pda = VoterRecord::pda(&handle.address, voter).0;
        self.tx_sender
            .program
            .account::<VoterRecord>(voter_record_pda)
            .map_err(|e| {
                VotingError::Query(format!(
                    "failed to fetch voter record {}: {}",
                    voter_record_pda, e
                ))
            })
    }

    pub fn candidates(&self, handle: &ElectionHandle) -> Result<Vec<Candidate>, VotingError> {
        Ok(self.fetch_election(handle)?.candidates)
    }

    pub fn get_candidate(
        &self,
        handle: &ElectionHandle,
        index: usize,
    ) -> Result<Candidate, VotingError> {
        let election = self.fetch_election(handle)?;
        election.candidate(index).cloned().ok_or_else(|| {
            VotingError::Query(format!(
                "candidate index {} out of range ({} candidates)",
                index,
                election.candidates.len()
            ))
        })
    }

    pub fn cast_vote(
        &self,
        handle: &ElectionHandle,
        voter: &Keypair,
        index: usize,
    ) -> Result<VoteReceipt, VotingError> {
        let candidate_index = u8::try_from(index)
            .map_err(|_| VotingError::Query(format!("candidate index {} out of range", index)))?;

        let signature = send_vote(&self.tx_sender, handle.address, voter, candidate_index)
            .map_err(|e| VotingError::from_vote_failure(e, voter.pubkey()))?;
        info!(
            "Voter {} voted for candidate {} ({})",
            voter.pubkey(),
            candidate_index,
            signature
        );

        Ok(VoteReceipt {
            election: handle.address,
            voter: voter.pubkey(),
            candidate_index,
            signature,
        })
    }

    pub fn get_winner(&self, handle: &ElectionHandle) -> Result<String, VotingError> {
        let election = self.fetch_election(handle)?;
        election
            .winner()
            .map(|candidate| candidate.name.clone())
            .ok_or_else(|| {
                VotingError::Query(format!("election {} has no candidates", handle.address))
            })
    }
}
