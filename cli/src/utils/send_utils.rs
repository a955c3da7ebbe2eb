use anchor_client::{
    anchor_lang::system_program,
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signature},
        signer::Signer,
    },
    ClientError, Program,
};
use solana_sdk::instruction::Instruction;
use solana_sdk::{compute_budget::ComputeBudgetInstruction, transaction::Transaction};
use voting_system::{accounts, instruction, VoterRecord};

pub struct TxSender<'a> {
    pub program: &'a Program<&'a Keypair>,
    pub micro_lamports: Option<u64>,
    pub payer: &'a Keypair,
}

impl<'a> TxSender<'a> {
    pub fn send(&self, ixs: Vec<Instruction>) -> Result<Signature, ClientError> {
        send_with_anchor(ixs, self.micro_lamports, &[self.payer], self.program)
    }

    pub fn send_with_signers(
        &self,
        ixs: Vec<Instruction>,
        signers: &[&Keypair],
    ) -> Result<Signature, ClientError> {
        send_with_anchor(ixs, self.micro_lamports, signers, self.program)
    }
}

/// Sends an Anchor request manually, ensuring proper setup and signing.
fn send_with_anchor(
    mut ixs: Vec<Instruction>,
    micro_lamports: Option<u64>,
    signers: &[&Keypair],
    program: &Program<&Keypair>,
) -> Result<Signature, ClientError> {
    let payer = program.payer();
    let blockhash = program.rpc().get_latest_blockhash()?;

    if let Some(lamports) = micro_lamports {
        ixs.insert(
            0,
            ComputeBudgetInstruction::set_compute_unit_price(lamports),
        );
    }

    let tx = Transaction::new_signed_with_payer(&ixs, Some(&payer), signers, blockhash);
    program
        .rpc()
        .send_and_confirm_transaction(&tx)
        .map_err(ClientError::SolanaClientError)
}

pub fn send_init_election(
    tx_sender: &TxSender,
    election: &Keypair,
    candidate_names: Vec<String>,
) -> Result<Signature, ClientError> {
    let ixs = tx_sender
        .program
        .request()
        .accounts(accounts::InitElection {
            payer: tx_sender.payer.pubkey(),
            election: election.pubkey(),
            system_program: system_program::ID,
        })
        .args(instruction::InitElection { candidate_names })
        .instructions()?;

    tx_sender.send_with_signers(ixs, &[tx_sender.payer, election])
}

pub fn send_vote(
    tx_sender: &TxSender,
    election: Pubkey,
    voter: &Keypair,
    candidate_index: u8,
) -> Result<Signature, ClientError> {
    let ixs = tx_sender
        .program
        .request()
        .accounts(accounts::Vote {
            payer: tx_sender.payer.pubkey(),
            voter: voter.pubkey(),
            election,
            voter_record: VoterRecord::pda(&election, &voter.pubkey()).0,
            system_program: system_program::ID,
        })
        .args(instruction::Vote { candidate_index })
        .instructions()?;

    // The payer may vote with its own key.
    if voter.pubkey() == tx_sender.payer.pubkey() {
        tx_sender.send(ixs)
    } else {
        tx_sender.send_with_signers(ixs, &[tx_sender.payer, voter])
    }
}
