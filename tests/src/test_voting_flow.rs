use anchor_client::solana_sdk::signer::Signer;
use voting_cli::{utils::TxSender, ElectionHandle, VotingClient, VotingError};
use voting_system::MAX_CANDIDATES;

use crate::utils::{
    assert::assert_voting_err,
    data_types::{candidate_names, ProgramTestContext},
};


fn with_client(f: impl FnOnce(&ProgramTestContext, &VotingClient)) {
    let context = ProgramTestContext::new();
    let program = context.program();
    let client = VotingClient::new(TxSender {
        program: &program,
        micro_lamports: None,
        payer: &context.payer,
    });
    f(&context, &client);
}

fn deploy(client: &VotingClient) -> ElectionHandle {
    client.deploy_election(&candidate_names()).unwrap()
}

fn vote_counts(client: &VotingClient, handle: &ElectionHandle) -> Vec<u64> {
    client
        .candidates(handle)
        .unwrap()
        .iter()
        .map(|candidate| candidate.vote_count)
        .collect()
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_deploy_with_correct_candidates() {
    with_client(|context, client| {
        let handle = deploy(client);
        assert!(handle.deploy_signature.is_some());

        let candidate = client.get_candidate(&handle, 0).unwrap();
        assert_eq!(candidate.name, "Alice");

        let election = client.fetch_election(&handle).unwrap();
        assert_eq!(election.authority, context.payer.pubkey());
        assert_eq!(election.total_votes, 0);
        assert_eq!(
            election
                .candidates
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Alice", "Bob", "Charlie"]
        );
        assert_eq!(vote_counts(client, &handle), vec![0, 0, 0]);
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_allow_voting() {
    with_client(|context, client| {
        let handle = deploy(client);
        let voter = &context.voters[0];

        let receipt = client.cast_vote(&handle, voter, 1).unwrap();
        assert_eq!(receipt.election, handle.address);
        assert_eq!(receipt.voter, voter.pubkey());
        assert_eq!(receipt.candidate_index, 1);

        let candidate = client.get_candidate(&handle, 1).unwrap();
        assert_eq!(candidate.vote_count, 1);
        assert_eq!(vote_counts(client, &handle), vec![0, 1, 0]);

        let voter_record = client.fetch_voter_record(&handle, &voter.pubkey()).unwrap();
        assert!(voter_record.has_voted);
        assert_eq!(voter_record.candidate_index, 1);
        assert_eq!(voter_record.election, handle.address);
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_prevent_double_voting() {
    with_client(|context, client| {
        let handle = deploy(client);
        let voter = &context.voters[0];
        client.cast_vote(&handle, voter, 1).unwrap();

        let res = client.cast_vote(&handle, voter, 1);
        assert!(matches!(res, Err(VotingError::AlreadyVoted(v)) if v == voter.pubkey()));

        // Switching candidate is rejected the same way.
        let res = client.cast_vote(&handle, voter, 0);
        assert_voting_err(res, "has already voted");

        assert_eq!(vote_counts(client, &handle), vec![0, 1, 0]);
        assert_eq!(client.fetch_election(&handle).unwrap().total_votes, 1);
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_return_correct_winner() {
    with_client(|context, client| {
        let handle = deploy(client);
        client.cast_vote(&handle, &context.voters[0], 0).unwrap();
        client.cast_vote(&handle, &context.voters[1], 0).unwrap();

        assert_eq!(client.get_winner(&handle).unwrap(), "Alice");
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_winner_tie_goes_to_lowest_index() {
    with_client(|context, client| {
        let handle = deploy(client);
        assert_eq!(client.get_winner(&handle).unwrap(), "Alice");

        client.cast_vote(&handle, &context.voters[0], 2).unwrap();
        assert_eq!(client.get_winner(&handle).unwrap(), "Charlie");

        client.cast_vote(&handle, &context.voters[1], 1).unwrap();
        assert_eq!(client.get_winner(&handle).unwrap(), "Bob");
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_vote_invalid_index() {
    with_client(|context, client| {
        let handle = deploy(client);
        let voter = &context.voters[0];

        let res = client.cast_vote(&handle, voter, 3);
        assert!(matches!(res, Err(VotingError::Query(_))));
        assert_voting_err(client.cast_vote(&handle, voter, 256), "out of range");
        assert_eq!(vote_counts(client, &handle), vec![0, 0, 0]);

        // The rejected vote left no record behind.
        assert!(client.fetch_voter_record(&handle, &voter.pubkey()).is_err());
        client.cast_vote(&handle, voter, 2).unwrap();
        assert_eq!(vote_counts(client, &handle), vec![0, 0, 1]);
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_get_candidate_invalid_index() {
    with_client(|_context, client| {
        let handle = deploy(client);
        assert_voting_err(client.get_candidate(&handle, 3), "out of range");
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_invalid_deployments() {
    with_client(|_context, client| {
        let res = client.deploy_election(&[]);
        assert!(matches!(res, Err(VotingError::Deployment(_))));

        let too_many: Vec<String> = (0..=MAX_CANDIDATES).map(|i| format!("c{i}")).collect();
        assert_voting_err(client.deploy_election(&too_many), "Too many candidates");
    });
}

#[test]
#[ignore = "requires a local validator with voting-system deployed (anchor test)"]
fn test_query_unknown_election() {
    with_client(|context, client| {
        let handle = ElectionHandle::attach(context.voters[0].pubkey());
        assert!(matches!(
            client.get_winner(&handle),
            Err(VotingError::Query(_))
        ));
    });
}
