use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
    },
    Client, Cluster, Program,
};
use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use tokio::runtime::Builder;
use voting_cli::{consts::*, utils::*, ElectionHandle, VotingClient};

#[derive(Clone, Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, env, help = "Keypair paying for transactions")]
    pub payer_path: Option<PathBuf>,

    #[arg(short, long, env, default_value = LOCALNET_RPC_URL)]
    pub rpc_url: String,

    #[arg(short, long, env, value_parser = parse_pubkey, help = "Address of a deployed election")]
    pub election: Option<Pubkey>,

    #[arg(long, env)]
    pub micro_lamports: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    fn payer(&self) -> Result<Keypair> {
        let path = self
            .payer_path
            .as_ref()
            .ok_or_else(|| anyhow!("Missing --payer-path argument"))?;
        load_keypair(path)
    }

    fn election_handle(&self) -> Result<ElectionHandle> {
        self.election
            .map(ElectionHandle::attach)
            .ok_or_else(|| anyhow!("Missing --election argument"))
    }
}

#[derive(clap::Subcommand, Clone, Debug)]
pub enum Commands {
    /// Deploys a new election and prints its address
    Deploy {
        #[arg(
            long,
            value_delimiter = ',',
            value_parser = parse_candidate_name,
            default_values = DEFAULT_CANDIDATE_NAMES
        )]
        candidates: Vec<String>,
    },
    /// Votes with the payer and prints the tally before and after
    Interact {
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    Candidate {
        #[arg(long, help = "Index of the candidate")]
        index: usize,
    },
    Vote {
        #[arg(long, help = "Index of the candidate")]
        index: usize,

        #[arg(long, help = "Voter keypair. Defaults to the payer.")]
        voter_path: Option<PathBuf>,
    },
    Winner {},
    Log {
        #[arg(long, value_parser = parse_log_type, default_value = "election", help = "Account type: election | voter-record")]
        ty: LogType,

        #[arg(long, value_parser = parse_pubkey)]
        voter: Option<Pubkey>,
    },
}

fn load_keypair(path: &Path) -> Result<Keypair> {
    read_keypair_file(path).map_err(|e| anyhow!("Failed to read keypair {:?}: {}", path, e))
}

fn load_client_program(payer: &Keypair, rpc_url: String) -> Result<Program<&Keypair>> {
    let client: Client<&Keypair> = Client::new_with_options(
        Cluster::Custom(rpc_url.clone(), rpc_url),
        payer,
        CommitmentConfig::confirmed(),
    );
    Ok(client.program(voting_system::id())?)
}

fn run_with_client<T>(
    cli: &Cli,
    payer: &Keypair,
    f: impl FnOnce(&VotingClient) -> Result<T>,
) -> Result<T> {
    let program = load_client_program(payer, cli.rpc_url.clone())?;
    let client = VotingClient::new(TxSender {
        program: &program,
        micro_lamports: cli.micro_lamports,
        payer,
    });
    f(&client)
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(false)
        .try_init();

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let _enter = runtime.enter();
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy { ref candidates } => {
            info!("Deploying election with candidates {:?}...", candidates);

            let payer = cli.payer()?;
            let handle = run_with_client(&cli, &payer, |client| {
                Ok(client.deploy_election(candidates)?)
            })?;
            println!("VotingSystem deployed to: {}", handle.address);
        }
        Commands::Interact { index } => {
            let payer = cli.payer()?;
            let handle = cli.election_handle()?;
            run_with_client(&cli, &payer, |client| {
                let candidate = client.get_candidate(&handle, index)?;
                println!(
                    "Before Voting - {} has {} votes",
                    candidate.name, candidate.vote_count
                );

                println!("Voting for {}...", candidate.name);
                let receipt = client.cast_vote(&handle, &payer, index)?;
                info!("Transaction sent: {}", receipt.signature);

                let candidate = client.get_candidate(&handle, index)?;
                println!(
                    "After Voting - {} has {} votes",
                    candidate.name, candidate.vote_count
                );
                Ok(())
            })?;
        }
        Commands::Candidate { index } => {
            let temp = Keypair::new();
            let handle = cli.election_handle()?;
            let candidate =
                run_with_client(&cli, &temp, |client| Ok(client.get_candidate(&handle, index)?))?;
            println!("{}: {} has {} votes", index, candidate.name, candidate.vote_count);
        }
        Commands::Vote {
            index,
            ref voter_path,
        } => {
            info!("Vote...");

            let payer = cli.payer()?;
            let voter = match voter_path {
                Some(path) => load_keypair(path)?,
                None => payer.insecure_clone(),
            };
            let handle = cli.election_handle()?;
            let receipt =
                run_with_client(&cli, &payer, |client| Ok(client.cast_vote(&handle, &voter, index)?))?;
            info!("Transaction sent: {}", receipt.signature);
            println!(
                "{} voted for candidate {} in election {}",
                receipt.voter, receipt.candidate_index, receipt.election
            );
        }
        Commands::Winner {} => {
            let temp = Keypair::new();
            let handle = cli.election_handle()?;
            let winner = run_with_client(&cli, &temp, |client| Ok(client.get_winner(&handle)?))?;
            println!("Winner: {}", winner);
        }
        Commands::Log { ref ty, voter } => {
            let temp = Keypair::new();
            let handle = cli.election_handle()?;
            run_with_client(&cli, &temp, |client| {
                match ty {
                    LogType::Election => {
                        let data = client.fetch_election(&handle)?;
                        println!("{:?}", data);
                    }
                    LogType::VoterRecord => {
                        let voter = voter.ok_or_else(|| anyhow!("Missing --voter argument"))?;
                        let data = client.fetch_voter_record(&handle, &voter)?;
                        println!("{:?}", data);
                    }
                }
                Ok(())
            })?;
        }
    }
    Ok(())
}
