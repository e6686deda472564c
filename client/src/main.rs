use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use tracing::error;
use tracing_subscriber::EnvFilter;

use votee_client::{ClientConfig, ClientError, RpcCluster, VoteeClient};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, short, help = "Config file path (values can also come from VOTEE_* env)")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the poll counter and candidate registrations accounts
    Init,
    /// Show how many polls and candidates exist
    Counter,
    /// Open a new poll (times are unix seconds)
    CreatePoll {
        #[arg(long)]
        description: String,
        #[arg(long)]
        start: u64,
        #[arg(long)]
        end: u64,
    },
    /// Register a candidate in a poll
    Register {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        name: String,
    },
    /// Vote for a candidate
    Vote {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        cid: u64,
    },
    /// List every poll
    Polls,
    /// Show one poll by address
    Poll { address: String },
    /// List the candidates of a poll by poll address
    Candidates { poll_address: String },
    /// Check whether a wallet (default: the configured keypair) voted in a poll
    HasVoted {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Submitted {
    signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), ClientError> {
    let config = ClientConfig::load(cli.config.as_deref())?;
    let program_id = config.program_id()?;
    let cluster = RpcCluster::from_config(&config);

    let mut client = match config.load_keypair()? {
        Some(payer) => VoteeClient::new(cluster, program_id, payer),
        None => VoteeClient::read_only(cluster, program_id),
    };

    match cli.command {
        Command::Init => {
            let signature = client.initialize()?;
            print_json(&Submitted {
                signature: signature.to_string(),
                id: None,
            })
        }
        Command::Counter => print_json(&serde_json::json!({
            "polls": client.get_counter()?,
            "candidates": client.get_registrations()?,
        })),
        Command::CreatePoll {
            description,
            start,
            end,
        } => {
            let (id, signature) = client.create_poll(&description, start, end)?;
            print_json(&Submitted {
                signature: signature.to_string(),
                id: Some(id),
            })
        }
        Command::Register { poll_id, name } => {
            let (id, signature) = client.register_candidate(poll_id, &name)?;
            print_json(&Submitted {
                signature: signature.to_string(),
                id: Some(id),
            })
        }
        Command::Vote { poll_id, cid } => {
            let signature = client.vote(poll_id, cid)?;
            print_json(&Submitted {
                signature: signature.to_string(),
                id: None,
            })
        }
        Command::Polls => print_json(&client.fetch_all_polls()?),
        Command::Poll { address } => print_json(&client.fetch_poll_details(&address)?),
        Command::Candidates { poll_address } => {
            print_json(&client.fetch_all_candidates(&poll_address)?)
        }
        Command::HasVoted { poll_id, user } => {
            let user = match user {
                Some(user) => Pubkey::from_str(&user)
                    .map_err(|_| ClientError::InvalidAddress(user.clone()))?,
                None => client.payer().ok_or(ClientError::ReadOnly)?,
            };
            print_json(&client.has_user_voted(&user, poll_id)?)
        }
    }
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}
