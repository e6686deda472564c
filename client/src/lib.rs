// Native client for the Votee program
//
// - pda: deterministic account addresses
// - instruction: one builder per program instruction
// - accounts / record: raw account decoding and display records
// - cluster: transport (RPC or any other backend implementing Cluster)
// - client: the request / await finalization / read back service

pub mod accounts;
pub mod client;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod record;

pub use accounts::{AccountDecode, Candidate, Counter, Poll, Registrations, Voter};
pub use client::VoteeClient;
pub use cluster::{AccountData, Cluster, RpcCluster};
pub use crate::config::ClientConfig;
pub use constants::VOTEE_PROGRAM_ID;
pub use error::{ClientError, VoteeProgramError};
pub use pda::Pdas;
pub use record::{CandidateRecord, PollRecord, PollStatus};
