use solana_client::client_error::ClientError as RpcError;
use solana_sdk::{
    instruction::InstructionError, pubkey::Pubkey, signature::Signature,
    transaction::TransactionError,
};
use thiserror::Error;

use crate::constants::ERROR_CODE_OFFSET;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("rpc: {0}")]
    Rpc(Box<RpcError>),

    #[error("program rejected the transaction: {0}")]
    Program(VoteeProgramError),

    #[error("transaction failed: {0}")]
    Transaction(TransactionError),

    #[error("transaction {0} was not finalized in time")]
    FinalizeTimeout(Signature),

    #[error("{account} account {address} not found")]
    AccountNotFound {
        account: &'static str,
        address: Pubkey,
    },

    #[error("votee program is not initialized")]
    NotInitialized,

    #[error("failed to decode {account} account: {reason}")]
    Decode {
        account: &'static str,
        reason: String,
    },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("read-only client cannot sign transactions")]
    ReadOnly,

    #[error("wallet has already voted in poll {0}")]
    AlreadyVoted(u64),

    #[error("candidate name must not be empty")]
    EmptyName,

    #[error("{0} count is at its maximum")]
    Overflow(&'static str),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("keypair {path}: {reason}")]
    Keypair { path: String, reason: String },
}

impl ClientError {
    /// Surfaces Votee custom errors by name; everything else stays a transaction error.
    pub fn from_transaction_error(err: TransactionError) -> Self {
        if let TransactionError::InstructionError(_, InstructionError::Custom(code)) = &err {
            if let Some(program_error) = VoteeProgramError::from_code(*code) {
                return ClientError::Program(program_error);
            }
        }
        ClientError::Transaction(err)
    }
}

impl From<RpcError> for ClientError {
    fn from(err: RpcError) -> Self {
        match err.get_transaction_error() {
            Some(tx_err) => ClientError::from_transaction_error(tx_err),
            None => ClientError::Rpc(Box::new(err)),
        }
    }
}

/// Client-side mirror of the program's VoteeError, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteeProgramError {
    #[error("Start date must be before end date")]
    InvalidDates,
    #[error("Poll not found")]
    PollNotFound,
    #[error("Candidate already registered")]
    CandidateAlreadyRegistered,
    #[error("Candidate is not in the poll")]
    CandidateNotRegistered,
    #[error("Voter has already voted")]
    VoterAlreadyVoted,
    #[error("Poll is not currently active")]
    PollNotActive,
    #[error("Poll description is too long")]
    DescriptionTooLong,
    #[error("Candidate name is too long")]
    NameTooLong,
    #[error("Arithmetic overflow")]
    Overflow,
}

impl VoteeProgramError {
    const ALL: [VoteeProgramError; 9] = [
        VoteeProgramError::InvalidDates,
        VoteeProgramError::PollNotFound,
        VoteeProgramError::CandidateAlreadyRegistered,
        VoteeProgramError::CandidateNotRegistered,
        VoteeProgramError::VoterAlreadyVoted,
        VoteeProgramError::PollNotActive,
        VoteeProgramError::DescriptionTooLong,
        VoteeProgramError::NameTooLong,
        VoteeProgramError::Overflow,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        let index = code.checked_sub(ERROR_CODE_OFFSET)?;
        Self::ALL.get(index as usize).copied()
    }

    pub fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }
}
