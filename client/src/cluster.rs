// Cluster transport
//
// The service only needs four things from a cluster: a blockhash, single and
// batched account reads (owner and data), and a send that returns once the
// transaction is finalized. RpcCluster provides them over JSON-RPC.

use std::{thread::sleep, time::Duration, time::Instant};

use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction,
};
use tracing::{debug, warn};

use crate::{config::ClientConfig, error::ClientError};

// getMultipleAccounts accepts at most 100 addresses per request
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

const FINALIZE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Owner and data of an on-chain account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

impl From<Account> for AccountData {
    fn from(account: Account) -> Self {
        Self {
            owner: account.owner,
            data: account.data,
        }
    }
}

pub trait Cluster {
    fn latest_blockhash(&self) -> Result<Hash, ClientError>;

    fn get_account(&self, address: &Pubkey) -> Result<Option<AccountData>, ClientError>;

    /// Results are in the same order as `addresses`.
    fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<AccountData>>, ClientError> {
        addresses
            .iter()
            .map(|address| self.get_account(address))
            .collect()
    }

    /// Submits the transaction and blocks until the network finalizes it.
    fn send_and_finalize(&mut self, transaction: &Transaction) -> Result<Signature, ClientError>;
}

pub struct RpcCluster {
    rpc: RpcClient,
    finalize_timeout: Duration,
}

impl RpcCluster {
    pub fn new(rpc_url: impl ToString, read_commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.to_string(), read_commitment),
            finalize_timeout: Duration::from_secs(60),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        debug!(rpc_url = %config.rpc_url, "connecting to cluster");
        Self {
            rpc: RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment.into()),
            finalize_timeout: config.finalize_timeout(),
        }
    }

    pub fn with_finalize_timeout(mut self, timeout: Duration) -> Self {
        self.finalize_timeout = timeout;
        self
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    fn wait_for_finalization(&self, signature: &Signature) -> Result<(), ClientError> {
        let started = Instant::now();
        loop {
            let status = self
                .rpc
                .get_signature_status_with_commitment(signature, CommitmentConfig::finalized())?;

            match status {
                Some(Ok(())) => return Ok(()),
                Some(Err(err)) => return Err(ClientError::from_transaction_error(err)),
                None if started.elapsed() >= self.finalize_timeout => {
                    warn!(%signature, "gave up waiting for finalization");
                    return Err(ClientError::FinalizeTimeout(*signature));
                }
                None => sleep(FINALIZE_POLL_INTERVAL),
            }
        }
    }
}

impl Cluster for RpcCluster {
    fn latest_blockhash(&self) -> Result<Hash, ClientError> {
        Ok(self.rpc.get_latest_blockhash()?)
    }

    fn get_account(&self, address: &Pubkey) -> Result<Option<AccountData>, ClientError> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())?;
        Ok(response.value.map(AccountData::from))
    }

    fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<AccountData>>, ClientError> {
        let mut accounts = Vec::with_capacity(addresses.len());
        for chunk in addresses.chunks(MAX_MULTIPLE_ACCOUNTS) {
            let batch = self.rpc.get_multiple_accounts(chunk)?;
            accounts.extend(batch.into_iter().map(|account| account.map(AccountData::from)));
        }
        Ok(accounts)
    }

    fn send_and_finalize(&mut self, transaction: &Transaction) -> Result<Signature, ClientError> {
        // Preflight simulation surfaces program errors before anything lands
        let signature = self.rpc.send_transaction(transaction)?;
        debug!(%signature, "transaction sent, waiting for finalization");
        self.wait_for_finalization(&signature)?;
        Ok(signature)
    }
}
