use std::str::FromStr;

use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::{debug, info, warn};

use crate::{
    accounts::{AccountDecode, Candidate, Counter, Poll, Registrations, Voter},
    cluster::{AccountData, Cluster},
    error::ClientError,
    instruction,
    pda::Pdas,
    record::{CandidateRecord, PollRecord},
};

/// Request / await finalization / read back, one call per user action.
pub struct VoteeClient<C> {
    cluster: C,
    pdas: Pdas,
    payer: Option<Keypair>,
}

impl<C: Cluster> VoteeClient<C> {
    pub fn new(cluster: C, program_id: Pubkey, payer: Keypair) -> Self {
        Self {
            cluster,
            pdas: Pdas::new(program_id),
            payer: Some(payer),
        }
    }

    /// A client without a wallet; every write fails with `ReadOnly`.
    pub fn read_only(cluster: C, program_id: Pubkey) -> Self {
        Self {
            cluster,
            pdas: Pdas::new(program_id),
            payer: None,
        }
    }

    pub fn pdas(&self) -> &Pdas {
        &self.pdas
    }

    pub fn cluster(&self) -> &C {
        &self.cluster
    }

    pub fn cluster_mut(&mut self) -> &mut C {
        &mut self.cluster
    }

    pub fn payer(&self) -> Option<Pubkey> {
        self.payer.as_ref().map(|payer| payer.pubkey())
    }

    fn signer(&self) -> Result<Pubkey, ClientError> {
        self.payer().ok_or(ClientError::ReadOnly)
    }

    fn submit(&mut self, instruction: Instruction) -> Result<Signature, ClientError> {
        let payer = self.payer.as_ref().ok_or(ClientError::ReadOnly)?;
        let blockhash = self.cluster.latest_blockhash()?;

        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );

        match self.cluster.send_and_finalize(&transaction) {
            Ok(signature) => {
                info!(%signature, "transaction finalized");
                Ok(signature)
            }
            Err(err) => {
                warn!("transaction failed: {err}");
                Err(err)
            }
        }
    }

    // Accounts the program does not own, or that hold no data (lamports sent
    // to an unused PDA), read as absent
    fn program_data(&self, address: &Pubkey, account: Option<AccountData>) -> Option<Vec<u8>> {
        let account = account?;
        if account.owner != *self.pdas.program_id() || account.data.is_empty() {
            debug!(%address, owner = %account.owner, "ignoring account not owned by the program");
            return None;
        }
        Some(account.data)
    }

    fn fetch<T: AccountDecode>(&self, address: &Pubkey) -> Result<Option<T>, ClientError> {
        let account = self.cluster.get_account(address)?;
        self.program_data(address, account)
            .map(|data| T::decode(&data))
            .transpose()
    }

    fn fetch_many<T: AccountDecode>(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<(Pubkey, T)>, ClientError> {
        let accounts = self.cluster.get_multiple_accounts(addresses)?;

        addresses
            .iter()
            .zip(accounts)
            .filter_map(|(address, account)| {
                self.program_data(address, account).map(|data| (address, data))
            })
            .map(|(address, data)| Ok((*address, T::decode(&data)?)))
            .collect()
    }

    pub fn initialize(&mut self) -> Result<Signature, ClientError> {
        let user = self.signer()?;
        let ix = instruction::initialize(&self.pdas, &user);
        self.submit(ix)
    }

    /// Number of polls created so far.
    pub fn get_counter(&self) -> Result<u64, ClientError> {
        let (address, _) = self.pdas.counter();
        let counter: Counter = self.fetch(&address)?.ok_or(ClientError::NotInitialized)?;
        Ok(counter.count)
    }

    /// Number of candidates registered so far, across all polls.
    pub fn get_registrations(&self) -> Result<u64, ClientError> {
        let (address, _) = self.pdas.registrations();
        let registrations: Registrations =
            self.fetch(&address)?.ok_or(ClientError::NotInitialized)?;
        Ok(registrations.count)
    }

    /// Returns the id assigned to the new poll.
    pub fn create_poll(
        &mut self,
        description: &str,
        start: u64,
        end: u64,
    ) -> Result<(u64, Signature), ClientError> {
        let user = self.signer()?;
        let poll_id = self
            .get_counter()?
            .checked_add(1)
            .ok_or(ClientError::Overflow(Counter::NAME))?;
        debug!(poll_id, "creating poll");

        let ix = instruction::create_poll(&self.pdas, &user, poll_id, description, start, end);
        let signature = self.submit(ix)?;
        Ok((poll_id, signature))
    }

    /// Returns the id assigned to the new candidate.
    pub fn register_candidate(
        &mut self,
        poll_id: u64,
        name: &str,
    ) -> Result<(u64, Signature), ClientError> {
        let user = self.signer()?;
        if name.trim().is_empty() {
            return Err(ClientError::EmptyName);
        }

        let cid = self
            .get_registrations()?
            .checked_add(1)
            .ok_or(ClientError::Overflow(Registrations::NAME))?;
        debug!(poll_id, cid, "registering candidate");

        let ix = instruction::register_candidate(&self.pdas, &user, poll_id, cid, name);
        let signature = self.submit(ix)?;
        Ok((cid, signature))
    }

    pub fn vote(&mut self, poll_id: u64, cid: u64) -> Result<Signature, ClientError> {
        let user = self.signer()?;
        if self.has_user_voted(&user, poll_id)? {
            return Err(ClientError::AlreadyVoted(poll_id));
        }

        let ix = instruction::vote(&self.pdas, &user, poll_id, cid);
        self.submit(ix)
    }

    /// Every poll id from 1 to the counter, skipping addresses with no account.
    pub fn fetch_all_polls(&self) -> Result<Vec<PollRecord>, ClientError> {
        let count = self.get_counter()?;
        let addresses: Vec<Pubkey> = (1..=count).map(|id| self.pdas.poll(id).0).collect();

        let polls = self.fetch_many::<Poll>(&addresses)?;
        debug!(count, found = polls.len(), "fetched polls");

        Ok(polls
            .into_iter()
            .map(|(address, poll)| PollRecord::new(&address, poll))
            .collect())
    }

    pub fn fetch_poll_details(&self, poll_address: &str) -> Result<PollRecord, ClientError> {
        let address = parse_address(poll_address)?;
        let poll: Poll = self.fetch(&address)?.ok_or(ClientError::AccountNotFound {
            account: Poll::NAME,
            address,
        })?;
        Ok(PollRecord::new(&address, poll))
    }

    /// Candidates of one poll, ordered by candidate id.
    ///
    /// Candidate ids are global, so every id up to the registrations count is
    /// probed at [poll_id, cid]; only the ones registered in this poll exist.
    pub fn fetch_all_candidates(
        &self,
        poll_address: &str,
    ) -> Result<Vec<CandidateRecord>, ClientError> {
        let poll = self.fetch_poll_details(poll_address)?;
        let registered = self.get_registrations()?;

        let addresses: Vec<Pubkey> = (1..=registered)
            .map(|cid| self.pdas.candidate(poll.id, cid).0)
            .collect();

        Ok(self
            .fetch_many::<Candidate>(&addresses)?
            .into_iter()
            .filter(|(_, candidate)| candidate.poll_id == poll.id)
            .map(|(address, candidate)| CandidateRecord::new(&address, candidate))
            .collect())
    }

    pub fn has_user_voted(&self, user: &Pubkey, poll_id: u64) -> Result<bool, ClientError> {
        let (address, _) = self.pdas.voter(poll_id, user);
        let voter: Option<Voter> = self.fetch(&address)?;
        Ok(voter.is_some_and(|voter| voter.has_voted))
    }
}

fn parse_address(address: &str) -> Result<Pubkey, ClientError> {
    Pubkey::from_str(address).map_err(|_| ClientError::InvalidAddress(address.to_string()))
}
