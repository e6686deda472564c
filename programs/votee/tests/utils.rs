// Test utilities for the votee program

#![allow(dead_code)]

use litesvm::LiteSVM;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use votee_client::{AccountData, ClientError, Cluster, Pdas, VoteeClient};

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(votee::ID.to_bytes());

// Clock starts here so poll windows are realistic unix times
pub const GENESIS_TIME: i64 = 1_700_000_000;

// One day in seconds
pub const DAY: u64 = 24 * 60 * 60;

pub const LAMPORTS_PER_SOL: u64 = solana_sdk::native_token::LAMPORTS_PER_SOL;

// ======================== HELPERS ========================

// Setup LiteSVM with the votee program
pub fn setup_svm() -> LiteSVM {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/votee.so");
    let program_bytes = std::fs::read(path)
        .unwrap_or_else(|err| panic!("{path}: {err}, run `anchor build` first"));

    let mut svm = LiteSVM::new();
    svm.add_program(PROGRAM_ID, &program_bytes);
    set_time(&mut svm, GENESIS_TIME);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn now(svm: &LiteSVM) -> u64 {
    let clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp as u64
}

pub fn set_time(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar(&clock);
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

// ======================== CLUSTER ========================

// LiteSVM executes synchronously, so a successful send is already final
pub struct SvmCluster {
    pub svm: LiteSVM,
}

impl Cluster for SvmCluster {
    fn latest_blockhash(&self) -> Result<Hash, ClientError> {
        Ok(self.svm.latest_blockhash())
    }

    fn get_account(&self, address: &Pubkey) -> Result<Option<AccountData>, ClientError> {
        Ok(self
            .svm
            .get_account(address)
            .filter(|account| account.lamports > 0)
            .map(|account| AccountData {
                owner: account.owner,
                data: account.data,
            }))
    }

    fn send_and_finalize(&mut self, transaction: &Transaction) -> Result<Signature, ClientError> {
        let signature = transaction.signatures[0];
        let result = self.svm.send_transaction(transaction.clone());
        // A retried identical transaction must not be rejected as already processed
        self.svm.expire_blockhash();
        result.map_err(|failed| ClientError::from_transaction_error(failed.err))?;
        Ok(signature)
    }
}

pub type SvmClient = VoteeClient<SvmCluster>;

// Fresh SVM with a funded admin wallet driving a VoteeClient
pub fn setup_client() -> SvmClient {
    let mut svm = setup_svm();
    let admin = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);
    VoteeClient::new(SvmCluster { svm }, PROGRAM_ID, admin)
}

// Client with the program initialized
pub fn setup_initialized_client() -> SvmClient {
    let mut client = setup_client();
    client.initialize().expect("Initialize should succeed");
    client
}

pub fn pdas() -> Pdas {
    Pdas::new(PROGRAM_ID)
}

// Send one instruction signed by `signer`, outside of the client's wallet
pub fn send_as(
    client: &mut SvmClient,
    signer: &Keypair,
    instruction: Instruction,
) -> Result<Signature, ClientError> {
    let cluster = client.cluster_mut();
    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&signer.pubkey()),
        &[signer],
        cluster.latest_blockhash()?,
    );
    cluster.send_and_finalize(&tx)
}

// Fund a new wallet on the client's SVM
pub fn new_wallet(client: &mut SvmClient) -> Keypair {
    create_funded_account(&mut client.cluster_mut().svm, 10 * LAMPORTS_PER_SOL)
}

// Create a poll open from now for one day
pub fn open_poll(client: &mut SvmClient, description: &str) -> u64 {
    let start = now(&client.cluster().svm);
    let (poll_id, _) = client
        .create_poll(description, start, start + DAY)
        .expect("Poll creation should succeed");
    poll_id
}
