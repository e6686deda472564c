use solana_sdk::pubkey::Pubkey;
use tracing::trace;

use crate::constants::*;

/// Address derivation bound to one deployment of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pdas {
    program_id: Pubkey,
}

impl Pdas {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Seeds: ["counter"]
    pub fn counter(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[COUNTER_SEED], &self.program_id)
    }

    /// Seeds: ["registrations"]
    pub fn registrations(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[REGISTRATIONS_SEED], &self.program_id)
    }

    /// Seeds: [poll_id]
    pub fn poll(&self, poll_id: u64) -> (Pubkey, u8) {
        let pda = Pubkey::find_program_address(&[&poll_id.to_le_bytes()], &self.program_id);
        trace!(poll_id, address = %pda.0, "derived poll address");
        pda
    }

    /// Seeds: [poll_id, cid]
    pub fn candidate(&self, poll_id: u64, cid: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[&poll_id.to_le_bytes(), &cid.to_le_bytes()],
            &self.program_id,
        )
    }

    /// Seeds: ["voter", poll_id, user]
    pub fn voter(&self, poll_id: u64, user: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VOTER_SEED, &poll_id.to_le_bytes(), user.as_ref()],
            &self.program_id,
        )
    }
}

impl Default for Pdas {
    fn default() -> Self {
        Self::new(VOTEE_PROGRAM_ID)
    }
}
