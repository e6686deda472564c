use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

// Program ID matching declare_id! in programs/votee
pub const VOTEE_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("9vg2dj78dRHgPopYRsACHCEkjM1SudDT9k1JCyDVxc5k");

// PDA seeds (must match programs/votee/src/constants.rs)
pub const COUNTER_SEED: &[u8] = b"counter";
pub const REGISTRATIONS_SEED: &[u8] = b"registrations";
pub const VOTER_SEED: &[u8] = b"voter";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

pub const MAX_DESCRIPTION_LEN: usize = 280;
pub const MAX_NAME_LEN: usize = 32;

// Anchor error codes start here; VoteeError variants follow in declaration order
pub const ERROR_CODE_OFFSET: u32 = 6000;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

/// Instruction discriminator: first 8 bytes of sha256("global:<method>").
pub fn instruction_discriminator(method: &str) -> [u8; 8] {
    sighash("global", method)
}

/// Account discriminator: first 8 bytes of sha256("account:<Name>").
pub fn account_discriminator(name: &str) -> [u8; 8] {
    sighash("account", name)
}

fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{namespace}:{name}");
    let digest = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminators_are_namespaced() {
        assert_ne!(instruction_discriminator("vote"), account_discriminator("vote"));
        assert_ne!(account_discriminator("Poll"), account_discriminator("Candidate"));
    }

    #[test]
    fn initialize_discriminator_matches_anchor() {
        // sha256("global:initialize")[..8], as emitted in every Anchor IDL
        assert_eq!(
            instruction_discriminator("initialize"),
            [175, 175, 109, 31, 13, 152, 155, 237]
        );
    }
}
