pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["counter"]
pub const COUNTER: &[u8] = b"counter";

// Seeds for PDA derivation: ["registrations"]
pub const REGISTRATIONS: &[u8] = b"registrations";

// Seeds for PDA derivation: ["voter", poll_id, user]
pub const VOTER: &[u8] = b"voter";

// Polls use [poll_id] and candidates use [poll_id, cid], both little-endian u64

// Maximum poll description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 280;

// Maximum candidate name length in bytes
pub const MAX_NAME_LEN: usize = 32;
