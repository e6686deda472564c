// Instruction builders
//
// Data layout is the Anchor discriminator followed by Borsh-encoded args.
// Account order must match the #[derive(Accounts)] structs in programs/votee.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use solana_system_interface::program::ID as system_program;

use crate::{constants::instruction_discriminator, pda::Pdas};

fn push_string(data: &mut Vec<u8>, value: &str) {
    // Borsh serialization: len (4 bytes) + string bytes
    data.extend_from_slice(&(value.len() as u32).to_le_bytes());
    data.extend_from_slice(value.as_bytes());
}

/// initialize(): user, counter, registrations, system_program
pub fn initialize(pdas: &Pdas, user: &Pubkey) -> Instruction {
    let (counter, _) = pdas.counter();
    let (registrations, _) = pdas.registrations();

    Instruction {
        program_id: *pdas.program_id(),
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(counter, false),
            AccountMeta::new(registrations, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: instruction_discriminator("initialize").to_vec(),
    }
}

/// create_poll(description, start, end): user, counter, poll, system_program
///
/// `poll_id` must be the current counter value plus one.
pub fn create_poll(
    pdas: &Pdas,
    user: &Pubkey,
    poll_id: u64,
    description: &str,
    start: u64,
    end: u64,
) -> Instruction {
    let (counter, _) = pdas.counter();
    let (poll, _) = pdas.poll(poll_id);

    let mut data = instruction_discriminator("create_poll").to_vec();
    push_string(&mut data, description);
    data.extend_from_slice(&start.to_le_bytes());
    data.extend_from_slice(&end.to_le_bytes());

    Instruction {
        program_id: *pdas.program_id(),
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(counter, false),
            AccountMeta::new(poll, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// register_candidate(poll_id, name): user, poll, registrations, candidate, system_program
///
/// `cid` must be the current registrations value plus one.
pub fn register_candidate(
    pdas: &Pdas,
    user: &Pubkey,
    poll_id: u64,
    cid: u64,
    name: &str,
) -> Instruction {
    let (poll, _) = pdas.poll(poll_id);
    let (registrations, _) = pdas.registrations();
    let (candidate, _) = pdas.candidate(poll_id, cid);

    let mut data = instruction_discriminator("register_candidate").to_vec();
    data.extend_from_slice(&poll_id.to_le_bytes());
    push_string(&mut data, name);

    Instruction {
        program_id: *pdas.program_id(),
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(poll, false),
            AccountMeta::new(registrations, false),
            AccountMeta::new(candidate, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// vote(poll_id, cid): poll, candidate, voter, user, system_program
pub fn vote(pdas: &Pdas, user: &Pubkey, poll_id: u64, cid: u64) -> Instruction {
    let (poll, _) = pdas.poll(poll_id);
    let (candidate, _) = pdas.candidate(poll_id, cid);
    let (voter, _) = pdas.voter(poll_id, user);

    let mut data = instruction_discriminator("vote").to_vec();
    data.extend_from_slice(&poll_id.to_le_bytes());
    data.extend_from_slice(&cid.to_le_bytes());

    Instruction {
        program_id: *pdas.program_id(),
        accounts: vec![
            AccountMeta::new(poll, false),
            AccountMeta::new(candidate, false),
            AccountMeta::new(voter, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}
