// Votee - on-chain polls with one vote per wallet
//
// Instructions:
// - initialize: create the global poll counter and candidate registrations counter
// - create_poll: open a poll with a description and a voting window
// - register_candidate: add a candidate to an existing poll
// - vote: cast a single vote for a registered candidate while the poll is active

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("9vg2dj78dRHgPopYRsACHCEkjM1SudDT9k1JCyDVxc5k");

#[program]
pub mod votee {
    use super::*;

    // Create the counter and registrations PDAs
    // Can only run once per program deployment
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize()
    }

    // Open a new poll; its id is the next counter value
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        description: String,
        start: u64,
        end: u64,
    ) -> Result<()> {
        ctx.accounts.create_poll(description, start, end)
    }

    // Register a candidate; its id is the next registrations value
    pub fn register_candidate(
        ctx: Context<RegisterCandidate>,
        poll_id: u64,
        name: String,
    ) -> Result<()> {
        ctx.accounts.register_candidate(poll_id, name)
    }

    // Cast a vote. The voter PDA is created here, so each wallet votes once per poll
    pub fn vote(ctx: Context<Vote>, poll_id: u64, cid: u64) -> Result<()> {
        ctx.accounts.vote(poll_id, cid)
    }
}
