use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Register Candidate Instruction
//
// Candidate ids come from the global registrations counter, not a per-poll
// one, so the candidate PDA is [poll_id, registrations.count + 1].

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct RegisterCandidate<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    // Seeds: [poll_id]
    #[account(
        mut,
        seeds = [&poll_id.to_le_bytes()],
        bump,
        constraint = poll.id == poll_id @ VoteeError::PollNotFound,
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        mut,
        seeds = [REGISTRATIONS],
        bump,
    )]
    pub registrations: Account<'info, Registrations>,

    // Seeds: [poll_id, registrations.count + 1]
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Candidate::INIT_SPACE,
        seeds = [&poll_id.to_le_bytes(), &(registrations.count + 1).to_le_bytes()],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterCandidate<'info> {
    pub fn register_candidate(&mut self, poll_id: u64, name: String) -> Result<()> {
        require!(name.len() <= MAX_NAME_LEN, VoteeError::NameTooLong);
        require!(
            !self.candidate.has_registered,
            VoteeError::CandidateAlreadyRegistered
        );

        let cid = self.registrations.next_id().ok_or(VoteeError::Overflow)?;
        self.registrations.count = cid;

        self.poll.candidates = self
            .poll
            .candidates
            .checked_add(1)
            .ok_or(VoteeError::Overflow)?;

        self.candidate.set_inner(Candidate {
            cid,
            poll_id,
            name,
            votes: 0,
            has_registered: true,
        });

        msg!("Candidate {} registered in poll {}", cid, poll_id);
        Ok(())
    }
}
