use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Vote Instruction
//
// The voter PDA is init (not init_if_needed): a second vote by the same
// wallet in the same poll fails when the account already exists.

#[derive(Accounts)]
#[instruction(poll_id: u64, cid: u64)]
pub struct Vote<'info> {
    // Seeds: [poll_id]
    #[account(
        mut,
        seeds = [&poll_id.to_le_bytes()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    // Seeds: [poll_id, cid]
    #[account(
        mut,
        seeds = [&poll_id.to_le_bytes(), &cid.to_le_bytes()],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,

    // Seeds: ["voter", poll_id, user]
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Voter::INIT_SPACE,
        seeds = [VOTER, &poll_id.to_le_bytes(), user.key().as_ref()],
        bump,
    )]
    pub voter: Account<'info, Voter>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, poll_id: u64, cid: u64) -> Result<()> {
        require!(
            self.candidate.belongs_to(poll_id),
            VoteeError::CandidateNotRegistered
        );
        require!(!self.voter.has_voted, VoteeError::VoterAlreadyVoted);

        let now = Clock::get()?.unix_timestamp.max(0) as u64;
        require!(self.poll.is_active(now), VoteeError::PollNotActive);

        self.voter.set_inner(Voter {
            cid,
            poll_id,
            has_voted: true,
        });

        self.candidate.votes = self
            .candidate
            .votes
            .checked_add(1)
            .ok_or(VoteeError::Overflow)?;

        msg!("Vote for candidate {} in poll {}", cid, poll_id);
        Ok(())
    }
}
