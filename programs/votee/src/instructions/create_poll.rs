use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Create Poll Instruction
//
// The poll PDA is derived from the next counter value, so the caller
// must read the counter first and pass [count + 1] as the poll address.
// Counter must precede poll so its value is loaded before seeds are checked.

#[derive(Accounts)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [COUNTER],
        bump,
    )]
    pub counter: Account<'info, Counter>,

    // Seeds: [counter.count + 1]
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Poll::INIT_SPACE,
        seeds = [&(counter.count + 1).to_le_bytes()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreatePoll<'info> {
    pub fn create_poll(&mut self, description: String, start: u64, end: u64) -> Result<()> {
        require!(start < end, VoteeError::InvalidDates);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            VoteeError::DescriptionTooLong
        );

        let id = self.counter.next_id().ok_or(VoteeError::Overflow)?;
        self.counter.count = id;

        self.poll.set_inner(Poll {
            id,
            description,
            start,
            end,
            candidates: 0,
        });

        msg!("Poll {} created ({} - {})", id, start, end);
        Ok(())
    }
}
