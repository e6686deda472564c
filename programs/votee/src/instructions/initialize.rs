use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Initialize Instruction
//
// Creates the two global id counters. Poll and candidate ids start at 1,
// so both counts start at 0.

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    // Seeds: ["counter"]
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Counter::INIT_SPACE,
        seeds = [COUNTER],
        bump,
    )]
    pub counter: Account<'info, Counter>,

    // Seeds: ["registrations"]
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Registrations::INIT_SPACE,
        seeds = [REGISTRATIONS],
        bump,
    )]
    pub registrations: Account<'info, Registrations>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self) -> Result<()> {
        self.counter.set_inner(Counter { count: 0 });
        self.registrations.set_inner(Registrations { count: 0 });

        msg!("Votee initialized by {}", self.user.key());
        Ok(())
    }
}
