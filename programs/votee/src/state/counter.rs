use anchor_lang::prelude::*;

// Number of polls ever created
// The next poll id is count + 1
#[account]
#[derive(InitSpace)]
pub struct Counter {
    pub count: u64,
}

// Number of candidates ever registered, across all polls
// The next candidate id is count + 1
#[account]
#[derive(InitSpace)]
pub struct Registrations {
    pub count: u64,
}

impl Counter {
    pub fn next_id(&self) -> Option<u64> {
        self.count.checked_add(1)
    }
}

impl Registrations {
    pub fn next_id(&self) -> Option<u64> {
        self.count.checked_add(1)
    }
}
