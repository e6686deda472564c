use anchor_lang::prelude::*;

// Poll account
// Seeds: [id]
#[account]
#[derive(InitSpace)]
pub struct Poll {
    pub id: u64,

    #[max_len(280)]
    pub description: String,

    // Voting window in unix seconds, both ends inclusive
    pub start: u64,
    pub end: u64,

    // Number of candidates registered for this poll
    pub candidates: u64,
}

impl Poll {
    pub fn is_active(&self, now: u64) -> bool {
        self.start <= now && now <= self.end
    }
}
