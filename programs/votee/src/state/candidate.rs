use anchor_lang::prelude::*;

// Candidate account
// Seeds: [poll_id, cid]
#[account]
#[derive(InitSpace)]
pub struct Candidate {
    pub cid: u64,
    pub poll_id: u64,

    #[max_len(32)]
    pub name: String,

    pub votes: u64,
    pub has_registered: bool,
}

impl Candidate {
    pub fn belongs_to(&self, poll_id: u64) -> bool {
        self.has_registered && self.poll_id == poll_id
    }
}
