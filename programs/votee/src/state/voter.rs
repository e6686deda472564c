use anchor_lang::prelude::*;

// Ballot receipt for one wallet in one poll
// Seeds: ["voter", poll_id, user]
#[account]
#[derive(InitSpace)]
pub struct Voter {
    pub cid: u64,
    pub poll_id: u64,
    pub has_voted: bool,
}
