// Display records
//
// Plain, serializable views of program accounts: u64 counters stay numbers,
// addresses become base58 text, poll timestamps are converted to milliseconds.

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use crate::accounts::{Candidate, Poll};

const MILLIS_PER_SECOND: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRecord {
    pub public_key: String,
    pub id: u64,
    pub description: String,
    // milliseconds since the unix epoch
    pub start: u64,
    pub end: u64,
    pub candidates: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Upcoming,
    Active,
    Ended,
}

impl PollRecord {
    pub fn new(address: &Pubkey, poll: Poll) -> Self {
        Self {
            public_key: address.to_string(),
            id: poll.id,
            description: poll.description,
            start: poll.start.saturating_mul(MILLIS_PER_SECOND),
            end: poll.end.saturating_mul(MILLIS_PER_SECOND),
            candidates: poll.candidates,
        }
    }

    /// Voting window check with the same inclusive bounds the program uses.
    /// The program compares whole seconds, so `now_ms` is truncated first.
    pub fn status(&self, now_ms: u64) -> PollStatus {
        let now = now_ms / MILLIS_PER_SECOND;
        if now < self.start / MILLIS_PER_SECOND {
            PollStatus::Upcoming
        } else if now > self.end / MILLIS_PER_SECOND {
            PollStatus::Ended
        } else {
            PollStatus::Active
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub public_key: String,
    pub cid: u64,
    pub poll_id: u64,
    pub name: String,
    pub votes: u64,
    pub has_registered: bool,
}

impl CandidateRecord {
    pub fn new(address: &Pubkey, candidate: Candidate) -> Self {
        Self {
            public_key: address.to_string(),
            cid: candidate.cid,
            poll_id: candidate.poll_id,
            name: candidate.name,
            votes: candidate.votes,
            has_registered: candidate.has_registered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_record() -> PollRecord {
        PollRecord::new(
            &Pubkey::new_unique(),
            Poll {
                id: 1,
                description: "Team lunch".to_string(),
                start: 1_700_000_000,
                end: 1_700_086_400,
                candidates: 0,
            },
        )
    }

    #[test]
    fn poll_timestamps_become_milliseconds() {
        let record = poll_record();
        assert_eq!(record.start, 1_700_000_000_000);
        assert_eq!(record.end, 1_700_086_400_000);
    }

    #[test]
    fn poll_status_bounds_are_inclusive() {
        let record = poll_record();
        assert_eq!(record.status(record.start - 1), PollStatus::Upcoming);
        assert_eq!(record.status(record.start), PollStatus::Active);
        assert_eq!(record.status(record.end), PollStatus::Active);
        assert_eq!(record.status(record.end + 1000), PollStatus::Ended);
    }

    #[test]
    fn poll_status_ignores_sub_second_remainder() {
        let record = poll_record();
        // still the last accepted second on chain
        assert_eq!(record.status(record.end + 999), PollStatus::Active);
        assert_eq!(record.status(record.start - 1000), PollStatus::Upcoming);
    }

    #[test]
    fn records_serialize_camel_case() {
        let address = Pubkey::new_unique();
        let record = CandidateRecord::new(
            &address,
            Candidate {
                cid: 2,
                poll_id: 1,
                name: "Ferris".to_string(),
                votes: 4,
                has_registered: true,
            },
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["publicKey"], address.to_string());
        assert_eq!(json["pollId"], 1);
        assert_eq!(json["hasRegistered"], true);
    }
}
