// Raw program accounts
//
// Mirrors of the #[account] structs in programs/votee. Accounts are allocated
// at their maximum size, so decoding reads the Borsh prefix and ignores the
// zero padding after it.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{
    constants::{account_discriminator, ANCHOR_DISCRIMINATOR},
    error::ClientError,
};

pub trait AccountDecode: BorshDeserialize + BorshSerialize + Sized {
    /// Account type name as declared in the program; feeds the discriminator.
    const NAME: &'static str;

    fn decode(data: &[u8]) -> Result<Self, ClientError> {
        if data.len() < ANCHOR_DISCRIMINATOR {
            return Err(ClientError::Decode {
                account: Self::NAME,
                reason: format!("{} bytes is shorter than the discriminator", data.len()),
            });
        }

        let (discriminator, mut body) = data.split_at(ANCHOR_DISCRIMINATOR);
        if discriminator != account_discriminator(Self::NAME) {
            return Err(ClientError::Decode {
                account: Self::NAME,
                reason: "discriminator mismatch".to_string(),
            });
        }

        Self::deserialize(&mut body).map_err(|err| ClientError::Decode {
            account: Self::NAME,
            reason: err.to_string(),
        })
    }

    /// Discriminator followed by the Borsh body, as stored on chain.
    fn encode(&self) -> Vec<u8> {
        let mut data = account_discriminator(Self::NAME).to_vec();
        // Writing into a Vec cannot fail
        let _ = self.serialize(&mut data);
        data
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub count: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registrations {
    pub count: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: u64,
    pub description: String,
    pub start: u64,
    pub end: u64,
    pub candidates: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub cid: u64,
    pub poll_id: u64,
    pub name: String,
    pub votes: u64,
    pub has_registered: bool,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voter {
    pub cid: u64,
    pub poll_id: u64,
    pub has_voted: bool,
}

impl AccountDecode for Counter {
    const NAME: &'static str = "Counter";
}

impl AccountDecode for Registrations {
    const NAME: &'static str = "Registrations";
}

impl AccountDecode for Poll {
    const NAME: &'static str = "Poll";
}

impl AccountDecode for Candidate {
    const NAME: &'static str = "Candidate";
}

impl AccountDecode for Voter {
    const NAME: &'static str = "Voter";
}
