use anchor_lang::prelude::*;

#[error_code]
pub enum VoteeError {
    // Poll errors
    #[msg("Start date must be before end date")]
    InvalidDates,

    #[msg("Poll not found")]
    PollNotFound,

    // Candidate errors
    #[msg("Candidate already registered")]
    CandidateAlreadyRegistered,

    #[msg("Candidate is not in the poll")]
    CandidateNotRegistered,

    // Voting errors
    #[msg("Voter has already voted")]
    VoterAlreadyVoted,

    #[msg("Poll is not currently active")]
    PollNotActive,

    // Input errors
    #[msg("Poll description is too long")]
    DescriptionTooLong,

    #[msg("Candidate name is too long")]
    NameTooLong,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
