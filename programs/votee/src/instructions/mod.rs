pub mod initialize;
pub mod create_poll;
pub mod register_candidate;
pub mod vote;

pub use initialize::*;
pub use create_poll::*;
pub use register_candidate::*;
pub use vote::*;
