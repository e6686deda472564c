pub mod counter;
pub mod poll;
pub mod candidate;
pub mod voter;

pub use counter::*;
pub use poll::*;
pub use candidate::*;
pub use voter::*;
