pub mod dto;
pub mod error;
pub mod exit;
pub mod tally;
pub mod util;
