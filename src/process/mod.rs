pub mod smile;
pub mod snow;
