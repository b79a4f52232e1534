pub mod matchup;
pub mod teams;
