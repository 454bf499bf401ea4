pub mod players;
pub mod seasons;
pub mod update;
