//! Intersect a player's career with tournament rosters.

mod filter;
mod matching;

pub use filter::{TournamentWindow, filter_by_tournament, filter_memberships, select_memberships};
pub use matching::{player_in_team, team_name_match};
