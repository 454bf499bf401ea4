//! Line-oriented parsers for the wikitext sections the reconciler and the player
//! pipeline consume. All of them are pure: they never fetch and never fail on
//! missing fields, returning empty values instead.

pub mod infobox;
pub mod player;
pub mod redirect;
pub mod sections;
pub mod teams;

pub use infobox::{InfoboxDetails, parse_infobox};
pub use player::parse_player;
pub use redirect::redirect_target;
pub use sections::find_section_index;
pub use teams::{parse_teams, render_team};
