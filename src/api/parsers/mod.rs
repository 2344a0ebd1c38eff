pub mod keeper;
pub mod profile;

pub use keeper::count_team_players;
pub use profile::{is_ranked, parse_profile};
