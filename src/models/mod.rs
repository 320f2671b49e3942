pub mod entry;
pub mod matches;
pub mod referee;
pub mod season;
pub mod team;

pub use entry::{CreatedMatch, MatchEntry};
pub use matches::{MatchRecord, MatchResult, NewMatch};
pub use referee::Referee;
pub use season::Season;
pub use team::Team;
