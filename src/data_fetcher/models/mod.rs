pub mod game;
pub mod schedule;

pub use game::{GameDay, GameDetails};
pub use schedule::{
    FeedDate, FeedGame, FeedLinescore, FeedSide, FeedStatus, FeedTeamRef, FeedTeams,
    ScheduleFeed,
};
