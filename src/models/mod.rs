//! The SportsML-G2 vocabulary, expressed as mapped entities.

pub mod actions;
pub mod articles;
pub mod attributes;
pub mod entities;
pub mod events;
pub mod metadata;
pub mod newsml;
pub mod schedules;
pub mod sports_content;
pub mod standings;
pub mod statistics;
pub mod tournaments;

pub use actions::{Action, Participant};
pub use articles::{Article, ArticleMetadata};
pub use entities::{
    Affiliation, Associate, AssociateMetadata, Official, OfficialMetadata, Player, PlayerMetadata,
    Team, TeamMetadata,
};
pub use events::{EventStats, EventStatsMotorRacing, Highlight, SportsEvent};
pub use metadata::{Award, EventMetadata, Site, SportsContentCode, SportsMetadata};
pub use newsml::{CatalogRef, FlexLocation, Name, SportsProperty};
pub use schedules::{Schedule, ScheduleMetadata};
pub use sports_content::SportsContent;
pub use standings::{Standing, StandingMetadata};
pub use statistics::{
    AssociateStats, EventRecord, GenericStat, OfficialStats, OutcomeResult, OutcomeTotal,
    PenaltyStats, PlayerStats, Rank, Rating, Statistic, StatisticMetadata, StatusChange, SubScore,
    TeamStats, WageringStats,
};
pub use tournaments::{Tournament, TournamentDivision, TournamentMetadata, TournamentRound};
