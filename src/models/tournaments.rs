//! Tournaments and their divisions and rounds.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{BASE2_METADATA_ATTRIBUTES, COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::events::SportsEvent;
use crate::models::metadata::{Award, Site, SportsContentCode};
use crate::models::newsml::{Name, SportsProperty};
use crate::models::standings::Standing;

static TOURNAMENT_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "tournamentMetadata",
    &[
        AttributeMapping::text("tournament-type", "tournamentType"),
        AttributeMapping::text("event-status", "eventStatus"),
        AttributeMapping::text("season-key", "seasonKey"),
        AttributeMapping::text("season-type", "seasonType"),
    ],
);

static ROUND_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "tournamentRoundMetadata",
    &[
        AttributeMapping::text("round-number", "roundNumber"),
        AttributeMapping::text("round-type", "roundType"),
        AttributeMapping::text("event-status", "eventStatus"),
    ],
);

mapped_entity! {
    pub struct TournamentMetadata {
        groups: [
            &COMMON_ATTRIBUTES,
            &COVERAGE_ATTRIBUTES,
            &BASE2_METADATA_ATTRIBUTES,
            &TOURNAMENT_METADATA_ATTRIBUTES,
        ],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            names: Name => "name" as "names",
            sites: Site => "site" as "sites",
            awards: Award => "award" as "awards",
        }
    }
}

mapped_entity! {
    pub struct TournamentDivisionMetadata {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &BASE2_METADATA_ATTRIBUTES],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            names: Name => "name" as "names",
            sites: Site => "site" as "sites",
        }
    }
}

mapped_entity! {
    pub struct TournamentRoundMetadata {
        groups: [
            &COMMON_ATTRIBUTES,
            &COVERAGE_ATTRIBUTES,
            &BASE2_METADATA_ATTRIBUTES,
            &ROUND_METADATA_ATTRIBUTES,
        ],
        many {
            names: Name => "name" as "names",
            sites: Site => "site" as "sites",
        }
    }
}

mapped_entity! {
    /// One round of a tournament: qualifying, quarter-finals and so on.
    pub struct TournamentRound {
        groups: [&COMMON_ATTRIBUTES],
        one {
            metadata: TournamentRoundMetadata
                => "tournament-round-metadata" as "tournamentRoundMetadata",
        }
        many {
            sports_events: SportsEvent => "sports-event" as "sportsEvents",
        }
    }
}

mapped_entity! {
    /// A group of a tournament, such as a weight class or a conference.
    pub struct TournamentDivision {
        groups: [&COMMON_ATTRIBUTES],
        one {
            metadata: TournamentDivisionMetadata
                => "tournament-division-metadata" as "tournamentDivisionMetadata",
        }
        many {
            rounds: TournamentRound => "tournament-round" as "tournamentRounds",
            sports_events: SportsEvent => "sports-event" as "sportsEvents",
            standings: Standing => "standing" as "standings",
        }
    }
}

mapped_entity! {
    /// A competition made of many events, split into divisions and rounds.
    pub struct Tournament {
        groups: [&COMMON_ATTRIBUTES],
        one {
            tournament_metadata: TournamentMetadata => "tournament-metadata" as "tournamentMetadata",
        }
        many {
            divisions: TournamentDivision => "tournament-division" as "tournamentDivisions",
            rounds: TournamentRound => "tournament-round" as "tournamentRounds",
            sports_events: SportsEvent => "sports-event" as "sportsEvents",
            standings: Standing => "standing" as "standings",
        }
    }
}
