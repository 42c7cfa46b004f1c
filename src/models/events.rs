//! Sports events and what hangs off them.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::actions::Action;
use crate::models::attributes::{COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::entities::{Official, Player, Team};
use crate::models::metadata::{Award, EventMetadata};
use crate::models::newsml::SportsProperty;
use crate::models::statistics::WageringStats;

static EVENT_STATS_MOTOR_RACING_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "eventStatsMotorRacing",
    &[
        AttributeMapping::text("time-of-race", "timeOfRace"),
        AttributeMapping::text("speed-average", "speedAverage"),
        AttributeMapping::text("speed-units", "speedUnits"),
        AttributeMapping::text("margin-of-victory", "marginOfVictory"),
        AttributeMapping::text("caution-flags", "cautionFlags"),
        AttributeMapping::text("caution-laps", "cautionLaps"),
        AttributeMapping::text("lead-changes", "leadChanges"),
        AttributeMapping::text("lead-changes-drivers", "leadChangesDrivers"),
        AttributeMapping::text("laps-total", "lapsTotal"),
        AttributeMapping::text("distance-total", "distanceTotal"),
    ],
);

mapped_entity! {
    /// Race-wide figures for motor racing.
    pub struct EventStatsMotorRacing {
        groups: [&COMMON_ATTRIBUTES, &EVENT_STATS_MOTOR_RACING_ATTRIBUTES],
    }
}

mapped_entity! {
    /// Stats applying to the event as a whole.
    pub struct EventStats {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES],
        many {
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            motor_racing: EventStatsMotorRacing
                => "event-stats-motor-racing" as "eventStatsMotorRacing",
        }
    }
}

static HIGHLIGHT_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "highlight",
    &[
        AttributeMapping::text("type", "type"),
        AttributeMapping::text("href", "href"),
        AttributeMapping::text("date-time", "dateTime"),
    ],
);

mapped_entity! {
    /// Pointer to a notable moment, such as a video clip of a goal.
    pub struct Highlight {
        groups: [&COMMON_ATTRIBUTES, &HIGHLIGHT_ATTRIBUTES],
    }
}

mapped_entity! {
    /// A match, game, race or other contest. Events nest: a tournament day
    /// can hold heats, a series can hold games.
    pub struct SportsEvent {
        groups: [&COMMON_ATTRIBUTES],
        one {
            event_metadata: EventMetadata => "event-metadata" as "eventMetadata",
        }
        many {
            event_stats: EventStats => "event-stats" as "eventStats",
            teams: Team => "team" as "teams",
            players: Player => "player" as "players",
            wagering_stats: WageringStats => "wagering-stats" as "wageringStats",
            officials: Official => "officials"/"official" as "officials",
            actions: Action => "actions"/"action" as "actions",
            highlights: Highlight => "highlight" as "highlights",
            awards: Award => "award" as "awards",
            sports_events: SportsEvent => "sports-event" as "sportsEvents",
        }
    }
}
