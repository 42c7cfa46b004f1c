//! Participants: teams, players, officials, associates and their
//! affiliations.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::metadata::{Site, SportsContentCode};
use crate::models::newsml::{FlexLocation, Name, SportsProperty};
use crate::models::statistics::{
    AssociateStats, OfficialStats, PlayerStats, TeamStats, WageringStats,
};

/// Key and nationality shared by team, person and site metadata.
pub static ENTITY_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "baseEntityMetadata",
    &[
        AttributeMapping::text("key", "key"),
        AttributeMapping::text("nationality", "nationality"),
    ],
);

static TEAM_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "baseTeamMetadata",
    &[
        AttributeMapping::text("alignment", "alignment"),
        AttributeMapping::text("established", "established"),
        AttributeMapping::text("dissolved", "dissolved"),
        AttributeMapping::text("team-idref", "teamIdRef"),
        AttributeMapping::text("home-page-url", "homePageURL"),
        AttributeMapping::text("round-position", "roundPosition"),
    ],
);

static PERSON_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "basePersonMetadata",
    &[
        AttributeMapping::text("date-of-birth", "dateOfBirth"),
        AttributeMapping::text("date-of-death", "dateOfDeath"),
        AttributeMapping::text("height", "height"),
        AttributeMapping::text("weight", "weight"),
        AttributeMapping::text("position-regular", "positionRegular"),
        AttributeMapping::text("position-event", "positionEvent"),
        AttributeMapping::text("position-depth", "positionDepth"),
        AttributeMapping::text("health", "health"),
        AttributeMapping::text("gender", "gender"),
    ],
);

static PLAYER_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "basePlayerMetadata",
    &[
        AttributeMapping::text("team-idref", "teamIdRef"),
        AttributeMapping::text("status", "status"),
        AttributeMapping::text("lineup-slot", "lineupSlot"),
        AttributeMapping::text("lineup-slot-sequence", "lineupSlotSequence"),
        AttributeMapping::text("scratch-reason", "scratchReason"),
        AttributeMapping::text("uniform-number", "uniformNumber"),
        AttributeMapping::text("home-page-url", "homePageURL"),
        AttributeMapping::text("round-position", "roundPosition"),
    ],
);

static OFFICIAL_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "baseOfficialMetadata",
    &[AttributeMapping::text("uniform-number", "uniformNumber")],
);

static ASSOCIATE_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "associateMetadata",
    &[
        AttributeMapping::text("team-idref", "teamIdRef"),
        AttributeMapping::text("status", "status"),
    ],
);

static PHASE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "phaseMetadata",
    &[
        AttributeMapping::text("phase-type", "phaseType"),
        AttributeMapping::text("phase-status", "phaseStatus"),
        AttributeMapping::text("phase-start-date-time", "phaseStartDateTime"),
        AttributeMapping::text("phase-end-date-time", "phaseEndDateTime"),
        AttributeMapping::text("phase-idref", "phaseIdRef"),
        AttributeMapping::text("phase-key", "phaseKey"),
        AttributeMapping::text("phase-caliber", "phaseCaliber"),
        AttributeMapping::text("phase-caliber-key", "phaseCaliberKey"),
    ],
);

static INJURY_PHASE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "injuryPhaseMetadata",
    &[
        AttributeMapping::text("injury-type", "injuryType"),
        AttributeMapping::text("injury-side", "injurySide"),
        AttributeMapping::text("injury-status", "injuryStatus"),
        AttributeMapping::text("disabled-list", "disabledList"),
        AttributeMapping::text("available-for-selection", "availableForSelection"),
    ],
);

static AFFILIATION_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "affiliation",
    &[
        AttributeMapping::text("membership-idref", "membershipIdRef"),
        AttributeMapping::text("membership-type", "membershipType"),
        AttributeMapping::text("membership-key", "membershipKey"),
        AttributeMapping::text("membership-name", "membershipName"),
    ],
);

mapped_entity! {
    /// Membership of a participant within a division, club or federation.
    pub struct Affiliation {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &AFFILIATION_ATTRIBUTES],
    }
}

static BASEBALL_TEAM_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "teamMetadataBaseball",
    &[AttributeMapping::text(
        "probable-starting-pitcher-idref",
        "probableStartingPitcherIdRef",
    )],
);

mapped_entity! {
    pub struct TeamMetadataBaseball {
        groups: [&COMMON_ATTRIBUTES, &BASEBALL_TEAM_METADATA_ATTRIBUTES],
    }
}

static GOLF_METADATA_ATTRIBUTES: AttributeGroup =
    AttributeGroup::new("baseGolfMetadata", &[AttributeMapping::text("rank", "rank")]);

mapped_entity! {
    /// Rank of a golf team, a foursome for instance.
    pub struct TeamMetadataGolf {
        groups: [&COMMON_ATTRIBUTES, &GOLF_METADATA_ATTRIBUTES],
    }
}

static VEHICLE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "metadataMotorRacingVehicle",
    &[
        AttributeMapping::text("vehicle-number", "vehicleNumber"),
        AttributeMapping::text("make", "make"),
        AttributeMapping::text("model", "model"),
        AttributeMapping::text("engine", "engine"),
        AttributeMapping::text("sponsor", "sponsor"),
        AttributeMapping::text("chassis", "chassis"),
    ],
);

mapped_entity! {
    pub struct MotorRacingVehicle {
        groups: [&COMMON_ATTRIBUTES, &ENTITY_METADATA_ATTRIBUTES, &VEHICLE_ATTRIBUTES],
        many {
            names: Name => "name" as "names",
        }
    }
}

mapped_entity! {
    pub struct TeamMetadataMotorRacing {
        groups: [&COMMON_ATTRIBUTES],
        many {
            vehicles: MotorRacingVehicle
                => "metadata-motor-racing-vehicle" as "motorRacingVehicles",
        }
    }
}

mapped_entity! {
    /// Properties of a team that do not depend on its performance.
    pub struct TeamMetadata {
        groups: [&COMMON_ATTRIBUTES, &ENTITY_METADATA_ATTRIBUTES, &TEAM_METADATA_ATTRIBUTES],
        one {
            home_location: FlexLocation => "home-location" as "homeLocation",
            baseball: TeamMetadataBaseball => "team-metadata-baseball" as "teamMetadataBaseball",
            golf: TeamMetadataGolf => "team-metadata-golf" as "teamMetadataGolf",
            motor_racing: TeamMetadataMotorRacing
                => "team-metadata-motor-racing" as "teamMetadataMotorRacing",
        }
        many {
            names: Name => "name" as "names",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            sites: Site => "site" as "sites",
            sports_content_codes: SportsContentCode
                => "sports-content-code" as "sportsContentCodes",
        }
    }
}

mapped_entity! {
    /// A team taking part in an event, with its metadata and statistics.
    pub struct Team {
        groups: [&COMMON_ATTRIBUTES],
        one {
            team_metadata: TeamMetadata => "team-metadata" as "teamMetadata",
        }
        many {
            team_stats: TeamStats => "team-stats" as "teamStats",
            players: Player => "player" as "players",
            wagering_stats: WageringStats => "wagering-stats" as "wageringStats",
            associates: Associate => "associate" as "associates",
            affiliations: Affiliation => "affiliation" as "affiliations",
        }
    }
}

mapped_entity! {
    /// Contract, draft or other stage of a player's career.
    pub struct CareerPhase {
        groups: [&COMMON_ATTRIBUTES, &PHASE_ATTRIBUTES],
        many {
            names: Name => "name" as "names",
        }
    }
}

mapped_entity! {
    pub struct InjuryPhase {
        groups: [&COMMON_ATTRIBUTES, &PHASE_ATTRIBUTES, &INJURY_PHASE_ATTRIBUTES],
    }
}

mapped_entity! {
    /// Metadata describing a player. Generally constant over an event.
    pub struct PlayerMetadata {
        groups: [
            &COMMON_ATTRIBUTES,
            &ENTITY_METADATA_ATTRIBUTES,
            &PERSON_METADATA_ATTRIBUTES,
            &PLAYER_METADATA_ATTRIBUTES,
        ],
        one {
            home_location: FlexLocation => "home-location" as "homeLocation",
        }
        many {
            names: Name => "name" as "names",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            career_phases: CareerPhase => "career-phase" as "careerPhases",
            injury_phases: InjuryPhase => "injury-phase" as "injuryPhases",
        }
    }
}

mapped_entity! {
    /// A competitor.
    pub struct Player {
        groups: [&COMMON_ATTRIBUTES],
        one {
            player_metadata: PlayerMetadata => "player-metadata" as "playerMetadata",
        }
        many {
            player_stats: PlayerStats => "player-stats" as "playerStats",
            wagering_stats: WageringStats => "wagering-stats" as "wageringStats",
            associates: Associate => "associate" as "associates",
            affiliations: Affiliation => "affiliation" as "affiliations",
        }
    }
}

mapped_entity! {
    pub struct OfficialMetadata {
        groups: [
            &COMMON_ATTRIBUTES,
            &ENTITY_METADATA_ATTRIBUTES,
            &PERSON_METADATA_ATTRIBUTES,
            &OFFICIAL_METADATA_ATTRIBUTES,
        ],
        one {
            home_location: FlexLocation => "home-location" as "homeLocation",
        }
        many {
            names: Name => "name" as "names",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
        }
    }
}

mapped_entity! {
    /// Referee or umpire. Listed inside an `officials` wrapper.
    pub struct Official {
        groups: [&COMMON_ATTRIBUTES],
        one {
            official_metadata: OfficialMetadata => "official-metadata" as "officialMetadata",
            official_stats: OfficialStats => "official-stats" as "officialStats",
        }
        many {
            affiliations: Affiliation => "affiliation" as "affiliations",
        }
    }
}

mapped_entity! {
    pub struct AssociateMetadata {
        groups: [
            &COMMON_ATTRIBUTES,
            &ENTITY_METADATA_ATTRIBUTES,
            &PERSON_METADATA_ATTRIBUTES,
            &ASSOCIATE_METADATA_ATTRIBUTES,
        ],
        one {
            home_location: FlexLocation => "home-location" as "homeLocation",
        }
        many {
            names: Name => "name" as "names",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            career_phases: CareerPhase => "career-phase" as "careerPhases",
        }
    }
}

mapped_entity! {
    /// Coach, manager, owner or other non-competing person tied to a team.
    pub struct Associate {
        groups: [&COMMON_ATTRIBUTES],
        one {
            associate_metadata: AssociateMetadata => "associate-metadata" as "associateMetadata",
        }
        many {
            associate_stats: AssociateStats => "associate-stats" as "associateStats",
            affiliations: Affiliation => "affiliation" as "affiliations",
        }
    }
}
