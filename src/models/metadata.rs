//! Document, event and site metadata.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{
    BASE_EVENT_STATE_ATTRIBUTES, BASE2_METADATA_ATTRIBUTES, COMMON_ATTRIBUTES,
    COVERAGE_ATTRIBUTES,
};
use crate::models::entities::ENTITY_METADATA_ATTRIBUTES;
use crate::models::newsml::{CatalogRef, FlexLocation, Name, SportsProperty};

static SPORTS_CONTENT_CODE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "sportsContentCode",
    &[
        AttributeMapping::text("code-type", "codeType"),
        AttributeMapping::text("code-key", "codeKey"),
        AttributeMapping::text("code-name", "codeName"),
    ],
);

mapped_entity! {
    /// A typed code classifying the content: sport, league, season, team...
    pub struct SportsContentCode {
        groups: [&COMMON_ATTRIBUTES, &SPORTS_CONTENT_CODE_ATTRIBUTES],
    }
}

static SPORTS_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "sportsMetadata",
    &[
        AttributeMapping::text("doc-id", "docId"),
        AttributeMapping::text("date-time", "dateTime"),
        AttributeMapping::text("language", "language"),
        AttributeMapping::text("document-class", "documentClass"),
        AttributeMapping::text("fixture-key", "fixtureKey"),
        AttributeMapping::text("fixture-name", "fixtureName"),
        AttributeMapping::text("revision-id", "revisionId"),
    ],
);

mapped_entity! {
    /// Metadata about the whole document.
    pub struct SportsMetadata {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &SPORTS_METADATA_ATTRIBUTES],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            catalog_refs: CatalogRef => "catalogRef" as "catalogRefs",
        }
    }
}

static EVENT_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "eventMetadata",
    &[
        AttributeMapping::text("event-recurring-key", "eventRecurringKey"),
        AttributeMapping::text("event-style", "eventStyle"),
        AttributeMapping::text("event-number", "eventNumber"),
        AttributeMapping::text("event-status", "eventStatus"),
        AttributeMapping::text("event-type", "eventType"),
        AttributeMapping::text("event-status-reason", "eventStatusReason"),
        AttributeMapping::text("event-status-note", "eventStatusNote"),
        AttributeMapping::text("event-of-day", "eventOfDay"),
        AttributeMapping::text("events-day-total", "eventsDayTotal"),
        AttributeMapping::text("start-weekday", "startWeekday"),
        AttributeMapping::text("end-weekday", "endWeekday"),
        AttributeMapping::text("heat-number", "heatNumber"),
        AttributeMapping::text("duration", "duration"),
        AttributeMapping::text("time-certainty", "timeCertainty"),
        AttributeMapping::text("season-key", "seasonKey"),
        AttributeMapping::text("season-type", "seasonType"),
        AttributeMapping::text("series-index", "seriesIndex"),
        AttributeMapping::text("event-outcome-type", "eventOutcomeType"),
        AttributeMapping::text("round-number", "roundNumber"),
    ],
);

mapped_entity! {
    /// Scheduling and status information for one sports-event.
    pub struct EventMetadata {
        groups: [
            &COMMON_ATTRIBUTES,
            &COVERAGE_ATTRIBUTES,
            &BASE2_METADATA_ATTRIBUTES,
            &BASE_EVENT_STATE_ATTRIBUTES,
            &EVENT_METADATA_ATTRIBUTES,
        ],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            names: Name => "name" as "names",
            sites: Site => "site" as "sites",
            awards: Award => "award" as "awards",
            event_sponsors: Name => "event-sponsor" as "eventSponsors",
            event_recurring_names: Name => "event-recurring-name" as "eventRecurringNames",
        }
    }
}

static SITE_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "siteMetadata",
    &[
        AttributeMapping::text("capacity", "capacity"),
        AttributeMapping::text("surface", "surface"),
        AttributeMapping::text("roof", "roof"),
    ],
);

mapped_entity! {
    pub struct SiteMetadata {
        groups: [&COMMON_ATTRIBUTES, &ENTITY_METADATA_ATTRIBUTES, &SITE_METADATA_ATTRIBUTES],
        one {
            home_location: FlexLocation => "home-location" as "homeLocation",
        }
        many {
            names: Name => "name" as "names",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
        }
    }
}

static SITE_STATS_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "siteStats",
    &[
        AttributeMapping::text("attendance", "attendance"),
        AttributeMapping::text("temperature", "temperature"),
        AttributeMapping::text("temperature-units", "temperatureUnits"),
        AttributeMapping::text("weather-code", "weatherCode"),
        AttributeMapping::text("weather-label", "weatherLabel"),
        AttributeMapping::text("wind-speed", "windSpeed"),
        AttributeMapping::text("wind-direction", "windDirection"),
    ],
);

mapped_entity! {
    /// Conditions at the venue during the event.
    pub struct SiteStats {
        groups: [&COMMON_ATTRIBUTES, &SITE_STATS_ATTRIBUTES],
    }
}

mapped_entity! {
    /// The venue where an event takes place.
    pub struct Site {
        groups: [&COMMON_ATTRIBUTES],
        one {
            site_metadata: SiteMetadata => "site-metadata" as "siteMetadata",
            site_stats: SiteStats => "site-stats" as "siteStats",
        }
    }
}

static AWARD_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "award",
    &[
        AttributeMapping::text("type", "type"),
        AttributeMapping::text("name", "name"),
        AttributeMapping::text("value", "value"),
        AttributeMapping::text("currency", "currency"),
        AttributeMapping::text("rank", "rank"),
        AttributeMapping::text("participant-idref", "participantIdRef"),
    ],
);

mapped_entity! {
    /// A prize or honour given to a participant.
    pub struct Award {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &AWARD_ATTRIBUTES],
    }
}
