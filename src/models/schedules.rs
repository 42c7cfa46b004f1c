//! Fixture lists.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::events::SportsEvent;
use crate::models::metadata::SportsContentCode;
use crate::models::newsml::SportsProperty;

static SCHEDULE_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "scheduleMetadata",
    &[
        AttributeMapping::text("team-idref", "teamIdRef"),
        AttributeMapping::text("schedule-type", "scheduleType"),
    ],
);

mapped_entity! {
    pub struct ScheduleMetadata {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &SCHEDULE_METADATA_ATTRIBUTES],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
        }
    }
}

static SCHEDULE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "schedule",
    &[AttributeMapping::text("content-label", "contentLabel")],
);

mapped_entity! {
    /// A list of upcoming or past events.
    pub struct Schedule {
        groups: [&COMMON_ATTRIBUTES, &SCHEDULE_ATTRIBUTES],
        one {
            schedule_metadata: ScheduleMetadata => "schedule-metadata" as "scheduleMetadata",
        }
        many {
            sports_events: SportsEvent => "sports-event" as "sportsEvents",
        }
    }
}
