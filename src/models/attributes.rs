//! Attribute groups shared across many SportsML element types.

use crate::mapping::{AttributeGroup, AttributeMapping};

/// id, class and style, carried by nearly every element.
pub static COMMON_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "commonAttributes",
    &[
        AttributeMapping::text("id", "id"),
        AttributeMapping::text("class", "class"),
        AttributeMapping::text("style", "style"),
    ],
);

/// Scoping of the statistics or metadata an element carries: which period,
/// which opponent, which venue conditions, and so on.
pub static COVERAGE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "coverageAttributes",
    &[
        AttributeMapping::text("stats-coverage", "statsCoverage"),
        AttributeMapping::text("team-coverage", "teamCoverage"),
        AttributeMapping::text("duration-scope", "durationScope"),
        AttributeMapping::text("record-making-scope", "recordMakingScope"),
        AttributeMapping::text("scoping-label", "scopingLabel"),
        AttributeMapping::text("period-value", "periodValue"),
        AttributeMapping::text("period-type", "periodType"),
        AttributeMapping::text("start-date-time", "startDateTime"),
        AttributeMapping::text("end-date-time", "endDateTime"),
        AttributeMapping::text("period-start-date-time", "periodStartDateTime"),
        AttributeMapping::text("period-end-date-time", "periodEndDateTime"),
        AttributeMapping::text("temporal-unit-type", "temporalUnitType"),
        AttributeMapping::text("temporal-unit-value", "temporalUnitValue"),
        AttributeMapping::text("event-span", "eventSpan"),
        AttributeMapping::text("opponent-value", "opponentValue"),
        AttributeMapping::text("opponent-type", "opponentType"),
        AttributeMapping::text("team", "team"),
        AttributeMapping::text("competition", "competition"),
        AttributeMapping::text("unit-value", "unitValue"),
        AttributeMapping::text("unit-type", "unitType"),
        AttributeMapping::text("situation", "situation"),
        AttributeMapping::text("location-key", "locationKey"),
        AttributeMapping::text("venue-type", "venueType"),
        AttributeMapping::text("surface-type", "surfaceType"),
        AttributeMapping::text("weather-type", "weatherType"),
        AttributeMapping::text("scope-value", "scopeValue"),
        AttributeMapping::text("distance", "distance"),
        AttributeMapping::text("distance-maximum", "distanceMaximum"),
        AttributeMapping::text("distance-minimum", "distanceMinimum"),
        AttributeMapping::text("measurement-units", "measurementUnits"),
    ],
);

/// Game-clock state, shared by event metadata and actions.
pub static BASE_EVENT_STATE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "baseEventStateAttributeGroup",
    &[
        AttributeMapping::text("minutes-elapsed", "minutesElapsed"),
        AttributeMapping::text("period-minute-elapsed", "periodMinuteElapsed"),
        AttributeMapping::text("period-time-elapsed", "periodTimeElapsed"),
        AttributeMapping::text("period-time-remaining", "periodTimeRemaining"),
    ],
);

/// `key`, added by the second metadata layer (events, tournaments).
pub static BASE2_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "base2Metadata",
    &[AttributeMapping::text("key", "key")],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingTable;

    #[test]
    fn test_shared_groups_have_unique_source_keys() {
        for group in [
            &COMMON_ATTRIBUTES,
            &COVERAGE_ATTRIBUTES,
            &BASE_EVENT_STATE_ATTRIBUTES,
            &BASE2_METADATA_ATTRIBUTES,
        ] {
            let table = MappingTable::merge(&[group]);
            assert_eq!(table.len(), group.mappings.len(), "duplicate key in {}", group.name);
        }
    }

    #[test]
    fn test_output_keys_are_camel_case() {
        for mapping in COVERAGE_ATTRIBUTES.mappings {
            assert!(!mapping.output.contains('-'), "{}", mapping.output);
        }
    }
}
