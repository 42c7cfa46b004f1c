//! League tables.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::entities::{Player, Team};
use crate::models::metadata::SportsContentCode;
use crate::models::newsml::{Name, SportsProperty};

static STANDING_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "standing",
    &[
        AttributeMapping::text("content-label", "contentLabel"),
        AttributeMapping::text("last-updated", "lastUpdated"),
    ],
);

mapped_entity! {
    pub struct StandingMetadata {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            names: Name => "name" as "names",
        }
    }
}

mapped_entity! {
    /// Ranking of teams or players. A standing can hold sub-standings, one
    /// per conference or division.
    pub struct Standing {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &STANDING_ATTRIBUTES],
        one {
            standing_metadata: StandingMetadata => "standing-metadata" as "standingMetadata",
        }
        many {
            teams: Team => "team" as "teams",
            players: Player => "player" as "players",
            standings: Standing => "standing" as "standings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappedEntity;
    use crate::xml::parse_str;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_standing_with_sub_standings() {
        let element = parse_str(
            r#"<standing content-label="NFL">
  <standing-metadata><name>National Football League</name></standing-metadata>
  <standing content-label="AFC East">
    <team id="t.ne"><team-stats><outcome-total wins="12" losses="4"/></team-stats></team>
  </standing>
</standing>"#,
        )
        .unwrap();
        let standing = Standing::from_element(Some(&element)).unwrap();

        assert_eq!(
            serde_json::to_value(&standing).unwrap(),
            json!({
                "contentLabel": "NFL",
                "standingMetadata": { "names": [ { "name": "National Football League" } ] },
                "standings": [ {
                    "contentLabel": "AFC East",
                    "teams": [ {
                        "id": "t.ne",
                        "teamStats": [ { "outcomeTotals": [ { "wins": "12", "losses": "4" } ] } ]
                    } ]
                } ]
            })
        );
    }
}
