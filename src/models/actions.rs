//! Play-by-play: actions and the participants involved in them.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{BASE_EVENT_STATE_ATTRIBUTES, COMMON_ATTRIBUTES};

static ACTION_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "actionAttributes",
    &[
        AttributeMapping::text("team-idref", "teamIdRef"),
        AttributeMapping::text("opposing-team-idref", "opposingTeamIdRef"),
        AttributeMapping::text("created", "created"),
        AttributeMapping::text("last-modified", "lastModified"),
        AttributeMapping::text("date-time", "dateTime"),
        AttributeMapping::text("result", "result"),
        AttributeMapping::integer("sequence-number", "sequenceNumber"),
        AttributeMapping::text("comment", "comment"),
        AttributeMapping::text("type", "type"),
        AttributeMapping::text("time-elapsed", "timeElapsed"),
        AttributeMapping::text("time-remaining", "timeRemaining"),
        AttributeMapping::integer("player-count", "playerCount"),
        AttributeMapping::integer("player-count-opposing", "playerCountOpposing"),
        AttributeMapping::text("start-location", "startLocation"),
        AttributeMapping::text("end-location", "endLocation"),
        AttributeMapping::text("zone", "zone"),
        AttributeMapping::text("power-play-time-remaining", "powerPlayTimeRemaining"),
        AttributeMapping::integer("power-play-advantage", "powerPlayAdvantage"),
        AttributeMapping::text("caller-type", "callerType"),
        AttributeMapping::text("strength", "strength"),
        AttributeMapping::integer("points", "points"),
        AttributeMapping::text("turnover-type", "turnoverType"),
        AttributeMapping::text("period-value", "periodValue"),
        AttributeMapping::text("period-length", "periodLength"),
        AttributeMapping::text("score-team", "scoreTeam"),
        AttributeMapping::text("score-team-opposing", "scoreTeamOpposing"),
        AttributeMapping::integer("timeouts-left", "timeoutsLeft"),
        AttributeMapping::text("timeout-duration", "timeoutDuration"),
        AttributeMapping::text("timeout-type", "timeoutType"),
        AttributeMapping::text("score-type", "scoreType"),
        AttributeMapping::text("save-type", "saveType"),
        AttributeMapping::text("save-method", "saveMethod"),
        AttributeMapping::text("pass-type", "passType"),
        AttributeMapping::text("pass-description", "passDescription"),
        AttributeMapping::text("pass-method", "passMethod"),
        AttributeMapping::text("shot-type", "shotType"),
        AttributeMapping::text("shot-distance", "shotDistance"),
        AttributeMapping::text("shot-distance-units", "shotDistanceUnits"),
        AttributeMapping::text("penalty-type", "penaltyType"),
        AttributeMapping::text("penalty-level", "penaltyLevel"),
        AttributeMapping::text("penalty-result", "penaltyResult"),
        AttributeMapping::text("penalty-side", "penaltySide"),
        AttributeMapping::text("penalty-length", "penaltyLength"),
        AttributeMapping::text("penalty-name", "penaltyName"),
        AttributeMapping::integer("penalty-count", "penaltyCount"),
        AttributeMapping::text("penalty-status", "penaltyStatus"),
        AttributeMapping::text("recipient-type", "recipientType"),
        AttributeMapping::text("score-attempt-type", "scoreAttemptType"),
        AttributeMapping::text("score-attempt-result", "scoreAttemptResult"),
        AttributeMapping::text("score-attempt-side", "scoreAttemptSide"),
        AttributeMapping::text("score-attempt-method", "scoreAttemptMethod"),
        AttributeMapping::text("score-attempt-situation", "scoreAttemptSituation"),
        AttributeMapping::text("goal-zone", "goalZone"),
        AttributeMapping::text("angle", "angle"),
        AttributeMapping::text("distance", "distance"),
        AttributeMapping::text("body-part", "bodyPart"),
        AttributeMapping::text("field-location", "fieldLocation"),
        AttributeMapping::text("goal-location", "goalLocation"),
        AttributeMapping::text("time-addition", "timeAddition"),
        AttributeMapping::integer("shootout-shot-order", "shootoutShotOrder"),
        AttributeMapping::text("faceoff-winner", "faceoffWinner"),
        AttributeMapping::text("substitution-reason", "substitutionReason"),
    ],
);

static PARTICIPANT_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "participantAttributes",
    &[
        AttributeMapping::text("idref", "idref"),
        AttributeMapping::text("role", "role"),
        AttributeMapping::text("result", "result"),
        AttributeMapping::text("field-location", "fieldLocation"),
        AttributeMapping::text("goals-cumulative", "goalsCumulative"),
        AttributeMapping::text("assists-cumulative", "assistsCumulative"),
        AttributeMapping::text("lineup-slot", "lineupSlot"),
        AttributeMapping::text("yards-gained", "yardsGained"),
        AttributeMapping::text("score-credit", "scoreCredit"),
    ],
);

mapped_entity! {
    /// A player or team involved in an action, and in what role.
    pub struct Participant {
        groups: [&COMMON_ATTRIBUTES, &PARTICIPANT_ATTRIBUTES],
    }
}

mapped_entity! {
    /// A single play. Actions nest: a drive contains plays, a play contains
    /// sub-plays.
    pub struct Action {
        groups: [&COMMON_ATTRIBUTES, &BASE_EVENT_STATE_ATTRIBUTES, &ACTION_ATTRIBUTES],
        many {
            actions: Action => "action" as "actions",
            participants: Participant => "participant" as "participants",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SportsMlError;
    use crate::mapping::MappedEntity;
    use crate::xml::parse_str;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_nested_actions_with_participants() {
        let element = parse_str(
            r#"<action id="drive.1" type="drive" team-idref="t.1" sequence-number="1">
  <action id="play.1" type="pass" sequence-number="2" period-time-remaining="12:04" player-count="11">
    <participant idref="p.1" role="passer"/>
    <participant idref="p.2" role="receiver" yards-gained="23"/>
  </action>
  <action id="play.2" type="rush" sequence-number="3"/>
</action>"#,
        )
        .unwrap();
        let action = Action::from_element(Some(&element)).unwrap();

        assert_eq!(action.actions.len(), 2);
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "id": "drive.1",
                "teamIdRef": "t.1",
                "sequenceNumber": 1,
                "type": "drive",
                "actions": [
                    {
                        "id": "play.1",
                        "periodTimeRemaining": "12:04",
                        "sequenceNumber": 2,
                        "type": "pass",
                        "playerCount": 11,
                        "participants": [
                            { "idref": "p.1", "role": "passer" },
                            { "idref": "p.2", "role": "receiver", "yardsGained": "23" }
                        ]
                    },
                    { "id": "play.2", "sequenceNumber": 3, "type": "rush" }
                ]
            })
        );
    }

    #[test]
    fn test_zero_integer_is_emitted() {
        let element = parse_str(r#"<action timeouts-left="0"/>"#).unwrap();
        let action = Action::from_element(Some(&element)).unwrap();
        assert_eq!(action.to_output()["timeoutsLeft"], json!(0));
    }

    #[test]
    fn test_non_numeric_sequence_number_fails() {
        let element = parse_str(r#"<action><action sequence-number="1a"/></action>"#).unwrap();
        assert!(matches!(
            Action::from_element(Some(&element)),
            Err(SportsMlError::AttributeCoercion { .. })
        ));
    }
}
