//! Statistics: per-team, per-player and per-official stats, generic stat
//! trees, wagering lines and the `statistic` container.
//!
//! Stats are layered the same way the schema layers them. Each layer is one
//! attribute group plus the child elements it introduces:
//!
//! | layer           | attributes                       | children                          |
//! |-----------------|----------------------------------|-----------------------------------|
//! | base            | common                           | rating, sports-property, stat     |
//! | base2           | `points` (integer)               | outcome-total, outcome-result     |
//! | base3           | coverage, stat attributes        | penalty-stats, award, rank        |
//! | generic entity  | `events-played` (integer), ...   | sub-score, event-record           |
//! | player          | `events-started` (integer), ...  |                                   |

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::entities::{Associate, Player, Team};
use crate::models::metadata::{Award, SportsContentCode};
use crate::models::newsml::{Name, SportsProperty};

static BASE2_STATS_ATTRIBUTES: AttributeGroup =
    AttributeGroup::new("base2Stats", &[AttributeMapping::integer("points", "points")]);

static STAT_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "statAttributes",
    &[
        AttributeMapping::text("score", "score"),
        AttributeMapping::text("score-opposing", "scoreOpposing"),
        AttributeMapping::text("score-average", "scoreAverage"),
        AttributeMapping::text("score-opposing-average", "scoreOpposingAverage"),
        AttributeMapping::text("score-units", "scoreUnits"),
        AttributeMapping::text("score-behind", "scoreBehind"),
        AttributeMapping::text("score-attempts", "scoreAttempts"),
        AttributeMapping::text("score-attempts-opposing", "scoreAttemptsOpposing"),
        AttributeMapping::text("score-attempts-on-goal", "scoreAttemptsOnGoal"),
        AttributeMapping::text("score-attempts-on-goal-opposing", "scoreAttemptsOnGoalOpposing"),
        AttributeMapping::text("score-percentage", "scorePercentage"),
        AttributeMapping::text("score-percentage-opposing", "scorePercentageOpposing"),
        AttributeMapping::text("result-effect", "resultEffect"),
        AttributeMapping::text("event-outcome", "eventOutcome"),
        AttributeMapping::text("event-standing-points", "eventStandingPoints"),
        AttributeMapping::text("event-standing-points-against", "eventStandingPointsAgainst"),
        AttributeMapping::text("score-type", "scoreType"),
        AttributeMapping::text("events-remaining", "eventsRemaining"),
        AttributeMapping::text("time-of-possession", "timeOfPossession"),
        AttributeMapping::text("time-of-possession-percentage", "timeOfPossessionPercentage"),
        AttributeMapping::text(
            "time-of-possession-percentage-opposing",
            "timeOfPossessionPercentageOpposing",
        ),
        AttributeMapping::text("time-of-possession-average", "timeOfPossessionAverage"),
        AttributeMapping::text(
            "time-of-possession-average-opposing",
            "timeOfPossessionAverageOpposing",
        ),
        AttributeMapping::text("series-score", "seriesScore"),
        AttributeMapping::text("series-score-opposing", "seriesScoreOpposing"),
        AttributeMapping::text("adjusted-score-for", "adjustedScoreFor"),
        AttributeMapping::text("adjusted-score-against", "adjustedScoreAgainst"),
    ],
);

static GENERIC_ENTITY_STATS_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "baseGenericEntityStats",
    &[
        AttributeMapping::integer("events-played", "eventsPlayed"),
        AttributeMapping::text("time-played-total", "timePlayedTotal"),
    ],
);

static PLAYER_STATS_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "basePlayerStats",
    &[
        AttributeMapping::text("time-played-event", "timePlayed"),
        AttributeMapping::text("time-played-event-average", "timePlayedEventAverage"),
        AttributeMapping::integer("events-started", "eventsStarted"),
        AttributeMapping::text("date-time-entered", "dateTimeEntered"),
        AttributeMapping::text("date-time-exited", "dateTimeExited"),
        AttributeMapping::text("event-time-entered", "eventTimeEntered"),
        AttributeMapping::text("event-time-exited", "eventTimeExited"),
    ],
);

static GENERIC_STAT_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "genericStatAttributes",
    &[
        AttributeMapping::text("sport", "sport"),
        AttributeMapping::text("class", "class"),
        AttributeMapping::text("stat-type", "statType"),
        AttributeMapping::text("value-type", "valueType"),
        AttributeMapping::text("value", "value"),
    ],
);

mapped_entity! {
    /// A typed stat value. Nested stats refine their parent.
    pub struct GenericStat {
        groups: [&GENERIC_STAT_ATTRIBUTES, &COVERAGE_ATTRIBUTES],
        many {
            names: Name => "name" as "names",
            stats: GenericStat => "stat" as "stats",
        }
    }
}

static RATING_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "rating",
    &[
        AttributeMapping::text("rating-type", "ratingType"),
        AttributeMapping::text("rating-maker", "ratingMaker"),
        AttributeMapping::text("rating-maker-key", "ratingMakerKey"),
        AttributeMapping::text("rating-maker-name", "ratingMakerName"),
        AttributeMapping::text("rating-value", "ratingValue"),
        AttributeMapping::text("rating-value-previous", "ratingValuePrevious"),
        AttributeMapping::text("rating-rank", "ratingRank"),
        AttributeMapping::text("rating-rank-previous", "ratingRankPrevious"),
    ],
);

mapped_entity! {
    /// An opinion of a rating maker about a participant.
    pub struct Rating {
        groups: [&COMMON_ATTRIBUTES, &RATING_ATTRIBUTES],
    }
}

static RANK_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "rank",
    &[
        AttributeMapping::text("type", "type"),
        AttributeMapping::text("value", "value"),
        AttributeMapping::text("value-previous", "valuePrevious"),
        AttributeMapping::text("direction", "direction"),
    ],
);

mapped_entity! {
    pub struct Rank {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &RANK_ATTRIBUTES],
    }
}

static OUTCOME_TOTAL_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "outcomeTotal",
    &[
        AttributeMapping::text("outcome-holder", "outcomeHolder"),
        AttributeMapping::text("rank", "rank"),
        AttributeMapping::text("wins", "wins"),
        AttributeMapping::text("losses", "losses"),
        AttributeMapping::text("ties", "ties"),
        AttributeMapping::text("undecideds", "undecideds"),
        AttributeMapping::text("winning-percentage", "winningPercentage"),
        AttributeMapping::text("points-scored-for", "pointsScoredFor"),
        AttributeMapping::text("points-scored-against", "pointsScoredAgainst"),
        AttributeMapping::text("points-difference", "pointsDifference"),
        AttributeMapping::text("standing-points", "standingPoints"),
        AttributeMapping::text("games-back", "gamesBack"),
        AttributeMapping::text("streak-type", "streakType"),
        AttributeMapping::text("streak-total", "streakTotal"),
        AttributeMapping::text("streak-start", "streakStart"),
        AttributeMapping::text("streak-end", "streakEnd"),
    ],
);

mapped_entity! {
    /// Won/lost/tied totals over some scope, as used in standings tables.
    pub struct OutcomeTotal {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &OUTCOME_TOTAL_ATTRIBUTES],
    }
}

static OUTCOME_RESULT_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "outcomeResult",
    &[
        AttributeMapping::text("outcome", "outcome"),
        AttributeMapping::text("result-effect", "resultEffect"),
        AttributeMapping::text("event-idref", "eventIdRef"),
    ],
);

mapped_entity! {
    /// Result of a single contest for the entity: win, loss, tie and so on.
    pub struct OutcomeResult {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &OUTCOME_RESULT_ATTRIBUTES],
    }
}

static PENALTY_STATS_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "penaltyStats",
    &[
        AttributeMapping::text("type", "type"),
        AttributeMapping::integer("count", "count"),
        AttributeMapping::text("value", "value"),
    ],
);

mapped_entity! {
    /// Number of penalties of one type, for a team or a player.
    pub struct PenaltyStats {
        groups: [&COMMON_ATTRIBUTES, &PENALTY_STATS_ATTRIBUTES],
    }
}

static SUB_SCORE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "subScore",
    &[
        AttributeMapping::text("period-value", "periodValue"),
        AttributeMapping::text("score", "score"),
        AttributeMapping::text("sub-score-type", "subScoreType"),
        AttributeMapping::text("sub-score-key", "subScoreKey"),
        AttributeMapping::text("sub-score-name", "subScoreName"),
        AttributeMapping::text("rank", "rank"),
        AttributeMapping::text("total-score", "totalScore"),
        AttributeMapping::text("score-attempts", "scoreAttempts"),
    ],
);

mapped_entity! {
    /// Score for a single period, inning or other scoring unit.
    pub struct SubScore {
        groups: [&COMMON_ATTRIBUTES, &SUB_SCORE_ATTRIBUTES],
    }
}

static EVENT_RECORD_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "eventRecord",
    &[
        AttributeMapping::text("record-type", "recordType"),
        AttributeMapping::text("record-level", "recordLevel"),
        AttributeMapping::text("record-label", "recordLabel"),
        AttributeMapping::text("record-holder-idref", "recordHolderIdRef"),
        AttributeMapping::text("comparison-to-record", "comparisonToRecord"),
        AttributeMapping::text("date-time-set", "dateTimeSet"),
    ],
);

mapped_entity! {
    pub struct EventRecord {
        groups: [&COMMON_ATTRIBUTES, &EVENT_RECORD_ATTRIBUTES],
    }
}

mapped_entity! {
    /// Stats about the work of an official.
    pub struct OfficialStats {
        groups: [&COMMON_ATTRIBUTES],
        many {
            ratings: Rating => "rating" as "ratings",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            stats: GenericStat => "stat" as "stats",
        }
    }
}

mapped_entity! {
    /// Stats about a coach, owner or other associate.
    pub struct AssociateStats {
        groups: [&COMMON_ATTRIBUTES, &BASE2_STATS_ATTRIBUTES],
        many {
            ratings: Rating => "rating" as "ratings",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            stats: GenericStat => "stat" as "stats",
            outcome_totals: OutcomeTotal => "outcome-total" as "outcomeTotals",
            outcome_results: OutcomeResult => "outcome-result" as "outcomeResults",
        }
    }
}

mapped_entity! {
    /// Stats applying to a team as a whole.
    pub struct TeamStats {
        groups: [
            &COMMON_ATTRIBUTES,
            &BASE2_STATS_ATTRIBUTES,
            &COVERAGE_ATTRIBUTES,
            &STAT_ATTRIBUTES,
            &GENERIC_ENTITY_STATS_ATTRIBUTES,
        ],
        many {
            ratings: Rating => "rating" as "ratings",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            stats: GenericStat => "stat" as "stats",
            outcome_totals: OutcomeTotal => "outcome-total" as "outcomeTotals",
            outcome_results: OutcomeResult => "outcome-result" as "outcomeResults",
            penalty_stats: PenaltyStats => "penalty-stats" as "penaltyStats",
            awards: Award => "award" as "awards",
            ranks: Rank => "rank" as "ranks",
            sub_scores: SubScore => "sub-score" as "subScores",
            event_records: EventRecord => "event-record" as "eventRecords",
        }
    }
}

mapped_entity! {
    /// How a player performed. Generally changes over the course of an event.
    pub struct PlayerStats {
        groups: [
            &COMMON_ATTRIBUTES,
            &BASE2_STATS_ATTRIBUTES,
            &COVERAGE_ATTRIBUTES,
            &STAT_ATTRIBUTES,
            &GENERIC_ENTITY_STATS_ATTRIBUTES,
            &PLAYER_STATS_ATTRIBUTES,
        ],
        many {
            ratings: Rating => "rating" as "ratings",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            stats: GenericStat => "stat" as "stats",
            outcome_totals: OutcomeTotal => "outcome-total" as "outcomeTotals",
            outcome_results: OutcomeResult => "outcome-result" as "outcomeResults",
            penalty_stats: PenaltyStats => "penalty-stats" as "penaltyStats",
            awards: Award => "award" as "awards",
            ranks: Rank => "rank" as "ranks",
            sub_scores: SubScore => "sub-score" as "subScores",
            event_records: EventRecord => "event-record" as "eventRecords",
        }
    }
}

static WAGER_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "baseWagering",
    &[
        AttributeMapping::text("bookmaker-key", "bookmakerKey"),
        AttributeMapping::text("bookmaker-name", "bookmakerName"),
        AttributeMapping::text("date-time", "dateTime"),
        AttributeMapping::text("team-idref", "teamIdRef"),
        AttributeMapping::text("line", "line"),
        AttributeMapping::text("line-opening", "lineOpening"),
        AttributeMapping::text("value", "value"),
        AttributeMapping::text("value-opening", "valueOpening"),
        AttributeMapping::text("prediction", "prediction"),
        AttributeMapping::text("comment", "comment"),
    ],
);

mapped_entity! {
    /// One line offered by a bookmaker: moneyline, spread, total or odds.
    pub struct Wager {
        groups: [&COMMON_ATTRIBUTES, &WAGER_ATTRIBUTES],
    }
}

static WAGERING_STATS_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "wageringStats",
    &[AttributeMapping::text("comment", "comment")],
);

mapped_entity! {
    /// Betting lines for a participant or an event.
    pub struct WageringStats {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &WAGERING_STATS_ATTRIBUTES],
        many {
            moneylines: Wager => "moneyline" as "moneylines",
            total_scores: Wager => "total-score" as "totalScores",
            straight_spreads: Wager => "straight-spread" as "straightSpreads",
            odds: Wager => "odds" as "odds",
        }
    }
}

static STATUS_CHANGE_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "statusChange",
    &[
        AttributeMapping::text("changer-idref", "changerIdRef"),
        AttributeMapping::text("status-change-type", "statusChangeType"),
        AttributeMapping::text("original-status", "originalStatus"),
        AttributeMapping::text("new-status", "newStatus"),
        AttributeMapping::text("original-idref", "originalIdRef"),
        AttributeMapping::text("new-idref", "newIdRef"),
    ],
);

mapped_entity! {
    /// Injury, trade, cut or other change in a participant's status.
    pub struct StatusChange {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &STATUS_CHANGE_ATTRIBUTES],
    }
}

mapped_entity! {
    pub struct StatisticMetadata {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
        }
    }
}

static STATISTIC_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "statistic",
    &[
        AttributeMapping::text("type", "type"),
        AttributeMapping::text("content-label", "contentLabel"),
    ],
);

mapped_entity! {
    /// Statistics not tied to one event: leaders, season totals, transactions.
    pub struct Statistic {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &STATISTIC_ATTRIBUTES],
        one {
            statistic_metadata: StatisticMetadata => "statistic-metadata" as "statisticMetadata",
        }
        many {
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
            teams: Team => "team" as "teams",
            players: Player => "player" as "players",
            associates: Associate => "associate" as "associates",
            status_changes: StatusChange => "status-change" as "statusChanges",
        }
    }
}
